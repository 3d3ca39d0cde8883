
use clap::Args;
use log::info;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::core::{check_optional_output, CostSettings, AFTER_HELP, FULL_VERSION};

#[derive(Args, Clone, Default, Serialize)]
#[clap(author, about,
    after_help = &**AFTER_HELP
)]
pub struct AlignSettings {
    // filled in after parsing so saved settings record the version
    #[clap(skip)]
    levenshtein_dag_version: String,

    /// The sequence being transformed
    #[clap(required = true)]
    #[clap(value_name = "SOURCE")]
    pub source: String,

    /// The sequence to transform into
    #[clap(required = true)]
    #[clap(value_name = "TARGET")]
    pub target: String,

    #[command(flatten)]
    pub costs: CostSettings,

    /// Skips printing the full alignment table before the report
    #[clap(long = "skip-table")]
    #[clap(help_heading = Some("Input/Output"))]
    pub skip_table: bool,

    /// Optional output TSV with one row per operation (.gz supported)
    #[clap(long = "output-report")]
    #[clap(value_name = "TSV")]
    #[clap(help_heading = Some("Input/Output"))]
    pub output_report: Option<PathBuf>,

    /// Optional output JSON with the table and edit script (.gz supported)
    #[clap(long = "output-json")]
    #[clap(value_name = "JSON")]
    #[clap(help_heading = Some("Input/Output"))]
    pub output_json: Option<PathBuf>,

    /// Enable verbose output.
    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

pub fn check_align_settings(mut settings: AlignSettings) -> anyhow::Result<AlignSettings> {
    // hard code the version in
    settings.levenshtein_dag_version = FULL_VERSION.clone();
    info!("levenshtein-dag version: {:?}", &settings.levenshtein_dag_version);
    info!("Sub-command: align");
    info!("Inputs:");
    info!("\tSource: {:?} (length = {})", &settings.source, settings.source.chars().count());
    info!("\tTarget: {:?} (length = {})", &settings.target, settings.target.chars().count());

    settings.costs.check_and_log()?;

    // outputs
    check_optional_output(settings.output_report.as_deref(), "Output report")?;
    check_optional_output(settings.output_json.as_deref(), "Output JSON")?;
    info!("Outputs:");
    info!("\tPrint table: {}", if settings.skip_table { "DISABLED" } else { "ENABLED" });
    if let Some(filename) = settings.output_report.as_deref() {
        info!("\tReport: {filename:?}");
    }
    if let Some(filename) = settings.output_json.as_deref() {
        info!("\tJSON: {filename:?}");
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::core::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_parse_align() {
        let cli = Cli::try_parse_from([
            "levenshtein-dag", "align", "kitten", "sitting", "--skip-table", "--insertion-cost", "3", "-vv"
        ]).unwrap();
        let settings = match cli.command {
            Commands::Align(settings) => *settings,
            _ => panic!("expected align subcommand")
        };
        assert_eq!(settings.source, "kitten");
        assert_eq!(settings.target, "sitting");
        assert!(settings.skip_table);
        assert_eq!(settings.costs.insertion_cost, 3);
        assert_eq!(settings.costs.deletion_cost, 7);
        assert_eq!(settings.verbosity, 2);

        let settings = check_align_settings(settings).unwrap();
        assert_eq!(settings.levenshtein_dag_version, *FULL_VERSION);
    }

    #[test]
    fn test_missing_target() {
        assert!(Cli::try_parse_from(["levenshtein-dag", "align", "kitten"]).is_err());
    }

    #[test]
    fn test_empty_sequences_allowed() {
        let cli = Cli::try_parse_from(["levenshtein-dag", "align", "", "abc"]).unwrap();
        assert!(matches!(cli.command, Commands::Align(s) if s.source.is_empty() && !s.skip_table));
    }

    #[test]
    fn test_zero_cost_rejected() {
        let cli = Cli::try_parse_from(["levenshtein-dag", "align", "a", "b", "--substitution-cost", "0"]).unwrap();
        let settings = match cli.command {
            Commands::Align(settings) => *settings,
            _ => panic!("expected align subcommand")
        };
        assert!(check_align_settings(settings).is_err());
    }
}
