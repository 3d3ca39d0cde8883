
use clap::Args;
use log::info;
use serde::Serialize;
use std::path::PathBuf;
use strum_macros::EnumString;

use crate::cli::core::{check_optional_output, CostSettings, AFTER_HELP, FULL_VERSION};
use crate::dag::builder::{GraphConfig, GraphConfigBuilder};

/// Image formats we can ask the external renderer for
#[derive(Clone, Copy, Default, Debug, strum_macros::Display, EnumString, Serialize, clap::ValueEnum)]
pub enum ImageFormat {
    /// Portable network graphics
    #[default]
    #[strum(ascii_case_insensitive, serialize = "png")]
    #[clap(name = "png")]
    Png,
    /// Scalable vector graphics
    #[strum(ascii_case_insensitive, serialize = "svg")]
    #[clap(name = "svg")]
    Svg,
    /// Portable document format
    #[strum(ascii_case_insensitive, serialize = "pdf")]
    #[clap(name = "pdf")]
    Pdf,
}

#[derive(Args, Clone, Default, Serialize)]
#[clap(author, about,
    after_help = &**AFTER_HELP
)]
pub struct GraphSettings {
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

    /// Output Graphviz DOT file (.gz supported)
    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output-dot")]
    #[clap(value_name = "DOT")]
    #[clap(help_heading = Some("Input/Output"))]
    pub output_dot: PathBuf,

    /// Optional output JSON with the nodes and edges (.gz supported)
    #[clap(long = "output-json")]
    #[clap(value_name = "JSON")]
    #[clap(help_heading = Some("Input/Output"))]
    pub output_json: Option<PathBuf>,

    /// Skips printing the full alignment table before the report
    #[clap(long = "skip-table")]
    #[clap(help_heading = Some("Input/Output"))]
    pub skip_table: bool,

    /// Image format requested from the renderer
    #[clap(long = "format")]
    #[clap(value_name = "FORMAT")]
    #[clap(help_heading = Some("Graph parameters"))]
    #[clap(default_value_t = ImageFormat::Png)]
    pub image_format: ImageFormat,

    /// Separator between the characters of a substitution node label, anything but "|" draws plain box nodes
    #[clap(long = "label-separator")]
    #[clap(value_name = "STRING")]
    #[clap(help_heading = Some("Graph parameters"))]
    #[clap(default_value = "|")]
    pub label_separator: String,

    /// Enable verbose output.
    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl GraphSettings {
    /// Converts the user settings into the DAG labeling/export config.
    pub fn graph_config(&self) -> anyhow::Result<GraphConfig> {
        let config = GraphConfigBuilder::default()
            .label_separator(self.label_separator.clone())
            .image_format(self.image_format.to_string())
            .build()?;
        Ok(config)
    }
}

pub fn check_graph_settings(mut settings: GraphSettings) -> anyhow::Result<GraphSettings> {
    // hard code the version in
    settings.levenshtein_dag_version = FULL_VERSION.clone();
    info!("levenshtein-dag version: {:?}", &settings.levenshtein_dag_version);
    info!("Sub-command: graph");
    info!("Inputs:");
    info!("\tSource: {:?} (length = {})", &settings.source, settings.source.chars().count());
    info!("\tTarget: {:?} (length = {})", &settings.target, settings.target.chars().count());

    settings.costs.check_and_log()?;

    info!("Graph parameters:");
    info!("\tImage format: {}", settings.image_format);
    info!("\tLabel separator: {:?}", &settings.label_separator);
    info!("\tPrint table: {}", if settings.skip_table { "DISABLED" } else { "ENABLED" });

    // outputs
    check_optional_output(Some(settings.output_dot.as_path()), "Output DOT")?;
    check_optional_output(settings.output_json.as_deref(), "Output JSON")?;
    info!("Outputs:");
    info!("\tDOT: {:?}", &settings.output_dot);
    if let Some(filename) = settings.output_json.as_deref() {
        info!("\tJSON: {filename:?}");
    }

    Ok(settings)
}
