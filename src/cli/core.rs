
use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use chrono::Datelike;
use lazy_static::lazy_static;
use log::info;
use serde::Serialize;
use std::path::Path;

use crate::cli::align::AlignSettings;
use crate::cli::graph::GraphSettings;
use crate::data_types::cost_model::{CostModel, CostModelBuilder};

lazy_static! {
    /// Stores the full version string we plan to use, which is generated in build.rs
    /// # Examples
    /// * `0.3.1-6bb9635-dirty` - while on a dirty branch
    /// * `0.3.1-6bb9635` - with a fresh commit
    pub static ref FULL_VERSION: String = format!("{}-{}", env!("CARGO_PKG_VERSION"), env!("VERGEN_GIT_DESCRIBE"));

    /// Shared after help string containing the legalese.
    pub static ref AFTER_HELP: String = format!("Copyright (C) 2019-{}     levenshtein-dag contributors
This program comes with ABSOLUTELY NO WARRANTY; it is distributed under the MIT license.", chrono::Utc::now().year());
}

#[derive(Parser)]
#[clap(author,
    version = &**FULL_VERSION,
    about,
    after_help = &**AFTER_HELP)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

/// levenshtein-dag, weighted edit-distance alignment with alternate indel orderings.
/// Select a subcommand to see more usage information:
#[derive(Subcommand)]
pub enum Commands {
    /// Aligns two sequences and reports the edit script
    Align(Box<AlignSettings>),
    /// Aligns two sequences and exports the branch DAG of the edit script
    Graph(Box<GraphSettings>)
}

pub fn get_cli() -> Cli {
    Cli::parse()
}

/// Operation costs shared by all subcommands
#[derive(Args, Clone, Debug, Serialize)]
pub struct CostSettings {
    /// Cost of replacing one character with another
    #[clap(long = "substitution-cost")]
    #[clap(value_name = "INT")]
    #[clap(help_heading = Some("Cost model"))]
    #[clap(default_value = "10")]
    pub substitution_cost: usize,

    /// Cost of inserting a target character
    #[clap(long = "insertion-cost")]
    #[clap(value_name = "INT")]
    #[clap(help_heading = Some("Cost model"))]
    #[clap(default_value = "7")]
    pub insertion_cost: usize,

    /// Cost of deleting a source character
    #[clap(long = "deletion-cost")]
    #[clap(value_name = "INT")]
    #[clap(help_heading = Some("Cost model"))]
    #[clap(default_value = "7")]
    pub deletion_cost: usize,
}

impl Default for CostSettings {
    fn default() -> Self {
        let costs = CostModel::default();
        Self {
            substitution_cost: costs.substitution(),
            insertion_cost: costs.insertion(),
            deletion_cost: costs.deletion()
        }
    }
}

impl CostSettings {
    /// Converts the user settings into a validated cost model.
    /// # Errors
    /// * if any of the costs are 0 or above the cost cap
    pub fn cost_model(&self) -> anyhow::Result<CostModel> {
        let cost_model = CostModelBuilder::default()
            .substitution(self.substitution_cost)
            .insertion(self.insertion_cost)
            .deletion(self.deletion_cost)
            .build()
            .context("Error while building cost model")?;
        Ok(cost_model)
    }

    /// Validates the costs and dumps them to the logger
    /// # Errors
    /// * if any of the costs are 0 or above the cost cap
    pub fn check_and_log(&self) -> anyhow::Result<()> {
        self.cost_model()?;
        info!("Cost model:");
        info!("\tMatch: 0");
        info!("\tSubstitution: {}", self.substitution_cost);
        info!("\tInsertion: {}", self.insertion_cost);
        info!("\tDeletion: {}", self.deletion_cost);
        Ok(())
    }
}

/// Checks that an output file can be created, i.e. its parent folder exists
/// # Arguments
/// * `opt_filename` - the optional file path to check
/// * `label` - the label to use for error messages
pub fn check_optional_output(opt_filename: Option<&Path>, label: &str) -> anyhow::Result<()> {
    if let Some(filename) = opt_filename {
        let parent = filename.parent().unwrap_or(Path::new(""));
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            bail!("{} parent folder does not exist: \"{}\"", label, parent.display());
        }
    }

    // file either was not specified OR it can be created
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cost_settings() {
        let settings = CostSettings::default();
        assert_eq!(settings.cost_model().unwrap(), CostModel::default());

        let settings = CostSettings { insertion_cost: 0, ..Default::default() };
        let error = settings.cost_model().unwrap_err();
        assert_eq!(format!("{error:#}"), "Error while building cost model: insertion cost must be >0");

        let settings = CostSettings { deletion_cost: usize::MAX, ..Default::default() };
        assert!(settings.check_and_log().is_err());
    }

    #[test]
    fn test_check_optional_output() {
        assert!(check_optional_output(None, "Report").is_ok());
        assert!(check_optional_output(Some(Path::new("report.tsv")), "Report").is_ok());
        let tmp_fn = std::env::temp_dir().join("report.tsv");
        assert!(check_optional_output(Some(&tmp_fn), "Report").is_ok());
        assert!(check_optional_output(Some(Path::new("/this/folder/does/not/exist/report.tsv")), "Report").is_err());
    }
}
