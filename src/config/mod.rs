pub mod cli;
pub mod layout_config;

use crate::core::layout::{LAYOUT_CAPTIONS, LAYOUT_SPECIAL_GUEST};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "roster-gen")]
#[command(about = "Generate a volleyball lineup HTML page from a CSV roster")]
pub struct CliConfig {
    /// Roster CSV with number, first_name and last_name columns
    #[arg(default_value = "roster.csv")]
    pub roster_path: String,

    /// HTML template containing the gridster container
    #[arg(default_value = "vb.html")]
    pub template_path: String,

    /// Where to write the generated page
    #[arg(default_value = "index.html")]
    pub output_path: String,

    /// Named layout policy: special-guest or captions
    #[arg(long, default_value = LAYOUT_SPECIAL_GUEST)]
    pub layout: String,

    /// TOML file with a custom layout policy; overrides --layout
    #[arg(long)]
    pub layout_config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn roster_path(&self) -> &str {
        &self.roster_path
    }

    fn template_path(&self) -> &str {
        &self.template_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn layout(&self) -> &str {
        &self.layout
    }

    fn layout_config(&self) -> Option<&str> {
        self.layout_config.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_file_exists("roster_path", &self.roster_path)?;
        validation::validate_file_exists("template_path", &self.template_path)?;
        validation::validate_non_empty_string("output_path", &self.output_path)?;
        validation::validate_path("output_path", &self.output_path)?;

        match &self.layout_config {
            Some(path) => validation::validate_file_exists("layout_config", path)?,
            None => validation::validate_one_of(
                "layout",
                &self.layout,
                &[LAYOUT_SPECIAL_GUEST, LAYOUT_CAPTIONS],
            )?,
        }

        Ok(())
    }
}
