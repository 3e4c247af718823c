use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::FileSelector;

/// Open source license notices and component search for CycloneDX SBOMs
#[derive(Parser, Debug)]
#[command(name = "sbom-notice")]
#[command(version)]
#[command(
    about = "Generate open source license notices and search components in CycloneDX SBOMs",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to ./sbom-notice.config.yml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a license notice for an application or a local SBOM file
    Notice(NoticeArgs),
    /// Search one or more SBOM files for components by name
    Search(SearchArgs),
}

#[derive(clap::Args, Debug)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["app_name", "sbom_file"])
))]
pub struct NoticeArgs {
    /// Application name as registered in the SCA service
    #[arg(long, value_name = "NAME")]
    pub app_name: Option<String>,

    /// Local CycloneDX JSON file
    #[arg(long, value_name = "FILE")]
    pub sbom_file: Option<String>,

    /// Directory for the notice file (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Base URL of the SCA service
    #[arg(long, env = "SBOM_NOTICE_SERVICE_URL", value_name = "URL")]
    pub service_url: Option<String>,

    /// Bearer token for the SCA service
    #[arg(long, env = "SBOM_NOTICE_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Request timeout for the SCA service in seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// SBOM files to search, or ALL for every .json file in the current directory
    #[arg(long = "sbom-file", required = true, num_args = 1.., value_name = "FILE|ALL")]
    pub sbom_files: Vec<String>,

    /// Component name or name fragment (case-insensitive)
    #[arg(long, value_name = "TERM")]
    pub component: String,

    /// Write matches to a CSV file
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,
}

impl SearchArgs {
    pub fn selectors(&self) -> Vec<FileSelector> {
        self.sbom_files
            .iter()
            .map(|value| FileSelector::parse(value))
            .collect()
    }
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
