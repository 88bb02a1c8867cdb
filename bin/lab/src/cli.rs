use std::path::PathBuf;

use clap::Parser;

pub const APP_NAME: &str = "lab";

#[derive(Parser, Debug, PartialEq, Clone)]
#[command(
    name = APP_NAME,
    author = "https://github.com/ethlab/lab/graphs/contributors",
    about = "Track the selected Ethereum network's beacon clock",
    version
)]
pub struct LabConfig {
    #[arg(
        long = "network",
        help = "Select this network at startup, overriding the persisted choice"
    )]
    pub network: Option<String>,

    #[arg(
        long = "networks-file",
        help = "Path to a YAML file listing the available networks; defaults to the built-in presets"
    )]
    pub networks_file: Option<PathBuf>,

    #[arg(long = "data-dir", help = "The directory for storing persisted state")]
    pub data_dir: Option<PathBuf>,

    #[arg(
        long = "ephemeral",
        short = 'e',
        help = "Use temporary data storage that is discarded between runs"
    )]
    pub ephemeral: bool,
}

impl LabConfig {
    pub fn from_cli() -> Self {
        Self::parse()
    }
}
