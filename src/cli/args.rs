//! CLI argument structures

use crate::app::AppConfig;
use clap::Parser;
use std::path::PathBuf;

/// Build a takeaway order interactively, or finish one saved earlier
#[derive(Parser, Debug)]
#[command(name = "takeaway")]
#[command(about = "takeaway - Order a hamburger or pizza from the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory to save the finished order in (defaults to the system temp directory)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    /// Build the application config: defaults, then environment, then flags
    pub fn to_config(&self) -> anyhow::Result<AppConfig> {
        let config = AppConfig::new(self.verbose)?.merge_env_vars();
        Ok(match &self.output_dir {
            Some(dir) => config.with_output_dir(dir.clone()),
            None => config,
        })
    }
}
