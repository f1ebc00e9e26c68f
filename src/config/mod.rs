pub mod toml_config;

pub use toml_config::{LogFormat, SiteConfig};

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio site backend: profile pages and contact relay")]
pub struct CliConfig {
    /// Path to the site TOML configuration
    #[arg(short, long, default_value = "folio.toml")]
    pub config: String,

    /// Override `server.listen` from the config file
    #[arg(long)]
    pub listen: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Load and validate everything, print a summary, then exit
    #[arg(long)]
    pub dry_run: bool,
}
