use clap::{Parser, Subcommand};
use std::path::PathBuf;

const EXAMPLES: &str = "\
Example:
  $ currencli convert
  $ currencli list
  $ currencli save
  $ currencli favorites";

#[derive(Parser, Debug)]
#[command(name = "currencli")]
#[command(about = "currencli: Currency Converter CLI Tool.")]
#[command(version)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Print debug diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding config.toml
    #[arg(long, global = true, env = "CURRENCLI_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[arg(long, global = true, env = "CURRENCLI_API_URL", hide = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Convert an amount from one currency to another
    Convert,
    /// List current exchange rates for a specified currency
    List,
    /// Save favorite currency pairs for quick access
    Save,
    /// Show favorite currency pairs
    Favorites,
}
