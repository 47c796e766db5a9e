use clap::Parser;
use std::path::PathBuf;

/// Interactive tournament organizer.
#[derive(Parser, Debug)]
#[command(name = "grandprix", version, about = "Grand Prix tournament organizer")]
pub struct GrandPrixCli {
    /// Config file (defaults to $GRANDPRIX_CONFIG, then ./grandprix.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Save directory for this run only; not written to the config
    #[arg(long = "save-dir")]
    pub save_dir: Option<PathBuf>,
}
