use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "hr")]
#[command(about = "HR desk: sign in and browse the HR screens from a line shell")]
#[command(version)]
pub struct Cli {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Config directory (default: $HR_CONFIG_DIR or ./.hr)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,
}
