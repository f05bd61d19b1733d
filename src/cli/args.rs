use clap::Parser;
use std::path::PathBuf;

use logogen::types::DEFAULT_ASSETS_DIR;

#[derive(Parser)]
#[command(name = "logogen", version, about = "LOGOGEN CLI")]
pub struct CliArgs {
    /// Assets directory containing logo.png; outputs are written alongside it
    #[arg(long, default_value = DEFAULT_ASSETS_DIR)]
    pub assets_dir: PathBuf,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
