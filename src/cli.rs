use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tasklist")]
#[command(about = "A single-view terminal task list with bulk selection", long_about = None)]
pub struct Cli {
    /// Color theme: default, dark or light
    #[arg(long)]
    pub theme: Option<String>,

    /// Read configuration from this file instead of ~/.tasklist-tui/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable mouse capture (hover and clicks)
    #[arg(long)]
    pub no_mouse: bool,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    pub init_config: bool,

    /// Start with this task in the list (repeatable)
    #[arg(short, long = "task", value_name = "LABEL")]
    pub tasks: Vec<String>,
}
