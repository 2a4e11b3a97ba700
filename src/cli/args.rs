use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shopping-cart")]
#[command(about = "Browse a small catalog, fill a cart and check out from the console")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// File that receives one line per paid order
    #[arg(long, value_name = "PATH")]
    pub audit_log: Option<PathBuf>,

    /// Store name shown in the welcome banner
    #[arg(long, value_name = "NAME")]
    pub store_name: Option<String>,
}
