use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

mod logging;
mod strip;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Re-enable files by stripping the `.disabled` suffix from every file under a directory"
)]
pub struct Cli {
    /// Directory to scan recursively (defaults to current directory)
    #[arg(default_value = ".")]
    root: String,
}

fn main() -> Result<()> {
    logging::init_logging();
    let cli = Cli::parse();

    let root = expand_root(&cli.root);
    let mut stdout = io::stdout().lock();
    strip::process(&root, &mut stdout)?;

    Ok(())
}

fn expand_root(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}
