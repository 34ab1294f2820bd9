//! castpress CLI — podcast catalog static-site toolchain.
//!
//! Reconciles manually edited episode descriptions into the canonical
//! catalog and emits the site's data files and HTML fragments.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
