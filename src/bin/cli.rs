// src/bin/cli.rs
use bin_lookup::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    if !cli::run()? {
        std::process::exit(1);
    }
    Ok(())
}
