use clap::Parser;
use color_eyre::Result;

use clear::{Clear, ClearConfig};
use common::{debug, run};

mod clear;

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = ClearConfig::parse();
    debug::set_up_logging(config.window.log_level)?;

    let window_attributes = config.window.window_attributes();
    run::run::<Clear>(config, window_attributes)
}
