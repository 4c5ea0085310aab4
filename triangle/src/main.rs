use clap::Parser;
use color_eyre::Result;

use common::{debug, run};
use triangle::{Triangle, TriangleConfig};

mod triangle;

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = TriangleConfig::parse();
    debug::set_up_logging(config.window.log_level)?;

    let window_attributes = config.window.window_attributes();
    run::run::<Triangle>(config, window_attributes)
}
