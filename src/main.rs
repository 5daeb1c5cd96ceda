pub mod animation;
pub mod app;
pub mod array;
pub mod cancellation;
pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod renderer;
pub mod session;
pub mod sorting_algorithms;
pub mod terminal_ui;

use crate::config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    logging::init(config.log_file.as_deref())?;
    app::run(config)?;
    Ok(())
}
