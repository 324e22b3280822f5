mod action;
mod app;
mod cli;
mod components;
mod config;
mod errors;
mod logging;
mod pages;
mod services;
mod state;
mod tui;

use clap::Parser;
use color_eyre::Result;

use crate::{app::App, cli::Cli};

#[tokio::main]
async fn main() -> Result<()> {
    crate::errors::init()?;
    crate::config::ensure_data_and_config_dirs_exist()?;
    crate::logging::init()?;

    let args = Cli::parse();
    let mut app = App::new(args)?;
    app.run().await?;
    Ok(())
}
