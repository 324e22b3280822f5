// src/cli.rs
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "slice", version, about = "Order pizza from the terminal")]
pub struct Cli {
    /// Kitchen order endpoint; overrides the config file
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 60.0
    )]
    pub frame_rate: f64,
}
