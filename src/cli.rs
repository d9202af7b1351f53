use clap::{ArgGroup, Args, Parser, Subcommand};
use irrigops::IrrigationMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "irrigops",
    version,
    about = "Evapotranspiration-driven irrigation decisions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate reference evapotranspiration from weather readings
    Et0(Et0Args),
    /// Decide whether and how long to irrigate
    Decide(DecideArgs),
    /// Run the reference scenarios
    Demo,
    /// Write a config file interactively
    Init,
    /// Validate config and print derived constants
    Check,
}

#[derive(Args, Debug)]
pub struct WeatherArgs {
    /// Air temperature, °C
    #[arg(short, long, allow_negative_numbers = true)]
    pub temperature: f64,

    /// Relative humidity, %
    #[arg(long, default_value_t = 50.0)]
    pub humidity: f64,

    /// Net solar radiation, MJ/m²/day
    #[arg(short, long)]
    pub radiation: Option<f64>,
}

#[derive(Args, Debug)]
pub struct Et0Args {
    #[command(flatten)]
    pub weather: WeatherArgs,

    /// Override the configured wind speed, m/s
    #[arg(long)]
    pub wind_speed: Option<f64>,

    /// Override the configured altitude, m
    #[arg(long, allow_negative_numbers = true)]
    pub altitude: Option<f64>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("demand").required(true).args(["et0", "radiation"])))]
pub struct DecideArgs {
    #[command(flatten)]
    pub weather: WeatherArgs,

    /// Precomputed ET0, mm/day. Skips the estimator.
    #[arg(short, long, allow_negative_numbers = true)]
    pub et0: Option<f64>,

    /// Hour of day (defaults to the current local hour)
    #[arg(long, allow_negative_numbers = true)]
    pub hour: Option<i32>,

    /// Run as if on backup power
    #[arg(long)]
    pub no_power: bool,

    /// Water reserve, mL (defaults to site.water_level)
    #[arg(short, long)]
    pub water_level: Option<u32>,

    /// normal, conservation or extreme (defaults to site.mode)
    #[arg(short, long, value_parser = parse_mode)]
    pub mode: Option<IrrigationMode>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

fn parse_mode(s: &str) -> Result<IrrigationMode, String> {
    IrrigationMode::from_str(s).ok_or_else(|| {
        format!(
            "unknown mode '{}' (expected normal, conservation or extreme)",
            s
        )
    })
}
