use clap::{AppSettings, Clap};
use std::path::PathBuf;

#[derive(Debug, Clap, Clone)]
#[clap(
    version = "0.1.0",
    name = "VC-DF",
    about = "A vehicle acceleration and downforce comparison simulator written in Rust"
)]
#[clap(setting = AppSettings::ColoredHelp)]
pub struct SimOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Activate debug printing
    #[clap(short, long)]
    pub debug: bool,

    /// Activate GUI (interactive vehicle selection and chart display)
    #[clap(short, long)]
    pub gui: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Set path to the vehicle catalog file
    #[clap(parse(from_os_str), short, long)]
    pub catalogfile_path: PathBuf,

    /// Select a vehicle by its catalog name (repeatable, up to four vehicles; defaults to the
    /// first catalog entry)
    #[clap(short, long)]
    pub select: Vec<String>,

    /// Set sampling step size in seconds, should be in the range [0.001, 1.0]
    #[clap(short, long, default_value = "0.2")]
    pub timestep_size: f64,

    /// Set display unit for speed values (mps or kmh)
    #[clap(short, long, default_value = "mps")]
    pub unit: String,

    /// Set path for a CSV export of the comparison series
    #[clap(parse(from_os_str), short, long)]
    pub export_path: Option<PathBuf>,
}
