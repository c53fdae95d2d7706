use std::path::PathBuf;

#[derive(clap::Parser)]
#[command(name = "music-group", version, about)]
pub struct Cli {
    /// Log more detail (repeat up to three times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// List the albums released in this year
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Catalog CSV file (Song Name, Album Name, Album Year, Duration)
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
