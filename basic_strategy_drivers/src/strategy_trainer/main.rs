mod console;

use basic_strategy::{PracticeMode, Session};
use basic_strategy_drivers::{
    expand_home, parse_config_from_file, Config, FileStreakStore, TrainerSettings,
};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::io;

const DEFAULT_CONFIG_PATH: &str = "~/.basic_strategy.yml";

#[derive(Debug, Parser)]
#[command(author, about = "Drill blackjack basic strategy", long_about = None)]
struct CommandLineArgs {
    /// The path of the config file
    #[arg(short, long, default_value_t = String::from(DEFAULT_CONFIG_PATH))]
    config: String,

    /// Practice mode: All, HardTotalsOnly, SoftTotalsOnly or PairsOnly
    #[arg(short, long)]
    mode: Option<PracticeMode>,

    /// Seed for a reproducible shoe
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the strategy chart and exit
    #[arg(long)]
    chart: bool,
}

fn load_config(path: &str) -> Result<Config, Box<dyn Error>> {
    let config_file_path = expand_home(path)?;
    if path == DEFAULT_CONFIG_PATH && !config_file_path.exists() {
        log::info!("{} not found, using defaults", config_file_path.display());
        return Ok(Config::default());
    }
    if config_file_path.is_dir() {
        return Err(format!("{} should be a file rather than a directory", path).into());
    }
    Ok(parse_config_from_file(&config_file_path.to_string_lossy())?)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = CommandLineArgs::parse();

    if args.chart {
        console::print_chart(&mut io::stdout())?;
        return Ok(());
    }

    let config = load_config(&args.config)?;
    let mut settings: TrainerSettings = config.trainer.try_into()?;
    if let Some(mode) = args.mode {
        settings.practice_mode = mode;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    log::debug!("{:?}", settings);

    let rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let store = FileStreakStore::new(settings.state_file);
    let mut session = Session::new(rng, store);
    session.set_practice_mode(settings.practice_mode);

    console::run(&mut session, io::stdin().lock(), &mut io::stdout())?;
    Ok(())
}
