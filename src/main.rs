use std::io;

use animal_quiz::config::Config;
use animal_quiz::quiz::{bank, QuizSession};
use animal_quiz::terminal::Terminal;
use dotenv::dotenv;
use rand::rngs::StdRng;
use rand::SeedableRng;

type AppResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

fn main() -> AppResult {
    dotenv().ok();
    pretty_env_logger::init();

    bank::validate(&bank::BANK)?;
    let config = Config::from_env();
    log::debug!("Loaded config: {:?}", config);

    let mut terminal = Terminal::new(io::stdin().lock(), io::stdout().lock());
    match config.seed {
        Some(seed) => {
            log::info!("Shuffling with fixed seed {}", seed);
            terminal.run(&mut QuizSession::with_rng(StdRng::seed_from_u64(seed)))?;
        }
        None => terminal.run(&mut QuizSession::new())?,
    }

    println!();
    Ok(())
}
