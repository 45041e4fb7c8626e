// Writes the fake user table using seed.toml / SEED_* settings
use anyhow::{Context, Result};
use social_seed::{logging, Settings, UserGenerator};

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    logging::init(false);

    let settings = Settings::load(None).context("Failed to load settings")?;
    let summary = UserGenerator::new(settings)
        .run(&mut rand::thread_rng())
        .context("Failed to generate users")?;

    println!("{}", summary.completion_message());
    Ok(())
}
