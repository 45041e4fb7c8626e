// Samples friendships over an existing fake user table
use anyhow::{Context, Result};
use social_seed::{logging, FriendshipGenerator, Settings};

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    logging::init(false);

    let settings = Settings::load(None).context("Failed to load settings")?;
    let summary = FriendshipGenerator::new(settings)
        .run(&mut rand::thread_rng())
        .context("Failed to generate friendships")?;

    println!("{}", summary.completion_message());
    Ok(())
}
