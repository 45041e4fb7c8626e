use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use social_seed::inspect::{inspect_friends, inspect_users};
use social_seed::{logging, FriendshipGenerator, Overrides, Settings, UserGenerator};
use std::path::PathBuf;

/// Social Seed
///
/// Generates fake users and friendships as CSV files for seeding a database.
#[derive(Parser, Debug)]
#[command(name = "social-seed")]
#[command(about = "Generate fake user and friendship CSV tables", long_about = None)]
struct Cli {
    /// Settings file (defaults to ./seed.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    overrides: OverrideArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct OverrideArgs {
    /// Number of users to synthesize
    #[arg(long, global = true)]
    user_count: Option<usize>,

    /// Friends sampled per user
    #[arg(long, global = true)]
    sample_size: Option<usize>,

    /// Plaintext password shared by every generated user
    #[arg(long, global = true)]
    password: Option<String>,

    /// User table path
    #[arg(long, global = true)]
    users_path: Option<PathBuf>,

    /// Friendship table path
    #[arg(long, global = true)]
    friends_path: Option<PathBuf>,
}

impl From<OverrideArgs> for Overrides {
    fn from(args: OverrideArgs) -> Self {
        Overrides {
            user_count: args.user_count,
            sample_size: args.sample_size,
            password: args.password,
            users_path: args.users_path,
            friends_path: args.friends_path,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the user table
    Users,
    /// Read the user table and write the friendship table
    Friends,
    /// Write the user table, then the friendship table
    All,
    /// Check generated tables and print a summary
    Inspect {
        /// Print the reports as JSON
        #[arg(long)]
        json: bool,
    },
}

fn run_users(settings: &Settings) -> Result<()> {
    let summary = UserGenerator::new(settings.clone())
        .run(&mut rand::thread_rng())
        .context("Failed to generate users")?;
    println!("{}", summary.completion_message());
    Ok(())
}

fn run_friends(settings: &Settings) -> Result<()> {
    let summary = FriendshipGenerator::new(settings.clone())
        .run(&mut rand::thread_rng())
        .context("Failed to generate friendships")?;
    println!("{}", summary.completion_message());
    Ok(())
}

fn run_inspect(settings: &Settings, json: bool) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let users = inspect_users(&settings.users_path, &settings.password, today)
        .context("Failed to inspect user table")?;

    // The friendship table is optional; users may be inspected on their own
    let friends = if settings.friends_path.exists() {
        Some(inspect_friends(&settings.friends_path).context("Failed to inspect friendship table")?)
    } else {
        None
    };

    if json {
        let report = serde_json::json!({ "users": users, "friends": friends });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("User table: {}", settings.users_path.display());
    println!("  Rows: {}", users.rows);
    println!("  Duplicate ids: {}", users.duplicate_ids);
    println!("  Malformed ids: {}", users.malformed_ids);
    println!("  Bad password hashes: {}", users.bad_hashes);
    println!("  Bad birthdates: {}", users.bad_birthdates);

    match friends {
        Some(friends) => {
            println!();
            println!("Friendship table: {}", settings.friends_path.display());
            println!("  Edges: {}", friends.edges);
            println!("  Users: {}", friends.users);
            println!("  Self loops: {}", friends.self_loops);
            println!("  Duplicate edges: {}", friends.duplicate_edges);
            println!(
                "  Out degree: {} to {}",
                friends.min_out_degree, friends.max_out_degree
            );
        }
        None => {
            println!();
            println!(
                "Friendship table {} not found - skipped",
                settings.friends_path.display()
            );
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let settings = Settings::load(cli.config.as_deref())
        .and_then(|settings| settings.with_overrides(cli.overrides.into()))
        .context("Failed to load settings")?;
    tracing::debug!("Settings: {:?}", settings);

    match cli.command {
        Command::Users => run_users(&settings),
        Command::Friends => run_friends(&settings),
        Command::All => {
            run_users(&settings)?;
            run_friends(&settings)
        }
        Command::Inspect { json } => run_inspect(&settings, json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_count_flag_before_subcommand() {
        let cli = Cli::try_parse_from(["social-seed", "--user-count", "10", "users"]).unwrap();
        assert!(matches!(cli.command, Command::Users));

        let overrides: Overrides = cli.overrides.into();
        assert_eq!(overrides.user_count, Some(10));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "social-seed",
            "friends",
            "--sample-size",
            "25",
            "--friends-path",
            "out/friends.csv",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Friends));

        let overrides: Overrides = cli.overrides.into();
        assert_eq!(overrides.sample_size, Some(25));
        assert_eq!(overrides.friends_path, Some(PathBuf::from("out/friends.csv")));
    }

    #[test]
    fn test_old_users_flag_rejected() {
        assert!(Cli::try_parse_from(["social-seed", "--users", "10", "users"]).is_err());
    }
}
