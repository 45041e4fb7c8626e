use config::{Config, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{SeedError, SeedResult};

pub const DEFAULT_USER_COUNT: usize = 5000;
pub const DEFAULT_SAMPLE_SIZE: usize = 200;
pub const DEFAULT_PASSWORD: &str = "password";
pub const DEFAULT_USERS_PATH: &str = "./db/csv/fake_users.csv";
pub const DEFAULT_FRIENDS_PATH: &str = "./db/csv/fake_friends.csv";

/// Optional settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "seed.toml";

/// Run parameters shared by both generators
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Number of users to synthesize
    pub user_count: usize,
    /// Per-user friend sample size
    pub sample_size: usize,
    /// Plaintext password every generated user shares
    pub password: String,
    /// User table, written by the user generator and read by the friendship generator
    pub users_path: PathBuf,
    /// Friendship edge table
    pub friends_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_count: DEFAULT_USER_COUNT,
            sample_size: DEFAULT_SAMPLE_SIZE,
            password: DEFAULT_PASSWORD.to_string(),
            users_path: PathBuf::from(DEFAULT_USERS_PATH),
            friends_path: PathBuf::from(DEFAULT_FRIENDS_PATH),
        }
    }
}

/// Values given on the command line; `None` keeps the loaded value
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub user_count: Option<usize>,
    pub sample_size: Option<usize>,
    pub password: Option<String>,
    pub users_path: Option<PathBuf>,
    pub friends_path: Option<PathBuf>,
}

impl Settings {
    /// Load settings from defaults, a settings file and `SEED_*` environment variables.
    ///
    /// When `file` is `None`, `seed.toml` in the working directory is used if present.
    /// An explicitly named file must exist.
    pub fn load(file: Option<&Path>) -> SeedResult<Self> {
        let mut builder = Config::builder()
            .set_default("user_count", DEFAULT_USER_COUNT as i64)?
            .set_default("sample_size", DEFAULT_SAMPLE_SIZE as i64)?
            .set_default("password", DEFAULT_PASSWORD)?
            .set_default("users_path", DEFAULT_USERS_PATH)?
            .set_default("friends_path", DEFAULT_FRIENDS_PATH)?;

        match file {
            Some(path) => {
                builder = builder.add_source(File::from(path.to_path_buf()).required(true));
            }
            None => {
                let local = PathBuf::from(SETTINGS_FILE);
                if local.exists() {
                    builder = builder.add_source(File::from(local).required(false));
                }
            }
        }

        // Environment variables win over the file
        for (var, key) in [
            ("SEED_USER_COUNT", "user_count"),
            ("SEED_SAMPLE_SIZE", "sample_size"),
            ("SEED_PASSWORD", "password"),
            ("SEED_USERS_PATH", "users_path"),
            ("SEED_FRIENDS_PATH", "friends_path"),
        ] {
            if let Ok(value) = std::env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Apply command line values on top of the loaded settings
    pub fn with_overrides(mut self, overrides: Overrides) -> SeedResult<Self> {
        if let Some(user_count) = overrides.user_count {
            self.user_count = user_count;
        }
        if let Some(sample_size) = overrides.sample_size {
            self.sample_size = sample_size;
        }
        if let Some(password) = overrides.password {
            self.password = password;
        }
        if let Some(users_path) = overrides.users_path {
            self.users_path = users_path;
        }
        if let Some(friends_path) = overrides.friends_path {
            self.friends_path = friends_path;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> SeedResult<()> {
        if self.sample_size == 0 {
            return Err(SeedError::InvalidConfig(
                "sample_size must be at least 1".to_string(),
            ));
        }
        if self.users_path.as_os_str().is_empty() || self.friends_path.as_os_str().is_empty() {
            return Err(SeedError::InvalidConfig(
                "output paths must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
