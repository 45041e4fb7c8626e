use chrono::NaiveDate;
use rand::Rng;
use social_seed_types::{UserRecord, USER_COLUMNS};
use std::io::Write;
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::SeedResult;
use crate::fake_data::{self, MAX_AGE, MIN_AGE};
use crate::output::{create_output, table_writer};
use crate::password::stored_password_hash;

/// Result of a user generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRunSummary {
    pub path: PathBuf,
    pub count: usize,
}

impl UserRunSummary {
    /// Line printed when the run finishes
    pub fn completion_message(&self) -> String {
        format!(
            "{} fake users have been written to {}",
            self.count,
            self.path.display()
        )
    }
}

/// Synthesizes the user table
#[derive(Debug, Clone)]
pub struct UserGenerator {
    settings: Settings,
}

impl UserGenerator {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Build one user with a fresh id, salt and profile
    pub fn generate_record<R: Rng + ?Sized>(&self, rng: &mut R, today: NaiveDate) -> UserRecord {
        let id = fake_data::human_readable_id(rng);
        let first_name = fake_data::first_name(rng).to_string();
        let second_name = fake_data::last_name(rng).to_string();
        let birthdate = fake_data::date_of_birth(rng, today, MIN_AGE, MAX_AGE)
            .format("%Y-%m-%d")
            .to_string();
        let biography = fake_data::word(rng).to_string();
        let city = fake_data::city(rng);
        let password_hash = stored_password_hash(rng, &self.settings.password);

        UserRecord {
            id,
            password_hash,
            first_name,
            second_name,
            birthdate,
            biography,
            city,
        }
    }

    /// Write the header and `user_count` rows to `out`, returning the row count
    pub fn write_to<W: Write, R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        today: NaiveDate,
        out: W,
    ) -> SeedResult<usize> {
        let mut writer = table_writer(out, &USER_COLUMNS)?;

        for i in 0..self.settings.user_count {
            let record = self.generate_record(rng, today);
            writer.serialize(&record)?;

            if (i + 1) % 1000 == 0 {
                tracing::debug!("Generated {} / {} users", i + 1, self.settings.user_count);
            }
        }

        writer.flush().map_err(csv::Error::from)?;
        Ok(self.settings.user_count)
    }

    /// Generate the user table at the configured path, replacing any existing file
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> SeedResult<UserRunSummary> {
        let path = self.settings.users_path.clone();
        let today = chrono::Local::now().date_naive();

        tracing::info!(
            "Generating {} users into {}",
            self.settings.user_count,
            path.display()
        );

        let file = create_output(&path)?;
        let count = self
            .write_to(rng, today, file)
            .map_err(|err| err.writing(&path))?;

        tracing::info!("Wrote {} users to {}", count, path.display());
        Ok(UserRunSummary { path, count })
    }
}
