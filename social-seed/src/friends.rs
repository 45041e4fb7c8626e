use rand::Rng;
use social_seed_types::{FriendshipEdge, FRIENDSHIP_COLUMNS, ID_COLUMN};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{SeedError, SeedResult};
use crate::output::{create_output, table_writer};

/// Result of a friendship generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendshipRunSummary {
    pub path: PathBuf,
    /// Users a sample was drawn for
    pub users: usize,
    /// Edges written
    pub edges: usize,
    /// Users whose own id came up in their sample and was dropped
    pub self_matches: usize,
}

impl FriendshipRunSummary {
    pub fn completion_message(&self) -> String {
        format!("Fake friendships have been written to {}", self.path.display())
    }
}

/// Read the `id` column of a user table, in file order. Other columns are ignored.
pub fn read_user_ids(path: &Path) -> SeedResult<Vec<String>> {
    let input_error = |source: csv::Error| SeedError::Input {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(input_error)?;

    let column = reader
        .headers()
        .map_err(input_error)?
        .iter()
        .position(|name| name == ID_COLUMN)
        .ok_or_else(|| SeedError::MissingColumn {
            path: path.to_path_buf(),
            column: ID_COLUMN.to_string(),
        })?;

    let mut ids = Vec::new();
    for record in reader.records() {
        let record = record.map_err(input_error)?;
        if let Some(id) = record.get(column) {
            ids.push(id.to_string());
        }
    }

    Ok(ids)
}

/// Samples a directed friendship graph over an existing user table
#[derive(Debug, Clone)]
pub struct FriendshipGenerator {
    settings: Settings,
}

impl FriendshipGenerator {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Fail when the population cannot supply `sample_size` distinct ids
    pub fn check_population(&self, population: usize) -> SeedResult<()> {
        if self.settings.sample_size > population {
            return Err(SeedError::SampleTooLarge {
                sample_size: self.settings.sample_size,
                population,
            });
        }
        Ok(())
    }

    /// Draw `sample_size` distinct entries of `ids` and drop those equal to `user_id`.
    ///
    /// The draw covers the whole population, `user_id` included, and is not topped
    /// up afterwards: a user whose own id is drawn ends up with one friend fewer.
    /// Friends are returned in draw order.
    pub fn sample_friends<'a, R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ids: &'a [String],
        user_id: &str,
    ) -> SeedResult<Vec<&'a str>> {
        self.check_population(ids.len())?;

        Ok(
            rand::seq::index::sample(rng, ids.len(), self.settings.sample_size)
                .into_iter()
                .map(|i| ids[i].as_str())
                .filter(|friend_id| *friend_id != user_id)
                .collect(),
        )
    }

    /// Sample friends for every id and stream the edges to `out`, user by user
    pub fn write_to<W: Write, R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ids: &[String],
        out: W,
    ) -> SeedResult<(usize, usize)> {
        self.check_population(ids.len())?;

        let mut writer = table_writer(out, &FRIENDSHIP_COLUMNS)?;
        let mut edges = 0;
        let mut self_matches = 0;

        for (i, user_id) in ids.iter().enumerate() {
            let friends = self.sample_friends(rng, ids, user_id)?;
            if friends.len() < self.settings.sample_size {
                self_matches += 1;
            }

            for friend_id in friends {
                writer.serialize(FriendshipEdge::new(user_id.as_str(), friend_id))?;
                edges += 1;
            }

            if (i + 1) % 1000 == 0 {
                tracing::debug!("Sampled friends for {} / {} users", i + 1, ids.len());
            }
        }

        writer.flush().map_err(csv::Error::from)?;
        tracing::debug!("{} users drew their own id", self_matches);
        Ok((edges, self_matches))
    }

    /// Read the configured user table and write the edge table, replacing any existing file
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> SeedResult<FriendshipRunSummary> {
        let ids = read_user_ids(&self.settings.users_path)?;
        tracing::info!(
            "Read {} user ids from {}",
            ids.len(),
            self.settings.users_path.display()
        );

        // Checked before the output is touched so a bad run leaves the old table intact
        self.check_population(ids.len())?;

        let path = self.settings.friends_path.clone();
        let file = create_output(&path)?;
        let (edges, self_matches) = self
            .write_to(rng, &ids, file)
            .map_err(|err| err.writing(&path))?;

        tracing::info!("Wrote {} friendships to {}", edges, path.display());
        Ok(FriendshipRunSummary {
            path,
            users: ids.len(),
            edges,
            self_matches,
        })
    }
}
