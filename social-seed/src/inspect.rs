//! Sanity checks over generated tables, for eyeballing a seed run before loading it.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use social_seed_types::{FriendshipEdge, UserRecord};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::{SeedError, SeedResult};
use crate::fake_data::{age_on, MAX_AGE, MIN_AGE};
use crate::password::verify_password;

/// Two capitalized words followed by a four digit number
static USER_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\p{Lu}\p{Ll}+\p{Lu}\p{Ll}+[1-9][0-9]{3}$").expect("Failed to compile user id regex")
});

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct UserTableReport {
    pub rows: usize,
    /// Ids appearing more than once
    pub duplicate_ids: usize,
    /// Ids not shaped like `WordWord1234`
    pub malformed_ids: usize,
    /// Rows whose hash does not verify against the password
    pub bad_hashes: usize,
    /// Rows whose birthdate is unparsable or outside the age range
    pub bad_birthdates: usize,
}

impl UserTableReport {
    pub fn is_clean(&self) -> bool {
        self.malformed_ids == 0 && self.bad_hashes == 0 && self.bad_birthdates == 0
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FriendTableReport {
    pub edges: usize,
    /// Distinct `user_id` values
    pub users: usize,
    pub self_loops: usize,
    /// Edges repeated for the same source
    pub duplicate_edges: usize,
    pub min_out_degree: usize,
    pub max_out_degree: usize,
}

impl FriendTableReport {
    pub fn is_clean(&self) -> bool {
        self.self_loops == 0 && self.duplicate_edges == 0
    }
}

fn open(path: &Path) -> SeedResult<csv::Reader<std::fs::File>> {
    csv::Reader::from_path(path).map_err(|source| SeedError::Input {
        path: path.to_path_buf(),
        source,
    })
}

pub fn is_well_formed_id(id: &str) -> bool {
    USER_ID_REGEX.is_match(id)
}

fn birthdate_in_range(birthdate: &str, today: NaiveDate) -> bool {
    match NaiveDate::parse_from_str(birthdate, "%Y-%m-%d") {
        Ok(date) => (MIN_AGE as i32..=MAX_AGE as i32).contains(&age_on(date, today)),
        Err(_) => false,
    }
}

/// Check every row of a user table against `password` and the age range on `today`
pub fn inspect_users(path: &Path, password: &str, today: NaiveDate) -> SeedResult<UserTableReport> {
    let mut reader = open(path)?;
    let mut report = UserTableReport::default();
    let mut seen: HashSet<String> = HashSet::new();

    for row in reader.deserialize::<UserRecord>() {
        let user = row.map_err(|source| SeedError::Input {
            path: path.to_path_buf(),
            source,
        })?;
        report.rows += 1;

        if !is_well_formed_id(&user.id) {
            report.malformed_ids += 1;
        }
        if !verify_password(password, &user.password_hash) {
            report.bad_hashes += 1;
        }
        if !birthdate_in_range(&user.birthdate, today) {
            report.bad_birthdates += 1;
        }
        if !seen.insert(user.id) {
            report.duplicate_ids += 1;
        }
    }

    Ok(report)
}

/// Summarize an edge table: degrees, self loops and repeated edges
pub fn inspect_friends(path: &Path) -> SeedResult<FriendTableReport> {
    let mut reader = open(path)?;
    let mut report = FriendTableReport::default();
    let mut friends_by_user: HashMap<String, HashSet<String>> = HashMap::new();
    let mut degrees: HashMap<String, usize> = HashMap::new();

    for row in reader.deserialize::<FriendshipEdge>() {
        let edge = row.map_err(|source| SeedError::Input {
            path: path.to_path_buf(),
            source,
        })?;
        report.edges += 1;

        if edge.is_self_loop() {
            report.self_loops += 1;
        }
        *degrees.entry(edge.user_id.clone()).or_default() += 1;
        if !friends_by_user
            .entry(edge.user_id)
            .or_default()
            .insert(edge.friend_id)
        {
            report.duplicate_edges += 1;
        }
    }

    report.users = degrees.len();
    report.min_out_degree = degrees.values().copied().min().unwrap_or(0);
    report.max_out_degree = degrees.values().copied().max().unwrap_or(0);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::stored_password_hash;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn test_id_shape() {
        assert!(is_well_formed_id("StoryRiver4821"));
        assert!(!is_well_formed_id("storyRiver4821"));
        assert!(!is_well_formed_id("StoryRiver482"));
        assert!(!is_well_formed_id("StoryRiver0482"));
        assert!(!is_well_formed_id("Story4821"));
    }

    #[test]
    fn test_inspect_users_counts_problems() {
        let mut rng = StdRng::seed_from_u64(4);
        let good_hash = stored_password_hash(&mut rng, "password");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.csv");
        let content = format!(
            "id,password_hash,first_name,second_name,birthdate,biography,city\n\
             StoryRiver4821,{h},Ada,Smith,1980-05-05,word,Oslo\n\
             StoryRiver4821,{h},Bob,Jones,2015-05-05,word,Rome\n\
             bad_id,nohash,Cy,Lee,not-a-date,word,Lima\n",
            h = good_hash
        );
        std::fs::write(&path, content).unwrap();

        let report = inspect_users(&path, "password", today()).unwrap();
        assert_eq!(
            report,
            UserTableReport {
                rows: 3,
                duplicate_ids: 1,
                malformed_ids: 1,
                bad_hashes: 1,
                bad_birthdates: 2,
            }
        );
        assert!(!report.is_clean());
    }

    #[test]
    fn test_inspect_friends_degrees() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("friends.csv");
        std::fs::write(
            &path,
            "user_id,friend_id\nA1000,B2000\nA1000,C3000\nA1000,B2000\nB2000,B2000\n",
        )
        .unwrap();

        let report = inspect_friends(&path).unwrap();
        assert_eq!(report.edges, 4);
        assert_eq!(report.users, 2);
        assert_eq!(report.self_loops, 1);
        assert_eq!(report.duplicate_edges, 1);
        assert_eq!(report.min_out_degree, 1);
        assert_eq!(report.max_out_degree, 3);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_inspect_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = inspect_friends(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(SeedError::Input { .. })));
    }
}
