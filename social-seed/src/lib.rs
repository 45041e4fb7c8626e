//! Fake users and friendships as CSV seed data.
//!
//! [`users::UserGenerator`] writes the user table; [`friends::FriendshipGenerator`]
//! reads its `id` column back and writes a directed friendship table. The two only
//! meet through the file at `Settings::users_path`.

pub mod config;
pub mod error;
pub mod fake_data;
pub mod friends;
pub mod inspect;
pub mod logging;
pub mod output;
pub mod password;
pub mod users;

pub use config::{Overrides, Settings};
pub use error::{SeedError, SeedResult};
pub use friends::{read_user_ids, FriendshipGenerator, FriendshipRunSummary};
pub use users::{UserGenerator, UserRunSummary};
