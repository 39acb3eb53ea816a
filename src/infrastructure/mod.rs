//! Infrastructure layer - storage backends, provider clients and logging

pub mod logging;
pub mod player;
pub mod storage;
pub mod team;

pub use player::YahooPlayerProvider;
pub use storage::{PostgresConfig, StorageFactory, StorageType};
pub use team::{InMemoryTeamRepository, PostgresTeamRepository};
