mod goal_repo;
#[cfg(test)]
pub mod mock;
mod record_repo;
mod repo_error;
mod user_repo;

pub use goal_repo::*;
pub use record_repo::*;
pub use repo_error::RepositoryError;
pub use user_repo::*;
