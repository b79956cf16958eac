//! Git operations by shelling out to the system `git`.

pub mod cli;

pub use cli::{CommitStagedChanges, FetchStagedChanges, GitCli};
