//! User configuration: file location, JSON store, typed settings and
//! environment knobs.

pub mod env;
pub mod init;
pub mod paths;
pub mod settings;
pub mod store;

pub use init::{CONFIG_STUB, create_configuration_file};
pub use paths::ConfigPaths;
pub use settings::Settings;
pub use store::ConfigStore;
