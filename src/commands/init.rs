//! `commit init`: create the user configuration file.

use std::io::Write;

use super::success;
use crate::config::{ConfigPaths, create_configuration_file};
use crate::error::CommandError;

pub fn init(paths: &ConfigPaths, force: bool, out: &mut impl Write) -> Result<(), CommandError> {
    create_configuration_file(paths, force)?;
    success(out, "Configuration initialized!")
}
