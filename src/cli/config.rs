//! Config CLI command.

use super::write_failed;
use crate::Result;
use crate::config::CatfactsConfig;
use std::io::Write;

/// Config command handler.
pub struct ConfigCommand;

impl ConfigCommand {
    /// Prints the effective configuration.
    pub fn execute<W: Write>(config: &CatfactsConfig, out: &mut W) -> Result<()> {
        writeln!(out, "{config}").map_err(write_failed)
    }
}
