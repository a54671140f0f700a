use super::{Command, CommandError, LoopSignal};
use std::env;
use std::path::Path;

/// `cd <dir>` — the only mutator of the process-wide working directory.
#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String]) -> Result<LoopSignal, CommandError> {
        // An explicit target is required; arguments past the first are ignored.
        let path = args.first().ok_or_else(|| {
            CommandError::InvalidArguments("cd: one argument required".to_string())
        })?;

        env::set_current_dir(Path::new(path))
            .map_err(|e| CommandError::ExecutionError(format!("cd: {}: {}", path, e)))?;

        Ok(LoopSignal::Continue)
    }
}
