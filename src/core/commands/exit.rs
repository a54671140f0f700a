use super::{Command, CommandError, LoopSignal};

/// `exit` — asks the interactive loop to stop. It never terminates the
/// process itself; `main` returns normally so the shell exits with 0.
#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _args: &[String]) -> Result<LoopSignal, CommandError> {
        Ok(LoopSignal::Stop)
    }
}
