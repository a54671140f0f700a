use super::{Command, CommandError, LoopSignal};

/// `help` — prints a short usage banner on stdout.
#[derive(Clone)]
pub struct HelpCommand;

impl Default for HelpCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn execute(&self, _args: &[String]) -> Result<LoopSignal, CommandError> {
        println!();
        println!("minsh - a minimal interactive shell");
        println!();
        println!("Builtin commands:");
        println!("  cd <dir>   change the working directory");
        println!("  exit       leave the shell");
        println!("  help       show this message");
        println!();
        println!("Anything else is run as an external program.");
        println!();
        Ok(LoopSignal::Continue)
    }
}
