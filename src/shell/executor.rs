use crate::core::commands::LoopSignal;
use crate::core::tokenizer;
use crate::error::ShellError;

pub(crate) trait CommandHandler {
    fn execute_command(&mut self, line: &str) -> Result<LoopSignal, ShellError>;
}

impl CommandHandler for super::Shell {
    fn execute_command(&mut self, line: &str) -> Result<LoopSignal, ShellError> {
        // Blank and space-only lines dispatch nothing.
        let args = tokenizer::split_line(line);
        if args.is_empty() {
            return Ok(LoopSignal::Continue);
        }

        self.executor
            .execute(&args[0], &args[1..])
            .map_err(ShellError::from)
    }
}
