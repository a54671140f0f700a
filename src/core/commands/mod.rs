use std::collections::BTreeMap;

mod cd;
mod exit;
mod help;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use help::HelpCommand;

use crate::process::{ProcessError, ProcessExecutor};

/// Outcome of one dispatched command: keep reading lines or leave the loop.
///
/// Deliberately not a process exit code; only `exit` ever produces `Stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopSignal {
    Continue,
    Stop,
}

#[derive(Debug)]
pub enum CommandError {
    InvalidArguments(String),
    ExecutionError(String),
    IoError(std::io::Error),
    ProcessError(ProcessError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "invalid arguments: {}", msg),
            CommandError::ExecutionError(msg) => write!(f, "execution error: {}", msg),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::ProcessError(err) => write!(f, "Process error: {}", err),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

pub trait Command {
    fn execute(&self, args: &[String]) -> Result<LoopSignal, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
    Help(HelpCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String]) -> Result<LoopSignal, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args),
            CommandType::Exit(cmd) => cmd.execute(args),
            CommandType::Help(cmd) => cmd.execute(args),
        }
    }
}

/// Dispatches a named command to a builtin handler, falling back to the
/// process launcher for anything not in the registry.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<String, CommandType>,
    process_executor: ProcessExecutor,
}

impl CommandExecutor {
    pub fn new(flags: &crate::flags::Flags) -> Result<Self, CommandError> {
        let mut executor = Self {
            commands: BTreeMap::new(),
            process_executor: ProcessExecutor::new(flags)?,
        };

        executor
            .commands
            .insert("cd".to_string(), CommandType::Cd(CdCommand::new()));
        executor
            .commands
            .insert("exit".to_string(), CommandType::Exit(ExitCommand::new()));
        executor
            .commands
            .insert("help".to_string(), CommandType::Help(HelpCommand::new()));

        Ok(executor)
    }

    /// Looks `command` up by exact name; a miss means an external program.
    pub fn execute(&self, command: &str, args: &[String]) -> Result<LoopSignal, CommandError> {
        if let Some(cmd) = self.commands.get(command) {
            cmd.execute(args)
        } else {
            let mut full_args = vec![command];
            full_args.extend(args.iter().map(|s| s.as_str()));
            self.process_executor
                .spawn_process(&full_args)
                .map_err(CommandError::from)
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    /// Serializes tests that touch the process-wide working directory.
    pub(crate) static CWD_LOCK: Mutex<()> = Mutex::new(());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::Flags;

    fn quiet_executor() -> CommandExecutor {
        let mut flags = Flags::new();
        flags
            .parse(&["--quiet".to_string()])
            .expect("--quiet is a known flag");
        CommandExecutor::new(&flags).expect("executor construction should not fail")
    }

    #[test]
    fn test_exit_signals_stop() {
        let executor = quiet_executor();
        assert_eq!(
            executor.execute("exit", &[]).expect("exit cannot fail"),
            LoopSignal::Stop
        );
        assert_eq!(
            executor
                .execute("exit", &["ignored".to_string(), "args".to_string()])
                .expect("exit cannot fail"),
            LoopSignal::Stop
        );
    }

    #[test]
    fn test_help_continues() {
        let executor = quiet_executor();
        assert_eq!(
            executor.execute("help", &[]).expect("help cannot fail"),
            LoopSignal::Continue
        );
    }

    #[test]
    fn test_cd_without_argument_is_a_usage_error() {
        let executor = quiet_executor();
        let result = executor.execute("cd", &[]);
        assert!(matches!(result, Err(CommandError::InvalidArguments(_))));
    }

    #[test]
    fn test_unknown_command_keeps_the_loop_running() {
        let executor = quiet_executor();
        let result = executor.execute("definitely-not-a-command-xyz", &[]);
        assert_eq!(result.expect("missing programs are recovered"), LoopSignal::Continue);
    }

    #[test]
    fn test_builtin_detection() {
        let executor = quiet_executor();

        assert!(executor.is_builtin("cd"));
        assert!(executor.is_builtin("exit"));
        assert!(executor.is_builtin("help"));
        assert!(!executor.is_builtin("ls"));
        assert!(!executor.is_builtin(""));
    }

    #[test]
    fn test_session_scenario() {
        let _guard = test_support::CWD_LOCK
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        let executor = quiet_executor();

        assert_eq!(
            executor.execute("help", &[]).expect("help cannot fail"),
            LoopSignal::Continue
        );

        assert_eq!(
            executor
                .execute("cd", &["/".to_string()])
                .expect("cd to / should succeed"),
            LoopSignal::Continue
        );
        assert_eq!(std::env::current_dir().expect("cwd is readable"), std::path::PathBuf::from("/"));

        let result = executor.execute("cd", &["/nonexistent-xyz".to_string()]);
        assert!(matches!(result, Err(CommandError::ExecutionError(_))));
        // The failed cd must leave the working directory untouched.
        assert_eq!(std::env::current_dir().expect("cwd is readable"), std::path::PathBuf::from("/"));

        assert_eq!(
            executor.execute("exit", &[]).expect("exit cannot fail"),
            LoopSignal::Stop
        );
    }
}
