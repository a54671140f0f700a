use std::os::unix::process::ExitStatusExt;
use std::process::{Command, Stdio};

use super::{signal, ProcessError};
use crate::core::commands::LoopSignal;
use crate::flags::Flags;

#[derive(Clone)]
pub struct ProcessExecutor {
    quiet_mode: bool,
}

impl ProcessExecutor {
    pub fn new(flags: &Flags) -> Result<Self, ProcessError> {
        Ok(ProcessExecutor {
            quiet_mode: flags.is_set("quiet"),
        })
    }

    /// Launches `args[0]` as an external program and waits for it to finish.
    ///
    /// The child inherits the shell's stdio, environment, and working
    /// directory; name resolution follows PATH. The wait only ends once the
    /// child has exited or been killed by a signal — a stopped child keeps
    /// the shell blocked instead of producing a premature prompt.
    pub fn spawn_process(&self, args: &[&str]) -> Result<LoopSignal, ProcessError> {
        let mut command = Command::new(args[0]);
        command
            .args(&args[1..])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                if e.kind() == std::io::ErrorKind::NotFound {
                    if !self.quiet_mode {
                        eprintln!("minsh: command not found: {}", args[0]);
                    }
                    return Ok(LoopSignal::Continue);
                }
                return Err(e.into());
            }
        };

        signal::install_wait_handlers()?;

        match child.wait() {
            Ok(status) => {
                if !status.success() && !self.quiet_mode {
                    match status.signal() {
                        Some(sig) => println!("Process terminated by signal: {}", sig),
                        None => println!("Process exited with status: {}", status),
                    }
                }
                Ok(LoopSignal::Continue)
            }
            Err(e) => {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Err(ProcessError::CommandNotFound(args[0].to_string()))
                } else {
                    Err(e.into())
                }
            }
        }
    }
}
