use crate::process::ProcessError;

use libc::{sighandler_t, signal, SIGINT, SIG_ERR};

extern "C" fn handle_sigint(_: i32) {
    // Do nothing; the foreground child owns the interrupt.
}

/// Installed before blocking on a child so Ctrl-C reaches the child
/// without taking the shell down with it.
pub fn install_wait_handlers() -> Result<(), ProcessError> {
    let previous = unsafe { signal(SIGINT, handle_sigint as sighandler_t) };
    if previous == SIG_ERR {
        return Err(ProcessError::SignalError(
            "failed to install SIGINT handler".to_string(),
        ));
    }
    Ok(())
}
