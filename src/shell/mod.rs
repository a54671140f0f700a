use rustyline::DefaultEditor;

mod executor;

use crate::{
    core::commands::{CommandExecutor, LoopSignal},
    error::ShellError,
    flags::Flags,
    highlight::Highlighter,
};

use executor::CommandHandler;

pub struct Shell {
    pub(crate) editor: DefaultEditor,
    pub(crate) flags: Flags,
    pub(crate) executor: CommandExecutor,
    pub(crate) highlighter: Highlighter,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let editor = DefaultEditor::new()?;
        let executor = CommandExecutor::new(&flags)?;
        let highlighter = Highlighter::new();

        // Ctrl-C at the prompt should nudge, not kill.
        let hint = highlighter.hint("\nUse 'exit' to leave minsh");
        ctrlc::set_handler(move || {
            println!("{}", hint);
        })?;

        Ok(Shell {
            editor,
            flags,
            executor,
            highlighter,
        })
    }

    /// The interactive loop: prompt, read, dispatch, repeat until `exit`
    /// signals a stop or the input stream ends. Always returns `Ok(())`
    /// on a normal stop, so the process exits with 0.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            match self.editor.readline("minsh> ") {
                Ok(line) => {
                    if !line.is_empty() {
                        if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                            if !self.flags.is_set("quiet") {
                                eprintln!("Warning: Couldn't add to history: {}", e);
                            }
                        }
                    }

                    match self.execute_command(&line) {
                        Ok(LoopSignal::Continue) => {}
                        Ok(LoopSignal::Stop) => break,
                        Err(e) => {
                            eprintln!("{}", self.highlighter.error(&e.to_string()));
                        }
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    if !self.flags.is_set("quiet") {
                        println!("CTRL-C");
                    }
                    continue;
                }
                Err(rustyline::error::ReadlineError::Eof) => break,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    continue;
                }
            }
        }
        Ok(())
    }
}
