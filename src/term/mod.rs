extern crate ansi_term;
extern crate linefeed;
extern crate mortal;
use crate::mach::{Command, Outcome, Runtime};
use ansi_term::Style;
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Signal, Terminal};
use std::sync::Arc;

pub fn main() {
    if let Err(error) = main_loop() {
        eprintln!("{}", error);
    }
}

fn main_loop() -> std::io::Result<()> {
    let mut runtime = Runtime::default();
    let command = Interface::new("calc")?;
    command.set_prompt("> ")?;
    command.set_report_signal(Signal::Interrupt, true);
    command.write_fmt(format_args!(
        "{}\n",
        Style::new().dimmed().paint(format!(
            "{}\nType 'help' for more information.",
            Runtime::version()
        ))
    ))?;

    while runtime.is_running() {
        command.set_completer(Arc::new(NameCompleter::new(&runtime)));
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(Signal::Interrupt) => {
                command.set_buffer("")?;
                command.lock_reader().cancel_read_line()?;
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if !string.trim().is_empty() {
            command.add_history_unique(string.clone());
        }
        match runtime.enter(&string) {
            Outcome::Empty => {}
            Outcome::Command(Command::Clear, _) => clear_screen()?,
            outcome @ Outcome::Error(_) => {
                command.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(outcome.to_string())
                ))?;
            }
            outcome => command.write_fmt(format_args!("{}\n", outcome))?,
        }
    }
    Ok(())
}

fn clear_screen() -> std::io::Result<()> {
    let terminal = mortal::Terminal::new()?;
    terminal.clear_screen()
}

/// Tab completion for command names and the variables defined so far.
struct NameCompleter {
    names: Vec<String>,
}

impl NameCompleter {
    fn new(runtime: &Runtime) -> NameCompleter {
        let mut names: Vec<String> = Command::NAMES.iter().map(|s| s.to_string()).collect();
        names.extend(runtime.vars().list().map(|(name, _)| name.to_string()));
        NameCompleter { names }
    }

    fn candidates<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a String> {
        self.names.iter().filter(move |name| name.starts_with(word))
    }
}

impl<Term: Terminal> Completer<Term> for NameCompleter {
    fn complete(
        &self,
        word: &str,
        _prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let comp_list: Vec<Completion> = self
            .candidates(word)
            .map(|name| Completion::simple(name.clone()))
            .collect();
        if comp_list.is_empty() {
            None
        } else {
            Some(comp_list)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_commands_and_variables() {
        let mut runtime = Runtime::new();
        runtime.enter("velocity = 3");
        let completer = NameCompleter::new(&runtime);
        let found: Vec<&String> = completer.candidates("v").collect();
        assert_eq!(found, vec!["vars", "version", "velocity"]);
        let found: Vec<&String> = completer.candidates("p").collect();
        assert_eq!(found, vec!["pi"]);
        assert_eq!(completer.candidates("zz").count(), 0);
    }
}
