//! Line-oriented interactive session.
//!
//! Each input line is one user interaction. It is handled completely (state
//! update, then re-render) before the next line is read.

use core::str::FromStr;
use std::io::{self, BufRead, Write};

use thiserror::Error;

use prodcat_catalog::view;
use prodcat_catalog::{OwnerFilter, ProductBrowser};

pub const HELP: &str = "commands: owner <name> | all | search <text> | clear | reset | show | quit";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
}

/// A single user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select one owner by exact name.
    Owner(String),
    /// Select the "All" owner tab.
    All,
    /// Replace the search text (kept verbatim; may be empty).
    Search(String),
    /// Clear the search text only.
    Clear,
    /// Reset owner and search text.
    Reset,
    Show,
    Quit,
}

impl FromStr for Command {
    type Err = SessionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start().trim_end_matches(['\r', '\n']);
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line.trim_end(), ""),
        };

        match word {
            "owner" => {
                let name = rest.trim();
                if name.is_empty() {
                    Err(SessionError::MissingArgument("owner"))
                } else {
                    Ok(Command::Owner(name.to_string()))
                }
            }
            "all" => Ok(Command::All),
            "search" => Ok(Command::Search(rest.to_string())),
            "clear" => Ok(Command::Clear),
            "reset" => Ok(Command::Reset),
            "show" | "" => Ok(Command::Show),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(SessionError::UnknownCommand(other.to_string())),
        }
    }
}

/// What the front end should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Render(String),
    Quit,
}

#[derive(Debug)]
pub struct Session {
    browser: ProductBrowser,
}

impl Session {
    pub fn new(browser: ProductBrowser) -> Self {
        Self { browser }
    }

    pub fn browser(&self) -> &ProductBrowser {
        &self.browser
    }

    pub fn render(&self) -> String {
        view::render(&self.browser)
    }

    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Owner(name) => self.browser.set_owner(name),
            Command::All => self.browser.set_owner(OwnerFilter::ALL),
            Command::Search(text) => self.browser.set_query(text),
            Command::Clear => self.browser.clear_query(),
            Command::Reset => self.browser.reset_all(),
            Command::Show => {}
            Command::Quit => return Outcome::Quit,
        }
        Outcome::Render(self.render())
    }

    pub fn handle_line(&mut self, line: &str) -> Result<Outcome, SessionError> {
        let command = line.parse::<Command>()?;
        Ok(self.apply(command))
    }

    /// Renders once, then processes `input` until EOF or `quit`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        write!(output, "{}", self.render())?;
        writeln!(output, "{HELP}")?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            match self.handle_line(&line) {
                Ok(Outcome::Render(rendered)) => write!(output, "\n{rendered}")?,
                Ok(Outcome::Quit) => break,
                Err(err) => {
                    tracing::debug!(%err, "rejected command");
                    writeln!(output, "error: {err}\n{HELP}")?;
                }
            }
            output.flush()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!("owner Roma".parse(), Ok(Command::Owner("Roma".to_string())));
        assert_eq!(
            "owner  Mary Jane ".parse(),
            Ok(Command::Owner("Mary Jane".to_string()))
        );
        assert_eq!("all".parse(), Ok(Command::All));
        assert_eq!("clear".parse(), Ok(Command::Clear));
        assert_eq!("reset".parse(), Ok(Command::Reset));
        assert_eq!("".parse(), Ok(Command::Show));
        assert_eq!("exit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn search_keeps_text_verbatim() {
        assert_eq!(
            "search  PH ".parse(),
            Ok(Command::Search(" PH ".to_string()))
        );
        assert_eq!("search".parse(), Ok(Command::Search(String::new())));
    }

    #[test]
    fn any_whitespace_separates_the_command_word() {
        assert_eq!("owner\tRoma".parse(), Ok(Command::Owner("Roma".to_string())));
        assert_eq!("search\tbag".parse(), Ok(Command::Search("bag".to_string())));
        assert_eq!("clear\t".parse(), Ok(Command::Clear));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            "sort name".parse::<Command>(),
            Err(SessionError::UnknownCommand("sort".to_string()))
        );
        assert_eq!(
            "owner   ".parse::<Command>(),
            Err(SessionError::MissingArgument("owner"))
        );
    }
}
