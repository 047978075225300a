mod test;

use crate::ticket::Category;
use std::str::FromStr;

pub const HELP: &str = "\
commands:
  queue <prescription|pickup|checkout>   take a ticket
  login <password>                       unlock admin controls
  logout                                 lock admin controls
  next                                   call the next ticket (admin)
  remove <number>                        drop a ticket (admin)
  clear                                  clear the whole board (admin)
  show                                   print the board
  help                                   print this text
  quit                                   leave";

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Queue(Category),
    Login(String),
    Logout,
    Next,
    Remove(String),
    Clear,
    Show,
    Help,
    Quit,
}

impl ShellCommand {
    /// Commands the local controls hide until an admin login succeeds.
    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            ShellCommand::Next | ShellCommand::Remove(_) | ShellCommand::Clear
        )
    }
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let argument = |name: &str| {
            if rest.is_empty() {
                Err(format!("{} needs an argument", name))
            } else {
                Ok(rest.to_string())
            }
        };

        match word.to_ascii_lowercase().as_str() {
            "queue" | "q" => Ok(ShellCommand::Queue(argument("queue")?.parse()?)),
            "login" => Ok(ShellCommand::Login(argument("login")?)),
            "logout" => Ok(ShellCommand::Logout),
            "next" | "n" => Ok(ShellCommand::Next),
            "remove" | "rm" => Ok(ShellCommand::Remove(argument("remove")?)),
            "clear" => Ok(ShellCommand::Clear),
            "show" | "" => Ok(ShellCommand::Show),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            other => Err(format!("unknown command: {} (try help)", other)),
        }
    }
}

/// Whether a confirmation answer means yes.
pub fn confirmed(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
