use flip_spec::{CardEvent, Face, Page, Transition};

/// A single line typed into the study shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    /// Jump to a card (1-based).
    Card(usize),
    Next,
    Prev,
    Flip,
    /// Pick an option (1-based).
    Pick(usize),
    Type(String),
    Clear,
    Check,
    Show,
    Help,
    Quit,
}

/// Error produced when a shell line cannot be understood.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandParseError {
    pub user_message: String,
    pub debug_message: Option<String>,
}

impl CommandParseError {
    pub fn new(user_message: impl Into<String>, debug_message: Option<String>) -> Self {
        Self {
            user_message: user_message.into(),
            debug_message,
        }
    }
}

pub const HELP_TEXT: &str = "Commands:
  list          list all cards
  card N        go to card N
  next, prev    move between cards
  flip          flip the current card
  pick N        choose option N on a multiple-choice card
  type TEXT     add a line to your free-response answer
  clear         clear your free-response answer
  check         check your free-response answer
  show          show the current card
  help          show this help
  quit, exit    leave the session";

pub fn parse_command(raw: &str) -> Result<ShellCommand, CommandParseError> {
    let trimmed = raw.trim();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };
    let command = match word.to_ascii_lowercase().as_str() {
        "" | "show" => ShellCommand::Show,
        "list" | "ls" => ShellCommand::List,
        "card" | "go" => ShellCommand::Card(parse_position(rest, "card")?),
        "next" | "n" => ShellCommand::Next,
        "prev" | "p" => ShellCommand::Prev,
        "flip" | "f" => ShellCommand::Flip,
        "pick" => ShellCommand::Pick(parse_position(rest, "option")?),
        "type" | "t" => {
            if rest.is_empty() {
                return Err(CommandParseError::new(
                    "type needs some text, e.g. `type the average falls`",
                    None,
                ));
            }
            ShellCommand::Type(rest.to_string())
        }
        "clear" => ShellCommand::Clear,
        "check" => ShellCommand::Check,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        // A bare number picks that option.
        other => match other.parse::<usize>() {
            Ok(_) => ShellCommand::Pick(parse_position(other, "option")?),
            Err(_) => {
                return Err(CommandParseError::new(
                    format!("unknown command '{}'", word),
                    Some("type `help` to list commands".into()),
                ));
            }
        },
    };
    Ok(command)
}

fn parse_position(raw: &str, what: &str) -> Result<usize, CommandParseError> {
    match raw.parse::<usize>() {
        Ok(position) if position >= 1 => Ok(position),
        _ => Err(CommandParseError::new(
            format!("expected a {} number starting at 1", what),
            Some(format!("got '{}'", raw)),
        )),
    }
}

/// What the presenter should show after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Card,
    List,
    Help,
    Unchanged(String),
    NoCards,
    Quit,
}

/// Interactive session over a mounted page with a current-card cursor.
pub struct StudySession {
    page: Page,
    cursor: usize,
}

impl StudySession {
    pub fn new(page: Page) -> Self {
        Self { page, cursor: 0 }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn execute(&mut self, command: ShellCommand) -> Reply {
        let total = self.page.cards().len();
        if total == 0 && !matches!(command, ShellCommand::Help | ShellCommand::Quit) {
            return Reply::NoCards;
        }
        match command {
            ShellCommand::Help => Reply::Help,
            ShellCommand::Quit => Reply::Quit,
            ShellCommand::List => Reply::List,
            ShellCommand::Show => Reply::Card,
            ShellCommand::Card(position) => {
                if position > total {
                    return Reply::Unchanged(format!("There are only {} cards.", total));
                }
                self.cursor = position - 1;
                Reply::Card
            }
            ShellCommand::Next => {
                if self.cursor + 1 >= total {
                    return Reply::Unchanged("Already at the last card.".into());
                }
                self.cursor += 1;
                Reply::Card
            }
            ShellCommand::Prev => {
                if self.cursor == 0 {
                    return Reply::Unchanged("Already at the first card.".into());
                }
                self.cursor -= 1;
                Reply::Card
            }
            ShellCommand::Pick(_)
            | ShellCommand::Type(_)
            | ShellCommand::Clear
            | ShellCommand::Check
                if self.showing_front() =>
            {
                Reply::Unchanged("Flip the card first.".into())
            }
            ShellCommand::Flip => self.send(
                CardEvent::ClickCard,
                "The answer is revealed; the card stays on its back.",
            ),
            ShellCommand::Pick(position) => self.send(
                CardEvent::SelectOption(position - 1),
                "That option cannot be picked on this card.",
            ),
            ShellCommand::Type(text) => {
                let has_draft = self
                    .page
                    .card(self.cursor)
                    .is_some_and(|card| !card.state().draft_answer.is_empty());
                let chunk = if has_draft {
                    format!("\n{}", text)
                } else {
                    text
                };
                self.send(
                    CardEvent::TypeText(chunk),
                    "This card does not take a written answer right now.",
                )
            }
            ShellCommand::Clear => self.send(CardEvent::SetDraft(String::new()), "Nothing to clear."),
            ShellCommand::Check => self.send(
                CardEvent::CheckAnswer,
                "This card has no answer to check right now.",
            ),
        }
    }

    // Answer controls live on the back face.
    fn showing_front(&self) -> bool {
        self.page
            .card(self.cursor)
            .is_some_and(|card| card.state().face == Face::Front)
    }

    fn send(&mut self, event: CardEvent, ignored: &str) -> Reply {
        match self.page.dispatch(self.cursor, event) {
            Some(Transition::Changed) => Reply::Card,
            _ => Reply::Unchanged(ignored.to_string()),
        }
    }
}
