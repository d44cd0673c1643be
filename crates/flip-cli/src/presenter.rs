use flip_spec::{BackView, CardView, Face, FlipCard, PageView, render_card_text};

use crate::shell::{CommandParseError, HELP_TEXT};

/// Controls which bits of state the study shell prints.
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum Verbosity {
    /// Clean output: cards and messages only.
    Clean,
    /// Verbose output: card state after every command, parse expectations.
    Verbose,
}

impl Verbosity {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Clean
        }
    }

    pub fn is_verbose(&self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}

/// Prints the page and the current card for the study shell.
pub struct StudyPresenter {
    verbosity: Verbosity,
}

impl StudyPresenter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn show_header(&self, page: &PageView) {
        match page {
            PageView::Empty { message } => println!("{}", message),
            PageView::Unit {
                title,
                heading,
                subheading,
                video,
                cards,
                ..
            } => {
                println!("{}", heading);
                println!("{}", subheading);
                println!("Video: {} <{}>", title, video.src);
                println!("{} cards. Type `help` for commands.", cards.len());
            }
        }
    }

    pub fn show_card(&self, card: &FlipCard, position: usize, total: usize) {
        let view = card.view();
        println!("Card {}/{}", position + 1, total);
        println!("{}", render_card_text(&view));
        if let Some(hint) = card_hint(&view) {
            println!("({})", hint);
        }
        if self.verbosity.is_verbose() {
            let state = card.state();
            println!(
                "State: face={} revealed={} selected={:?} draft_len={}",
                state.face.as_str(),
                state.answer_revealed,
                state.selected_option,
                state.draft_answer.chars().count()
            );
        }
    }

    pub fn show_list(&self, cards: &[FlipCard], cursor: usize) {
        for (index, card) in cards.iter().enumerate() {
            let marker = if index == cursor { ">" } else { " " };
            let status = if card.is_revealed() {
                "answered"
            } else {
                "open"
            };
            println!(
                "{} {}. [{}] {} ({})",
                marker,
                index + 1,
                card.question().kind().as_str(),
                first_line(&card.question().front),
                status
            );
        }
    }

    pub fn show_help(&self) {
        println!("{}", HELP_TEXT);
    }

    pub fn show_unchanged(&self, message: &str) {
        println!("{}", message);
    }

    pub fn show_no_cards(&self) {
        println!("There are no cards to study.");
    }

    pub fn show_parse_error(&self, error: &CommandParseError) {
        eprintln!("Invalid command: {}", error.user_message);
        if self.verbosity.is_verbose()
            && let Some(debug) = &error.debug_message
        {
            eprintln!("  {}", debug);
        }
    }

    pub fn show_summary(&self, cards: &[FlipCard]) {
        let answered = cards.iter().filter(|card| card.is_revealed()).count();
        println!("Answered {}/{} cards. Bye!", answered, cards.len());
    }
}

fn card_hint(view: &CardView) -> Option<&'static str> {
    match (&view.back, view.face) {
        (_, Face::Front) => Some("flip to see the question"),
        (BackView::Mcq(mcq), _) if !mcq.explanation_visible => Some("pick N to answer"),
        (BackView::Frq(frq), _) if frq.input_visible => {
            Some("type TEXT to write, check to see the sample answer")
        }
        _ => None,
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}
