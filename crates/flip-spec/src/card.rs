use log::{debug, trace};
use serde::Serialize;

use crate::spec::question::{CardBack, Question};

/// Which side of the card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    #[default]
    Front,
    Back,
}

impl Face {
    pub fn toggled(self) -> Self {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
        }
    }
}

/// Answer sub-state of a multiple-choice card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum McqAnswer {
    Unanswered,
    Answered(usize),
}

/// User input addressed to a single card.
///
/// Everything except `ClickCard` targets an element on the back face and
/// never toggles the face on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardEvent {
    /// Click on the card body.
    ClickCard,
    /// Click on the option at this index.
    SelectOption(usize),
    /// Keystrokes appended to the free-response draft.
    TypeText(String),
    /// Replace the whole free-response draft.
    SetDraft(String),
    /// The "check answer" control.
    CheckAnswer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Changed,
    Ignored,
}

impl Transition {
    pub fn is_changed(&self) -> bool {
        matches!(self, Transition::Changed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardState {
    pub face: Face,
    pub selected_option: Option<usize>,
    pub answer_revealed: bool,
    pub draft_answer: String,
}

/// A question together with the state owned by its rendered card.
#[derive(Debug, Clone)]
pub struct FlipCard {
    key: String,
    question: Question,
    state: CardState,
}

impl FlipCard {
    pub fn new(key: impl Into<String>, question: Question) -> Self {
        Self {
            key: key.into(),
            question,
            state: CardState::default(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state.answer_revealed
    }

    /// `None` unless the card carries a well-formed multiple-choice back.
    pub fn mcq_answer(&self) -> Option<McqAnswer> {
        match self.question.back {
            CardBack::Mcq(_) => Some(match self.state.selected_option {
                Some(index) => McqAnswer::Answered(index),
                None => McqAnswer::Unanswered,
            }),
            _ => None,
        }
    }

    pub fn apply(&mut self, event: CardEvent) -> Transition {
        let transition = match &event {
            CardEvent::ClickCard => self.click_card(),
            CardEvent::SelectOption(index) => self.select_option(*index),
            CardEvent::TypeText(text) => self.type_text(text),
            CardEvent::SetDraft(text) => self.set_draft(text),
            CardEvent::CheckAnswer => self.check_answer(),
        };
        match transition {
            Transition::Changed => debug!(
                "[Card {}] {:?}: face={} revealed={}",
                self.key,
                event,
                self.state.face.as_str(),
                self.state.answer_revealed
            ),
            Transition::Ignored => trace!("[Card {}] ignored {:?}", self.key, event),
        }
        transition
    }

    fn click_card(&mut self) -> Transition {
        if self.state.answer_revealed {
            return Transition::Ignored;
        }
        self.state.face = self.state.face.toggled();
        Transition::Changed
    }

    fn select_option(&mut self, index: usize) -> Transition {
        let CardBack::Mcq(back) = &self.question.back else {
            return Transition::Ignored;
        };
        if self.state.selected_option.is_some() || index >= back.options.len() {
            return Transition::Ignored;
        }
        self.state.selected_option = Some(index);
        self.reveal();
        Transition::Changed
    }

    fn type_text(&mut self, text: &str) -> Transition {
        if !self.accepts_draft() || text.is_empty() {
            return Transition::Ignored;
        }
        self.state.draft_answer.push_str(text);
        Transition::Changed
    }

    fn set_draft(&mut self, text: &str) -> Transition {
        if !self.accepts_draft() || self.state.draft_answer == text {
            return Transition::Ignored;
        }
        self.state.draft_answer = text.to_string();
        Transition::Changed
    }

    fn check_answer(&mut self) -> Transition {
        if !self.accepts_draft() {
            return Transition::Ignored;
        }
        self.reveal();
        Transition::Changed
    }

    fn accepts_draft(&self) -> bool {
        matches!(self.question.back, CardBack::Frq(_)) && !self.state.answer_revealed
    }

    // Revealing pins the card to its answer face for the rest of its life.
    fn reveal(&mut self) {
        self.state.answer_revealed = true;
        self.state.face = Face::Back;
    }
}
