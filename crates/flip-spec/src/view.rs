use serde::Serialize;

use crate::{
    card::{CardState, Face, FlipCard},
    spec::question::{CardBack, FrqBack, McqBack},
};

/// Shown in place of a sample answer the author did not provide.
pub const SAMPLE_ANSWER_FALLBACK: &str = "Sample answer not available.";

/// Emphasis applied to an option once the answer is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Marking {
    Neutral,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub index: usize,
    pub text: String,
    pub visible: bool,
    pub selectable: bool,
    pub marking: Marking,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct McqView {
    pub question: String,
    pub options: Vec<OptionView>,
    pub explanation_visible: bool,
    pub explanation: String,
}

impl McqView {
    pub fn visible_options(&self) -> impl Iterator<Item = &OptionView> {
        self.options.iter().filter(|option| option.visible)
    }

    pub fn marked_options(&self) -> impl Iterator<Item = &OptionView> {
        self.options
            .iter()
            .filter(|option| option.marking != Marking::Neutral)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrqView {
    pub prompt: String,
    pub draft: String,
    pub revealed: bool,
    pub input_visible: bool,
    /// The user's draft, once revealed and only if non-empty.
    pub your_answer: Option<String>,
    /// Sample answer or [`SAMPLE_ANSWER_FALLBACK`], once revealed.
    pub sample_answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BackView {
    Mcq(McqView),
    Frq(FrqView),
    /// Malformed content: the back face has nothing interactive.
    Empty,
}

/// Read-only snapshot of one card for a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub key: String,
    pub face: Face,
    pub front: String,
    pub back: BackView,
}

impl FlipCard {
    pub fn view(&self) -> CardView {
        let state = self.state();
        let back = match &self.question().back {
            CardBack::Mcq(back) => BackView::Mcq(mcq_view(back, state)),
            CardBack::Frq(back) => BackView::Frq(frq_view(back, state)),
            CardBack::Unavailable { .. } => BackView::Empty,
        };
        CardView {
            key: self.key().to_string(),
            face: state.face,
            front: self.question().front.clone(),
            back,
        }
    }
}

fn mcq_view(back: &McqBack, state: &CardState) -> McqView {
    let revealed = state.answer_revealed;
    let options = back
        .options
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let selected = state.selected_option == Some(index);
            let correct = back.is_correct(index);
            let marking = match (revealed, correct, selected) {
                (false, _, _) => Marking::Neutral,
                (true, true, _) => Marking::Correct,
                (true, false, true) => Marking::Incorrect,
                (true, false, false) => Marking::Neutral,
            };
            OptionView {
                index,
                text: text.clone(),
                visible: !revealed || selected || correct,
                selectable: !revealed,
                marking,
            }
        })
        .collect();
    McqView {
        question: back.question.clone(),
        options,
        explanation_visible: revealed,
        explanation: back.explanation.clone(),
    }
}

fn frq_view(back: &FrqBack, state: &CardState) -> FrqView {
    let revealed = state.answer_revealed;
    let draft = &state.draft_answer;
    let your_answer = (revealed && !draft.is_empty()).then(|| draft.clone());
    let sample_answer = revealed.then(|| {
        back.sample_answer
            .as_deref()
            .filter(|sample| !sample.is_empty())
            .unwrap_or(SAMPLE_ANSWER_FALLBACK)
            .to_string()
    });
    FrqView {
        prompt: back.prompt.clone(),
        draft: draft.clone(),
        revealed,
        input_visible: !revealed,
        your_answer,
        sample_answer,
    }
}
