#![allow(missing_docs)]

pub mod card;
pub mod page;
pub mod render;
pub mod schema;
pub mod spec;
pub mod store;
pub mod validate;
pub mod view;

pub use card::{CardEvent, CardState, Face, FlipCard, McqAnswer, Transition};
pub use page::{Page, PagePolicy, PageView, UnitSelector, VideoView};
pub use render::{render_card_text, render_json_ui, render_text};
pub use schema::content_schema;
pub use spec::{CardBack, FrqBack, McqBack, Question, QuestionType, VideoUnit};
pub use store::{StoreError, UnitStore};
pub use validate::{ValidationIssue, ValidationResult, validate};
pub use view::{BackView, CardView, FrqView, Marking, McqView, OptionView, SAMPLE_ANSWER_FALLBACK};
