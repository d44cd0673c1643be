pub mod question;
pub mod unit;

pub use question::{BackRecord, CardBack, FrqBack, McqBack, Question, QuestionRecord, QuestionType};
pub use unit::VideoUnit;
