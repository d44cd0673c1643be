use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared question type in the authoring format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Mcq,
    Frq,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Mcq => "mcq",
            QuestionType::Frq => "frq",
        }
    }
}

/// Back face of a multiple-choice card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct McqBack {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer_index: usize,
    pub explanation: String,
}

impl McqBack {
    /// The correct option index, if it points inside `options`.
    pub fn correct_index(&self) -> Option<usize> {
        (self.correct_answer_index < self.options.len()).then_some(self.correct_answer_index)
    }

    pub fn is_correct(&self, index: usize) -> bool {
        self.correct_index() == Some(index)
    }
}

/// Back face of a free-response card.
#[derive(Debug, Clone, PartialEq)]
pub struct FrqBack {
    pub prompt: String,
    pub sample_answer: Option<String>,
}

/// Interactive content shown on the back of a card.
#[derive(Debug, Clone, PartialEq)]
pub enum CardBack {
    Mcq(McqBack),
    Frq(FrqBack),
    /// The authored `back` does not match the declared type. The raw value is
    /// kept so the record serializes back unchanged.
    Unavailable {
        declared: QuestionType,
        raw: Value,
        sample_answer: Option<String>,
    },
}

/// A single flip-card question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "QuestionRecord", into = "QuestionRecord")]
pub struct Question {
    pub front: String,
    pub back: CardBack,
}

impl Question {
    pub fn mcq(front: impl Into<String>, back: McqBack) -> Self {
        Self {
            front: front.into(),
            back: CardBack::Mcq(back),
        }
    }

    pub fn frq(
        front: impl Into<String>,
        prompt: impl Into<String>,
        sample_answer: Option<String>,
    ) -> Self {
        Self {
            front: front.into(),
            back: CardBack::Frq(FrqBack {
                prompt: prompt.into(),
                sample_answer,
            }),
        }
    }

    pub fn kind(&self) -> QuestionType {
        match &self.back {
            CardBack::Mcq(_) => QuestionType::Mcq,
            CardBack::Frq(_) => QuestionType::Frq,
            CardBack::Unavailable { declared, .. } => *declared,
        }
    }

    pub fn is_well_formed(&self) -> bool {
        !matches!(self.back, CardBack::Unavailable { .. })
    }
}

/// Question as written in unit content files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub front: String,
    #[schemars(with = "BackRecord")]
    pub back: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_answer: Option<String>,
}

/// Shapes an author may put under `back`; describes the schema only.
#[derive(JsonSchema)]
#[serde(untagged)]
pub enum BackRecord {
    Choices(McqBack),
    Prompt(String),
    Other(Value),
}

impl From<QuestionRecord> for Question {
    fn from(record: QuestionRecord) -> Self {
        let typed = match (record.kind, &record.back) {
            (QuestionType::Mcq, Value::Object(_)) => {
                serde_json::from_value::<McqBack>(record.back.clone())
                    .ok()
                    .map(CardBack::Mcq)
            }
            (QuestionType::Frq, Value::String(prompt)) => Some(CardBack::Frq(FrqBack {
                prompt: prompt.clone(),
                sample_answer: record.sample_answer.clone(),
            })),
            _ => None,
        };
        let back = typed.unwrap_or_else(|| {
            debug!(
                "[Content] back of {} question '{}' does not match its type",
                record.kind.as_str(),
                record.front
            );
            CardBack::Unavailable {
                declared: record.kind,
                raw: record.back,
                sample_answer: record.sample_answer,
            }
        });
        Question {
            front: record.front,
            back,
        }
    }
}

impl From<Question> for QuestionRecord {
    fn from(question: Question) -> Self {
        let (kind, back, sample_answer) = match question.back {
            CardBack::Mcq(back) => (
                QuestionType::Mcq,
                serde_json::to_value(back).unwrap_or_default(),
                None,
            ),
            CardBack::Frq(back) => (
                QuestionType::Frq,
                Value::String(back.prompt),
                back.sample_answer,
            ),
            CardBack::Unavailable {
                declared,
                raw,
                sample_answer,
            } => (declared, raw, sample_answer),
        };
        QuestionRecord {
            kind,
            front: question.front,
            back,
            sample_answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mcq_record_with_string_back_is_unavailable() {
        let question: Question = serde_json::from_value(json!({
            "type": "mcq",
            "front": "front",
            "back": "just text"
        }))
        .expect("deserialize");
        assert_eq!(question.kind(), QuestionType::Mcq);
        assert!(!question.is_well_formed());
    }

    #[test]
    fn unavailable_back_serializes_unchanged() {
        let cases = [
            json!({
                "type": "frq",
                "front": "front",
                "back": { "question": "q" },
                "sampleAnswer": "sample"
            }),
            json!({
                "type": "frq",
                "front": "mcq-shaped back on a free-response card",
                "back": {
                    "question": "q",
                    "options": ["a", "b"],
                    "correctAnswerIndex": 0,
                    "explanation": "e",
                    "note": "extra"
                }
            }),
        ];
        for raw in cases {
            let question: Question = serde_json::from_value(raw.clone()).expect("deserialize");
            assert!(!question.is_well_formed());
            assert_eq!(serde_json::to_value(&question).expect("serialize"), raw);
        }
    }

    #[test]
    fn mcq_object_missing_fields_is_unavailable() {
        let question: Question = serde_json::from_value(json!({
            "type": "mcq",
            "front": "front",
            "back": { "question": "q", "correctAnswerIndex": 0, "explanation": "e" }
        }))
        .expect("deserialize");
        assert!(matches!(question.back, CardBack::Unavailable { .. }));
    }

    #[test]
    fn correct_index_is_bounds_checked() {
        let back = McqBack {
            question: "q".into(),
            options: vec!["a".into(), "b".into()],
            correct_answer_index: 5,
            explanation: "e".into(),
        };
        assert_eq!(back.correct_index(), None);
        assert!(!back.is_correct(5));
    }
}
