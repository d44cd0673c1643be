use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::spec::question::{Question, QuestionRecord};

/// One lecture video and the flip-cards that accompany it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoUnit {
    pub id: String,
    pub video_url: String,
    pub title: String,
    #[serde(default)]
    #[schemars(with = "Vec<QuestionRecord>")]
    pub questions: Vec<Question>,
}

impl VideoUnit {
    /// Stable key for the card rendered at `index`.
    pub fn card_key(&self, index: usize) -> String {
        format!("{}-q-{}", self.id, index)
    }
}
