use serde::{Deserialize, Serialize};

use super::Discipline;

/// Client-side accumulation of a service request before classification
///
/// Each `with_*` call returns a new draft; nothing is mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequestDraft {
    pub description: String,
    #[serde(default)]
    pub image_ref: Option<String>,
    #[serde(default)]
    pub preselected: Option<Discipline>,
    #[serde(default)]
    pub chat_turns: Vec<String>,
}

impl ServiceRequestDraft {
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), ..Self::default() }
    }

    pub fn with_image(self, image_ref: impl Into<String>) -> Self {
        Self { image_ref: Some(image_ref.into()), ..self }
    }

    pub fn with_preselected(self, discipline: Discipline) -> Self {
        Self { preselected: Some(discipline), ..self }
    }

    pub fn with_turn(self, turn: impl Into<String>) -> Self {
        let mut chat_turns = self.chat_turns;
        chat_turns.push(turn.into());
        Self { chat_turns, ..self }
    }

    /// Description followed by every chat turn, blank entries skipped
    pub fn combined_text(&self) -> String {
        std::iter::once(self.description.as_str())
            .chain(self.chat_turns.iter().map(String::as_str))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
