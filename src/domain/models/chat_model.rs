use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// The fixed set of Groq-hosted models offered in the model selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ChatModel {
    #[default]
    #[serde(rename = "llama-3.3-70b-versatile")]
    Llama33Versatile,
    #[serde(rename = "llama-3.1-8b-instant")]
    Llama31Instant,
    #[serde(rename = "llama-guard-3-8b")]
    LlamaGuard3,
}

impl ChatModel {
    /// Every selectable model, in display order.
    pub const ALL: [ChatModel; 3] = [
        ChatModel::Llama33Versatile,
        ChatModel::Llama31Instant,
        ChatModel::LlamaGuard3,
    ];

    pub fn all() -> &'static [ChatModel] {
        &Self::ALL
    }

    /// The identifier sent to the provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatModel::Llama33Versatile => "llama-3.3-70b-versatile",
            ChatModel::Llama31Instant => "llama-3.1-8b-instant",
            ChatModel::LlamaGuard3 => "llama-guard-3-8b",
        }
    }
}

impl fmt::Display for ChatModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatModel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|model| model.as_str() == id)
            .ok_or_else(|| DomainError::invalid_input(format!("Unknown model: {}", id)))
    }
}
