// src/models/opinion.rs

use serde::{Deserialize, Serialize};

/// Vote a user casts on a photo, stored as 'LIKE' / 'DISLIKE'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OpinionKind {
    Like,
    Dislike,
}

impl OpinionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpinionKind::Like => "LIKE",
            OpinionKind::Dislike => "DISLIKE",
        }
    }
}
