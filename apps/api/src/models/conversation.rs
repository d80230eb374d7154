use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One question/answer exchange. Never mutated once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub question: String,
    pub answer: String,
}

impl ConversationTurn {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A live conversation owned by the session store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    pub turns: Vec<ConversationTurn>,
    pub last_active: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            turns: Vec::new(),
            last_active: now,
        }
    }
}
