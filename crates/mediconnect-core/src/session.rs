//! UI-agnostic chat state
//!
//! A [`ChatSession`] owns the message log and the draft input. Front ends only
//! mutate it through [`ChatSession::submit`] and [`ChatSession::set_draft`], and
//! redraw from [`ChatSession::messages`] and [`ChatSession::draft`].

use crate::knowledge::KnowledgeBase;
use crate::resolver::{match_category, reply_for};
use serde::{Deserialize, Serialize};

pub const GREETING: [&str; 5] = [
    "Hello! I am your Homeopathic Care Agent.",
    "Ask any health query in simple words and I will reply in an easy way.",
    "Share your main symptom, how long it has been there, and if you take any medicine.",
    "I provide general information only. This is not a diagnosis or emergency service.",
    "Do not share personal IDs; your messages stay in this browser session.",
];

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Assistant => "Agent",
        }
    }
}

/// A chat message; never edited once it is in the log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    knowledge: KnowledgeBase,
    messages: Vec<Message>,
    draft: String,
}

impl ChatSession {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        let greeting = Message {
            sender: Sender::Assistant,
            lines: GREETING.iter().map(|line| line.to_string()).collect(),
        };

        Self {
            knowledge,
            messages: vec![greeting],
            draft: String::new(),
        }
    }

    /// Answer a query. Blank input is ignored and returns `None`.
    pub fn submit(&mut self, raw_query: &str) -> Option<&Message> {
        let query = raw_query.trim();
        if query.is_empty() {
            return None;
        }

        let category = match_category(&self.knowledge, query);
        tracing::debug!(
            category = category.map(|c| c.title.as_str()),
            turn = self.turns() + 1,
            "Resolved query"
        );
        let lines = reply_for(category);

        self.messages.push(Message {
            sender: Sender::User,
            lines: vec![query.to_string()],
        });
        self.messages.push(Message {
            sender: Sender::Assistant,
            lines,
        });
        self.draft.clear();

        self.messages.last()
    }

    /// Submit whatever is in the draft
    pub fn submit_draft(&mut self) -> Option<&Message> {
        let draft = self.draft.clone();
        self.submit(&draft)
    }

    /// Replace the draft verbatim
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Number of accepted submissions
    pub fn turns(&self) -> usize {
        (self.messages.len() - 1) / 2
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(KnowledgeBase::builtin())
    }
}
