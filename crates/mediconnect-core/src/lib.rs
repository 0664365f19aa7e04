pub mod config;
pub mod content;
pub mod error;
pub mod knowledge;
pub mod resolver;
pub mod session;

// Re-export main types for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use knowledge::{Category, KnowledgeBase};
pub use resolver::{match_category, reply_for, resolve};
pub use session::{ChatSession, Message, Sender};
