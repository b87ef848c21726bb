//! Reusable UI components

pub mod admin;
pub mod chat_history;
pub mod chat_input;
pub mod chat_message;
pub mod guard;
pub mod header;
pub mod loading;
pub mod sidebar;

pub use chat_history::ChatHistory;
pub use chat_input::ChatInput;
pub use chat_message::ChatMessage;
pub use guard::{RequireAdmin, RequireAuth};
pub use header::Header;
pub use loading::{LoadingDots, LoadingSpinner, TypingIndicator};
pub use sidebar::Sidebar;
