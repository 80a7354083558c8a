pub mod provider;

pub use provider::{ChatMessage, Provider};
