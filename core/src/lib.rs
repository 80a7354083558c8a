pub mod chains;
pub mod config;
pub mod model;
pub mod providers;
pub mod tools;
pub mod traits;

pub use chains::{ChainError, ChainFile, ChainStep, StepDescriptor, execute_chain};
pub use config::*;
pub use model::{AskOptions, ChatModel};
pub use providers::*;
pub use tools::{ToolOptions, ToolRegistry};
pub use traits::*;
