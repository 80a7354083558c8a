pub mod perplexity;

pub use perplexity::{KNOWN_MODELS, PerplexityProvider};
