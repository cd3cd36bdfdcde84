pub mod io;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::*;
pub use parsing::{ParseOptions, SwimParser, parse_exercise_tokens, parse_swim_text};
