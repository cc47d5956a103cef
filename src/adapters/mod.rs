// Adapters layer: the generative-model client and the prompt/schema/payload contract it speaks.

pub mod gemini;
pub mod parse;
pub mod prompt;

pub use gemini::GeminiAdapter;
