//! Wire types for the Gemini `generateContent` endpoint.

pub mod generate;

pub use generate::{Candidate, Content, GenerateRequest, GenerateResponse, Part};
