//! Data models for the inbound analysis API and the upstream OpenAI API.
//!
//! This module contains the type definitions for request/response bodies used by:
//! - The inbound analysis endpoint (`analyze`)
//! - The upstream OpenAI chat-completions API (`openai`)

// Author: kelexine (https://github.com/kelexine)

pub mod analyze;
pub mod openai;

pub use analyze::{AnalyzeRequest, ErrorEnvelope};
pub use openai::{ChatCompletionRequest, ChatMessage, ContentPart, ImageUrl, ResponseFormat, Role};
