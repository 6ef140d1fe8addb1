//! # Doclens LLM
//!
//! Prompt task descriptors, completion clients, and the analysis
//! orchestrator. Each analysis task is a declarative instruction plus named
//! output fields, interpreted by one generic runner against any
//! [`CompletionClient`].

pub mod analyzer;
pub mod client;
pub mod groq;
pub mod task;

pub use analyzer::DocumentAnalyzer;
pub use client::{CompletionClient, MockCompletionClient};
pub use groq::{GroqClient, LlmConfig};
pub use task::{FieldSpec, PromptTask, TaskOutput, ENTITY_EXTRACTION, SENTIMENT_ANALYSIS, SUMMARIZATION};
