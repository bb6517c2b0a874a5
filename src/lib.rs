//! # diversemind
//!
//! Structured extraction for generated lesson plans, quizzes and icebreakers.
//!
//! See the [content module](content) for the extractors and the record types
//! they produce.

pub mod content;
