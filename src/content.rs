//! Extraction of structured records from generated classroom content
//!
//! The generation backend returns loosely formatted markdown for three kinds
//! of content. Each kind has an extractor that scans the text once and fills
//! a record whose fields are always present:
//!
//! - [`lesson_plan::extract_lesson_plan`] for lesson plans
//! - [`quiz::extract_quiz`] for quizzes and redesigned assessments
//! - [`icebreaker::extract_icebreaker`] for icebreaker activities
//!
//! Supporting pieces:
//! - [`stripping`] removes the chat wrapper around generated content
//! - [`line_classification`] and [`segmenter`] hold the shared line scanner
//! - [`envelope`] maps backend responses to the right extractor
//! - [`formats`] renders records as JSON, YAML, text or HTML
//! - [`processor`] reads sources and runs the whole chain

pub mod documents;
pub mod envelope;
pub mod formats;
pub mod icebreaker;
pub mod lesson_plan;
pub mod line_classification;
pub mod processor;
pub mod quiz;
pub mod segmenter;
pub mod stripping;

pub use documents::{IcebreakerDocument, LessonPlanDocument, Question, QuizDocument, Section};
pub use envelope::{extract, extract_value, ContentKind, ExtractedDocument, Extractor};
pub use icebreaker::extract_icebreaker;
pub use lesson_plan::extract_lesson_plan;
pub use quiz::{extract_quiz, extract_quiz_with, parse_quiz};
pub use stripping::{clean_lesson_plan_output, strip_wrapper_text, Stripper};
