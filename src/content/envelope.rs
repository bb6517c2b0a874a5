//! Response envelope and dispatch
//!
//! The generation backend answers with a JSON body whose content field
//! depends on what was requested: `lessonPlan`, `assessment` or `activity`.
//! This module maps a [`ContentKind`] to that field and to its extractor.
//!
//! Content that is missing, `null`, or not a string is not an error: it
//! yields the kind's empty record and a warning. Only a body that is not
//! JSON at all fails.

use super::documents::{IcebreakerDocument, LessonPlanDocument, QuizDocument};
use super::icebreaker::extract_icebreaker;
use super::lesson_plan::extract_lesson_plan;
use super::quiz::extract_quiz_with;
use super::stripping::Stripper;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("response body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("unknown content kind '{0}' (expected lesson-plan, quiz or icebreaker)")]
    UnknownKind(String),
}

/// What was generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    LessonPlan,
    Quiz,
    Icebreaker,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [
        ContentKind::LessonPlan,
        ContentKind::Quiz,
        ContentKind::Icebreaker,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ContentKind::LessonPlan => "lesson-plan",
            ContentKind::Quiz => "quiz",
            ContentKind::Icebreaker => "icebreaker",
        }
    }

    /// The backend response field holding the generated text.
    pub fn response_field(self) -> &'static str {
        match self {
            ContentKind::LessonPlan => "lessonPlan",
            ContentKind::Quiz => "assessment",
            ContentKind::Icebreaker => "activity",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContentKind {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lesson-plan" | "lesson_plan" | "lessonPlan" => Ok(ContentKind::LessonPlan),
            "quiz" | "assessment" => Ok(ContentKind::Quiz),
            "icebreaker" | "activity" => Ok(ContentKind::Icebreaker),
            other => Err(EnvelopeError::UnknownKind(other.to_string())),
        }
    }
}

/// An extracted record of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "document", rename_all = "kebab-case")]
pub enum ExtractedDocument {
    LessonPlan(LessonPlanDocument),
    Quiz(QuizDocument),
    Icebreaker(IcebreakerDocument),
}

impl ExtractedDocument {
    /// The fully defaulted record for `kind`.
    pub fn empty(kind: ContentKind) -> Self {
        match kind {
            ContentKind::LessonPlan => ExtractedDocument::LessonPlan(LessonPlanDocument::default()),
            ContentKind::Quiz => ExtractedDocument::Quiz(QuizDocument::default()),
            ContentKind::Icebreaker => ExtractedDocument::Icebreaker(IcebreakerDocument::default()),
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            ExtractedDocument::LessonPlan(_) => ContentKind::LessonPlan,
            ExtractedDocument::Quiz(_) => ContentKind::Quiz,
            ExtractedDocument::Icebreaker(_) => ContentKind::Icebreaker,
        }
    }
}

/// Dispatches raw content to the extractor for its kind.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    stripper: Stripper,
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `stripper` for quiz content.
    pub fn with_stripper(stripper: Stripper) -> Self {
        Self { stripper }
    }

    pub fn stripper(&self) -> &Stripper {
        &self.stripper
    }

    pub fn extract(&self, kind: ContentKind, raw: &str) -> ExtractedDocument {
        match kind {
            ContentKind::LessonPlan => ExtractedDocument::LessonPlan(extract_lesson_plan(raw)),
            ContentKind::Quiz => ExtractedDocument::Quiz(extract_quiz_with(&self.stripper, raw)),
            ContentKind::Icebreaker => ExtractedDocument::Icebreaker(extract_icebreaker(raw)),
        }
    }

    /// Extract from a JSON value that should be a string.
    pub fn extract_value(&self, kind: ContentKind, value: &Value) -> ExtractedDocument {
        match value {
            Value::String(raw) => self.extract(kind, raw),
            other => {
                warn!(%kind, found = value_type(other), "content is not a string, using empty record");
                ExtractedDocument::empty(kind)
            }
        }
    }

    /// Extract from a backend response body.
    ///
    /// An object body is read through the kind's response field; a bare JSON
    /// string is taken as the content itself.
    pub fn extract_response(
        &self,
        kind: ContentKind,
        body: &str,
    ) -> Result<ExtractedDocument, EnvelopeError> {
        let value: Value = serde_json::from_str(body)?;
        let content = match &value {
            Value::Object(map) => map.get(kind.response_field()),
            other => Some(other),
        };
        match content {
            Some(content) => Ok(self.extract_value(kind, content)),
            None => {
                warn!(%kind, field = kind.response_field(), "response has no content field, using empty record");
                Ok(ExtractedDocument::empty(kind))
            }
        }
    }
}

fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Extract `raw` with the built-in stripping patterns.
pub fn extract(kind: ContentKind, raw: &str) -> ExtractedDocument {
    Extractor::new().extract(kind, raw)
}

/// Extract from a JSON value with the built-in stripping patterns.
pub fn extract_value(kind: ContentKind, value: &Value) -> ExtractedDocument {
    Extractor::new().extract_value(kind, value)
}
