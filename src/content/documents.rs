//! Extracted document records
//!
//! One record per content type. Every field is present with a defined
//! default (empty string or empty list) so renderers never branch on a
//! missing value. Serialized names match what the rendering layer reads:
//! camelCase, `primarySOL`, `executiveFunction`, and `type` for a question's
//! kind.

use serde::{Deserialize, Serialize};

/// A generated lesson plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LessonPlanDocument {
    pub title: String,
    pub objective: String,
    pub grade: String,
    pub subject: String,
    pub strand: String,
    pub topic: String,
    #[serde(rename = "primarySOL")]
    pub primary_sol: String,
    pub materials: String,
    pub vocabulary: String,
    pub sections: Vec<Section>,
}

/// A numbered lesson section such as `**2. Guided Practice**`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Section {
    pub title: String,
    pub method: String,
    pub activities: String,
    pub executive_function: String,
}

impl Section {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// A generated quiz or redesigned assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizDocument {
    pub title: String,
    pub questions: Vec<Question>,
}

/// One question block.
///
/// `number` is the numeral exactly as written. Gaps and repeats are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Question {
    pub number: String,
    #[serde(rename = "type")]
    pub question_type: String,
    pub text: String,
    pub strategy: String,
    pub options: Vec<String>,
}

/// A generated icebreaker activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IcebreakerDocument {
    pub title: String,
    pub objective: String,
    pub materials: String,
    pub instructions: Vec<String>,
    pub questions: Vec<String>,
    pub debrief: Vec<String>,
    pub tips: Vec<String>,
    pub variations: Vec<String>,
}
