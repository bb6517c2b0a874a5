//! JSON and YAML output
//!
//! Both emit the bare record (no kind tag), with the field names the
//! rendering layer expects.

use super::registry::{FormatError, Formatter};
use crate::content::envelope::ExtractedDocument;
use serde::Serialize;

pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    fn render<T: Serialize>(&self, record: &T) -> Result<String, FormatError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(record)
        } else {
            serde_json::to_string(record)
        };
        result.map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &ExtractedDocument) -> Result<String, FormatError> {
        match doc {
            ExtractedDocument::LessonPlan(record) => self.render(record),
            ExtractedDocument::Quiz(record) => self.render(record),
            ExtractedDocument::Icebreaker(record) => self.render(record),
        }
    }

    fn description(&self) -> &str {
        "The extracted record as JSON"
    }
}

pub struct YamlFormatter;

fn to_yaml<T: Serialize>(record: &T) -> Result<String, FormatError> {
    serde_yaml::to_string(record).map_err(|e| FormatError::SerializationError(e.to_string()))
}

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, doc: &ExtractedDocument) -> Result<String, FormatError> {
        match doc {
            ExtractedDocument::LessonPlan(record) => to_yaml(record),
            ExtractedDocument::Quiz(record) => to_yaml(record),
            ExtractedDocument::Icebreaker(record) => to_yaml(record),
        }
    }

    fn description(&self) -> &str {
        "The extracted record as YAML"
    }
}
