//! Preamble and conclusion stripping
//!
//! Generation backends wrap the content they were asked for in chat: an
//! opening "Here are the redesigned assessment tasks..." paragraph and a
//! closing "In conclusion, ..." paragraph. [`Stripper`] removes at most one
//! of each, using ordered pattern lists where the first match wins.
//!
//! Precedence, highest first:
//! 1. The literal heading `Redesigned Assessment Tasks:` anywhere in the text:
//!    everything before it is dropped and nothing else is applied.
//! 2. One preamble pattern (anchored at the start, up to the first blank line).
//! 3. One conclusion pattern (from a blank line to the end).
//! 4. The bold heading `**Redesigned Assessment Tasks**`: everything before it
//!    is dropped and the conclusion patterns are tried once more.
//!
//! Runs of three or more newlines are always collapsed to two.
//!
//! Lesson plans use a different cleanup, see [`clean_lesson_plan_output`].

use super::line_classification::collapse_blank_lines;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

pub const TASKS_HEADING: &str = "Redesigned Assessment Tasks:";
pub const BOLD_TASKS_HEADING: &str = "**Redesigned Assessment Tasks**";

const PREAMBLE_PATTERNS: &[&str] = &[
    r"(?is)^Based on the provided CONTEXT \d+, CONTEXT \d+, and CONTEXT \d+.*?\n\n",
    r"(?is)^To improve the assessment tasks.*?\n\n",
    r"(?is)^Here's a revised version.*?\n\n",
    r"(?is)^I will redesign the assessment tasks.*?\n\n",
    r"(?is)^Based on the instructional content.*?\n\n",
    r"(?is)^Here are redesigned assessment tasks.*?\n\n",
    r"(?is)^I have redesigned the assessment.*?\n\n",
    r"(?is)^Below are the redesigned assessment.*?\n\n",
    r"(?is)^To improve or redesign the assessment tasks.*?\n\n",
    r"(?is)^Here are the redesigned assessment tasks.*?\n\n",
    r"(?is)^To address the task, I'll redesign the assessment.*?\n\n",
];

const CONCLUSION_PATTERNS: &[&str] = &[
    r"(?is)\n\nBy incorporating.*$",
    r"(?is)\n\nThese redesigned assessment tasks.*$",
    r"(?is)\n\nThrough these modifications.*$",
    r"(?is)\n\nBy redesigning the assessment tasks.*$",
    r"(?is)\n\nIn conclusion,.*$",
    r"(?is)\n\nThese assessments are designed.*$",
];

static DEFAULT_STRIPPER: Lazy<Stripper> = Lazy::new(Stripper::new);

/// A user-supplied pattern that does not compile.
#[derive(Debug, Error)]
pub enum StripperError {
    #[error("invalid {kind} pattern '{pattern}': {source}")]
    InvalidPattern {
        kind: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Ordered preamble and conclusion patterns.
#[derive(Debug, Clone)]
pub struct Stripper {
    preambles: Vec<Regex>,
    conclusions: Vec<Regex>,
}

impl Stripper {
    /// A stripper with the built-in patterns only.
    pub fn new() -> Self {
        Self {
            preambles: compile_builtin(PREAMBLE_PATTERNS),
            conclusions: compile_builtin(CONCLUSION_PATTERNS),
        }
    }

    /// Built-in patterns followed by the given extras.
    ///
    /// Extras are tried after every built-in pattern of the same kind.
    pub fn with_extra_patterns<P, C>(preambles: P, conclusions: C) -> Result<Self, StripperError>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let mut stripper = Self::new();
        for pattern in preambles {
            stripper.preambles.push(compile_user("preamble", pattern.as_ref())?);
        }
        for pattern in conclusions {
            stripper
                .conclusions
                .push(compile_user("conclusion", pattern.as_ref())?);
        }
        Ok(stripper)
    }

    /// Remove the conversational wrapper around `text`.
    pub fn strip(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        if let Some(index) = text.find(TASKS_HEADING) {
            debug!(index, "found tasks heading, keeping text from there");
            return collapse_blank_lines(&text[index..]);
        }

        let mut cleaned = self.strip_preamble(text);
        cleaned = self.strip_conclusion(cleaned);

        if let Some(index) = cleaned.find(BOLD_TASKS_HEADING) {
            debug!(index, "found bold tasks heading, keeping text from there");
            cleaned = self.strip_conclusion(&cleaned[index..]);
        }

        collapse_blank_lines(cleaned)
    }

    fn strip_preamble<'a>(&self, text: &'a str) -> &'a str {
        for (priority, pattern) in self.preambles.iter().enumerate() {
            if let Some(found) = pattern.find(text) {
                debug!(priority, removed = found.len(), "stripped preamble");
                return &text[found.end()..];
            }
        }
        text
    }

    fn strip_conclusion<'a>(&self, text: &'a str) -> &'a str {
        for (priority, pattern) in self.conclusions.iter().enumerate() {
            if let Some(found) = pattern.find(text) {
                debug!(priority, removed = found.len(), "stripped conclusion");
                return &text[..found.start()];
            }
        }
        text
    }
}

impl Default for Stripper {
    fn default() -> Self {
        Self::new()
    }
}

fn compile_builtin(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect()
}

fn compile_user(kind: &'static str, pattern: &str) -> Result<Regex, StripperError> {
    Regex::new(pattern).map_err(|source| StripperError::InvalidPattern {
        kind,
        pattern: pattern.to_string(),
        source,
    })
}

/// Strip with the built-in patterns.
pub fn strip_wrapper_text(text: &str) -> String {
    DEFAULT_STRIPPER.strip(text)
}

/// Clean raw lesson plan output.
///
/// Removes a `\boxed{ ... }` wrapper, unwraps inline LaTeX commands such as
/// `\textbf{Title}`, and collapses blank-line runs. The closing brace is only
/// removed when the opening `\boxed{` was.
pub fn clean_lesson_plan_output(raw: &str) -> String {
    static BOXED_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\\boxed\{\s*").unwrap());
    static BOXED_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\}\s*$").unwrap());
    static LATEX_COMMAND: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\\[a-zA-Z]+\{([^}]*)\}").unwrap());

    if raw.is_empty() {
        return String::new();
    }

    let mut cleaned = raw;
    if let Some(open) = BOXED_OPEN.find(cleaned) {
        cleaned = &cleaned[open.end()..];
        if let Some(close) = BOXED_CLOSE.find(cleaned) {
            cleaned = &cleaned[..close.start()];
        }
    }

    let unwrapped = LATEX_COMMAND.replace_all(cleaned, "$1");
    collapse_blank_lines(&unwrapped)
}
