//! Quiz and assessment extraction
//!
//! The text is first run through the [`Stripper`]. A leading `# Title` line
//! becomes the quiz title. Questions are then read from `### Question <n>`
//! blocks, each running to the next such header or the end of the text:
//!
//! ```text
//! ### Question 1
//! **Question Type**: Multiple Choice
//! **Question**: Which fraction is larger?
//! a) 1/2
//! b) 1/3
//! **Executive Function Strategy**: Self-monitoring checklist
//! **Justification**: ...
//! ```
//!
//! Options are found by a separate scan over every line of the block, so it
//! does not matter which label a line sits under. When no `###` block exists
//! the text is split on `Question <n>:` or `<n>.` line openers instead, and
//! each block body becomes the question text as is.

use super::documents::{Question, QuizDocument};
use super::line_classification::{is_option_line, trimmed_lines};
use super::stripping::{strip_wrapper_text, Stripper};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static H1_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#\s+([^\n]*)\n?").unwrap());
static QUESTION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"###\s+Question\s+(\d+)").unwrap());
static LOOSE_OPENER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(?:Question\s+(\d+):|(\d+)\.)").unwrap());
static QUESTION_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*Question Type\*\*:\s*([^\n]*)").unwrap());
static QUESTION_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*Question\*\*:").unwrap());
static KNOWN_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*(?:Question Type|Question|Executive Function Strategy|Justification)\*\*:")
        .unwrap()
});
static STRATEGY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\*\*Executive Function Strategy\*\*:\s*(.*?)(?:\n\*\*Justification\*\*:|$)")
        .unwrap()
});

/// A question opener found in the text.
struct Block<'a> {
    number: &'a str,
    body: &'a str,
}

/// Extract a quiz, stripping with the built-in patterns.
pub fn extract_quiz(raw: &str) -> QuizDocument {
    parse_quiz(&strip_wrapper_text(raw))
}

/// Extract a quiz, stripping with `stripper`.
pub fn extract_quiz_with(stripper: &Stripper, raw: &str) -> QuizDocument {
    parse_quiz(&stripper.strip(raw))
}

/// Extract a quiz from text that has already been stripped.
pub fn parse_quiz(cleaned: &str) -> QuizDocument {
    let mut text = cleaned;
    let mut title = String::new();
    if let Some(captures) = H1_TITLE.captures(text) {
        if let (Some(whole), Some(value)) = (captures.get(0), captures.get(1)) {
            title = value.as_str().trim().to_string();
            text = &text[whole.end()..];
        }
    }

    let mut questions: Vec<Question> = split_blocks(&QUESTION_HEADER, text)
        .into_iter()
        .map(|block| Question {
            number: block.number.to_string(),
            question_type: capture_trimmed(&QUESTION_TYPE, block.body),
            text: question_text(block.body),
            strategy: capture_trimmed(&STRATEGY, block.body),
            options: options(block.body),
        })
        .collect();

    if questions.is_empty() {
        debug!("no '### Question' blocks, falling back to loose numbering");
        questions = split_blocks(&LOOSE_OPENER, text)
            .into_iter()
            .map(|block| Question {
                number: block.number.to_string(),
                text: block.body.to_string(),
                options: options(block.body),
                ..Question::default()
            })
            .collect();
    }

    debug!(questions = questions.len(), "extracted quiz");
    QuizDocument { title, questions }
}

/// Split `text` at every match of `opener`.
///
/// The number is the first capture group that participated. Each body runs
/// from the end of its opener to the start of the next one, trimmed.
fn split_blocks<'a>(opener: &Regex, text: &'a str) -> Vec<Block<'a>> {
    let openers: Vec<(usize, usize, &'a str)> = opener
        .captures_iter(text)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            let number = captures.iter().skip(1).flatten().next()?;
            Some((whole.start(), whole.end(), number.as_str()))
        })
        .collect();

    openers
        .iter()
        .enumerate()
        .map(|(index, &(_, end, number))| {
            let next = openers
                .get(index + 1)
                .map_or(text.len(), |&(start, _, _)| start);
            Block {
                number,
                body: text[end..next].trim(),
            }
        })
        .collect()
}

fn capture_trimmed(pattern: &Regex, body: &str) -> String {
    pattern
        .captures(body)
        .and_then(|captures| captures.get(1))
        .map(|value| value.as_str().trim().to_string())
        .unwrap_or_default()
}

/// The text after `**Question**:`, up to the next known label, the first
/// option line, or the end of the block. Other bold labels such as
/// `**Hint**:` stay in the text.
fn question_text(body: &str) -> String {
    let Some(label) = QUESTION_LABEL.find(body) else {
        return String::new();
    };
    let mut rest = &body[label.end()..];
    if let Some(next_label) = KNOWN_LABEL.find(rest) {
        rest = &rest[..next_label.start()];
    }

    let mut lines = trimmed_lines(rest);
    let mut collected: Vec<&str> = lines.next().into_iter().collect();
    collected.extend(lines.take_while(|line| !is_option_line(line)));
    collected.join("\n").trim().to_string()
}

/// Every option-like line of the block, in order.
fn options(body: &str) -> Vec<String> {
    trimmed_lines(body)
        .filter(|line| is_option_line(line))
        .map(str::to_string)
        .collect()
}
