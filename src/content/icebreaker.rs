//! Icebreaker extraction
//!
//! Scalars (`**Title:**`, `**Objective:**`, `**Materials Needed:**`) take
//! their inline value. Lists take bullet entries; `instructions`, `questions`
//! and `debrief` also keep un-bulleted lines, while `tips` and `variations`
//! keep bulleted lines only.

use super::documents::IcebreakerDocument;
use super::segmenter::{ListPolicy, SectionShape, Segmenter};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Objective,
    Materials,
    Instructions,
    Debrief,
    Tips,
    Variations,
    Questions,
}

/// Markdown heading hashes, an opening `**`, or both, before a phrase.
const PHRASE_PREFIX: &str = r"(?i)^(?:#+\s*(?:\*\*)?|\*\*)\s*";

static SEGMENTER: Lazy<Segmenter<Field>> = Lazy::new(|| {
    let tolerant = SectionShape::List(ListPolicy::Tolerant);
    let bullets_only = SectionShape::List(ListPolicy::BulletsOnly);
    Segmenter::new()
        .rule(label(r"Title:"), Field::Title, SectionShape::SCALAR)
        .rule(label(r"Objective:"), Field::Objective, SectionShape::SCALAR)
        .rule(label(r"Materials Needed:"), Field::Materials, SectionShape::SCALAR)
        .rule(prefix(r"\*\*Instructions:\*\*"), Field::Instructions, tolerant)
        .rule(prefix(r"\*\*Debrief"), Field::Debrief, tolerant)
        .rule(phrase(r"Tips for Success"), Field::Tips, bullets_only)
        .rule(phrase(r"Variations\b"), Field::Variations, bullets_only)
        .rule(phrase(r"Sample\b.*?\bQuestions\b"), Field::Questions, tolerant)
});

/// `**<name>**` followed by the inline value as group 1.
fn label(name: &str) -> Regex {
    Regex::new(&format!(r"(?i)^\*\*{name}\*\*(.*)$")).unwrap()
}

fn prefix(pattern: &str) -> Regex {
    Regex::new(&format!("(?i)^{pattern}")).unwrap()
}

fn phrase(pattern: &str) -> Regex {
    Regex::new(&format!("{PHRASE_PREFIX}{pattern}")).unwrap()
}

/// Extract an icebreaker from raw generated text.
pub fn extract_icebreaker(raw: &str) -> IcebreakerDocument {
    let mut table = SEGMENTER.segment(raw);
    let document = IcebreakerDocument {
        title: table.take_scalar(Field::Title),
        objective: table.take_scalar(Field::Objective),
        materials: table.take_scalar(Field::Materials),
        instructions: table.take_list(Field::Instructions),
        questions: table.take_list(Field::Questions),
        debrief: table.take_list(Field::Debrief),
        tips: table.take_list(Field::Tips),
        variations: table.take_list(Field::Variations),
    };
    debug!(
        instructions = document.instructions.len(),
        questions = document.questions.len(),
        debrief = document.debrief.len(),
        tips = document.tips.len(),
        variations = document.variations.len(),
        "extracted icebreaker"
    );
    document
}
