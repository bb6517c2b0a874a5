//! Lesson plan extraction
//!
//! A lesson plan has two layers. The top layer is a run of labelled fields
//! (`**Title:**`, `**Grade:**`, `**Primary SOL:**`, ...) handled by the shared
//! [`Segmenter`]. Below `**Lesson Plan:**` come numbered sections such as
//! `**2. Guided Practice**`, each with `Method`, `Activities` and
//! `Executive Function Strategy` subsections whose bullet lines are joined
//! into one string rather than collected as a list.
//!
//! Field continuation rules:
//! - `Primary SOL` wraps onto following plain lines; a bullet line ends it.
//! - `Materials Needed` gathers bullet lines joined with `, `.
//! - `Vocabulary` gathers bullet lines joined with a space.
//! - The other scalars append continuation lines with a space.

use super::documents::{LessonPlanDocument, Section};
use super::line_classification::{is_unrecognized_header, strip_bullet, trimmed_lines};
use super::segmenter::{
    append_joined, BulletPolicy, LineEvent, SectionShape, SegmentState, Segmenter,
};
use super::stripping::clean_lesson_plan_output;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Objective,
    Grade,
    Subject,
    Strand,
    Topic,
    PrimarySol,
    Materials,
    Vocabulary,
    LessonPlan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subsection {
    Method,
    Activities,
    ExecutiveFunction,
}

/// Where content lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    /// Into the current top-level field, if any.
    Fields,
    /// Into the given subsection of the last numbered section.
    Section(Option<Subsection>),
}

static SEGMENTER: Lazy<Segmenter<Field>> = Lazy::new(|| {
    Segmenter::new()
        .rule(label("Title:"), Field::Title, SectionShape::SCALAR)
        .rule(label("Objective:"), Field::Objective, SectionShape::SCALAR)
        .rule(label("Grade:"), Field::Grade, SectionShape::SCALAR)
        .rule(label("Subject:"), Field::Subject, SectionShape::SCALAR)
        .rule(label("Strand:"), Field::Strand, SectionShape::SCALAR)
        .rule(label("Topic:"), Field::Topic, SectionShape::SCALAR)
        .rule(
            label("Primary SOL:"),
            Field::PrimarySol,
            SectionShape::Scalar {
                separator: " ",
                bullets: BulletPolicy::EndSection,
            },
        )
        .rule(
            label("Materials Needed:"),
            Field::Materials,
            SectionShape::Scalar {
                separator: ", ",
                bullets: BulletPolicy::Strip,
            },
        )
        .rule(
            label("Vocabulary:"),
            Field::Vocabulary,
            SectionShape::Scalar {
                separator: " ",
                bullets: BulletPolicy::Strip,
            },
        )
        .rule(label("Lesson Plan:"), Field::LessonPlan, SectionShape::HeaderOnly)
});

static NUMBERED_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\*\d+\.\s*(.+?)\*\*").unwrap());

static SUBSECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:[*-]\s+)?\*\*(Method|Activities|Executive Function Strategy):\*\*(.*)$")
        .unwrap()
});

fn label(name: &str) -> Regex {
    Regex::new(&format!(r"(?i)^\*\*{name}\*\*(.*)$")).unwrap()
}

/// `**3. Independent Practice**` gives `Independent Practice`.
fn numbered_section_title(line: &str) -> Option<&str> {
    let captures = NUMBERED_SECTION.captures(line)?;
    let title = captures.get(1)?.as_str().trim().trim_end_matches(':').trim_end();
    Some(title)
}

fn subsection_header(line: &str) -> Option<(Subsection, &str)> {
    let captures = SUBSECTION.captures(line)?;
    let name = captures.get(1)?.as_str().to_ascii_lowercase();
    let subsection = match name.as_str() {
        "method" => Subsection::Method,
        "activities" => Subsection::Activities,
        _ => Subsection::ExecutiveFunction,
    };
    let inline = captures.get(2).map_or("", |m| m.as_str().trim());
    Some((subsection, inline))
}

fn subsection_value(section: &mut Section, subsection: Subsection) -> &mut String {
    match subsection {
        Subsection::Method => &mut section.method,
        Subsection::Activities => &mut section.activities,
        Subsection::ExecutiveFunction => &mut section.executive_function,
    }
}

/// Extract a lesson plan from raw generated text.
pub fn extract_lesson_plan(raw: &str) -> LessonPlanDocument {
    let cleaned = clean_lesson_plan_output(raw);
    let mut state = SegmentState::new();
    let mut sections: Vec<Section> = Vec::new();
    let mut cursor = Cursor::Fields;

    for line in trimmed_lines(&cleaned) {
        let content = match SEGMENTER.classify(line) {
            LineEvent::Blank => continue,
            LineEvent::Header { key, shape, inline } => {
                cursor = Cursor::Fields;
                state.open(key, shape, inline);
                continue;
            }
            LineEvent::Content(content) => content,
        };

        if let Some(title) = numbered_section_title(content) {
            state.close();
            sections.push(Section::titled(title));
            cursor = Cursor::Section(None);
            continue;
        }

        let active = match cursor {
            Cursor::Fields => {
                state.push_content(content);
                continue;
            }
            Cursor::Section(active) => active,
        };
        let Some(section) = sections.last_mut() else {
            continue;
        };

        if let Some((subsection, inline)) = subsection_header(content) {
            if !inline.is_empty() {
                *subsection_value(section, subsection) = inline.to_string();
            }
            cursor = Cursor::Section(Some(subsection));
            continue;
        }

        let Some(subsection) = active else {
            continue;
        };
        let text = match strip_bullet(content) {
            Some(stripped) => stripped,
            None if is_unrecognized_header(content) => continue,
            None => content,
        };
        if !text.is_empty() {
            append_joined(subsection_value(section, subsection), text, " ");
        }
    }

    let mut table = state.into_table();
    let document = LessonPlanDocument {
        title: table.take_scalar(Field::Title),
        objective: table.take_scalar(Field::Objective),
        grade: table.take_scalar(Field::Grade),
        subject: table.take_scalar(Field::Subject),
        strand: table.take_scalar(Field::Strand),
        topic: table.take_scalar(Field::Topic),
        primary_sol: table.take_scalar(Field::PrimarySol),
        materials: table.take_scalar(Field::Materials),
        vocabulary: table.take_scalar(Field::Vocabulary),
        sections,
    };
    debug!(sections = document.sections.len(), "extracted lesson plan");
    document
}
