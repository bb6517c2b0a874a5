//! Plain text output
//!
//! A reading layout for terminals. Empty scalars and lists are left out; a
//! document with nothing in it renders as a single notice line.

use super::registry::{FormatError, Formatter};
use crate::content::documents::{IcebreakerDocument, LessonPlanDocument, QuizDocument};
use crate::content::envelope::ExtractedDocument;

pub const EMPTY_NOTICE: &str = "(no content extracted)\n";

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn serialize(&self, doc: &ExtractedDocument) -> Result<String, FormatError> {
        let mut out = String::new();
        match doc {
            ExtractedDocument::LessonPlan(plan) => write_lesson_plan(&mut out, plan),
            ExtractedDocument::Quiz(quiz) => write_quiz(&mut out, quiz),
            ExtractedDocument::Icebreaker(icebreaker) => write_icebreaker(&mut out, icebreaker),
        }
        if out.is_empty() {
            out.push_str(EMPTY_NOTICE);
        }
        Ok(out)
    }

    fn description(&self) -> &str {
        "Plain text for reading in a terminal"
    }
}

fn field(out: &mut String, indent: &str, label: &str, value: &str) {
    if !value.is_empty() {
        out.push_str(&format!("{indent}{label}: {value}\n"));
    }
}

fn list(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    start_block(out);
    out.push_str(&format!("{heading}:\n"));
    for item in items {
        out.push_str(&format!("  - {item}\n"));
    }
}

/// Blank line between blocks, never at the very top.
fn start_block(out: &mut String) {
    if !out.is_empty() {
        out.push('\n');
    }
}

fn write_lesson_plan(out: &mut String, plan: &LessonPlanDocument) {
    field(out, "", "Title", &plan.title);
    field(out, "", "Objective", &plan.objective);
    field(out, "", "Grade", &plan.grade);
    field(out, "", "Subject", &plan.subject);
    field(out, "", "Strand", &plan.strand);
    field(out, "", "Topic", &plan.topic);
    field(out, "", "Primary SOL", &plan.primary_sol);
    field(out, "", "Materials", &plan.materials);
    field(out, "", "Vocabulary", &plan.vocabulary);

    for (index, section) in plan.sections.iter().enumerate() {
        start_block(out);
        out.push_str(&format!("{}. {}\n", index + 1, section.title));
        field(out, "   ", "Method", &section.method);
        field(out, "   ", "Activities", &section.activities);
        field(out, "   ", "Executive Function Strategy", &section.executive_function);
    }
}

fn write_quiz(out: &mut String, quiz: &QuizDocument) {
    if !quiz.title.is_empty() {
        out.push_str(&format!("{}\n", quiz.title));
    }

    for question in &quiz.questions {
        start_block(out);
        out.push_str(&format!("Question {}", question.number));
        if !question.question_type.is_empty() {
            out.push_str(&format!(" ({})", question.question_type));
        }
        out.push('\n');
        if !question.text.is_empty() {
            out.push_str(&question.text);
            out.push('\n');
        }
        // Loose-format question text already carries its option lines.
        for option in &question.options {
            if !question.text.lines().any(|line| line.trim() == option) {
                out.push_str(&format!("  {option}\n"));
            }
        }
        field(out, "", "Strategy", &question.strategy);
    }
}

fn write_icebreaker(out: &mut String, icebreaker: &IcebreakerDocument) {
    field(out, "", "Title", &icebreaker.title);
    field(out, "", "Objective", &icebreaker.objective);
    field(out, "", "Materials", &icebreaker.materials);
    list(out, "Instructions", &icebreaker.instructions);
    list(out, "Sample Questions", &icebreaker.questions);
    list(out, "Debrief", &icebreaker.debrief);
    list(out, "Tips for Success", &icebreaker.tips);
    list(out, "Variations", &icebreaker.variations);
}
