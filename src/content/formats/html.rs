//! HTML output
//!
//! Unstyled markup for a print or PDF layer to wrap in its own template.
//! Field values are HTML-escaped, then `**bold**` and `*italic*` markers are
//! turned into `<b>` and `<i>`; line breaks inside a value become `<br>`.

use super::registry::{FormatError, Formatter};
use crate::content::documents::{IcebreakerDocument, LessonPlanDocument, QuizDocument};
use crate::content::envelope::ExtractedDocument;
use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());

pub struct HtmlFormatter;

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn serialize(&self, doc: &ExtractedDocument) -> Result<String, FormatError> {
        let mut out = String::new();
        match doc {
            ExtractedDocument::LessonPlan(plan) => write_lesson_plan(&mut out, plan),
            ExtractedDocument::Quiz(quiz) => write_quiz(&mut out, quiz),
            ExtractedDocument::Icebreaker(icebreaker) => write_icebreaker(&mut out, icebreaker),
        }
        Ok(out)
    }

    fn description(&self) -> &str {
        "Unstyled HTML for print and PDF layouts"
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape `text` and render its inline emphasis markers.
pub fn inline_markdown_to_html(text: &str) -> String {
    let escaped = escape(text);
    let bold = BOLD.replace_all(&escaped, "<b>$1</b>");
    let italic = ITALIC.replace_all(&bold, "<i>$1</i>");
    italic.replace('\n', "<br>")
}

fn heading(out: &mut String, level: u8, text: &str) {
    if !text.is_empty() {
        out.push_str(&format!(
            "<h{level}>{}</h{level}>\n",
            inline_markdown_to_html(text)
        ));
    }
}

/// A `<dl>` of the non-empty pairs, or nothing.
fn definitions(out: &mut String, pairs: &[(&str, &str)]) {
    let filled: Vec<_> = pairs.iter().filter(|(_, value)| !value.is_empty()).collect();
    if filled.is_empty() {
        return;
    }
    out.push_str("<dl>\n");
    for (label, value) in filled {
        out.push_str(&format!(
            "<dt>{}</dt><dd>{}</dd>\n",
            escape(label),
            inline_markdown_to_html(value)
        ));
    }
    out.push_str("</dl>\n");
}

fn bullet_list(out: &mut String, class: &str, items: &[String]) {
    out.push_str(&format!("<ul class=\"{class}\">\n"));
    for item in items {
        out.push_str(&format!("<li>{}</li>\n", inline_markdown_to_html(item)));
    }
    out.push_str("</ul>\n");
}

fn write_lesson_plan(out: &mut String, plan: &LessonPlanDocument) {
    out.push_str("<article class=\"lesson-plan\">\n");
    heading(out, 1, &plan.title);
    definitions(
        out,
        &[
            ("Objective", plan.objective.as_str()),
            ("Grade", plan.grade.as_str()),
            ("Subject", plan.subject.as_str()),
            ("Strand", plan.strand.as_str()),
            ("Topic", plan.topic.as_str()),
            ("Primary SOL", plan.primary_sol.as_str()),
            ("Materials Needed", plan.materials.as_str()),
            ("Vocabulary", plan.vocabulary.as_str()),
        ],
    );
    for (index, section) in plan.sections.iter().enumerate() {
        out.push_str("<section>\n");
        heading(out, 2, &format!("{}. {}", index + 1, section.title));
        definitions(
            out,
            &[
                ("Method", section.method.as_str()),
                ("Activities", section.activities.as_str()),
                ("Executive Function Strategy", section.executive_function.as_str()),
            ],
        );
        out.push_str("</section>\n");
    }
    out.push_str("</article>\n");
}

fn write_quiz(out: &mut String, quiz: &QuizDocument) {
    out.push_str("<article class=\"quiz\">\n");
    heading(out, 1, &quiz.title);
    for question in &quiz.questions {
        out.push_str("<section class=\"question\">\n");
        let mut title = format!("Question {}", escape(&question.number));
        if !question.question_type.is_empty() {
            title.push_str(&format!(
                " <small>({})</small>",
                escape(&question.question_type)
            ));
        }
        out.push_str(&format!("<h2>{title}</h2>\n"));
        if !question.text.is_empty() {
            out.push_str(&format!("<p>{}</p>\n", inline_markdown_to_html(&question.text)));
        }
        if !question.options.is_empty() {
            bullet_list(out, "options", &question.options);
        }
        if !question.strategy.is_empty() {
            out.push_str(&format!(
                "<p class=\"strategy\"><b>Executive Function Strategy:</b> {}</p>\n",
                inline_markdown_to_html(&question.strategy)
            ));
        }
        out.push_str("</section>\n");
    }
    out.push_str("</article>\n");
}

fn write_icebreaker(out: &mut String, icebreaker: &IcebreakerDocument) {
    out.push_str("<article class=\"icebreaker\">\n");
    heading(out, 1, &icebreaker.title);
    definitions(
        out,
        &[
            ("Objective", icebreaker.objective.as_str()),
            ("Materials Needed", icebreaker.materials.as_str()),
        ],
    );
    let lists = [
        ("Instructions", "instructions", &icebreaker.instructions),
        ("Sample Questions", "questions", &icebreaker.questions),
        ("Debrief", "debrief", &icebreaker.debrief),
        ("Tips for Success", "tips", &icebreaker.tips),
        ("Variations", "variations", &icebreaker.variations),
    ];
    for (title, class, items) in lists {
        if items.is_empty() {
            continue;
        }
        heading(out, 2, title);
        bullet_list(out, class, items);
    }
    out.push_str("</article>\n");
}
