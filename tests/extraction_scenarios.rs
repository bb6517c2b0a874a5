//! End-to-end extraction scenarios over fixture documents and hand-written inputs

use diversemind::content::{
    extract, extract_icebreaker, extract_lesson_plan, extract_quiz, extract_value,
    strip_wrapper_text, ContentKind, ExtractedDocument, IcebreakerDocument, LessonPlanDocument,
    Question, QuizDocument, Section,
};
use rstest::rstest;
use serde_json::{json, Value};
use std::fs;

fn read_fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    fs::read_to_string(path).expect("Failed to read fixture")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_lesson_plan_fixture() {
    let plan = extract_lesson_plan(&read_fixture("lesson_plan.md"));

    let expected = LessonPlanDocument {
        title: "Exploring Equivalent Fractions".to_string(),
        objective: "Students will identify and generate equivalent fractions using visual models."
            .to_string(),
        grade: "3".to_string(),
        subject: "Mathematics".to_string(),
        strand: "Number and Number Sense".to_string(),
        topic: "Fractions".to_string(),
        primary_sol: "3.2 The student will name and write fractions represented by a set, region, or length model."
            .to_string(),
        materials: "Fraction strips, Colored pencils, Exit ticket worksheet".to_string(),
        vocabulary: "numerator denominator equivalent".to_string(),
        sections: vec![
            Section {
                title: "Warm-Up (10 minutes)".to_string(),
                method: "Think-pair-share".to_string(),
                activities: "Show a pizza cut into halves and quarters Ask which pieces cover the same amount"
                    .to_string(),
                executive_function: "Visual timer for pacing".to_string(),
            },
            Section {
                title: "Guided Practice (20 minutes)".to_string(),
                method: "Modeling with fraction strips".to_string(),
                activities: "Students line up strips to find matches".to_string(),
                executive_function: "Step-by-step checklist".to_string(),
            },
        ],
    };
    assert_eq!(plan, expected);
}

#[test]
fn test_every_lesson_plan_header_populates_its_field() {
    let raw = "\
**Title:** T
**Objective:** O
**Grade:** G
**Subject:** S
**Strand:** St
**Topic:** To
**Primary SOL:** P
**Materials Needed:** M
**Vocabulary:** V
";
    let plan = extract_lesson_plan(raw);
    let fields = [
        (&plan.title, "T"),
        (&plan.objective, "O"),
        (&plan.grade, "G"),
        (&plan.subject, "S"),
        (&plan.strand, "St"),
        (&plan.topic, "To"),
        (&plan.primary_sol, "P"),
        (&plan.materials, "M"),
        (&plan.vocabulary, "V"),
    ];
    for (value, expected) in fields {
        assert_eq!(value, expected);
    }
}

#[test]
fn test_quiz_fixture() {
    let quiz = extract_quiz(&read_fixture("quiz_assessment.md"));

    assert_eq!(quiz.title, "Fractions Check-In");
    assert_eq!(
        quiz.questions,
        vec![
            Question {
                number: "1".to_string(),
                question_type: "Multiple Choice".to_string(),
                text: "Which fraction is equivalent to 1/2?".to_string(),
                strategy: "Highlight key words before answering.".to_string(),
                options: strings(&["a) 1/3", "b) 2/4", "c) 3/5"]),
            },
            Question {
                number: "2".to_string(),
                question_type: "Short Answer".to_string(),
                text: "Explain how you know 2/6 equals 1/3.".to_string(),
                strategy: "Use a sentence starter.".to_string(),
                options: vec![],
            },
            Question {
                number: "3".to_string(),
                question_type: "True/False".to_string(),
                text: "3/4 is larger than 2/3.".to_string(),
                strategy: String::new(),
                options: strings(&["A. True", "B. False"]),
            },
        ]
    );
}

#[test]
fn test_three_question_blocks_are_numbered_in_order() {
    let raw = (1..=3)
        .map(|n| format!("### Question {n}\n**Question**: Prompt {n}\n"))
        .collect::<String>();
    let quiz = extract_quiz(&raw);
    assert_eq!(quiz.questions.len(), 3);
    for (i, question) in quiz.questions.iter().enumerate() {
        assert_eq!(question.number, (i + 1).to_string());
        assert_eq!(question.text, format!("Prompt {}", i + 1));
    }
}

#[test]
fn test_stripper_then_quiz_scenario() {
    let raw = "Some chat preamble I will redesign the assessment tasks.\n\n**Redesigned Assessment Tasks**\n### Question 1\n**Question Type**: MCQ\n**Question**: What is 2+2?\na) 3\nb) 4\n";
    let quiz = extract_quiz(raw);
    assert_eq!(quiz.questions.len(), 1);
    let question = &quiz.questions[0];
    assert_eq!(question.question_type, "MCQ");
    assert_eq!(question.text, "What is 2+2?");
    assert_eq!(question.options, strings(&["a) 3", "b) 4"]));
}

#[test]
fn test_icebreaker_fixture() {
    let icebreaker = extract_icebreaker(&read_fixture("icebreaker.md"));

    let expected = IcebreakerDocument {
        title: "Two Truths and a Wish".to_string(),
        objective: "Build community while practicing active listening.".to_string(),
        materials: "Index cards, pencils".to_string(),
        instructions: strings(&[
            "Each student writes two true facts and one wish.",
            "Partners guess which statement is the wish.",
            "Rotate partners after each round.",
        ]),
        questions: strings(&[
            "What surprised you about your partner?",
            "Which wish would you like to share?",
        ]),
        debrief: strings(&[
            "How did you decide which statement was the wish?",
            "Why does listening carefully matter?",
        ]),
        tips: strings(&["Model an example first."]),
        variations: strings(&["Use drawings instead of writing.", "Play in small groups."]),
    };
    assert_eq!(icebreaker, expected);
}

#[test]
fn test_fractions_fun_scenario() {
    let raw = "**Title:** Fractions Fun\n**Objective:** Learn halves\n**Materials Needed:** paper, scissors\n**Instructions:**\n- Fold the paper\n- Cut along the line\n";
    let value = serde_json::to_value(extract_icebreaker(raw)).unwrap();
    assert_eq!(
        value,
        json!({
            "title": "Fractions Fun",
            "objective": "Learn halves",
            "materials": "paper, scissors",
            "instructions": ["Fold the paper", "Cut along the line"],
            "questions": [],
            "debrief": [],
            "tips": [],
            "variations": []
        })
    );
}

#[test]
fn test_tips_drop_unbulleted_line() {
    let raw = "**Tips for Success:**\n- Keep it light\nThis line has no bullet\n";
    assert_eq!(extract_icebreaker(raw).tips, strings(&["Keep it light"]));
}

#[rstest]
#[case::null(json!(null))]
#[case::number(json!(7))]
#[case::boolean(json!(false))]
#[case::array(json!(["**Title:** x"]))]
#[case::object(json!({"title": "x"}))]
fn test_non_string_input_yields_default_records(#[case] value: Value) {
    assert_eq!(
        extract_value(ContentKind::LessonPlan, &value),
        ExtractedDocument::LessonPlan(LessonPlanDocument::default())
    );
    assert_eq!(
        extract_value(ContentKind::Quiz, &value),
        ExtractedDocument::Quiz(QuizDocument::default())
    );
    assert_eq!(
        extract_value(ContentKind::Icebreaker, &value),
        ExtractedDocument::Icebreaker(IcebreakerDocument::default())
    );
}

#[rstest]
#[case::lesson_plan(ContentKind::LessonPlan)]
#[case::quiz(ContentKind::Quiz)]
#[case::icebreaker(ContentKind::Icebreaker)]
fn test_empty_string_yields_default_record(#[case] kind: ContentKind) {
    assert_eq!(extract(kind, ""), ExtractedDocument::empty(kind));
}

#[rstest]
#[case::plain_heading("Chat first.\nRedesigned Assessment Tasks:\n1. Draw a model")]
#[case::after_matching_preamble(
    "To improve the assessment tasks, I changed things.\n\nRedesigned Assessment Tasks:\n\n\n\n1. Draw"
)]
#[case::before_conclusion(
    "Redesigned Assessment Tasks:\n1. Draw\n\nIn conclusion, this is better."
)]
fn test_tasks_heading_precedence(#[case] raw: &str) {
    let index = raw.find("Redesigned Assessment Tasks:").unwrap();
    let expected = diversemind::content::line_classification::collapse_blank_lines(&raw[index..]);
    assert_eq!(strip_wrapper_text(raw), expected);
}

#[test]
fn test_quiz_response_fixture() {
    let body = read_fixture("quiz_response.json");
    let document = diversemind::content::Extractor::new()
        .extract_response(ContentKind::Quiz, &body)
        .unwrap();
    let ExtractedDocument::Quiz(quiz) = document else {
        panic!("expected a quiz");
    };
    assert_eq!(quiz.title, "Quick Quiz");
    assert_eq!(quiz.questions[0].options, strings(&["a) 3", "b) 4"]));
}
