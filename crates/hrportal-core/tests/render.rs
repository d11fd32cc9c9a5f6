use hrportal_core::render::{clean_follow_up, render_answer, render_line, Line, Paragraph};

#[test]
fn colon_line_gets_bold_label() {
    assert_eq!(
        render_line("Policy: see handbook"),
        Line::Labeled {
            label: "Policy:".to_string(),
            text: "see handbook".to_string(),
        }
    );
}

#[test]
fn emphasis_stripped_and_paragraphs_split() {
    let layout = render_answer("**Note:** Be careful\n\nSecond para");

    assert_eq!(layout.paragraphs.len(), 2);
    assert_eq!(
        layout.paragraphs[0].lines,
        vec![Line::Labeled {
            label: "Note:".to_string(),
            text: "Be careful".to_string(),
        }]
    );
    assert_eq!(
        layout.paragraphs[1].lines,
        vec![Line::Plain("Second para".to_string())]
    );
}

#[test]
fn only_first_colon_is_the_label() {
    assert_eq!(
        render_line("Time: 09:30 to 18:00"),
        Line::Labeled {
            label: "Time:".to_string(),
            text: "09:30 to 18:00".to_string(),
        }
    );
}

#[test]
fn label_without_text() {
    let layout = render_answer("Steps:\n1. Apply in portal");
    assert_eq!(
        layout.paragraphs,
        vec![Paragraph {
            lines: vec![
                Line::Labeled {
                    label: "Steps:".to_string(),
                    text: String::new(),
                },
                Line::Plain("1. Apply in portal".to_string()),
            ],
        }]
    );
}

#[test]
fn runs_of_newlines_are_one_break() {
    let layout = render_answer("first\n\n\n\nsecond\nthird");
    assert_eq!(layout.paragraphs.len(), 2);
    assert_eq!(layout.paragraphs[1].lines.len(), 2);
}

#[test]
fn blank_lines_and_paragraphs_dropped() {
    let layout = render_answer("\n\n  \n\n**\n\nonly one\n   \n");
    assert_eq!(
        layout.paragraphs,
        vec![Paragraph {
            lines: vec![Line::Plain("only one".to_string())],
        }]
    );
}

#[test]
fn empty_answer_renders_nothing() {
    assert!(render_answer("").is_empty());
}

#[test]
fn transform_is_idempotent_on_its_output() {
    let samples = [
        "**Note:** Be careful\n\nSecond para",
        "Leave policy:\n* Casual: 12 days\n* Sick: 10 days\n\n\nContact: hr@example.com",
        "a\n \nb",
        "  : leading colon\n\nx:y:z",
        "\n\n\n",
        "Steps:\n\n",
    ];

    for raw in samples {
        let once = render_answer(raw);
        let twice = render_answer(&once.to_text());
        assert_eq!(once, twice, "not idempotent for {raw:?}");
    }
}

#[test]
fn follow_up_bullets_removed() {
    assert_eq!(clean_follow_up("  - **How many days?**"), "How many days?");
    assert_eq!(clean_follow_up("* Can I carry over leave?"), "Can I carry over leave?");
    assert_eq!(clean_follow_up("What about interns?"), "What about interns?");
    assert_eq!(clean_follow_up("-*- mixed"), "mixed");
}
