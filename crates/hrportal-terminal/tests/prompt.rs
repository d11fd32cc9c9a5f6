use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;

use hrportal_terminal::prompt::{classify, complete_command, Input, PromptHelper};

#[test]
fn ctrl_c_and_ctrl_d_are_told_apart() {
    assert_eq!(
        classify(Ok("hello".to_string())).unwrap(),
        Input::Line("hello".to_string())
    );

    let interrupted = classify(Err(ReadlineError::Interrupted)).unwrap();
    assert_eq!(interrupted, Input::Interrupted);
    assert!(interrupted.keep_going());

    let eof = classify(Err(ReadlineError::Eof)).unwrap();
    assert_eq!(eof, Input::Eof);
    assert!(!eof.keep_going());

    let io = std::io::Error::other("terminal gone");
    assert!(classify(Err(ReadlineError::Io(io))).is_err());
}

#[test]
fn password_is_masked_while_typing() {
    colored::control::set_override(false);
    let mut helper = PromptHelper::default();
    assert_eq!(helper.highlight("hrpass", 6), "hrpass");

    helper.masking = true;
    assert_eq!(helper.highlight("hrpass", 6), "******");
    assert_eq!(helper.highlight("pässwörd", 8), "********");
}

#[test]
fn slash_commands_complete() {
    assert_eq!(complete_command("/h"), vec!["/help", "/history"]);
    assert_eq!(complete_command("/co"), vec!["/copy"]);
    assert!(complete_command("/like 2").is_empty());
    assert!(complete_command("how").is_empty());
}
