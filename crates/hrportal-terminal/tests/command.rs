use std::path::PathBuf;

use hrportal_terminal::command::{
    is_back, parse_chat, parse_grid_choice, parse_role_choice, ChatCommand, CommandError,
    GridChoice, RoleChoice,
};

#[test]
fn role_choices() {
    assert_eq!(parse_role_choice("1"), Ok(RoleChoice::Hr));
    assert_eq!(parse_role_choice(" Employee "), Ok(RoleChoice::Employee));
    assert_eq!(parse_role_choice("q"), Ok(RoleChoice::Quit));
    assert!(matches!(
        parse_role_choice("3"),
        Err(CommandError::UnknownChoice(_))
    ));
}

#[test]
fn grid_accepts_numbers_and_names() {
    assert_eq!(parse_grid_choice("1"), Ok(GridChoice::Department("Engineering")));
    assert_eq!(parse_grid_choice("8"), Ok(GridChoice::Department("Admin")));
    assert_eq!(
        parse_grid_choice("customer support"),
        Ok(GridChoice::Department("Customer Support"))
    );
    assert_eq!(parse_grid_choice("b"), Ok(GridChoice::Back));
    assert!(parse_grid_choice("0").is_err());
    assert!(parse_grid_choice("9").is_err());
    assert!(parse_grid_choice("Research").is_err());
}

#[test]
fn back_marker_on_login_prompts() {
    assert!(is_back(":back"));
    assert!(is_back("  :BACK "));
    assert!(!is_back("back"));
}

#[test]
fn plain_text_asks_and_empty_line_sends_draft() {
    assert_eq!(
        parse_chat("  How many sick days?  "),
        Ok(ChatCommand::Ask("How many sick days?".to_string()))
    );
    assert_eq!(parse_chat(""), Ok(ChatCommand::SendDraft));
    assert_eq!(parse_chat("   "), Ok(ChatCommand::SendDraft));
}

#[test]
fn numbers_are_one_based() {
    assert_eq!(parse_chat("/thread 1"), Ok(ChatCommand::Thread(0)));
    assert_eq!(parse_chat("/like 2"), Ok(ChatCommand::Like(1)));
    assert_eq!(parse_chat("/dislike 4"), Ok(ChatCommand::Dislike(3)));
    assert_eq!(parse_chat("/retry 2"), Ok(ChatCommand::Retry(1)));
    assert_eq!(parse_chat("/copy 2"), Ok(ChatCommand::Copy(1)));
    assert_eq!(
        parse_chat("/follow 2 3"),
        Ok(ChatCommand::Follow {
            message: 1,
            follow_up: 2
        })
    );
    assert_eq!(
        parse_chat("/thread 0"),
        Err(CommandError::InvalidNumber("0".to_string()))
    );
    assert_eq!(
        parse_chat("/like two"),
        Err(CommandError::InvalidNumber("two".to_string()))
    );
}

#[test]
fn missing_arguments_are_reported() {
    assert_eq!(
        parse_chat("/follow 2"),
        Err(CommandError::MissingArgument {
            command: "/follow",
            argument: "a number"
        })
    );
    assert_eq!(
        parse_chat("/file"),
        Err(CommandError::MissingArgument {
            command: "/file",
            argument: "a path"
        })
    );
}

#[test]
fn file_path_keeps_spaces() {
    assert_eq!(
        parse_chat("/file /tmp/Leave Policy 2025.pdf"),
        Ok(ChatCommand::SelectFile(PathBuf::from(
            "/tmp/Leave Policy 2025.pdf"
        )))
    );
}

#[test]
fn save_with_and_without_file_name() {
    assert_eq!(
        parse_chat("/save 2"),
        Ok(ChatCommand::Save {
            message: 1,
            file_name: None
        })
    );
    assert_eq!(
        parse_chat("/save 2 leave.txt"),
        Ok(ChatCommand::Save {
            message: 1,
            file_name: Some("leave.txt".to_string())
        })
    );
}

#[test]
fn simple_commands() {
    assert_eq!(parse_chat("/history"), Ok(ChatCommand::History));
    assert_eq!(parse_chat("/index"), Ok(ChatCommand::Index));
    assert_eq!(parse_chat("/help"), Ok(ChatCommand::Help));
    assert_eq!(parse_chat("/logout"), Ok(ChatCommand::Logout));
    assert_eq!(parse_chat("/quit"), Ok(ChatCommand::Quit));
    assert_eq!(
        parse_chat("/upload x.pdf"),
        Err(CommandError::UnknownCommand("/upload".to_string()))
    );
}
