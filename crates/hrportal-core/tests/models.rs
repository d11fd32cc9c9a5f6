use hrportal_core::departments::{find_department, wire_department, DEPARTMENTS, HR_DEPARTMENT};
use hrportal_core::models::history::HistoryThreadSummary;
use hrportal_core::models::message::{Delivery, Message, MessageRole, QUERY_ERROR_TEXT};
use hrportal_core::models::role::{PolicyRegion, Role};
use hrportal_core::models::wire::{LoginRequest, QueryRequest, QueryResponse, ThreadMessage};

#[test]
fn department_lookup_is_case_insensitive() {
    assert_eq!(find_department(" customer support ").unwrap(), "Customer Support");
    assert!(find_department("Astrology").is_err());
    assert!(!DEPARTMENTS.contains(&HR_DEPARTMENT));
}

#[test]
fn wire_department_is_lowercase() {
    assert_eq!(wire_department("Customer Support"), "customer support");
    assert_eq!(wire_department(HR_DEPARTMENT), "hr");
}

#[test]
fn login_request_wire_shape() {
    let req = LoginRequest {
        username: "emp@corp.example".to_string(),
        password: "secret".to_string(),
        role: Role::Employee,
        department: "Finance".to_string(),
        country: PolicyRegion::Foreign,
    };

    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "username": "emp@corp.example",
            "password": "secret",
            "role": "EMPLOYEE",
            "department": "Finance",
            "country": "foreign",
        })
    );
}

#[test]
fn query_request_wire_shape() {
    let req = QueryRequest {
        question: "How many leaves?".to_string(),
        policy_country: PolicyRegion::India,
        department: "hr".to_string(),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["policy_country"], "india");
    assert_eq!(json["department"], "hr");
}

#[test]
fn query_response_tolerates_missing_and_null_fields() {
    let resp: QueryResponse =
        serde_json::from_str(r#"{"answer": "", "documents": [], "error": "boom"}"#).unwrap();
    assert_eq!(resp, QueryResponse::default());

    let resp: QueryResponse = serde_json::from_str(
        r#"{"answer": "Yes.", "suggested_follow_ups": null, "next_steps": null, "confidence": 82}"#,
    )
    .unwrap();
    assert_eq!(resp.answer, "Yes.");
    assert!(resp.suggested_follow_ups.is_empty());
    assert_eq!(resp.confidence, Some(82.0));
}

#[test]
fn history_summary_parses_backend_timestamp() {
    let summary: HistoryThreadSummary = serde_json::from_str(
        r#"{"message_id": 42, "session_id": "abc", "question": "Notice period?", "timestamp": "2025-03-14T09:26:53.589793"}"#,
    )
    .unwrap();

    let at = summary.recorded_at().unwrap();
    assert_eq!(at.year(), 2025);
    assert_eq!(at.hour(), 9);

    let broken = HistoryThreadSummary {
        timestamp: "yesterday".to_string(),
        ..summary
    };
    assert!(broken.recorded_at().is_none());
}

#[test]
fn thread_message_ignores_extra_fields() {
    let msgs: Vec<ThreadMessage> = serde_json::from_str(
        r#"[{"role": "user", "content": "Q", "timestamp": "2025-01-01T00:00:00"},
            {"role": "assistant", "content": null}]"#,
    )
    .unwrap();
    assert_eq!(msgs[0].role, MessageRole::User);
    assert_eq!(msgs[1].content, "");
}

#[test]
fn message_constructors() {
    let q = Message::pending_question("Dress code?");
    assert_eq!(q.delivery, Delivery::Pending);
    assert_eq!(q.role, MessageRole::User);

    let err = Message::query_error("Dress code?");
    assert_eq!(err.content, QUERY_ERROR_TEXT);
    assert_eq!(err.question, "Dress code?");
    assert!(err.is_assistant());

    let restored = Message::from_thread(ThreadMessage {
        role: MessageRole::Assistant,
        content: "Business casual.".to_string(),
    });
    assert!(restored.suggested_follow_ups.is_empty());
    assert!(restored.confidence.is_none());
}

#[test]
fn policy_region_parses_aliases() {
    assert_eq!("India".parse::<PolicyRegion>().unwrap(), PolicyRegion::India);
    assert_eq!("international".parse::<PolicyRegion>().unwrap(), PolicyRegion::Foreign);
    assert!("mars".parse::<PolicyRegion>().is_err());
}
