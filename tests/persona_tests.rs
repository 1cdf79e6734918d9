// tests for prompt construction

use salama::{
    CARE_RECIPIENT, CAREGIVER, ChatMessage, ChatRequest, HISTORY_WINDOW, Persona, UserRole,
};

fn request(history: Vec<ChatMessage>, role: UserRole) -> ChatRequest {
    ChatRequest {
        question: "What day is it?".to_string(),
        conversation_history: history,
        user_name: "Amina".to_string(),
        user_role: role,
    }
}

#[test]
fn test_history_keeps_last_six_in_order() {
    let history: Vec<ChatMessage> = (1..=9)
        .map(|i| {
            if i % 2 == 1 {
                ChatMessage::me(format!("m{i}"))
            } else {
                ChatMessage::companion(format!("m{i}"))
            }
        })
        .collect();

    let rendered = Persona::default().render_history(&history);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), HISTORY_WINDOW);
    assert_eq!(
        lines,
        [
            "Salama: m4",
            "User: m5",
            "Salama: m6",
            "User: m7",
            "Salama: m8",
            "User: m9",
        ]
    );
    assert!(!rendered.contains("m3"));
}

#[test]
fn test_short_history_is_kept_whole() {
    let history = vec![ChatMessage::me("hi"), ChatMessage::companion("hello dear")];
    let rendered = Persona::default().render_history(&history);
    assert_eq!(rendered, "User: hi\nSalama: hello dear\n");
}

#[test]
fn test_empty_history_renders_nothing() {
    assert_eq!(Persona::default().render_history(&[]), "");
}

#[test]
fn test_care_recipient_phrase() {
    let prompt = Persona::default().prompt(&request(vec![], UserRole::CareRecipient));
    assert!(prompt.contains(CARE_RECIPIENT));
    assert!(!prompt.contains(CAREGIVER));
}

#[test]
fn test_caregiver_phrase() {
    let prompt = Persona::default().prompt(&request(vec![], UserRole::Caregiver));
    assert!(prompt.contains(CAREGIVER));
    assert!(!prompt.contains(CARE_RECIPIENT));
}

#[test]
fn test_unknown_role_is_caregiver() {
    let req: ChatRequest = serde_json::from_str(
        r#"{"question":"hi","conversationHistory":[],"userName":"Sam","userRole":"nurse"}"#,
    )
    .unwrap();
    assert_eq!(req.user_role, UserRole::Caregiver);

    let prompt = Persona::default().prompt(&req);
    assert!(prompt.contains(CAREGIVER));
}

#[test]
fn test_prompt_layout() {
    let req = request(vec![ChatMessage::me("I'm tired")], UserRole::CareRecipient);
    let prompt = Persona::default().prompt(&req);

    assert!(prompt.starts_with("You are Salama, a warm, caring AI companion for Amina, who is a"));
    assert!(prompt.contains("Previous conversation:\nUser: I'm tired\n\n"));
    assert!(prompt.contains("User's current message: What day is it?"));
    assert!(prompt.contains("caregivers will be notified"));
    assert!(prompt.ends_with("Respond as Salama:"));
}

#[test]
fn test_braces_in_user_text_are_not_expanded() {
    let mut req = request(vec![], UserRole::Caregiver);
    req.question = "what does {user_name} mean?".to_string();

    let prompt = Persona::default().prompt(&req);
    assert!(prompt.contains("User's current message: what does {user_name} mean?"));
}

#[test]
fn test_custom_template() {
    let persona = Persona {
        template: "{name} to {user_name} ({role}): {question} {unknown}".to_string(),
        ..Persona::default()
    };
    let prompt = persona.prompt(&request(vec![], UserRole::CareRecipient));
    assert_eq!(
        prompt,
        format!("Salama to Amina ({CARE_RECIPIENT}): What day is it? {{unknown}}")
    );
}

#[test]
fn test_template_from_file() {
    let path = std::env::temp_dir().join(format!("salama-persona-{}.txt", std::process::id()));
    std::fs::write(&path, "Hi {user_name}, {question}").unwrap();

    let persona = Persona::from_template_file(&path).unwrap();
    let prompt = persona.prompt(&request(vec![], UserRole::Caregiver));
    assert_eq!(prompt, "Hi Amina, What day is it?");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_template_file() {
    let result = Persona::from_template_file("/definitely/not/here/persona.txt");
    assert!(matches!(result, Err(salama::Error::Io(_))));
}

#[test]
fn test_first_line_keeps_trailing_space() {
    let prompt = Persona::default().prompt(&request(vec![], UserRole::Caregiver));
    let first = prompt.lines().next().unwrap();
    assert_eq!(
        first,
        format!("You are Salama, a warm, caring AI companion for Amina, who is a {CAREGIVER}. ")
    );
}

#[test]
fn test_odd_senders_are_the_companion() {
    let req: ChatRequest = serde_json::from_str(
        r#"{
            "question": "hi",
            "userName": "Amina",
            "conversationHistory": [
                {"text": "no sender"},
                {"sender": null, "text": "null sender"},
                {"sender": 7, "text": "number sender"},
                {"sender": "bot", "text": "other sender"},
                {"sender": "me", "text": "mine"}
            ]
        }"#,
    )
    .unwrap();

    let rendered = Persona::default().render_history(&req.conversation_history);
    assert_eq!(
        rendered,
        "Salama: no sender\nSalama: null sender\nSalama: number sender\nSalama: other sender\nUser: mine\n"
    );
}
