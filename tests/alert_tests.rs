// tests for the caregiver alert keywords

use salama::{Alert, DEFAULT_KEYWORDS};

#[test]
fn test_fell_alerts() {
    let alert = Alert::default();
    assert!(alert.should_alert("I fell down"));
    assert_eq!(alert.matched("I fell down"), Some("fell"));
}

#[test]
fn test_greeting_does_not_alert() {
    let alert = Alert::default();
    assert!(!alert.should_alert("Hello, how are you?"));
    assert!(alert.matched("Hello, how are you?").is_none());
}

#[test]
fn test_every_default_keyword_alerts() {
    let alert = Alert::default();
    for keyword in DEFAULT_KEYWORDS {
        let question = format!("it is about {keyword} today");
        assert!(alert.should_alert(&question), "{keyword} should alert");
    }
}

#[test]
fn test_case_insensitive() {
    let alert = Alert::default();
    assert!(alert.should_alert("EMERGENCY"));
    assert!(alert.should_alert("I think this is a Scam"));
}

#[test]
fn test_substring_not_word_boundary() {
    // plain substring match, so these count too
    let alert = Alert::default();
    assert!(alert.should_alert("my helper is late"));
    assert!(alert.should_alert("sickle cell clinic"));
}

#[test]
fn test_empty_question() {
    assert!(!Alert::default().should_alert(""));
}

#[test]
fn test_custom_keywords_are_normalised() {
    let alert = Alert::new([" Dizzy ", "", "LOST"]);
    assert_eq!(alert.keywords(), ["dizzy", "lost"]);
    assert!(alert.should_alert("I feel dizzy"));
    assert!(alert.should_alert("i'm lost"));
    // defaults are replaced, not extended
    assert!(!alert.should_alert("I fell down"));
}
