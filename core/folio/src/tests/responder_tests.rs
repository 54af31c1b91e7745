use crate::adapter::builtin_profile::builtin_profile;
use crate::domain::{Responder, RuleTable};

fn responder() -> Responder {
    Responder::new(RuleTable::default(), builtin_profile())
}

fn topic(input: &str) -> Option<String> {
    responder().respond(input).topic.map(|t| t.to_string())
}

#[test]
fn test_contact_triggers_any_case() {
    for input in ["CONTACT", "what's your Email?", "phone number please", "How do I contact you"] {
        assert_eq!(topic(input).as_deref(), Some("contact"), "input: {}", input);
    }
    let reply = responder().respond("Email?");
    assert!(reply.text.starts_with("You can reach Rithik at:"));
    assert!(reply.text.contains("Email: rverma8871@gmail.com"));
    assert!(reply.text.contains("Phone: +918770384600"));
}

#[test]
fn test_unmatched_input_gets_fallback_menu() {
    let reply = responder().respond("xyz123");
    assert_eq!(reply.topic, None);
    assert!(reply.text.starts_with("I can help you learn more about Rithik Verma."));
    assert!(reply.text.contains("- GitHub profile"));
}

#[test]
fn test_first_declared_rule_wins() {
    // skills は projects より先に宣言されている
    assert_eq!(
        topic("tell me about your project skills").as_deref(),
        Some("skills")
    );
    // contact は全ルールの先頭
    assert_eq!(topic("github email").as_deref(), Some("contact"));
}

#[test]
fn test_skills_reply_lists_all_skills() {
    let reply = responder().respond("What technology do you use?");
    assert_eq!(
        reply.text,
        "Rithik's key skills include: React.js, JavaScript (ES6+), Tailwind CSS, Java, C/C++, SQL/MySQL, Firebase, Github"
    );
}

#[test]
fn test_projects_reply_is_numbered() {
    let reply = responder().respond("show me your work");
    assert_eq!(topic("show me your work").as_deref(), Some("projects"));
    assert_eq!(
        reply.text,
        "Here are some of Rithik's notable projects:\n\
         1. UpSys Company Website - Modern company website with responsive layouts and dynamic content management\n\
         2. The Kick Store - Dynamic e-commerce web application with clean UI\n\
         3. Portfolio Website - Modern portfolio with smooth transitions and responsive design"
    );
}

#[test]
fn test_github_reply() {
    let reply = responder().respond("GitHub?");
    assert_eq!(
        reply.text,
        "You can find Rithik's work on GitHub: https://github.com/RithikVerma"
    );
}

#[test]
fn test_greeting_and_substring_semantics() {
    assert_eq!(topic("Hello").as_deref(), Some("greeting"));
    assert_eq!(topic("hey there").as_deref(), Some("greeting"));
    // "hi" は "this" の中にも一致する
    assert_eq!(topic("is this thing on").as_deref(), Some("greeting"));
}

#[test]
fn test_reply_is_never_empty() {
    let r = responder();
    for input in ["", "   ", "?", "🙂", "contact", "xyz"] {
        assert!(!r.respond(input).text.trim().is_empty(), "input: {:?}", input);
    }
}

#[test]
fn test_respond_is_pure() {
    let r = responder();
    assert_eq!(r.respond("skills"), r.respond("skills"));
}
