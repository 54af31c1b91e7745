//! 応答テンプレートの展開
//!
//! `{name}` 形式のプレースホルダをプロフィールの値で置き換える。
//! 未知のプレースホルダと閉じていない `{` はそのまま残す。値の無いフィールドは空文字。

use crate::domain::profile::Profile;

/// 連絡先カード（Email / Phone / Portfolio のうち値があるものだけ）
pub fn contact_card(profile: &Profile) -> String {
    let c = &profile.contact;
    [
        ("Email", &c.email),
        ("Phone", &c.phone),
        ("Portfolio", &c.portfolio),
    ]
    .iter()
    .filter_map(|(label, value)| value.as_ref().map(|v| format!("{}: {}", label, v)))
    .collect::<Vec<_>>()
    .join("\n")
}

/// 番号付きプロジェクト一覧（"1. Name - summary"）。chat_projects の選択と順に従う。
pub fn project_list(profile: &Profile) -> String {
    profile
        .chat_project_list()
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}. {} - {}", i + 1, p.name, p.short_description()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 話題一覧（"- label" を改行区切り）
pub fn topic_list(labels: &[&str]) -> String {
    labels
        .iter()
        .map(|l| format!("- {}", l))
        .collect::<Vec<_>>()
        .join("\n")
}

fn lookup(key: &str, profile: &Profile, topics: &[&str]) -> Option<String> {
    let c = &profile.contact;
    let opt = |v: &Option<String>| Some(v.clone().unwrap_or_default());
    match key {
        "name" => Some(profile.name.clone()),
        "first_name" => Some(profile.first_name().to_string()),
        "role" => Some(profile.role.clone()),
        "email" => opt(&c.email),
        "phone" => opt(&c.phone),
        "github" => opt(&c.github),
        "linkedin" => opt(&c.linkedin),
        "portfolio" => opt(&c.portfolio),
        "skills" => Some(profile.skills.join(", ")),
        "projects" => Some(project_list(profile)),
        "contact_card" => Some(contact_card(profile)),
        "topics" => Some(topic_list(topics)),
        _ => None,
    }
}

/// テンプレートを展開する
pub fn expand(template: &str, profile: &Profile, topics: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let key = &after[..close];
        match lookup(key, profile, topics) {
            Some(value) => out.push_str(&value),
            None => {
                out.push('{');
                out.push_str(key);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{Contact, Project};

    fn profile() -> Profile {
        Profile {
            name: "Ada Lovelace".to_string(),
            role: "Analyst".to_string(),
            contact: Contact {
                email: Some("ada@example.com".to_string()),
                portfolio: Some("https://ada.example".to_string()),
                ..Default::default()
            },
            skills: vec!["Math".to_string(), "Poetry".to_string()],
            projects: vec![
                Project {
                    name: "Engine Notes".to_string(),
                    description: "Long form".to_string(),
                    summary: Some("Notes".to_string()),
                    ..Default::default()
                },
                Project {
                    name: "Loom".to_string(),
                    description: "Cards".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_expand_known_placeholders() {
        let out = expand("{first_name} knows {skills}", &profile(), &[]);
        assert_eq!(out, "Ada knows Math, Poetry");
    }

    #[test]
    fn test_expand_keeps_unknown_and_unclosed() {
        assert_eq!(expand("a {nope} b", &profile(), &[]), "a {nope} b");
        assert_eq!(expand("a {name", &profile(), &[]), "a {name");
    }

    #[test]
    fn test_missing_field_is_empty() {
        assert_eq!(expand("[{phone}]", &profile(), &[]), "[]");
    }

    #[test]
    fn test_contact_card_omits_absent_fields() {
        assert_eq!(
            contact_card(&profile()),
            "Email: ada@example.com\nPortfolio: https://ada.example"
        );
    }

    #[test]
    fn test_project_list_numbered() {
        assert_eq!(
            project_list(&profile()),
            "1. Engine Notes - Notes\n2. Loom - Cards"
        );
    }

    #[test]
    fn test_topics() {
        assert_eq!(
            expand("{topics}", &profile(), &["Skills", "Contact"]),
            "- Skills\n- Contact"
        );
    }
}
