//! キーワードルールと応答導出
//!
//! ルール表は宣言順の Vec。入力を小文字化し、先頭から順に調べて
//! 最初にトリガが一致したルールの応答を返す（first-match-wins）。
//! どれにも一致しなければフォールバック（話題メニュー）を返すため、応答は必ず空でない。

use crate::domain::profile::Profile;
use crate::domain::template;
use regex::Regex;

/// ルールの話題名（contact, skills 等）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Topic(String);

impl Topic {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for Topic {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// トリガ（小文字化済みの部分文字列 or 正規表現）
#[derive(Debug, Clone)]
pub enum Trigger {
    Substring(String),
    Regex(Regex),
}

impl Trigger {
    /// 部分文字列トリガ（小文字化して保持する）
    pub fn substring(s: &str) -> Self {
        Trigger::Substring(s.to_lowercase())
    }

    /// 小文字化済みの入力に一致するか
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Trigger::Substring(s) => lowered.contains(s.as_str()),
            Trigger::Regex(re) => re.is_match(lowered),
        }
    }
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trigger::Substring(s) => write!(f, "{:?}", s),
            Trigger::Regex(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

/// キーワードルール 1 件
#[derive(Debug, Clone)]
pub struct KeywordRule {
    pub topic: Topic,
    /// フォールバックの `{topics}` に並べる説明（無ければ並べない）
    pub label: Option<String>,
    pub triggers: Vec<Trigger>,
    pub template: String,
}

impl KeywordRule {
    pub fn new(topic: &str, triggers: &[&str], template: &str) -> Self {
        Self {
            topic: Topic::new(topic),
            label: None,
            triggers: triggers.iter().map(|t| Trigger::substring(t)).collect(),
            template: template.to_string(),
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| t.matches(lowered))
    }
}

/// 応答（どのルールが一致したか + 本文）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// None はフォールバック
    pub topic: Option<Topic>,
    pub text: String,
}

pub const DEFAULT_FALLBACK: &str = "I can help you learn more about {name}. Try asking about:
- Skills and technologies
- Projects and work experience
- Contact information
- GitHub profile";

/// 展開結果が空のときの最終手段（応答が空にならないことの保証）
const LAST_RESORT: &str = "Try asking about skills, projects, or contact information.";

/// 宣言順を保つルール表
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<KeywordRule>,
    fallback: String,
}

impl RuleTable {
    pub fn new(rules: Vec<KeywordRule>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// 入力に最初に一致したルール（宣言順）
    pub fn first_match(&self, input: &str) -> Option<&KeywordRule> {
        let lowered = input.to_lowercase();
        self.rules.iter().find(|r| r.matches(&lowered))
    }

    /// 応答を導出する（全域関数。I/O なし）
    pub fn respond(&self, input: &str, profile: &Profile) -> Reply {
        let labels: Vec<&str> = self.rules.iter().filter_map(|r| r.label.as_deref()).collect();
        if let Some(rule) = self.first_match(input) {
            let text = template::expand(&rule.template, profile, &labels);
            if !text.trim().is_empty() {
                return Reply {
                    topic: Some(rule.topic.clone()),
                    text,
                };
            }
        }
        let text = template::expand(&self.fallback, profile, &labels);
        let text = if text.trim().is_empty() {
            LAST_RESORT.to_string()
        } else {
            text
        };
        Reply { topic: None, text }
    }
}

impl Default for RuleTable {
    /// 既定のルール表（優先順: contact, skills, projects, github, greeting）
    fn default() -> Self {
        Self::new(
            vec![
                KeywordRule::new(
                    "contact",
                    &["contact", "email", "phone"],
                    "You can reach {first_name} at:\n{contact_card}",
                )
                .with_label("Contact information"),
                KeywordRule::new(
                    "skills",
                    &["skill", "technology", "tech stack"],
                    "{first_name}'s key skills include: {skills}",
                )
                .with_label("Skills and technologies"),
                KeywordRule::new(
                    "projects",
                    &["project", "work"],
                    "Here are some of {first_name}'s notable projects:\n{projects}",
                )
                .with_label("Projects and work experience"),
                KeywordRule::new(
                    "github",
                    &["github"],
                    "You can find {first_name}'s work on GitHub: {github}",
                )
                .with_label("GitHub profile"),
                KeywordRule::new(
                    "greeting",
                    &["hello", "hi", "hey"],
                    "Hello! I'm here to help you learn more about {name}. Feel free to ask about skills, projects, or contact information!",
                ),
            ],
            DEFAULT_FALLBACK,
        )
    }
}

/// ルール表とプロフィールを束ねた応答器
#[derive(Debug, Clone)]
pub struct Responder {
    table: RuleTable,
    profile: Profile,
}

impl Responder {
    pub fn new(table: RuleTable, profile: Profile) -> Self {
        Self { table, profile }
    }

    pub fn respond(&self, input: &str) -> Reply {
        self.table.respond(input, &self.profile)
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_trigger_is_lowercased() {
        let t = Trigger::substring("Tech Stack");
        assert!(t.matches("what is your tech stack?"));
        assert!(!t.matches("stack"));
    }

    #[test]
    fn test_regex_trigger() {
        let t = Trigger::Regex(Regex::new(r"\bhi\b").unwrap());
        assert!(t.matches("hi there"));
        assert!(!t.matches("this"));
        assert_eq!(t.to_string(), r"/\bhi\b/");
    }

    #[test]
    fn test_first_match_respects_declaration_order() {
        let table = RuleTable::new(
            vec![
                KeywordRule::new("b", &["beta"], "B"),
                KeywordRule::new("a", &["alpha"], "A"),
            ],
            "none",
        );
        let profile = Profile::default();
        let r = table.respond("alpha beta", &profile);
        assert_eq!(r.topic, Some(Topic::new("b")));
        assert_eq!(r.text, "B");
    }

    #[test]
    fn test_empty_expansion_falls_back() {
        let table = RuleTable::new(vec![KeywordRule::new("gh", &["github"], "{github}")], "menu");
        let r = table.respond("github", &Profile::default());
        assert_eq!(r.topic, None);
        assert_eq!(r.text, "menu");
    }

    #[test]
    fn test_empty_fallback_uses_last_resort() {
        let table = RuleTable::new(vec![], "");
        let r = table.respond("anything", &Profile::default());
        assert!(!r.text.is_empty());
    }

    #[test]
    fn test_default_table_order() {
        let topics: Vec<String> = RuleTable::default()
            .rules()
            .iter()
            .map(|r| r.topic.to_string())
            .collect();
        assert_eq!(topics, vec!["contact", "skills", "projects", "github", "greeting"]);
    }
}
