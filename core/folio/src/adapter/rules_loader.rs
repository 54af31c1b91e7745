//! ルール表の読み込み（adapter 層）
//!
//! rules.txt の書式:
//!
//! ```text
//! # コメント
//! [contact]
//! label: Contact information
//! trigger: email
//! trigger: /\bphone\b/
//! You can reach {first_name} at:
//! {contact_card}
//!
//! [fallback]
//! I can help you learn more about {name}. Try asking about:
//! {topics}
//! ```
//!
//! `[topic]` で 1 ルールが始まり、宣言順がそのまま優先順になる。
//! `/.../` で囲まれたトリガは大文字小文字を区別しない正規表現、それ以外は部分一致。
//! `[fallback]` は既定の話題メニューを置き換える。

use crate::domain::keyword_rule::DEFAULT_FALLBACK;
use crate::domain::{KeywordRule, RuleTable, Topic, Trigger};
use crate::ports::outbound::RulesLoader;
use common::error::Error;
use common::ports::outbound::{EnvResolver, FileSystem};
use regex::RegexBuilder;
use std::path::Path;
use std::sync::Arc;

const FALLBACK_TOPIC: &str = "fallback";

/// 読み込み途中のルール
struct Draft {
    topic: String,
    line_no: usize,
    label: Option<String>,
    triggers: Vec<Trigger>,
    body: Vec<String>,
}

impl Draft {
    fn template(&self) -> String {
        let start = self.body.iter().position(|l| !l.trim().is_empty());
        let end = self.body.iter().rposition(|l| !l.trim().is_empty());
        match (start, end) {
            (Some(s), Some(e)) => self.body[s..=e].join("\n"),
            _ => String::new(),
        }
    }
}

fn parse_trigger(raw: &str, line_no: usize) -> Result<Trigger, Error> {
    if raw.is_empty() {
        return Err(Error::config(format!("line {}: empty trigger", line_no)));
    }
    // /.../ で囲まれている場合は正規表現、それ以外は部分一致
    if raw.starts_with('/') && raw.ends_with('/') && raw.len() > 2 {
        let regex_str = &raw[1..raw.len() - 1];
        // 入力は小文字化して照合されるので、パターン側の大文字も一致させる
        return RegexBuilder::new(regex_str)
            .case_insensitive(true)
            .build()
            .map(Trigger::Regex)
            .map_err(|e| {
                Error::config(format!(
                    "line {}: invalid regex '{}' ({})",
                    line_no, regex_str, e
                ))
            });
    }
    Ok(Trigger::substring(raw))
}

/// 確定したルールを rules か fallback に振り分ける
fn finish(
    draft: Draft,
    rules: &mut Vec<KeywordRule>,
    fallback: &mut Option<String>,
) -> Result<(), Error> {
    let template = draft.template();
    if draft.topic == FALLBACK_TOPIC {
        if !draft.triggers.is_empty() {
            return Err(Error::config(format!(
                "line {}: [fallback] must not have triggers",
                draft.line_no
            )));
        }
        *fallback = Some(template);
        return Ok(());
    }
    if draft.triggers.is_empty() {
        return Err(Error::config(format!(
            "line {}: rule [{}] has no triggers",
            draft.line_no, draft.topic
        )));
    }
    if template.is_empty() {
        return Err(Error::config(format!(
            "line {}: rule [{}] has no response text",
            draft.line_no, draft.topic
        )));
    }
    rules.push(KeywordRule {
        topic: Topic::new(draft.topic),
        label: draft.label,
        triggers: draft.triggers,
        template,
    });
    Ok(())
}

/// rules.txt の内容をルール表にする
pub fn parse_rules(content: &str) -> Result<RuleTable, Error> {
    let mut rules = Vec::new();
    let mut fallback = None;
    let mut current: Option<Draft> = None;

    for (i, line) in content.lines().enumerate() {
        let line_no = i + 1;
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            continue;
        }

        if trimmed.starts_with('[') && trimmed.ends_with(']') && trimmed.len() > 2 {
            if let Some(draft) = current.take() {
                finish(draft, &mut rules, &mut fallback)?;
            }
            current = Some(Draft {
                topic: trimmed[1..trimmed.len() - 1].trim().to_string(),
                line_no,
                label: None,
                triggers: Vec::new(),
                body: Vec::new(),
            });
            continue;
        }

        let Some(draft) = current.as_mut() else {
            if trimmed.is_empty() {
                continue;
            }
            return Err(Error::config(format!(
                "line {}: text outside of a [topic] section",
                line_no
            )));
        };

        if let Some(raw) = trimmed.strip_prefix("trigger:") {
            draft.triggers.push(parse_trigger(raw.trim(), line_no)?);
        } else if let Some(raw) = trimmed.strip_prefix("label:") {
            draft.label = Some(raw.trim().to_string());
        } else {
            draft.body.push(line.trim_end().to_string());
        }
    }
    if let Some(draft) = current.take() {
        finish(draft, &mut rules, &mut fallback)?;
    }

    if rules.is_empty() && fallback.is_none() {
        return Err(Error::config("no rules defined"));
    }
    Ok(RuleTable::new(
        rules,
        fallback.unwrap_or_else(|| DEFAULT_FALLBACK.to_string()),
    ))
}

/// 明示パス → <home>/rules.txt → 既定の表 の順で読む RulesLoader
pub struct TextRulesLoader {
    fs: Arc<dyn FileSystem>,
    env: Arc<dyn EnvResolver>,
}

impl TextRulesLoader {
    pub fn new(fs: Arc<dyn FileSystem>, env: Arc<dyn EnvResolver>) -> Self {
        Self { fs, env }
    }

    fn read(&self, path: &Path) -> Result<RuleTable, Error> {
        let content = self.fs.read_to_string(path)?;
        parse_rules(&content).map_err(|e| match e {
            Error::Config(msg) => Error::config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }
}

impl RulesLoader for TextRulesLoader {
    fn load_rules(&self, explicit: Option<&Path>) -> Result<RuleTable, Error> {
        if let Some(path) = explicit {
            return self.read(path);
        }
        let Ok(dirs) = self.env.resolve_dirs() else {
            return Ok(RuleTable::default());
        };
        let path = dirs.rules_file();
        if self.fs.exists(&path) {
            self.read(&path)
        } else {
            Ok(RuleTable::default())
        }
    }
}
