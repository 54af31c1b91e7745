//! ウィジェットの設定（settings.json）

use serde::Deserialize;

/// 返信の既定遅延（ms）
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

/// 閉じたときに保留中の返信をどう扱うか
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClosePolicy {
    /// 閉じても保留中の返信はそのまま届く
    #[default]
    Deliver,
    /// 閉じた時点で保留中の返信をすべて取り消す
    Suppress,
}

impl ClosePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClosePolicy::Deliver => "deliver",
            ClosePolicy::Suppress => "suppress",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub reply_delay_ms: u64,
    pub close_policy: ClosePolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            close_policy: ClosePolicy::Deliver,
        }
    }
}

impl Settings {
    /// CLI 指定で上書きする
    pub fn with_overrides(mut self, delay_ms: Option<u64>, suppress_on_close: bool) -> Self {
        if let Some(ms) = delay_ms {
            self.reply_delay_ms = ms;
        }
        if suppress_on_close {
            self.close_policy = ClosePolicy::Suppress;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let s: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.reply_delay_ms, 1000);
    }

    #[test]
    fn test_parse_and_ignore_unknown_keys() {
        let s: Settings =
            serde_json::from_str(r#"{"reply_delay_ms": 250, "close_policy": "suppress", "theme": "dark"}"#)
                .unwrap();
        assert_eq!(s.reply_delay_ms, 250);
        assert_eq!(s.close_policy, ClosePolicy::Suppress);
    }

    #[test]
    fn test_overrides() {
        let s = Settings::default().with_overrides(Some(0), true);
        assert_eq!(s.reply_delay_ms, 0);
        assert_eq!(s.close_policy, ClosePolicy::Suppress);
        let s = Settings::default().with_overrides(None, false);
        assert_eq!(s, Settings::default());
    }
}
