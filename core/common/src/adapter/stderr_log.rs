//! 人間向けログ（LogRecord → stderr へ要点のみ出力）
//!
//! -v / --verbose 指定時に FileJsonLog と併用する。fields の全量は出さず要点のみ。

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};

const FIELDS_SUMMARY_MAX: usize = 200;

/// fields を 1 行の短い文字列にする（巨大化防止）
fn fields_summary(record: &LogRecord) -> String {
    let Some(fields) = &record.fields else {
        return String::new();
    };
    let s = fields
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(" ");
    if s.chars().count() <= FIELDS_SUMMARY_MAX {
        return s;
    }
    let truncated: String = s.chars().take(FIELDS_SUMMARY_MAX).collect();
    format!("{}...", truncated)
}

/// LogRecord を 1 行に整形する
pub fn format_line(record: &LogRecord) -> String {
    let mut line = format!("[{}] {}", record.level.as_str(), record.message);
    if let Some(kind) = &record.kind {
        line.push_str(&format!(" ({})", kind));
    }
    let fields = fields_summary(record);
    if !fields.is_empty() {
        line.push(' ');
        line.push_str(&fields);
    }
    line
}

/// 指定レベル以下（より重要）のレコードだけを stderr に出す Log 実装
pub struct StderrLog {
    max_level: LogLevel,
}

impl StderrLog {
    pub fn new(max_level: LogLevel) -> Self {
        Self { max_level }
    }
}

impl Default for StderrLog {
    fn default() -> Self {
        Self::new(LogLevel::Debug)
    }
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if record.level <= self.max_level {
            eprintln!("{}", format_line(record));
        }
        Ok(())
    }
}
