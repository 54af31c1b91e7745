//! Ctrl+C（SIGINT）等による割り込みを検知する Outbound ポート
//!
//! 対話モードで返信待ちの間にユーザーが中断した場合、保留中の返信を捨てて終了するために使用する。

/// 割り込みが要求されたかどうかを返す能力
pub trait InterruptChecker: Send + Sync {
    fn is_interrupted(&self) -> bool;
}
