//! 待機の Outbound ポート
//!
//! 返信の期限まで待つのに使う。テストでは固定時計を進める実装に差し替える。

pub trait Sleeper: Send + Sync {
    fn sleep_ms(&self, ms: u64);
}
