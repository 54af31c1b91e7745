//! 時刻取得 Outbound ポート
//!
//! 返信の遅延配送はこの trait 経由で「現在時刻」を読み、ドメイン側には ms 値で渡す。

/// 時刻取得の抽象
///
/// 実装は `common::adapter::StdClock` やテスト用の固定時刻（`FixedClock`）など。
pub trait Clock: Send + Sync {
    /// 現在時刻をミリ秒（Unix epoch）で返す
    fn now_ms(&self) -> u64;
}
