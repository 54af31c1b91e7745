//! ページ描画 Outbound ポート

use crate::domain::{PageFormat, Profile};

/// プロフィールから 1 枚のページを組み立てる
///
/// 同じプロフィールからは常に同じ文字列を返す（時刻・乱数に依存しない）。
pub trait PageRenderer: Send + Sync {
    fn format(&self) -> PageFormat;
    fn render(&self, profile: &Profile) -> String;
}
