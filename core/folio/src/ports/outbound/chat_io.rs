//! 対話モードの端末入出力 Outbound ポート

use crate::domain::Message;
use common::error::Error;

/// read_line の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatInput {
    /// 1 行（改行は除く）
    Line(String),
    /// 待ち時間内に入力が無かった
    Idle,
    /// 入力の終わり（EOF）
    Closed,
}

/// 1 行入力とメッセージ表示
///
/// 実装は StdioChatIo（stdin / stdout）やテスト用の台本付き実装など。
pub trait ChatIo {
    /// 最大 timeout_ms だけ 1 行を待つ。間に合わなければ Idle。
    fn read_line(&mut self, timeout_ms: u64) -> Result<ChatInput, Error>;
    /// トランスクリプトの 1 行を表示する
    fn show(&mut self, message: &Message) -> Result<(), Error>;
    /// ウィジェット外の案内（開閉・エラー等）を表示する
    fn notice(&mut self, text: &str) -> Result<(), Error>;
}
