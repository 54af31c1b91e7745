//! ユースケース層（ポート経由でのみ外界に触れる）

pub mod app;
pub mod chat;
