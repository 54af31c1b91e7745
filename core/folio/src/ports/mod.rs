//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: アプリが外界（設定ファイル・描画・端末入出力・待機）を使うための trait

pub mod inbound;
pub mod outbound;
