//! folio 共通ライブラリ
//!
//! `folio` コマンドが使うエラー型・ポート・標準アダプタを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（ディレクトリ等の Newtype）
pub mod domain;

/// Outbound ポート（時刻・FS・環境変数・ログ）
pub mod ports;

/// ポートの標準実装
pub mod adapter;
