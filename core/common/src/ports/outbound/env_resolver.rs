//! 環境変数解決 Outbound ポート
//!
//! ホーム・state ディレクトリを環境変数から解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::{Dirs, HomeDir};
use crate::error::Error;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用の固定値など。
pub trait EnvResolver: Send + Sync {
    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. FOLIO_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/folio
    /// 3. $HOME/.config/folio
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;

    /// config / state ディレクトリをまとめて解決する
    ///
    /// state は FOLIO_HOME があれば $FOLIO_HOME/state、無ければ
    /// $XDG_STATE_HOME/folio、それも無ければ $HOME/.local/state/folio。
    fn resolve_dirs(&self) -> Result<Dirs, Error>;
}
