//! プロフィール読み込みの Outbound ポート

use crate::domain::Profile;
use common::error::Error;
use std::path::Path;

/// プロフィールを読み込む
///
/// 明示パスがあればそれを、無ければ設定ディレクトリの profile.json を、
/// それも無ければ組み込みのプロフィールを返す。
pub trait ProfileLoader: Send + Sync {
    fn load_profile(&self, explicit: Option<&Path>) -> Result<Profile, Error>;
}
