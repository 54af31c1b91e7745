//! 設定読み込みの Outbound ポート

use crate::domain::Settings;
use common::error::Error;

/// settings.json を読み込む。無ければ既定値。
pub trait SettingsLoader: Send + Sync {
    fn load_settings(&self) -> Result<Settings, Error>;
}
