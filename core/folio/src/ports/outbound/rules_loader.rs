//! ルール表読み込みの Outbound ポート

use crate::domain::RuleTable;
use common::error::Error;
use std::path::Path;

/// ルール表を読み込む（明示パス → rules.txt → 既定の表）
pub trait RulesLoader: Send + Sync {
    fn load_rules(&self, explicit: Option<&Path>) -> Result<RuleTable, Error>;
}
