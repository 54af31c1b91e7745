//! Sleeper 実装（実時間で待つ）

use crate::ports::outbound::Sleeper;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct StdSleeper;

impl Sleeper for StdSleeper {
    fn sleep_ms(&self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}
