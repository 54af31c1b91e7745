//! Outbound ポート: アプリが外界（設定ファイル・描画・端末入出力・待機）を使うための trait

pub mod chat_io;
pub mod interrupt_checker;
pub mod page_renderer;
pub mod profile_loader;
pub mod rules_loader;
pub mod settings_loader;
pub mod sleeper;

pub use chat_io::{ChatInput, ChatIo};
pub use interrupt_checker::InterruptChecker;
pub use page_renderer::PageRenderer;
pub use profile_loader::ProfileLoader;
pub use rules_loader::RulesLoader;
pub use settings_loader::SettingsLoader;
pub use sleeper::Sleeper;
