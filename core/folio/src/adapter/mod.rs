//! folio の Outbound アダプタ（ファイル読み込み・描画・端末入出力）

pub mod builtin_profile;
pub mod html_renderer;
pub mod profile_loader;
pub mod rules_loader;
pub mod settings_loader;
pub mod sigint_checker;
pub mod std_sleeper;
pub mod stdio_chat;
pub mod text_renderer;

pub use html_renderer::HtmlRenderer;
pub use profile_loader::JsonProfileLoader;
pub use rules_loader::TextRulesLoader;
pub use settings_loader::JsonSettingsLoader;
pub use sigint_checker::{NoopInterruptChecker, SigintChecker};
pub use std_sleeper::StdSleeper;
pub use stdio_chat::StdioChatIo;
pub use text_renderer::TextRenderer;
