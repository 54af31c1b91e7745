//! FolioUseCase: プロフィール・ルール・設定を読み込み、描画と応答を行う
//!
//! どの経路でも読み込みは一度だけ。読み込んだ値は以後変更しない。

use crate::domain::{ChatWidget, PageFormat, Reply, Responder, RuleTable, Settings};
use crate::ports::outbound::{PageRenderer, ProfileLoader, RulesLoader, SettingsLoader};
use common::error::Error;
use common::ports::outbound::{FileSystem, Log, LogLevel, LogRecord};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// --- 責務別 Deps（usecase が定義を所有し、wiring は組み立てるだけ）

pub struct FolioDeps {
    pub content: ContentDeps,
    pub output: OutputDeps,
    pub obs: ObsDeps,
}

pub struct ContentDeps {
    pub profile_loader: Arc<dyn ProfileLoader>,
    pub rules_loader: Arc<dyn RulesLoader>,
    pub settings_loader: Arc<dyn SettingsLoader>,
}

pub struct OutputDeps {
    pub fs: Arc<dyn FileSystem>,
    pub renderers: Vec<Arc<dyn PageRenderer>>,
}

pub struct ObsDeps {
    pub log: Arc<dyn Log>,
}

/// -P / -R で明示された読み込み元
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentSources {
    pub profile: Option<PathBuf>,
    pub rules: Option<PathBuf>,
}

/// `folio rules` の 1 行分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSummary {
    pub topic: String,
    pub triggers: Vec<String>,
}

pub struct FolioUseCase {
    deps: FolioDeps,
}

impl FolioUseCase {
    pub fn new(deps: FolioDeps) -> Self {
        Self { deps }
    }

    fn log(&self, record: LogRecord) {
        let _ = self.deps.obs.log.log(&record.layer("usecase"));
    }

    fn load_responder(&self, sources: &ContentSources) -> Result<Responder, Error> {
        let profile = self
            .deps
            .content
            .profile_loader
            .load_profile(sources.profile.as_deref())?;
        let table = self
            .deps
            .content
            .rules_loader
            .load_rules(sources.rules.as_deref())?;
        self.log(
            LogRecord::new(LogLevel::Debug, "content loaded")
                .kind("config")
                .field("profile", profile.name.clone())
                .field("rules", table.rules().len()),
        );
        Ok(Responder::new(table, profile))
    }

    fn renderer(&self, format: PageFormat) -> Result<&Arc<dyn PageRenderer>, Error> {
        self.deps
            .output
            .renderers
            .iter()
            .find(|r| r.format() == format)
            .ok_or_else(|| {
                Error::system(format!("no renderer for format '{}'", format.as_str()))
            })
    }

    /// ページを描画して文字列で返す
    pub fn render_page(&self, sources: &ContentSources, format: PageFormat) -> Result<String, Error> {
        let profile = self
            .deps
            .content
            .profile_loader
            .load_profile(sources.profile.as_deref())?;
        let page = self.renderer(format)?.render(&profile);
        self.log(
            LogRecord::new(LogLevel::Info, "page rendered")
                .kind("render")
                .field("format", format.as_str())
                .field("bytes", page.len()),
        );
        Ok(page)
    }

    /// ページを描画してファイルへ書く（親ディレクトリは作る）。書いたバイト数を返す。
    pub fn render_to_file(
        &self,
        sources: &ContentSources,
        format: PageFormat,
        out: &Path,
    ) -> Result<usize, Error> {
        let page = self.render_page(sources, format)?;
        if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.deps.output.fs.create_dir_all(parent)?;
        }
        self.deps.output.fs.write(out, &page)?;
        self.log(
            LogRecord::new(LogLevel::Info, "page written")
                .kind("render")
                .field("path", out.display().to_string()),
        );
        Ok(page.len())
    }

    /// 1 回だけ応答する（遅延なし）
    pub fn ask(&self, sources: &ContentSources, message: &str) -> Result<Reply, Error> {
        if message.trim().is_empty() {
            return Err(Error::invalid_argument("no message given to ask"));
        }
        let responder = self.load_responder(sources)?;
        let reply = responder.respond(message);
        self.log(
            LogRecord::new(LogLevel::Info, "reply computed")
                .kind("chat")
                .field("topic", topic_name(&reply)),
        );
        Ok(reply)
    }

    /// 有効なルール表（優先順）
    pub fn rules(&self, sources: &ContentSources) -> Result<Vec<RuleSummary>, Error> {
        let table = self
            .deps
            .content
            .rules_loader
            .load_rules(sources.rules.as_deref())?;
        Ok(summarize(&table))
    }

    /// 対話用のウィジェットを組み立てる（CLI の上書きを設定に適用）
    pub fn chat_widget(
        &self,
        sources: &ContentSources,
        delay_ms: Option<u64>,
        suppress_on_close: bool,
    ) -> Result<ChatWidget, Error> {
        let settings: Settings = self
            .deps
            .content
            .settings_loader
            .load_settings()?
            .with_overrides(delay_ms, suppress_on_close);
        let responder = self.load_responder(sources)?;
        self.log(
            LogRecord::new(LogLevel::Debug, "chat settings")
                .kind("config")
                .field("reply_delay_ms", settings.reply_delay_ms)
                .field("close_policy", settings.close_policy.as_str()),
        );
        Ok(ChatWidget::new(Arc::new(responder), settings))
    }
}

/// ログ・表示用の話題名（フォールバックは "fallback"）
pub fn topic_name(reply: &Reply) -> String {
    reply
        .topic
        .as_ref()
        .map(|t| t.to_string())
        .unwrap_or_else(|| "fallback".to_string())
}

fn summarize(table: &RuleTable) -> Vec<RuleSummary> {
    table
        .rules()
        .iter()
        .map(|rule| RuleSummary {
            topic: rule.topic.to_string(),
            triggers: rule.triggers.iter().map(|t| t.to_string()).collect(),
        })
        .collect()
}
