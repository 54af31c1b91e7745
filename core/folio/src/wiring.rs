//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{
    CompositeLog, FileJsonLog, NoopLog, StdClock, StdEnvResolver, StdFileSystem, StderrLog,
};
use common::ports::outbound::{Clock, EnvResolver, FileSystem, Log, LogLevel, LogRecord};

use crate::adapter::{
    HtmlRenderer, JsonProfileLoader, JsonSettingsLoader, NoopInterruptChecker, SigintChecker,
    StdSleeper, TextRenderer, TextRulesLoader,
};
use crate::ports::outbound::{InterruptChecker, PageRenderer};
use crate::usecase::app::{ContentDeps, FolioDeps, FolioUseCase, ObsDeps, OutputDeps};
use crate::usecase::chat::ChatSession;

/// 配線で組み立てたポート群（main の Command ディスパッチで利用）
pub struct App {
    pub folio: FolioUseCase,
    pub clock: Arc<dyn Clock>,
    /// 構造化ログ（ファイルへ JSONL、-v なら stderr にも）
    pub logger: Arc<dyn Log>,
}

impl App {
    /// 対話セッションを組み立てる（SIGINT ハンドラはここで初めて登録する）
    pub fn chat_session(&self) -> ChatSession {
        let interrupt: Arc<dyn InterruptChecker> = match SigintChecker::new() {
            Ok(c) => Arc::new(c),
            Err(e) => {
                let _ = self.logger.log(
                    &LogRecord::new(LogLevel::Warn, "failed to install Ctrl+C handler")
                        .layer("wiring")
                        .field("error", e.to_string()),
                );
                Arc::new(NoopInterruptChecker)
            }
        };
        ChatSession::new(
            Arc::clone(&self.clock),
            Arc::new(StdSleeper),
            interrupt,
            Arc::clone(&self.logger),
        )
    }
}

fn build_logger(fs: &Arc<dyn FileSystem>, env_resolver: &Arc<dyn EnvResolver>, verbose: bool) -> Arc<dyn Log> {
    let file_log: Arc<dyn Log> = env_resolver
        .resolve_dirs()
        .map(|dirs| Arc::new(FileJsonLog::new(Arc::clone(fs), dirs.log_file())) as Arc<dyn Log>)
        .unwrap_or_else(|_| Arc::new(NoopLog));
    if verbose {
        let stderr_log: Arc<dyn Log> = Arc::new(StderrLog::default());
        Arc::new(CompositeLog::new(vec![file_log, stderr_log]))
    } else {
        file_log
    }
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_folio(verbose: bool) -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let logger = build_logger(&fs, &env_resolver, verbose);
    let renderers: Vec<Arc<dyn PageRenderer>> = vec![Arc::new(HtmlRenderer), Arc::new(TextRenderer)];
    let folio = FolioUseCase::new(FolioDeps {
        content: ContentDeps {
            profile_loader: Arc::new(JsonProfileLoader::new(Arc::clone(&fs), Arc::clone(&env_resolver))),
            rules_loader: Arc::new(TextRulesLoader::new(Arc::clone(&fs), Arc::clone(&env_resolver))),
            settings_loader: Arc::new(JsonSettingsLoader::new(Arc::clone(&fs), Arc::clone(&env_resolver))),
        },
        output: OutputDeps { fs, renderers },
        obs: ObsDeps {
            log: Arc::clone(&logger),
        },
    });
    App {
        folio,
        clock: Arc::new(StdClock),
        logger,
    }
}
