//! ChatSession: 端末での対話ループ
//!
//! 1 行読んで送信する。入力は次の返信期限までしか待たないので、返信待ちの間も
//! `/toggle` `/open` `/close` `/history` `/quit` を受け付ける（送信はせずウィジェット操作）。
//! 時刻は Clock から読む。入力が尽きたら残りの返信を Sleeper で待ってから終える。

use crate::domain::{ChatWidget, Message, Reply};
use crate::ports::outbound::{ChatInput, ChatIo, InterruptChecker, Sleeper};
use crate::usecase::app::topic_name;
use common::error::Error;
use common::ports::outbound::{Clock, Log, LogLevel, LogRecord};
use std::sync::Arc;

/// 入力待ち・返信待ちで一度に待つ上限（割り込み確認の間隔）
const WAIT_SLICE_MS: u64 = 50;

/// REPL のコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Toggle,
    Open,
    Close,
    History,
    Quit,
    Unknown(String),
    Text(String),
}

fn classify(line: &str) -> Input {
    let trimmed = line.trim();
    match trimmed {
        "/toggle" => Input::Toggle,
        "/open" => Input::Open,
        "/close" => Input::Close,
        "/history" => Input::History,
        "/quit" | "/exit" => Input::Quit,
        _ if trimmed.starts_with('/') && !trimmed.contains(char::is_whitespace) => {
            Input::Unknown(trimmed.to_string())
        }
        _ => Input::Text(line.to_string()),
    }
}

/// セッション終了時の集計
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatSummary {
    pub submitted: usize,
    pub delivered: usize,
    pub interrupted: bool,
}

pub struct ChatSession {
    clock: Arc<dyn Clock>,
    sleeper: Arc<dyn Sleeper>,
    interrupt: Arc<dyn InterruptChecker>,
    log: Arc<dyn Log>,
}

/// 表示済み位置を持つ実行中の状態
struct Run<'a> {
    widget: &'a mut ChatWidget,
    io: &'a mut dyn ChatIo,
    shown: usize,
    summary: ChatSummary,
}

impl Run<'_> {
    /// 開いていれば未表示のアシスタント発言を表示する（ユーザー発言は端末に既にある）
    fn flush(&mut self) -> Result<(), Error> {
        if !self.widget.is_open() {
            return Ok(());
        }
        let pending: Vec<Message> = self
            .widget
            .transcript()
            .since(self.shown)
            .iter()
            .filter(|m| m.is_assistant())
            .cloned()
            .collect();
        for m in &pending {
            self.io.show(m)?;
        }
        self.shown = self.widget.transcript().len();
        Ok(())
    }
}

impl ChatSession {
    pub fn new(
        clock: Arc<dyn Clock>,
        sleeper: Arc<dyn Sleeper>,
        interrupt: Arc<dyn InterruptChecker>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self {
            clock,
            sleeper,
            interrupt,
            log,
        }
    }

    fn log_reply(&self, reply: &Reply) {
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "reply delivered")
                .layer("usecase")
                .kind("chat")
                .field("topic", topic_name(reply)),
        );
    }

    /// 期限の来た返信を取り込み、ログに残す
    fn deliver_due(&self, run: &mut Run<'_>) -> Result<(), Error> {
        let delivered = run.widget.poll(self.clock.now_ms());
        for reply in &delivered {
            self.log_reply(reply);
        }
        run.summary.delivered += delivered.len();
        run.flush()
    }

    /// 次の返信期限か WAIT_SLICE_MS の早い方
    fn read_timeout(&self, widget: &ChatWidget) -> u64 {
        match widget.next_due() {
            Some(due) => due.saturating_sub(self.clock.now_ms()).min(WAIT_SLICE_MS),
            None => WAIT_SLICE_MS,
        }
    }

    /// 保留中の返信がなくなるまで待つ。割り込まれたら残りを取り消して false。
    fn wait_for_replies(&self, run: &mut Run<'_>) -> Result<bool, Error> {
        while let Some(due) = run.widget.next_due() {
            if self.interrupt.is_interrupted() {
                run.widget.cancel_all();
                return Ok(false);
            }
            let now = self.clock.now_ms();
            if due > now {
                self.sleeper.sleep_ms((due - now).min(WAIT_SLICE_MS));
            }
            self.deliver_due(run)?;
        }
        Ok(true)
    }

    fn visibility_notice(run: &mut Run<'_>, suppressed: usize) -> Result<(), Error> {
        if run.widget.is_open() {
            run.io.notice("chat opened")?;
            run.flush()
        } else if suppressed > 0 {
            run.io
                .notice(&format!("chat closed ({} pending replies dropped)", suppressed))
        } else {
            run.io.notice("chat closed")
        }
    }

    /// 対話ループを実行する。入力が尽きるか /quit か割り込みで終わる。
    /// /quit と割り込みは保留中の返信を捨て、入力の終わりは届くまで待つ。
    pub fn run(&self, widget: &mut ChatWidget, io: &mut dyn ChatIo) -> Result<ChatSummary, Error> {
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "chat started")
                .layer("usecase")
                .kind("chat")
                .field("reply_delay_ms", widget.settings().reply_delay_ms),
        );
        widget.open();
        let mut run = Run {
            widget,
            io,
            shown: 0,
            summary: ChatSummary::default(),
        };
        run.flush()?;

        loop {
            if self.interrupt.is_interrupted() {
                run.widget.cancel_all();
                run.summary.interrupted = true;
                break;
            }
            self.deliver_due(&mut run)?;
            let timeout = self.read_timeout(run.widget);
            let line = match run.io.read_line(timeout)? {
                ChatInput::Line(line) => line,
                ChatInput::Idle => continue,
                ChatInput::Closed => {
                    if !self.wait_for_replies(&mut run)? {
                        run.summary.interrupted = true;
                    }
                    break;
                }
            };
            match classify(&line) {
                Input::Quit => {
                    run.widget.cancel_all();
                    break;
                }
                Input::Toggle => {
                    let suppressed = if run.widget.is_open() {
                        run.widget.close()
                    } else {
                        run.widget.open();
                        0
                    };
                    Self::visibility_notice(&mut run, suppressed)?;
                }
                Input::Open => {
                    run.widget.open();
                    Self::visibility_notice(&mut run, 0)?;
                }
                Input::Close => {
                    let suppressed = run.widget.close();
                    Self::visibility_notice(&mut run, suppressed)?;
                }
                Input::History => {
                    let messages = run.widget.transcript().messages().to_vec();
                    for m in &messages {
                        run.io.show(m)?;
                    }
                }
                Input::Unknown(cmd) => {
                    run.io.notice(&format!(
                        "unknown command {} (try /toggle, /open, /close, /history, /quit)",
                        cmd
                    ))?;
                }
                Input::Text(text) => {
                    if !run.widget.is_open() {
                        run.io.notice("chat is closed; type /open to send messages")?;
                        continue;
                    }
                    run.widget.set_input(text);
                    if run.widget.submit_input(self.clock.now_ms()).is_some() {
                        run.summary.submitted += 1;
                        // ユーザー発言は入力として既に表示されている
                        run.shown = run.widget.transcript().len();
                    }
                }
            }
        }

        let summary = run.summary;
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "chat finished")
                .layer("usecase")
                .kind("chat")
                .field("submitted", summary.submitted)
                .field("delivered", summary.delivered)
                .field("interrupted", summary.interrupted),
        );
        Ok(summary)
    }
}
