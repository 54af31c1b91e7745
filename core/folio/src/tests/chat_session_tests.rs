use crate::adapter::builtin_profile::builtin_profile;
use crate::adapter::NoopInterruptChecker;
use crate::domain::{ChatWidget, ClosePolicy, Message, Origin, Responder, RuleTable, Settings};
use crate::ports::outbound::{ChatInput, ChatIo, InterruptChecker, Sleeper};
use crate::usecase::chat::{ChatSession, ChatSummary};
use common::adapter::FixedClock;
use common::error::Error;
use common::ports::outbound::{Clock, Log, LogRecord};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// 台本の 1 手
enum Step {
    /// 1 行入力する
    Say(&'static str),
    /// 入力せずに指定ミリ秒待つ（固定時計を進める）
    Wait(u64),
}

use Step::{Say, Wait};

/// 台本どおりに入力を返し、出力を記録する ChatIo
struct ScriptedIo {
    steps: VecDeque<Step>,
    clock: Option<Arc<FixedClock>>,
    output: Vec<String>,
}

impl ScriptedIo {
    fn new(lines: &[&'static str]) -> Self {
        Self {
            steps: lines.iter().map(|s| Say(*s)).collect(),
            clock: None,
            output: Vec::new(),
        }
    }

    fn timed(clock: &Arc<FixedClock>, steps: Vec<Step>) -> Self {
        Self {
            steps: steps.into(),
            clock: Some(Arc::clone(clock)),
            output: Vec::new(),
        }
    }
}

impl ChatIo for ScriptedIo {
    fn read_line(&mut self, timeout_ms: u64) -> Result<ChatInput, Error> {
        match self.steps.pop_front() {
            None => Ok(ChatInput::Closed),
            Some(Say(line)) => Ok(ChatInput::Line(line.to_string())),
            Some(Wait(ms)) => {
                let waited = ms.min(timeout_ms);
                if let Some(clock) = &self.clock {
                    clock.advance(waited);
                }
                if waited < ms {
                    self.steps.push_front(Wait(ms - waited));
                }
                Ok(ChatInput::Idle)
            }
        }
    }

    fn show(&mut self, message: &Message) -> Result<(), Error> {
        let who = match message.origin {
            Origin::User => "you",
            Origin::Assistant => "assistant",
        };
        self.output.push(format!("{}: {}", who, message.text));
        Ok(())
    }

    fn notice(&mut self, text: &str) -> Result<(), Error> {
        self.output.push(format!("-- {}", text));
        Ok(())
    }
}

/// 待つ代わりに FixedClock を進める Sleeper
struct ClockSleeper {
    clock: Arc<FixedClock>,
}

impl ClockSleeper {
    fn new(clock: Arc<FixedClock>) -> Self {
        Self { clock }
    }
}

impl Sleeper for ClockSleeper {
    fn sleep_ms(&self, ms: u64) {
        self.clock.advance(ms);
    }
}

#[derive(Default)]
struct CollectLog {
    records: Mutex<Vec<LogRecord>>,
}

impl CollectLog {
    fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.message.clone())
            .collect()
    }

    fn topics(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.message == "reply delivered")
            .filter_map(|r| r.fields.as_ref()?.get("topic")?.as_str().map(String::from))
            .collect()
    }
}

impl Log for CollectLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// 眠ると割り込みフラグを立てる Sleeper（返信待ち中の Ctrl+C を再現）
struct InterruptingSleeper {
    flag: Arc<AtomicBool>,
}

impl Sleeper for InterruptingSleeper {
    fn sleep_ms(&self, _ms: u64) {
        self.flag.store(true, Ordering::SeqCst);
    }
}

struct FlagChecker {
    flag: Arc<AtomicBool>,
}

impl InterruptChecker for FlagChecker {
    fn is_interrupted(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

fn widget(policy: ClosePolicy) -> ChatWidget {
    let responder = Arc::new(Responder::new(RuleTable::default(), builtin_profile()));
    ChatWidget::new(
        responder,
        Settings {
            reply_delay_ms: 1000,
            close_policy: policy,
        },
    )
}

struct Harness {
    clock: Arc<FixedClock>,
    log: Arc<CollectLog>,
    session: ChatSession,
}

fn harness() -> Harness {
    let clock = Arc::new(FixedClock::new(1_000_000));
    let log = Arc::new(CollectLog::default());
    let session = ChatSession::new(
        Arc::clone(&clock) as Arc<dyn Clock>,
        Arc::new(ClockSleeper::new(Arc::clone(&clock))),
        Arc::new(NoopInterruptChecker),
        Arc::clone(&log) as Arc<dyn Log>,
    );
    Harness {
        clock,
        log,
        session,
    }
}

#[test]
fn test_hello_reply_after_delay() {
    let h = harness();
    let mut w = widget(ClosePolicy::Deliver);
    let mut io = ScriptedIo::timed(&h.clock, vec![Say("Hello"), Wait(1000), Say("/quit")]);

    let summary = h.session.run(&mut w, &mut io).unwrap();

    assert_eq!(
        summary,
        ChatSummary {
            submitted: 1,
            delivered: 1,
            interrupted: false
        }
    );
    assert_eq!(w.transcript().len(), 3);
    assert!(h.clock.now_ms() >= 1_001_000, "waited for the reply delay");
    assert_eq!(io.output.len(), 2);
    assert!(io.output[0].starts_with("assistant: Hi! I'm Rithik's assistant."));
    assert!(io.output[1].starts_with("assistant: Hello! I'm here to help"));
    assert_eq!(h.log.topics(), vec!["greeting"]);
}

#[test]
fn test_blank_lines_are_ignored() {
    let h = harness();
    let mut w = widget(ClosePolicy::Deliver);
    let mut io = ScriptedIo::new(&["", "   "]);

    let summary = h.session.run(&mut w, &mut io).unwrap();

    assert_eq!(summary.submitted, 0);
    assert_eq!(w.transcript().len(), 1);
    assert_eq!(h.clock.now_ms(), 1_000_000);
}

#[test]
fn test_eof_ends_session() {
    let h = harness();
    let mut w = widget(ClosePolicy::Deliver);
    let mut io = ScriptedIo::new(&["skills", "email"]);

    let summary = h.session.run(&mut w, &mut io).unwrap();

    assert_eq!(summary.submitted, 2);
    assert_eq!(summary.delivered, 2);
    assert_eq!(h.log.topics(), vec!["skills", "contact"]);
    let messages = h.log.messages();
    assert_eq!(messages.first().map(String::as_str), Some("chat started"));
    assert_eq!(messages.last().map(String::as_str), Some("chat finished"));
}

#[test]
fn test_closed_widget_refuses_messages() {
    let h = harness();
    let mut w = widget(ClosePolicy::Deliver);
    let mut io = ScriptedIo::new(&["/close", "Hello", "/open", "Hello"]);

    let summary = h.session.run(&mut w, &mut io).unwrap();

    assert_eq!(summary.submitted, 1);
    assert!(io.output.contains(&"-- chat closed".to_string()));
    assert!(io
        .output
        .contains(&"-- chat is closed; type /open to send messages".to_string()));
    assert!(io.output.contains(&"-- chat opened".to_string()));
    assert!(w.is_open());
}

#[test]
fn test_toggle_twice_reopens() {
    let h = harness();
    let mut w = widget(ClosePolicy::Suppress);
    let mut io = ScriptedIo::new(&["/toggle", "/toggle"]);

    h.session.run(&mut w, &mut io).unwrap();

    assert!(w.is_open());
    assert_eq!(
        &io.output[1..],
        &["-- chat closed".to_string(), "-- chat opened".to_string()]
    );
}

#[test]
fn test_history_shows_full_transcript() {
    let h = harness();
    let mut w = widget(ClosePolicy::Deliver);
    let mut io = ScriptedIo::timed(&h.clock, vec![Say("github"), Wait(1000), Say("/history")]);

    h.session.run(&mut w, &mut io).unwrap();

    let history = &io.output[2..];
    assert_eq!(history.len(), 3);
    assert!(history[0].starts_with("assistant: Hi!"));
    assert_eq!(history[1], "you: github");
    assert_eq!(
        history[2],
        "assistant: You can find Rithik's work on GitHub: https://github.com/RithikVerma"
    );
}

#[test]
fn test_unknown_command_is_not_submitted() {
    let h = harness();
    let mut w = widget(ClosePolicy::Deliver);
    let mut io = ScriptedIo::new(&["/frobnicate"]);

    let summary = h.session.run(&mut w, &mut io).unwrap();

    assert_eq!(summary.submitted, 0);
    assert!(io.output[1].starts_with("-- unknown command /frobnicate"));
}

#[test]
fn test_interrupt_while_waiting_drops_pending_reply() {
    let clock = Arc::new(FixedClock::new(0));
    let flag = Arc::new(AtomicBool::new(false));
    let session = ChatSession::new(
        Arc::clone(&clock) as Arc<dyn Clock>,
        Arc::new(InterruptingSleeper {
            flag: Arc::clone(&flag),
        }),
        Arc::new(FlagChecker {
            flag: Arc::clone(&flag),
        }),
        Arc::new(CollectLog::default()),
    );
    let mut w = widget(ClosePolicy::Deliver);
    let mut io = ScriptedIo::new(&["Hello"]);

    let summary = session.run(&mut w, &mut io).unwrap();

    assert!(summary.interrupted);
    assert_eq!(summary.delivered, 0);
    assert_eq!(w.pending_len(), 0);
    assert_eq!(w.transcript().len(), 2);
}

#[test]
fn test_interrupt_before_input_ends_immediately() {
    let flag = Arc::new(AtomicBool::new(true));
    let session = ChatSession::new(
        Arc::new(FixedClock::new(0)),
        Arc::new(ClockSleeper::new(Arc::new(FixedClock::new(0)))),
        Arc::new(FlagChecker { flag }),
        Arc::new(CollectLog::default()),
    );
    let mut w = widget(ClosePolicy::Deliver);
    let mut io = ScriptedIo::new(&["Hello"]);

    let summary = session.run(&mut w, &mut io).unwrap();

    assert!(summary.interrupted);
    assert_eq!(summary.submitted, 0);
    assert_eq!(io.steps.len(), 1);
}

#[test]
fn test_commands_are_read_while_reply_is_pending() {
    let h = harness();
    let mut w = widget(ClosePolicy::Deliver);
    let mut io = ScriptedIo::new(&["Hello", "/history"]);

    let summary = h.session.run(&mut w, &mut io).unwrap();

    // /history は返信の前に処理され、返信は入力の終わりで届く
    assert_eq!(summary.delivered, 1);
    assert_eq!(io.output.len(), 4);
    assert_eq!(io.output[2], "you: Hello");
    assert!(io.output[3].starts_with("assistant: Hello! I'm here to help"));
}

#[test]
fn test_close_policy_decides_pending_reply() {
    let script = ["Hello", "/close", "/open", "/history"];

    let h = harness();
    let mut delivered = widget(ClosePolicy::Deliver);
    let mut deliver_io = ScriptedIo::new(&script);
    let deliver_summary = h.session.run(&mut delivered, &mut deliver_io).unwrap();

    let h = harness();
    let mut suppressed = widget(ClosePolicy::Suppress);
    let mut suppress_io = ScriptedIo::new(&script);
    let suppress_summary = h.session.run(&mut suppressed, &mut suppress_io).unwrap();

    assert_eq!(deliver_summary.delivered, 1);
    assert_eq!(delivered.transcript().len(), 3);
    assert_eq!(deliver_io.output[1], "-- chat closed");

    assert_eq!(suppress_summary.delivered, 0);
    assert_eq!(suppressed.transcript().len(), 2);
    assert_eq!(suppressed.pending_len(), 0);
    assert_eq!(
        suppress_io.output[1],
        "-- chat closed (1 pending replies dropped)"
    );
    assert_ne!(deliver_io.output, suppress_io.output);
}

#[test]
fn test_reply_due_while_closed_shows_on_reopen() {
    let h = harness();
    let mut w = widget(ClosePolicy::Deliver);
    let mut io = ScriptedIo::timed(
        &h.clock,
        vec![Say("Hello"), Say("/close"), Wait(1000), Say("/open")],
    );

    let summary = h.session.run(&mut w, &mut io).unwrap();

    assert_eq!(summary.delivered, 1);
    assert_eq!(w.transcript().len(), 3);
    assert_eq!(&io.output[1..3], &["-- chat closed".to_string(), "-- chat opened".to_string()]);
    assert!(io.output[3].starts_with("assistant: Hello! I'm here to help"));
    assert_eq!(io.output.len(), 4);
}

#[test]
fn test_quit_drops_pending_reply() {
    let h = harness();
    let mut w = widget(ClosePolicy::Deliver);
    let mut io = ScriptedIo::new(&["Hello", "/quit"]);

    let summary = h.session.run(&mut w, &mut io).unwrap();

    assert_eq!(summary.submitted, 1);
    assert_eq!(summary.delivered, 0);
    assert_eq!(w.pending_len(), 0);
    assert_eq!(w.transcript().len(), 2);
    assert_eq!(h.clock.now_ms(), 1_000_000);
}
