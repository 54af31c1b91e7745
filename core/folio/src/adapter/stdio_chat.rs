//! 端末での対話入出力（ChatIo 実装）
//!
//! 入力は別スレッドで 1 行ずつ読み、チャネル越しに期限付きで受け取る。
//! 表示は発言者ラベル付きの 1 行。テストでは Cursor と Vec<u8> を渡す。

use crate::domain::{Message, Origin};
use crate::ports::outbound::{ChatInput, ChatIo};
use common::error::Error;
use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::time::Duration;

const PROMPT: &str = "> ";

pub struct StdioChatIo<W> {
    lines: mpsc::Receiver<io::Result<String>>,
    writer: W,
    assistant_label: String,
    /// プロンプトを出して入力待ちの行にいる
    prompted: bool,
}

impl StdioChatIo<io::Stdout> {
    /// stdin / stdout を使う
    pub fn stdio(assistant_label: impl Into<String>) -> Self {
        Self::new(io::BufReader::new(io::stdin()), io::stdout(), assistant_label)
    }
}

/// EOF かエラーか受け手が消えるまで行を送る
fn pump_lines<R: BufRead>(mut reader: R, tx: mpsc::Sender<io::Result<String>>) {
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => return,
            Ok(_) => {
                let trimmed_len = line.trim_end_matches(|c: char| c == '\r' || c == '\n').len();
                line.truncate(trimmed_len);
                if tx.send(Ok(line)).is_err() {
                    return;
                }
            }
            Err(e) => {
                let _ = tx.send(Err(e));
                return;
            }
        }
    }
}

impl<W: Write> StdioChatIo<W> {
    pub fn new<R>(reader: R, writer: W, assistant_label: impl Into<String>) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || pump_lines(reader, tx));
        Self {
            lines: rx,
            writer,
            assistant_label: assistant_label.into(),
            prompted: false,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// プロンプト行に割り込んで出力するときは先に改行する
    fn leave_prompt(&mut self) -> Result<(), Error> {
        if self.prompted {
            writeln!(self.writer)?;
            self.prompted = false;
        }
        Ok(())
    }
}

impl<W: Write> ChatIo for StdioChatIo<W> {
    fn read_line(&mut self, timeout_ms: u64) -> Result<ChatInput, Error> {
        if !self.prompted {
            write!(self.writer, "{}", PROMPT)?;
            self.writer.flush()?;
            self.prompted = true;
        }
        match self.lines.recv_timeout(Duration::from_millis(timeout_ms)) {
            Ok(Ok(line)) => {
                self.prompted = false;
                Ok(ChatInput::Line(line))
            }
            Ok(Err(e)) => {
                self.prompted = false;
                Err(e.into())
            }
            Err(mpsc::RecvTimeoutError::Timeout) => Ok(ChatInput::Idle),
            Err(mpsc::RecvTimeoutError::Disconnected) => Ok(ChatInput::Closed),
        }
    }

    fn show(&mut self, message: &Message) -> Result<(), Error> {
        self.leave_prompt()?;
        let label = match message.origin {
            Origin::User => "you",
            Origin::Assistant => self.assistant_label.as_str(),
        };
        let mut lines = message.text.lines();
        if let Some(first) = lines.next() {
            writeln!(self.writer, "{}: {}", label, first)?;
        }
        let indent = " ".repeat(label.chars().count() + 2);
        for line in lines {
            writeln!(self.writer, "{}{}", indent, line)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn notice(&mut self, text: &str) -> Result<(), Error> {
        self.leave_prompt()?;
        writeln!(self.writer, "-- {}", text)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const WAIT_MS: u64 = 5_000;

    #[test]
    fn test_read_line_strips_newline_and_detects_eof() {
        let mut io = StdioChatIo::new(Cursor::new("hello\r\n"), Vec::new(), "bot");
        assert_eq!(
            io.read_line(WAIT_MS).unwrap(),
            ChatInput::Line("hello".to_string())
        );
        assert_eq!(io.read_line(WAIT_MS).unwrap(), ChatInput::Closed);
        assert_eq!(String::from_utf8(io.into_writer()).unwrap(), "> > ");
    }

    #[test]
    fn test_idle_read_keeps_single_prompt() {
        // 書き手を残したままの空チャネルは常に待ち時間切れになる
        let (tx, rx) = mpsc::channel();
        let mut io = StdioChatIo {
            lines: rx,
            writer: Vec::new(),
            assistant_label: "bot".to_string(),
            prompted: false,
        };
        assert_eq!(io.read_line(1).unwrap(), ChatInput::Idle);
        assert_eq!(io.read_line(1).unwrap(), ChatInput::Idle);
        io.show(&Message::assistant("late reply")).unwrap();
        tx.send(Ok("next".to_string())).unwrap();
        assert_eq!(io.read_line(1).unwrap(), ChatInput::Line("next".to_string()));
        let out = String::from_utf8(io.into_writer()).unwrap();
        assert_eq!(out, "> \nbot: late reply\n> ");
    }

    #[test]
    fn test_show_indents_continuation_lines() {
        let mut io = StdioChatIo::new(Cursor::new(""), Vec::new(), "bot");
        io.show(&Message::assistant("line one\nline two")).unwrap();
        io.show(&Message::user("hi")).unwrap();
        io.notice("chat closed").unwrap();
        let out = String::from_utf8(io.into_writer()).unwrap();
        assert_eq!(out, "bot: line one\n     line two\nyou: hi\n-- chat closed\n");
    }
}
