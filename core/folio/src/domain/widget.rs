//! 応答ウィジェットのビュー状態
//!
//! 開閉状態・トランスクリプト・入力バッファ・保留中の返信を 1 つの値にまとめる。
//! 時計は持たず、時刻は呼び出し側が `now_ms` で渡す（描画ホストなしでテストできる）。

use crate::domain::keyword_rule::{Reply, Responder};
use crate::domain::reply_queue::{ReplyHandle, ReplyQueue};
use crate::domain::settings::{ClosePolicy, Settings};
use crate::domain::transcript::{Message, Transcript};
use std::sync::Arc;

/// 開閉状態（常にどちらか一方）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Open,
    Closed,
}

pub struct ChatWidget {
    responder: Arc<Responder>,
    settings: Settings,
    visibility: Visibility,
    transcript: Transcript,
    input: String,
    queue: ReplyQueue,
}

impl ChatWidget {
    /// 閉じた状態・挨拶 1 件で始める
    pub fn new(responder: Arc<Responder>, settings: Settings) -> Self {
        let transcript = Transcript::seeded(responder.profile().greeting());
        Self {
            responder,
            settings,
            visibility: Visibility::Closed,
            transcript,
            input: String::new(),
            queue: ReplyQueue::new(),
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn open(&mut self) {
        self.visibility = Visibility::Open;
    }

    /// 閉じる。Suppress なら保留中の返信を取り消し、その件数を返す。
    pub fn close(&mut self) -> usize {
        self.visibility = Visibility::Closed;
        match self.settings.close_policy {
            ClosePolicy::Deliver => 0,
            ClosePolicy::Suppress => self.queue.cancel_all(),
        }
    }

    /// 開閉を切り替え、切り替え後に開いていれば true
    pub fn toggle(&mut self) -> bool {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
        self.is_open()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn push_input(&mut self, text: &str) {
        self.input.push_str(text);
    }

    /// 発言を送信する
    ///
    /// 空白のみなら何もしない（トランスクリプト・入力バッファ・保留は不変）。
    /// それ以外はユーザー発言をそのまま即時追記し、入力バッファを空にして、
    /// 遅延後に届く返信を積む。
    pub fn submit(&mut self, text: &str, now_ms: u64) -> Option<ReplyHandle> {
        if text.trim().is_empty() {
            return None;
        }
        self.transcript.push(Message::user(text));
        self.input.clear();
        let reply = self.responder.respond(text);
        Some(
            self.queue
                .schedule(now_ms, self.settings.reply_delay_ms, reply),
        )
    }

    /// 入力バッファの内容を送信する（フォーム送信に相当）
    pub fn submit_input(&mut self, now_ms: u64) -> Option<ReplyHandle> {
        let text = self.input.clone();
        self.submit(&text, now_ms)
    }

    /// 期限の来た返信をトランスクリプトへ追記し、追記した返信を返す
    pub fn poll(&mut self, now_ms: u64) -> Vec<Reply> {
        self.queue
            .take_due(now_ms)
            .into_iter()
            .map(|p| {
                self.transcript.push(Message::assistant(p.reply.text.clone()));
                p.reply
            })
            .collect()
    }

    pub fn cancel(&mut self, handle: ReplyHandle) -> bool {
        self.queue.cancel(handle)
    }

    pub fn cancel_all(&mut self) -> usize {
        self.queue.cancel_all()
    }

    pub fn next_due(&self) -> Option<u64> {
        self.queue.next_due()
    }

    pub fn pending_len(&self) -> usize {
        self.queue.len()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn responder(&self) -> &Responder {
        &self.responder
    }
}
