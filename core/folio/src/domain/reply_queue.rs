//! 遅延返信のキュー
//!
//! 返信は「期限付きの保留タスク」として積み、呼び出し側が時刻を渡して取り出す。
//! 期限は直前の保留より早くならないよう切り上げるので、取り出し順は常に積んだ順（FIFO）。
//! 各保留はハンドルで個別に取り消せる。配送済みの返信は取り消せない。

use crate::domain::keyword_rule::Reply;
use std::collections::VecDeque;

/// 保留中の返信を指すハンドル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReplyHandle(u64);

/// 保留中の返信
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub handle: ReplyHandle,
    pub due_ms: u64,
    pub reply: Reply,
}

#[derive(Debug, Clone, Default)]
pub struct ReplyQueue {
    pending: VecDeque<PendingReply>,
    next_id: u64,
}

impl ReplyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// now + delay_ms を期限として積む
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, reply: Reply) -> ReplyHandle {
        let mut due_ms = now_ms.saturating_add(delay_ms);
        if let Some(last) = self.pending.back() {
            due_ms = due_ms.max(last.due_ms);
        }
        let handle = ReplyHandle(self.next_id);
        self.next_id += 1;
        self.pending.push_back(PendingReply {
            handle,
            due_ms,
            reply,
        });
        handle
    }

    /// 期限が now 以下のものを積んだ順に取り出す
    pub fn take_due(&mut self, now_ms: u64) -> Vec<PendingReply> {
        let mut due = Vec::new();
        while self.pending.front().is_some_and(|p| p.due_ms <= now_ms) {
            if let Some(p) = self.pending.pop_front() {
                due.push(p);
            }
        }
        due
    }

    /// 1 件取り消す。保留中に無ければ false。
    pub fn cancel(&mut self, handle: ReplyHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        self.pending.len() != before
    }

    /// 全件取り消し、取り消した件数を返す
    pub fn cancel_all(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }

    /// 次の期限（保留が無ければ None）
    pub fn next_due(&self) -> Option<u64> {
        self.pending.front().map(|p| p.due_ms)
    }

    pub fn is_pending(&self, handle: ReplyHandle) -> bool {
        self.pending.iter().any(|p| p.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
