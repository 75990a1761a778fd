//! Per-console counters. Plain atomics so updating them never allocates.

use crate::render::Outcome;
use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of a console's counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Messages handed to the sink, stack and heap path together.
    pub messages: u64,
    /// Messages too long for the stack buffer.
    pub heap_renders: u64,
    /// Calls dropped by a formatting fault.
    pub format_faults: u64,
    /// Calls that wrote the out-of-memory notice instead of their message.
    pub oom_fallbacks: u64,
    /// Sink writes that returned an error.
    pub write_failures: u64,
}

#[derive(Debug, Default)]
pub(super) struct Counters {
    messages: AtomicU64,
    heap_renders: AtomicU64,
    format_faults: AtomicU64,
    oom_fallbacks: AtomicU64,
    write_failures: AtomicU64,
}

impl Counters {
    pub(super) fn record(&self, outcome: Outcome) {
        let counter = match outcome {
            Outcome::Stack { .. } => &self.messages,
            Outcome::Heap { .. } => {
                self.heap_renders.fetch_add(1, Ordering::Relaxed);
                &self.messages
            }
            Outcome::OutOfMemory => &self.oom_fallbacks,
            Outcome::Fault(_) => &self.format_faults,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn write_failed(&self) {
        self.write_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn snapshot(&self) -> Stats {
        Stats {
            messages: self.messages.load(Ordering::Relaxed),
            heap_renders: self.heap_renders.load(Ordering::Relaxed),
            format_faults: self.format_faults.load(Ordering::Relaxed),
            oom_fallbacks: self.oom_fallbacks.load(Ordering::Relaxed),
            write_failures: self.write_failures.load(Ordering::Relaxed),
        }
    }
}
