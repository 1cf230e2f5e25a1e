//! Deferred one-shot removals, driven by explicit timestamps rather than
//! wall-clock timers so tests can advance time deterministically.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::particle::ParticleId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum ParticleKind {
    Star,
    Glow,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Removal {
    due_ms: u64,
    kind: ParticleKind,
    id: ParticleId,
}

/// Min-heap of pending removals. Entries are independent, fire once, and
/// cannot be cancelled; the pending count is unbounded but self-limiting
/// (event rate times the longest lifetime).
#[derive(Debug, Default)]
pub(crate) struct RemovalSchedule {
    heap: BinaryHeap<Reverse<Removal>>,
}

impl RemovalSchedule {
    pub(crate) fn schedule(&mut self, due_ms: u64, kind: ParticleKind, id: ParticleId) {
        self.heap.push(Reverse(Removal { due_ms, kind, id }));
    }

    /// Pop the next removal with `due <= now_ms`, if any. A particle created
    /// at `t` with lifetime `L` is therefore gone from queries at `t + L`.
    pub(crate) fn pop_due(&mut self, now_ms: u64) -> Option<(ParticleKind, ParticleId)> {
        if self.heap.peek().is_some_and(|next| next.0.due_ms <= now_ms) {
            self.heap
                .pop()
                .map(|Reverse(removal)| (removal.kind, removal.id))
        } else {
            None
        }
    }

    pub(crate) fn pending(&self) -> usize {
        self.heap.len()
    }
}
