//! One-shot per-cell timers on a virtual clock.
//!
//! Every timer is stamped with the grid epoch it was armed in. A timer that
//! comes due after the grid was rebuilt (or torn down) is dropped without
//! being delivered, so stale callbacks can never touch a cell of a newer grid.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fnv::FnvHashMap;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// Begin (or defer) a cell's shrink.
    ShrinkStart,
    /// Ease a held rotation back to rest.
    ReturnHome,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimerFire {
    pub id: TimerId,
    pub cell: usize,
    pub kind: TimerKind,
    pub due_ms: f64,
}

pub type DueBatch = SmallVec<[TimerFire; 16]>;

// Tombstones tolerated in the heap beyond the live count before compacting.
const TOMBSTONE_SLACK: usize = 64;

#[derive(Clone, Copy, Debug)]
struct Entry {
    cell: usize,
    kind: TimerKind,
    due_ms: f64,
    epoch: u64,
}

// Min-heap key: earliest due first, then arming order.
#[derive(Clone, Copy, Debug)]
struct Due {
    at: f64,
    id: TimerId,
}

impl PartialEq for Due {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Due {}

impl PartialOrd for Due {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Due {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .at
            .total_cmp(&self.at)
            .then_with(|| other.id.cmp(&self.id))
    }
}

#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    queue: BinaryHeap<Due>,
    live: FnvHashMap<TimerId, Entry>,
    stale_dropped: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, cell: usize, kind: TimerKind, due_ms: f64, epoch: u64) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due_ms = if due_ms.is_finite() { due_ms } else { 0.0 };
        self.live.insert(
            id,
            Entry {
                cell,
                kind,
                due_ms,
                epoch,
            },
        );
        self.queue.push(Due { at: due_ms, id });
        id
    }

    /// Cancel a timer. Cancelled entries stay in the heap as tombstones and
    /// are skipped when they surface; once they outnumber live timers the
    /// heap is compacted, so it stays bounded by the live count.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        if self.live.remove(&id).is_none() {
            return false;
        }
        if self.queue.len() > 2 * self.live.len() + TOMBSTONE_SLACK {
            let live = &self.live;
            self.queue.retain(|due| live.contains_key(&due.id));
        }
        true
    }

    /// Next timer due at or before `now_ms` that belongs to `epoch`.
    pub fn pop_due(&mut self, now_ms: f64, epoch: u64) -> Option<TimerFire> {
        while let Some(head) = self.queue.peek().copied() {
            if head.at > now_ms {
                return None;
            }
            self.queue.pop();
            let Some(entry) = self.live.remove(&head.id) else {
                continue;
            };
            if entry.epoch != epoch {
                self.stale_dropped += 1;
                log::debug!(
                    "[grid] dropped stale timer for cell {} (epoch {} != {})",
                    entry.cell,
                    entry.epoch,
                    epoch
                );
                continue;
            }
            return Some(TimerFire {
                id: head.id,
                cell: entry.cell,
                kind: entry.kind,
                due_ms: entry.due_ms,
            });
        }
        None
    }

    /// All timers due at `now_ms`, in due order.
    pub fn drain_due(&mut self, now_ms: f64, epoch: u64) -> DueBatch {
        let mut batch = DueBatch::new();
        while let Some(fire) = self.pop_due(now_ms, epoch) {
            batch.push(fire);
        }
        batch
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        self.live.clear();
    }

    #[inline]
    pub fn live(&self) -> usize {
        self.live.len()
    }

    /// Live timers armed in `epoch`.
    pub fn live_in(&self, epoch: u64) -> usize {
        self.live.values().filter(|e| e.epoch == epoch).count()
    }

    /// Live timers armed for `cell` in `epoch`.
    pub fn live_for(&self, cell: usize, epoch: u64) -> usize {
        self.live
            .values()
            .filter(|e| e.cell == cell && e.epoch == epoch)
            .count()
    }

    /// Heap entries, tombstones included.
    #[inline]
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Timers discarded because their epoch had passed.
    #[inline]
    pub fn stale_dropped(&self) -> u64 {
        self.stale_dropped
    }
}
