//! Bounded FIFO shared between the coordinator and the worker pool.
//!
//! A fixed-capacity circular buffer behind a mutex with two condvars:
//! `put` blocks while the buffer is full, `take` blocks while it is empty.
//! Insertion and retrieval indices coincide both when the buffer is empty
//! and when it is full, so an explicit `full` flag disambiguates the two.
//!
//! Shutdown is in-band: the coordinator enqueues exactly one
//! `WorkItem::Shutdown` sentinel per consumer, so each consumer observes
//! termination exactly once and exits its loop. Blocking has no timeout —
//! chunk production is finite and workers live for the whole run.

use parking_lot::{Condvar, Mutex};

use crate::chunk::Chunk;

/// One slot's worth of work: a chunk to analyze, or the shutdown sentinel.
#[derive(Debug)]
pub enum WorkItem {
    Chunk(Chunk),
    /// Graceful-termination sentinel; one per consumer.
    Shutdown,
}

/// Ring buffer state. Kept behind the monitor mutex as one unit so the
/// index/flag invariants can never be observed half-updated.
struct Fifo {
    slots: Vec<Option<WorkItem>>,
    /// Insertion index
    insert: usize,
    /// Retrieval index
    retrieve: usize,
    /// True when insert == retrieve because the buffer is full, not empty
    full: bool,
}

impl Fifo {
    fn is_empty(&self) -> bool {
        self.insert == self.retrieve && !self.full
    }
}

/// Blocking bounded FIFO of work items.
pub struct ChunkQueue {
    fifo: Mutex<Fifo>,
    not_full: Condvar,
    not_empty: Condvar,
}

impl ChunkQueue {
    /// Create a queue holding at most `capacity` items.
    ///
    /// # Panics
    /// Panics if `capacity` is zero: a zero-capacity buffer can never accept
    /// a put and would deadlock the producer immediately.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "queue capacity must be non-zero");
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            fifo: Mutex::new(Fifo {
                slots,
                insert: 0,
                retrieve: 0,
                full: false,
            }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
        }
    }

    /// Enqueue one item, blocking while the buffer is full.
    pub fn put(&self, item: WorkItem) {
        let mut fifo = self.fifo.lock();
        while fifo.full {
            self.not_full.wait(&mut fifo);
        }
        let at = fifo.insert;
        fifo.slots[at] = Some(item);
        fifo.insert = (at + 1) % fifo.slots.len();
        fifo.full = fifo.insert == fifo.retrieve;
        drop(fifo);
        self.not_empty.notify_one();
    }

    /// Dequeue the oldest item, blocking while the buffer is empty.
    /// FIFO order is global; which consumer gets a given item is whichever
    /// wakes first.
    pub fn take(&self) -> WorkItem {
        let mut fifo = self.fifo.lock();
        while fifo.is_empty() {
            self.not_empty.wait(&mut fifo);
        }
        let at = fifo.retrieve;
        let item = fifo.slots[at]
            .take()
            .expect("occupied slot at retrieval index");
        fifo.retrieve = (at + 1) % fifo.slots.len();
        fifo.full = false;
        drop(fifo);
        self.not_full.notify_one();
        item
    }

    /// Items currently buffered. Snapshot only; for tests and logging.
    pub fn len(&self) -> usize {
        let fifo = self.fifo.lock();
        if fifo.full {
            fifo.slots.len()
        } else {
            (fifo.insert + fifo.slots.len() - fifo.retrieve) % fifo.slots.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fifo.lock().is_empty()
    }
}
