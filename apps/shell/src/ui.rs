//! # UI Dispatch Queue
//!
//! Cart observers are screen state and must only be touched from the UI
//! context. Background work never mutates the cart directly; it posts a
//! closure through a [`UiHandle`] and the main loop runs it.
//!
//! ```text
//! ┌──────────────────┐   post(closure)    ┌──────────────────────────┐
//! │ background task  │ ─────────────────► │ mpsc::unbounded_channel  │
//! └──────────────────┘                    └────────────┬─────────────┘
//!                                                      │ run_pending()
//!                                                      ▼
//!                                         ┌──────────────────────────┐
//!                                         │ UI context               │
//!                                         │ cart.add_product(..)     │
//!                                         │  └► badge, cart screen   │
//!                                         └──────────────────────────┘
//! ```

use tokio::sync::mpsc::{self, error::TryRecvError};
use tracing::{debug, warn};

/// A unit of work for the UI context.
pub type UiTask = Box<dyn FnOnce() + Send + 'static>;

/// Posting side of the queue. Cheap to clone, safe to move to other threads.
#[derive(Debug, Clone)]
pub struct UiHandle {
    tx: mpsc::UnboundedSender<UiTask>,
}

impl UiHandle {
    /// Queues `task` for the UI context.
    ///
    /// Returns `false` if the queue was dropped; the task is discarded.
    pub fn post<F>(&self, task: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        match self.tx.send(Box::new(task)) {
            Ok(()) => true,
            Err(_) => {
                warn!("UI queue closed, task dropped");
                false
            }
        }
    }
}

/// Draining side of the queue, owned by the main loop.
#[derive(Debug)]
pub struct UiQueue {
    rx: mpsc::UnboundedReceiver<UiTask>,
}

impl UiQueue {
    /// Creates a queue and its first handle.
    pub fn channel() -> (UiHandle, UiQueue) {
        let (tx, rx) = mpsc::unbounded_channel();
        (UiHandle { tx }, UiQueue { rx })
    }

    /// Runs every task already queued without waiting for more.
    /// Returns how many ran.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        loop {
            match self.rx.try_recv() {
                Ok(task) => {
                    task();
                    ran += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        if ran > 0 {
            debug!(ran, "Drained UI queue");
        }
        ran
    }

    /// Waits for the next task and runs it. Returns `false` once every handle
    /// is gone and the queue is empty.
    pub async fn next(&mut self) -> bool {
        match self.rx.recv().await {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }

    /// Runs tasks until every handle has been dropped.
    pub async fn run_until_idle(&mut self) -> usize {
        let mut ran = 0;
        while self.next().await {
            ran += 1;
        }
        debug!(ran, "UI queue closed");
        ran
    }
}
