//! Mount-scoped async work with late-result suppression.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages spawn fetches with `spawn_local` and register `cancel` in
//! `on_cleanup`. A result that arrives after the page unmounted must not touch
//! signals or the error channel of the destroyed screen, so every callback goes
//! through [`MountTask::settle`].

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// How a task's result was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    /// Success callback ran.
    Loaded,
    /// Error callback ran.
    Failed,
    /// The mount ended first; neither callback ran.
    Discarded,
    /// The task was already started for this mount; nothing was polled.
    Skipped,
}

/// One unit of async work tied to a single component mount.
///
/// Clones share state, so the copy moved into `on_cleanup` cancels the copy
/// moved into the spawned future.
#[derive(Clone, Debug)]
pub struct MountTask {
    alive: Arc<AtomicBool>,
    started: Arc<AtomicBool>,
}

impl MountTask {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)), started: Arc::new(AtomicBool::new(false)) }
    }

    /// Claim the task's single run. Only the first call returns `true`.
    pub fn begin(&self) -> bool {
        !self.started.swap(true, Ordering::AcqRel)
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::Acquire)
    }

    /// Mark the mount as gone. Idempotent.
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        !self.alive.load(Ordering::Acquire)
    }

    /// Route a result to the matching callback, unless the mount has ended.
    pub fn settle<T, E>(&self, result: Result<T, E>, on_ok: impl FnOnce(T), on_err: impl FnOnce(E)) -> Settled {
        if self.is_cancelled() {
            return Settled::Discarded;
        }
        match result {
            Ok(value) => {
                on_ok(value);
                Settled::Loaded
            }
            Err(err) => {
                on_err(err);
                Settled::Failed
            }
        }
    }

    /// Run `work` once for this mount and settle its result.
    ///
    /// A second call, from a re-run effect or otherwise, returns
    /// [`Settled::Skipped`] without polling `work`.
    pub async fn run<T, E, F>(&self, work: F, on_ok: impl FnOnce(T), on_err: impl FnOnce(E)) -> Settled
    where
        F: Future<Output = Result<T, E>>,
    {
        if !self.begin() {
            return Settled::Skipped;
        }
        if self.is_cancelled() {
            return Settled::Discarded;
        }
        let result = work.await;
        self.settle(result, on_ok, on_err)
    }
}

impl Default for MountTask {
    fn default() -> Self {
        Self::new()
    }
}
