//! Thread-safe simulator handle
//!
//! For hosts whose clock and input callbacks run on different threads. Each
//! operation holds the lock for exactly its own duration, so `step` and
//! `launch` never interleave.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rand::Rng;
use rand_pcg::Pcg32;

use super::simulator::Simulator;
use super::state::{Snapshot, Viewport};
use super::step::StepReport;
use crate::error::ConfigResult;

/// Cloneable, lock-guarded handle to one [`Simulator`]
#[derive(Debug)]
pub struct SharedSimulator<R = Pcg32> {
    inner: Arc<Mutex<Simulator<R>>>,
}

impl<R> Clone for SharedSimulator<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Rng> SharedSimulator<R> {
    pub fn new(sim: Simulator<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sim)),
        }
    }

    /// Every operation leaves the state valid, so a poisoned lock is still usable
    fn lock(&self) -> MutexGuard<'_, Simulator<R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn step(&self) -> StepReport {
        self.lock().step()
    }

    pub fn launch(&self) {
        self.lock().launch();
    }

    pub fn set_viewport(&self, viewport: Viewport) -> ConfigResult<()> {
        self.lock().set_viewport(viewport)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    /// Run `f` with exclusive access to the simulator
    pub fn with<T>(&self, f: impl FnOnce(&mut Simulator<R>) -> T) -> T {
        f(&mut self.lock())
    }
}
