//! Cooperative texture loading on the tick thread

use crate::liveness::Liveness;
use futures::executor::LocalPool;
use futures::future::{try_join_all, LocalBoxFuture};
use futures::task::LocalSpawnExt;
use stagecraft_core::{Result, StageError};
use stagecraft_stage::{TextureHandle, TextureLoader};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use tracing::debug;

enum Slot<T> {
    Waiting,
    Ready(Result<T>),
    Taken,
}

/// The eventual result of a load, polled by its scene on later ticks.
pub struct Pending<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T> Pending<T> {
    fn waiting() -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot::Waiting)),
        }
    }

    fn resolve(&self, result: Result<T>) {
        *self.slot.borrow_mut() = Slot::Ready(result);
    }

    /// True once the load finished and the result has not been taken yet
    pub fn is_ready(&self) -> bool {
        matches!(*self.slot.borrow(), Slot::Ready(_))
    }

    pub fn is_waiting(&self) -> bool {
        matches!(*self.slot.borrow(), Slot::Waiting)
    }

    /// Take the result. Returns `None` while waiting and after the first take.
    pub fn take(&self) -> Option<Result<T>> {
        let mut slot = self.slot.borrow_mut();
        match std::mem::replace(&mut *slot, Slot::Taken) {
            Slot::Ready(result) => Some(result),
            other => {
                *slot = other;
                None
            }
        }
    }
}

impl<T> Clone for Pending<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T> fmt::Debug for Pending<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match *self.slot.borrow() {
            Slot::Waiting => "waiting",
            Slot::Ready(_) => "ready",
            Slot::Taken => "taken",
        };
        f.debug_struct("Pending").field("state", &state).finish()
    }
}

/// Runs texture loads as local tasks, advanced only by [`TextureLoads::pump`].
///
/// Tasks never run concurrently with a tick or a destroy: the host pumps the
/// pool at the start of each tick, on the same thread.
pub struct TextureLoads {
    pool: LocalPool,
    loader: Rc<dyn TextureLoader>,
    in_flight: Rc<Cell<usize>>,
    stale_drops: Rc<Cell<usize>>,
}

impl TextureLoads {
    pub fn new(loader: Rc<dyn TextureLoader>) -> Self {
        Self {
            pool: LocalPool::new(),
            loader,
            in_flight: Rc::new(Cell::new(0)),
            stale_drops: Rc::new(Cell::new(0)),
        }
    }

    /// Start loading one texture on behalf of the scene owning `liveness`
    pub fn request(&self, path: &str, liveness: &Liveness) -> Result<Pending<TextureHandle>> {
        self.spawn(path.to_string(), self.loader.load(path), liveness)
    }

    /// Start loading several textures; resolves once all succeed or any fails
    pub fn request_all(
        &self,
        paths: &[String],
        liveness: &Liveness,
    ) -> Result<Pending<Vec<TextureHandle>>> {
        let loads: Vec<_> = paths.iter().map(|p| self.loader.load(p)).collect();
        let label = paths.join(", ");
        self.spawn(label, Box::pin(try_join_all(loads)), liveness)
    }

    fn spawn<T: 'static>(
        &self,
        label: String,
        load: LocalBoxFuture<'static, Result<T>>,
        liveness: &Liveness,
    ) -> Result<Pending<T>> {
        let pending = Pending::waiting();
        let slot = pending.clone();
        let alive = liveness.clone();
        let in_flight = Rc::clone(&self.in_flight);
        let stale_drops = Rc::clone(&self.stale_drops);

        self.pool
            .spawner()
            .spawn_local(async move {
                let result = load.await;
                in_flight.set(in_flight.get() - 1);
                if !alive.is_alive() {
                    stale_drops.set(stale_drops.get() + 1);
                    debug!(target: "stagecraft::loads", %label, "scene destroyed before load finished; dropping result");
                    return;
                }
                slot.resolve(result);
            })
            .map_err(|err| StageError::SchedulerError(err.to_string()))?;

        self.in_flight.set(self.in_flight.get() + 1);
        Ok(pending)
    }

    /// Drive every load task as far as it can go without blocking
    pub fn pump(&mut self) {
        self.pool.run_until_stalled();
    }

    /// Loads spawned but not finished yet
    pub fn in_flight(&self) -> usize {
        self.in_flight.get()
    }

    /// Loads that finished after their scene was destroyed
    pub fn stale_drops(&self) -> usize {
        self.stale_drops.get()
    }
}
