mod allocate;
mod error;

pub use allocate::allocate;
pub use error::EngineError;

use tokio::sync::Mutex;

use crate::log::ReservationLog;
use crate::model::{Order, Reservation, Timeslot, TimeslotPool};

/// Owns the pool + log pair and serializes every allocation behind one lock.
///
/// The scan mutates shared slot capacity and appends to the log as it goes,
/// so the pair is locked as a unit for the duration of each scan. The scan
/// itself is synchronous and never suspends while the lock is held.
pub struct Engine {
    state: Mutex<EngineState>,
}

struct EngineState {
    pool: TimeslotPool,
    log: ReservationLog,
}

impl Engine {
    pub fn new(pool: TimeslotPool) -> Self {
        Self {
            state: Mutex::new(EngineState {
                pool,
                log: ReservationLog::new(),
            }),
        }
    }

    /// Run one allocation scan against the shared pool.
    pub async fn allocate(&self, order: &Order) -> Result<(), EngineError> {
        let start = std::time::Instant::now();

        let mut state = self.state.lock().await;
        let before = state.log.len();
        let EngineState { pool, log } = &mut *state;
        let result = allocate(order, pool, log);
        let appended = (state.log.len() - before) as u64;
        drop(state);

        metrics::counter!(crate::observability::RESERVATIONS_TOTAL).increment(appended);
        metrics::histogram!(crate::observability::ALLOCATION_DURATION_SECONDS)
            .record(start.elapsed().as_secs_f64());
        let status = if result.is_ok() { "ok" } else { "insufficient" };
        metrics::counter!(crate::observability::ORDERS_TOTAL, "status" => status).increment(1);

        result
    }

    /// Snapshot of the current pool state, for the boundary layer and tests.
    pub async fn pool_snapshot(&self) -> Vec<Timeslot> {
        self.state.lock().await.pool.iter().cloned().collect()
    }

    /// Copy of the reservation log. The core never reads it; this is the
    /// narrow window the analytics side looks through.
    pub async fn log_snapshot(&self) -> Vec<Reservation> {
        self.state.lock().await.log.records().to_vec()
    }
}
