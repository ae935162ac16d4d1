use crate::log::ReservationSink;
use crate::model::{Order, Reservation, TimeslotPool};

use super::EngineError;

// ── Allocation Algorithm ─────────────────────────────────────────

/// First-fit scan over the pool in its given order.
///
/// Each eligible slot is drained greedily: a slot that can cover what is
/// still missing yields one reservation for exactly that amount and the scan
/// stops there; a smaller slot is emptied entirely and the scan moves on.
/// Ineligible slots and eligible-but-empty slots are passed over without
/// mutation and without a log record.
///
/// A failed order does NOT roll anything back: every reservation appended on
/// the way stays committed and the drained capacity stays consumed.
pub fn allocate(
    order: &Order,
    pool: &mut TimeslotPool,
    log: &mut dyn ReservationSink,
) -> Result<(), EngineError> {
    let mut remaining = order.capacity;

    for slot in pool.slots_mut() {
        if remaining == 0 {
            break;
        }
        if !order.covers(slot.date) {
            continue;
        }
        if slot.capacity == 0 {
            // Eligible but already drained: contributes nothing, logs nothing.
            continue;
        }

        let drawn = slot.capacity.min(remaining);
        slot.capacity -= drawn;
        remaining -= drawn;
        log.append(Reservation {
            request_id: order.request_id.clone(),
            timeslot_id: slot.id.clone(),
            capacity: drawn,
        });
        tracing::info!(slot = %slot.id, drawn, remaining, "capacity reserved");
    }

    if remaining != 0 {
        return Err(EngineError::InsufficientCapacity {
            requested: order.capacity,
            unfilled: remaining,
        });
    }

    Ok(())
}
