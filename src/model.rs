use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A caller's request for `capacity` units within the inclusive `[from, to]` window.
///
/// `request_id` is opaque and caller-supplied; it is not checked for
/// uniqueness. The boundary layer guarantees `from <= to` before an order
/// reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub request_id: String,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub capacity: u32,
}

impl Order {
    /// Inclusive-bounds eligibility: a slot dated exactly at `from` or
    /// exactly at `to` counts.
    pub fn covers(&self, date: DateTime<Utc>) -> bool {
        self.from <= date && date <= self.to
    }
}

/// A named time window with a remaining-capacity counter.
///
/// `capacity` decreases monotonically as allocations draw from it and never
/// goes negative. A slot is never removed from its pool, even at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeslot {
    pub id: String,
    pub date: DateTime<Utc>,
    pub capacity: u32,
}

/// An immutable record of capacity drawn from one timeslot for one order.
/// `capacity` is always positive; zero draws are never recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub request_id: String,
    pub timeslot_id: String,
    pub capacity: u32,
}

/// Ordered sequence of timeslots.
///
/// Iteration order is exactly the construction order — the pool is never
/// re-sorted by date, capacity, or anything else, and allocation consumes
/// slots in this order. Callers wanting date-ordered fulfillment must hand
/// in a pre-sorted slot list.
#[derive(Debug, Clone, Default)]
pub struct TimeslotPool {
    slots: Vec<Timeslot>,
}

impl TimeslotPool {
    pub fn new(slots: Vec<Timeslot>) -> Self {
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Timeslot> {
        self.slots.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Timeslot> {
        self.slots.iter()
    }

    /// Total remaining capacity across the slots eligible for `order`.
    pub fn eligible_capacity(&self, order: &Order) -> u64 {
        self.slots
            .iter()
            .filter(|s| order.covers(s.date))
            .map(|s| u64::from(s.capacity))
            .sum()
    }

    /// Mutable walk over the slots. Crate-private: the allocation engine is
    /// the only component allowed to decrement slot capacity.
    pub(crate) fn slots_mut(&mut self) -> &mut [Timeslot] {
        &mut self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn covers_is_inclusive_at_both_ends() {
        let order = Order {
            request_id: "r".into(),
            from: day(2024, 8, 13, 8),
            to: day(2024, 8, 13, 14),
            capacity: 1,
        };
        assert!(order.covers(day(2024, 8, 13, 8)));
        assert!(order.covers(day(2024, 8, 13, 14)));
        assert!(order.covers(day(2024, 8, 13, 10)));
        assert!(!order.covers(day(2024, 8, 13, 7)));
        assert!(!order.covers(day(2024, 8, 13, 15)));
    }

    #[test]
    fn pool_preserves_construction_order() {
        // Deliberately not chronological: the pool must not re-sort.
        let pool = TimeslotPool::new(vec![
            Timeslot { id: "late".into(), date: day(2024, 8, 14, 8), capacity: 1 },
            Timeslot { id: "early".into(), date: day(2024, 8, 13, 8), capacity: 1 },
        ]);
        let ids: Vec<_> = pool.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["late", "early"]);
    }

    #[test]
    fn eligible_capacity_counts_only_covered_slots() {
        let pool = TimeslotPool::new(vec![
            Timeslot { id: "in".into(), date: day(2024, 8, 13, 8), capacity: 3 },
            Timeslot { id: "out".into(), date: day(2024, 9, 1, 8), capacity: 7 },
            Timeslot { id: "empty".into(), date: day(2024, 8, 13, 10), capacity: 0 },
        ]);
        let order = Order {
            request_id: "r".into(),
            from: day(2024, 8, 13, 0),
            to: day(2024, 8, 13, 23),
            capacity: 1,
        };
        assert_eq!(pool.eligible_capacity(&order), 3);
    }

    #[test]
    fn get_by_id() {
        let pool = TimeslotPool::new(vec![Timeslot {
            id: "timeslot1".into(),
            date: day(2024, 8, 13, 8),
            capacity: 3,
        }]);
        assert_eq!(pool.get("timeslot1").map(|s| s.capacity), Some(3));
        assert!(pool.get("missing").is_none());
    }

    #[test]
    fn order_json_roundtrip_uses_rfc3339() {
        let order = Order {
            request_id: "request1".into(),
            from: day(2024, 8, 13, 8),
            to: day(2024, 8, 13, 14),
            capacity: 5,
        };
        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains("2024-08-13T08:00:00Z"));
        let decoded: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, order);
    }
}
