use crate::model::Reservation;

/// The one capability the allocation engine holds over the reservation log:
/// append a committed record. Records arrive in the order reservations are
/// made and are never retracted — reading the log back is an analytics
/// concern, not a core one.
pub trait ReservationSink {
    fn append(&mut self, r: Reservation);
}

/// In-memory reservation log.
///
/// Once appended a record stays, even when the order that produced it later
/// failed for insufficient capacity — downstream analytics depends on the log
/// holding only committed, never-retracted facts.
#[derive(Debug, Default)]
pub struct ReservationLog {
    records: Vec<Reservation>,
}

impl ReservationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Reservation] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ReservationSink for ReservationLog {
    fn append(&mut self, r: Reservation) {
        self.records.push(r);
    }
}

/// A bare Vec works as a sink for pure-function tests.
impl ReservationSink for Vec<Reservation> {
    fn append(&mut self, r: Reservation) {
        self.push(r);
    }
}
