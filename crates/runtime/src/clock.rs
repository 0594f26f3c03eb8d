//! Wall-clock helpers for ranking timestamps.
//!
//! Battles never read the clock; only ranking snapshots are stamped.

use chrono::{DateTime, Utc};

use battle_core::Timestamp;

pub fn now() -> Timestamp {
    from_datetime(Utc::now())
}

pub fn from_datetime(at: DateTime<Utc>) -> Timestamp {
    Timestamp::from_millis(at.timestamp_millis())
}

/// `None` when the timestamp is outside chrono's representable range.
pub fn to_datetime(at: Timestamp) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(at.as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_round_trips_millis() {
        let at = Timestamp::from_millis(1_700_000_000_123);
        let datetime = to_datetime(at).unwrap();
        assert_eq!(datetime.timestamp_subsec_millis(), 123);
        assert_eq!(from_datetime(datetime), at);
    }

    #[test]
    fn now_is_after_epoch() {
        assert!(now().as_millis() > 0);
    }
}
