//! Time keeping module for PineTime

use chrono::NaiveDateTime;
use embassy_time::{Duration, Instant};
use watchface::clock;

pub struct TimeReference {
    /// Clock time, seconds since the Unix epoch (UTC)
    epoch: i64,
    /// Related system time
    instant: Instant,
}

impl TimeReference {
    /// Create new time reference for the current instant
    pub fn from_epoch(epoch: i64) -> Self {
        Self {
            epoch,
            instant: Instant::now(),
        }
    }
}

pub struct TimeManager {
    reference: TimeReference,
    /// Offset of local time from UTC in seconds
    utc_offset: i64,
}

impl TimeManager {
    /// Initialize time measurement on boot
    pub fn init(reference: TimeReference, utc_offset: i32) -> Self {
        Self {
            reference,
            utc_offset: utc_offset as i64,
        }
    }

    /// Seconds since the Unix epoch (UTC)
    pub fn unix_time(&self) -> i64 {
        self.reference.epoch + self.reference.instant.elapsed().as_secs() as i64
    }

    /// Current local wall-clock time
    pub fn local_time(&self) -> NaiveDateTime {
        clock::from_timestamp(self.local_secs())
    }

    /// Time left until the local clock reaches the next full minute
    pub fn until_next_minute(&self) -> Duration {
        let past = self.local_secs().rem_euclid(60) as u64;
        Duration::from_secs(60 - past)
    }

    fn local_secs(&self) -> i64 {
        self.unix_time() + self.utc_offset
    }
}
