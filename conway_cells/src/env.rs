// env.rs - Services the grid borrows from its host: wall clock and randomness

use chrono::{Local, Timelike};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Hour and minute of the local wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    /// `None` unless hour < 24 and minute < 60.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// (tens, ones) of the hour.
    pub fn hour_digits(&self) -> (u8, u8) {
        (self.hour / 10 % 10, self.hour % 10)
    }

    /// (tens, ones) of the minute.
    pub fn minute_digits(&self) -> (u8, u8) {
        (self.minute / 10 % 10, self.minute % 10)
    }
}

pub trait WallClock {
    fn now(&self) -> ClockTime;
}

/// Local time as reported by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl WallClock for LocalClock {
    fn now(&self) -> ClockTime {
        let now = Local::now();
        ClockTime { hour: now.hour() as u8, minute: now.minute() as u8 }
    }
}

/// A clock stuck at one time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub ClockTime);

impl WallClock for FixedClock {
    fn now(&self) -> ClockTime {
        self.0
    }
}

/// Integer randomness used for seeding placements.
pub trait RandomSource {
    /// Uniform integer in `low..high`. Returns `low` when the range is empty.
    fn range(&mut self, low: i32, high: i32) -> i32;

    fn coin(&mut self) -> bool {
        self.range(0, 2) == 0
    }
}

/// `StdRng`-backed source, seeded once per session.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Seeds from the current wall-clock time.
    pub fn from_clock() -> Self {
        let seed = Local::now().timestamp_millis() as u64;
        log::debug!("random source seeded from clock: {}", seed);
        Self::from_seed(seed)
    }
}

impl RandomSource for SeededRandom {
    fn range(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..high)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Each value is folded into the requested range, so a script of zeros always
/// picks the lowest option and every coin lands heads.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<i32>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self { values: values.into(), cursor: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn range(&mut self, low: i32, high: i32) -> i32 {
        if high <= low || self.values.is_empty() {
            return low;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        low + value.rem_euclid(high - low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_time_rejects_out_of_range() {
        assert!(ClockTime::new(24, 0).is_none());
        assert!(ClockTime::new(0, 60).is_none());
        assert_eq!(ClockTime::new(23, 59), Some(ClockTime { hour: 23, minute: 59 }));
    }

    #[test]
    fn clock_time_splits_digits() {
        let time = ClockTime::new(9, 41).unwrap();
        assert_eq!(time.hour_digits(), (0, 9));
        assert_eq!(time.minute_digits(), (4, 1));
    }

    #[test]
    fn seeded_random_stays_in_range() {
        let mut rng = SeededRandom::from_seed(7);
        for _ in 0..1000 {
            let value = rng.range(2, 8);
            assert!((2..8).contains(&value));
        }
        assert_eq!(rng.range(5, 5), 5);
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let mut a = SeededRandom::from_seed(42);
        let mut b = SeededRandom::from_seed(42);
        let xs: Vec<i32> = (0..16).map(|_| a.range(0, 100)).collect();
        let ys: Vec<i32> = (0..16).map(|_| b.range(0, 100)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn sequence_random_folds_and_cycles() {
        let mut rng = SequenceRandom::new(vec![0, 1, 7]);
        assert_eq!(rng.range(0, 3), 0);
        assert_eq!(rng.range(0, 3), 1);
        assert_eq!(rng.range(0, 3), 1);
        assert!(rng.coin());
        assert!(!rng.coin());
    }
}
