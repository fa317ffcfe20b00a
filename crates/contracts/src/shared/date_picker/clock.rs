use chrono::{DateTime, Utc};

/// Source of "now" for the binder.
///
/// Both the pre-selected date (when the field is empty) and the picker's
/// upper bound are read from the same call, so a single binding never sees
/// two different instants.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Runtime clock. On wasm32 chrono reads the browser's `Date.now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn test_fixed_clock_through_trait_object() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        let clock: Box<dyn Clock> = Box::new(FixedClock(instant));

        assert_eq!(clock.now(), instant);
    }
}
