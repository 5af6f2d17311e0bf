use crate::proto::Sample;

/// Unix epoch milliseconds, as on the prometheus wire.
pub type Timestamp = i64;
pub type Value = f64;

#[derive(Clone, Copy, Debug)]
pub struct TimePoint {
    pub timestamp: Timestamp,
    pub value: Value,
}

impl Eq for TimePoint {}

/// Values compare bit for bit, so NaN staleness markers equal themselves.
impl PartialEq for TimePoint {
    fn eq(&self, other: &Self) -> bool {
        self.timestamp == other.timestamp && self.value.to_bits() == other.value.to_bits()
    }
}

impl TimePoint {
    pub fn new(timestamp: Timestamp, value: Value) -> TimePoint {
        TimePoint { timestamp, value }
    }
}

impl From<&TimePoint> for Sample {
    fn from(t: &TimePoint) -> Self {
        Sample {
            timestamp: t.timestamp,
            value: t.value,
            ..Default::default()
        }
    }
}

impl From<&Sample> for TimePoint {
    fn from(s: &Sample) -> Self {
        TimePoint {
            timestamp: s.timestamp,
            value: s.value,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::common::time_point::TimePoint;
    use crate::proto::Sample;

    #[test]
    fn create_timepoint() {
        let timepoint = TimePoint::new(120, 12.0);
        assert_eq!(timepoint.timestamp, 120);
        assert_eq!(timepoint.value, 12.0);
    }

    #[test]
    fn test_sample_conversion() {
        let sample = Sample::from(&TimePoint::new(-5, 0.5));
        assert_eq!(sample.timestamp, -5);
        assert_eq!(TimePoint::from(&sample), TimePoint::new(-5, 0.5));
    }

    #[test]
    fn test_stale_marker_equality() {
        let stale = f64::from_bits(0x7ff0_0000_0000_0002);
        assert_eq!(TimePoint::new(1000, stale), TimePoint::new(1000, stale));
        assert_ne!(TimePoint::new(1000, stale), TimePoint::new(1000, f64::NAN));
        assert_ne!(TimePoint::new(1000, 1.0), TimePoint::new(1001, 1.0));
    }
}
