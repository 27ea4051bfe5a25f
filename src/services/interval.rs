use chrono::{DateTime, Duration, Utc};

/// A candidate time slot for conflict checking: either a schedule that does
/// not exist yet (activity authoring) or an existing one (enrollment).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateInterval {
    pub starts_at: DateTime<Utc>,
    pub duration_minutes: i64,
}

impl CandidateInterval {
    pub fn new(starts_at: DateTime<Utc>, duration_minutes: i64) -> Self {
        Self { starts_at, duration_minutes }
    }
}

/// Half-open overlap test over [start, start + duration). Back-to-back
/// sessions share an instant but do not conflict.
pub fn overlaps(
    a_start: DateTime<Utc>,
    a_duration_minutes: i64,
    b_start: DateTime<Utc>,
    b_duration_minutes: i64,
) -> bool {
    let a_end = a_start + Duration::minutes(a_duration_minutes);
    let b_end = b_start + Duration::minutes(b_duration_minutes);
    a_start < b_end && b_start < a_end
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, hour, minute, 0).unwrap()
    }

    #[test]
    fn overlapping_intervals_conflict() {
        assert!(overlaps(at(10, 0), 60, at(10, 30), 60));
        assert!(overlaps(at(10, 30), 60, at(10, 0), 60));
    }

    #[test]
    fn containment_conflicts() {
        assert!(overlaps(at(9, 0), 240, at(10, 0), 30));
        assert!(overlaps(at(10, 0), 30, at(9, 0), 240));
    }

    #[test]
    fn back_to_back_does_not_conflict() {
        assert!(!overlaps(at(10, 0), 60, at(11, 0), 60));
        assert!(!overlaps(at(11, 0), 60, at(10, 0), 60));
    }

    #[test]
    fn disjoint_intervals_do_not_conflict() {
        assert!(!overlaps(at(8, 0), 60, at(14, 0), 60));
    }

    #[test]
    fn identical_intervals_conflict() {
        assert!(overlaps(at(10, 0), 60, at(10, 0), 60));
    }
}
