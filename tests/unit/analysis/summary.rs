//! Tests for run statistics

#[cfg(test)]
mod tests {
    use glam::{IVec2, Vec3};
    use imagescatter::PlacementRecord;
    use imagescatter::analysis::RunSummary;
    use imagescatter::math::Color;
    use imagescatter::spatial::{Footprint, OccupancyGrid};

    fn record(index: usize, position: Vec3, scale: f32, active: bool) -> PlacementRecord {
        PlacementRecord {
            index,
            position,
            scale,
            color: Color::default(),
            active,
        }
    }

    fn sample_records() -> Vec<PlacementRecord> {
        vec![
            record(0, Vec3::ZERO, 1.0, true),
            record(1, Vec3::new(9.0, 0.0, 9.0), 5.0, false),
            record(2, Vec3::new(3.0, 0.0, 4.0), 3.0, true),
        ]
    }

    // Tests counts and scale statistics skip rejected records
    // Verified by including inactive scales in the mean
    #[test]
    fn test_from_records() {
        let mut occupancy = OccupancyGrid::new(2, 2);
        occupancy.reserve(&Footprint::new(IVec2::ZERO, 2.0));

        let summary = RunSummary::from_records(&sample_records(), &occupancy);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.accepted, 2);
        assert_eq!(summary.rejected, 1);
        assert!((summary.mean_scale - 2.0).abs() < f32::EPSILON);
        assert!((summary.max_scale - 3.0).abs() < f32::EPSILON);
        assert!((summary.occupied_fraction - 0.25).abs() < f32::EPSILON);
        assert!((summary.path_length - 5.0).abs() < 1e-6);
        assert!((summary.acceptance_rate() - 2.0 / 3.0).abs() < 1e-6);
    }

    // Tests an empty run has zeroed statistics
    // Verified by dividing by the zero record count
    #[test]
    fn test_empty_run() {
        let summary = RunSummary::from_records(&[], &OccupancyGrid::new(0, 0));
        assert_eq!(summary, RunSummary::default());
        assert!(summary.acceptance_rate().abs() < f32::EPSILON);
    }

    // Tests the log line mentions the counts
    // Verified by swapping accepted and total
    #[test]
    fn test_display() {
        let summary = RunSummary::from_records(&sample_records(), &OccupancyGrid::new(2, 2));
        let text = summary.to_string();
        assert!(text.starts_with("2/3 markers placed (1 rejected)"));
    }
}
