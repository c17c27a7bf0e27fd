use leibniz_pi_core::{JobParameters, ParameterError};

// ============================================================
// Validation
// ============================================================

#[test]
fn test_validation_rejects_zero_workers() {
    assert_eq!(
        JobParameters::new(0, 10, 10),
        Err(ParameterError::ZeroWorkers)
    );
}

#[test]
fn test_validation_rejects_zero_messages() {
    assert_eq!(
        JobParameters::new(4, 0, 10),
        Err(ParameterError::ZeroMessages)
    );
}

#[test]
fn test_validation_rejects_zero_elements_per_message() {
    assert_eq!(
        JobParameters::new(4, 10, 0),
        Err(ParameterError::ZeroElementsPerMessage)
    );
}

#[test]
fn test_validation_accepts_positive_parameters() {
    let parameters = JobParameters::new(4, 10000, 10000).unwrap();
    assert_eq!(parameters.total_elements(), 100_000_000);
}

#[test]
fn test_validate_rechecks_deserialized_parameters() {
    let parameters: JobParameters =
        serde_json::from_str(r#"{"worker_count":0,"message_count":5,"elements_per_message":5}"#)
            .unwrap();
    assert_eq!(parameters.validate(), Err(ParameterError::ZeroWorkers));
}

// ============================================================
// Partitioning
// ============================================================

#[test]
fn test_work_unit_count_matches_message_count() {
    let parameters = JobParameters::new(2, 17, 3).unwrap();
    assert_eq!(parameters.work_units().count(), 17);
}

#[test]
fn test_partition_covers_range_without_gaps_or_overlaps() {
    for (message_count, elements) in [(1, 1), (4, 1), (10, 7), (33, 5)] {
        let parameters = JobParameters::new(1, message_count, elements).unwrap();

        let mut next_expected = 0u64;
        for (position, unit) in parameters.work_units().enumerate() {
            assert_eq!(unit.index, position);
            let range = unit.range();
            assert_eq!(
                range.start, next_expected,
                "gap or overlap before unit {}",
                position
            );
            assert_eq!(range.end - range.start, elements as u64);
            next_expected = range.end;
        }
        assert_eq!(next_expected, parameters.total_elements());
    }
}
