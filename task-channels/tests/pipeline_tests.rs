use leibniz_pi_core::JobParameters;
use leibniz_pi_task_channels::calculate;

const EPSILON: f64 = 1e-9;

/// Straight-line sum over [0, terms)
fn reference_sum(terms: u64) -> f64 {
    let mut sum = 0.0;
    for k in 0..terms {
        let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
        sum += 4.0 * sign / (2 * k + 1) as f64;
    }
    sum
}

#[tokio::test]
async fn test_single_unit_single_worker_yields_four() {
    let parameters = JobParameters::new(1, 1, 1).unwrap();
    let estimate = calculate(parameters).await.unwrap();
    assert_eq!(estimate.value, 4.0);
}

#[tokio::test]
async fn test_four_single_term_messages_match_the_series_prefix() {
    let parameters = JobParameters::new(4, 4, 1).unwrap();
    let estimate = calculate(parameters).await.unwrap();

    let expected = 4.0 * (1.0 - 1.0 / 3.0 + 1.0 / 5.0 - 1.0 / 7.0);
    assert!((estimate.value - expected).abs() < EPSILON);
    assert!((estimate.value - 2.8952).abs() < 1e-3);
}

#[tokio::test]
async fn test_estimate_matches_reference_sum() {
    let parameters = JobParameters::new(4, 100, 25).unwrap();
    let estimate = calculate(parameters).await.unwrap();
    assert!((estimate.value - reference_sum(2500)).abs() < EPSILON);
}

#[tokio::test]
async fn test_more_workers_than_messages() {
    let parameters = JobParameters::new(8, 3, 10).unwrap();
    let estimate = calculate(parameters).await.unwrap();
    assert!((estimate.value - reference_sum(30)).abs() < EPSILON);
}

#[tokio::test]
async fn test_moderate_run_approaches_pi() {
    let parameters = JobParameters::new(4, 100, 10000).unwrap();
    let estimate = calculate(parameters).await.unwrap();
    assert!((estimate.value - std::f64::consts::PI).abs() < 1e-5);
}

#[tokio::test]
async fn test_back_to_back_runs_are_independent() {
    let parameters = JobParameters::new(2, 10, 10).unwrap();

    let first = calculate(parameters).await.unwrap();
    let second = calculate(parameters).await.unwrap();

    assert!((first.value - reference_sum(100)).abs() < EPSILON);
    assert!((second.value - reference_sum(100)).abs() < EPSILON);
}
