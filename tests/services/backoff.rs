//! Unit tests for retry delay sampling

use std::time::Duration;

use marketpulse::config::{FetchConfig, RetryProfile};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn zero_jitter_profile() -> RetryProfile {
    RetryProfile {
        pre_delay: (Duration::from_secs(1), Duration::from_secs(1)),
        backoff_jitter: (Duration::ZERO, Duration::ZERO),
        rate_limit_floor: Duration::from_secs(10),
        rate_limit_jitter: (Duration::ZERO, Duration::ZERO),
    }
}

fn jittered_profile() -> RetryProfile {
    RetryProfile {
        pre_delay: (Duration::from_secs(1), Duration::from_secs(3)),
        backoff_jitter: (Duration::from_secs(1), Duration::from_secs(3)),
        rate_limit_floor: Duration::from_secs(10),
        rate_limit_jitter: (Duration::from_secs(5), Duration::from_secs(15)),
    }
}

#[test]
fn backoff_doubles_per_attempt_without_jitter() {
    let profile = zero_jitter_profile();
    let mut rng = StdRng::seed_from_u64(7);
    let base = Duration::from_secs(2);
    assert_eq!(
        profile.backoff_delay(base, 0, false, &mut rng),
        Duration::from_secs(2)
    );
    assert_eq!(
        profile.backoff_delay(base, 1, false, &mut rng),
        Duration::from_secs(4)
    );
    assert_eq!(
        profile.backoff_delay(base, 2, false, &mut rng),
        Duration::from_secs(8)
    );
}

#[test]
fn backoff_jitter_stays_within_bounds() {
    let profile = jittered_profile();
    let mut rng = StdRng::seed_from_u64(42);
    let base = Duration::from_secs(2);
    for attempt in 0..3u32 {
        let exponential = base * 2u32.pow(attempt);
        let delay = profile.backoff_delay(base, attempt, false, &mut rng);
        assert!(delay >= exponential + Duration::from_secs(1));
        assert!(delay <= exponential + Duration::from_secs(3));
    }
}

#[test]
fn rate_limited_failures_respect_the_floor() {
    let profile = jittered_profile();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let delay = profile.backoff_delay(Duration::from_secs(2), 0, true, &mut rng);
        // Floor plus its minimum jitter dominates the small exponential term.
        assert!(delay >= Duration::from_secs(15));
        assert!(delay <= Duration::from_secs(25));
    }
}

#[test]
fn large_exponential_term_wins_over_the_floor() {
    let profile = zero_jitter_profile();
    let mut rng = StdRng::seed_from_u64(3);
    let delay = profile.backoff_delay(Duration::from_secs(30), 2, true, &mut rng);
    assert_eq!(delay, Duration::from_secs(120));
}

#[test]
fn attempt_exponent_is_capped() {
    let profile = zero_jitter_profile();
    let mut rng = StdRng::seed_from_u64(3);
    let capped = profile.backoff_delay(Duration::from_millis(1), 16, false, &mut rng);
    let beyond = profile.backoff_delay(Duration::from_millis(1), 40, false, &mut rng);
    assert_eq!(capped, beyond);
}

#[test]
fn pre_delay_stays_within_bounds() {
    let profile = jittered_profile();
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let delay = profile.sample_pre_delay(&mut rng);
        assert!(delay >= Duration::from_secs(1));
        assert!(delay <= Duration::from_secs(3));
    }
}

#[test]
fn default_config_gives_each_provider_five_attempts() {
    let config = FetchConfig::default();
    assert_eq!(config.retry_count, 5);
    assert_eq!(config.base_delay, Duration::from_secs(2));
}

#[test]
fn batch_delay_stays_within_configured_bounds() {
    let config = FetchConfig::default();
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        let delay = config.sample_batch_delay(&mut rng);
        assert!(delay >= Duration::from_secs(3));
        assert!(delay <= Duration::from_secs(6));
    }
}
