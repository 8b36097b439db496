//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::*;
use crate::train::TrainConfig;
use proptest::prelude::*;

fn percentile_config(percentile: f64, interval_steps: usize) -> PodarConfig {
    PodarConfig {
        study: StudyConfig {
            pruner: PrunerConfig::Percentile {
                percentile,
                n_startup_trials: 5,
                n_warmup_steps: 0,
                interval_steps,
                n_min_trials: 1,
            },
            ..Default::default()
        },
        ..Default::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_percentile_in_range_passes(p in 0.0f64..=100.0, interval in 1usize..50) {
        prop_assert!(validate_config(&percentile_config(p, interval)).is_ok());
    }

    #[test]
    fn prop_percentile_above_range_fails(p in 100.001f64..1e6) {
        let result = validate_config(&percentile_config(p, 1));
        prop_assert!(matches!(result, Err(ValidationError::InvalidPercentile(_))));
    }

    #[test]
    fn prop_epoch_bounds(min in 0usize..20, max in 0usize..20) {
        let config = PodarConfig {
            trainer: TrainConfig::default().with_max_epochs(max).with_min_epochs(min),
            ..Default::default()
        };
        prop_assert_eq!(validate_config(&config).is_ok(), min <= max);
    }
}
