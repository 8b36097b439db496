//! Tests for HPO types

#![allow(clippy::module_inception)]
#[cfg(test)]
mod tests {
    use crate::hpo::types::{
        FrozenTrial, ParameterDomain, ParameterValue, StudyDirection, TrialState,
    };

    // -------------------------------------------------------------------------
    // ParameterValue Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_parameter_value_float() {
        let v = ParameterValue::Float(0.5);
        assert_eq!(v.as_float(), Some(0.5));
        assert_eq!(v.as_int(), Some(0));
        assert_eq!(v.as_str(), None);
    }

    #[test]
    fn test_parameter_value_int() {
        let v = ParameterValue::Int(42);
        assert_eq!(v.as_float(), Some(42.0));
        assert_eq!(v.as_int(), Some(42));
        assert_eq!(v.as_str(), None);
    }

    #[test]
    fn test_parameter_value_categorical() {
        let v = ParameterValue::Categorical("sgd".to_string());
        assert_eq!(v.as_float(), None);
        assert_eq!(v.as_str(), Some("sgd"));
    }

    // -------------------------------------------------------------------------
    // ParameterDomain Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_domain_continuous_sample() {
        let domain = ParameterDomain::Continuous { low: 0.0, high: 1.0, log_scale: false };
        let mut rng = rand::rng();
        for _ in 0..100 {
            assert!(domain.is_valid(&domain.sample(&mut rng)));
        }
    }

    #[test]
    fn test_domain_continuous_log_scale() {
        let domain = ParameterDomain::Continuous { low: 1e-5, high: 1e-1, log_scale: true };
        let mut rng = rand::rng();
        for _ in 0..100 {
            assert!(domain.is_valid(&domain.sample(&mut rng)));
        }
    }

    #[test]
    fn test_domain_discrete_covers_bounds() {
        let domain = ParameterDomain::Discrete { low: 1, high: 3 };
        let mut rng = rand::rng();
        let mut seen = [false; 3];
        for _ in 0..500 {
            let v = domain.sample(&mut rng).as_int().expect("discrete sample is int");
            seen[(v - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_domain_categorical_sample() {
        let domain = ParameterDomain::Categorical {
            choices: vec!["sgd".to_string(), "adam".to_string()],
        };
        let mut rng = rand::rng();
        for _ in 0..50 {
            assert!(domain.is_valid(&domain.sample(&mut rng)));
        }
    }

    #[test]
    fn test_domain_check_rejects_inverted_bounds() {
        let domain = ParameterDomain::Continuous { low: 1.0, high: 0.0, log_scale: false };
        assert!(domain.check("lr").is_err());
        let domain = ParameterDomain::Discrete { low: 5, high: 4 };
        assert!(domain.check("units").is_err());
    }

    #[test]
    fn test_domain_check_rejects_nonpositive_log_low() {
        let domain = ParameterDomain::Continuous { low: 0.0, high: 1.0, log_scale: true };
        assert!(domain.check("lr").is_err());
    }

    #[test]
    fn test_domain_check_rejects_empty_choices() {
        let domain = ParameterDomain::Categorical { choices: vec![] };
        assert!(domain.check("optimizer").is_err());
    }

    #[test]
    fn test_domain_is_valid_type_mismatch() {
        let domain = ParameterDomain::Discrete { low: 0, high: 10 };
        assert!(!domain.is_valid(&ParameterValue::Float(5.0)));
    }

    // -------------------------------------------------------------------------
    // FrozenTrial / TrialState Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_frozen_trial_new_is_running() {
        let trial = FrozenTrial::new(3, 10);
        assert_eq!(trial.number, 3);
        assert_eq!(trial.state, TrialState::Running);
        assert!(trial.value.is_none());
        assert!(trial.last_step().is_none());
        assert!(trial.duration_ms().is_none());
    }

    #[test]
    fn test_frozen_trial_last_step_and_value() {
        let mut trial = FrozenTrial::new(0, 0);
        trial.intermediate_values.insert(0, 0.9);
        trial.intermediate_values.insert(4, 0.5);
        trial.intermediate_values.insert(2, 0.7);
        assert_eq!(trial.last_step(), Some(4));
        assert_eq!(trial.last_value(), Some(0.5));
    }

    #[test]
    fn test_frozen_trial_finish() {
        let mut trial = FrozenTrial::new(0, 5);
        trial.finish(TrialState::Complete, Some(1.0), 12);
        assert!(trial.state.is_finished());
        assert_eq!(trial.value, Some(1.0));
        assert_eq!(trial.duration_ms(), Some(7));
    }

    #[test]
    fn test_trial_state_serde() {
        let json = serde_json::to_string(&TrialState::Pruned).expect("serialize");
        let back: TrialState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, TrialState::Pruned);
    }

    // -------------------------------------------------------------------------
    // StudyDirection Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_direction_is_better() {
        assert!(StudyDirection::Minimize.is_better(0.1, 0.2));
        assert!(!StudyDirection::Minimize.is_better(0.2, 0.2));
        assert!(StudyDirection::Maximize.is_better(0.3, 0.2));
    }

    #[test]
    fn test_direction_best_of_ignores_nan() {
        let values = [f64::NAN, 0.4, 0.2, f64::NAN];
        assert_eq!(StudyDirection::Minimize.best_of(values), 0.2);
        assert_eq!(StudyDirection::Maximize.best_of(values), 0.4);
        assert!(StudyDirection::Minimize.best_of([f64::NAN]).is_nan());
    }

    #[test]
    fn test_direction_yaml() {
        let d: StudyDirection = serde_yaml::from_str("maximize").expect("parse");
        assert_eq!(d, StudyDirection::Maximize);
        assert_eq!(StudyDirection::default(), StudyDirection::Minimize);
    }

    #[test]
    fn test_frozen_trial_json_non_finite_values() {
        let mut trial = FrozenTrial::new(0, 0);
        trial.intermediate_values.insert(0, f64::NEG_INFINITY);
        trial.intermediate_values.insert(3, 2.0);
        trial.finish(TrialState::Pruned, Some(f64::NEG_INFINITY), 5);

        let json = serde_json::to_string(&trial).unwrap();
        assert!(json.contains("\"-inf\""));
        let back: FrozenTrial = serde_json::from_str(&json).unwrap();
        assert_eq!(back, trial);
    }

    #[test]
    fn test_frozen_trial_json_without_value() {
        let trial = FrozenTrial::new(2, 10);
        let json = serde_json::to_string(&trial).unwrap();
        assert!(json.contains("\"value\":null"));
        let back: FrozenTrial = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value, None);
    }
}
