#![allow(clippy::module_inception)]
#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::{tempdir, NamedTempFile};

    use crate::cli::{format_config, format_summary, run_command, Cli, Command};
    use crate::config::PodarConfig;
    use crate::hpo::{DeterministicPruner, Study, StudyDirection};

    const CONFIG: &str = r#"
monitor: accuracy
study:
  name: cli-test
  direction: maximize
  n_trials: 2
  seed: 3
  pruner:
    type: nop
trainer:
  max_epochs: 2
"#;

    fn config_file(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_run_args() {
        let cli = Cli::try_parse_from(["podar", "run", "study.yaml", "--trials", "4", "-v"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.trials, Some(4));
                assert!(args.output.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_zero_trials_rejected_by_parser() {
        assert!(Cli::try_parse_from(["podar", "run", "study.yaml", "--trials", "0"]).is_err());
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["podar", "validate", "a.yaml", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_validate_command() {
        let file = config_file(CONFIG);
        let path = file.path().to_string_lossy().into_owned();
        let cli = Cli::try_parse_from(["podar", "-q", "validate", path.as_str()]).unwrap();
        assert!(run_command(cli).is_ok());
    }

    #[test]
    fn test_validate_reports_invalid_config() {
        let file = config_file("study:\n  n_trials: 0\n");
        let path = file.path().to_string_lossy().into_owned();
        let cli = Cli::try_parse_from(["podar", "-q", "validate", path.as_str()]).unwrap();
        let err = run_command(cli).unwrap_err();
        assert!(err.contains("Invalid config"));
    }

    #[test]
    fn test_run_writes_trials() {
        let file = config_file(CONFIG);
        let dir = tempdir().unwrap();
        let output = dir.path().join("trials.json");
        let cli = Cli::try_parse_from([
            "podar".to_string(),
            "-q".to_string(),
            "run".to_string(),
            file.path().to_string_lossy().into_owned(),
            "--trials".to_string(),
            "3".to_string(),
            "--output".to_string(),
            output.to_string_lossy().into_owned(),
        ])
        .unwrap();

        run_command(cli).unwrap();

        let json = std::fs::read_to_string(&output).unwrap();
        let trials: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(trials.as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_format_config() {
        let text = format_config(&PodarConfig::default());
        assert!(text.contains("Monitor: accuracy"));
        assert!(text.contains("Trials: 10"));
    }

    #[test]
    fn test_format_summary() {
        let mut study = Study::new(StudyDirection::Maximize)
            .with_name("summary")
            .with_pruner(DeterministicPruner::new(false));
        study.optimize(|_| Ok(0.5), 2).unwrap();

        let text = format_summary(&study);
        assert!(text.starts_with("Study 'summary': 2 trials"));
        assert!(text.contains("Complete: 2"));
        assert!(text.contains("Pruned: 0"));
        assert!(text.contains("value=0.5000"));
    }

    #[test]
    fn test_format_summary_without_completed_trials() {
        let study = Study::new(StudyDirection::Minimize);
        assert!(format_summary(&study).contains("Best trial: none"));
    }
}
