//! Run command implementation

use std::fs;

use tracing::info;

use crate::cli::logging::log;
use crate::cli::{LogLevel, RunArgs};
use crate::config::load_config;
use crate::demo::objective;
use crate::hpo::{Study, TrialState};

/// Run a study of the demo classifier as configured
pub fn run_study(args: RunArgs, level: LogLevel) -> Result<(), String> {
    let mut config = load_config(&args.config).map_err(|e| e.to_string())?;
    if let Some(trials) = args.trials {
        config.study.n_trials = trials as usize;
    }

    info!(
        trials = config.study.n_trials,
        monitor = %config.monitor,
        pruner = config.study.pruner.kind(),
        "starting study"
    );

    let mut study = Study::from_config(&config.study);
    let monitor = config.monitor.as_str();
    let trainer = &config.trainer;
    study
        .optimize(|trial| objective(trial, monitor, trainer), config.study.n_trials)
        .map_err(|e| e.to_string())?;

    log(level, LogLevel::Normal, &format_summary(&study));

    if let Some(path) = &args.output {
        let json = study.to_json().map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
        log(level, LogLevel::Normal, &format!("Trials written to {}", path.display()));
    }

    Ok(())
}

/// Format trial counts per state and the best trial
pub fn format_summary(study: &Study) -> String {
    let trials = study.trials();
    let count = |state: TrialState| trials.iter().filter(|t| t.state == state).count();

    let mut lines = vec![
        format!("Study '{}': {} trials", study.name(), trials.len()),
        format!("  Complete: {}", count(TrialState::Complete)),
        format!("  Pruned: {}", count(TrialState::Pruned)),
        format!("  Failed: {}", count(TrialState::Failed)),
    ];
    match study.best_trial() {
        Ok(best) => lines.push(format!(
            "  Best trial: #{} value={:.4} params={:?}",
            best.number,
            best.value.unwrap_or(f64::NAN),
            best.params
        )),
        Err(_) => lines.push("  Best trial: none".to_string()),
    }
    lines.join("\n")
}
