//! Core traits and types for the callback system
//!
//! This module provides the foundational types for training callbacks:
//! - `CallbackContext` - State passed to callbacks
//! - `CallbackAction` - Actions a callback can request
//! - `Interrupt` - Payload of an immediate stop
//! - `TrainerCallback` - The trait all callbacks implement

use crate::train::metrics::MetricSnapshot;

/// Context passed to callbacks with current training state
#[derive(Clone, Debug, Default)]
pub struct CallbackContext {
    /// Current epoch (0-indexed)
    pub epoch: usize,
    /// Total epochs planned
    pub max_epochs: usize,
    /// Current batch index within epoch
    pub step: usize,
    /// Total steps in epoch
    pub steps_per_epoch: usize,
    /// Global step count
    pub global_step: usize,
    /// Mean training loss of the latest epoch
    pub loss: f32,
    /// Latest logged metrics (training loss plus validation metrics)
    pub metrics: MetricSnapshot,
    /// Set while the pre-training validation sanity check runs
    pub sanity_checking: bool,
    /// Training duration in seconds
    pub elapsed_secs: f64,
}

/// Request to stop training immediately, without treating it as a failure
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interrupt {
    /// Name of the callback that raised it
    pub callback: &'static str,
    /// Epoch during which training was interrupted
    pub epoch: usize,
    /// Human-readable reason
    pub message: String,
}

impl Interrupt {
    pub fn new(callback: &'static str, epoch: usize, message: impl Into<String>) -> Self {
        Self { callback, epoch, message: message.into() }
    }
}

/// Action to take after a callback
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackAction {
    /// Continue training normally
    Continue,
    /// Finish training gracefully at the end of the epoch
    Stop,
    /// Skip rest of current epoch
    SkipEpoch,
    /// End training now; `Trainer::fit` returns `TrainError::Interrupted`
    Interrupt(Interrupt),
}

impl CallbackAction {
    pub fn is_continue(&self) -> bool {
        matches!(self, CallbackAction::Continue)
    }
}

/// Trait for training callbacks
///
/// Implement this trait to hook into training events. All methods have
/// default no-op implementations, so you only need to implement the
/// events you care about.
pub trait TrainerCallback: Send {
    /// Called before training starts
    fn on_train_begin(&mut self, _ctx: &CallbackContext) -> CallbackAction {
        CallbackAction::Continue
    }

    /// Called after training ends
    fn on_train_end(&mut self, _ctx: &CallbackContext) {}

    /// Called before each epoch
    fn on_epoch_begin(&mut self, _ctx: &CallbackContext) -> CallbackAction {
        CallbackAction::Continue
    }

    /// Called after each epoch
    fn on_epoch_end(&mut self, _ctx: &CallbackContext) -> CallbackAction {
        CallbackAction::Continue
    }

    /// Called before each training step
    fn on_step_begin(&mut self, _ctx: &CallbackContext) -> CallbackAction {
        CallbackAction::Continue
    }

    /// Called after each training step
    fn on_step_end(&mut self, _ctx: &CallbackContext) -> CallbackAction {
        CallbackAction::Continue
    }

    /// Called after each validation pass, including the sanity check
    fn on_validation_end(&mut self, _ctx: &CallbackContext) -> CallbackAction {
        CallbackAction::Continue
    }

    /// Get callback name for logging
    fn name(&self) -> &'static str {
        "TrainerCallback"
    }
}
