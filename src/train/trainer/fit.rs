//! Epoch loop with validation and callback dispatch

use std::time::Instant;

use tracing::{debug, info};

use crate::train::callback::{CallbackAction, Interrupt};
use crate::train::error::{Result, TrainError};
use crate::train::trainer::core::Trainer;
use crate::train::trainer::result::TrainResult;
use crate::train::{Batch, MetricSnapshot, TrainModule};

impl Trainer {
    /// Train `module` for up to `max_epochs` epochs.
    ///
    /// Order of events: train begin, sanity-check validation, then per epoch
    /// epoch begin, training steps, validation (every
    /// `check_val_every_n_epoch` epochs), epoch end; finally train end.
    ///
    /// A `Stop` request ends training before the next epoch once
    /// `min_epochs` epochs have completed. An `Interrupt` ends it immediately
    /// with [`TrainError::Interrupted`].
    pub fn fit<M: TrainModule + ?Sized>(&mut self, module: &mut M) -> Result<TrainResult> {
        self.config.validate()?;
        let train_batches = module.train_batches();
        if train_batches.is_empty() {
            return Err(TrainError::EmptyDataset);
        }

        self.start_time = Some(Instant::now());
        self.global_step = 0;
        self.callback_metrics = MetricSnapshot::new();

        let max_epochs = self.config.max_epochs;
        let steps_per_epoch = train_batches.len();
        let mut final_loss = 0.0;
        let mut epochs_completed = 0;
        let mut stop_requested = false;
        let mut stopped_early = false;

        let ctx = self.build_context(0, 0, steps_per_epoch, 0.0);
        match self.callbacks.on_train_begin(&ctx) {
            CallbackAction::Interrupt(interrupt) => return Err(Self::interrupted(interrupt)),
            CallbackAction::Stop => return Ok(self.finish(0, 0.0, true)),
            _ => {}
        }

        self.sanity_check(module)?;

        for epoch in 0..max_epochs {
            if self.stop_allowed(stop_requested, epochs_completed) {
                stopped_early = true;
                break;
            }

            let ctx = self.build_context(epoch, 0, steps_per_epoch, final_loss);
            match self.callbacks.on_epoch_begin(&ctx) {
                CallbackAction::Interrupt(interrupt) => return Err(Self::interrupted(interrupt)),
                CallbackAction::SkipEpoch => {
                    debug!(epoch, "epoch skipped by callback");
                    continue;
                }
                CallbackAction::Stop => {
                    stop_requested = true;
                    if self.stop_allowed(stop_requested, epochs_completed) {
                        stopped_early = true;
                        break;
                    }
                }
                CallbackAction::Continue => {}
            }

            final_loss =
                self.run_epoch_steps(module, &train_batches, epoch, final_loss, &mut stop_requested)?;
            self.callback_metrics.insert("loss", f64::from(final_loss));

            if (epoch + 1) % self.config.check_val_every_n_epoch == 0 {
                let action = self.run_validation(module, epoch, final_loss, None)?;
                Self::apply(action, &mut stop_requested)?;
            }

            epochs_completed += 1;
            let ctx = self.build_context(epoch, steps_per_epoch, steps_per_epoch, final_loss);
            let action = self.callbacks.on_epoch_end(&ctx);
            Self::apply(action, &mut stop_requested)?;
            debug!(epoch, loss = final_loss, global_step = self.global_step, "epoch end");
        }

        Ok(self.finish(epochs_completed, final_loss, stopped_early))
    }

    /// Run the inner step loop for one epoch and return the mean loss
    fn run_epoch_steps<M: TrainModule + ?Sized>(
        &mut self,
        module: &mut M,
        batches: &[Batch],
        epoch: usize,
        current_loss: f32,
        stop_requested: &mut bool,
    ) -> Result<f32> {
        let steps_per_epoch = batches.len();
        let mut total_loss = 0.0;

        for (step, batch) in batches.iter().enumerate() {
            let ctx = self.build_context(epoch, step, steps_per_epoch, current_loss);
            let action = self.callbacks.on_step_begin(&ctx);
            Self::apply(action, stop_requested)?;

            let loss = module.training_step(batch, step)?;
            total_loss += loss;
            self.global_step += 1;

            let ctx = self.build_context(epoch, step, steps_per_epoch, loss);
            let action = self.callbacks.on_step_end(&ctx);
            Self::apply(action, stop_requested)?;
        }

        Ok(safe_avg(total_loss, steps_per_epoch))
    }

    /// Run validation over at most `limit` batches and fire `on_validation_end`.
    ///
    /// A `limit` marks a sanity check: callbacks see `sanity_checking` and the
    /// logged metrics are discarded afterwards.
    fn run_validation<M: TrainModule + ?Sized>(
        &mut self,
        module: &mut M,
        epoch: usize,
        loss: f32,
        limit: Option<usize>,
    ) -> Result<CallbackAction> {
        let batches = module.val_batches();
        let n = limit.map_or(batches.len(), |l| l.min(batches.len()));
        if n == 0 {
            return Ok(CallbackAction::Continue);
        }
        let sanity_checking = limit.is_some();

        let outputs = batches
            .iter()
            .take(n)
            .enumerate()
            .map(|(idx, batch)| module.validation_step(batch, idx))
            .collect::<Result<Vec<_>>>()?;
        let logged = module.validation_epoch_end(&outputs);

        if !sanity_checking {
            self.callback_metrics.merge(&logged);
        }
        let mut ctx = self.build_context(epoch, 0, 0, loss);
        ctx.metrics.merge(&logged);
        ctx.sanity_checking = sanity_checking;

        debug!(epoch, sanity_checking, metrics = ?ctx.metrics, "validation end");
        Ok(self.callbacks.on_validation_end(&ctx))
    }

    fn sanity_check<M: TrainModule + ?Sized>(&mut self, module: &mut M) -> Result<()> {
        let limit = self.config.num_sanity_val_steps;
        if limit == 0 {
            return Ok(());
        }
        match self.run_validation(module, 0, 0.0, Some(limit))? {
            CallbackAction::Interrupt(interrupt) => Err(Self::interrupted(interrupt)),
            _ => Ok(()),
        }
    }

    fn stop_allowed(&self, stop_requested: bool, epochs_completed: usize) -> bool {
        stop_requested && epochs_completed >= self.config.min_epochs
    }

    fn apply(action: CallbackAction, stop_requested: &mut bool) -> Result<()> {
        match action {
            CallbackAction::Interrupt(interrupt) => Err(Self::interrupted(interrupt)),
            CallbackAction::Stop => {
                *stop_requested = true;
                Ok(())
            }
            CallbackAction::Continue | CallbackAction::SkipEpoch => Ok(()),
        }
    }

    fn interrupted(interrupt: Interrupt) -> TrainError {
        info!(callback = interrupt.callback, epoch = interrupt.epoch, "{}", interrupt.message);
        TrainError::Interrupted(interrupt)
    }

    fn finish(&mut self, epochs_completed: usize, final_loss: f32, stopped_early: bool) -> TrainResult {
        let ctx = self.build_context(epochs_completed.saturating_sub(1), 0, 0, final_loss);
        self.callbacks.on_train_end(&ctx);

        TrainResult {
            epochs_completed,
            global_step: self.global_step,
            final_loss,
            stopped_early,
            callback_metrics: self.callback_metrics.clone(),
            elapsed_secs: self.elapsed_secs(),
        }
    }
}

/// Mean of `total` over `count`, zero when empty
fn safe_avg(total: f32, count: usize) -> f32 {
    if count == 0 {
        0.0
    } else {
        total / count as f32
    }
}
