//! Callback system for training events
//!
//! Provides extensible hooks for training loop events:
//! - `on_train_begin` / `on_train_end`
//! - `on_epoch_begin` / `on_epoch_end`
//! - `on_step_begin` / `on_step_end`
//! - `on_validation_end`
//!
//! # Example
//!
//! ```rust
//! use podar::train::callback::{TrainerCallback, CallbackContext, CallbackAction};
//!
//! struct PrintCallback;
//!
//! impl TrainerCallback for PrintCallback {
//!     fn on_epoch_end(&mut self, ctx: &CallbackContext) -> CallbackAction {
//!         println!("Epoch {} finished with loss {:.4}", ctx.epoch, ctx.loss);
//!         CallbackAction::Continue
//!     }
//! }
//! ```

#![allow(clippy::field_reassign_with_default)]

mod early_stopping;
mod manager;
mod pruning;
mod traits;

pub use early_stopping::EarlyStopping;
pub use manager::CallbackManager;
pub use pruning::{PruneCheck, PruningCallback};
pub use traits::{CallbackAction, CallbackContext, Interrupt, TrainerCallback};
