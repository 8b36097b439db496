//! Trainer abstraction for training loops
//!
//! This module provides a high-level `Trainer` that orchestrates:
//! - Epoch-level training over a [`TrainModule`](crate::train::TrainModule)
//! - Validation with metric aggregation
//! - Pre-training sanity validation
//! - Callback dispatch, graceful stops and interrupts
//!
//! # Example
//!
//! ```
//! use podar::demo::LinearClassifier;
//! use podar::train::{TrainConfig, Trainer};
//!
//! let mut trainer = Trainer::new(TrainConfig::default().with_max_epochs(2));
//! let mut model = LinearClassifier::new(7);
//! let result = trainer.fit(&mut model).unwrap();
//! assert!(result.callback_metrics.get("accuracy").is_some());
//! ```

#![allow(clippy::field_reassign_with_default)]

mod core;
mod fit;
mod result;


pub use core::Trainer;
pub use result::TrainResult;
