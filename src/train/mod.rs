//! High-level training loop
//!
//! This module provides:
//! - [`TrainModule`], the per-batch model interface
//! - [`Trainer`], the epoch loop with validation and sanity checks
//! - Callbacks: [`EarlyStopping`] and [`PruningCallback`]
//! - Logged metrics as [`MetricSnapshot`]
//!
//! # Example
//!
//! ```
//! use podar::demo::LinearClassifier;
//! use podar::train::{EarlyStopping, TrainConfig, Trainer};
//!
//! let config = TrainConfig::default().with_max_epochs(3);
//! let mut trainer = Trainer::new(config);
//! trainer.add_callback(EarlyStopping::new("accuracy", 2, 0.0).maximize());
//!
//! let mut model = LinearClassifier::new(42);
//! let result = trainer.fit(&mut model).unwrap();
//! println!("final loss={:.4}", result.final_loss);
//! ```

mod batch;
pub mod callback;
mod config;
mod error;
mod metrics;
mod module;
mod trainer;

pub use batch::Batch;
pub use callback::{
    CallbackAction, CallbackContext, CallbackManager, EarlyStopping, Interrupt, PruneCheck,
    PruningCallback, TrainerCallback,
};
pub use config::TrainConfig;
pub use error::{Result, TrainError};
pub use metrics::MetricSnapshot;
pub use module::TrainModule;
pub use trainer::{TrainResult, Trainer};
