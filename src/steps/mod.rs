//! Provisioning steps.
//!
//! This module provides the pieces a run is assembled from:
//!
//! - [`Step`] - A named, described unit of work backed by an [`Action`]
//! - [`StepOutcome`] - What a successful action reports back
//! - [`BestEffort`] - Sub-operations whose failures only produce warnings
//! - [`Catalog`] - Builds the ordered step list for a resolved platform
//! - [`actions`] - The concrete action types the default catalog uses
//!
//! # Example
//!
//! ```
//! use dotstrap::steps::{Step, StepOutcome};
//!
//! let step = Step::from_fn("Say hello", "Prints nothing, succeeds", || Ok(StepOutcome::clean()));
//! assert_eq!(step.name(), "Say hello");
//! assert!(step.run().is_ok());
//! ```

pub mod actions;
pub mod best_effort;
pub mod catalog;
pub mod step;

pub use best_effort::{BestEffort, SubResult};
pub use catalog::{Catalog, DefaultCatalog, DotfilesSource};
pub use step::{Action, ActionResult, Step, StepOutcome};
