//! # Vantage Math
//!
//! Numerical building blocks for the Vantage portfolio risk toolkit.
//!
//! This crate provides:
//!
//! - **Statistics**: sample mean, sample standard deviation, linearly
//!   interpolated quantiles
//! - **Distributions**: standard normal quantile function
//! - **Histogram**: equal-width binning with density normalisation
//!
//! ## Design Philosophy
//!
//! - **Explicit failure**: empty or non-finite input is an error, never a
//!   silent `NaN`
//! - **Pure functions**: no allocation beyond what the result needs

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]

pub mod distributions;
pub mod error;
pub mod histogram;
pub mod stats;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::distributions::standard_normal_quantile;
    pub use crate::error::{MathError, MathResult};
    pub use crate::histogram::{Bin, Histogram};
    pub use crate::stats::{mean, minimum, quantile, quantile_sorted, sample_std_dev, sorted};
}

pub use error::{MathError, MathResult};
