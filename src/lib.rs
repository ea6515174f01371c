//! Clamped cubic spline interpolation over Hermite control points,
//! for smoothing scalar signals such as sensor readings.
//!
//! A spline is built either from plain samples, solving a tridiagonal system
//! for the unknown knot derivatives, or directly from control points carrying
//! explicit derivatives. Evaluation is total: queries outside the sampled
//! domain return the nearest boundary value unchanged.
//!
//! # Example
//! ```
//! use hermite_spline::{Sample, Spline};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let samples = vec![
//!     Sample::new(0.1, 0.3),
//!     Sample::new(0.4, 0.6),
//!     Sample::new(1.0, 1.0),
//!     Sample::new(2.0, 1.6),
//!     Sample::new(2.5, 2.0),
//! ];
//! let spline = Spline::from_samples(samples, 0.0, 0.0).unwrap();
//!
//! assert_approx_eq!(0.3, spline.evaluate(0.1), 1e-12);
//! assert_eq!(0.3, spline.evaluate(0.05));
//! assert_eq!(2.0, spline.evaluate(3.0));
//! ```

mod control_point;
mod error;
mod polynomial;
mod sample;
mod spline;
mod tridiagonal;

pub use control_point::ControlPoint;
pub use error::{SplineError, SplineResult};
pub use sample::Sample;
pub use spline::Spline;
