//! Piecewise cubic Hermite interpolation through sorted breakpoints.
//!
//! Tangents at the breakpoints come from one of several [`Method`]s, some of
//! which preserve monotonicity of the data. See [`interpolation::hermite`].
//!
//! [`Method`]: interpolation::Method

pub mod interpolation;
