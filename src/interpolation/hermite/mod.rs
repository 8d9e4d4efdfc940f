//! Piecewise cubic Hermite interpolation
//!
//! Each segment `[x[i], x[i+1]]` carries the cubic
//!
//! ```text
//! f(xq) = y[i] + m[i] dx + c[i] dx^2 + d[i] dx^3,    dx = xq - x[i]
//! ```
//!
//! matching the values and the estimated tangents at both ends. Tangents
//! come from [`tangents`], coefficients and evaluation from [`evaluator`].

pub(crate) mod helpers;
pub mod evaluator;
pub mod tangents;

pub use evaluator::{interpolate, HermiteSpline};
pub use tangents::{estimate_tangents, tangents_unchecked, TangentSet};

use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::methods::Method;


pub const DEFAULT_TENSION: f64 = 0.0;


/// Hermite interpolation configuration
///
/// # Fields
/// - `common`  : [`CommonCfg`]
/// - `method`  : tangent estimation [`Method`]
/// - `tension` : slackness in `[0, 1]`, read only by [`Method::Cardinal`]
///
/// # Construction
/// - Use [`HermiteCfg::new`] then optional setters.
///
/// # Defaults
/// - `tension` is [`DEFAULT_TENSION`], which makes Cardinal a
///   Catmull-Rom style central difference.
/// - Minimum allowed spacing between consecutive breakpoints is
///   [`crate::interpolation::config::DEFAULT_X_TOL`].
#[derive(Debug, Clone, Copy)]
pub struct HermiteCfg<'a> {
    common: CommonCfg<'a>,
    method: Method,
    tension: f64,
}
impl<'a> HermiteCfg<'a> {
    pub fn new(method: Method) -> Self {
        Self { common: CommonCfg::new(), method, tension: DEFAULT_TENSION }
    }

    pub fn with_method(mut self, v: Method) -> Self { self.method = v; self }

    pub fn set_tension(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() || !(0.0..=1.0).contains(&v) {
            return Err(InterpolationError::InvalidTension { got: v });
        }
        self.tension = v;
        Ok(self)
    }

    pub fn method(&self) -> Method { self.method }
    pub fn tension(&self) -> f64 { self.tension }
}
impl_common_cfg!(HermiteCfg<'a>);


/// Interpolates `y` over `x` at every point of `x_eval`.
///
/// Shorthand for building a [`HermiteCfg`] and calling [`interpolate`].
/// `tension` is validated only when `method` reads it.
pub fn interpolate_points(
    x_eval: &[f64],
    x: &[f64],
    y: &[f64],
    method: Method,
    tension: f64,
) -> Result<Vec<f64>, InterpolationError> {
    let mut cfg = HermiteCfg::new(method);
    if method.uses_tension() {
        cfg = cfg.set_tension(tension)?;
    }
    let cfg = cfg
        .set_x(x)?
        .set_y(y)?
        .set_x_eval(x_eval)?;

    Ok(interpolate(cfg)?.evaluated)
}
