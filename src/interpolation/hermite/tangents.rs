//! Tangent estimation at the breakpoints.
//!
//! Every method shares the boundary law: the first tangent equals the first
//! secant and the last tangent equals the last secant. Interior tangents
//! depend on the [`Method`]:
//!
//! ```text
//! Linear            m[i] = delta[i]                 (ignored by the evaluator)
//! FiniteDifference  m[i] = (delta[i-1] + delta[i]) / 2
//! Cardinal          m[i] = (1 - tension) (y[i+1] - y[i-1]) / (x[i+1] - x[i-1])
//! FritschButland    weighted harmonic mean, 0 at local extrema
//! FritschCarlson    averaged secants, 0 at sign changes, then projected
//!                   onto the disk alpha^2 + beta^2 <= 9
//! Steffen           parabolic estimate limited by the adjacent secants
//! ```
//!
//! References: F. N. Fritsch & R. E. Carlson, "Monotone Piecewise Cubic
//! Interpolation" (1980); F. N. Fritsch & J. Butland, "A Method for
//! Constructing Local Monotone Piecewise Cubic Interpolants" (1984);
//! M. Steffen, "A simple method for monotonic interpolation in one
//! dimension" (1990).

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::hermite::helpers::{secants, sign, spacings};
use crate::interpolation::hermite::HermiteCfg;
use crate::interpolation::methods::Method;


/// Radius of the Fritsch–Carlson monotonicity disk in the alpha-beta plane
pub const MONOTONE_RADIUS: f64 = 3.0;


/// Tangent and secant arrays for one set of breakpoints.
///
/// - `tangents` : derivative estimate at each breakpoint, length `n`
/// - `secants`  : slope of each segment, length `n - 1`
#[derive(Debug, Clone, PartialEq)]
pub struct TangentSet {
    pub tangents: Vec<f64>,
    pub secants: Vec<f64>,
}


#[inline]
fn finite_difference(d0: f64, d1: f64) -> f64 {
    0.5 * (d0 + d1)
}


#[inline]
fn cardinal(x: &[f64], y: &[f64], i: usize, tension: f64) -> f64 {
    (1.0 - tension) * (y[i + 1] - y[i - 1]) / (x[i + 1] - x[i - 1])
}


#[inline]
fn fritsch_butland(h0: f64, h1: f64, d0: f64, d1: f64) -> f64 {
    if sign(d0) * sign(d1) <= 0.0 { return 0.0; }

    // leans toward the shorter neighbour
    let alpha = (1.0 + h1 / (h0 + h1)) / 3.0;
    1.0 / (alpha / d0 + (1.0 - alpha) / d1)
}


#[inline]
fn fritsch_carlson(d0: f64, d1: f64) -> f64 {
    if sign(d0) * sign(d1) < 0.0 { 0.0 }
    else { finite_difference(d0, d1) }
}


#[inline]
fn steffen(h0: f64, h1: f64, d0: f64, d1: f64) -> f64 {
    let p = (d0 * h1 + d1 * h0) / (h0 + h1);
    (sign(d0) + sign(d1)) * d0.abs().min(d1.abs()).min(0.5 * p.abs())
}


#[inline]
fn rim(pinned: f64) -> f64 {
    (MONOTONE_RADIUS * MONOTONE_RADIUS - pinned * pinned).max(0.0).sqrt()
}


/// Second Fritsch–Carlson pass: flat segments get flat tangents, and any
/// tangent pair outside the monotonicity disk is scaled back onto its rim.
///
/// The end tangents stay pinned to their secants. On the first and last
/// segment only the interior tangent is shortened until the pair reaches
/// the rim.
fn limit_to_monotone_disk(d: &[f64], m: &mut [f64]) {
    let last = d.len().saturating_sub(1);

    for k in 0..d.len() {
        if d[k] == 0.0 {
            m[k]     = 0.0;
            m[k + 1] = 0.0;
            continue;
        }

        let alpha = m[k] / d[k];
        let beta  = m[k + 1] / d[k];
        let tau   = MONOTONE_RADIUS / alpha.hypot(beta);
        if tau >= 1.0 {
            continue;
        }

        match (k == 0, k == last) {
            (false, false) => {
                m[k]     = tau * alpha * d[k];
                m[k + 1] = tau * beta * d[k];
            }
            (true, false) => m[k + 1] = rim(alpha) * d[k],
            (false, true) => m[k]     = rim(beta) * d[k],
            // both ends pinned means alpha = beta = 1, always inside
            (true, true) => {}
        }
    }
}


/// Computes tangents and secants without validating the input.
///
/// `x` is assumed strictly increasing and as long as `y`. Coincident
/// breakpoints produce non-finite values instead of an error. Fewer than
/// two breakpoints yield zero tangents and no secants.
pub fn tangents_unchecked(x: &[f64], y: &[f64], method: Method, tension: f64) -> TangentSet {
    let n = x.len();
    if n < 2 {
        return TangentSet { tangents: vec![0.0; n], secants: Vec::new() };
    }

    let h = spacings(x);
    let d = secants(y, &h);

    let mut m = vec![0.0; n];
    m[0]     = d[0];
    m[n - 1] = d[n - 2];

    for i in 1..n - 1 {
        let (h0, h1) = (h[i - 1], h[i]);
        let (d0, d1) = (d[i - 1], d[i]);

        m[i] = match method {
            Method::Linear           => d1,
            Method::FiniteDifference => finite_difference(d0, d1),
            Method::Cardinal         => cardinal(x, y, i, tension),
            Method::FritschButland   => fritsch_butland(h0, h1, d0, d1),
            Method::FritschCarlson   => fritsch_carlson(d0, d1),
            Method::Steffen          => steffen(h0, h1, d0, d1),
        };
    }

    if method == Method::FritschCarlson {
        limit_to_monotone_disk(&d, &mut m);
    }

    TangentSet { tangents: m, secants: d }
}


/// Estimates one tangent per breakpoint for the configured method.
///
/// # Returns
/// [`TangentSet`] with `n` tangents and `n - 1` secants. The first and last
/// tangents always equal the first and last secants.
///
/// # Errors
/// - [`InterpolationError::EmptyInput`], [`InterpolationError::UnequalLength`]
///   or [`InterpolationError::InsufficientPoints`] if `x`/`y` were never set
///   or disagree.
pub fn estimate_tangents(cfg: &HermiteCfg) -> Result<TangentSet, InterpolationError> {
    cfg.common().validate()?;

    let x = cfg.common().x();
    let y = cfg.common().y();

    tracing::debug!(method = %cfg.method(), n = x.len(), "estimating tangents");

    Ok(tangents_unchecked(x, y, cfg.method(), cfg.tension()))
}
