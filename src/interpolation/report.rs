//! Defines the struct returned by the Hermite evaluator.
//!
//! [`InterpolationReport`] summarizes one evaluation run: the tangent
//! method used, the number of breakpoints and query points, and the
//! interpolated values in query order.

use crate::interpolation::methods::Method;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `method_name` : name of the tangent method (e.g. `"fritschcarlson"`)
/// - `n_provided`  : number of breakpoints `(x, y)`
/// - `n_evaluated` : number of query points
/// - `evaluated`   : interpolated values at each query point
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub method_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub evaluated: Vec<f64>,
}

impl InterpolationReport {
    pub fn new(method: Method, n_provided: usize, n_evaluated: usize) -> Self {
        Self {
            method_name: method.method_name(),
            n_provided,
            n_evaluated,
            evaluated: Vec::with_capacity(n_evaluated),
        }
    }
}
