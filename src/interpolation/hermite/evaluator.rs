use crate::interpolation::errors::InterpolationError;
use crate::interpolation::hermite::helpers::{find_interval, spacings};
use crate::interpolation::hermite::tangents::{tangents_unchecked, TangentSet};
use crate::interpolation::hermite::HermiteCfg;
use crate::interpolation::methods::Method;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;


/// Forward-moving segment index for query sequences.
///
/// Ascending queries resume from the previous segment and cost amortized
/// O(1). A query left of the current segment re-seats the cursor by
/// bisection, so any order gives correct segments.
#[derive(Debug, Clone)]
struct SegmentCursor<'a> {
    x: &'a [f64],
    idx: usize,
}

impl<'a> SegmentCursor<'a> {
    fn new(x: &'a [f64]) -> Self {
        Self { x, idx: 0 }
    }

    /// `xq` must already lie inside `[x[0], x[n-1]]`.
    fn locate(&mut self, xq: f64) -> usize {
        let x = self.x;
        if xq < x[self.idx] {
            tracing::trace!(xq, from = self.idx, "query behind segment cursor, re-seating");
            self.idx = find_interval(x, xq);
            return self.idx;
        }

        let last = x.len() - 2;
        while self.idx < last && x[self.idx + 1] <= xq {
            self.idx += 1;
        }
        self.idx
    }
}


/// Per-segment polynomial coefficients `(b, c, d)` of
/// `b dx + c dx^2 + d dx^3`.
///
/// Linear collapses every segment to its secant.
fn coefficients(method: Method, h: &[f64], t: &TangentSet) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let m     = &t.tangents;
    let delta = &t.secants;
    let n_seg = delta.len();

    let mut bcoef = vec![0.0; n_seg];
    let mut ccoef = vec![0.0; n_seg];
    let mut dcoef = vec![0.0; n_seg];

    for k in 0..n_seg {
        if method == Method::Linear {
            bcoef[k] = delta[k];
            continue;
        }

        let w = h[k];
        bcoef[k] = m[k];
        ccoef[k] = (3.0 * delta[k] - 2.0 * m[k] - m[k + 1]) / w;
        dcoef[k] = (m[k] + m[k + 1] - 2.0 * delta[k]) / (w * w);
    }

    (bcoef, ccoef, dcoef)
}


/// Piecewise cubic Hermite interpolant built once from a [`HermiteCfg`].
///
/// Owns copies of the breakpoints, values, tangents, secants and segment
/// coefficients, so it can outlive the configuration it came from.
#[derive(Debug, Clone)]
pub struct HermiteSpline {
    method: Method,
    x: Vec<f64>,
    y: Vec<f64>,
    slopes: TangentSet,
    bcoef: Vec<f64>,
    ccoef: Vec<f64>,
    dcoef: Vec<f64>,
}

impl HermiteSpline {
    /// Estimates tangents and derives segment coefficients.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`], [`InterpolationError::UnequalLength`]
    ///   or [`InterpolationError::InsufficientPoints`] if `x`/`y` were never set
    ///   or disagree.
    pub fn new(cfg: &HermiteCfg) -> Result<Self, InterpolationError> {
        cfg.common().validate()?;

        let x      = cfg.common().x();
        let y      = cfg.common().y();
        let method = cfg.method();

        let h      = spacings(x);
        let slopes = tangents_unchecked(x, y, method, cfg.tension());
        let (bcoef, ccoef, dcoef) = coefficients(method, &h, &slopes);

        Ok(Self {
            method,
            x: x.to_vec(),
            y: y.to_vec(),
            slopes,
            bcoef,
            ccoef,
            dcoef,
        })
    }

    pub fn method(&self) -> Method { self.method }
    pub fn breakpoints(&self) -> &[f64] { &self.x }
    pub fn values(&self) -> &[f64] { &self.y }
    pub fn tangents(&self) -> &[f64] { &self.slopes.tangents }
    pub fn secants(&self) -> &[f64] { &self.slopes.secants }

    #[inline]
    fn check_domain(&self, xq: f64) -> Result<(), InterpolationError> {
        let (x_min, x_max) = self.domain();
        if xq.is_nan() || xq < x_min || xq > x_max {
            return Err(InterpolationError::OutOfBounds { got: xq, x_min, x_max });
        }
        Ok(())
    }

    #[inline]
    fn eval_segment(&self, k: usize, xq: f64) -> f64 {
        // right endpoint hits return the stored value exactly
        if xq == self.x[k + 1] {
            return self.y[k + 1];
        }
        let dx = xq - self.x[k];
        self.y[k] + dx * (self.bcoef[k] + dx * (self.ccoef[k] + dx * self.dcoef[k]))
    }

    /// Lazily evaluates `xs` in order with the segment cursor.
    ///
    /// Each item is independent: an out-of-range query yields an error
    /// for that point only, so callers choose between aborting at the
    /// first failure and filtering failures out.
    pub fn eval_iter<'s>(
        &'s self,
        xs: &'s [f64],
    ) -> impl Iterator<Item = Result<f64, InterpolationError>> + 's {
        let mut cursor = SegmentCursor::new(&self.x);
        xs.iter().map(move |&xq| {
            self.check_domain(xq)?;
            let k = cursor.locate(xq);
            Ok(self.eval_segment(k, xq))
        })
    }

    /// First derivative of the interpolant at `xq`.
    ///
    /// At an interior breakpoint this is the tangent of the segment to its
    /// right.
    pub fn eval_derivative(&self, xq: f64) -> Result<f64, InterpolationError> {
        self.check_domain(xq)?;
        let k  = find_interval(&self.x, xq);
        let dx = xq - self.x[k];
        Ok(self.bcoef[k] + dx * (2.0 * self.ccoef[k] + 3.0 * dx * self.dcoef[k]))
    }
}

impl Interpolator for HermiteSpline {
    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        self.check_domain(xq)?;
        let k = find_interval(&self.x, xq);
        Ok(self.eval_segment(k, xq))
    }

    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        self.eval_iter(xs).collect()
    }

    fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }
}


/// Evaluates the piecewise cubic Hermite interpolant.
///
/// # Behavior
/// - Estimates tangents with `cfg.method()`.
/// - Derives per-segment coefficients, with `w = x[k+1] - x[k]`:
///
/// ```text
/// c[k] = (3 delta[k] - 2 m[k] - m[k+1]) / w
/// d[k] = (m[k] + m[k+1] - 2 delta[k]) / w^2
/// ```
///
///   [`Method::Linear`] uses `m[k] = delta[k]` and `c[k] = d[k] = 0`.
/// - Walks `cfg.common.x_eval()` in the given order with a forward
///   segment cursor; sorted queries cost amortized O(1) each.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `method_name` : name of the tangent method
/// - `n_provided`  : number of breakpoints
/// - `n_evaluated` : number of query points
/// - `evaluated`   : interpolated values, in query order
///
/// # Errors
/// - [`InterpolationError::OutOfBounds`] at the first query outside
///   `[x[0], x[n-1]]`.
pub fn interpolate(cfg: HermiteCfg) -> Result<InterpolationReport, InterpolationError> {
    let spline = HermiteSpline::new(&cfg)?;
    let evals  = cfg.common().x_eval();

    let n_provided  = spline.breakpoints().len();
    let n_evaluated = evals.len();

    tracing::debug!(
        method = %spline.method(),
        n_provided,
        n_evaluated,
        "evaluating hermite interpolant"
    );

    let mut report = InterpolationReport::new(spline.method(), n_provided, n_evaluated);
    for yq in spline.eval_iter(evals) {
        report.evaluated.push(yq?);
    }

    Ok(report)
}
