/// Widths of each segment, `h[i] = x[i+1] - x[i]`
pub(crate) fn spacings(x: &[f64]) -> Vec<f64> {
    x.windows(2).map(|w| w[1] - w[0]).collect()
}


/// Secant slope of each segment, `delta[i] = (y[i+1] - y[i]) / h[i]`
pub(crate) fn secants(y: &[f64], h: &[f64]) -> Vec<f64> {
    let n = y.len();
    let mut d = Vec::with_capacity(n.saturating_sub(1));
    for i in 0..n.saturating_sub(1) { d.push((y[i+1] - y[i]) / h[i]); }
    d
}


/// Index `lo` of the segment with `x[lo] <= xq`, clamped to `[0, n-2]`
pub(crate) fn find_interval(x: &[f64], xq: f64) -> usize {
    let n = x.len();
    let mut lo = 0;
    let mut hi = n - 1;

    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        if x[mid] <= xq {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lo
}


/// Sign that maps zero to zero; `f64::signum` returns 1.0 for +0.0
#[inline]
pub(crate) fn sign(v: f64) -> f64 {
    if v > 0.0 { 1.0 }
    else if v < 0.0 { -1.0 }
    else { 0.0 }
}
