use crate::CoreError;

/// Floating point type used throughout the workspace
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Bracketing bisection root solve for a monotone residual.
///
/// Requires f(lo) and f(hi) to straddle zero. Stops when the bracket
/// shrinks below `tol.abs + tol.rel * |mid|` or after `max_iter` halvings.
pub fn bisect<F>(
    mut f: F,
    mut lo: Real,
    mut hi: Real,
    tol: Tolerances,
    max_iter: usize,
    what: &'static str,
) -> Result<Real, CoreError>
where
    F: FnMut(Real) -> Real,
{
    if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
        return Err(CoreError::InvalidArg { what });
    }

    let mut f_lo = f(lo);
    let f_hi = f(hi);
    if f_lo == 0.0 {
        return Ok(lo);
    }
    if f_hi == 0.0 {
        return Ok(hi);
    }
    if f_lo.signum() == f_hi.signum() {
        return Err(CoreError::InvalidArg { what });
    }

    for _ in 0..max_iter {
        let mid = 0.5 * (lo + hi);
        let f_mid = f(mid);
        if !f_mid.is_finite() {
            return Err(CoreError::NonFinite { what, value: f_mid });
        }
        if f_mid == 0.0 || (hi - lo) <= tol.abs + tol.rel * mid.abs() {
            return Ok(mid);
        }
        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }

    Err(CoreError::Convergence { what })
}
