//! Binomial probability mass function.
//!
//! Factorials overflow `f64` beyond 170!, so the coefficient is assembled in
//! log space from `ln Γ` and exponentiated once at the end.

use statrs::function::gamma::ln_gamma;

/// Natural logarithm of `P(X = k)` for `X ~ Binomial(n, p)`.
///
/// Returns `f64::NEG_INFINITY` for impossible outcomes (`k > n`, or an
/// endpoint probability that rules `k` out).
///
/// # Examples
///
/// ```
/// use pricer_core::math::ln_binomial_pmf;
///
/// let lp = ln_binomial_pmf(1, 2, 0.5);
/// assert!((lp - 0.5_f64.ln()).abs() < 1e-12);
/// ```
pub fn ln_binomial_pmf(k: usize, n: usize, p: f64) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    if p <= 0.0 {
        return if k == 0 { 0.0 } else { f64::NEG_INFINITY };
    }
    if p >= 1.0 {
        return if k == n { 0.0 } else { f64::NEG_INFINITY };
    }

    let n_f = n as f64;
    let k_f = k as f64;
    let ln_coefficient = ln_gamma(n_f + 1.0) - ln_gamma(k_f + 1.0) - ln_gamma(n_f - k_f + 1.0);

    ln_coefficient + k_f * p.ln() + (n_f - k_f) * (-p).ln_1p()
}

/// `P(X = k)` for `X ~ Binomial(n, p)`, computed through [`ln_binomial_pmf`].
///
/// `p` is clamped to `[0, 1]` by the endpoint rules above.
///
/// # Examples
///
/// ```
/// use pricer_core::math::binomial_pmf;
///
/// assert!((binomial_pmf(0, 3, 0.5) - 0.125).abs() < 1e-12);
/// assert_eq!(binomial_pmf(4, 3, 0.5), 0.0);
/// ```
#[inline]
pub fn binomial_pmf(k: usize, n: usize, p: f64) -> f64 {
    ln_binomial_pmf(k, n, p).exp()
}
