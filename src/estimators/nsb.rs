//! Nemenman-Shafee-Bialek (NSB) entropy estimator.

use ndarray::ArrayView1;
use statrs::function::gamma::{digamma, ln_gamma};

use crate::errors::Result;
use crate::estimators::traits::{EntropyEstimator, EstimatorResult};

const INTEGRATION_TOL: f64 = 1e-6;
const MAX_RECURSION: usize = 12;
const LOWER_BOUND: f64 = 1e-8;

/// Bayesian entropy estimator integrating the Dirichlet-multinomial
/// posterior mean entropy over a prior on the concentration parameter,
/// parametrised by β ∈ (0, ln k) and integrated with adaptive Simpson.
///
/// The cardinality `k` stays in floating point throughout: values up to
/// 2^150 are valid and must not be narrowed to machine integers.
///
/// Returns an uncertainty: the spread of the conditional posterior mean
/// entropy across the prior mixture. Samples without coincidences relative
/// to the alphabet (n == k) leave the evidence uninformative and yield NaN,
/// which the entry points surface as a numeric error; with extra support
/// (k > n) the posterior is proper even when every bin was seen once.
#[derive(Debug, Clone, Copy, Default)]
pub struct NsbEntropy;

impl NsbEntropy {
    /// Negative log evidence of the Dirichlet-multinomial model at β.
    ///
    /// ln ρ(β) = ln Γ(kβ) − ln Γ(N + kβ) + Σ_i [ln Γ(n_i + β) − ln Γ(β)];
    /// bins with n_i = 0 (explicit zeros and unseen bins alike) drop out.
    fn neg_log_rho(beta: f64, k: f64, n: f64, counts: &[f64]) -> f64 {
        let kappa = k * beta;
        let mut result = -(ln_gamma(kappa) - ln_gamma(n + kappa));
        let ln_g_beta = ln_gamma(beta);
        for &c in counts {
            result -= ln_gamma(c + beta) - ln_g_beta;
        }
        result
    }

    /// dξ/dβ = k·ψ₁(1 + kβ) − ψ₁(1 + β), the prior measure over β.
    fn dxi(beta: f64, k: f64) -> f64 {
        k * trigamma(1.0 + k * beta) - trigamma(1.0 + beta)
    }

    /// Posterior mean entropy conditional on β:
    /// E[H|β] = ψ(A + 1) − (1/A)·Σ_i α_i ψ(α_i + 1) with α_i = n_i + β and
    /// A = N + kβ. The k − m bins with no evidence contribute with α_i = β.
    fn conditional_mean(beta: f64, k: f64, n: f64, counts: &[f64]) -> f64 {
        let total_alpha = n + k * beta;
        let mut sum_term = 0.0_f64;
        for &c in counts {
            let a_i = c + beta;
            sum_term += a_i * digamma(a_i + 1.0);
        }
        let empty = k - counts.len() as f64;
        if empty > 0.0 {
            sum_term += empty * beta * digamma(beta + 1.0);
        }
        digamma(total_alpha + 1.0) - sum_term / total_alpha
    }

    /// Peak of the log evidence over a log-spaced grid, used to rescale the
    /// integrand before exponentiating.
    fn log_evidence_peak(upper: f64, k: f64, n: f64, counts: &[f64]) -> f64 {
        let steps = 200usize;
        let lo = LOWER_BOUND.ln();
        let hi = upper.ln();
        let step = (hi - lo) / steps as f64;
        let mut best = f64::INFINITY;
        for i in 0..=steps {
            let beta = (lo + step * i as f64).exp();
            let v = Self::neg_log_rho(beta, k, n, counts);
            if v < best {
                best = v;
            }
        }
        best
    }
}

impl EntropyEstimator for NsbEntropy {
    fn algorithm(&self) -> &'static str {
        "nsb"
    }

    fn estimate(&self, pk: ArrayView1<'_, i32>, k: f64) -> Result<EstimatorResult> {
        let counts: Vec<f64> = pk.iter().filter(|&&c| c > 0).map(|&c| c as f64).collect();
        let n: f64 = counts.iter().sum();
        if n == 0.0 || k <= 0.0 {
            return Ok(EstimatorResult::new(f64::NAN, None));
        }
        // Coincidences are counted against the full alphabet: n - k == 0
        // leaves the evidence uninformative, while k > n keeps the posterior
        // proper even for all-singleton counts.
        if n - k == 0.0 {
            return Ok(EstimatorResult::new(f64::NAN, None));
        }
        let upper = k.ln();
        if !upper.is_finite() || upper <= 0.0 {
            return Ok(EstimatorResult::new(f64::NAN, None));
        }

        let l0 = Self::log_evidence_peak(upper, k, n, &counts);
        let weight = |beta: f64| {
            (l0 - Self::neg_log_rho(beta, k, n, &counts)).exp() * Self::dxi(beta, k)
        };
        let mean = |beta: f64| Self::conditional_mean(beta, k, n, &counts);

        let den = simpson(&weight, LOWER_BOUND, upper, INTEGRATION_TOL, MAX_RECURSION);
        let num = simpson(
            &|b| weight(b) * mean(b),
            LOWER_BOUND,
            upper,
            INTEGRATION_TOL,
            MAX_RECURSION,
        );
        let num2 = simpson(
            &|b| weight(b) * mean(b) * mean(b),
            LOWER_BOUND,
            upper,
            INTEGRATION_TOL,
            MAX_RECURSION,
        );

        if den == 0.0 || !den.is_finite() {
            return Ok(EstimatorResult::new(f64::NAN, None));
        }
        let estimate = num / den;
        let variance = (num2 / den - estimate * estimate).max(0.0);
        Ok(EstimatorResult::new(estimate, Some(variance.sqrt())))
    }
}

/// Adaptive Simpson quadrature with recursion-depth cutoff. Endpoint and
/// midpoint evaluations are carried down the recursion, so each refinement
/// costs two new evaluations of `f`.
fn simpson<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, tol: f64, depth: usize) -> f64 {
    let fa = f(a);
    let fb = f(b);
    let m = 0.5 * (a + b);
    let fm = f(m);
    let whole = (b - a) / 6.0 * (fa + 4.0 * fm + fb);
    refine(f, a, b, fa, fm, fb, whole, tol, depth)
}

#[allow(clippy::too_many_arguments)]
fn refine<F: Fn(f64) -> f64>(
    f: &F,
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
    tol: f64,
    depth: usize,
) -> f64 {
    let m = 0.5 * (a + b);
    let lm = 0.5 * (a + m);
    let rm = 0.5 * (m + b);
    let flm = f(lm);
    let frm = f(rm);
    let left = (m - a) / 6.0 * (fa + 4.0 * flm + fm);
    let right = (b - m) / 6.0 * (fm + 4.0 * frm + fb);
    let delta = left + right - whole;
    if depth == 0 || delta.abs() < 15.0 * tol {
        return left + right + delta / 15.0;
    }
    refine(f, a, m, fa, flm, fm, left, tol / 2.0, depth - 1)
        + refine(f, m, b, fm, frm, fb, right, tol / 2.0, depth - 1)
}

/// Trigamma ψ₁(x), via the recurrence ψ₁(x) = ψ₁(x + 1) + 1/x² into the
/// asymptotic regime, then the Bernoulli-coefficient series.
fn trigamma(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    let mut shifted = x;
    let mut acc = 0.0_f64;
    while shifted < 8.0 {
        acc += 1.0 / (shifted * shifted);
        shifted += 1.0;
    }
    let inv = 1.0 / shifted;
    let inv2 = inv * inv;
    // 1/x + 1/(2x²) + Σ B₂ⱼ / x^(2j+1)
    let mut series = inv * (1.0 + 0.5 * inv);
    let mut power = inv * inv2;
    for coeff in [1.0 / 6.0, -1.0 / 30.0, 1.0 / 42.0, -1.0 / 30.0, 5.0 / 66.0] {
        series += coeff * power;
        power *= inv2;
    }
    acc + series
}
