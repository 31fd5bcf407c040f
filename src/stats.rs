//! Plain numeric kernels shared by the aggregator and the analyses

use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::{DexError, Result};

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Sample variance (n - 1 denominator)
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Some(ss / (values.len() - 1) as f64)
}

/// Quantile with linear interpolation between closest ranks.
/// `sorted` must be ascending.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Centered sums over paired samples: (mean x, mean y, Sxx, Syy, Sxy)
fn centered_sums(xs: &[f64], ys: &[f64]) -> (f64, f64, f64, f64, f64) {
    let n = xs.len() as f64;
    let mx = xs.iter().sum::<f64>() / n;
    let my = ys.iter().sum::<f64>() / n;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mx;
        let dy = y - my;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }
    (mx, my, sxx, syy, sxy)
}

/// Pearson correlation of paired samples. `None` when either side has zero
/// variance or fewer than two pairs exist.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    debug_assert_eq!(xs.len(), ys.len());
    if xs.len() < 2 {
        return None;
    }
    let (_, _, sxx, syy, sxy) = centered_sums(xs, ys);
    if sxx == 0.0 || syy == 0.0 {
        return None;
    }
    Some((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
}

/// Degree-1 least-squares fit `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

pub fn linear_fit(xs: &[f64], ys: &[f64]) -> Result<LinearFit> {
    if xs.len() < 2 {
        return Err(DexError::insufficient(format!(
            "line fit needs at least 2 points, got {}",
            xs.len()
        )));
    }
    let (mx, my, sxx, _, sxy) = centered_sums(xs, ys);
    if sxx == 0.0 {
        return Err(DexError::insufficient(
            "line fit needs at least two distinct x values",
        ));
    }
    let slope = sxy / sxx;
    Ok(LinearFit {
        slope,
        intercept: my - slope * mx,
    })
}

/// Result of a two-sample t-test with unequal variances
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WelchTest {
    pub t_statistic: f64,
    pub p_value: f64,
    pub degrees_of_freedom: f64,
}

/// Two-sided Welch t-test of `a` against `b`
pub fn welch_t_test(a: &[f64], b: &[f64]) -> Result<WelchTest> {
    for (label, sample) in [("first", a), ("second", b)] {
        if sample.len() < 2 {
            return Err(DexError::insufficient(format!(
                "{} sample has {} observation(s), at least 2 required",
                label,
                sample.len()
            )));
        }
    }

    let (na, nb) = (a.len() as f64, b.len() as f64);
    // Both lengths are >= 2, so mean and variance exist
    let (ma, mb) = (mean(a).unwrap_or_default(), mean(b).unwrap_or_default());
    let va = sample_variance(a).unwrap_or_default() / na;
    let vb = sample_variance(b).unwrap_or_default() / nb;
    let se2 = va + vb;
    if se2 == 0.0 {
        return Err(DexError::insufficient("both samples have zero variance"));
    }

    let t = (ma - mb) / se2.sqrt();
    let df = se2 * se2 / (va * va / (na - 1.0) + vb * vb / (nb - 1.0));
    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| DexError::insufficient(format!("invalid t distribution: {}", e)))?;
    let p = (2.0 * dist.sf(t.abs())).min(1.0);

    Ok(WelchTest {
        t_statistic: t,
        p_value: p,
        degrees_of_freedom: df,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-6;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < TOL
    }

    #[test]
    fn test_quantile_interpolates() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&v, 0.5), Some(2.5));
        assert_eq!(quantile(&v, 0.25), Some(1.75));
        assert_eq!(quantile(&v, 1.0), Some(4.0));
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn test_pearson_perfect_line() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys: Vec<f64> = xs.iter().map(|x| 3.0 * x + 7.0).collect();
        assert!(close(pearson(&xs, &ys).unwrap(), 1.0));
        let neg: Vec<f64> = xs.iter().map(|x| -0.5 * x).collect();
        assert!(close(pearson(&xs, &neg).unwrap(), -1.0));
    }

    #[test]
    fn test_pearson_zero_variance_is_undefined() {
        assert_eq!(pearson(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]), None);
        assert_eq!(pearson(&[1.0], &[2.0]), None);
    }

    #[test]
    fn test_linear_fit_recovers_coefficients() {
        let xs = [10.0, 20.0, 35.0, 50.0];
        let ys: Vec<f64> = xs.iter().map(|x| 2.5 * x - 4.0).collect();
        let fit = linear_fit(&xs, &ys).unwrap();
        assert!(close(fit.slope, 2.5));
        assert!(close(fit.intercept, -4.0));
        assert!(close(fit.predict(100.0), 246.0));
    }

    #[test]
    fn test_linear_fit_constant_x() {
        assert!(matches!(
            linear_fit(&[1.0, 1.0], &[2.0, 3.0]),
            Err(DexError::InsufficientData(_))
        ));
    }

    #[test]
    fn test_welch_matches_reference() {
        // Reference: scipy.stats.ttest_ind(a, b, equal_var=False)
        let a = [27.5, 21.0, 19.0, 23.6, 17.0, 17.9, 16.9, 20.1, 21.9, 22.6];
        let b = [27.1, 22.0, 20.8, 23.4, 23.4, 23.5, 25.8, 22.0, 24.8, 20.2, 21.9, 22.1];
        let result = welch_t_test(&a, &b).unwrap();
        assert!(close(result.t_statistic, WELCH_REF_T), "t = {}", result.t_statistic);
        assert!(close(result.degrees_of_freedom, WELCH_REF_DF), "df = {}", result.degrees_of_freedom);
        assert!(close(result.p_value, WELCH_REF_P), "p = {}", result.p_value);
    }

    const WELCH_REF_T: f64 = -1.943_551_673_659_545;
    const WELCH_REF_DF: f64 = 14.326_479_733_664_807;
    const WELCH_REF_P: f64 = 0.071_860_420_857_474_37;

    #[test]
    fn test_welch_small_group() {
        let err = welch_t_test(&[100.0], &[50.0, 60.0, 70.0]).unwrap_err();
        assert!(matches!(err, DexError::InsufficientData(_)));
    }

    #[test]
    fn test_welch_zero_variance() {
        assert!(welch_t_test(&[1.0, 1.0], &[2.0, 2.0]).is_err());
    }
}
