//! Shapiro-Wilk normality test (Royston 1995, algorithm AS R94).

use std::f64::consts::{FRAC_1_SQRT_2, PI, SQRT_2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapiroWilk {
    /// W statistic, in `(0, 1]`; close to 1 for normal-looking samples.
    pub w: f64,
    pub p_value: f64,
}

// polynomial coefficients, ascending powers
const C1: [f64; 6] = [0.0, 0.221157, -0.147981, -2.071190, 4.434685, -2.706056];
const C2: [f64; 6] = [0.0, 0.042981, -0.293762, -1.752461, 5.682633, -3.582633];
const C3: [f64; 4] = [0.544, -0.39978, 0.025054, -6.714e-4];
const C4: [f64; 4] = [1.3822, -0.77857, 0.062767, -0.0020322];
const C5: [f64; 4] = [-1.5861, -0.31082, -0.083751, 0.0038915];
const C6: [f64; 3] = [-0.4803, -0.082676, 0.0030302];
const G: [f64; 2] = [-2.273, 0.459];

fn poly(c: &[f64], x: f64) -> f64 {
    c.iter().rev().fold(0.0, |acc, &k| acc * x + k)
}

/// `None` with fewer than 3 values or when all values are equal.
pub fn shapiro_wilk(values: &[f64]) -> Option<ShapiroWilk> {
    let n = values.len();
    if n < 3 {
        return None;
    }

    let mut x = values.to_vec();
    x.sort_by(f64::total_cmp);
    if x[n - 1] - x[0] <= 0.0 {
        return None;
    }

    let a = coefficients(n);
    let mean = x.iter().sum::<f64>() / n as f64;
    let ssq: f64 = x.iter().map(|v| (v - mean).powi(2)).sum();
    let num: f64 = a.iter().zip(&x).map(|(ai, xi)| ai * xi).sum();

    let w = (num * num / ssq).min(1.0);
    Some(ShapiroWilk {
        w,
        p_value: p_value(w, n),
    })
}

/// Antisymmetric weights `a_i` applied to the ordered sample.
fn coefficients(n: usize) -> Vec<f64> {
    let mut a = vec![0.0; n];
    if n == 3 {
        a[0] = -FRAC_1_SQRT_2;
        a[2] = FRAC_1_SQRT_2;
        return a;
    }

    let nf = n as f64;
    let m: Vec<f64> = (1..=n)
        .map(|i| normal_ppf((i as f64 - 0.375) / (nf + 0.25)))
        .collect();
    let mm: f64 = m.iter().map(|v| v * v).sum();
    let u = 1.0 / nf.sqrt();

    let an = poly(&C1, u) + m[n - 1] / mm.sqrt();
    a[n - 1] = an;
    a[0] = -an;

    if n > 5 {
        let an1 = poly(&C2, u) + m[n - 2] / mm.sqrt();
        let eps = (mm - 2.0 * m[n - 1].powi(2) - 2.0 * m[n - 2].powi(2))
            / (1.0 - 2.0 * an.powi(2) - 2.0 * an1.powi(2));
        a[n - 2] = an1;
        a[1] = -an1;
        for i in 2..n - 2 {
            a[i] = m[i] / eps.sqrt();
        }
    } else {
        let eps = (mm - 2.0 * m[n - 1].powi(2)) / (1.0 - 2.0 * an.powi(2));
        for i in 1..n - 1 {
            a[i] = m[i] / eps.sqrt();
        }
    }
    a
}

fn p_value(w: f64, n: usize) -> f64 {
    let nf = n as f64;

    if n == 3 {
        let pw = 6.0 / PI * (w.sqrt().asin() - PI / 3.0);
        return pw.clamp(0.0, 1.0);
    }

    let y = (1.0 - w).ln();
    let (z, m, s) = if n <= 11 {
        let gamma = poly(&G, nf);
        if y >= gamma {
            return 0.0;
        }
        (-(gamma - y).ln(), poly(&C3, nf), poly(&C4, nf).exp())
    } else {
        let ln_n = nf.ln();
        (y, poly(&C5, ln_n), poly(&C6, ln_n).exp())
    };

    normal_sf((z - m) / s)
}

/// Upper tail of the standard normal distribution.
fn normal_sf(z: f64) -> f64 {
    0.5 * libm::erfc(z / SQRT_2)
}

/// Inverse of the standard normal CDF (Acklam's rational approximation plus
/// one Halley refinement step). `p` must lie in `(0, 1)`.
pub fn normal_ppf(p: f64) -> f64 {
    const A: [f64; 6] = [
        -3.969683028665376e+01,
        2.209460984245205e+02,
        -2.759285104469687e+02,
        1.383577518672690e+02,
        -3.066479806614716e+01,
        2.506628277459239e+00,
    ];
    const B: [f64; 5] = [
        -5.447609879822406e+01,
        1.615858368580409e+02,
        -1.556989798598866e+02,
        6.680131188771972e+01,
        -1.328068155288572e+01,
    ];
    const C: [f64; 6] = [
        -7.784894002430293e-03,
        -3.223964580411365e-01,
        -2.400758277161838e+00,
        -2.549732539343734e+00,
        4.374664141464968e+00,
        2.938163982698783e+00,
    ];
    const D: [f64; 4] = [
        7.784695709041462e-03,
        3.224671290700398e-01,
        2.445134137142996e+00,
        3.754408661907416e+00,
    ];
    const P_LOW: f64 = 0.02425;

    let tail = |q: f64| {
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    };

    let x = if p < P_LOW {
        tail((-2.0 * p.ln()).sqrt())
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        -tail((-2.0 * (1.0 - p).ln()).sqrt())
    };

    let e = 0.5 * libm::erfc(-x / SQRT_2) - p;
    let u = e * (2.0 * PI).sqrt() * (x * x / 2.0).exp();
    x - u / (1.0 + x * u / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ppf_known_quantiles() {
        assert!(normal_ppf(0.5).abs() < 1e-12);
        assert!((normal_ppf(0.975) - 1.959_963_985).abs() < 1e-8);
        assert!((normal_ppf(0.025) + 1.959_963_985).abs() < 1e-8);
        assert!((normal_ppf(0.001) + 3.090_232_306).abs() < 1e-8);
    }

    #[test]
    fn reference_sample() {
        // classic textbook sample, W = 0.7888, p = 0.0067
        let v = [
            148.0, 154.0, 158.0, 160.0, 161.0, 162.0, 166.0, 170.0, 182.0, 195.0, 236.0,
        ];
        let res = shapiro_wilk(&v).unwrap();
        assert!((res.w - 0.7888).abs() < 1e-3, "w = {}", res.w);
        assert!((res.p_value - 0.0067).abs() < 5e-4, "p = {}", res.p_value);
    }

    #[test]
    fn three_evenly_spaced_values_are_perfectly_normal() {
        let res = shapiro_wilk(&[10.0, 20.0, 30.0]).unwrap();
        assert!((res.w - 1.0).abs() < 1e-12);
        assert!((res.p_value - 1.0).abs() < 1e-6);
    }

    #[test]
    fn outlier_is_detected() {
        let mut v = vec![1.0; 9];
        v.push(100.0);
        let res = shapiro_wilk(&v).unwrap();
        assert!(res.w < 0.4);
        assert!(res.p_value < 1e-4);
    }

    #[test]
    fn large_uniform_sample_is_not_rejected() {
        let v: Vec<f64> = (1..=20).map(f64::from).collect();
        let res = shapiro_wilk(&v).unwrap();
        assert!((res.w - 0.9604).abs() < 1e-3);
        assert!(res.p_value > 0.5);
    }

    #[test]
    fn undefined_cases() {
        assert_eq!(shapiro_wilk(&[]), None);
        assert_eq!(shapiro_wilk(&[1.0, 2.0]), None);
        assert_eq!(shapiro_wilk(&[5.0, 5.0, 5.0, 5.0]), None);
    }
}
