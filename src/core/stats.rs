//! Descriptive statistics over minute amounts.
//!
//! Moments are accumulated in one pass with the incremental update of
//! Terriberry, then turned into population (biased) estimators.

use std::cmp::Ordering;

/// Central moment sums of a sample.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Moments {
    pub n: f64,
    pub mean: f64,
    pub m2: f64,
    pub m3: f64,
    pub m4: f64,
}

impl Moments {
    pub fn of(values: &[f64]) -> Self {
        let mut acc = Moments::default();
        for &x in values {
            acc.push(x);
        }
        acc
    }

    pub fn push(&mut self, x: f64) {
        let n1 = self.n;
        self.n += 1.0;
        let n = self.n;
        let delta = x - self.mean;
        let delta_n = delta / n;
        let delta_n2 = delta_n * delta_n;
        let term1 = delta * delta_n * n1;

        self.m4 += term1 * delta_n2 * (n * n - 3.0 * n + 3.0) + 6.0 * delta_n2 * self.m2
            - 4.0 * delta_n * self.m3;
        self.m3 += term1 * delta_n * (n - 2.0) - 3.0 * delta_n * self.m2;
        self.m2 += term1;
        self.mean += delta_n;
    }

    /// Divides by `n`, not `n - 1`.
    pub fn population_variance(&self) -> f64 {
        if self.n == 0.0 { 0.0 } else { self.m2 / self.n }
    }

    pub fn skewness(&self) -> Option<f64> {
        if self.n < 2.0 || self.m2 <= 0.0 {
            return None;
        }
        Some(self.n.sqrt() * self.m3 / self.m2.powf(1.5))
    }

    /// Fisher (excess) kurtosis: 0 for a normal distribution.
    pub fn excess_kurtosis(&self) -> Option<f64> {
        if self.n < 2.0 || self.m2 <= 0.0 {
            return None;
        }
        Some(self.n * self.m4 / (self.m2 * self.m2) - 3.0)
    }
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// 0.0 for an empty sample; the two middle values are averaged for an even
/// count.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

pub fn population_std_dev(values: &[f64]) -> f64 {
    Moments::of(values).population_variance().sqrt()
}

pub fn skewness(values: &[f64]) -> Option<f64> {
    Moments::of(values).skewness()
}

pub fn excess_kurtosis(values: &[f64]) -> Option<f64> {
    Moments::of(values).excess_kurtosis()
}
