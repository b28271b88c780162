//! Equal-width histograms.

use crate::error::{MathError, MathResult};

/// One histogram bin, `[lower, upper)`; the last bin also includes its
/// upper edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    /// Lower edge.
    pub lower: f64,
    /// Upper edge.
    pub upper: f64,
    /// Number of observations in the bin.
    pub count: usize,
}

/// Equal-width histogram over the sample range.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: Vec<Bin>,
    total: usize,
}

impl Histogram {
    /// Bins `data` into `bins` equal-width buckets spanning `[min, max]`.
    ///
    /// A constant sample gets a unit-wide range centred on its value so every
    /// bin has positive width.
    pub fn new(data: &[f64], bins: usize) -> MathResult<Self> {
        if bins == 0 {
            return Err(MathError::invalid_input("bin count must be positive"));
        }
        if data.is_empty() {
            return Err(MathError::insufficient_data(1, 0));
        }
        if let Some((index, &value)) = data.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(MathError::NonFinite { index, value });
        }

        let (mut lo, mut hi) = data
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)));
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let mut out: Vec<Bin> = (0..bins)
            .map(|i| Bin {
                lower: lo + i as f64 * width,
                upper: if i + 1 == bins { hi } else { lo + (i + 1) as f64 * width },
                count: 0,
            })
            .collect();

        for &x in data {
            let idx = (((x - lo) / width).floor() as usize).min(bins - 1);
            out[idx].count += 1;
        }

        Ok(Self {
            bins: out,
            total: data.len(),
        })
    }

    /// The bins, lowest first.
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Number of observations binned.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Width of every bin.
    pub fn bin_width(&self) -> f64 {
        self.bins[0].upper - self.bins[0].lower
    }

    /// Probability density per bin (integrates to one).
    pub fn densities(&self) -> Vec<f64> {
        let norm = self.total as f64 * self.bin_width();
        self.bins.iter().map(|b| b.count as f64 / norm).collect()
    }

    /// Index of the bin that holds `x`, clamping values outside the range.
    pub fn bin_index(&self, x: f64) -> usize {
        let lo = self.bins[0].lower;
        let idx = ((x - lo) / self.bin_width()).floor();
        if idx < 0.0 {
            0
        } else {
            (idx as usize).min(self.bins.len() - 1)
        }
    }
}
