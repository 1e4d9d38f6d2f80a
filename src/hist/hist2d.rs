//! 2D binned aggregator.
//!
//! [`Histogram2D`] maps a stream of weighted `(x, y, weight)` samples onto a
//! fixed grid of bins and exposes per-bin summary statistics. In this crate
//! it is mostly used as a dense function-sampling grid (one fill per bin),
//! but it stays correct under denser or sparser sampling: multiple fills
//! accumulate, empty bins report NaN means.
//!
//! Out-of-range samples are never dropped silently; they are counted in the
//! externally observable underflow/overflow totals.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One axis of a histogram: `n` equal-width bins over `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinAxis {
    min: f64,
    max: f64,
    n: usize,
}

/// Classification of a coordinate against a [`BinAxis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisBin {
    Underflow,
    Bin(usize),
    Overflow,
}

impl BinAxis {
    pub fn new(min: f64, max: f64, n: usize) -> Result<Self, AppError> {
        if !(min.is_finite() && max.is_finite() && max > min) {
            return Err(AppError::new(
                2,
                format!("Invalid axis range: min={min}, max={max} (must be finite and max>min)."),
            ));
        }
        if n < 1 {
            return Err(AppError::new(2, "Axis bin count must be >= 1."));
        }
        Ok(Self { min, max, n })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn bins(&self) -> usize {
        self.n
    }

    pub fn bin_width(&self) -> f64 {
        (self.max - self.min) / self.n as f64
    }

    /// Center of bin `i`, for consumers building a color-mapped grid.
    pub fn center(&self, i: usize) -> f64 {
        self.min + (i as f64 + 0.5) * self.bin_width()
    }

    /// Classify a coordinate.
    ///
    /// Boundary rule: a coordinate at exactly `max` lands in the last bin;
    /// strictly above is overflow, strictly below `min` is underflow. NaN
    /// coordinates are routed to overflow so they stay observable.
    pub fn index(&self, x: f64) -> AxisBin {
        if x.is_nan() || x > self.max {
            return AxisBin::Overflow;
        }
        if x < self.min {
            return AxisBin::Underflow;
        }
        let i = ((x - self.min) / self.bin_width()) as usize;
        // Clamp covers both x == max and float round-up at interior edges.
        AxisBin::Bin(i.min(self.n - 1))
    }
}

/// Accumulator for one cell: weighted sum and fill count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bin2D {
    pub sum: f64,
    pub count: u64,
}

/// Fixed-resolution 2D histogram of weighted samples.
///
/// Axes are immutable after construction; the only mutation paths are
/// [`Histogram2D::fill`] and [`Histogram2D::merge`]. Reads are always
/// permitted, including between fills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram2D {
    x_axis: BinAxis,
    y_axis: BinAxis,
    /// Row-major: `bins[ix * n_y + iy]`.
    bins: Vec<Bin2D>,
    underflow: u64,
    overflow: u64,
}

impl Histogram2D {
    pub fn new(x_axis: BinAxis, y_axis: BinAxis) -> Self {
        Self {
            x_axis,
            y_axis,
            bins: vec![Bin2D::default(); x_axis.bins() * y_axis.bins()],
            underflow: 0,
            overflow: 0,
        }
    }

    pub fn x_axis(&self) -> &BinAxis {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &BinAxis {
        &self.y_axis
    }

    /// Accumulate one weighted sample.
    ///
    /// Out-of-range samples increment the underflow/overflow counters and
    /// touch no bin; when one coordinate is under and the other over, the
    /// sample counts as underflow. Never fails.
    pub fn fill(&mut self, x: f64, y: f64, weight: f64) {
        match (self.x_axis.index(x), self.y_axis.index(y)) {
            (AxisBin::Bin(ix), AxisBin::Bin(iy)) => {
                let bin = &mut self.bins[ix * self.y_axis.bins() + iy];
                bin.sum += weight;
                bin.count += 1;
            }
            (AxisBin::Underflow, _) | (_, AxisBin::Underflow) => self.underflow += 1,
            _ => self.overflow += 1,
        }
    }

    /// Mean weight in bin `(ix, iy)`, NaN when the bin is empty.
    ///
    /// # Panics
    /// Panics if `ix` or `iy` is outside the axis bin range.
    pub fn mean_at(&self, ix: usize, iy: usize) -> f64 {
        let bin = self.bin_at(ix, iy);
        if bin.count == 0 {
            f64::NAN
        } else {
            bin.sum / bin.count as f64
        }
    }

    /// Weighted sum in bin `(ix, iy)`.
    ///
    /// # Panics
    /// Panics if `ix` or `iy` is outside the axis bin range.
    pub fn sum_at(&self, ix: usize, iy: usize) -> f64 {
        self.bin_at(ix, iy).sum
    }

    /// Fill count in bin `(ix, iy)`.
    ///
    /// # Panics
    /// Panics if `ix` or `iy` is outside the axis bin range.
    pub fn count_at(&self, ix: usize, iy: usize) -> u64 {
        self.bin_at(ix, iy).count
    }

    fn bin_at(&self, ix: usize, iy: usize) -> &Bin2D {
        assert!(ix < self.x_axis.bins() && iy < self.y_axis.bins());
        &self.bins[ix * self.y_axis.bins() + iy]
    }

    /// Total number of in-range fills across all bins.
    pub fn fills(&self) -> u64 {
        self.bins.iter().map(|b| b.count).sum()
    }

    pub fn underflow_count(&self) -> u64 {
        self.underflow
    }

    pub fn overflow_count(&self) -> u64 {
        self.overflow
    }

    /// Number of bins with at least one fill.
    pub fn occupied_bins(&self) -> usize {
        self.bins.iter().filter(|b| b.count > 0).count()
    }

    /// Bin-wise accumulation of a partial histogram with identical axes.
    ///
    /// This is the reduction step for sharded parallel fills: each worker
    /// fills its own partial histogram and the partials are merged at the
    /// end, so no update is lost to unsynchronized writes.
    ///
    /// # Panics
    /// Panics if the axes differ.
    pub fn merge(&mut self, other: &Histogram2D) {
        assert_eq!(self.x_axis, other.x_axis, "merge requires identical x axes");
        assert_eq!(self.y_axis, other.y_axis, "merge requires identical y axes");
        for (a, b) in self.bins.iter_mut().zip(other.bins.iter()) {
            a.sum += b.sum;
            a.count += b.count;
        }
        self.underflow += other.underflow;
        self.overflow += other.overflow;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn unit_hist(n: usize) -> Histogram2D {
        Histogram2D::new(
            BinAxis::new(0.0, 1.0, n).unwrap(),
            BinAxis::new(0.0, 1.0, n).unwrap(),
        )
    }

    #[test]
    fn boundary_scenario_3x3() {
        let mut h = Histogram2D::new(
            BinAxis::new(0.0, 1.5, 3).unwrap(),
            BinAxis::new(0.0, 1.5, 3).unwrap(),
        );
        h.fill(0.0, 0.0, 5.0);
        h.fill(1.5, 1.5, 3.0); // exactly on the upper edge: last bin
        h.fill(2.0, 2.0, 1.0); // past the edge: overflow

        assert_eq!(h.sum_at(0, 0), 5.0);
        assert_eq!(h.sum_at(2, 2), 3.0);
        assert_eq!(h.overflow_count(), 1);
        assert_eq!(h.underflow_count(), 0);
        assert_eq!(h.fills(), 2);
    }

    #[test]
    fn double_fill_accumulates() {
        let mut h = unit_hist(4);
        h.fill(0.3, 0.6, 2.0);
        h.fill(0.3, 0.6, 4.0);
        assert_eq!(h.sum_at(1, 2), 6.0);
        assert_eq!(h.count_at(1, 2), 2);
        assert_eq!(h.mean_at(1, 2), 3.0);
    }

    #[test]
    fn empty_bin_mean_is_nan() {
        let h = unit_hist(2);
        assert!(h.mean_at(0, 0).is_nan());
    }

    #[test]
    fn underflow_wins_over_overflow() {
        let mut h = unit_hist(2);
        h.fill(-1.0, 2.0, 1.0);
        assert_eq!(h.underflow_count(), 1);
        assert_eq!(h.overflow_count(), 0);
    }

    #[test]
    fn nan_coordinate_is_overflow() {
        let mut h = unit_hist(2);
        h.fill(f64::NAN, 0.5, 1.0);
        assert_eq!(h.overflow_count(), 1);
        assert_eq!(h.fills(), 0);
    }

    #[test]
    fn fill_count_is_conserved() {
        // Random in- and out-of-range fills: every sample must land in a
        // bin or in the under/overflow counters, never nowhere.
        let mut rng = StdRng::seed_from_u64(7);
        let mut h = unit_hist(8);
        let n = 10_000u64;
        for _ in 0..n {
            let x = rng.gen_range(-0.5..1.5);
            let y = rng.gen_range(-0.5..1.5);
            h.fill(x, y, rng.gen_range(-1.0..1.0));
        }
        assert_eq!(h.fills() + h.underflow_count() + h.overflow_count(), n);
    }

    #[test]
    fn merge_equals_sequential_fill() {
        let mut rng = StdRng::seed_from_u64(11);
        let samples: Vec<(f64, f64, f64)> = (0..1000)
            .map(|_| {
                (
                    rng.gen_range(-0.2..1.2),
                    rng.gen_range(-0.2..1.2),
                    rng.gen_range(0.0..10.0),
                )
            })
            .collect();

        let mut whole = unit_hist(5);
        for &(x, y, w) in &samples {
            whole.fill(x, y, w);
        }

        let mut left = unit_hist(5);
        let mut right = unit_hist(5);
        for &(x, y, w) in &samples[..500] {
            left.fill(x, y, w);
        }
        for &(x, y, w) in &samples[500..] {
            right.fill(x, y, w);
        }
        left.merge(&right);

        assert_eq!(left.underflow_count(), whole.underflow_count());
        assert_eq!(left.overflow_count(), whole.overflow_count());
        for ix in 0..5 {
            for iy in 0..5 {
                assert_eq!(left.count_at(ix, iy), whole.count_at(ix, iy));
                // Sums are accumulated in a different association order, so
                // allow float round-off.
                let (a, b) = (left.sum_at(ix, iy), whole.sum_at(ix, iy));
                assert!((a - b).abs() <= 1e-9 * b.abs().max(1.0), "bin ({ix},{iy}): {a} vs {b}");
            }
        }
    }
}
