//! Differential sweep over the `u32` range: render each value as canonical
//! decimal, parse it back with a [`Strategy`], and compare.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::{ParseError, Strategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    /// Distance between consecutive checked values. `0` is treated as `1`.
    pub stride: u32,
    /// How many mismatches to keep in [`SweepReport::samples`].
    pub sample_limit: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            stride: 1,
            sample_limit: 16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub expected: u32,
    pub actual: Result<u32, ParseError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub checked: u64,
    pub mismatched: u64,
    /// Up to `sample_limit` mismatches, sorted by value. Which ones are kept
    /// depends on how the work was split across threads.
    pub samples: Vec<Mismatch>,
}

impl SweepReport {
    pub fn is_clean(&self) -> bool {
        self.mismatched == 0
    }

    fn record(mut self, strategy: Strategy, value: u32, limit: usize) -> Self {
        let mut buf = itoa::Buffer::new();
        let actual = strategy.parse_u32(buf.format(value).as_bytes());

        self.checked += 1;
        if actual != Ok(value) {
            self.mismatched += 1;
            if self.samples.len() < limit {
                self.samples.push(Mismatch {
                    expected: value,
                    actual,
                });
            }
        }
        self
    }

    fn merge(mut self, other: SweepReport, limit: usize) -> Self {
        self.checked += other.checked;
        self.mismatched += other.mismatched;

        let room = limit.saturating_sub(self.samples.len());
        self.samples.extend(other.samples.into_iter().take(room));
        self
    }
}

/// Checks `strategy` against every `stride`-th value of `0..=u32::MAX`.
/// `u32::MAX` is always included, even when the stride steps over it.
pub fn sweep_u32(strategy: Strategy, config: &SweepConfig) -> SweepReport {
    let stride = u64::from(config.stride.max(1));
    let limit = config.sample_limit;
    let max = u64::from(u32::MAX);
    let steps = max / stride;

    info!(%strategy, stride, "sweeping 0...{max}");

    let mut report = (0..=steps)
        .into_par_iter()
        .map(|step| (step * stride) as u32)
        .fold(SweepReport::default, |report, value| {
            report.record(strategy, value, limit)
        })
        .reduce(SweepReport::default, |lhs, rhs| lhs.merge(rhs, limit));

    if max % stride != 0 {
        report = report.record(strategy, u32::MAX, limit);
    }

    report.samples.sort_by_key(|mismatch| mismatch.expected);

    debug!(
        %strategy,
        checked = report.checked,
        mismatched = report.mismatched,
        "sweep finished"
    );

    report
}
