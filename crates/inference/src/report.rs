use serde::{Deserialize, Serialize};

/// The output of a bootstrap winrate estimation. All winrates are bb/100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootstrapResult {
    /// Observed winrate of the input sample.
    pub winrate_bb_per_100: f64,
    /// Lower bound of the percentile confidence interval.
    pub ci_lower: f64,
    /// Upper bound of the percentile confidence interval.
    pub ci_upper: f64,
    /// The confidence level the interval was built at.
    pub confidence: f64,
    /// Fraction of resampled winrates above zero.
    pub prob_profitable: f64,
    pub iterations: usize,
    pub sample_size: usize,
    /// Set when the sample is below the documented reliability minimum;
    /// the numbers are still exact, they just describe a noisy sample.
    pub low_sample: bool,
    /// The base seed actually used; feeding it back reproduces this result.
    pub seed: u64,
}
