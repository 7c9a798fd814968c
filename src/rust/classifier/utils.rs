/// 1 when the count is nonzero, 0 otherwise
pub(crate) fn indicator(count: u64) -> u64 {
    u64::from(count > 0)
}

/// Add-one smoothed ratio `(count + 1) / denominator`
pub(crate) fn smoothed_ratio(count: u64, denominator: u64) -> f64 {
    (count + 1) as f64 / denominator as f64
}
