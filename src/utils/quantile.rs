use crate::models::QuantileMethod;

/// Returns the `p`-quantile of `sorted_values` (ascending), or `None` when there is nothing
/// to sample or `p` is not a number. `p` is clamped to `[0, 1]`.
pub fn quantile(sorted_values: &[f64], p: f64, method: QuantileMethod) -> Option<f64> {
    let value_count = sorted_values.len();
    if value_count == 0 || p.is_nan() {
        return None;
    }

    let rank = (value_count - 1) as f64 * p.clamp(0.0, 1.0);
    let lower_index = rank.floor() as usize;
    let lower = sorted_values[lower_index];

    match method {
        QuantileMethod::Lower => Some(lower),
        QuantileMethod::Linear => {
            let upper = sorted_values[(lower_index + 1).min(value_count - 1)];
            Some(lower + (upper - lower) * (rank - lower_index as f64))
        }
    }
}
