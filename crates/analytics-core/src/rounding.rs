//! Display rounding.
//!
//! All rounding rounds half away from zero (`f64::round`), so `0.25` at one
//! decimal becomes `0.3` and `-0.25` becomes `-0.3`.

/// Round `value` to `decimals` places, half away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// `count / total * 100`, rounded to one decimal. A zero total yields 0.0.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(count as f64 / total as f64 * 100.0, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(66.666_666, 1), 66.7);
        assert_eq!(round_to(149.46, 0), 149.0);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(2, 3), 66.7);
        assert_eq!(percentage(1, 3), 33.3);
        assert_eq!(percentage(4, 4), 100.0);
        assert_eq!(percentage(0, 0), 0.0);
    }
}
