pub const MAX_SCORE: u8 = 100;

/// Min and max over the strictly positive members of `population`.
pub fn positive_range(population: &[f64]) -> Option<(f64, f64)> {
    population
        .iter()
        .copied()
        .filter(|v| *v > 0.0)
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}

pub fn normalize(value: f64, population: &[f64], invert: bool) -> u8 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }

    let Some((min, max)) = positive_range(population) else {
        return 0;
    };

    if max == min {
        return MAX_SCORE;
    }

    let ratio = if invert {
        (max - value) / (max - min)
    } else {
        (value - min) / (max - min)
    };

    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Smaller raw values score higher (e.g. time to finish a combo).
pub fn normalize_inverted(value: f64, population: &[f64]) -> u8 {
    normalize(value, population, true)
}

/// Unweighted mean rounded to the nearest integer, 0 for no scores.
pub fn mean_score(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let total: u32 = scores.iter().map(|s| u32::from(*s)).sum();
    (f64::from(total) / scores.len() as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_valued_members_are_excluded_from_window() {
        let population = [100.0, 50.0, 0.0];

        assert_eq!(normalize(100.0, &population, false), 100);
        assert_eq!(normalize(50.0, &population, false), 0);
        assert_eq!(normalize(0.0, &population, false), 0);
    }

    #[test]
    fn single_member_scores_full() {
        assert_eq!(normalize(42.0, &[42.0], false), 100);
        assert_eq!(normalize(42.0, &[42.0], true), 100);
    }

    #[test]
    fn empty_or_all_zero_population_scores_zero() {
        assert_eq!(normalize(10.0, &[], false), 0);
        assert_eq!(normalize(10.0, &[0.0, -3.0], false), 0);
    }

    #[test]
    fn non_positive_value_scores_zero_even_with_data() {
        assert_eq!(normalize(-5.0, &[1.0, 2.0], false), 0);
        assert_eq!(normalize(-5.0, &[1.0, 2.0], true), 0);
        assert_eq!(normalize(f64::NAN, &[1.0, 2.0], false), 0);
    }

    #[test]
    fn inverted_prefers_small_values() {
        let times = [1.0, 2.0, 3.0];
        assert_eq!(normalize_inverted(1.0, &times), 100);
        assert_eq!(normalize_inverted(2.0, &times), 50);
        assert_eq!(normalize_inverted(3.0, &times), 0);
    }

    #[test]
    fn rounds_to_nearest() {
        let population = [1.0, 4.0];
        // 1/3 and 2/3 of the window
        assert_eq!(normalize(2.0, &population, false), 33);
        assert_eq!(normalize(3.0, &population, false), 67);
    }

    #[test]
    fn out_of_window_values_are_clamped() {
        let population = [10.0, 20.0];
        assert_eq!(normalize(40.0, &population, false), 100);
        assert_eq!(normalize(5.0, &population, false), 0);
        assert_eq!(normalize(5.0, &population, true), 100);
    }

    #[test]
    fn positive_range_ignores_non_positive() {
        assert_eq!(positive_range(&[0.0, 3.0, -1.0, 7.0]), Some((3.0, 7.0)));
        assert_eq!(positive_range(&[0.0]), None);
    }

    #[test]
    fn mean_score_rounds() {
        assert_eq!(mean_score(&[100, 0, 0]), 33);
        assert_eq!(mean_score(&[100, 100, 0]), 67);
        assert_eq!(mean_score(&[1, 2]), 2);
        assert_eq!(mean_score(&[]), 0);
    }
}
