//! Derived team metrics.
//!
//! Pure functions recomputed from team contents. The engine keeps its
//! own running sums during refinement; these exist for callers that
//! want totals over an arbitrary team slice, e.g. for display.

use super::types::Rated;

/// Sum of ratings across a team.
pub fn total_power<T: Rated>(team: &[T]) -> f64 {
    team.iter().map(|e| e.power()).sum()
}

/// Absolute rating difference between two teams, full precision.
pub fn power_difference<T: Rated>(team_a: &[T], team_b: &[T]) -> f64 {
    (total_power(team_a) - total_power(team_b)).abs()
}

/// Rating difference formatted to one decimal place.
///
/// Display convenience only; comparisons inside the engine always use
/// full precision.
pub fn display_difference<T: Rated>(team_a: &[T], team_b: &[T]) -> String {
    format!("{:.1}", power_difference(team_a, team_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_power() {
        let team = [10.0, 20.5, 30.0];
        assert!((total_power(&team) - 60.5).abs() < 1e-10);
        assert_eq!(total_power::<f64>(&[]), 0.0);
    }

    #[test]
    fn test_power_difference_symmetric() {
        let a = [90.0, 10.0];
        let b = [50.0, 50.0];
        assert!((power_difference(&a, &b) - 0.0).abs() < 1e-10);

        let c = [70.0, 10.0];
        assert!((power_difference(&a, &c) - 20.0).abs() < 1e-10);
        assert!((power_difference(&c, &a) - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_display_difference_one_decimal() {
        let a = [50.25];
        let b = [50.0];
        assert_eq!(display_difference(&a, &b), "0.2");
        assert_eq!(display_difference(&a, &a), "0.0");
    }
}
