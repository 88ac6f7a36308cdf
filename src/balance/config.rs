//! Balancer configuration.

/// Configuration parameters for a balance run.
///
/// # Examples
///
/// ```
/// use team_balance::balance::BalanceConfig;
///
/// let config = BalanceConfig::default().with_max_passes(16);
/// assert_eq!(config.max_passes, Some(16));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BalanceConfig {
    /// Cap on refinement passes. `None` runs to the fixed point — the
    /// strict-improvement rule already bounds the loop (the difference
    /// strictly decreases each swap and is bounded below by zero), so
    /// the cap is a hard ceiling for callers that want one, not a
    /// termination requirement. `Some(0)` returns the greedy seed
    /// unrefined.
    pub max_passes: Option<usize>,
}

impl BalanceConfig {
    /// Sets the maximum number of refinement passes.
    pub fn with_max_passes(mut self, n: usize) -> Self {
        self.max_passes = Some(n);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uncapped() {
        let config = BalanceConfig::default();
        assert!(config.max_passes.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = BalanceConfig::default().with_max_passes(3);
        assert_eq!(config.max_passes, Some(3));
    }
}
