//! GRASP configuration.

/// Configuration for the GRASP construction heuristic.
///
/// # Examples
///
/// ```
/// use mkp_primal::grasp::GraspConfig;
///
/// let config = GraspConfig::default().with_alpha(0.9);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraspConfig {
    /// Greediness parameter in `[0, 1]`.
    ///
    /// The RCL admits every candidate whose value is at least
    /// `min + alpha * (max - min)`: 1.0 restricts to maximum-value
    /// candidates, 0.0 admits the whole candidate list.
    pub alpha: f64,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self { alpha: 0.7 }
    }
}

impl GraspConfig {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.alpha) || self.alpha.is_nan() {
            return Err(format!("alpha must be in [0, 1], got {}", self.alpha));
        }
        Ok(())
    }
}
