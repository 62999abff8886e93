//! Configuration for the training-time augmentation pipeline.
//!
//! The `AugmentConfig` struct stores the parameters that control how
//! training samples are augmented after mean subtraction.
//!
//! Example:
//! ```ignore
//! let config = AugmentConfig::builder()
//!     .crop_size(32, 32)
//!     .padding(4)
//!     .flip_prob(0.5)
//!     .build();
//! ```

/// Augmentation settings for the training pipeline.
///
/// Defaults preserve the configuration the experiment runs use on 32×32
/// inputs: margin-4 zero padding and a fair-coin horizontal flip.
#[derive(Debug, Clone)]
pub struct AugmentConfig {
    /// Height of the crop window (matches the input height)
    pub crop_height: i64,
    /// Width of the crop window (matches the input width)
    pub crop_width: i64,
    /// Zero-padding margin added to each spatial side before cropping
    pub padding: i64,
    /// Probability of mirroring the crop along the column axis
    pub flip_prob: f64,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            crop_height: 32,
            crop_width: 32,
            padding: 4,
            flip_prob: 0.5,
        }
    }
}

impl AugmentConfig {
    pub fn builder() -> AugmentConfigBuilder {
        AugmentConfigBuilder::default()
    }
}

/// Builder for AugmentConfig with method chaining
#[derive(Default)]
pub struct AugmentConfigBuilder {
    config: AugmentConfig,
}

impl AugmentConfigBuilder {
    /// Set the crop window size (must match the pipeline's input size)
    pub fn crop_size(mut self, height: i64, width: i64) -> Self {
        self.config.crop_height = height;
        self.config.crop_width = width;
        self
    }

    /// Set the zero-padding margin per spatial side
    pub fn padding(mut self, margin: i64) -> Self {
        self.config.padding = margin;
        self
    }

    /// Set the horizontal flip probability.
    ///
    /// Values outside [0.0, 1.0] are rejected when the pipeline is built.
    pub fn flip_prob(mut self, p: f64) -> Self {
        self.config.flip_prob = p;
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> AugmentConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_observed_configuration() {
        let config = AugmentConfig::default();

        assert_eq!(config.crop_height, 32);
        assert_eq!(config.crop_width, 32);
        assert_eq!(config.padding, 4);
        assert_eq!(config.flip_prob, 0.5);
    }

    #[test]
    fn test_builder_overrides() {
        let config = AugmentConfig::builder()
            .crop_size(28, 28)
            .padding(2)
            .flip_prob(0.0)
            .build();

        assert_eq!(config.crop_height, 28);
        assert_eq!(config.crop_width, 28);
        assert_eq!(config.padding, 2);
        assert_eq!(config.flip_prob, 0.0);
    }
}
