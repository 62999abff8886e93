//! Train/eval pipeline assembly.
//!
//! Each experiment run builds two pipelines from the same dataset
//! statistics: training samples are mean-centered then augmented, evaluation
//! samples are only mean-centered. The mean tensor comes from one pass of
//! [`per_pixel_mean`](crate::stats::per_pixel_mean) over the un-augmented
//! training split and is closed over by the subtraction stage for the rest
//! of the run.

use crate::config::AugmentConfig;
use crate::transforms::vision::{RandomCrop, RandomHorizontalFlip, SubtractMean};
use crate::transforms::Transform;
use anyhow::Result;
use tch::Tensor;

/// Builds the training-time pipeline: mean subtraction, padded random crop,
/// then coin-flip horizontal mirror.
///
/// Augmentation draws go through the thread's RNG (see [`crate::rng`]); seed
/// it first for reproducible runs.
pub fn train_transform(
    mean: Tensor,
    config: &AugmentConfig,
) -> Result<impl Transform<Tensor, Tensor>> {
    Ok(SubtractMean::new(mean)?
        .then(RandomCrop::new(
            config.crop_height,
            config.crop_width,
            config.padding,
        )?)
        .then(RandomHorizontalFlip::new(config.flip_prob)?))
}

/// Builds the evaluation-time pipeline: mean subtraction only. Augmentation
/// never runs on evaluation samples.
pub fn eval_transform(mean: Tensor) -> Result<impl Transform<Tensor, Tensor>> {
    SubtractMean::new(mean)
}
