//! Data preparation for image-classification experiment runs.
//!
//! Provides the two pieces each run needs before training starts: a
//! streaming per-pixel mean pass over the dataset, and the train/eval
//! transform pipelines built from that statistic (mean subtraction, plus
//! padded random crop and horizontal flip on the training path).

pub mod config;
pub mod dataset;
pub mod pipeline;
pub mod rng;
pub mod sample;
pub mod stats;
pub mod transforms;

pub use config::AugmentConfig;
pub use dataset::{Dataset, InMemoryDataset};
pub use pipeline::{eval_transform, train_transform};
pub use sample::ImageSample;
pub use stats::{dataset_mean, per_pixel_mean};
