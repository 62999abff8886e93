use crate::sample::ImageSample;
use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;

/// A `Dataset` provides unified access to labelled image samples.
///
/// Implementations may hold everything in memory or stream lazily from an
/// external source; consumers such as the mean estimator only rely on a
/// single sequential pass through `iter()`.
///
/// All implementations must be `Send + Sync` to allow safe sharing across
/// threads owned by an external loading layer.
pub trait Dataset: Send + Sync {
    /// The iterator type produced by `iter()`.
    type Iter<'a>: Iterator<Item = Result<ImageSample>> + Send + 'a
    where
        Self: 'a;

    /// Creates an iterator over all samples in the dataset.
    fn iter(&self) -> Self::Iter<'_>;

    /// Random-access lookup by index.
    /// - In-memory datasets return `Ok(Some(&ImageSample))` or `Ok(None)` if out-of-bounds.
    /// - Streaming datasets always return `Ok(None)`.
    fn get(&self, index: usize) -> Result<Option<&ImageSample>>;

    /// Returns total number of samples.
    /// - In-memory datasets return `Some(n)`.
    /// - Streaming datasets return `None`.
    fn len(&self) -> Option<usize>;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len().map(|l| l == 0).unwrap_or(true)
    }
}

/// A dataset that stores all samples in contiguous memory with
/// atomic-reference counting (`Arc<[ImageSample]>`).
///
/// Cloning only bumps the `Arc` counter, so the same dataset can be handed
/// to the statistics pass and the training loop without copying pixels.
#[derive(Debug, Clone)]
pub struct InMemoryDataset {
    samples: Arc<[ImageSample]>,
    metadata: HashMap<String, String>,
}

impl InMemoryDataset {
    /// Creates a new in-memory dataset from a vector of samples.
    pub fn new(samples: Vec<ImageSample>) -> Self {
        Self {
            samples: samples.into(),
            metadata: HashMap::new(),
        }
    }

    /// Adds/updates metadata and returns the modified dataset.
    /// Enables chaining: `dataset.with_metadata("split", "train")`.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Returns the value of a metadata field, if it exists.
    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(|s| s.as_str())
    }
}

impl Dataset for InMemoryDataset {
    type Iter<'a> = std::iter::Map<
        std::iter::Cloned<std::slice::Iter<'a, ImageSample>>,
        fn(ImageSample) -> Result<ImageSample>,
    >;

    fn iter(&self) -> Self::Iter<'_> {
        self.samples.iter().cloned().map(Ok)
    }

    fn get(&self, index: usize) -> Result<Option<&ImageSample>> {
        Ok(self.samples.get(index))
    }

    fn len(&self) -> Option<usize> {
        Some(self.samples.len())
    }
}
