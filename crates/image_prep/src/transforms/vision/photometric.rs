use crate::transforms::Transform;
use anyhow::{ensure, Result};
use tch::Tensor;

// ============================================================================
// SubtractMean
// ============================================================================

/// Centers image tensors by subtracting a precomputed per-pixel mean image.
///
/// Unlike channel-wise normalization, the mean here is a full `[C, H, W]`
/// image, so every pixel position has its own offset. It is produced once per
/// run by [`per_pixel_mean`](crate::stats::per_pixel_mean) from a pass over
/// the un-augmented dataset and treated as a read-only constant afterwards.
///
/// # Mathematical Operation:
/// ```text
/// output[c,h,w] = input[c,h,w] - mean[c,h,w]
/// ```
///
/// # Example
/// ```ignore
/// let center = SubtractMean::new(mean)?;
/// let centered = center.apply(tensor)?;
/// ```
#[derive(Debug)]
pub struct SubtractMean {
    mean: Tensor,
}

impl SubtractMean {
    /// Creates the centering transform from a `[C, H, W]` mean image.
    ///
    /// The zero-element tensor produced by a mean pass over an empty dataset
    /// is rejected here, at construction, rather than surfacing later as a
    /// broadcast failure on the first sample.
    pub fn new(mean: Tensor) -> Result<Self> {
        ensure!(
            mean.size().len() == 3,
            "Per-pixel mean must be a [C, H, W] tensor (got shape {:?})",
            mean.size()
        );
        Ok(Self { mean })
    }
}

/// Safety:
/// The `unsafe impl` here indicates we manually verified thread-safety conditions.
/// `SubtractMean` only ever reads `mean` after construction, and
/// `tch::Tensor` is marked `Send`/`Sync` in its source (see [tensor.rs]);
/// concurrent `apply` calls perform read-only tensor arithmetic.
///
/// [tensor.rs]: https://docs.rs/tch/latest/src/tch/wrappers/tensor.rs.html
unsafe impl Send for SubtractMean {}
unsafe impl Sync for SubtractMean {}

impl Transform<Tensor, Tensor> for SubtractMean {
    fn apply(&self, tensor: Tensor) -> Result<Tensor> {
        ensure!(
            tensor.size() == self.mean.size(),
            "Input shape {:?} does not match mean shape {:?}",
            tensor.size(),
            self.mean.size()
        );
        Ok(tensor - &self.mean)
    }
}
