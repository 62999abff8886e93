use crate::rng::{worker_gen_bool, worker_gen_range};
use crate::transforms::Transform;
use anyhow::{ensure, Context, Result};
use tch::Tensor;

// ============================================================================
// RandomCrop
// ============================================================================

/// Zero-pads the spatial axes by a fixed margin, then crops a window of the
/// configured size at a per-call random offset.
///
/// For padding `P` and a `[C, H, W]` input, the padded tensor is
/// `[C, H+2P, W+2P]` and the row/column offsets are drawn independently and
/// uniformly from the inclusive range `[0, 2P]`, so the window always stays
/// inside the padded area. The channel axis is never padded. Offsets are
/// redrawn on every call.
///
/// Inputs smaller than the configured crop size are not validated; the
/// observed pipelines feed fixed 32×32 tensors.
///
/// # Example
/// ```ignore
/// let crop = RandomCrop::new(32, 32, 4)?;
/// let cropped = crop.apply(tensor)?; // same [C, 32, 32] shape, shifted content
/// ```
#[derive(Debug)]
pub struct RandomCrop {
    height: i64,
    width: i64,
    padding: i64,
}

impl RandomCrop {
    pub fn new(height: i64, width: i64, padding: i64) -> Result<Self> {
        ensure!(
            height > 0 && width > 0,
            "Crop size must be positive (got {}x{})",
            height,
            width
        );
        ensure!(padding >= 0, "Padding must be non-negative (got {})", padding);
        Ok(Self {
            height,
            width,
            padding,
        })
    }

    /// Embeds the input in a zero tensor padded by the margin on each
    /// spatial side.
    fn zero_pad(&self, tensor: &Tensor) -> Result<Tensor> {
        let (channels, height, width) = tensor
            .size3()
            .context("Input must be a 3D [C, H, W] tensor")?;

        let padded = Tensor::zeros(
            &[
                channels,
                height + 2 * self.padding,
                width + 2 * self.padding,
            ],
            (tensor.kind(), tensor.device()),
        );
        let mut interior = padded.narrow(1, self.padding, height).narrow(2, self.padding, width);
        interior.copy_(tensor);
        Ok(padded)
    }

    /// Copies the crop window starting at `(top, left)` out of the padded
    /// tensor into freshly allocated storage.
    fn crop_at(&self, padded: &Tensor, top: i64, left: i64) -> Tensor {
        let window = padded.narrow(1, top, self.height).narrow(2, left, self.width);
        let mut output = window.zeros_like();
        output.copy_(&window);
        output
    }
}

impl Transform<Tensor, Tensor> for RandomCrop {
    fn apply(&self, tensor: Tensor) -> Result<Tensor> {
        let padded = self.zero_pad(&tensor)?;

        let top = worker_gen_range(0..=2 * self.padding);
        let left = worker_gen_range(0..=2 * self.padding);
        Ok(self.crop_at(&padded, top, left))
    }
}

// ============================================================================
// RandomHorizontalFlip
// ============================================================================

/// Randomly mirrors `[C, H, W]` image tensors along the column axis during
/// training.
///
/// Only the last (width) axis is reversed; rows and channels keep their
/// order. The flip decision is redrawn on every call.
///
/// # Example
/// ```ignore
/// let flip = RandomHorizontalFlip::new(0.5)?; // 50% flip chance
/// let augmented = flip.apply(tensor)?;
/// ```
#[derive(Debug)]
pub struct RandomHorizontalFlip {
    p: f64,
}

impl RandomHorizontalFlip {
    pub fn new(p: f64) -> Result<Self> {
        ensure!(
            (0.0..=1.0).contains(&p),
            "Probability must be in [0.0, 1.0] range (got {})",
            p
        );
        Ok(Self { p })
    }
}

impl Transform<Tensor, Tensor> for RandomHorizontalFlip {
    fn apply(&self, tensor: Tensor) -> Result<Tensor> {
        let result = match self.p {
            // Fast path: never flip
            0.0 => tensor,

            // Fast path: always flip
            1.0 => tensor.flip([2]),

            // Random flip based on probability
            _ => {
                if worker_gen_bool(self.p) {
                    tensor.flip([2])
                } else {
                    tensor
                }
            }
        };

        Ok(result)
    }
}
