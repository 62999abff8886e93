use crate::transforms::Transform;
use anyhow::{ensure, Context, Result};
use image::{DynamicImage, GenericImageView};
use tch::{Kind, Tensor};

// ============================================================================
// ToTensor
// ============================================================================

/// Converts a decoded image to a channel-first f32 tensor in [0.0, 1.0] range.
///
/// Grayscale images produce `[1, H, W]`; RGB images `[3, H, W]`. Any other
/// colour type undergoes implicit conversion to RGB first.
///
/// # Example
/// ```ignore
/// let converter = ToTensor;
/// let tensor = converter.apply(image)?;
/// ```
#[derive(Debug)]
pub struct ToTensor;

impl ToTensor {
    /// Interleaved HWC bytes → planar CHW tensor.
    fn chw_from_interleaved(raw: &[u8], channels: i64, height: i64, width: i64) -> Tensor {
        Tensor::from_slice(raw)
            .reshape(&[height, width, channels])
            .permute(&[2, 0, 1])
    }
}

impl Transform<DynamicImage, Tensor> for ToTensor {
    fn apply(&self, img: DynamicImage) -> Result<Tensor> {
        let (width, height) = img.dimensions();
        ensure!(
            width > 0 && height > 0,
            "Image dimensions must be positive (got {}x{})",
            width,
            height
        );
        let (height, width) = (height as i64, width as i64);

        let tensor = match img {
            // Single-plane data is already in CHW order
            DynamicImage::ImageLuma8(img) => {
                Tensor::from_slice(img.as_raw()).reshape(&[1, height, width])
            }
            DynamicImage::ImageRgb8(img) => {
                Self::chw_from_interleaved(img.as_raw(), 3, height, width)
            }
            // Handle all other cases via conversion to RGB
            other => {
                let rgb = other.to_rgb8();
                Self::chw_from_interleaved(rgb.as_raw(), 3, height, width)
            }
        };

        // Scale to [0,1] range
        tensor
            .to_kind(Kind::Float)
            .f_div_scalar(255.0)
            .context("Failed to scale pixel values")
    }
}
