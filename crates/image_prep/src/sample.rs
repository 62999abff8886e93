use tch::Tensor;

/// A single labelled image flowing through a preprocessing pipeline.
///
/// The image is a channel-first `[C, H, W]` float tensor; the label is the
/// integer class index assigned by the dataset. Samples are treated as
/// immutable once constructed: transforms consume a sample's tensor and
/// produce a fresh one rather than mutating in place.
#[derive(Debug)]
pub struct ImageSample {
    pub image: Tensor,
    pub label: i64,
}

/// Creates a shallow clone of the `ImageSample`
impl Clone for ImageSample {
    fn clone(&self) -> Self {
        Self {
            image: self.image.shallow_clone(),
            label: self.label,
        }
    }
}

/// Safety:
/// The `unsafe impl` here indicates we manually verified thread-safety conditions.
///
/// - The `Send` implementation is safe because:
/// 1. `tch::Tensor` is marked as `Send` in its source (see [tensor.rs])
/// 2. `i64` is trivially `Send`
///
/// - The `Sync` implementation is safe because:
/// 1. `tch::Tensor` is marked as `Sync` in its source
/// 2. Nothing in this crate mutates a sample's tensor through a shared
///    reference; transforms take ownership of their input.
///
/// [tensor.rs]: https://docs.rs/tch/latest/src/tch/wrappers/tensor.rs.html
unsafe impl Send for ImageSample {}
unsafe impl Sync for ImageSample {}

impl ImageSample {
    /// Creates a new sample from an image tensor and its class label.
    pub fn new(image: Tensor, label: i64) -> Self {
        Self { image, label }
    }

    /// Shape of the image tensor (`[C, H, W]` for pipeline inputs).
    pub fn size(&self) -> Vec<i64> {
        self.image.size()
    }
}
