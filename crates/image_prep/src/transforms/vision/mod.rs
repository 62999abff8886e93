//! Vision transforms for image preprocessing and augmentation.
//!
//! # Module Organization
//!
//! ```text
//! transforms/vision/
//! ├── conversion.rs    → Format conversions (image → tensor)
//! ├── photometric.rs   → Pixel statistics (per-pixel mean subtraction)
//! └── augmentation.rs  → Training-time augmentation (padded crop, flip)
//! ```
//!
//! # Quick Start
//!
//! All transforms are re-exported at the module level for convenient access:
//!
//! ```ignore
//! use crate::transforms::Transform;
//! use crate::transforms::vision::{RandomCrop, RandomHorizontalFlip, SubtractMean};
//!
//! // Training pipeline: center on the dataset mean, then augment
//! let pipeline = SubtractMean::new(mean)?
//!     .then(RandomCrop::new(32, 32, 4)?)
//!     .then(RandomHorizontalFlip::new(0.5)?);
//! ```

pub mod augmentation;
pub mod conversion;
pub mod photometric;

pub use augmentation::{RandomCrop, RandomHorizontalFlip};
pub use conversion::ToTensor;
pub use photometric::SubtractMean;
