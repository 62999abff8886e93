use crate::dataset::Dataset;
use crate::sample::ImageSample;
use anyhow::{ensure, Context, Result};
use tch::{Device, Kind, Tensor};

/// Computes the elementwise mean image over one full pass of a sample
/// sequence.
///
/// The accumulator is shaped like the first sample, so the image shape is
/// inferred rather than assumed. The pass is streaming: one running sum and
/// a count, never the whole dataset in memory, so the extra storage stays
/// bounded to one image-sized buffer regardless of dataset size.
///
/// An empty sequence yields an empty (zero-element) tensor rather than an
/// error. Callers composing a pipeline must treat that result as "no
/// statistics available"; [`SubtractMean`](crate::transforms::vision::SubtractMean)
/// rejects it at construction.
///
/// Samples after the first that differ in shape are a hard error.
pub fn per_pixel_mean<I>(samples: I) -> Result<Tensor>
where
    I: IntoIterator<Item = Result<ImageSample>>,
{
    let mut iter = samples.into_iter();
    let first = match iter.next() {
        None => return Ok(Tensor::zeros(&[0], (Kind::Float, Device::Cpu))),
        Some(sample) => sample.context("Failed to read first sample of the mean pass")?,
    };

    let mut total = first.image.zeros_like() + &first.image;
    let mut count = 1i64;

    for sample in iter {
        let sample =
            sample.with_context(|| format!("Failed to read sample {} of the mean pass", count))?;
        ensure!(
            sample.image.size() == total.size(),
            "Sample {} has shape {:?}, expected {:?}",
            count,
            sample.image.size(),
            total.size()
        );
        total = total + &sample.image;
        count += 1;
    }

    total
        .f_div_scalar(count as f64)
        .context("Failed to divide the accumulated sum by the sample count")
}

/// Convenience wrapper running the mean pass over a [`Dataset`].
pub fn dataset_mean<D: Dataset>(dataset: &D) -> Result<Tensor> {
    per_pixel_mean(dataset.iter())
}
