//! End-to-end tests for the dataset statistics pass and pipeline assembly,
//! starting from decoded images rather than pre-built tensors.

use image_prep::rng::seed_rng;
use image_prep::transforms::vision::ToTensor;
use image_prep::transforms::Transform;
use image_prep::{
    dataset_mean, eval_transform, train_transform, AugmentConfig, Dataset, ImageSample,
    InMemoryDataset,
};

use anyhow::Result;
use image::{DynamicImage, Rgb, RgbImage};
use tch::{Device, Kind, Tensor};

/// Builds a labelled dataset from uniformly coloured images.
fn dataset_from_solid_images(values: &[u8]) -> Result<InMemoryDataset> {
    let samples = values
        .iter()
        .enumerate()
        .map(|(label, &value)| {
            let mut img = RgbImage::new(32, 32);
            for pixel in img.pixels_mut() {
                *pixel = Rgb([value, value, value]);
            }
            let tensor = ToTensor.apply(DynamicImage::ImageRgb8(img))?;
            Ok(ImageSample::new(tensor, label as i64))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(InMemoryDataset::new(samples))
}

#[test]
fn test_mean_pass_over_decoded_images() -> Result<()> {
    // Pixel values 0, 102, 204 scale to 0.0, 0.4, 0.8; their mean is 0.4
    let dataset = dataset_from_solid_images(&[0, 102, 204])?;
    let mean = dataset_mean(&dataset)?;

    assert_eq!(mean.size(), vec![3, 32, 32]);
    let max_err = (mean - 0.4).abs().max().double_value(&[]);
    assert!(max_err < 1e-6);
    Ok(())
}

#[test]
fn test_mean_pass_over_empty_dataset() -> Result<()> {
    let dataset = InMemoryDataset::new(Vec::new());
    let mean = dataset_mean(&dataset)?;

    // Defined degenerate result: a tensor with zero elements, not an error
    assert_eq!(mean.size(), vec![0]);

    // The degenerate statistic cannot seed a pipeline
    assert!(eval_transform(mean).is_err());
    Ok(())
}

#[test]
fn test_train_pipeline_values_come_from_input_or_padding() -> Result<()> {
    // A constant image centered on a zero mean only contains the constant
    // and the zero padding, whatever the crop offset or flip decision.
    let constant = Tensor::ones(&[1, 32, 32], (Kind::Float, Device::Cpu))
        .f_mul_scalar(5.0)
        .unwrap();
    let zero_mean = Tensor::zeros(&[1, 32, 32], (Kind::Float, Device::Cpu));

    let config = AugmentConfig::builder().crop_size(32, 32).padding(4).build();
    let pipeline = train_transform(zero_mean, &config)?;

    seed_rng(11);
    for _ in 0..32 {
        let augmented = pipeline.apply(constant.shallow_clone())?;
        assert_eq!(augmented.size(), vec![1, 32, 32]);

        let values: Vec<f32> = augmented.reshape(&[-1]).try_into()?;
        assert!(values.iter().all(|&v| v == 5.0 || v == 0.0));
        // The window never loses more than the padding margin per axis
        let kept = values.iter().filter(|&&v| v == 5.0).count();
        assert!(kept >= 28 * 28);
    }
    Ok(())
}

#[test]
fn test_full_run_shape_contract() -> Result<()> {
    // The shapes the experiment runners rely on: mean matches the samples,
    // train and eval outputs match the inputs.
    let dataset = dataset_from_solid_images(&[10, 60, 110, 160, 210])?;
    let mean = dataset_mean(&dataset)?;
    assert_eq!(mean.size(), dataset.get(0)?.unwrap().size());

    let train = train_transform(mean.shallow_clone(), &AugmentConfig::default())?;
    let eval = eval_transform(mean)?;

    seed_rng(3);
    for sample in dataset.iter() {
        let sample = sample?;
        let input_size = sample.size();

        let centered = eval.apply(sample.image.shallow_clone())?;
        assert_eq!(centered.size(), input_size);

        let augmented = train.apply(sample.image)?;
        assert_eq!(augmented.size(), input_size);
    }
    Ok(())
}
