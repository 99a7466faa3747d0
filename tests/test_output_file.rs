//! Writing textures to disk.

use pencil_noise::{
    create_pencil_noise, save_pencil_noise_to_png, PencilNoiseConfig, PencilNoiseError,
    PencilNoiseGenerator,
};
use tempfile::tempdir;

#[test]
fn test_saved_png_is_grayscale_and_square() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pencil_noise.png");

    let result = create_pencil_noise(48, 3, &path).unwrap();
    assert_eq!(result.data.len(), 48 * 48);

    let img = image::open(&path).unwrap();
    assert_eq!(img.color(), image::ColorType::L8);

    let gray = img.to_luma8();
    assert_eq!(gray.dimensions(), (48, 48));
    assert_eq!(gray.into_raw(), result.data);
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("texture.png");

    let small = PencilNoiseGenerator::new(PencilNoiseConfig {
        size: 8,
        num_layers: 1,
        seed: Some(1),
        ..Default::default()
    })
    .unwrap()
    .generate()
    .unwrap();
    save_pencil_noise_to_png(&small, &path).unwrap();

    let large = PencilNoiseGenerator::new(PencilNoiseConfig {
        size: 24,
        num_layers: 2,
        seed: Some(2),
        ..Default::default()
    })
    .unwrap()
    .generate()
    .unwrap();
    save_pencil_noise_to_png(&large, &path).unwrap();

    let reloaded = image::open(&path).unwrap().to_luma8();
    assert_eq!(reloaded.dimensions(), (24, 24));
    assert_eq!(reloaded.into_raw(), large.data);
}

#[test]
fn test_unwritable_path_reports_save_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("texture.png");

    let result = create_pencil_noise(8, 1, &path);
    assert!(matches!(result, Err(PencilNoiseError::ImageSaveError(_))));
}

#[test]
fn test_invalid_arguments_write_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("texture.png");

    assert!(matches!(
        create_pencil_noise(0, 5, &path),
        Err(PencilNoiseError::InvalidDimension)
    ));
    assert!(matches!(
        create_pencil_noise(16, 0, &path),
        Err(PencilNoiseError::InvalidLayerCount)
    ));
    assert!(!path.exists());
}
