//! End-to-end filtering of PNG files through FilterService.

mod common;

use common::fixtures;
use filterer::error::AppError;
use filterer::models::{AppConfig, FilterSelection, FilterSpec};
use filterer::services::{FilterPlan, FilterService};
use pretty_assertions::assert_eq;
use rgba_filter::{Channel, FilterError, Preset};
use tempfile::TempDir;

fn all_toggles() -> FilterSelection {
    FilterSelection {
        sharpen: true,
        sepia: true,
        grey_scale: true,
        invert: true,
    }
}

#[test]
fn test_empty_plan_is_lossless_for_non_square_image() {
    let input = fixtures::gradient_png(7, 3);
    let output = FilterService::default()
        .apply_bytes(input.clone(), &FilterPlan::default())
        .unwrap();

    let before = fixtures::decode_png(&input);
    let after = common::assert_rgba_png(&output);
    assert_eq!((after.width, after.height), (7, 3));
    assert_eq!(after.data, before.data);
}

#[test]
fn test_toggles_run_in_fixed_order() {
    // sharpen leaves a uniform image alone, then
    // sepia 50: grey 23 -> (123, 73, 0)
    // grey 50: (123 + 73 + 0) / 3 + 50 = 115
    // invert 50: 255 - 115 + 50 = 190
    let input = fixtures::solid_png(3, 2, [10, 20, 40, 255]);
    let plan = FilterPlan {
        selection: all_toggles(),
        ..Default::default()
    };
    let output = FilterService::default().apply_bytes(input, &plan).unwrap();

    common::assert_all_pixels(&common::assert_rgba_png(&output), [190, 190, 190, 255]);
}

#[test]
fn test_reversed_order_gives_different_result() {
    // invert 50 saturates everything to 255, so sepia ends at (255, 255, 205)
    let input = fixtures::solid_png(3, 2, [10, 20, 40, 255]);
    let plan = FilterPlan {
        custom: vec![
            FilterSpec::Preset(Preset::Invert50),
            FilterSpec::Preset(Preset::GreyScale50),
            FilterSpec::Preset(Preset::Sepia50),
            FilterSpec::Preset(Preset::Sharpen80),
        ],
        ..Default::default()
    };
    let output = FilterService::default().apply_bytes(input, &plan).unwrap();

    common::assert_all_pixels(&common::assert_rgba_png(&output), [255, 255, 205, 255]);
}

#[test]
fn test_sharpen_uses_whole_image_average() {
    let input = fixtures::rgba_png(2, 1, |x, _| {
        if x == 0 {
            [100, 0, 0, 255]
        } else {
            [200, 0, 0, 255]
        }
    });
    let plan = FilterPlan {
        presets: vec![Preset::Sharpen80],
        ..Default::default()
    };
    let output = FilterService::default().apply_bytes(input, &plan).unwrap();

    let decoded = common::assert_rgba_png(&output);
    assert_eq!(decoded.rgba_at(0, 0), [20, 0, 0, 255]);
    assert_eq!(decoded.rgba_at(1, 0), [255, 0, 0, 255]);
}

#[test]
fn test_sixteen_bit_greyscale_becomes_rgba8() {
    let input = fixtures::encode_png(
        2,
        2,
        png::ColorType::Grayscale,
        png::BitDepth::Sixteen,
        &[0x10, 0x00, 0x80, 0xFF, 0xFF, 0xFF, 0x00, 0x01],
    );
    let output = FilterService::default()
        .apply_bytes(input, &FilterPlan::default())
        .unwrap();

    let decoded = common::assert_rgba_png(&output);
    assert_eq!(
        decoded.data,
        vec![16, 16, 16, 255, 128, 128, 128, 255, 255, 255, 255, 255, 0, 0, 0, 255]
    );
}

#[test]
fn test_clear_alpha_makes_image_transparent() {
    let input = fixtures::gradient_png(4, 4);
    let plan = FilterPlan {
        custom: vec![FilterSpec::Clear(Channel::Alpha)],
        ..Default::default()
    };
    let output = FilterService::default().apply_bytes(input.clone(), &plan).unwrap();

    let before = fixtures::decode_png(&input);
    let after = common::assert_rgba_png(&output);
    for y in 0..4 {
        for x in 0..4 {
            let [r, g, b, _] = before.rgba_at(x, y);
            assert_eq!(after.rgba_at(x, y), [r, g, b, 0]);
        }
    }
}

#[test]
fn test_pixel_limit_from_config() {
    let config = AppConfig::from_yaml("limits:\n  max_pixels: 10\n").unwrap();
    let service = FilterService::new(&config);

    let result = service.apply_bytes(fixtures::solid_png(4, 4, [0, 0, 0, 255]), &FilterPlan::default());
    assert!(
        matches!(result, Err(AppError::Filter(FilterError::Decode(_)))),
        "got {result:?}"
    );

    let small = service.apply_bytes(fixtures::solid_png(2, 5, [0, 0, 0, 255]), &FilterPlan::default());
    assert!(small.is_ok());
}

#[test]
fn test_apply_file_with_configured_compression() {
    let dir = TempDir::new().unwrap();
    let config_path = fixtures::write_file(
        dir.path(),
        "config.yaml",
        b"output:\n  compression: best\n",
    );
    let config = AppConfig::load(Some(config_path.as_path()));
    assert_eq!(config.output.compression, filterer::models::CompressionLevel::Best);

    let input = fixtures::write_file(dir.path(), "in.png", &fixtures::solid_png(5, 3, [60, 60, 60, 255]));
    let output = dir.path().join("out.png");
    let plan = FilterPlan {
        selection: FilterSelection {
            sepia: true,
            ..Default::default()
        },
        custom: vec![FilterSpec::Clear(Channel::Blue)],
        ..Default::default()
    };

    let written = FilterService::new(&config)
        .apply_file(&input, &output, &plan)
        .unwrap();

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(written, bytes.len());
    common::assert_all_pixels(&common::assert_rgba_png(&bytes), [160, 110, 0, 255]);
}
