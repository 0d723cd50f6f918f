//! Resize application.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use medio_core::{FitMode, ResizeOptions};

const FILTER: FilterType = FilterType::Lanczos3;

/// Apply resize options to a decoded image.
///
/// With both bounds set, `fit` decides how the image maps onto the box. With
/// a single bound the aspect ratio is always preserved against that bound.
/// With no bounds the image is returned unchanged.
pub fn apply_resize(img: &DynamicImage, options: ResizeOptions) -> DynamicImage {
    let (src_w, src_h) = img.dimensions();

    match (options.width, options.height) {
        (None, None) => img.clone(),
        (Some(w), Some(h)) => match options.fit {
            FitMode::Cover => img.resize_to_fill(w, h, FILTER),
            FitMode::Contain => img.resize(w, h, FILTER),
            FitMode::Inside => {
                if src_w <= w && src_h <= h {
                    img.clone()
                } else {
                    img.resize(w, h, FILTER)
                }
            }
            FitMode::Outside => {
                let scale = f64::max(w as f64 / src_w as f64, h as f64 / src_h as f64);
                let out_w = ((src_w as f64 * scale).round() as u32).max(1);
                let out_h = ((src_h as f64 * scale).round() as u32).max(1);
                img.resize_exact(out_w, out_h, FILTER)
            }
            FitMode::Fill => img.resize_exact(w, h, FILTER),
        },
        (Some(w), None) => {
            if options.fit == FitMode::Inside && src_w <= w {
                img.clone()
            } else {
                img.resize(w, u32::MAX, FILTER)
            }
        }
        (None, Some(h)) => {
            if options.fit == FitMode::Inside && src_h <= h {
                img.clone()
            } else {
                img.resize(u32::MAX, h, FILTER)
            }
        }
    }
}
