// SPDX-License-Identifier: MPL-2.0
//! Loading the picture shown by the zoomable view.

pub mod image;

pub use image::{load_image, sample_image, ImageData};
