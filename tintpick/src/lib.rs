//! Extract a palette of dominant colors from an image by k-means clustering in RGB space.
//!
//! # Examples
//!
//! ## Read an image file and get its 4 dominant colors.
//!
//! ```no_run
//! let image = image::open("some image").unwrap().into_rgba8();
//! let palette = tintpick::from_image(&image, 4, 0).unwrap();
//! ```
//!
//! ## Sample once and extract palettes of different sizes.
//!
//! ```no_run
//! let image = image::open("some image").unwrap().into_rgba8();
//! let samples = tintpick::sample_pixels(image.as_raw(), tintpick::DEFAULT_STRIDE)
//! 	.collect::<Vec<_>>();
//!
//! let small = tintpick::from_samples(&samples, 4, 0).unwrap();
//! let large = tintpick::from_samples(&samples, 16, 0).unwrap();
//! ```
//!
//! ## Look up the exact color under a pixel coordinate.
//!
//! ```no_run
//! let image = image::open("some image").unwrap().into_rgba8();
//! let (width, height) = image.dimensions();
//! let color = tintpick::color_at(image.as_raw(), width, height, 120, 45);
//! ```
//!
//! # Arguments
//!
//! ## K
//!
//! This is the number of palette colors to find.
//!
//! 4 to 16 is most likely the range you want.
//!
//! If the image yields fewer samples than `k`, the palette is clamped to the
//! number of samples, so the returned palette can be shorter than `k`.
//! A `k` of zero is rejected with [`ExtractError::ZeroColorCount`].
//!
//! ## Seed
//!
//! This is the value used to seed the random number generator which is used to
//! choose the initial centroids.
//!
//! Provide any arbitrary value like `0`, `42`, or `123456789`.
//! The same buffer, `k`, and seed always produce the same palette.
//!
//! ## Stride
//!
//! This is the byte step between sampled pixels, controlling sampling density.
//!
//! The default of 40 bytes samples every 10th RGBA pixel, which keeps the
//! working set small while still covering the whole image. Lower strides
//! sample more pixels for higher fidelity at the cost of running time.

#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::cargo)]
#![warn(clippy::use_debug, clippy::dbg_macro, clippy::todo, clippy::unimplemented)]
#![warn(clippy::unwrap_used, clippy::unwrap_in_result)]
#![warn(clippy::unneeded_field_pattern, clippy::rest_pat_in_fully_bound_structs)]
#![warn(clippy::unnecessary_self_imports)]
#![warn(clippy::str_to_string, clippy::string_to_string, clippy::string_slice)]
#![warn(missing_docs, clippy::missing_docs_in_private_items, rustdoc::all)]
#![warn(clippy::float_cmp_const, clippy::lossy_float_literal)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::enum_glob_use)]
#![allow(clippy::unreadable_literal)]

use image::RgbaImage;
use palette::Srgb;
use std::fmt::{self, Display};

mod hex;
mod kmeans;
mod lookup;
mod sample;

pub use hex::{hex, parse_hex, ParseHexError};
pub use lookup::{color_at, from_packed_bgr};
pub use sample::{sample_pixels, DEFAULT_STRIDE};

/// Error cases for invalid extraction arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
	/// The requested number of palette colors was zero
	ZeroColorCount,
}

impl Display for ExtractError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			ExtractError::ZeroColorCount => write!(f, "The number of palette colors must be at least 1"),
		}
	}
}

impl std::error::Error for ExtractError {}

/// Extracts the dominant colors of a decoded RGBA8 image.
///
/// See the crate documentation for examples and information on each argument.
pub fn from_image(image: &RgbaImage, k: u8, seed: u64) -> Result<Vec<Srgb<u8>>, ExtractError> {
	from_rgba(image.as_raw(), k, seed)
}

/// Extracts the dominant colors of a raw RGBA8 pixel buffer.
///
/// The buffer is subsampled with [`DEFAULT_STRIDE`] and then clustered.
/// An empty or near-empty buffer gives an empty palette, not an error.
///
/// See the crate documentation for examples and information on each argument.
pub fn from_rgba(pixels: &[u8], k: u8, seed: u64) -> Result<Vec<Srgb<u8>>, ExtractError> {
	let samples = sample_pixels(pixels, DEFAULT_STRIDE).collect::<Vec<_>>();
	from_samples(&samples, k, seed)
}

/// Extracts the dominant colors of an already sampled set of pixels.
///
/// Sampling a very large buffer is the most memory hungry step,
/// so use this function if you need to extract palettes of several sizes from the same image.
/// This function allows you to reuse the samples from [`sample_pixels`],
/// whereas [`from_rgba`] must resample the buffer every time.
///
/// See the crate documentation for examples and information on each argument.
pub fn from_samples(samples: &[Srgb<u8>], k: u8, seed: u64) -> Result<Vec<Srgb<u8>>, ExtractError> {
	if k == 0 {
		return Err(ExtractError::ZeroColorCount);
	}

	Ok(kmeans::run(samples, k, seed))
}

#[cfg(test)]
mod tests {
	use super::*;

	/// An opaque RGBA8 buffer holding `count` copies of the given color
	fn uniform_buffer(count: usize, color: [u8; 3]) -> Vec<u8> {
		let mut pixels = Vec::with_capacity(count * 4);
		for _ in 0..count {
			pixels.extend_from_slice(&[color[0], color[1], color[2], 255]);
		}
		pixels
	}

	#[test]
	fn zero_color_count_is_rejected_before_sampling() {
		let pixels = uniform_buffer(100, [1, 2, 3]);
		assert_eq!(from_rgba(&pixels, 0, 0), Err(ExtractError::ZeroColorCount));
		assert_eq!(from_samples(&[], 0, 0), Err(ExtractError::ZeroColorCount));
	}

	#[test]
	fn empty_buffer_gives_empty_palette() {
		for k in [1, 4, 255] {
			assert_eq!(from_rgba(&[], k, 0), Ok(Vec::new()));
		}
	}

	#[test]
	fn buffer_shorter_than_stride_still_yields_its_first_sample() {
		// A single RGBA pixel is enough for one sample at offset 0
		let palette = from_rgba(&[10, 20, 30, 255], 4, 0).expect("k is positive");
		assert_eq!(palette, vec![Srgb::new(10, 20, 30)]);
	}

	#[test]
	fn palette_is_clamped_to_sample_count() {
		// 40 pixels sampled every 10th leaves 4 samples
		let pixels = uniform_buffer(40, [200, 100, 50]);
		let palette = from_rgba(&pixels, 255, 0).expect("k is positive");
		assert_eq!(palette.len(), 4);
	}

	#[test]
	fn uniform_image_collapses_to_its_sole_color() {
		let pixels = uniform_buffer(1000, [10, 20, 30]);
		for k in [1, 3, 8] {
			let palette = from_rgba(&pixels, k, 0).expect("k is positive");
			assert_eq!(palette.len(), usize::from(k));
			assert!(palette.iter().all(|&color| color == Srgb::new(10, 20, 30)));
		}
	}

	#[test]
	fn same_seed_gives_same_palette() {
		let mut pixels = uniform_buffer(500, [255, 0, 0]);
		pixels.extend(uniform_buffer(500, [0, 0, 255]));

		let first = from_rgba(&pixels, 4, 123456789).expect("k is positive");
		let second = from_rgba(&pixels, 4, 123456789).expect("k is positive");
		assert_eq!(first, second);
	}

	#[test]
	fn two_color_image_separates_into_both_colors() {
		let mut pixels = uniform_buffer(500, [255, 0, 0]);
		pixels.extend(uniform_buffer(500, [0, 0, 255]));

		let palette = from_rgba(&pixels, 2, 0).expect("k is positive");
		assert_eq!(palette.len(), 2);

		// Initialization order is random, so compare as a set
		let near = |color: Srgb<u8>, expected: [u8; 3]| {
			color.red.abs_diff(expected[0]) <= 5
				&& color.green.abs_diff(expected[1]) <= 5
				&& color.blue.abs_diff(expected[2]) <= 5
		};
		assert!(palette.iter().any(|&color| near(color, [255, 0, 0])));
		assert!(palette.iter().any(|&color| near(color, [0, 0, 255])));
	}

	#[test]
	fn image_entry_point_matches_raw_buffer_entry_point() {
		let pixels = uniform_buffer(64, [9, 8, 7]);
		let image = RgbaImage::from_raw(8, 8, pixels.clone()).expect("dimensions match buffer");
		assert_eq!(from_image(&image, 3, 7), from_rgba(&pixels, 3, 7));
	}
}
