//! Extract a palette of dominant colors from an image by k-means clustering in RGB space.

#![deny(unsafe_code, unsafe_op_in_unsafe_fn)]
#![warn(
	clippy::pedantic,
	clippy::cargo,
	clippy::use_debug,
	clippy::dbg_macro,
	clippy::todo,
	clippy::unimplemented,
	clippy::unwrap_used,
	clippy::unwrap_in_result,
	clippy::unneeded_field_pattern,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::unnecessary_self_imports,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::string_slice,
	missing_docs,
	clippy::missing_docs_in_private_items,
	rustdoc::all,
	clippy::float_cmp_const,
	clippy::lossy_float_literal
)]
#![allow(
	clippy::doc_markdown,
	clippy::module_name_repetitions,
	clippy::many_single_char_names,
	clippy::missing_panics_doc,
	clippy::unreadable_literal
)]

mod cli;

#[allow(clippy::wildcard_imports)]
use cli::*;

use std::{
	fmt::{self, Display},
	path::PathBuf,
	process::ExitCode,
	time::Instant,
};

use clap::Parser;
use colored::Colorize;
use image::RgbaImage;
use palette::Srgb;

/// Record the running time of a function and print the elapsed time
macro_rules! time {
	($name: literal, $verbose: expr, $func_call: expr) => {{
		let start = Instant::now();
		let result = $func_call;
		if $verbose {
			println!("{} took {}ms", $name, start.elapsed().as_millis());
		}
		result
	}};
}

/// Error cases for loading an image and reading its colors
#[derive(Debug)]
enum CliError {
	/// Failed to read or decode the image file
	ImageLoad(image::ImageError),
	/// The extraction arguments were invalid
	Extract(tintpick::ExtractError),
	/// The requested coordinate was outside the image
	OutOfBounds {
		/// Requested coordinate
		x: u32,
		/// Requested coordinate
		y: u32,
		/// Image extents
		width: u32,
		/// Image extents
		height: u32,
	},
}

impl Display for CliError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			CliError::ImageLoad(e) => write!(f, "Failed to load the image file: {e}"),
			CliError::Extract(e) => write!(f, "{e}"),
			CliError::OutOfBounds { x, y, width, height } => {
				write!(f, "({x},{y}) is outside the {width}x{height} image")
			},
		}
	}
}

fn main() -> ExitCode {
	let options = Options::parse();

	let result = run(&options);

	// Returning Result<_> uses Debug printing instead of Display
	if let Err(e) = result {
		eprintln!("{e}");
		ExitCode::FAILURE
	} else {
		ExitCode::SUCCESS
	}
}

/// Load the image, then print either its palette or the color at the requested coordinate
fn run(options: &Options) -> Result<(), CliError> {
	let image = time!("Image loading", options.verbose, load_image(&options.image))?;

	match options.at {
		Some((x, y)) => print_color_at(&image, x, y, options),
		None => extract_and_print_palette(&image, options),
	}
}

/// Load the image at the given path and convert it to RGBA8
fn load_image(path: &PathBuf) -> Result<RgbaImage, CliError> {
	image::open(path)
		.map(image::DynamicImage::into_rgba8)
		.map_err(CliError::ImageLoad)
}

/// Resolve and print the single color under the given pixel coordinate
fn print_color_at(image: &RgbaImage, x: u32, y: u32, options: &Options) -> Result<(), CliError> {
	let (width, height) = image.dimensions();
	let color = tintpick::color_at(image.as_raw(), width, height, x, y)
		.ok_or(CliError::OutOfBounds { x, y, width, height })?;

	print_palette(&[color], options);
	Ok(())
}

/// Sample the image, extract its palette, and print the result
fn extract_and_print_palette(image: &RgbaImage, options: &Options) -> Result<(), CliError> {
	let samples = time!(
		"Pixel sampling",
		options.verbose,
		tintpick::sample_pixels(image.as_raw(), options.stride).collect::<Vec<_>>()
	);

	if options.verbose {
		println!("Reduced image to {} samples", samples.len());
	}

	let palette = time!(
		"k-means",
		options.verbose,
		tintpick::from_samples(&samples, options.k, options.seed)
	)
	.map_err(CliError::Extract)?;

	print_palette(&palette, options);
	Ok(())
}

/// Print the given colors based off the provided options
fn print_palette(colors: &[Srgb<u8>], options: &Options) {
	match options.output {
		FormatOutput::Hex => color_format_print(colors, options, " ", tintpick::hex),

		FormatOutput::Rgb => color_format_print(colors, options, " ", |color| {
			format!("({},{},{})", color.red, color.green, color.blue)
		}),

		FormatOutput::Swatch => print_colors(colors, "", |color| {
			"   "
				.on_truecolor(color.red, color.green, color.blue)
				.to_string()
		}),
	}
}

/// Print a line of colors using the given format
fn print_colors(colors: &[Srgb<u8>], delimiter: &str, format: impl Fn(Srgb<u8>) -> String) {
	println!(
		"{}",
		colors
			.iter()
			.map(|&color| format(color))
			.collect::<Vec<_>>()
			.join(delimiter)
	);
}

/// Format, colorize, and then print the text for all colors
fn color_format_print(
	colors: &[Srgb<u8>],
	options: &Options,
	delimiter: &str,
	format: impl Fn(Srgb<u8>) -> String,
) {
	match options.colorize {
		Some(ColorizeOutput::Fg) => print_colors(colors, delimiter, |color| {
			format(color)
				.truecolor(color.red, color.green, color.blue)
				.to_string()
		}),

		Some(ColorizeOutput::Bg) => print_colors(colors, delimiter, |color| {
			format(color)
				.on_truecolor(color.red, color.green, color.blue)
				.to_string()
		}),

		None => print_colors(colors, delimiter, format),
	}
}
