//! Specifies the CLI and handles arg parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Supported output formats for the final colors
#[derive(Copy, Clone, ValueEnum)]
pub enum FormatOutput {
	/// Uppercase #RRGGBB hexcode
	Hex,
	/// sRGB (r,g,b) triple
	Rgb,
	/// Whitespace with true color background
	Swatch,
}

/// Ways to colorize the output text
#[derive(Copy, Clone, ValueEnum)]
pub enum ColorizeOutput {
	/// Foreground
	Fg,
	/// Background
	Bg,
}

/// Extract a palette of dominant colors from an image by k-means clustering in RGB space.
///
/// Tintpick can also report the exact color under a single pixel coordinate.
#[derive(Parser)]
#[command(version)]
pub struct Options {
	/// The path to the input image
	pub image: PathBuf,

	/// The format to print the colors in
	#[arg(short, long, default_value = "hex")]
	pub output: FormatOutput,

	/// Color the foreground or background for each printed color
	#[arg(short, long)]
	pub colorize: Option<ColorizeOutput>,

	/// The number of colors to find
	#[arg(short, default_value_t = 4)]
	pub k: u8,

	/// The byte step between sampled pixels
	///
	/// The default samples every 10th pixel. Lower strides sample more pixels,
	/// trading running time for palette fidelity. The stride must be a positive
	/// multiple of 4 so that every sample starts on a pixel boundary.
	#[arg(long, default_value_t = tintpick::DEFAULT_STRIDE, value_parser = parse_valid_stride)]
	pub stride: usize,

	/// The seed value used for the random number generator
	#[arg(long, default_value_t = 0)]
	pub seed: u64,

	/// Print the color at the given x,y pixel coordinate instead of a palette
	#[arg(long, value_name = "X,Y", value_parser = parse_point)]
	pub at: Option<(u32, u32)>,

	/// Print additional information, such as the elapsed time of each step
	#[arg(long)]
	pub verbose: bool,
}

/// Parse a sampling stride and ensure it is a positive multiple of 4
fn parse_valid_stride(s: &str) -> Result<usize, String> {
	let stride: usize = s.parse().map_err(|e| format!("{e}"))?;
	if stride == 0 || stride % 4 != 0 {
		Err(format!("{stride} is not a positive multiple of 4"))
	} else {
		Ok(stride)
	}
}

/// Parse an `x,y` pixel coordinate pair
fn parse_point(s: &str) -> Result<(u32, u32), String> {
	let (x, y) = s
		.split_once(',')
		.ok_or_else(|| String::from("expected a coordinate pair like 120,45"))?;

	let coordinate = |v: &str| v.trim().parse::<u32>().map_err(|e| format!("{e}"));
	Ok((coordinate(x)?, coordinate(y)?))
}
