//! Exact pixel color lookup, independent of clustering

use palette::Srgb;

/// Resolves the color at the pixel coordinate `(x, y)` of an RGBA8 buffer.
///
/// Returns `None` when the coordinate lies outside the `width` by `height`
/// extents, or when the buffer is too short to contain the pixel's RGB bytes
/// (a truncated decode). Off-image lookups are a routine outcome, not an error.
#[must_use]
pub fn color_at(pixels: &[u8], width: u32, height: u32, x: u32, y: u32) -> Option<Srgb<u8>> {
	if x >= width || y >= height {
		return None;
	}

	let index = (y as usize)
		.checked_mul(width as usize)?
		.checked_add(x as usize)?
		.checked_mul(4)?;

	pixels
		.get(index..index + 3)
		.map(|rgb| Srgb::new(rgb[0], rgb[1], rgb[2]))
}

/// Unpacks a `0x00BBGGRR` packed pixel value into an RGB color.
///
/// This is the byte layout reported by GDI screen pixel queries,
/// with red in the least significant byte.
#[must_use]
pub fn from_packed_bgr(pixel: u32) -> Srgb<u8> {
	// Each channel is masked to its low byte before narrowing
	#[allow(clippy::cast_possible_truncation)]
	let (red, green, blue) = (
		(pixel & 0xFF) as u8,
		((pixel >> 8) & 0xFF) as u8,
		((pixel >> 16) & 0xFF) as u8,
	);

	Srgb::new(red, green, blue)
}
