use criterion::{
	black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkGroup, BenchmarkId, Criterion,
	SamplingMode,
};
use std::time::Duration;

/// Synthetic RGBA8 gradient buffer with the given number of pixels
fn gradient_rgba(pixels: u32) -> Vec<u8> {
	let mut buffer = Vec::with_capacity(pixels as usize * 4);
	for i in 0..pixels {
		buffer.extend_from_slice(&[(i % 256) as u8, (i / 256 % 256) as u8, (i / 65536 % 256) as u8, 255]);
	}
	buffer
}

fn create_group<'a>(c: &'a mut Criterion, name: &'a str) -> BenchmarkGroup<'a, WallTime> {
	let mut group = c.benchmark_group(name);
	group
		.sample_size(30)
		.noise_threshold(0.05)
		.sampling_mode(SamplingMode::Flat)
		.warm_up_time(Duration::from_millis(500));
	group
}

fn sample_pixels(c: &mut Criterion) {
	let mut group = create_group(c, "sample_pixels");

	for pixels in [100_000, 1_000_000, 4_000_000] {
		let buffer = gradient_rgba(pixels);
		group.bench_with_input(BenchmarkId::from_parameter(pixels), &buffer, |b, buffer| {
			b.iter(|| {
				tintpick::sample_pixels(black_box(buffer), tintpick::DEFAULT_STRIDE).collect::<Vec<_>>()
			});
		});
	}

	group.finish();
}

fn from_rgba(c: &mut Criterion) {
	let mut group = create_group(c, "from_rgba");

	let buffer = gradient_rgba(1_000_000);
	for k in [4_u8, 8, 16] {
		group.bench_with_input(BenchmarkId::from_parameter(k), &buffer, |b, buffer| {
			b.iter(|| tintpick::from_rgba(black_box(buffer), k, 0));
		});
	}

	group.finish();
}

criterion_group!(benches, sample_pixels, from_rgba);
criterion_main!(benches);
