//! Provides the implementation for Lloyd's k-means over sampled RGB colors

use palette::Srgb;
use rand::{seq::SliceRandom, Rng, SeedableRng};

/// The fixed number of Lloyd iterations per extraction
///
/// The sample set is bounded by the sampling stride, so running time is
/// bounded and predictable without a convergence check.
const ITERATIONS: u32 = 20;

/// Squared Euclidean distance between two RGB colors
///
/// Assignments only compare distances against each other,
/// so the square root is never taken.
fn squared_distance(x: Srgb<u8>, y: Srgb<u8>) -> u32 {
	let dr = u32::from(x.red.abs_diff(y.red));
	let dg = u32::from(x.green.abs_diff(y.green));
	let db = u32::from(x.blue.abs_diff(y.blue));
	dr * dr + dg * dg + db * db
}

/// Choose the starting centroids by shuffling the sample indices and taking the first `k`
///
/// This picks `k` samples uniformly at random without replacement.
fn initial_centroids(samples: &[Srgb<u8>], k: usize, rng: &mut impl Rng) -> Vec<Srgb<u8>> {
	let mut indices = (0..samples.len()).collect::<Vec<_>>();
	indices.shuffle(rng);
	indices.truncate(k);
	indices.into_iter().map(|index| samples[index]).collect()
}

/// For each sample, update the index of its nearest centroid
///
/// Ties go to the lowest centroid index, since the scan compares with strict `<`.
fn update_assignments(samples: &[Srgb<u8>], centroids: &[Srgb<u8>], assignment: &mut [usize]) {
	for (center, &sample) in assignment.iter_mut().zip(samples) {
		let mut min_distance = u32::MAX;
		let mut min_center = 0;

		for (i, &centroid) in centroids.iter().enumerate() {
			let distance = squared_distance(sample, centroid);
			if distance < min_distance {
				min_distance = distance;
				min_center = i;
			}
		}

		*center = min_center;
	}
}

/// For each centroid with at least one assigned sample, recompute it as the
/// component-wise mean of its samples
///
/// The mean is truncated, not rounded to nearest.
/// Centroids with no assigned samples are left unchanged.
fn update_centroids(samples: &[Srgb<u8>], assignment: &[usize], centroids: &mut [Srgb<u8>]) {
	// Channel sums can exceed u32 for very large sample sets
	let mut sums = vec![[0_u64; 3]; centroids.len()];
	let mut counts = vec![0_u64; centroids.len()];

	for (&center, &sample) in assignment.iter().zip(samples) {
		let sum = &mut sums[center];
		sum[0] += u64::from(sample.red);
		sum[1] += u64::from(sample.green);
		sum[2] += u64::from(sample.blue);
		counts[center] += 1;
	}

	for ((centroid, sum), &count) in centroids.iter_mut().zip(&sums).zip(&counts) {
		if count > 0 {
			// The mean of u8 values always fits back in a u8
			#[allow(clippy::cast_possible_truncation)]
			{
				*centroid = Srgb::new(
					(sum[0] / count) as u8,
					(sum[1] / count) as u8,
					(sum[2] / count) as u8,
				);
			}
		}
	}
}

/// Run k-means over the samples, returning `min(k, samples.len())` colors
///
/// The returned colors keep their initialization order. They are not sorted
/// by cluster size or any other criterion.
pub(crate) fn run(samples: &[Srgb<u8>], k: u8, seed: u64) -> Vec<Srgb<u8>> {
	if samples.is_empty() {
		return Vec::new();
	}

	let k = usize::min(usize::from(k), samples.len());
	let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);

	let mut centroids = initial_centroids(samples, k, &mut rng);
	let mut assignment = vec![0; samples.len()];

	for _ in 0..ITERATIONS {
		update_assignments(samples, &centroids, &mut assignment);
		update_centroids(samples, &assignment, &mut centroids);
	}

	centroids
}
