//! Runs encodes on the blocking thread pool with a bounded number in flight.
//!
//! Encoding is CPU-bound, so async servers should not call [`encode`](crate::encode) on a
//! runtime worker thread. [`EncoderPool`] moves each job onto `spawn_blocking` and holds a
//! semaphore permit for the duration of the encode.

use crate::{BandNames, EncodeError, EncodeResult, EncoderOptions, RasterTile, Sample, ValidityMask, encode};
use futures::future::join_all;
use log::debug;
use std::sync::Arc;
use tokio::{sync::Semaphore, task::spawn_blocking};
use vtencode_core::Blob;

/// Owned inputs of one encode.
#[derive(Clone, Debug)]
pub struct EncodeJob<T: Sample> {
	pub tile: RasterTile<T>,
	pub mask: ValidityMask,
	pub band_names: BandNames,
	pub options: EncoderOptions,
}

impl<T: Sample> EncodeJob<T> {
	pub fn new(tile: RasterTile<T>, mask: ValidityMask, band_names: BandNames, options: EncoderOptions) -> Self {
		EncodeJob {
			tile,
			mask,
			band_names,
			options,
		}
	}

	pub fn run(&self) -> EncodeResult<Blob> {
		encode(&self.tile, &self.mask, &self.band_names, &self.options)
	}
}

#[derive(Clone, Debug)]
pub struct EncoderPool {
	permits: Arc<Semaphore>,
	size: usize,
}

impl EncoderPool {
	/// Creates a pool running at most `size` encodes at once. A size of zero is treated as one.
	#[must_use]
	pub fn new(size: usize) -> Self {
		let size = size.max(1);
		EncoderPool {
			permits: Arc::new(Semaphore::new(size)),
			size,
		}
	}

	#[must_use]
	pub fn size(&self) -> usize {
		self.size
	}

	pub async fn encode<T: Sample>(&self, job: EncodeJob<T>) -> EncodeResult<Blob> {
		let permit = Arc::clone(&self.permits)
			.acquire_owned()
			.await
			.map_err(|e| EncodeError::Worker(e.to_string()))?;

		spawn_blocking(move || {
			let result = job.run();
			drop(permit);
			result
		})
		.await
		.map_err(|e| EncodeError::Worker(e.to_string()))?
	}

	/// Encodes all jobs and returns their results in job order.
	pub async fn encode_all<T: Sample>(&self, jobs: Vec<EncodeJob<T>>) -> Vec<EncodeResult<Blob>> {
		debug!("encoding {} tiles with up to {} in parallel", jobs.len(), self.size);
		join_all(jobs.into_iter().map(|job| self.encode(job))).await
	}
}

impl Default for EncoderPool {
	/// One slot per CPU.
	fn default() -> Self {
		EncoderPool::new(num_cpus::get())
	}
}
