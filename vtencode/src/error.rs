use thiserror::Error;

/// Errors surfaced by [`encode`](crate::encode) and the [`EncoderPool`](crate::EncoderPool).
///
/// Precondition failures are reported before any geometry is built. Nothing is retried: encoding
/// is deterministic, so the same inputs fail the same way.
#[derive(Debug, Error)]
pub enum EncodeError {
	/// The mask's spatial shape differs from the tile's.
	/// Both shapes are `(height, width)`.
	#[error("mask shape {mask:?} does not match tile shape {tile:?}")]
	ShapeMismatch { tile: (usize, usize), mask: (usize, usize) },

	/// An argument is outside its contract: band name count, extent, feature type, raster layout.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	/// The vector tile builder or the wire encoder failed.
	#[error(transparent)]
	Build(#[from] anyhow::Error),

	/// A pooled encode could not be scheduled or its worker panicked.
	#[error("encoder worker failed: {0}")]
	Worker(String),
}

impl EncodeError {
	pub(crate) fn invalid(message: impl Into<String>) -> Self {
		EncodeError::InvalidArgument(message.into())
	}
}

pub type EncodeResult<T> = std::result::Result<T, EncodeError>;
