//! # melbank
//!
//! Mel-scale filterbank construction for audio feature extraction.
//!
//! A Mel filterbank is a dense linear transform applied to a power or
//! magnitude spectrogram to re-bin linear-frequency energy into
//! perceptually spaced (Mel) bands. This crate builds that matrix:
//! triangular overlapping filters laid out across the real-FFT bins, with
//! per-band energy normalization so every filter passes the same integrated
//! energy regardless of its Hz bandwidth.
//!
//! The bank is a one-shot construction: build it once per
//! (bands, frame size, sample rate) configuration, then reuse it as a
//! static transform.
//!
//! ## Quick Start
//!
//! ```
//! use melbank::{build_filterbank, FilterbankConfig};
//!
//! let config = FilterbankConfig {
//!     num_mel_bands: 26,
//!     frame_size: 512,
//!     sample_rate: 16000,
//! };
//!
//! let bank = build_filterbank(config)?;
//! assert_eq!(bank.num_bands(), 26);
//! assert_eq!(bank.num_bins(), 257);
//!
//! // Collapse a spectrum frame into Mel band energies
//! let spectrum = vec![1.0; bank.num_bins()];
//! let energies = bank.apply(&spectrum)?;
//! assert_eq!(energies.len(), 26);
//! # Ok::<(), melbank::FilterbankError>(())
//! ```
//!
//! For the raw matrix without the wrapper type, use
//! [`create_mel_filterbanks`]; the Hz↔Mel conversions are exposed as
//! standalone functions in [`scale`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod filterbank;
pub mod scale;

// Re-export main types
pub use config::FilterbankConfig;
pub use error::FilterbankError;
pub use filterbank::{create_mel_filterbanks, MelFilterbank};
pub use scale::{
    convert_hz_to_mel, convert_hz_to_mel_slice, convert_mel_to_hz, convert_mel_to_hz_slice,
    MEL_SCALE_CONSTANT,
};

/// Build a Mel filterbank from a configuration
///
/// Convenience entry point over [`MelFilterbank::new`].
///
/// # Arguments
///
/// * `config` - Filterbank construction parameters
///
/// # Returns
///
/// A [`MelFilterbank`] of shape `(num_mel_bands, frame_size / 2 + 1)`
///
/// # Errors
///
/// Returns `FilterbankError::InvalidInput` if any parameter is zero.
///
/// # Example
///
/// ```
/// use melbank::{build_filterbank, FilterbankConfig};
///
/// let bank = build_filterbank(FilterbankConfig::default())?;
/// assert_eq!(bank.num_bands(), 26);
/// # Ok::<(), melbank::FilterbankError>(())
/// ```
pub fn build_filterbank(config: FilterbankConfig) -> Result<MelFilterbank, FilterbankError> {
    MelFilterbank::new(
        config.num_mel_bands,
        config.frame_size,
        config.sample_rate,
    )
}
