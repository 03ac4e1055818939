//! Mel filterbank matrix construction
//!
//! Builds the dense transform that re-bins a linear-frequency spectrogram
//! into perceptually spaced Mel bands.
//!
//! Algorithm:
//! 1. Convert the spectrogram range `[0, sr/2]` to Mel
//! 2. Place `num_mel_bands + 2` evenly spaced points across that Mel range
//! 3. Convert the points back to Hz; consecutive triples define each
//!    triangular filter's (left edge, peak, right edge)
//! 4. Evaluate the rising and falling slopes of every triangle against the
//!    FFT bin center frequencies, clipping to zero outside the support
//! 5. Scale each row by `2 / (right_edge - left_edge)` so every filter passes
//!    the same integrated energy regardless of its Hz bandwidth

use serde::{Deserialize, Serialize};

use crate::error::FilterbankError;
use crate::scale::{convert_hz_to_mel, convert_mel_to_hz_slice};

/// Generate `num` evenly spaced values from `start` to `stop` inclusive
fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    if num == 0 {
        return Vec::new();
    }
    if num == 1 {
        return vec![start];
    }
    let last = (num - 1) as f64;
    (0..num)
        .map(|i| start + (stop - start) * i as f64 / last)
        .collect()
}

/// Triangle geometry of band `i`: left width, right width, and the
/// `2 / full_width` energy normalization factor
///
/// Errors if the Mel spacing has collapsed below f64 resolution, which would
/// otherwise divide by zero and leak NaN/Inf into the matrix.
fn band_geometry(centers_hz: &[f64], i: usize) -> Result<(f64, f64, f64), FilterbankError> {
    let band_width_left = centers_hz[i + 1] - centers_hz[i];
    let band_width_right = centers_hz[i + 2] - centers_hz[i + 1];
    let full_width = centers_hz[i + 2] - centers_hz[i];
    if !(full_width.is_finite() && band_width_left > 0.0 && band_width_right > 0.0) {
        return Err(FilterbankError::NumericalError(format!(
            "Degenerate Mel band {} (widths {:.6} / {:.6} Hz)",
            i, band_width_left, band_width_right
        )));
    }
    Ok((band_width_left, band_width_right, 2.0 / full_width))
}

/// Validate shared filterbank parameters
fn validate_params(
    num_mel_bands: usize,
    frame_size: usize,
    sr: u32,
) -> Result<(), FilterbankError> {
    if num_mel_bands < 1 {
        return Err(FilterbankError::InvalidInput(
            "Number of Mel bands must be >= 1".to_string(),
        ));
    }
    if frame_size < 1 {
        return Err(FilterbankError::InvalidInput(
            "Frame size must be >= 1".to_string(),
        ));
    }
    if sr < 1 {
        return Err(FilterbankError::InvalidInput(
            "Sample rate must be >= 1 Hz".to_string(),
        ));
    }
    Ok(())
}

/// Create a Mel filterbank matrix
///
/// Returns a dense linear transformation matrix that scales a vanilla
/// spectrogram into Mel bands. Row `i` holds the `i`-th triangular filter's
/// weight for each FFT bin; applying the matrix to a power or magnitude
/// spectrum is the caller's responsibility (or use [`MelFilterbank::apply`]).
///
/// Each row is energy-normalized by `2 / (hz_width of the triangle)` so that
/// wider high-frequency filters do not pass proportionally more energy than
/// narrow low-frequency ones for white-noise input.
///
/// # Arguments
///
/// * `num_mel_bands` - Number of Mel bands (matrix rows)
/// * `frame_size` - Number of samples per STFT frame; the matrix has
///   `frame_size / 2 + 1` columns, one per non-redundant real-FFT bin
/// * `sr` - Sample rate of the original signal in Hz
///
/// # Returns
///
/// Matrix of shape `(num_mel_bands, frame_size / 2 + 1)` as row vectors.
/// Every entry is non-negative and finite; row `i` is zero outside the Hz
/// support of its triangle.
///
/// # Errors
///
/// Returns `FilterbankError::InvalidInput` if `num_mel_bands`, `frame_size`,
/// or `sr` is zero.
///
/// # Example
///
/// ```
/// use melbank::create_mel_filterbanks;
///
/// let m = create_mel_filterbanks(26, 512, 16000)?;
/// assert_eq!(m.len(), 26);
/// assert_eq!(m[0].len(), 257);
/// # Ok::<(), melbank::FilterbankError>(())
/// ```
pub fn create_mel_filterbanks(
    num_mel_bands: usize,
    frame_size: usize,
    sr: u32,
) -> Result<Vec<Vec<f64>>, FilterbankError> {
    validate_params(num_mel_bands, frame_size, sr)?;

    log::debug!(
        "Creating Mel filterbank: {} bands, frame={}, sr={} Hz",
        num_mel_bands,
        frame_size,
        sr
    );

    // Spectrogram range in Mel: 0 Hz up to the Nyquist frequency
    let lowest_mel = convert_hz_to_mel(0.0);
    let highest_mel = convert_hz_to_mel(sr as f64 / 2.0);

    // num_mel_bands + 2 evenly spaced Mel points, converted back to Hz.
    // Consecutive triples are the (left, peak, right) corners of each triangle.
    let mel_centers = linspace(lowest_mel, highest_mel, num_mel_bands + 2);
    let centers_hz = convert_mel_to_hz_slice(&mel_centers);

    // Center frequencies of the non-redundant real-FFT bins. Integer floor
    // division for both the bin count and the Nyquist bound, matching the
    // real-FFT bin layout for odd frame sizes.
    let num_bins = frame_size / 2 + 1;
    let fft_bins = linspace(0.0, (sr / 2) as f64, num_bins);

    let mut matrix = Vec::with_capacity(num_mel_bands);
    for i in 0..num_mel_bands {
        // energy_norm equalizes the integrated energy each triangle passes
        let (band_width_left, band_width_right, energy_norm) = band_geometry(&centers_hz, i)?;

        let row: Vec<f64> = fft_bins
            .iter()
            .map(|&bin_hz| {
                let rising = (bin_hz - centers_hz[i]) / band_width_left;
                let falling = (centers_hz[i + 2] - bin_hz) / band_width_right;
                rising.min(falling).max(0.0) * energy_norm
            })
            .collect();
        matrix.push(row);
    }

    Ok(matrix)
}

/// An owned Mel filterbank: the weight matrix plus its geometry
///
/// Wraps the matrix produced by [`create_mel_filterbanks`] together with the
/// band center frequencies, and applies it to spectrum frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MelFilterbank {
    /// Filter weights, one row per Mel band
    weights: Vec<Vec<f64>>,
    /// Peak frequency of each band in Hz
    band_centers_hz: Vec<f64>,
    /// Sample rate the bank was built for, in Hz
    sample_rate: u32,
}

impl MelFilterbank {
    /// Build a filterbank for the given configuration
    ///
    /// # Errors
    ///
    /// Returns `FilterbankError::InvalidInput` if any parameter is zero.
    pub fn new(
        num_mel_bands: usize,
        frame_size: usize,
        sr: u32,
    ) -> Result<Self, FilterbankError> {
        let weights = create_mel_filterbanks(num_mel_bands, frame_size, sr)?;

        let lowest_mel = convert_hz_to_mel(0.0);
        let highest_mel = convert_hz_to_mel(sr as f64 / 2.0);
        let centers_hz =
            convert_mel_to_hz_slice(&linspace(lowest_mel, highest_mel, num_mel_bands + 2));
        // Interior points only; the endpoints are triangle edges, not peaks
        let band_centers_hz = centers_hz[1..=num_mel_bands].to_vec();

        Ok(Self {
            weights,
            band_centers_hz,
            sample_rate: sr,
        })
    }

    /// Number of Mel bands (matrix rows)
    pub fn num_bands(&self) -> usize {
        self.weights.len()
    }

    /// Number of FFT bins (matrix columns)
    pub fn num_bins(&self) -> usize {
        self.weights.first().map_or(0, |row| row.len())
    }

    /// Sample rate the bank was built for, in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// The full weight matrix, rows indexed by Mel band
    pub fn weights(&self) -> &[Vec<f64>] {
        &self.weights
    }

    /// Peak frequency of each Mel band in Hz, ascending
    pub fn band_centers_hz(&self) -> &[f64] {
        &self.band_centers_hz
    }

    /// Apply the filterbank to one spectrum frame
    ///
    /// Computes the matrix-vector product, collapsing `num_bins` linear
    /// frequency bins into `num_bands` Mel band energies.
    ///
    /// # Arguments
    ///
    /// * `spectrum` - Power or magnitude values, one per FFT bin
    ///
    /// # Errors
    ///
    /// Returns `FilterbankError::InvalidInput` if the spectrum length does
    /// not match the bank's bin count.
    pub fn apply(&self, spectrum: &[f64]) -> Result<Vec<f64>, FilterbankError> {
        if spectrum.len() != self.num_bins() {
            return Err(FilterbankError::InvalidInput(format!(
                "Spectrum has {} bins, filterbank expects {}",
                spectrum.len(),
                self.num_bins()
            )));
        }

        Ok(self
            .weights
            .iter()
            .map(|row| {
                row.iter()
                    .zip(spectrum)
                    .map(|(&w, &x)| w * x)
                    .sum::<f64>()
            })
            .collect())
    }
}
