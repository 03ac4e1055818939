//! Configuration parameters for filterbank construction

use serde::{Deserialize, Serialize};

/// Filterbank construction parameters
///
/// The three values fully determine the output matrix; building a bank from
/// the same configuration twice yields bit-identical results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterbankConfig {
    /// Number of Mel bands, i.e. rows of the output matrix (default: 26)
    pub num_mel_bands: usize,

    /// Samples per STFT frame; the matrix has `frame_size / 2 + 1` columns,
    /// one per non-redundant real-FFT bin (default: 2048)
    pub frame_size: usize,

    /// Sample rate of the original signal in Hz (default: 44100)
    pub sample_rate: u32,
}

impl Default for FilterbankConfig {
    fn default() -> Self {
        Self {
            num_mel_bands: 26,
            frame_size: 2048,
            sample_rate: 44100,
        }
    }
}
