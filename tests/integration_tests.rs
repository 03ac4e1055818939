//! Integration tests for Mel filterbank construction

use melbank::{
    build_filterbank, convert_hz_to_mel, convert_mel_to_hz, create_mel_filterbanks,
    FilterbankConfig,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_across_audio_range() {
        // Sweep the audible range and beyond; f64 round trip should hold to
        // 1e-9 relative tolerance
        for i in 1..=1000 {
            let f = i as f64 * 24.0; // up to 24 kHz
            let back = convert_mel_to_hz(convert_hz_to_mel(f));
            assert!(
                ((back - f) / f).abs() < 1e-9,
                "Round trip drifted at {} Hz: got {}",
                f,
                back
            );
        }
    }

    #[test]
    fn test_matrix_matches_wrapper() {
        // The raw matrix and the owned wrapper are built from the same code
        // path and must agree exactly
        let matrix = create_mel_filterbanks(26, 512, 16000).unwrap();
        let bank = build_filterbank(FilterbankConfig {
            num_mel_bands: 26,
            frame_size: 512,
            sample_rate: 16000,
        })
        .unwrap();
        assert_eq!(matrix, bank.weights());
    }

    #[test]
    fn test_white_noise_energy_roughly_flat() {
        // The per-row energy normalization exists so that wider
        // high-frequency filters do not pass proportionally more energy for
        // flat input. Interior bands should stay within a small factor of
        // each other; edge bands suffer the most bin quantization.
        let bank = build_filterbank(FilterbankConfig {
            num_mel_bands: 26,
            frame_size: 2048,
            sample_rate: 16000,
        })
        .unwrap();

        let flat = vec![1.0f64; bank.num_bins()];
        let energies = bank.apply(&flat).unwrap();

        let interior = &energies[2..24];
        let min = interior.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = interior.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!(min > 0.0, "Interior band passed no energy");
        assert!(
            max / min < 3.0,
            "Normalized band energies too uneven for flat input: min {} max {}",
            min,
            max
        );
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = FilterbankConfig {
            num_mel_bands: 40,
            frame_size: 1024,
            sample_rate: 22050,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: FilterbankConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.num_mel_bands, 40);
        assert_eq!(parsed.frame_size, 1024);
        assert_eq!(parsed.sample_rate, 22050);
    }

    #[test]
    fn test_bank_serializes_and_restores() {
        let bank = build_filterbank(FilterbankConfig {
            num_mel_bands: 8,
            frame_size: 256,
            sample_rate: 8000,
        })
        .unwrap();

        let json = serde_json::to_string(&bank).unwrap();
        let restored: melbank::MelFilterbank = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.weights(), bank.weights());
        assert_eq!(restored.sample_rate(), bank.sample_rate());
    }

    #[test]
    fn test_error_messages_name_the_parameter() {
        let err = create_mel_filterbanks(0, 512, 16000).unwrap_err();
        assert!(err.to_string().contains("Mel bands"));

        let err = create_mel_filterbanks(26, 0, 16000).unwrap_err();
        assert!(err.to_string().contains("Frame size"));

        let err = create_mel_filterbanks(26, 512, 0).unwrap_err();
        assert!(err.to_string().contains("Sample rate"));
    }
}
