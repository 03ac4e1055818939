//! Example: Build a Mel filterbank and print its geometry
//!
//! This example builds a 26-band filterbank for 16 kHz audio and prints the
//! band layout plus the response to a flat spectrum.

use melbank::{build_filterbank, FilterbankConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let config = FilterbankConfig {
        num_mel_bands: 26,
        frame_size: 512,
        sample_rate: 16000,
    };

    let bank = build_filterbank(config)?;

    println!("Mel filterbank:");
    println!("  Bands: {}", bank.num_bands());
    println!("  FFT bins: {}", bank.num_bins());
    println!("  Sample rate: {} Hz", bank.sample_rate());

    println!("Band centers (Hz):");
    for (i, center) in bank.band_centers_hz().iter().enumerate() {
        println!("  Band {:2}: {:8.2} Hz", i, center);
    }

    // Response to a flat (white-noise-like) spectrum
    let flat = vec![1.0f64; bank.num_bins()];
    let energies = bank.apply(&flat)?;
    println!("Flat-spectrum band energies:");
    for (i, energy) in energies.iter().enumerate() {
        println!("  Band {:2}: {:.6}", i, energy);
    }

    Ok(())
}
