use crate::domain::errors::AudioError;
use crate::track::Track;

pub const SAMPLE_RATE: u32 = 8000;

/// Reads the 16-bit PCM samples of a WAV file. A short or truncated data
/// chunk is tolerated: whatever was decoded is returned and the problem
/// is logged.
pub fn load(path: &str) -> Result<Vec<i16>, AudioError> {
    let mut reader = hound::WavReader::open(path)?;
    let expected = reader.len() as usize;
    let mut samples = Vec::with_capacity(expected);
    for sample in reader.samples::<i16>() {
        match sample {
            Ok(s) => samples.push(s),
            Err(e) => {
                log::warn!("truncated sample data in {path}: {e}");
                break;
            }
        }
    }
    if samples.len() < expected {
        log::warn!("{path}: expected {expected} samples, read {}", samples.len());
    }
    Ok(samples)
}

/// Writes samples as a canonical PCM WAV: 8000 Hz, mono, 16 bits.
pub fn save(path: &str, samples: &[i16]) -> Result<(), AudioError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &s in samples {
        writer.write_sample(s)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Loads a WAV file into a fresh track.
pub fn load_track(path: &str) -> Result<Track, AudioError> {
    let samples = load(path)?;
    let mut track = Track::new();
    track.write(&samples, 0);
    Ok(track)
}

/// Saves a track's full contents as a WAV file.
pub fn save_track(path: &str, track: &Track) -> Result<(), AudioError> {
    let mut samples = vec![0i16; track.len()];
    track.read(&mut samples, 0);
    save(path, &samples)
}
