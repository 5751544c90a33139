//! Completion tone synthesis.
//!
//! An 800 Hz sine lasting one second, with the gain ramping
//! exponentially from 0.3 down to near silence. The samples are plain
//! mono s16le at 44.1 kHz so any host audio capability can play them;
//! playback itself is the presentation layer's job.

/// Sample rate of the synthesized tone, in Hz.
pub const SAMPLE_RATE: u32 = 44_100;

const TONE_HZ: f64 = 800.0;
const TONE_SECS: f64 = 1.0;
const START_GAIN: f64 = 0.3;
const END_GAIN: f64 = 0.01;

/// Synthesize the completion tone as mono s16le samples.
pub fn completion_tone() -> Vec<i16> {
    let sample_count = (f64::from(SAMPLE_RATE) * TONE_SECS) as usize;
    let mut samples = Vec::with_capacity(sample_count);
    for i in 0..sample_count {
        let t = i as f64 / f64::from(SAMPLE_RATE);
        // Exponential ramp: gain(t) = start * (end/start)^(t / duration).
        let gain = START_GAIN * (END_GAIN / START_GAIN).powf(t / TONE_SECS);
        let value = gain * (std::f64::consts::TAU * TONE_HZ * t).sin();
        samples.push((value * f64::from(i16::MAX)) as i16);
    }
    samples
}

/// The tone as little-endian bytes, ready to pipe to a raw PCM player.
pub fn completion_tone_bytes() -> Vec<u8> {
    completion_tone()
        .into_iter()
        .flat_map(i16::to_le_bytes)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_lasts_one_second() {
        assert_eq!(completion_tone().len(), SAMPLE_RATE as usize);
    }

    #[test]
    fn tone_starts_at_full_gain_and_decays() {
        let samples = completion_tone();
        let peak_of = |range: std::ops::Range<usize>| {
            samples[range].iter().map(|s| s.unsigned_abs()).max().unwrap()
        };
        // Peak over the first few cycles is near 0.3 full scale.
        let early = peak_of(0..2000);
        let expected = (START_GAIN * f64::from(i16::MAX)) as u16;
        assert!(early > expected - 800 && early <= expected);
        // The envelope decays monotonically across quarters.
        let q = samples.len() / 4;
        let peaks = [peak_of(0..q), peak_of(q..2 * q), peak_of(2 * q..3 * q), peak_of(3 * q..4 * q)];
        assert!(peaks[0] > peaks[1] && peaks[1] > peaks[2] && peaks[2] > peaks[3]);
        // And ends near silence.
        assert!(peaks[3] < (0.03 * f64::from(i16::MAX)) as u16);
    }

    #[test]
    fn bytes_are_little_endian_samples() {
        let samples = completion_tone();
        let bytes = completion_tone_bytes();
        assert_eq!(bytes.len(), samples.len() * 2);
        assert_eq!(&bytes[0..2], &samples[0].to_le_bytes());
    }
}
