//! Completion tone playback.
//!
//! Pipes the synthesized PCM samples to the first available system
//! player on a detached thread. Playback failures are ignored; the tone
//! is a cue, not a deliverable.

use std::io::Write;
use std::process::{Command, Stdio};

use studysync_core::audio;

pub fn play_completion_tone() {
    std::thread::spawn(|| {
        let pcm = audio::completion_tone_bytes();
        let rate = audio::SAMPLE_RATE.to_string();
        let players: [(&str, Vec<String>); 2] = [
            (
                "paplay",
                vec![
                    "--raw".into(),
                    "--format=s16le".into(),
                    format!("--rate={rate}"),
                    "--channels=1".into(),
                ],
            ),
            (
                "aplay",
                vec![
                    "-q".into(),
                    "-t".into(),
                    "raw".into(),
                    "-f".into(),
                    "S16_LE".into(),
                    "-r".into(),
                    rate.clone(),
                    "-c".into(),
                    "1".into(),
                ],
            ),
        ];

        for (player, args) in players {
            let Ok(mut child) = Command::new(player)
                .args(&args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
            else {
                continue;
            };
            if let Some(mut stdin) = child.stdin.take() {
                let _ = stdin.write_all(&pcm);
            }
            let _ = child.wait();
            break;
        }
    });
}
