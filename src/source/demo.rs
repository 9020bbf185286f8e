//! Synthetic transcripts for trying the viewer without a data file.

use crate::model::{Transcript, TranscriptId};
use chrono::{DateTime, Duration, Utc};

/// Span of history the demo data covers.
pub const DEMO_SPAN_DAYS: i64 = 60;

const PHRASES: &[&str] = &[
    "Remind me to call the dentist about Thursday",
    "Meeting notes: ship the importer before the release freeze",
    "Grocery list: oat milk, lemons, rye bread, coffee beans",
    "Idea for the talk: start with the failure, then the fix",
    "Ask Sam whether the invoice went out last week",
    "Draft reply: thanks, the new schedule works for us",
    "Book train tickets for the conference in November",
    "Note to self: the garage code changed to the new one",
];

/// `count` transcripts spread evenly backwards from `now` over the last
/// [`DEMO_SPAN_DAYS`] days, newest first. Deterministic for a given input.
pub fn demo_transcripts(count: usize, now: DateTime<Utc>) -> Vec<Transcript> {
    let span_secs = DEMO_SPAN_DAYS * 24 * 60 * 60;
    let step = if count > 0 { span_secs / count as i64 } else { 0 };

    (0..count)
        .map(|i| {
            let created_at = now - Duration::seconds(step * i as i64);
            let phrase = PHRASES[i % PHRASES.len()];
            let duration_ms = 2_000 + ((i as i32).wrapping_mul(7_919) % 180_000).abs();
            let transcript = Transcript::new(
                TranscriptId::new(count as i64 - i as i64),
                phrase,
                duration_ms,
                created_at,
            );
            if i % 3 == 0 {
                let size = i64::from(duration_ms) * 32;
                transcript.with_audio(format!("recordings/{}.wav", count - i), Some(size))
            } else {
                transcript
            }
        })
        .collect()
}
