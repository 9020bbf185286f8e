//! Chronological bucketing of transcripts into date groups.
//!
//! Produces the already-grouped structure the list engine consumes:
//! newest first, one group per relative bucket, then one per calendar month.

use crate::model::{Group, GroupTitle, Transcript};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Relative age bucket of a record, measured in calendar days from `now`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DateBucket {
    Today,
    Yesterday,
    LastWeek,
    LastMonth,
    /// Calendar month title such as "March 2026".
    Month(String),
}

impl DateBucket {
    fn classify<Tz: TimeZone>(created: &DateTime<Tz>, now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: Display,
    {
        let days_ago = now
            .date_naive()
            .signed_duration_since(created.date_naive())
            .num_days();
        match days_ago {
            i64::MIN..=0 => Self::Today,
            1 => Self::Yesterday,
            2..=7 => Self::LastWeek,
            8..=30 => Self::LastMonth,
            _ => Self::Month(created.format("%B %Y").to_string()),
        }
    }

    fn title(&self) -> &str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::LastWeek => "Last Week",
            Self::LastMonth => "Last Month",
            Self::Month(title) => title,
        }
    }
}

/// Group transcripts by age relative to `now`.
///
/// Records are sorted newest first (ties broken by id, descending); empty
/// buckets are omitted. Each group's `start_index` is the position of its
/// first record in the sorted sequence.
/// Day boundaries and month titles follow the timezone of `now`.
pub fn group_by_date<Tz: TimeZone>(mut transcripts: Vec<Transcript>, now: &DateTime<Tz>) -> Vec<Group>
where
    Tz::Offset: Display,
{
    transcripts.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| b.id().cmp(&a.id()))
    });

    let tz = now.timezone();
    let mut groups: Vec<Group> = Vec::new();
    let mut current: Option<(DateBucket, usize, Vec<Transcript>)> = None;

    for (position, transcript) in transcripts.into_iter().enumerate() {
        let local = transcript.created_at().with_timezone(&tz);
        let bucket = DateBucket::classify(&local, now);

        match current.as_mut() {
            Some((open, _, records)) if *open == bucket => records.push(transcript),
            _ => {
                if let Some(done) = current.take() {
                    groups.extend(close_group(done));
                }
                current = Some((bucket, position, vec![transcript]));
            }
        }
    }
    if let Some(done) = current.take() {
        groups.extend(close_group(done));
    }

    groups
}

fn close_group((bucket, start_index, records): (DateBucket, usize, Vec<Transcript>)) -> Option<Group> {
    // Bucket titles are never empty.
    let title = GroupTitle::new(bucket.title()).ok()?;
    Some(Group::new(title, records, start_index))
}
