// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Batch statistics over classified posts.
//!
//! Computed in a single pass over the records. Records whose timestamp
//! could not be parsed still count towards category and activity totals
//! but are left out of the date range and day-of-week figures.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{ActivityRecord, Category};
use crate::services::activity::UNKNOWN_ACTIVITY;
use crate::time_utils::{self, DAY_LABELS};

/// Count and share of one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
    /// Share of all posts, e.g. "12.50%"
    pub percent: String,
}

/// Mean distance of one activity on one weekday.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityDayMean {
    pub activity: String,
    pub day: &'static str,
    pub mean_miles: f64,
    pub count: usize,
}

/// Aggregated view of a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    // ─── Totals ──────────────────────────────────────────────────
    pub total_posts: usize,
    /// Earliest parsed timestamp (RFC 3339, UTC)
    pub first_post: Option<String>,
    /// Latest parsed timestamp (RFC 3339, UTC)
    pub last_post: Option<String>,
    /// Posts whose `created_at` could not be parsed
    pub unparsed_timestamps: usize,

    // ─── Categories ──────────────────────────────────────────────
    pub categories: Vec<CategoryCount>,
    /// Completed events that carry user commentary
    pub written_completed: usize,
    /// Share of completed events that are written
    pub written_completed_percent: String,

    // ─── Activities ──────────────────────────────────────────────
    pub distinct_activities: usize,
    /// Most common activity types, most frequent first
    pub top_activities: Vec<String>,
    /// Activity type with the highest mean distance
    pub longest_activity: Option<String>,
    /// Activity type with the lowest mean distance
    pub shortest_activity: Option<String>,
    /// Mean distance per weekday for each of the top activities
    pub top_activity_day_means: Vec<ActivityDayMean>,

    // ─── Weekday vs weekend ──────────────────────────────────────
    pub weekday_mean_miles: f64,
    pub weekend_mean_miles: f64,
    /// "weekends" if weekend activities are longer on average, else "weekdays"
    pub longer_on: &'static str,
}

/// Running per-activity totals, kept in first-appearance order.
struct ActivityTally<'a> {
    activity: &'a str,
    count: usize,
    total_miles: f64,
}

impl BatchSummary {
    /// Build statistics for `records`, reporting the `top_n` most common
    /// activity types.
    pub fn from_records(records: &[ActivityRecord], top_n: usize) -> Self {
        let total_posts = records.len();

        let mut category_counts = [0usize; 4];
        let mut completed = 0usize;
        let mut written_completed = 0usize;
        let mut unparsed_timestamps = 0usize;
        let mut first: Option<DateTime<Utc>> = None;
        let mut last: Option<DateTime<Utc>> = None;
        let mut tallies: Vec<ActivityTally> = Vec::new();

        for record in records {
            let slot = Category::ALL
                .iter()
                .position(|c| *c == record.source())
                .unwrap_or(3);
            category_counts[slot] += 1;

            match record.time() {
                Some(time) => {
                    let utc = time.with_timezone(&Utc);
                    if first.is_none_or(|f| utc < f) {
                        first = Some(utc);
                    }
                    if last.is_none_or(|l| utc > l) {
                        last = Some(utc);
                    }
                }
                None => unparsed_timestamps += 1,
            }

            if record.source() != Category::CompletedEvent {
                continue;
            }
            completed += 1;
            if record.written() {
                written_completed += 1;
            }

            if let Some(activity) = classified_activity(record) {
                match tallies.iter_mut().find(|t| t.activity == activity) {
                    Some(tally) => {
                        tally.count += 1;
                        tally.total_miles += record.distance();
                    }
                    None => tallies.push(ActivityTally {
                        activity,
                        count: 1,
                        total_miles: record.distance(),
                    }),
                }
            }
        }

        let categories = Category::ALL
            .iter()
            .zip(category_counts)
            .map(|(&category, count)| CategoryCount {
                category,
                count,
                percent: percent(count, total_posts),
            })
            .collect();

        // Stable sort keeps first-appearance order among equal counts
        let mut by_count: Vec<&ActivityTally> = tallies.iter().collect();
        by_count.sort_by(|a, b| b.count.cmp(&a.count));
        let top_activities: Vec<String> = by_count
            .iter()
            .take(top_n)
            .map(|t| t.activity.to_string())
            .collect();

        let (longest_activity, shortest_activity) = longest_and_shortest(&tallies);
        let (weekday_mean_miles, weekend_mean_miles) = weekday_weekend_means(records);

        Self {
            total_posts,
            first_post: first.map(time_utils::format_utc_rfc3339),
            last_post: last.map(time_utils::format_utc_rfc3339),
            unparsed_timestamps,
            categories,
            written_completed,
            written_completed_percent: percent(written_completed, completed),
            distinct_activities: tallies.len(),
            top_activity_day_means: day_means(records, &top_activities),
            top_activities,
            longest_activity,
            shortest_activity,
            weekday_mean_miles,
            weekend_mean_miles,
            longer_on: if weekend_mean_miles > weekday_mean_miles {
                "weekends"
            } else {
                "weekdays"
            },
        }
    }

    /// Count for a single category.
    pub fn category_count(&self, category: Category) -> usize {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map_or(0, |c| c.count)
    }
}

/// Activity label of a completed event that named a workout.
fn classified_activity(record: &ActivityRecord) -> Option<&str> {
    let activity = record.activity_type();
    if record.source() != Category::CompletedEvent
        || activity.is_empty()
        || activity == UNKNOWN_ACTIVITY
    {
        return None;
    }
    Some(activity)
}

/// Format `part / whole` as a percentage with two decimals.
fn percent(part: usize, whole: usize) -> String {
    if whole == 0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", part as f64 * 100.0 / whole as f64)
}

fn mean(total: f64, count: usize) -> f64 {
    total / count.max(1) as f64
}

/// Highest and lowest mean distance. Ties go to the earlier activity for
/// the longest and to the later one for the shortest.
fn longest_and_shortest(tallies: &[ActivityTally]) -> (Option<String>, Option<String>) {
    let mut longest: Option<(&str, f64)> = None;
    let mut shortest: Option<(&str, f64)> = None;

    for tally in tallies {
        let m = mean(tally.total_miles, tally.count);
        if longest.is_none_or(|(_, best)| m > best) {
            longest = Some((tally.activity, m));
        }
        if shortest.is_none_or(|(_, best)| m <= best) {
            shortest = Some((tally.activity, m));
        }
    }

    (
        longest.map(|(a, _)| a.to_string()),
        shortest.map(|(a, _)| a.to_string()),
    )
}

/// Mean miles on weekdays and on weekends for classified completed events
/// with a known weekday.
fn weekday_weekend_means(records: &[ActivityRecord]) -> (f64, f64) {
    let (mut weekday_total, mut weekday_count) = (0.0, 0usize);
    let (mut weekend_total, mut weekend_count) = (0.0, 0usize);

    for record in records {
        if classified_activity(record).is_none() {
            continue;
        }
        let Some(day) = record.day_of_week() else {
            continue;
        };
        if time_utils::is_weekend(day) {
            weekend_total += record.distance();
            weekend_count += 1;
        } else {
            weekday_total += record.distance();
            weekday_count += 1;
        }
    }

    (
        mean(weekday_total, weekday_count),
        mean(weekend_total, weekend_count),
    )
}

/// Per-weekday mean distance for each activity in `activities`, in the
/// given activity order and `Sun..Sat` day order. Empty days are omitted.
fn day_means(records: &[ActivityRecord], activities: &[String]) -> Vec<ActivityDayMean> {
    let mut out = Vec::new();

    for activity in activities {
        let mut totals = [(0.0_f64, 0usize); 7];
        for record in records {
            if classified_activity(record) != Some(activity.as_str()) {
                continue;
            }
            let Some(slot) = record
                .day_of_week()
                .and_then(|d| DAY_LABELS.iter().position(|l| *l == d))
            else {
                continue;
            };
            totals[slot].0 += record.distance();
            totals[slot].1 += 1;
        }

        for (day, (total, count)) in DAY_LABELS.iter().zip(totals) {
            if count > 0 {
                out.push(ActivityDayMean {
                    activity: activity.clone(),
                    day: *day,
                    mean_miles: mean(total, count),
                    count,
                });
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(text: &str, created_at: &str) -> ActivityRecord {
        ActivityRecord::new(text, created_at)
    }

    #[test]
    fn test_empty_batch() {
        let summary = BatchSummary::from_records(&[], 3);
        assert_eq!(summary.total_posts, 0);
        assert_eq!(summary.first_post, None);
        assert_eq!(summary.written_completed_percent, "0.00%");
        assert!(summary
            .categories
            .iter()
            .all(|c| c.count == 0 && c.percent == "0.00%"));
        assert_eq!(summary.longest_activity, None);
        assert_eq!(summary.longer_on, "weekdays");
    }

    #[test]
    fn test_category_counts_and_percentages() {
        let records = vec![
            rec(
                "Just completed a 2 mi run with @Runkeeper. Check it out! https://t.co/a",
                "Mon Jan 01 10:00:00 +0000 2024",
            ),
            rec("Just completed a 4 mi run - nice", "Tue Jan 02 10:00:00 +0000 2024"),
            rec("Achieved a new personal record", "Wed Jan 03 10:00:00 +0000 2024"),
            rec("Hello world", "Thu Jan 04 10:00:00 +0000 2024"),
        ];
        let summary = BatchSummary::from_records(&records, 3);

        assert_eq!(summary.total_posts, 4);
        assert_eq!(summary.category_count(Category::CompletedEvent), 2);
        assert_eq!(summary.category_count(Category::Achievement), 1);
        assert_eq!(summary.category_count(Category::LiveEvent), 0);
        assert_eq!(summary.category_count(Category::Miscellaneous), 1);
        assert_eq!(summary.categories[0].percent, "50.00%");
        assert_eq!(summary.categories[2].percent, "25.00%");

        assert_eq!(summary.written_completed, 1);
        assert_eq!(summary.written_completed_percent, "50.00%");

        assert_eq!(summary.first_post.as_deref(), Some("2024-01-01T10:00:00Z"));
        assert_eq!(summary.last_post.as_deref(), Some("2024-01-04T10:00:00Z"));
    }

    #[test]
    fn test_top_activities_ties_keep_first_appearance() {
        let records = vec![
            rec("Just completed a 1 mi walk", ""),
            rec("Just completed a 3 mi run", ""),
            rec("Just completed a 5 mi run", ""),
            rec("Just completed a 10 mi bike", ""),
            rec("Just completed a yoga class", ""),
        ];
        let summary = BatchSummary::from_records(&records, 3);
        assert_eq!(summary.top_activities, vec!["run", "walk", "bike"]);
        assert_eq!(summary.distinct_activities, 4);
        assert_eq!(summary.longest_activity.as_deref(), Some("bike"));
        assert_eq!(summary.shortest_activity.as_deref(), Some("yoga"));
    }

    #[test]
    fn test_unparsed_timestamps_excluded_from_dates() {
        let records = vec![
            rec("Just completed a 2 mi run", "garbage"),
            rec("Just completed a 6 mi run", "Sat Jan 06 10:00:00 +0000 2024"),
            rec("Just completed a 2 mi run", "Mon Jan 08 10:00:00 +0000 2024"),
        ];
        let summary = BatchSummary::from_records(&records, 3);

        assert_eq!(summary.unparsed_timestamps, 1);
        assert_eq!(summary.first_post.as_deref(), Some("2024-01-06T10:00:00Z"));
        assert_eq!(summary.weekend_mean_miles, 6.0);
        assert_eq!(summary.weekday_mean_miles, 2.0);
        assert_eq!(summary.longer_on, "weekends");

        let days: Vec<&str> = summary.top_activity_day_means.iter().map(|m| m.day).collect();
        assert_eq!(days, vec!["Mon", "Sat"]);
    }
}
