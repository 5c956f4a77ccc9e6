// ABOUTME: Training analyzer reducing a raw exercise log into a TrainingAnalysis snapshot
// ABOUTME: Window aggregation, muscle tallies, streak detection and weekday pattern ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training history analyzer
//!
//! Every function here is pure: it borrows the log, the personal-record map
//! and the catalog, and derives values relative to an explicit `now`. Empty
//! input produces an all-zero analysis with sentinel values instead of an
//! error.

use crate::analysis::{
    FrequencyMetrics, MuscleDistribution, PatternIndicators, ProgressionIndicators,
    ProgressionRate, RecoveryIndicators, TimeOfDay, TrainingAnalysis, VarietyIndicators,
    VolumeMetrics, VolumeTrend,
};
use crate::coaching_constants::{
    limits::{LEAST_RECENT_EXERCISES, MOST_FREQUENT_EXERCISES},
    muscle_balance::{OVERTRAINED_RATIO, UNDERTRAINED_RATIO},
    volume_trend::TREND_CHANGE_RATIO,
};
use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, Timelike, Utc, Weekday};
use liftcoach_core::constants::{
    sentinels::{NO_WORKOUT_DAYS, UNDATED_PR_DAYS},
    time_windows::{
        CONSECUTIVE_SCAN_DAYS, MONTH_DAYS, SECONDS_PER_DAY, TREND_BASELINE_START_DAYS,
        TREND_BASELINE_WEEKS, WEEKS_PER_MONTH, WEEK_DAYS,
    },
};
use liftcoach_core::models::{ExerciseCatalogEntry, ExerciseLogEntry, PersonalRecordMap};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

/// Training history analyzer
pub struct TrainingAnalyzer;

impl TrainingAnalyzer {
    /// Reduce the full log into a [`TrainingAnalysis`] relative to `now`
    #[must_use]
    pub fn analyze(
        log: &[ExerciseLogEntry],
        records: &PersonalRecordMap,
        catalog: &[ExerciseCatalogEntry],
        now: DateTime<Utc>,
    ) -> TrainingAnalysis {
        let last_week = Self::window(log, now, WEEK_DAYS);
        let last_month = Self::window(log, now, MONTH_DAYS);

        let undated = log.iter().filter(|entry| entry.date().is_none()).count();
        if undated > 0 {
            debug!(
                undated,
                total = log.len(),
                "Skipping undated log entries in date-based metrics"
            );
        }

        let frequency = FrequencyMetrics {
            workouts_last_week: last_week.len(),
            workouts_last_month: last_month.len(),
            avg_workouts_per_week: last_month.len() as f64 / WEEKS_PER_MONTH,
            total_workouts: log.len(),
        };

        let recovery = RecoveryIndicators {
            days_since_last_workout: Self::days_since_last_workout(log, now),
            consecutive_workout_days: Self::consecutive_workout_days(log, now),
            rest_days_last_week: WEEK_DAYS - i64::try_from(last_week.len()).unwrap_or(i64::MAX),
        };

        TrainingAnalysis {
            volume: Self::volume_metrics(log, &last_week, &last_month, now),
            frequency,
            muscle_distribution: Self::muscle_distribution(&last_month, catalog),
            recovery,
            progression: ProgressionIndicators {
                days_since_last_pr: Self::days_since_last_pr(records, now),
                progression_rate: ProgressionRate::classify(records.len(), log.len()),
            },
            variety: Self::variety_indicators(log, &last_month, now),
            patterns: Self::pattern_indicators(log),
        }
    }

    /// Entries dated on or after `now - days`
    #[must_use]
    pub fn window(
        log: &[ExerciseLogEntry],
        now: DateTime<Utc>,
        days: i64,
    ) -> Vec<&ExerciseLogEntry> {
        let cutoff = now - Duration::days(days);
        log.iter()
            .filter(|entry| entry.is_on_or_after(cutoff))
            .collect()
    }

    fn sum_sets(entries: &[&ExerciseLogEntry]) -> u64 {
        entries
            .iter()
            .map(|entry| u64::from(entry.total_sets()))
            .sum()
    }

    fn volume_metrics(
        log: &[ExerciseLogEntry],
        last_week: &[&ExerciseLogEntry],
        last_month: &[&ExerciseLogEntry],
        now: DateTime<Utc>,
    ) -> VolumeMetrics {
        let total_sets_last_week = Self::sum_sets(last_week);
        let avg_sets_per_workout = if last_week.is_empty() {
            0.0
        } else {
            total_sets_last_week as f64 / last_week.len() as f64
        };

        VolumeMetrics {
            total_sets_last_week,
            total_sets_last_month: Self::sum_sets(last_month),
            avg_sets_per_workout,
            volume_trend: Self::volume_trend(log, total_sets_last_week, now),
        }
    }

    /// Compare last week's sets with the weekly mean of the three weeks before it
    fn volume_trend(
        log: &[ExerciseLogEntry],
        total_sets_last_week: u64,
        now: DateTime<Utc>,
    ) -> VolumeTrend {
        let baseline_start = now - Duration::days(TREND_BASELINE_START_DAYS);
        let week_start = now - Duration::days(WEEK_DAYS);
        let baseline_sets: u64 = log
            .iter()
            .filter(|entry| {
                entry
                    .date()
                    .is_some_and(|date| date >= baseline_start && date < week_start)
            })
            .map(|entry| u64::from(entry.total_sets()))
            .sum();

        let baseline = baseline_sets as f64 / TREND_BASELINE_WEEKS;
        if baseline <= 0.0 {
            return VolumeTrend::Stable;
        }

        let change = (total_sets_last_week as f64 - baseline) / baseline;
        if change > TREND_CHANGE_RATIO {
            VolumeTrend::Increasing
        } else if change < -TREND_CHANGE_RATIO {
            VolumeTrend::Decreasing
        } else {
            VolumeTrend::Stable
        }
    }

    /// Tally primary muscles of last-month entries and classify them against the mean
    #[must_use]
    pub fn muscle_distribution(
        last_month: &[&ExerciseLogEntry],
        catalog: &[ExerciseCatalogEntry],
    ) -> MuscleDistribution {
        let mut muscle_by_name: HashMap<&str, &str> = HashMap::new();
        for exercise in catalog {
            muscle_by_name
                .entry(exercise.name.as_str())
                .or_insert(exercise.primary_muscle.as_str());
        }

        let mut tally = FirstSeenTally::default();
        for entry in last_month {
            if let Some(muscle) = muscle_by_name.get(entry.name()) {
                tally.add(muscle);
            }
        }

        Self::classify_muscles(&tally.into_ordered())
    }

    /// Classify an ordered muscle tally into under- and overtrained lists
    #[must_use]
    pub fn classify_muscles(tally: &[(String, u32)]) -> MuscleDistribution {
        let total: u32 = tally.iter().map(|(_, count)| count).sum();
        let average = f64::from(total) / tally.len().max(1) as f64;

        let undertrained_muscles = tally
            .iter()
            .filter(|(_, count)| f64::from(*count) < UNDERTRAINED_RATIO * average)
            .map(|(muscle, _)| muscle.clone())
            .collect();
        let overtrained_muscles = tally
            .iter()
            .filter(|(_, count)| f64::from(*count) > OVERTRAINED_RATIO * average)
            .map(|(muscle, _)| muscle.clone())
            .collect();

        MuscleDistribution {
            counts: tally.iter().cloned().collect::<BTreeMap<_, _>>(),
            average,
            undertrained_muscles,
            overtrained_muscles,
        }
    }

    /// Whole days since the newest dated entry, or 999 when there is none
    #[must_use]
    pub fn days_since_last_workout(log: &[ExerciseLogEntry], now: DateTime<Utc>) -> i64 {
        log.iter()
            .filter_map(ExerciseLogEntry::date)
            .max()
            .map_or(NO_WORKOUT_DAYS, |latest| whole_days_between(latest, now))
    }

    /// Count calendar days with an entry, scanning back from today
    ///
    /// Days without an entry before the first match are skipped; the first
    /// empty day after a match ends the streak.
    #[must_use]
    pub fn consecutive_workout_days(log: &[ExerciseLogEntry], now: DateTime<Utc>) -> u32 {
        let training_days: HashSet<NaiveDate> = log
            .iter()
            .filter_map(ExerciseLogEntry::date)
            .map(|date| date.date_naive())
            .collect();

        let today = now.date_naive();
        let mut streak = 0;
        for offset in 0..CONSECUTIVE_SCAN_DAYS {
            let Some(day) = today.checked_sub_days(Days::new(offset)) else {
                break;
            };
            if training_days.contains(&day) {
                streak += 1;
            } else if streak > 0 {
                break;
            }
        }
        streak
    }

    fn days_since_last_pr(records: &PersonalRecordMap, now: DateTime<Utc>) -> i64 {
        records
            .latest_achieved_at()
            .map_or(UNDATED_PR_DAYS, |latest| whole_days_between(latest, now))
    }

    fn variety_indicators(
        log: &[ExerciseLogEntry],
        last_month: &[&ExerciseLogEntry],
        now: DateTime<Utc>,
    ) -> VarietyIndicators {
        let mut tally = FirstSeenTally::default();
        for entry in last_month {
            tally.add(entry.name());
        }
        let ordered = tally.into_ordered();

        let exercises_last_month: Vec<String> =
            ordered.iter().map(|(name, _)| name.clone()).collect();

        let mut by_frequency = ordered;
        by_frequency.sort_by(|a, b| b.1.cmp(&a.1));
        let most_frequent_exercises = by_frequency
            .into_iter()
            .take(MOST_FREQUENT_EXERCISES)
            .map(|(name, _)| name)
            .collect();

        VarietyIndicators {
            unique_exercises_last_month: exercises_last_month.len(),
            most_frequent_exercises,
            least_recent_exercises: Self::least_recent_exercises(log, now),
            exercises_last_month,
        }
    }

    /// Exercises whose latest dated entry is older than the month window, oldest first
    #[must_use]
    pub fn least_recent_exercises(log: &[ExerciseLogEntry], now: DateTime<Utc>) -> Vec<String> {
        let mut last_performed: Vec<(&str, DateTime<Utc>)> = Vec::new();
        let mut index_by_name: HashMap<&str, usize> = HashMap::new();
        for entry in log {
            let Some(date) = entry.date() else {
                continue;
            };
            match index_by_name.get(entry.name()) {
                Some(&index) => {
                    if date > last_performed[index].1 {
                        last_performed[index].1 = date;
                    }
                }
                None => {
                    index_by_name.insert(entry.name(), last_performed.len());
                    last_performed.push((entry.name(), date));
                }
            }
        }

        let cutoff = now - Duration::days(MONTH_DAYS);
        let mut stale: Vec<(&str, DateTime<Utc>)> = last_performed
            .into_iter()
            .filter(|(_, date)| *date < cutoff)
            .collect();
        stale.sort_by_key(|(_, date)| *date);
        stale
            .into_iter()
            .take(LEAST_RECENT_EXERCISES)
            .map(|(name, _)| name.to_owned())
            .collect()
    }

    fn pattern_indicators(log: &[ExerciseLogEntry]) -> PatternIndicators {
        let mut weekdays = FirstSeenTally::default();
        let mut times: Vec<(TimeOfDay, u32)> = Vec::new();
        for date in log.iter().filter_map(ExerciseLogEntry::date) {
            weekdays.add(weekday_name(date.weekday()));

            let bucket = TimeOfDay::from_hour(date.hour());
            match times.iter_mut().find(|(time, _)| *time == bucket) {
                Some((_, count)) => *count += 1,
                None => times.push((bucket, 1)),
            }
        }

        let mut ranked_days = weekdays.into_ordered();
        ranked_days.sort_by(|a, b| b.1.cmp(&a.1));

        // max_by_key keeps the last maximum; scan reversed so ties go to the first-seen bucket
        let preferred_workout_time = times
            .iter()
            .rev()
            .max_by_key(|(_, count)| *count)
            .map_or(TimeOfDay::Evening, |(time, _)| *time);

        let avg_workout_duration = if log.is_empty() {
            0.0
        } else {
            log.iter()
                .map(|entry| entry.duration_seconds() as f64)
                .sum::<f64>()
                / log.len() as f64
        };

        PatternIndicators {
            preferred_workout_days: ranked_days.into_iter().map(|(day, _)| day).collect(),
            preferred_workout_time,
            avg_workout_duration,
        }
    }
}

/// Counts keyed by string, remembering the order keys were first seen
#[derive(Default)]
struct FirstSeenTally {
    order: Vec<(String, u32)>,
    index: HashMap<String, usize>,
}

impl FirstSeenTally {
    fn add(&mut self, key: &str) {
        if let Some(&position) = self.index.get(key) {
            self.order[position].1 += 1;
        } else {
            self.index.insert(key.to_owned(), self.order.len());
            self.order.push((key.to_owned(), 1));
        }
    }

    fn into_ordered(self) -> Vec<(String, u32)> {
        self.order
    }
}

/// Floor of the elapsed whole days between two instants
fn whole_days_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    (later - earlier).num_seconds().div_euclid(SECONDS_PER_DAY)
}

const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        // A Wednesday evening
        Utc.with_ymd_and_hms(2025, 6, 18, 19, 0, 0).unwrap()
    }

    fn entry(name: &str, days_ago: i64) -> ExerciseLogEntry {
        ExerciseLogEntry::new(name, now() - Duration::days(days_ago), 1800)
    }

    #[test]
    fn test_empty_log_produces_sentinels() {
        let analysis = TrainingAnalyzer::analyze(&[], &PersonalRecordMap::new(), &[], now());

        assert_eq!(analysis.recovery.days_since_last_workout, 999);
        assert_eq!(analysis.recovery.consecutive_workout_days, 0);
        assert_eq!(analysis.recovery.rest_days_last_week, 7);
        assert_eq!(analysis.frequency.workouts_last_month, 0);
        assert!(analysis.volume.avg_sets_per_workout.abs() < f64::EPSILON);
        assert_eq!(analysis.volume.volume_trend, VolumeTrend::Stable);
        assert_eq!(analysis.progression.progression_rate, ProgressionRate::Normal);
        assert_eq!(analysis.progression.days_since_last_pr, 7);
        assert_eq!(analysis.patterns.preferred_workout_time, TimeOfDay::Evening);
        assert!(analysis.patterns.preferred_workout_days.is_empty());
        assert!(analysis.muscle_distribution.counts.is_empty());
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let log = vec![entry("Squat", 7), entry("Squat", 8)];
        assert_eq!(TrainingAnalyzer::window(&log, now(), 7).len(), 1);
    }

    #[test]
    fn test_volume_metrics_default_missing_sets_to_zero() {
        let log = vec![
            entry("Squat", 1).with_total_sets(5),
            entry("Bench Press", 2),
            entry("Row", 20).with_total_sets(4),
        ];
        let analysis = TrainingAnalyzer::analyze(&log, &PersonalRecordMap::new(), &[], now());

        assert_eq!(analysis.volume.total_sets_last_week, 5);
        assert_eq!(analysis.volume.total_sets_last_month, 9);
        assert!((analysis.volume.avg_sets_per_workout - 2.5).abs() < f64::EPSILON);
        assert!((analysis.frequency.avg_workouts_per_week - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_volume_trend_compares_against_prior_weeks() {
        let rising = vec![
            entry("Squat", 1).with_total_sets(12),
            entry("Squat", 10).with_total_sets(3),
            entry("Squat", 17).with_total_sets(3),
            entry("Squat", 24).with_total_sets(3),
        ];
        let analysis = TrainingAnalyzer::analyze(&rising, &PersonalRecordMap::new(), &[], now());
        assert_eq!(analysis.volume.volume_trend, VolumeTrend::Increasing);

        let falling = vec![
            entry("Squat", 1).with_total_sets(1),
            entry("Squat", 10).with_total_sets(9),
            entry("Squat", 17).with_total_sets(9),
            entry("Squat", 24).with_total_sets(9),
        ];
        let analysis = TrainingAnalyzer::analyze(&falling, &PersonalRecordMap::new(), &[], now());
        assert_eq!(analysis.volume.volume_trend, VolumeTrend::Decreasing);
    }

    #[test]
    fn test_muscle_classification_against_average() {
        let tally = vec![
            ("chest".to_owned(), 10),
            ("back".to_owned(), 10),
            ("legs".to_owned(), 1),
        ];
        let distribution = TrainingAnalyzer::classify_muscles(&tally);

        assert!((distribution.average - 7.0).abs() < f64::EPSILON);
        assert_eq!(distribution.undertrained_muscles, vec!["legs".to_owned()]);
        assert!(distribution.overtrained_muscles.is_empty());
    }

    #[test]
    fn test_muscle_lookup_uses_exact_catalog_names() {
        let catalog = vec![
            ExerciseCatalogEntry::new("Squat", "legs"),
            ExerciseCatalogEntry::new("Bench Press", "chest"),
        ];
        let log = vec![entry("Squat", 1), entry("squat", 2), entry("Bench Press", 3)];
        let last_month = TrainingAnalyzer::window(&log, now(), 30);
        let distribution = TrainingAnalyzer::muscle_distribution(&last_month, &catalog);

        assert_eq!(distribution.count("legs"), 1);
        assert_eq!(distribution.count("chest"), 1);
        assert_eq!(distribution.counts.len(), 2);
    }

    #[test]
    fn test_consecutive_days_skips_leading_gap() {
        let log = vec![entry("Squat", 1), entry("Squat", 2), entry("Squat", 4)];
        assert_eq!(TrainingAnalyzer::consecutive_workout_days(&log, now()), 2);
    }

    #[test]
    fn test_consecutive_days_counts_calendar_days_once() {
        let today_morning = Utc.with_ymd_and_hms(2025, 6, 18, 7, 0, 0).unwrap();
        let log = vec![
            ExerciseLogEntry::new("Squat", today_morning, 600),
            entry("Bench Press", 0),
            entry("Row", 1),
        ];
        assert_eq!(TrainingAnalyzer::consecutive_workout_days(&log, now()), 2);
    }

    #[test]
    fn test_consecutive_days_capped_by_scan_window() {
        let log: Vec<_> = (0..20).map(|days| entry("Squat", days)).collect();
        assert_eq!(TrainingAnalyzer::consecutive_workout_days(&log, now()), 14);
    }

    #[test]
    fn test_days_since_last_workout_floors_partial_days() {
        let log = vec![ExerciseLogEntry::new(
            "Squat",
            now() - Duration::hours(47),
            600,
        )];
        assert_eq!(TrainingAnalyzer::days_since_last_workout(&log, now()), 1);
    }

    #[test]
    fn test_undated_entries_are_not_counted_by_windows() {
        let log = vec![
            ExerciseLogEntry::undated("Squat", 1200),
            entry("Row", 0).with_total_sets(3),
        ];
        let analysis = TrainingAnalyzer::analyze(&log, &PersonalRecordMap::new(), &[], now());

        assert_eq!(analysis.frequency.workouts_last_week, 1);
        assert_eq!(analysis.frequency.total_workouts, 2);
        assert_eq!(analysis.recovery.days_since_last_workout, 0);
        assert!((analysis.patterns.avg_workout_duration - 1500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_most_frequent_ties_keep_first_seen_order() {
        let log = vec![
            entry("Row", 1),
            entry("Squat", 2),
            entry("Squat", 3),
            entry("Curl", 4),
            entry("Row", 5),
            entry("Press", 6),
        ];
        let analysis = TrainingAnalyzer::analyze(&log, &PersonalRecordMap::new(), &[], now());

        assert_eq!(
            analysis.variety.most_frequent_exercises,
            vec!["Row".to_owned(), "Squat".to_owned(), "Curl".to_owned()]
        );
        assert_eq!(analysis.variety.unique_exercises_last_month, 4);
    }

    #[test]
    fn test_least_recent_exercises_oldest_first() {
        let log = vec![
            entry("Squat", 1),
            entry("Deadlift", 40),
            entry("Lunge", 60),
            entry("Squat", 90),
            entry("Dip", 45),
        ];
        assert_eq!(
            TrainingAnalyzer::least_recent_exercises(&log, now()),
            vec!["Lunge".to_owned(), "Dip".to_owned(), "Deadlift".to_owned()]
        );
    }

    #[test]
    fn test_weekday_ranking_and_time_of_day() {
        // now() is a Wednesday; 7 and 14 days ago are Wednesdays too
        let log = vec![entry("Squat", 0), entry("Squat", 7), entry("Row", 1)];
        let analysis = TrainingAnalyzer::analyze(&log, &PersonalRecordMap::new(), &[], now());

        assert_eq!(
            analysis.patterns.preferred_workout_days,
            vec!["Wednesday".to_owned(), "Tuesday".to_owned()]
        );
        assert_eq!(analysis.patterns.preferred_workout_time, TimeOfDay::Evening);
    }
}
