// ABOUTME: Arrival and composition statistics for guest lists
// ABOUTME: Per-list summaries, per-promoter arrival rates, and parse breakdowns

use crate::guest::{Gender, Guest};
use crate::roster::GuestList;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Headline numbers for one guest list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestListSummary {
    pub id: String,
    pub title: String,
    pub event_date: DateTime<Utc>,
    pub promoter_id: String,
    pub promoter_name: String,
    pub guest_count: usize,
    pub arrived_count: usize,
}

impl From<&GuestList> for GuestListSummary {
    fn from(list: &GuestList) -> Self {
        Self {
            id: list.id.clone(),
            title: list.title.clone(),
            event_date: list.event_date,
            promoter_id: list.promoter_id.clone(),
            promoter_name: list.promoter_name.clone(),
            guest_count: list.guests.len(),
            arrived_count: list.arrived_count(),
        }
    }
}

/// Arrival performance of one promoter across their lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoterStats {
    pub promoter_id: String,
    pub promoter_name: String,
    pub total_guests: usize,
    pub arrived_guests: usize,
    /// Percentage, 0 when the promoter has no guests
    pub arrival_rate: f64,
}

impl PromoterStats {
    /// Aggregate lists per promoter, optionally only lists on `date`
    ///
    /// Sorted by total guests, largest first. Ties keep first-seen order.
    pub fn collect<'a>(
        lists: impl IntoIterator<Item = &'a GuestList>,
        date: Option<NaiveDate>,
    ) -> Vec<Self> {
        let mut order: Vec<String> = Vec::new();
        let mut by_promoter: HashMap<String, PromoterStats> = HashMap::new();

        for list in lists {
            if date.is_some_and(|d| !list.is_on(d)) {
                continue;
            }
            let entry = by_promoter
                .entry(list.promoter_id.clone())
                .or_insert_with(|| {
                    order.push(list.promoter_id.clone());
                    PromoterStats {
                        promoter_id: list.promoter_id.clone(),
                        promoter_name: list.promoter_name.clone(),
                        total_guests: 0,
                        arrived_guests: 0,
                        arrival_rate: 0.0,
                    }
                });
            entry.total_guests += list.guests.len();
            entry.arrived_guests += list.arrived_count();
            entry.arrival_rate = arrival_rate(entry.arrived_guests, entry.total_guests);
        }

        let mut stats: Vec<Self> = order
            .iter()
            .filter_map(|id| by_promoter.remove(id))
            .collect();
        stats.sort_by(|a, b| b.total_guests.cmp(&a.total_guests));
        stats
    }
}

/// Totals across all promoters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_guests: usize,
    pub arrived_guests: usize,
    pub arrival_rate: f64,
}

impl Totals {
    pub fn from_promoters(stats: &[PromoterStats]) -> Self {
        let total_guests = stats.iter().map(|s| s.total_guests).sum();
        let arrived_guests = stats.iter().map(|s| s.arrived_guests).sum();
        Self {
            total_guests,
            arrived_guests,
            arrival_rate: arrival_rate(arrived_guests, total_guests),
        }
    }
}

fn arrival_rate(arrived: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        arrived as f64 / total as f64 * 100.0
    }
}

/// Composition of a parsed guest sequence
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseBreakdown {
    pub total: usize,
    pub primaries: usize,
    pub plus_ones: usize,
    pub male: usize,
    pub female: usize,
    pub neutral: usize,
    pub unspecified: usize,
}

impl ParseBreakdown {
    pub fn from_guests(guests: &[Guest]) -> Self {
        guests.iter().fold(Self::default(), |mut acc, guest| {
            acc.total += 1;
            if guest.is_plus_one() {
                acc.plus_ones += 1;
            } else {
                acc.primaries += 1;
            }
            match guest.gender {
                Some(Gender::Male) => acc.male += 1,
                Some(Gender::Female) => acc.female += 1,
                Some(Gender::Neutral) => acc.neutral += 1,
                None => acc.unspecified += 1,
            }
            acc
        })
    }

    pub fn count_for(&self, gender: Option<Gender>) -> usize {
        match gender {
            Some(Gender::Male) => self.male,
            Some(Gender::Female) => self.female,
            Some(Gender::Neutral) => self.neutral,
            None => self.unspecified,
        }
    }
}
