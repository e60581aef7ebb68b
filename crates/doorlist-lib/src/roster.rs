// ABOUTME: In-memory roster of guest lists and the door workflow around them
// ABOUTME: Creates lists from guest text, searches guests, and records check-ins

use crate::guest::{Guest, GuestUpdate};
use crate::parser::GuestListParser;
use crate::{DoorlistError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, info};

/// Shortest query the door search will act on
pub const MIN_SEARCH_LEN: usize = 2;

/// The promoter creating a guest list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promoter {
    pub id: String,
    pub name: String,
    pub venue_id: String,
}

/// A guest list for one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestList {
    pub id: String,
    pub title: String,
    pub event_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub promoter_id: String,
    pub promoter_name: String,
    pub venue_id: String,
    pub guests: Vec<Guest>,
}

/// Ordering for a guest list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuestOrder {
    #[default]
    Name,
    /// Arrived guests first, then by name
    ArrivedFirst,
}

impl GuestList {
    /// Whether the event falls on the given calendar day (UTC)
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.event_date.date_naive() == date
    }

    pub fn arrived_count(&self) -> usize {
        self.guests.iter().filter(|g| g.arrived).count()
    }

    pub fn guest(&self, guest_id: &str) -> Option<&Guest> {
        self.guests.iter().find(|g| g.id == guest_id)
    }

    /// Guests whose name contains `query`, ignoring case
    pub fn filter(&self, query: &str) -> Vec<&Guest> {
        self.guests.iter().filter(|g| g.matches(query)).collect()
    }

    /// Guests sorted for display
    pub fn sorted_guests(&self, order: GuestOrder) -> Vec<&Guest> {
        let mut guests: Vec<&Guest> = self.guests.iter().collect();
        guests.sort_by(|a, b| compare_guests(a, b, order));
        guests
    }

    fn guest_mut(&mut self, guest_id: &str) -> Result<&mut Guest> {
        let guest_list_id = &self.id;
        self.guests
            .iter_mut()
            .find(|g| g.id == guest_id)
            .ok_or_else(|| DoorlistError::GuestNotFound {
                guest_list_id: guest_list_id.clone(),
                guest_id: guest_id.to_string(),
            })
    }
}

fn compare_guests(a: &Guest, b: &Guest, order: GuestOrder) -> Ordering {
    let by_name = || {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    };
    match order {
        GuestOrder::Name => by_name(),
        GuestOrder::ArrivedFirst => b.arrived.cmp(&a.arrived).then_with(by_name),
    }
}

/// A guest found by the door search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub guest_list: &'a GuestList,
    pub guest: &'a Guest,
}

/// All guest lists known to the door, in creation order
#[derive(Debug, Default)]
pub struct Roster {
    parser: GuestListParser,
    lists: Vec<GuestList>,
}

impl Roster {
    /// Create a new empty roster with the default parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty roster that parses guest text with `parser`
    pub fn with_parser(parser: GuestListParser) -> Self {
        Self {
            parser,
            lists: Vec::new(),
        }
    }

    pub fn lists(&self) -> &[GuestList] {
        &self.lists
    }

    /// Add an already-built list (seed data, imports)
    pub fn insert(&mut self, list: GuestList) -> Result<()> {
        if self.get(&list.id).is_some() {
            return Err(DoorlistError::InvalidGuestList(format!(
                "duplicate guest list id '{}'",
                list.id
            )));
        }
        self.lists.push(list);
        Ok(())
    }

    /// Create a guest list by parsing `guest_text` for `promoter`
    pub fn create_guest_list(
        &mut self,
        title: &str,
        event_date: DateTime<Utc>,
        guest_text: &str,
        promoter: &Promoter,
        now: DateTime<Utc>,
    ) -> Result<&GuestList> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DoorlistError::InvalidGuestList(
                "title must not be blank".to_string(),
            ));
        }

        let id = self.next_id(now);
        let outcome = self.parser.parse(guest_text, &id);

        info!(
            guest_list_id = %id,
            title,
            guests = outcome.guests.len(),
            "guest list created"
        );

        self.lists.push(GuestList {
            id,
            title: title.to_string(),
            event_date,
            created_at: now,
            promoter_id: promoter.id.clone(),
            promoter_name: promoter.name.clone(),
            venue_id: promoter.venue_id.clone(),
            guests: outcome.guests,
        });
        let index = self.lists.len() - 1;
        Ok(&self.lists[index])
    }

    pub fn get(&self, id: &str) -> Option<&GuestList> {
        self.lists.iter().find(|list| list.id == id)
    }

    /// Lists whose event falls on `date`
    pub fn lists_on(&self, date: NaiveDate) -> Vec<&GuestList> {
        self.lists.iter().filter(|list| list.is_on(date)).collect()
    }

    pub fn lists_by_promoter(&self, promoter_id: &str) -> Vec<&GuestList> {
        self.lists
            .iter()
            .filter(|list| list.promoter_id == promoter_id)
            .collect()
    }

    /// Apply a partial update to one guest
    pub fn update_guest(
        &mut self,
        guest_list_id: &str,
        guest_id: &str,
        update: GuestUpdate,
    ) -> Result<&Guest> {
        let guest = self.list_mut(guest_list_id)?.guest_mut(guest_id)?;
        guest.apply(update);
        debug!(guest_list_id, guest_id, arrived = guest.arrived, "guest updated");
        Ok(&*guest)
    }

    /// Mark a guest as arrived
    pub fn check_in(
        &mut self,
        guest_list_id: &str,
        guest_id: &str,
        at: DateTime<Utc>,
    ) -> Result<&Guest> {
        let guest = self.update_guest(guest_list_id, guest_id, GuestUpdate::arrival(at))?;
        info!(guest_list_id, guest_id, name = %guest.name, "guest checked in");
        Ok(guest)
    }

    /// Flip a guest's arrival state; un-checking clears the arrival time
    pub fn toggle_arrival(
        &mut self,
        guest_list_id: &str,
        guest_id: &str,
        at: DateTime<Utc>,
    ) -> Result<&Guest> {
        let arrived = self
            .list_mut(guest_list_id)?
            .guest_mut(guest_id)?
            .arrived;
        let update = if arrived {
            GuestUpdate::departure()
        } else {
            GuestUpdate::arrival(at)
        };
        self.update_guest(guest_list_id, guest_id, update)
    }

    /// Door search across all lists, optionally only those on `date`
    ///
    /// Queries shorter than [`MIN_SEARCH_LEN`] characters return nothing.
    pub fn search(&self, query: &str, date: Option<NaiveDate>) -> Vec<SearchHit<'_>> {
        let query = query.trim();
        if query.chars().count() < MIN_SEARCH_LEN {
            return Vec::new();
        }

        self.lists
            .iter()
            .filter(|list| date.map_or(true, |d| list.is_on(d)))
            .flat_map(|list| {
                list.guests
                    .iter()
                    .filter(|guest| guest.matches(query))
                    .map(move |guest| SearchHit {
                        guest_list: list,
                        guest,
                    })
            })
            .collect()
    }

    fn list_mut(&mut self, id: &str) -> Result<&mut GuestList> {
        self.lists
            .iter_mut()
            .find(|list| list.id == id)
            .ok_or_else(|| DoorlistError::GuestListNotFound(id.to_string()))
    }

    /// `gl<unix-millis>`, suffixed when lists are created within the same millisecond
    fn next_id(&self, now: DateTime<Utc>) -> String {
        let base = format!("gl{}", now.timestamp_millis());
        if self.get(&base).is_none() {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base}-{n}");
            if self.get(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }
}
