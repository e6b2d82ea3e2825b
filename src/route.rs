//! Route corridor filtering and flight duration calculation.

use chrono::NaiveTime;
use tracing::{debug, warn};

use crate::error::{Result, TicketError};
use crate::parser::RawTicket;

pub const DEFAULT_ORIGIN: &str = "Владивосток";
pub const DEFAULT_DESTINATION: &str = "Тель-Авив";

const MINUTES_PER_DAY: i64 = 24 * 60;

/// The (origin, destination) pair tickets are filtered on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub origin: String,
    pub destination: String,
}

impl Route {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// Exact, case-sensitive match on both endpoint names.
    pub fn matches(&self, ticket: &RawTicket) -> bool {
        ticket.origin_name == self.origin && ticket.destination_name == self.destination
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN, DEFAULT_DESTINATION)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}

/// A corridor ticket reduced to what the statistics need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredTicket {
    pub carrier: String,
    pub price: i64,
    /// Flight time in minutes, always within `0..1440`.
    pub duration: u32,
}

/// Result of [`filter_tickets_lenient`].
#[derive(Debug, Default)]
pub struct FilterOutcome {
    pub tickets: Vec<FilteredTicket>,
    pub skipped: usize,
}

/// Parses a 24-hour `H:MM` time of day. The hour may omit its leading zero,
/// the minutes may not.
pub fn parse_time_of_day(field: &'static str, value: &str) -> Result<NaiveTime> {
    let invalid = || TicketError::TimeFormat {
        field,
        value: value.to_string(),
    };

    let (hour, minute) = value.split_once(':').ok_or_else(invalid)?;
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !(1..=2).contains(&hour.len()) || minute.len() != 2 || !all_digits(hour) || !all_digits(minute)
    {
        return Err(invalid());
    }

    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| invalid())
}

/// Minutes from `departure` to `arrival`, wrapping once past midnight.
///
/// Equal times yield 0. Flights longer than a day cannot be represented.
pub fn flight_duration(departure: NaiveTime, arrival: NaiveTime) -> u32 {
    let minutes = arrival
        .signed_duration_since(departure)
        .num_minutes()
        .rem_euclid(MINUTES_PER_DAY);
    minutes as u32
}

fn transform(ticket: &RawTicket) -> Result<FilteredTicket> {
    let departure = parse_time_of_day("departure_time", &ticket.departure_time)?;
    let arrival = parse_time_of_day("arrival_time", &ticket.arrival_time)?;

    Ok(FilteredTicket {
        carrier: ticket.carrier.clone(),
        price: ticket.price,
        duration: flight_duration(departure, arrival),
    })
}

/// Keeps tickets on `route`, in source order, and computes their durations.
///
/// # Errors
///
/// Returns [`TicketError::TimeFormat`] for the first corridor ticket whose
/// departure or arrival time does not parse. Tickets off the corridor are
/// never inspected.
#[tracing::instrument(skip_all, fields(route = %route, total = tickets.len()))]
pub fn filter_tickets(tickets: &[RawTicket], route: &Route) -> Result<Vec<FilteredTicket>> {
    let filtered = tickets
        .iter()
        .filter(|t| route.matches(t))
        .map(transform)
        .collect::<Result<Vec<_>>>()?;

    debug!(matched = filtered.len(), "Tickets filtered");
    Ok(filtered)
}

/// Like [`filter_tickets`], but skips corridor tickets with unparseable times
/// instead of failing.
#[tracing::instrument(skip_all, fields(route = %route, total = tickets.len()))]
pub fn filter_tickets_lenient(tickets: &[RawTicket], route: &Route) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();

    for (index, ticket) in tickets.iter().enumerate() {
        if !route.matches(ticket) {
            continue;
        }

        match transform(ticket) {
            Ok(filtered) => outcome.tickets.push(filtered),
            Err(e) => {
                warn!(index, carrier = %ticket.carrier, error = %e, "Skipping malformed ticket");
                outcome.skipped += 1;
            }
        }
    }

    debug!(
        matched = outcome.tickets.len(),
        skipped = outcome.skipped,
        "Tickets filtered"
    );
    outcome
}
