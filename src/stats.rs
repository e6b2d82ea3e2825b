use std::collections::BTreeMap;

use crate::analyzers::aggregate::{min_duration_by_carrier, price_stats};
use crate::analyzers::types::PriceStats;
use crate::route::{FilteredTicket, Route};

#[derive(Debug, Clone, PartialEq)]
pub struct RouteStats {
    pub route: Route,
    pub ticket_count: usize,

    // carrier -> shortest flight, minutes
    pub min_duration_by_carrier: BTreeMap<String, u32>,

    // None when nothing matched the route
    pub prices: Option<PriceStats>,
}

impl RouteStats {
    pub fn from_tickets(route: Route, tickets: &[FilteredTicket]) -> Self {
        RouteStats {
            route,
            ticket_count: tickets.len(),
            min_duration_by_carrier: min_duration_by_carrier(tickets),
            prices: price_stats(tickets),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ticket_count == 0
    }
}
