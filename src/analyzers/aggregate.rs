use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::analyzers::types::PriceStats;
use crate::analyzers::utility::{mean, median};
use crate::route::FilteredTicket;

/// Shortest flight time per carrier, keyed and ordered by carrier name.
///
/// When a carrier has several tickets with the same minimum duration the
/// first one in source order wins.
pub fn min_duration_by_carrier(tickets: &[FilteredTicket]) -> BTreeMap<String, u32> {
    let mut fastest: BTreeMap<String, u32> = BTreeMap::new();

    for ticket in tickets {
        match fastest.entry(ticket.carrier.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(ticket.duration);
            }
            Entry::Occupied(mut slot) => {
                if ticket.duration < *slot.get() {
                    slot.insert(ticket.duration);
                }
            }
        }
    }

    fastest
}

/// Mean, median and spread of ticket prices. Returns `None` when there are
/// no tickets.
pub fn price_stats(tickets: &[FilteredTicket]) -> Option<PriceStats> {
    let mut prices: Vec<i64> = tickets.iter().map(|t| t.price).collect();
    if prices.is_empty() {
        return None;
    }
    prices.sort_unstable();

    let values: Vec<f64> = prices.iter().map(|&p| p as f64).collect();
    let avg = mean(&values);
    let mid = median(&values);

    Some(PriceStats {
        count: prices.len(),
        min: prices[0],
        max: prices[prices.len() - 1],
        mean: avg,
        median: mid,
        spread: avg - mid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filtered(carrier: &str, price: i64, duration: u32) -> FilteredTicket {
        FilteredTicket {
            carrier: carrier.to_string(),
            price,
            duration,
        }
    }

    #[test]
    fn test_min_duration_per_carrier() {
        let tickets = vec![
            filtered("AB", 100, 300),
            filtered("S7", 100, 500),
            filtered("AB", 100, 120),
            filtered("AB", 100, 450),
        ];

        let fastest = min_duration_by_carrier(&tickets);

        assert_eq!(fastest.len(), 2);
        assert_eq!(fastest["AB"], 120);
        assert_eq!(fastest["S7"], 500);
    }

    #[test]
    fn test_min_duration_orders_carriers_alphabetically() {
        let tickets = vec![
            filtered("TK", 1, 10),
            filtered("BA", 1, 10),
            filtered("SU", 1, 10),
        ];

        let carriers: Vec<_> = min_duration_by_carrier(&tickets).into_keys().collect();
        assert_eq!(carriers, vec!["BA", "SU", "TK"]);
    }

    #[test]
    fn test_min_duration_empty() {
        assert!(min_duration_by_carrier(&[]).is_empty());
    }

    #[test]
    fn test_price_stats_empty() {
        assert_eq!(price_stats(&[]), None);
    }

    #[test]
    fn test_price_stats_skewed_high() {
        let tickets: Vec<_> = [100, 1000, 100, 100]
            .into_iter()
            .map(|p| filtered("SU", p, 60))
            .collect();

        let stats = price_stats(&tickets).unwrap();

        assert_eq!(stats.count, 4);
        assert_eq!(stats.min, 100);
        assert_eq!(stats.max, 1000);
        assert_eq!(stats.mean, 325.0);
        assert_eq!(stats.median, 100.0);
        assert_eq!(stats.spread, 225.0);
    }

    #[test]
    fn test_price_stats_negative_spread() {
        let tickets: Vec<_> = [300, 10, 400]
            .into_iter()
            .map(|p| filtered("SU", p, 60))
            .collect();

        let stats = price_stats(&tickets).unwrap();

        assert_eq!(stats.median, 300.0);
        assert!((stats.mean - 236.666_666).abs() < 1e-3);
        assert!(stats.spread < 0.0);
        assert_eq!(stats.spread, stats.mean - stats.median);
    }

    #[test]
    fn test_price_stats_median_uses_sorted_prices() {
        let tickets: Vec<_> = [400, 100, 300, 200]
            .into_iter()
            .map(|p| filtered("SU", p, 60))
            .collect();

        assert_eq!(price_stats(&tickets).unwrap().median, 250.0);
    }
}
