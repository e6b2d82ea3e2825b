//! Data types produced by the aggregation pipeline.

/// Summary of ticket prices on a route.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceStats {
    pub count: usize,
    pub min: i64,
    pub max: i64,
    pub mean: f64,
    pub median: f64,
    /// `mean - median`; negative when the distribution leans low.
    pub spread: f64,
}
