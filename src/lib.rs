/// Scraper for NDBC buoy station pages.
///
/// Pipeline: fetch the station status page (`ingest::ndbc`), locate labeled
/// value cells (`page`), strip units (`normalize`), flag stale observations
/// (`freshness`), assemble per-kind readings (`reading`), and classify values
/// into display buckets (`indicators`).

pub mod freshness;
pub mod indicators;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod page;
pub mod reading;
pub mod stations;
