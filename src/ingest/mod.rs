/// Upstream data retrieval.
///
/// Submodules:
/// - `ndbc` — blocking HTTP fetch of the NDBC station status page.

pub mod ndbc;
