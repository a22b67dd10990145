use std::ops::Range;

/// Range of the synthesized performance score
pub const PAGESPEED_RANGE: Range<u8> = 85..98;

/// Range of the synthesized delivery estimate, in days
pub const DELIVERY_DAYS_RANGE: Range<u8> = 3..11;

/// MetricsGenerator port supplying the display metrics of a project card
///
/// The values are not measured. Each call is an independent draw and must
/// stay inside `PAGESPEED_RANGE` / `DELIVERY_DAYS_RANGE`.
pub trait MetricsGenerator: Send + Sync {
    fn pagespeed(&self) -> u8;

    fn delivery_days(&self) -> u8;
}
