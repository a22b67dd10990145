use crate::ports::outbound::metrics_generator::{DELIVERY_DAYS_RANGE, PAGESPEED_RANGE};
use crate::ports::outbound::MetricsGenerator;
use rand::Rng;

/// RandomMetricsGenerator draws card metrics uniformly from their ranges.
///
/// Placeholder until real performance data is available: values change on
/// every fetch cycle.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomMetricsGenerator;

impl RandomMetricsGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl MetricsGenerator for RandomMetricsGenerator {
    fn pagespeed(&self) -> u8 {
        rand::rng().random_range(PAGESPEED_RANGE)
    }

    fn delivery_days(&self) -> u8 {
        rand::rng().random_range(DELIVERY_DAYS_RANGE)
    }
}
