use portfolio_feed::prelude::*;

/// Mock MetricsGenerator returning fixed values
pub struct MockMetricsGenerator {
    pub pagespeed: u8,
    pub delivery_days: u8,
}

impl MockMetricsGenerator {
    pub fn new(pagespeed: u8, delivery_days: u8) -> Self {
        Self {
            pagespeed,
            delivery_days,
        }
    }
}

impl Default for MockMetricsGenerator {
    fn default() -> Self {
        Self::new(90, 7)
    }
}

impl MetricsGenerator for MockMetricsGenerator {
    fn pagespeed(&self) -> u8 {
        self.pagespeed
    }

    fn delivery_days(&self) -> u8 {
        self.delivery_days
    }
}
