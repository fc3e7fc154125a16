use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::rates::ShippingMethod;

/// Earliest and latest expected delivery dates for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryWindow {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

impl ShippingMethod {
    /// Counts business days (Monday to Friday) from the order date, exclusive.
    pub fn delivery_window(self, ordered_on: NaiveDate) -> DeliveryWindow {
        let (min_days, max_days) = self.business_days();
        DeliveryWindow {
            earliest: add_business_days(ordered_on, min_days),
            latest: add_business_days(ordered_on, max_days),
        }
    }
}

fn add_business_days(start: NaiveDate, days: u32) -> NaiveDate {
    let mut date = start;
    let mut remaining = days;
    while remaining > 0 {
        date = date + Duration::days(1);
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            remaining -= 1;
        }
    }
    date
}
