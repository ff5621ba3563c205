use crate::application::ports::time::Clock;
use chrono::{DateTime, Local, NaiveDate, Utc};

#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    /// The device's calendar day, not UTC's.
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
