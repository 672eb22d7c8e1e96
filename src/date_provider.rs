use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Trait for providing the current date/time to the report
/// This allows relative labels to be rendered against a fixed date
pub trait DateProvider: Send + Sync {
    fn get_current_time(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.get_current_time().date_naive()
    }
}

/// Default date provider that uses the system's current date/time
pub struct SystemDateProvider;

impl DateProvider for SystemDateProvider {
    fn get_current_time(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Date provider pinned to the end of a given day, so every activity recorded
/// on that day is already in the past
pub struct FixedDateProvider {
    date: NaiveDate,
}

impl FixedDateProvider {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl DateProvider for FixedDateProvider {
    fn get_current_time(&self) -> DateTime<Utc> {
        let end_of_day = self
            .date
            .and_hms_opt(23, 59, 59)
            .unwrap_or_else(|| self.date.and_time(NaiveTime::default()));
        end_of_day.and_utc()
    }
}
