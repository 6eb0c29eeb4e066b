use chrono::{Datelike, Local, Months, NaiveDate};

/// The server's local calendar date.
///
/// This is the single source of truth for "today" in analytics windows and
/// expense date validation.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// `date` moved back by `months` calendar months.
///
/// The day is clamped to the last day of the target month (e.g. Aug 31 minus
/// six months is Feb 28/29).
pub fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

/// First day of the month `months` calendar months before `date`.
pub fn first_day_of_month_months_ago(date: NaiveDate, months: u32) -> NaiveDate {
    let shifted = months_before(date, months);
    shifted.with_day(1).unwrap_or(shifted)
}

/// January 1st of the year `years` years before `date`.
pub fn first_day_of_year_years_ago(date: NaiveDate, years: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year() - years, 1, 1).unwrap_or(NaiveDate::MIN)
}
