use chrono::{Duration, NaiveDate};
use rand::Rng;

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 65;
pub const MIN_SALARY: u32 = 30_000;
pub const MAX_SALARY: u32 = 150_000;

pub const HIRE_DATE_FORMAT: &str = "%m/%d/%Y";

pub fn hire_date_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// One synthesized row. The id is assigned by the table on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub name: String,
    pub age: u32,
    pub salary: String,
    pub hire_date: String,
}

impl Employee {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, first: &str, last: &str, today: NaiveDate) -> Self {
        let age = rng.random_range(MIN_AGE..=MAX_AGE);
        let salary = format_salary(rng.random_range(MIN_SALARY..=MAX_SALARY));
        let hire_date = random_hire_date(rng, hire_date_start(), today)
            .format(HIRE_DATE_FORMAT)
            .to_string();
        Self {
            name: format!("{first} {last}"),
            age,
            salary,
            hire_date,
        }
    }
}

/// `$` followed by the amount grouped in thousands, e.g. `$123,456`.
pub fn format_salary(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Uniform day in `[start, end]`. An inverted range collapses to `start`.
pub fn random_hire_date<R: Rng + ?Sized>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span = (end - start).num_days().max(0);
    let offset = rng.random_range(0..=span);
    start + Duration::days(offset)
}
