//! Daily lucky number/color derived from a birth date and a calendar day.

use super::digits::birth_number;
use super::remedy_table::default_color;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lucky number and color for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyInsight {
    pub date: NaiveDate,
    /// Always in `1..=9`.
    pub lucky_number: u8,
    pub lucky_color: String,
}

/// Computes the insight for `today`; `None` when `date_of_birth` is blank.
///
/// The day sum covers the digits of `today` written as `DDMMYYYY`; a zero
/// remainder maps to `9`.
pub fn daily_insight(date_of_birth: &str, today: NaiveDate) -> Option<DailyInsight> {
    if date_of_birth.trim().is_empty() {
        return None;
    }

    let birth = u64::from(birth_number(date_of_birth));
    let day_sum: u64 = today
        .format("%d%m%Y")
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(u64::from)
        .sum();

    let lucky_number = match (birth + day_sum) % 9 {
        0 => 9,
        other => other as u8,
    };
    let lucky_color = default_color(lucky_number).unwrap_or_default().to_string();

    Some(DailyInsight {
        date: today,
        lucky_number,
        lucky_color,
    })
}
