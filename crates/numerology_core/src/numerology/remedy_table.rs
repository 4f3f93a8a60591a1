//! Built-in default remedy text per digit.

const DEFAULT_REMEDIES: [&str; 9] = [
    "Leadership, Red, Sun mantra",
    "Patience, White, Moon mantra",
    "Creativity, Yellow, Jupiter mantra",
    "Stability, Green, Rahu mantra",
    "Freedom, Blue, Mercury mantra",
    "Harmony, Indigo, Venus mantra",
    "Spirituality, Violet, Ketu mantra",
    "Success, Gray, Saturn mantra",
    "Wisdom, Orange, Mars mantra",
];

/// Returns the default remedy for `number`, or `None` outside `1..=9`.
pub fn default_remedy(number: u8) -> Option<&'static str> {
    match number {
        1..=9 => Some(DEFAULT_REMEDIES[usize::from(number - 1)]),
        _ => None,
    }
}

/// Returns the color field (second comma-separated part) of a default remedy.
pub fn default_color(number: u8) -> Option<&'static str> {
    default_remedy(number).and_then(|text| text.split(',').nth(1).map(str::trim))
}

#[cfg(test)]
mod tests {
    use super::{default_color, default_remedy};

    #[test]
    fn table_covers_full_domain() {
        for number in 1..=9 {
            let text = default_remedy(number).expect("every digit has a default");
            assert_eq!(text.split(',').count(), 3);
        }
        assert_eq!(default_remedy(0), None);
        assert_eq!(default_remedy(10), None);
    }

    #[test]
    fn colors_are_trimmed() {
        assert_eq!(default_color(1), Some("Red"));
        assert_eq!(default_color(9), Some("Orange"));
    }
}
