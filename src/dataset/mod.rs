//! The tracked people, their monthly log counts and the month windows.
//!
//! A [`Dataset`] is built once at start-up, either from the built-in
//! constants or from a TOML file, and never changes afterwards. Every
//! constructor validates the data-model invariants so the rest of the crate
//! can rely on them.

/// Built-in roster and special series.
pub mod builtin;

/// Dataset error types.
pub mod error;

/// TOML dataset file loader.
pub mod loader;

pub use error::DatasetError;

use chrono::NaiveDate;
use std::collections::HashSet;
use std::fmt;

/// A calendar month identifier in `YYYY-MM` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLabel {
    label: String,
    start: NaiveDate,
}

impl MonthLabel {
    /// Parses a `YYYY-MM` label.
    pub fn parse(label: &str) -> Result<Self, DatasetError> {
        let invalid = || DatasetError::InvalidMonth {
            label: label.to_string(),
        };
        let bytes = label.as_bytes();
        let digits = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);
        // chrono alone would accept signs and space padding
        if bytes.len() != 7 || bytes[4] != b'-' || !digits(0..4) || !digits(5..7) {
            return Err(invalid());
        }
        let start = NaiveDate::parse_from_str(&format!("{label}-01"), "%Y-%m-%d")
            .map_err(|_| invalid())?;
        Ok(Self {
            label: label.to_string(),
            start,
        })
    }

    /// The full label, e.g. `2024-10`.
    pub fn as_str(&self) -> &str {
        &self.label
    }

    /// The label with its year prefix stripped, e.g. `10`.
    pub fn short(&self) -> &str {
        &self.label[5..]
    }

    /// Month name and year, e.g. `Oct 2024`.
    pub fn long(&self) -> String {
        self.start.format("%b %Y").to_string()
    }
}

impl fmt::Display for MonthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Parses a label sequence and checks it is non-empty and strictly increasing.
pub fn parse_months<S: AsRef<str>>(
    series: &str,
    labels: &[S],
) -> Result<Vec<MonthLabel>, DatasetError> {
    if labels.is_empty() {
        return Err(DatasetError::EmptyWindow {
            series: series.to_string(),
        });
    }
    let months = labels
        .iter()
        .map(|l| MonthLabel::parse(l.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    for pair in months.windows(2) {
        if pair[1].start <= pair[0].start {
            return Err(DatasetError::MonthsOutOfOrder {
                previous: pair[0].label.clone(),
                next: pair[1].label.clone(),
            });
        }
    }
    Ok(months)
}

/// One tracked person and their log count per month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Display name, unique within the roster.
    pub name: String,
    /// One count per month of the primary window.
    pub counts: Vec<u32>,
}

impl Person {
    /// Creates a person record.
    pub fn new(name: impl Into<String>, counts: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            counts,
        }
    }

    /// First word of the display name, used for tabs and cards.
    pub fn short_name(&self) -> &str {
        short_name(&self.name)
    }
}

/// Returns the first whitespace-separated word of `name`.
pub fn short_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

/// Ordered, immutable list of the primary tracked people.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    /// Number of people.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Always false for a validated roster.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// People in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.people.iter()
    }

    /// Position of the person named `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.people.iter().position(|p| p.name == name)
    }

    /// Person named `name`.
    pub fn find(&self, name: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.name == name)
    }
}

/// A person tracked separately over their own, shorter window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialSeries {
    /// Display name.
    pub name: String,
    /// Metric label, e.g. `TPL`.
    pub metric: String,
    /// One count per entry of `labels`.
    pub counts: Vec<u32>,
    /// The series' own month window.
    pub labels: Vec<MonthLabel>,
}

impl SpecialSeries {
    /// First word of the display name.
    pub fn short_name(&self) -> &str {
        short_name(&self.name)
    }
}

/// The complete, validated data set shown by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    metric: String,
    months: Vec<MonthLabel>,
    roster: Roster,
    special: SpecialSeries,
}

impl Dataset {
    /// Validates and assembles a dataset.
    pub fn new(
        metric: impl Into<String>,
        months: Vec<MonthLabel>,
        people: Vec<Person>,
        special: SpecialSeries,
    ) -> Result<Self, DatasetError> {
        let metric = metric.into();
        if months.is_empty() {
            return Err(DatasetError::EmptyWindow {
                series: metric.clone(),
            });
        }
        if people.is_empty() {
            return Err(DatasetError::EmptyRoster);
        }

        let mut seen = HashSet::new();
        for person in &people {
            if person.name.trim().is_empty() {
                return Err(DatasetError::BlankName);
            }
            if !seen.insert(person.name.as_str()) {
                return Err(DatasetError::DuplicateName {
                    name: person.name.clone(),
                });
            }
            if person.counts.len() != months.len() {
                return Err(DatasetError::LengthMismatch {
                    name: person.name.clone(),
                    expected: months.len(),
                    actual: person.counts.len(),
                });
            }
        }

        if special.name.trim().is_empty() {
            return Err(DatasetError::BlankName);
        }
        if special.labels.is_empty() {
            return Err(DatasetError::EmptyWindow {
                series: special.name.clone(),
            });
        }
        if special.counts.len() != special.labels.len() {
            return Err(DatasetError::LengthMismatch {
                name: special.name.clone(),
                expected: special.labels.len(),
                actual: special.counts.len(),
            });
        }

        Ok(Self {
            metric,
            months,
            roster: Roster { people },
            special,
        })
    }

    /// Metric label of the primary window, e.g. `MPL`.
    pub fn metric(&self) -> &str {
        &self.metric
    }

    /// Month labels of the primary window, oldest first.
    pub fn months(&self) -> &[MonthLabel] {
        &self.months
    }

    /// The primary roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The separately scoped series.
    pub fn special(&self) -> &SpecialSeries {
        &self.special
    }

    /// `Oct 2024 – May 2025` style range of the primary window.
    pub fn window_range(&self) -> String {
        match (self.months.first(), self.months.last()) {
            (Some(first), Some(last)) if first != last => {
                format!("{} – {}", first.long(), last.long())
            }
            (Some(only), _) => only.long(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn months(labels: &[&str]) -> Vec<MonthLabel> {
        parse_months("test", labels).expect("valid months")
    }

    fn special() -> SpecialSeries {
        SpecialSeries {
            name: "Michaelo Paler".to_string(),
            metric: "TPL".to_string(),
            counts: vec![2, 3, 1],
            labels: months(&["2025-03", "2025-04", "2025-05"]),
        }
    }

    #[test]
    fn month_label_parses_and_strips_year() {
        let label = MonthLabel::parse("2024-10").expect("valid label");
        assert_eq!(label.as_str(), "2024-10");
        assert_eq!(label.short(), "10");
        assert_eq!(label.long(), "Oct 2024");
        assert_eq!(label.to_string(), "2024-10");
    }

    #[test]
    fn month_label_rejects_bad_formats() {
        for bad in [
            "2024-13", "2024-1", "24-10", "2024/10", "", "2024-00", "abcd-ef", "2024- 1",
            "+024-10", "-024-10", "2024-+1", " 024-10",
        ] {
            assert!(
                matches!(MonthLabel::parse(bad), Err(DatasetError::InvalidMonth { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_months_requires_increasing_order() {
        let err = parse_months("MPL", &["2025-01", "2024-12"]).expect_err("out of order");
        assert!(matches!(err, DatasetError::MonthsOutOfOrder { .. }));

        let err = parse_months("MPL", &["2025-01", "2025-01"]).expect_err("duplicate month");
        assert!(matches!(err, DatasetError::MonthsOutOfOrder { .. }));
    }

    #[test]
    fn parse_months_rejects_empty_window() {
        let labels: [&str; 0] = [];
        let err = parse_months("MPL", &labels).expect_err("empty");
        assert!(matches!(err, DatasetError::EmptyWindow { .. }));
    }

    #[test]
    fn short_name_takes_first_word() {
        assert_eq!(short_name("Sheila Mae Genodia"), "Sheila");
        assert_eq!(short_name("Rhay Mark"), "Rhay");
        assert_eq!(short_name("Solo"), "Solo");
    }

    #[test]
    fn dataset_rejects_empty_roster() {
        let err = Dataset::new("MPL", months(&["2025-01"]), vec![], special()).expect_err("empty");
        assert!(matches!(err, DatasetError::EmptyRoster));
    }

    #[test]
    fn dataset_rejects_duplicate_names() {
        let people = vec![Person::new("Rhay Mark", vec![1]), Person::new("Rhay Mark", vec![2])];
        let err = Dataset::new("MPL", months(&["2025-01"]), people, special()).expect_err("dup");
        assert!(matches!(err, DatasetError::DuplicateName { name } if name == "Rhay Mark"));
    }

    #[test]
    fn dataset_rejects_short_count_sequence() {
        let people = vec![Person::new("Rhay Mark", vec![1])];
        let err = Dataset::new("MPL", months(&["2025-01", "2025-02"]), people, special())
            .expect_err("mismatch");
        assert!(matches!(
            err,
            DatasetError::LengthMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn dataset_rejects_special_length_mismatch() {
        let mut sp = special();
        sp.counts.push(4);
        let people = vec![Person::new("Rhay Mark", vec![1])];
        let err = Dataset::new("MPL", months(&["2025-01"]), people, sp).expect_err("mismatch");
        assert!(matches!(
            err,
            DatasetError::LengthMismatch {
                expected: 3,
                actual: 4,
                ..
            }
        ));
    }

    #[test]
    fn dataset_rejects_blank_name() {
        let people = vec![Person::new("   ", vec![1])];
        let err = Dataset::new("MPL", months(&["2025-01"]), people, special()).expect_err("blank");
        assert!(matches!(err, DatasetError::BlankName));
    }

    #[test]
    fn roster_lookup_by_name() {
        let people = vec![Person::new("A One", vec![1]), Person::new("B Two", vec![2])];
        let dataset =
            Dataset::new("MPL", months(&["2025-01"]), people, special()).expect("valid dataset");
        let roster = dataset.roster();
        assert_eq!(roster.len(), 2);
        assert!(!roster.is_empty());
        assert_eq!(roster.position("B Two"), Some(1));
        assert_eq!(roster.find("A One").map(|p| p.counts.clone()), Some(vec![1]));
        assert!(roster.find("Nobody").is_none());
    }

    #[test]
    fn window_range_single_month() {
        let people = vec![Person::new("A One", vec![1])];
        let dataset =
            Dataset::new("MPL", months(&["2025-01"]), people, special()).expect("valid dataset");
        assert_eq!(dataset.window_range(), "Jan 2025");
    }
}
