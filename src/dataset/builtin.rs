//! Compiled-in data for the Midshift MPL dashboard (Oct 2024 – May 2025).

use super::{parse_months, Dataset, DatasetError, Person, SpecialSeries};

/// Metric tracked for the roster.
pub const PRIMARY_METRIC: &str = "MPL";

/// Primary month window, oldest first.
pub const MONTHS: [&str; 8] = [
    "2024-10", "2024-11", "2024-12", "2025-01", "2025-02", "2025-03", "2025-04", "2025-05",
];

/// Roster in display order with one MPL count per month.
pub const ROSTER: [(&str, [u32; 8]); 4] = [
    ("Sheila Mae Genodia", [2, 3, 1, 0, 2, 1, 2, 1]),
    ("Julius Fernandez", [1, 2, 1, 0, 1, 2, 1, 0]),
    ("Kahlynne Garganera", [1, 2, 0, 1, 2, 2, 1, 1]),
    ("Rhay Mark", [3, 2, 2, 1, 0, 2, 1, 1]),
];

/// Name of the separately tracked person.
pub const SPECIAL_NAME: &str = "Michaelo Paler";

/// Metric tracked for the special series.
pub const SPECIAL_METRIC: &str = "TPL";

/// TPL counts for March, April and May 2025.
pub const SPECIAL_COUNTS: [u32; 3] = [2, 3, 1];

/// Month window of the special series.
pub const SPECIAL_MONTHS: [&str; 3] = ["2025-03", "2025-04", "2025-05"];

/// Builds the compiled-in dataset.
pub fn dataset() -> Result<Dataset, DatasetError> {
    let people = ROSTER
        .iter()
        .map(|(name, counts)| Person::new(*name, counts.to_vec()))
        .collect();
    let special = SpecialSeries {
        name: SPECIAL_NAME.to_string(),
        metric: SPECIAL_METRIC.to_string(),
        counts: SPECIAL_COUNTS.to_vec(),
        labels: parse_months(SPECIAL_NAME, &SPECIAL_MONTHS)?,
    };
    Dataset::new(
        PRIMARY_METRIC,
        parse_months(PRIMARY_METRIC, &MONTHS)?,
        people,
        special,
    )
}
