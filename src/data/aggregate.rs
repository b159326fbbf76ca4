//! Grouped aggregation
//!
//! Per-group arithmetic mean of one numeric column. Groups come out in the
//! order their key first appears in the table.

use serde::Serialize;
use std::collections::HashMap;

use super::error::{DataError, DataResult};
use super::frame::{Cell, Dataset};

/// Mean of one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMean {
    pub key: String,
    pub mean: f64,
    pub count: usize,
}

/// Average `value` grouped by `by`
///
/// Missing values are skipped. A group with no values has a NaN mean.
pub fn group_mean(dataset: &Dataset, by: &str, value: &str) -> DataResult<Vec<GroupMean>> {
    let key_idx = dataset.column_index(by)?;
    let value_idx = dataset.column_index(value)?;

    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, (f64, usize)> = HashMap::new();

    for (row_idx, row) in dataset.rows().iter().enumerate() {
        let key = row[key_idx].to_string();

        let entry = sums.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            (0.0, 0)
        });

        match &row[value_idx] {
            Cell::Number(n) => {
                entry.0 += n;
                entry.1 += 1;
            }
            Cell::Missing => {}
            Cell::Text(_) => {
                return Err(DataError::NonNumeric {
                    column: value.to_string(),
                    row: row_idx + 1,
                })
            }
        }
    }

    Ok(order
        .into_iter()
        .map(|key| {
            let (sum, count) = sums[&key];
            let mean = if count == 0 { f64::NAN } else { sum / count as f64 };
            GroupMean { key, mean, count }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_csv;

    fn dataset(csv: &str) -> Dataset {
        parse_csv(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_group_mean_first_appearance_order() {
        let ds = dataset(
            "continent,lifeExp
Asia,40
Europe,70
Asia,60
Africa,50
Europe,80",
        );

        let groups = group_mean(&ds, "continent", "lifeExp").unwrap();
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["Asia", "Europe", "Africa"]);

        assert_eq!(groups[0].mean, 50.0);
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[1].mean, 75.0);
        assert_eq!(groups[2].mean, 50.0);
        assert_eq!(groups[2].count, 1);
    }

    #[test]
    fn test_group_mean_skips_missing() {
        let ds = dataset(
            "continent,pop
Oceania,10
Oceania,
Oceania,20
Antarctica,",
        );

        let groups = group_mean(&ds, "continent", "pop").unwrap();
        assert_eq!(groups[0].mean, 15.0);
        assert_eq!(groups[0].count, 2);
        assert!(groups[1].mean.is_nan());
        assert_eq!(groups[1].count, 0);
    }

    #[test]
    fn test_group_mean_skips_nan_marker() {
        let ds = dataset(
            "continent,lifeExp
Africa,50
Africa,NaN
Africa,70",
        );

        let groups = group_mean(&ds, "continent", "lifeExp").unwrap();
        assert_eq!(groups[0].mean, 60.0);
        assert_eq!(groups[0].count, 2);
    }

    #[test]
    fn test_group_mean_skips_na_markers() {
        let ds = dataset(
            "continent,lifeExp
Africa,50
Africa,NA
Africa,N/A
Africa,null
Africa,inf
Africa,70",
        );

        let groups = group_mean(&ds, "continent", "lifeExp").unwrap();
        assert_eq!(groups[0].mean, 60.0);
        assert_eq!(groups[0].count, 2);
    }

    #[test]
    fn test_group_mean_non_numeric() {
        let ds = dataset(
            "continent,country
Asia,Japan",
        );

        let result = group_mean(&ds, "continent", "country");
        assert!(matches!(
            result,
            Err(DataError::NonNumeric { row: 1, .. })
        ));
    }

    #[test]
    fn test_group_mean_unknown_column() {
        let ds = dataset("continent,pop\nAsia,1");
        assert!(matches!(
            group_mean(&ds, "region", "pop"),
            Err(DataError::UnknownColumn(_))
        ));
        assert!(matches!(
            group_mean(&ds, "continent", "gdp"),
            Err(DataError::UnknownColumn(_))
        ));
    }
}
