//! Stable ordering of rows by a column key.

use super::column::Column;
use super::column::find_column;
use super::row::TableRow;
use super::row::Value;
use serde::Deserialize;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orients an ascending comparison. Ties stay ties, which keeps descending sorts stable.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// Which column the table is sorted by, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: Some(key.into()),
            direction,
        }
    }

    pub fn is_sorted_by(&self, key: &str) -> bool {
        self.key.as_deref() == Some(key)
    }

    /// The state after the user asks to sort by `key`.
    ///
    /// The current column flips between ascending and descending; any other column starts
    /// ascending. There is no way back to "unsorted".
    pub fn toggled(&self, key: &str) -> SortState {
        let direction = if self.is_sorted_by(key) {
            self.direction.reversed()
        } else {
            SortDirection::Ascending
        };
        SortState::by(key, direction)
    }
}

pub fn compare_values(a: &Value, b: &Value, direction: SortDirection) -> Ordering {
    direction.apply(a.cmp(b))
}

/// Source indices of `rows` ordered by the `key` field.
///
/// The sort is stable in both directions: rows with equal values keep their original relative
/// order. `rows` itself is left untouched.
pub fn sorted_indices<R: TableRow>(rows: &[R], key: &str, direction: SortDirection) -> Vec<usize> {
    let mut keyed: Vec<(usize, Value)> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| (i, row.value(key).into_owned()))
        .collect();
    keyed.sort_by(|(_, a), (_, b)| compare_values(a, b, direction));
    keyed.into_iter().map(|(i, _)| i).collect()
}

/// Display order of `rows` under `sort`.
///
/// Falls back to the host's order when sorting is disabled, no key is set, or the key names no
/// column in `columns`.
pub fn sort_order<R: TableRow>(
    rows: &[R],
    columns: &[Column<R>],
    sort: &SortState,
    sortable: bool,
) -> Vec<usize> {
    let key = match sort.key.as_deref() {
        Some(key) if sortable && find_column(columns, key).is_some() => key,
        _ => return (0..rows.len()).collect(),
    };
    sorted_indices(rows, key, sort.direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Row;

    fn names(values: &[&str]) -> Vec<Row> {
        values
            .iter()
            .enumerate()
            .map(|(i, n)| Row::new().with("id", i as i64).with("name", *n))
            .collect()
    }

    fn ids(rows: &[Row], order: &[usize]) -> Vec<i64> {
        order
            .iter()
            .map(|&i| match rows[i].value("id").into_owned() {
                Value::Int(n) => n,
                other => panic!("unexpected id {other:?}"),
            })
            .collect()
    }

    #[test]
    fn toggle_cycles_between_two_directions() {
        let s = SortState::unsorted().toggled("name");
        assert_eq!(s, SortState::by("name", SortDirection::Ascending));
        let s = s.toggled("name");
        assert_eq!(s.direction, SortDirection::Descending);
        let s = s.toggled("name");
        assert_eq!(s.direction, SortDirection::Ascending);
        let s = s.toggled("name").toggled("id");
        assert_eq!(s, SortState::by("id", SortDirection::Ascending));
    }

    #[test]
    fn ties_keep_source_order_in_both_directions() {
        let rows = names(&["b", "a", "b", "a", "c"]);
        let asc = sorted_indices(&rows, "name", SortDirection::Ascending);
        let desc = sorted_indices(&rows, "name", SortDirection::Descending);
        assert_eq!(ids(&rows, &asc), vec![1, 3, 0, 2, 4]);
        assert_eq!(ids(&rows, &desc), vec![4, 0, 2, 1, 3]);
    }

    #[test]
    fn distinct_values_reverse_exactly() {
        let rows = names(&["d", "a", "c", "b"]);
        let asc = sorted_indices(&rows, "name", SortDirection::Ascending);
        let mut desc = sorted_indices(&rows, "name", SortDirection::Descending);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn missing_values_sort_first_ascending() {
        let rows = vec![
            Row::new().with("id", 0).with("n", 3),
            Row::new().with("id", 1),
            Row::new().with("id", 2).with("n", 1),
        ];
        assert_eq!(
            sorted_indices(&rows, "n", SortDirection::Ascending),
            vec![1, 2, 0]
        );
    }

    #[test]
    fn unknown_key_or_disabled_sorting_is_identity() {
        let rows = names(&["c", "b", "a"]);
        let columns: Vec<Column<Row>> = vec![Column::new("name", "Name")];
        let by_missing = SortState::by("email", SortDirection::Ascending);
        assert_eq!(sort_order(&rows, &columns, &by_missing, true), vec![0, 1, 2]);

        let by_name = SortState::by("name", SortDirection::Ascending);
        assert_eq!(sort_order(&rows, &columns, &by_name, false), vec![0, 1, 2]);
        assert_eq!(sort_order(&rows, &columns, &by_name, true), vec![2, 1, 0]);
        assert_eq!(
            sort_order(&rows, &columns, &SortState::unsorted(), true),
            vec![0, 1, 2]
        );
    }
}
