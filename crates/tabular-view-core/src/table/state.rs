//! Table state and its reducer.
//!
//! [`TableState`] never changes in place: [`TableState::reduce`] maps the old state and one
//! [`TableEvent`] to a [`Transition`] holding the next state and what changed.

use super::column::Column;
use super::column::find_column;
use super::paginate::PageState;
use super::sort::SortDirection;
use super::sort::SortState;

/// Mutually exclusive display states of a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableStatus {
    /// The host is still fetching data. Nothing is rendered and input is ignored.
    Loading,
    /// Not loading and no rows.
    Empty,
    Populated,
}

impl TableStatus {
    /// Loading takes precedence over the row count.
    pub fn from_flags(loading: bool, rows: usize) -> Self {
        if loading {
            TableStatus::Loading
        } else if rows == 0 {
            TableStatus::Empty
        } else {
            TableStatus::Populated
        }
    }

    pub fn is_interactive(self) -> bool {
        self == TableStatus::Populated
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableEvent {
    /// Header activation for the column with this key.
    Sort(String),
    GoToPage(usize),
    FirstPage,
    PreviousPage,
    NextPage,
    LastPage,
    SetPageSize(usize),
}

/// What a transition changed, for the host to react to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableChange {
    Unchanged,
    SortChanged {
        key: String,
        direction: SortDirection,
    },
    PageChanged(usize),
    PageSizeChanged(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: TableState,
    pub change: TableChange,
}

/// Everything outside [`TableState`] that a transition depends on.
pub struct ReduceContext<'a, R> {
    pub columns: &'a [Column<R>],
    pub row_count: usize,
    pub loading: bool,
    /// Table-wide sort switch; per-column `sortable` can only narrow it.
    pub sortable: bool,
    pub pagination: bool,
}

impl<R> ReduceContext<'_, R> {
    pub fn status(&self) -> TableStatus {
        TableStatus::from_flags(self.loading, self.row_count)
    }

    fn can_sort_by(&self, key: &str) -> bool {
        self.sortable && find_column(self.columns, key).is_some_and(|c| c.sortable)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableState {
    pub sort: SortState,
    pub page: PageState,
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            sort: SortState::unsorted(),
            page: PageState::new(page_size),
        }
    }

    pub fn reduce<R>(&self, event: &TableEvent, ctx: &ReduceContext<'_, R>) -> Transition {
        if !ctx.status().is_interactive() {
            return self.unchanged();
        }

        match event {
            TableEvent::Sort(key) => {
                if !ctx.can_sort_by(key) {
                    return self.unchanged();
                }
                let sort = self.sort.toggled(key);
                let change = TableChange::SortChanged {
                    key: key.clone(),
                    direction: sort.direction,
                };
                Transition {
                    state: TableState {
                        sort,
                        page: self.page,
                    },
                    change,
                }
            }
            TableEvent::SetPageSize(size) => {
                if !ctx.pagination {
                    return self.unchanged();
                }
                match self.page.with_page_size(*size) {
                    Some(page) if page != self.page => Transition {
                        state: TableState {
                            sort: self.sort.clone(),
                            page,
                        },
                        change: TableChange::PageSizeChanged(*size),
                    },
                    _ => self.unchanged(),
                }
            }
            page_event => {
                if !ctx.pagination {
                    return self.unchanged();
                }
                let current = self.page.current_page();
                let target = match page_event {
                    TableEvent::GoToPage(n) => *n,
                    TableEvent::FirstPage => 1,
                    TableEvent::PreviousPage => current.saturating_sub(1),
                    TableEvent::NextPage => current + 1,
                    TableEvent::LastPage => self.page.total_pages(ctx.row_count),
                    TableEvent::Sort(_) | TableEvent::SetPageSize(_) => current,
                };
                match self.page.go_to(target, ctx.row_count) {
                    Some(page) if page != self.page => Transition {
                        state: TableState {
                            sort: self.sort.clone(),
                            page,
                        },
                        change: TableChange::PageChanged(target),
                    },
                    _ => self.unchanged(),
                }
            }
        }
    }

    /// Re-establishes the page invariant after the host replaced the rows.
    pub fn clamped(&self, row_count: usize) -> TableState {
        TableState {
            sort: self.sort.clone(),
            page: self.page.clamped(row_count),
        }
    }

    fn unchanged(&self) -> Transition {
        Transition {
            state: self.clone(),
            change: TableChange::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Row;

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::new("id", "ID"),
            Column::new("name", "Name"),
            Column::new("action", "Action").sortable(false),
        ]
    }

    fn ctx(columns: &[Column<Row>], rows: usize) -> ReduceContext<'_, Row> {
        ReduceContext {
            columns,
            row_count: rows,
            loading: false,
            sortable: true,
            pagination: true,
        }
    }

    #[test]
    fn loading_wins_over_row_count() {
        assert_eq!(TableStatus::from_flags(true, 0), TableStatus::Loading);
        assert_eq!(TableStatus::from_flags(true, 9), TableStatus::Loading);
        assert_eq!(TableStatus::from_flags(false, 0), TableStatus::Empty);
        assert_eq!(TableStatus::from_flags(false, 1), TableStatus::Populated);
    }

    #[test]
    fn sorting_toggles_and_reports_direction() {
        let cols = columns();
        let c = ctx(&cols, 6);
        let t = TableState::new(5).reduce(&TableEvent::Sort("name".into()), &c);
        assert_eq!(
            t.change,
            TableChange::SortChanged {
                key: "name".into(),
                direction: SortDirection::Ascending
            }
        );
        let t = t.state.reduce(&TableEvent::Sort("name".into()), &c);
        assert_eq!(t.state.sort, SortState::by("name", SortDirection::Descending));
    }

    #[test]
    fn non_sortable_or_unknown_columns_are_ignored() {
        let cols = columns();
        let c = ctx(&cols, 6);
        let s = TableState::new(5);
        assert_eq!(s.reduce(&TableEvent::Sort("action".into()), &c).change, TableChange::Unchanged);
        assert_eq!(s.reduce(&TableEvent::Sort("nope".into()), &c).change, TableChange::Unchanged);

        let c = ReduceContext {
            sortable: false,
            ..ctx(&cols, 6)
        };
        assert_eq!(s.reduce(&TableEvent::Sort("name".into()), &c).change, TableChange::Unchanged);
    }

    #[test]
    fn page_requests_outside_bounds_do_nothing() {
        let cols = columns();
        let c = ctx(&cols, 6);
        let s = TableState::new(5);
        assert_eq!(s.reduce(&TableEvent::GoToPage(0), &c).state, s);
        assert_eq!(s.reduce(&TableEvent::GoToPage(3), &c).state, s);
        assert_eq!(s.reduce(&TableEvent::PreviousPage, &c).change, TableChange::Unchanged);

        let t = s.reduce(&TableEvent::LastPage, &c);
        assert_eq!(t.change, TableChange::PageChanged(2));
        assert_eq!(t.state.reduce(&TableEvent::NextPage, &c).change, TableChange::Unchanged);
    }

    #[test]
    fn page_size_change_resets_page() {
        let cols = columns();
        let c = ctx(&cols, 6);
        let s = TableState::new(5).reduce(&TableEvent::GoToPage(2), &c).state;
        let t = s.reduce(&TableEvent::SetPageSize(10), &c);
        assert_eq!(t.change, TableChange::PageSizeChanged(10));
        assert_eq!(t.state.page.current_page(), 1);
        assert_eq!(t.state.page.page_size(), 10);
    }

    #[test]
    fn nothing_changes_while_loading_or_empty() {
        let cols = columns();
        let loading = ReduceContext {
            loading: true,
            ..ctx(&cols, 6)
        };
        let s = TableState::new(5);
        assert_eq!(s.reduce(&TableEvent::Sort("id".into()), &loading).change, TableChange::Unchanged);
        let empty = ctx(&cols, 0);
        assert_eq!(s.reduce(&TableEvent::Sort("id".into()), &empty).change, TableChange::Unchanged);
    }

    #[test]
    fn page_events_are_ignored_without_pagination() {
        let cols = columns();
        let c = ReduceContext {
            pagination: false,
            ..ctx(&cols, 60)
        };
        let s = TableState::new(5);
        assert_eq!(s.reduce(&TableEvent::NextPage, &c).change, TableChange::Unchanged);
        assert_eq!(s.reduce(&TableEvent::SetPageSize(10), &c).change, TableChange::Unchanged);
    }
}
