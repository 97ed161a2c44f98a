//! Sortable, paginated data tables for `ratatui`, plus a month grid and a toast queue.
//!
//! This crate re-exports `tabular-view-core`. Enable the `crossterm` feature to convert crossterm
//! events into [`input::InputEvent`].
//!
//! ```
//! use tabular_view::prelude::*;
//!
//! let mut table: TableView<Row> = TableView::with_options(TableViewOptions {
//!     pagination: true,
//!     page_size: 2,
//!     ..Default::default()
//! });
//! table.set_columns(vec![Column::new("name", "Name"), Column::new("age", "Age")]);
//! table.set_rows(vec![
//!     Row::new().with("name", "Jane").with("age", 30),
//!     Row::new().with("name", "Bob").with("age", 25),
//!     Row::new().with("name", "Alice").with("age", 35),
//! ]);
//!
//! table.sort_by("age");
//! assert_eq!(table.visible_indices(), &[1, 0]);
//! table.go_to_page(2);
//! assert_eq!(table.visible_indices(), &[2]);
//! ```

pub use tabular_view_core::calendar;
pub use tabular_view_core::config;
pub use tabular_view_core::error;
pub use tabular_view_core::help;
pub use tabular_view_core::input;
pub use tabular_view_core::keymap;
pub use tabular_view_core::render;
pub use tabular_view_core::table;
pub use tabular_view_core::theme;
pub use tabular_view_core::toast;

#[cfg(feature = "crossterm")]
pub use tabular_view_core::crossterm_input;

pub mod prelude {
    pub use crate::calendar::CalendarMonth;
    pub use crate::calendar::DateBounds;
    pub use crate::calendar::MonthGrid;
    pub use crate::config::TableConfig;
    pub use crate::help::HelpBar;
    pub use crate::input::InputEvent;
    pub use crate::table::Column;
    pub use crate::table::PageItem;
    pub use crate::table::Row;
    pub use crate::table::SortDirection;
    pub use crate::table::TableAction;
    pub use crate::table::TableRow;
    pub use crate::table::TableStatus;
    pub use crate::table::TableView;
    pub use crate::table::TableViewOptions;
    pub use crate::table::Value;
    pub use crate::theme::Theme;
    pub use crate::toast::Toast;
    pub use crate::toast::ToastKind;
    pub use crate::toast::ToastQueue;
}
