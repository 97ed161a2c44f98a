//! Sortable, paginated table.
//!
//! - [`sort`]: stable ordering of rows by column key.
//! - [`paginate`]: page slicing and the page-number window.
//! - [`state`]: the headless state machine, usable without rendering.
//! - [`view`]: the [`TableView`] widget.

pub mod column;
pub mod paginate;
pub mod row;
pub mod sort;
pub mod state;
pub mod view;

pub use column::CellRender;
pub use column::Column;
pub use paginate::PageInfo;
pub use paginate::PageItem;
pub use paginate::PageState;
pub use paginate::page_window;
pub use row::Row;
pub use row::RowKey;
pub use row::TableRow;
pub use row::Value;
pub use sort::SortDirection;
pub use sort::SortState;
pub use state::ReduceContext;
pub use state::TableChange;
pub use state::TableEvent;
pub use state::TableState;
pub use state::TableStatus;
pub use state::Transition;
pub use view::TableAction;
pub use view::TableView;
pub use view::TableViewOptions;
pub use view::VisibleRow;
