//! `tabular-view-core` provides a sortable, paginated data table for terminal UIs, plus the small
//! calendar and toast helpers that usually sit next to it.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you feed [`input::InputEvent`]s in and render into a `ratatui` buffer.
//! - Headless state: sorting and paging live in [`table::state::TableState`], a pure reducer you
//!   can drive without the widget.
//! - The host owns the data: the table never reorders or mutates rows, it derives an index
//!   permutation and a page slice.
//! - Row activation is app-controlled: the table emits [`table::TableAction::RowActivated`] (and
//!   calls the optional `on_row_click` callback); what happens next is up to you.
//!
//! ## Getting started
//!
//! Most users should depend on the facade crate `tabular-view`.
//!
//! Useful entry points:
//! - [`table::TableView`]: the widget.
//! - [`table::sort::sort_order`] and [`table::paginate::page_window`]: the algorithms, usable on
//!   their own.
//! - [`config::TableConfig`]: TOML-backed options.
//! - [`calendar::CalendarMonth`]: 6×7 month grid.
//! - [`toast::ToastQueue`]: notifications with caller-driven expiry.
pub mod theme;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod render;

pub mod calendar;
pub mod config;
pub mod error;
pub mod help;
pub mod input;
pub mod keymap;
pub mod table;
pub mod toast;
