use super::row::TableRow;
use super::row::Value;
use ratatui::text::Line;
use std::fmt;
use std::sync::Arc;

/// Produces the displayed content of a body cell.
///
/// Implemented for closures `Fn(&Value, &R, usize) -> Line<'static>`, where the `usize` is the
/// row's index on the current page.
pub trait CellRender<R> {
    fn render(&self, value: &Value, row: &R, row_index: usize) -> Line<'static>;
}

impl<R, F> CellRender<R> for F
where
    F: Fn(&Value, &R, usize) -> Line<'static>,
{
    fn render(&self, value: &Value, row: &R, row_index: usize) -> Line<'static> {
        self(value, row, row_index)
    }
}

/// One column of the table schema.
pub struct Column<R> {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    /// Preferred width in terminal columns. Columns without a hint share the remaining space.
    pub width: Option<u16>,
    renderer: Option<Arc<dyn CellRender<R>>>,
}

impl<R> Column<R> {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: true,
            width: None,
            renderer: None,
        }
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Replaces the default value display for this column.
    pub fn render_with(mut self, renderer: impl CellRender<R> + 'static) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    pub fn has_custom_renderer(&self) -> bool {
        self.renderer.is_some()
    }
}

impl<R: TableRow> Column<R> {
    /// Content of this column's cell for `row`.
    pub fn cell(&self, row: &R, row_index: usize) -> Line<'static> {
        let value = row.value(&self.key);
        match &self.renderer {
            Some(renderer) => renderer.render(&value, row, row_index),
            None => Line::raw(value.to_string()),
        }
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            sortable: self.sortable,
            width: self.width,
            renderer: self.renderer.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("custom_renderer", &self.renderer.is_some())
            .finish()
    }
}

pub(crate) fn find_column<'a, R>(columns: &'a [Column<R>], key: &str) -> Option<&'a Column<R>> {
    columns.iter().find(|c| c.key == key)
}
