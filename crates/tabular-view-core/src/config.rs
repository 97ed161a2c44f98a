//! TOML configuration for tables.
//!
//! Every field is optional. Values that parse but make no sense (a zero page size, an empty list
//! of page sizes) fall back to the defaults with a warning instead of failing.

use crate::error::Error;
use crate::error::Result;
use crate::table::Column;
use crate::table::TableViewOptions;
use crate::table::paginate::DEFAULT_PAGE_SIZE;
use crate::table::paginate::DEFAULT_PAGE_SIZE_OPTIONS;
use ratatui::text::Line;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub sortable: bool,
    pub pagination: bool,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub striped: bool,
    pub hoverable: bool,
    pub compact: bool,
    pub bordered: bool,
    pub show_page_info: bool,
    pub loading_text: String,
    /// Lines shown instead of the default empty placeholder.
    pub empty_message: Vec<String>,
    pub columns: Vec<ColumnConfig>,
}

impl Default for TableConfig {
    fn default() -> Self {
        let options = TableViewOptions::default();
        Self {
            sortable: options.sortable,
            pagination: options.pagination,
            page_size: options.page_size,
            page_size_options: options.page_size_options,
            striped: options.striped,
            hoverable: options.hoverable,
            compact: options.compact,
            bordered: options.bordered,
            show_page_info: options.show_page_info,
            loading_text: options.loading_text,
            empty_message: Vec::new(),
            columns: Vec::new(),
        }
    }
}

/// Schema entry for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub key: String,
    /// Defaults to the key.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default = "default_true")]
    pub sortable: bool,
    #[serde(default)]
    pub width: Option<u16>,
}

fn default_true() -> bool {
    true
}

impl ColumnConfig {
    pub fn to_column<R>(&self) -> Column<R> {
        let label = self.label.clone().unwrap_or_else(|| self.key.clone());
        let mut column = Column::new(self.key.clone(), label).sortable(self.sortable);
        column.width = self.width;
        column
    }
}

impl TableConfig {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        log::info!("loaded table config from {}", path.display());
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn columns<R>(&self) -> Vec<Column<R>> {
        self.columns.iter().map(ColumnConfig::to_column).collect()
    }

    /// Builds view options, replacing out-of-range values with defaults.
    pub fn to_options(&self) -> TableViewOptions {
        let page_size = if self.page_size == 0 {
            log::warn!("page_size = 0 is not allowed, using {DEFAULT_PAGE_SIZE}");
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        };

        let mut page_size_options: Vec<usize> = self
            .page_size_options
            .iter()
            .copied()
            .filter(|&s| s > 0)
            .collect();
        if page_size_options.len() != self.page_size_options.len() {
            log::warn!("ignoring zero entries in page_size_options");
        }
        if page_size_options.is_empty() {
            log::warn!("page_size_options is empty, using {DEFAULT_PAGE_SIZE_OPTIONS:?}");
            page_size_options = DEFAULT_PAGE_SIZE_OPTIONS.to_vec();
        }
        page_size_options.sort_unstable();
        page_size_options.dedup();

        let empty_state = (!self.empty_message.is_empty()).then(|| {
            self.empty_message
                .iter()
                .map(|l| Line::raw(l.clone()))
                .collect()
        });

        TableViewOptions {
            sortable: self.sortable,
            pagination: self.pagination,
            page_size,
            page_size_options,
            striped: self.striped,
            hoverable: self.hoverable,
            compact: self.compact,
            bordered: self.bordered,
            show_page_info: self.show_page_info,
            empty_state,
            loading_text: self.loading_text.clone(),
            ..TableViewOptions::default()
        }
    }
}
