use super::column::Column;
use super::paginate::DEFAULT_PAGE_SIZE;
use super::paginate::DEFAULT_PAGE_SIZE_OPTIONS;
use super::paginate::PageInfo;
use super::paginate::PageItem;
use super::paginate::PageState;
use super::row::RowKey;
use super::row::TableRow;
use super::sort;
use super::sort::SortDirection;
use super::sort::SortState;
use super::state::ReduceContext;
use super::state::TableChange;
use super::state::TableEvent;
use super::state::TableState;
use super::state::TableStatus;
use crate::input::InputEvent;
use crate::input::KeyEvent;
use crate::input::MouseEvent;
use crate::input::MouseEventKind;
use crate::keymap::TableBindings;
use crate::keymap::TableCommand;
use crate::render;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use virtualizer::Align;
use virtualizer::Virtualizer;
use virtualizer::VirtualizerOptions;

/// What the app should do after [`TableView::handle_event`] or [`TableView::dispatch`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableAction {
    None,
    Redraw,
    /// A row was activated; carries its index in the host's data.
    RowActivated(usize),
    SortChanged {
        key: String,
        direction: SortDirection,
    },
    PageChanged(usize),
    PageSizeChanged(usize),
}

impl From<TableChange> for TableAction {
    fn from(change: TableChange) -> Self {
        match change {
            TableChange::Unchanged => TableAction::None,
            TableChange::SortChanged { key, direction } => {
                TableAction::SortChanged { key, direction }
            }
            TableChange::PageChanged(page) => TableAction::PageChanged(page),
            TableChange::PageSizeChanged(size) => TableAction::PageSizeChanged(size),
        }
    }
}

/// Options for [`TableView`].
///
/// `sortable`, `pagination`, `page_size` and `page_size_options` shape behaviour; the remaining
/// flags are independent of each other and only affect drawing.
#[derive(Clone, Debug)]
pub struct TableViewOptions {
    pub sortable: bool,
    /// When off, every row is shown on one scrollable page and page input is ignored.
    pub pagination: bool,
    /// Initial page size.
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub striped: bool,
    /// Highlight the row under the cursor.
    pub hoverable: bool,
    /// Drop the rule under the header.
    pub compact: bool,
    /// Draw separators between columns.
    pub bordered: bool,
    pub show_page_info: bool,
    /// Replaces the default "No data available" placeholder.
    pub empty_state: Option<Vec<Line<'static>>>,
    pub loading_text: String,
    pub bindings: TableBindings,
    pub overscan_rows: usize,
    pub style: Style,
    pub header_style: Style,
    pub cursor_style: Style,
    pub active_page_style: Style,
}

impl Default for TableViewOptions {
    fn default() -> Self {
        Self {
            sortable: true,
            pagination: false,
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            striped: true,
            hoverable: true,
            compact: false,
            bordered: false,
            show_page_info: true,
            empty_state: None,
            loading_text: "Loading data...".to_string(),
            bindings: TableBindings::default(),
            overscan_rows: 2,
            style: Style::default(),
            header_style: Style::default().add_modifier(Modifier::BOLD),
            cursor_style: Style::default().add_modifier(Modifier::REVERSED),
            active_page_style: Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
        }
    }
}

/// A row as it appears on the current page.
#[derive(Clone, Debug)]
pub struct VisibleRow<'a, R> {
    pub key: RowKey,
    pub source_index: usize,
    pub page_index: usize,
    pub row: &'a R,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PagerTarget {
    First,
    Previous,
    Page(usize),
    Next,
    Last,
    PageSize,
}

/// Clickable regions from the last render.
#[derive(Clone, Debug, Default)]
struct HitMap {
    header: Vec<(Rect, usize)>,
    rows: Vec<(Rect, usize)>,
    pager: Vec<(Rect, PagerTarget)>,
}

#[derive(Clone, Copy, Debug)]
struct Sections {
    size_bar: Option<Rect>,
    header: Option<Rect>,
    rule: Option<Rect>,
    body: Rect,
    pager: Option<Rect>,
}

/// Sortable, paginated table over host-supplied rows.
///
/// The view owns its sort and page state and never reorders the rows it was given: sorting
/// yields a permutation of source indices and pagination a window into it. Like the other
/// widgets in this crate it is driven from the app loop with `handle_event` and `render`.
pub struct TableView<R> {
    options: TableViewOptions,
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    loading: bool,
    state: TableState,
    order: Vec<usize>,
    cursor: Option<usize>,
    on_row_click: Option<Box<dyn FnMut(&R)>>,
    row_v: Virtualizer,
    row_items: Vec<virtualizer::VirtualItem>,
    hits: HitMap,
}

impl<R> Default for TableView<R> {
    fn default() -> Self {
        let options = TableViewOptions::default();
        let row_v = build_row_virtualizer(options.overscan_rows);
        Self {
            state: TableState::new(options.page_size),
            options,
            columns: Vec::new(),
            rows: Vec::new(),
            loading: false,
            order: Vec::new(),
            cursor: None,
            on_row_click: None,
            row_v,
            row_items: Vec::new(),
            hits: HitMap::default(),
        }
    }
}

impl<R: TableRow> TableView<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TableViewOptions) -> Self {
        let mut v = Self::default();
        v.set_options(options);
        v
    }

    pub fn options(&self) -> &TableViewOptions {
        &self.options
    }

    /// A changed `page_size` restarts pagination at page 1 with the new size.
    pub fn set_options(&mut self, options: TableViewOptions) {
        let page_size_changed = options.page_size != self.options.page_size;
        self.options = options;
        if page_size_changed {
            self.state.page = PageState::new(self.options.page_size);
        }
        self.row_v.set_overscan(self.options.overscan_rows);
        self.refresh();
    }

    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
        self.refresh();
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// Replaces the data. The sort is kept; the current page is clamped to the new page count.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        log::debug!("table rows replaced: {} -> {}", self.rows.len(), rows.len());
        self.rows = rows;
        self.refresh();
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Called with the full row whenever a row is activated, in addition to
    /// [`TableAction::RowActivated`].
    pub fn set_on_row_click(&mut self, on_row_click: impl FnMut(&R) + 'static) {
        self.on_row_click = Some(Box::new(on_row_click));
    }

    pub fn status(&self) -> TableStatus {
        TableStatus::from_flags(self.loading, self.rows.len())
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn sort_state(&self) -> &SortState {
        &self.state.sort
    }

    pub fn current_page(&self) -> usize {
        self.state.page.current_page()
    }

    pub fn page_size(&self) -> usize {
        self.state.page.page_size()
    }

    /// Zero when there are no rows; one unbounded page when pagination is off.
    pub fn total_pages(&self) -> usize {
        if self.options.pagination {
            self.state.page.total_pages(self.rows.len())
        } else {
            usize::from(!self.rows.is_empty())
        }
    }

    /// The page strip contents. Empty unless the table is paginated and populated.
    pub fn page_window(&self) -> Vec<PageItem> {
        if !self.shows_pager() {
            return Vec::new();
        }
        self.state.page.window(self.rows.len())
    }

    pub fn page_info(&self) -> Option<PageInfo> {
        if !self.status().is_interactive() {
            return None;
        }
        let rows = self.rows.len();
        Some(if self.options.pagination {
            self.state.page.info(rows)
        } else {
            PageInfo {
                start: 1,
                end: rows,
                total: rows,
            }
        })
    }

    /// Source indices of all rows in display order.
    pub fn sorted_indices(&self) -> &[usize] {
        &self.order
    }

    /// Source indices of the rows on the current page, in display order.
    pub fn visible_indices(&self) -> &[usize] {
        if !self.status().is_interactive() {
            return &[];
        }
        if self.options.pagination {
            &self.order[self.state.page.range(self.order.len())]
        } else {
            &self.order
        }
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = VisibleRow<'_, R>> + '_ {
        self.visible_indices()
            .iter()
            .enumerate()
            .map(move |(page_index, &source_index)| {
                let row = &self.rows[source_index];
                VisibleRow {
                    key: row
                        .row_id()
                        .map(RowKey::Id)
                        .unwrap_or(RowKey::Position(page_index)),
                    source_index,
                    page_index,
                    row,
                }
            })
    }

    /// Index of the cursor row on the current page.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: Option<usize>) {
        self.cursor = clamp_cursor(cursor, self.visible_indices().len());
    }

    pub fn cursor_row(&self) -> Option<&R> {
        let source = *self.visible_indices().get(self.cursor?)?;
        self.rows.get(source)
    }

    /// Runs `event` through the reducer and applies the result.
    pub fn dispatch(&mut self, event: TableEvent) -> TableAction {
        let transition = self.state.reduce(&event, &self.reduce_context());
        if transition.change == TableChange::Unchanged {
            log::trace!("table event ignored: {event:?}");
            return TableAction::None;
        }

        let resort = transition.state.sort != self.state.sort;
        self.state = transition.state;
        if resort {
            self.resort();
        }
        self.cursor = clamp_cursor(Some(0), self.visible_indices().len());
        self.row_v.set_scroll_offset(0);

        log::debug!("table state changed: {:?}", transition.change);
        transition.change.into()
    }

    pub fn sort_by(&mut self, key: &str) -> TableAction {
        self.dispatch(TableEvent::Sort(key.to_string()))
    }

    pub fn go_to_page(&mut self, page: usize) -> TableAction {
        self.dispatch(TableEvent::GoToPage(page))
    }

    pub fn set_page_size(&mut self, page_size: usize) -> TableAction {
        self.dispatch(TableEvent::SetPageSize(page_size))
    }

    /// Activates the row at `page_index` on the current page.
    pub fn activate(&mut self, page_index: usize) -> TableAction {
        let Some(&source) = self.visible_indices().get(page_index) else {
            return TableAction::None;
        };
        self.cursor = Some(page_index);
        if let Some(on_row_click) = self.on_row_click.as_mut() {
            on_row_click(&self.rows[source]);
        }
        TableAction::RowActivated(source)
    }

    pub fn handle_event(&mut self, event: InputEvent) -> TableAction {
        if !self.status().is_interactive() {
            return TableAction::None;
        }
        match event {
            InputEvent::Paste(_) => TableAction::None,
            InputEvent::Key(key) => self.handle_key(&key),
            InputEvent::Mouse(m) => self.handle_mouse(m),
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        self.hits = HitMap::default();
        if area.width == 0 || area.height == 0 {
            return;
        }

        let base_style = if self.options.style == Style::default() {
            theme.text_primary
        } else {
            self.options.style
        };
        buf.set_style(area, base_style);

        match self.status() {
            TableStatus::Loading => self.render_loading(area, buf, theme),
            TableStatus::Empty => self.render_empty(area, buf, theme),
            TableStatus::Populated => self.render_populated(area, buf, theme, base_style),
        }
    }

    fn reduce_context(&self) -> ReduceContext<'_, R> {
        ReduceContext {
            columns: &self.columns,
            row_count: self.rows.len(),
            loading: self.loading,
            sortable: self.options.sortable,
            pagination: self.options.pagination,
        }
    }

    fn refresh(&mut self) {
        self.state = self.state.clamped(self.rows.len());
        self.resort();
        self.cursor = clamp_cursor(self.cursor, self.visible_indices().len());
    }

    fn resort(&mut self) {
        self.order = sort::sort_order(
            &self.rows,
            &self.columns,
            &self.state.sort,
            self.options.sortable,
        );
    }

    fn shows_pager(&self) -> bool {
        self.options.pagination && self.status().is_interactive() && self.total_pages() > 0
    }

    fn handle_key(&mut self, key: &KeyEvent) -> TableAction {
        let Some(command) = self.options.bindings.command_for(key) else {
            return TableAction::None;
        };
        match command {
            TableCommand::CursorUp => self.move_cursor_by(-1),
            TableCommand::CursorDown => self.move_cursor_by(1),
            TableCommand::Activate => match self.cursor {
                Some(index) => self.activate(index),
                None => TableAction::None,
            },
            TableCommand::CycleSort => match self.next_sort_key() {
                Some(key) => self.dispatch(TableEvent::Sort(key)),
                None => TableAction::None,
            },
            TableCommand::ReverseSort => match self.state.sort.key.clone() {
                Some(key) => self.dispatch(TableEvent::Sort(key)),
                None => TableAction::None,
            },
            TableCommand::NextPage => self.dispatch(TableEvent::NextPage),
            TableCommand::PreviousPage => self.dispatch(TableEvent::PreviousPage),
            TableCommand::FirstPage => self.dispatch(TableEvent::FirstPage),
            TableCommand::LastPage => self.dispatch(TableEvent::LastPage),
            TableCommand::GrowPageSize => match self.adjacent_page_size(true) {
                Some(size) => self.dispatch(TableEvent::SetPageSize(size)),
                None => TableAction::None,
            },
            TableCommand::ShrinkPageSize => match self.adjacent_page_size(false) {
                Some(size) => self.dispatch(TableEvent::SetPageSize(size)),
                None => TableAction::None,
            },
        }
    }

    fn handle_mouse(&mut self, m: MouseEvent) -> TableAction {
        match m.kind {
            MouseEventKind::ScrollUp => return self.move_cursor_by(-1),
            MouseEventKind::ScrollDown => return self.move_cursor_by(1),
            _ if !m.is_left_press() => return TableAction::None,
            _ => {}
        }

        if let Some(&(_, col)) = self.hits.header.iter().find(|(r, _)| hit(*r, m)) {
            let Some(key) = self.columns.get(col).map(|c| c.key.clone()) else {
                return TableAction::None;
            };
            return self.dispatch(TableEvent::Sort(key));
        }
        if let Some(&(_, index)) = self.hits.rows.iter().find(|(r, _)| hit(*r, m)) {
            return self.activate(index);
        }
        if let Some(&(_, target)) = self.hits.pager.iter().find(|(r, _)| hit(*r, m)) {
            let event = match target {
                PagerTarget::First => TableEvent::FirstPage,
                PagerTarget::Previous => TableEvent::PreviousPage,
                PagerTarget::Page(n) => TableEvent::GoToPage(n),
                PagerTarget::Next => TableEvent::NextPage,
                PagerTarget::Last => TableEvent::LastPage,
                PagerTarget::PageSize => {
                    let next = self.adjacent_page_size(true).or_else(|| {
                        self.options
                            .page_size_options
                            .iter()
                            .copied()
                            .filter(|&s| s > 0)
                            .min()
                    });
                    match next {
                        Some(size) => TableEvent::SetPageSize(size),
                        None => return TableAction::None,
                    }
                }
            };
            return self.dispatch(event);
        }
        TableAction::None
    }

    fn move_cursor_by(&mut self, delta: i32) -> TableAction {
        let len = self.visible_indices().len();
        if len == 0 {
            return TableAction::None;
        }
        let next = match self.cursor {
            None => 0,
            Some(cur) => (cur as i64 + delta as i64).clamp(0, len as i64 - 1) as usize,
        };
        if Some(next) == self.cursor {
            return TableAction::None;
        }
        self.cursor = Some(next);
        TableAction::Redraw
    }

    fn sortable_keys(&self) -> Vec<&str> {
        if !self.options.sortable {
            return Vec::new();
        }
        self.columns
            .iter()
            .filter(|c| c.sortable)
            .map(|c| c.key.as_str())
            .collect()
    }

    fn next_sort_key(&self) -> Option<String> {
        let keys = self.sortable_keys();
        if keys.is_empty() {
            return None;
        }
        let next = self
            .state
            .sort
            .key
            .as_deref()
            .and_then(|current| keys.iter().position(|k| *k == current))
            .map(|i| (i + 1) % keys.len())
            .unwrap_or(0);
        Some(keys[next].to_string())
    }

    fn adjacent_page_size(&self, grow: bool) -> Option<usize> {
        let current = self.state.page.page_size();
        let sizes = self.options.page_size_options.iter().copied();
        if grow {
            sizes.filter(|&s| s > current).min()
        } else {
            sizes.filter(|&s| s > 0 && s < current).max()
        }
    }

    fn sections(&self, area: Rect) -> Sections {
        let paginated = self.shows_pager();
        let h = area.height;
        let pager = paginated && h >= 2;
        let size_bar = paginated && h >= 4;
        let reserved = 1 + u16::from(pager) + u16::from(size_bar);
        let rule = !self.options.compact && h >= reserved + 2;

        let mut y = area.y;
        let mut take = |on: bool| -> Option<Rect> {
            on.then(|| {
                let r = Rect::new(area.x, y, area.width, 1);
                y += 1;
                r
            })
        };
        let size_bar = take(size_bar);
        let header = take(true);
        let rule = take(rule);

        let pager_h = u16::from(pager);
        let body_h = area.bottom().saturating_sub(y).saturating_sub(pager_h);
        let body = Rect::new(area.x, y, area.width, body_h);
        let pager = pager.then(|| Rect::new(area.x, area.bottom() - 1, area.width, 1));

        Sections {
            size_bar,
            header,
            rule,
            body,
            pager,
        }
    }

    fn render_loading(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let text = format!("⠿ {}", self.options.loading_text);
        let y = area.y + area.height / 2;
        render::render_str_centered(area, y, buf, &text, theme.text_muted);
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let lines = match &self.options.empty_state {
            Some(lines) => lines.clone(),
            None => default_empty_state(theme),
        };
        let top = area.y + area.height.saturating_sub(lines.len() as u16) / 2;
        for (i, line) in lines.iter().enumerate() {
            let y = top + i as u16;
            if y >= area.bottom() {
                break;
            }
            let w = render::spans_width(&line.spans).min(area.width as usize) as u16;
            let x = area.x + (area.width - w) / 2;
            render::render_spans_clipped(x, y, w, buf, &line.spans, line.style);
        }
    }

    fn render_populated(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme, base: Style) {
        let sections = self.sections(area);
        let layout = column_layout(&self.columns, area.width);
        let grid_style = theme.text_muted;
        let mut hits = HitMap::default();

        self.sync_virtualizer(sections.body);

        if let Some(bar) = sections.size_bar {
            self.render_size_bar(bar, buf, theme, &mut hits);
        }
        if let Some(header) = sections.header {
            self.render_header(header, buf, theme, &layout, &mut hits);
        }
        if let Some(rule) = sections.rule {
            let line = "─".repeat(rule.width as usize);
            render::render_str_clipped(rule.x, rule.y, rule.width, buf, &line, grid_style);
        }
        self.render_body(sections.body, buf, theme, base, &layout, &mut hits);
        if let Some(pager) = sections.pager {
            self.render_pager(pager, buf, theme, &mut hits);
        }

        self.hits = hits;
    }

    fn sync_virtualizer(&mut self, body: Rect) {
        let count = self.visible_indices().len();
        self.row_v.set_count(count);
        self.row_v.set_viewport_size(body.height as u32);
        if let Some(cursor) = self.cursor {
            self.row_v.scroll_to_index(cursor, Align::Auto);
        }
        self.row_v.collect_virtual_items(&mut self.row_items);
    }

    fn render_size_bar(&self, area: Rect, buf: &mut Buffer, theme: &Theme, hits: &mut HitMap) {
        let mut x = area.x;
        let mut max = area.width;
        let selector = format!("[{} ▾]", self.page_size());
        for (text, style, target) in [
            ("Show ", theme.text_muted, None),
            (selector.as_str(), theme.accent, Some(PagerTarget::PageSize)),
            (" entries", theme.text_muted, None),
        ] {
            let written = render::render_str_clipped(x, area.y, max, buf, text, style);
            if let Some(target) = target {
                hits.pager.push((Rect::new(x, area.y, written, 1), target));
            }
            x += written;
            max -= written;
        }
    }

    fn render_header(
        &self,
        area: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        layout: &[(u16, u16)],
        hits: &mut HitMap,
    ) {
        let style = self.options.header_style.patch(theme.accent);
        buf.set_style(area, style);

        for (i, (col, &(x, w))) in self.columns.iter().zip(layout).enumerate() {
            if w == 0 {
                continue;
            }
            let cell = Rect::new(area.x + x, area.y, w, 1);
            let sortable = self.options.sortable && col.sortable;
            let mut label = col.label.clone();
            if sortable && self.state.sort.is_sorted_by(&col.key) {
                label.push(' ');
                label.push_str(self.state.sort.direction.arrow());
            }
            render::render_str_clipped(cell.x, cell.y, cell.width, buf, &label, style);
            hits.header.push((cell, i));
            self.draw_separator(area, buf, theme, layout, i);
        }
    }

    fn render_body(
        &self,
        area: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        base: Style,
        layout: &[(u16, u16)],
        hits: &mut HitMap,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let visible = self.visible_indices();
        let scroll = self.row_v.scroll_offset();

        for item in self.row_items.iter().copied() {
            let rel = item.start as i64 - scroll as i64;
            if rel < 0 || rel >= area.height as i64 {
                continue;
            }
            let Some(&source) = visible.get(item.index) else {
                continue;
            };
            let row = &self.rows[source];
            let row_rect = Rect::new(area.x, area.y + rel as u16, area.width, 1);

            let mut style = base;
            if self.options.striped && item.index % 2 == 1 {
                style = style.patch(theme.stripe);
            }
            if self.options.hoverable && self.cursor == Some(item.index) {
                style = style.patch(self.options.cursor_style);
            }
            buf.set_style(row_rect, style);

            for (i, (col, &(x, w))) in self.columns.iter().zip(layout).enumerate() {
                if w == 0 {
                    continue;
                }
                let line = col.cell(row, item.index);
                render::render_spans_clipped(
                    row_rect.x + x,
                    row_rect.y,
                    w,
                    buf,
                    &line.spans,
                    style.patch(line.style),
                );
                self.draw_separator(row_rect, buf, theme, layout, i);
            }
            hits.rows.push((row_rect, item.index));
        }
    }

    fn render_pager(&self, area: Rect, buf: &mut Buffer, theme: &Theme, hits: &mut HitMap) {
        let current = self.current_page();
        let total = self.total_pages();
        let muted = theme.text_muted;
        let active = self.options.active_page_style.patch(theme.accent);

        let mut segments: Vec<(String, Style, Option<PagerTarget>)> = Vec::new();
        let nav = |label: &str, enabled: bool, target: PagerTarget| {
            let style = if enabled { theme.text_primary } else { muted };
            (label.to_string(), style, enabled.then_some(target))
        };
        segments.push(nav("«", current > 1, PagerTarget::First));
        segments.push(nav("‹", current > 1, PagerTarget::Previous));
        for item in self.page_window() {
            segments.push(match item {
                PageItem::Page(n) if n == current => (format!(" {n} "), active, None),
                PageItem::Page(n) => (format!(" {n} "), theme.text_primary, Some(PagerTarget::Page(n))),
                PageItem::Ellipsis => (item.to_string(), muted, None),
            });
        }
        segments.push(nav("›", current < total, PagerTarget::Next));
        segments.push(nav("»", current < total, PagerTarget::Last));

        let mut x = area.x;
        let end = area.right();
        for (text, style, target) in &segments {
            if x >= end {
                break;
            }
            let written = render::render_str_clipped(x, area.y, end - x, buf, text, *style);
            if let Some(target) = target {
                hits.pager.push((Rect::new(x, area.y, written, 1), *target));
            }
            x = (x + written + 1).min(end);
        }

        if self.options.show_page_info {
            if let Some(info) = self.page_info() {
                let text = info.to_string();
                let w = render::display_width(&text) as u16;
                if x + 2 + w <= end {
                    render::render_str_clipped(end - w, area.y, w, buf, &text, muted);
                }
            }
        }
    }

    fn draw_separator(
        &self,
        row: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        layout: &[(u16, u16)],
        col: usize,
    ) {
        if !self.options.bordered || col + 1 >= layout.len() {
            return;
        }
        let (x, w) = layout[col];
        let sep_x = x + w;
        if w == 0 || sep_x >= row.width {
            return;
        }
        buf.set_span(row.x + sep_x, row.y, &Span::styled("│", theme.text_muted), 1);
    }
}

fn build_row_virtualizer(overscan: usize) -> Virtualizer {
    let mut opts = VirtualizerOptions::new(0, |_| 1);
    opts.overscan = overscan;
    Virtualizer::new(opts)
}

fn default_empty_state(theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::styled("No data available", Style::default().add_modifier(Modifier::BOLD)),
        Line::styled("There are no records to display", theme.text_muted),
    ]
}

fn clamp_cursor(cursor: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    cursor.map(|c| c.min(len - 1))
}

fn hit(r: Rect, m: MouseEvent) -> bool {
    m.x >= r.x && m.x < r.right() && m.y >= r.y && m.y < r.bottom()
}

/// Offsets and widths of each column within `total` terminal columns.
///
/// Columns with a width hint get exactly that; the others split what is left. One column of gap
/// separates neighbours. Columns that fall past the right edge get width zero.
fn column_layout<R>(columns: &[Column<R>], total: u16) -> Vec<(u16, u16)> {
    let total = total as usize;
    let gaps = columns.len().saturating_sub(1);
    let fixed: usize = columns.iter().filter_map(|c| c.width).map(usize::from).sum();
    let flex = columns.iter().filter(|c| c.width.is_none()).count();
    let free = total.saturating_sub(gaps + fixed);
    let (share, mut extra) = if flex == 0 {
        (0, 0)
    } else {
        (free / flex, free % flex)
    };

    let mut x = 0usize;
    let mut out = Vec::with_capacity(columns.len());
    for col in columns {
        let w = match col.width {
            Some(w) => w as usize,
            None => {
                let bonus = usize::from(extra > 0);
                extra = extra.saturating_sub(1);
                share + bonus
            }
        };
        let start = x.min(total);
        out.push((start as u16, w.min(total - start) as u16));
        x += w + 1;
    }
    out
}
