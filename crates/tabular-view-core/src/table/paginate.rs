//! Page slicing and the compact page-number window.

use std::fmt;
use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];
/// Page numbers shown around the current page before ellipses kick in.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// `ceil(rows / page_size)`; zero rows means zero pages.
pub fn total_pages(rows: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    rows.div_ceil(page_size)
}

/// Indices `[(page-1)*size, page*size)` clamped to `0..rows`.
pub fn page_range(rows: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(rows);
    let end = start.saturating_add(page_size).min(rows);
    start..end
}

/// Current page and page size. The page is 1-based and always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    /// A page size of zero is replaced by [`DEFAULT_PAGE_SIZE`].
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, rows: usize) -> usize {
        total_pages(rows, self.page_size)
    }

    /// Moves to `page`, or returns `None` when it lies outside `[1, total_pages]`.
    pub fn go_to(&self, page: usize, rows: usize) -> Option<PageState> {
        if page < 1 || page > self.total_pages(rows) {
            return None;
        }
        Some(PageState {
            current_page: page,
            ..*self
        })
    }

    /// A new page size always starts over at page 1. Zero is rejected.
    pub fn with_page_size(&self, page_size: usize) -> Option<PageState> {
        (page_size > 0).then_some(PageState {
            current_page: 1,
            page_size,
        })
    }

    /// Pulls the current page back into `[1, total_pages]` after the row count changed.
    pub fn clamped(&self, rows: usize) -> PageState {
        let last = self.total_pages(rows).max(1);
        PageState {
            current_page: self.current_page.clamp(1, last),
            ..*self
        }
    }

    pub fn range(&self, rows: usize) -> Range<usize> {
        page_range(rows, self.current_page, self.page_size)
    }

    pub fn info(&self, rows: usize) -> PageInfo {
        let range = self.range(rows);
        PageInfo {
            start: if range.is_empty() { 0 } else { range.start + 1 },
            end: range.end,
            total: rows,
        }
    }

    pub fn window(&self, rows: usize) -> Vec<PageItem> {
        page_window(self.current_page, self.total_pages(rows))
    }
}

/// 1-based, inclusive bounds of the rows on the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageInfo {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl fmt::Display for PageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} entries",
            self.start, self.end, self.total
        )
    }
}

/// One slot of the page strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    /// Gap marker. Not clickable; rendered as `…`.
    Ellipsis,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Page(n) => write!(f, "{n}"),
            PageItem::Ellipsis => f.write_str("…"),
        }
    }
}

/// The page numbers to show for `current` out of `total` pages.
///
/// Up to [`MAX_VISIBLE_PAGES`] pages are listed outright. Beyond that a window of five pages
/// centered on `current` is shown, shifted to stay inside `1..=total`, with the first and last
/// page pinned at the ends and an ellipsis wherever pages are skipped.
pub fn page_window(current: usize, total: usize) -> Vec<PageItem> {
    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(PageItem::Page).collect();
    }

    let half = MAX_VISIBLE_PAGES / 2;
    let (start, end) = if current <= half + 1 {
        (1, MAX_VISIBLE_PAGES)
    } else if current + half >= total {
        (total + 1 - MAX_VISIBLE_PAGES, total)
    } else {
        (current - half, current + half)
    };

    let mut pages = Vec::with_capacity(MAX_VISIBLE_PAGES + 4);
    if start > 1 {
        pages.push(PageItem::Page(1));
        if start > 2 {
            pages.push(PageItem::Ellipsis);
        }
    }
    pages.extend((start..=end).map(PageItem::Page));
    if end < total {
        if end + 1 < total {
            pages.push(PageItem::Ellipsis);
        }
        pages.push(PageItem::Page(total));
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::Ellipsis as E;
    use PageItem::Page as P;

    #[test]
    fn small_totals_list_every_page() {
        assert_eq!(page_window(1, 0), Vec::<PageItem>::new());
        assert_eq!(page_window(2, 3), vec![P(1), P(2), P(3)]);
        assert_eq!(page_window(5, 5), vec![P(1), P(2), P(3), P(4), P(5)]);
    }

    #[test]
    fn middle_page_gets_ellipses_on_both_sides() {
        assert_eq!(
            page_window(6, 12),
            vec![P(1), E, P(4), P(5), P(6), P(7), P(8), E, P(12)]
        );
    }

    #[test]
    fn window_shifts_at_the_edges() {
        assert_eq!(
            page_window(1, 12),
            vec![P(1), P(2), P(3), P(4), P(5), E, P(12)]
        );
        assert_eq!(
            page_window(12, 12),
            vec![P(1), E, P(8), P(9), P(10), P(11), P(12)]
        );
        // Window 2..=6 leaves no gap before page 1.
        assert_eq!(
            page_window(4, 12),
            vec![P(1), P(2), P(3), P(4), P(5), P(6), E, P(12)]
        );
        // Window 4..=8 ends one short of the last page: no ellipsis needed.
        assert_eq!(
            page_window(6, 9),
            vec![P(1), E, P(4), P(5), P(6), P(7), P(8), P(9)]
        );
    }

    #[test]
    fn ranges_cover_rows_without_gaps() {
        for rows in 0..23 {
            for size in 1..7 {
                let pages = total_pages(rows, size);
                let joined: Vec<usize> = (1..=pages).flat_map(|p| page_range(rows, p, size)).collect();
                assert_eq!(joined, (0..rows).collect::<Vec<_>>(), "rows={rows} size={size}");
            }
        }
    }

    #[test]
    fn out_of_range_pages_are_rejected() {
        let s = PageState::new(5);
        assert_eq!(s.go_to(0, 6), None);
        assert_eq!(s.go_to(3, 6), None);
        assert_eq!(s.go_to(2, 6).map(|s| s.current_page()), Some(2));
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let s = PageState::new(5).go_to(2, 6).unwrap();
        let s = s.with_page_size(10).unwrap();
        assert_eq!((s.current_page(), s.page_size()), (1, 10));
        assert_eq!(PageState::new(5).with_page_size(0), None);
    }

    #[test]
    fn clamping_follows_row_count() {
        let s = PageState::new(5).go_to(4, 20).unwrap();
        assert_eq!(s.clamped(12).current_page(), 3);
        assert_eq!(s.clamped(0).current_page(), 1);
    }

    #[test]
    fn info_reports_visible_bounds() {
        let s = PageState::new(5).go_to(2, 6).unwrap();
        assert_eq!(s.info(6).to_string(), "Showing 6 to 6 of 6 entries");
        assert_eq!(PageState::new(5).info(0), PageInfo { start: 0, end: 0, total: 0 });
    }
}
