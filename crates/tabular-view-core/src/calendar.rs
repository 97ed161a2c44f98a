//! Month grid for date pickers.
//!
//! A month is always shown as 6 weeks of 7 days starting on Sunday, padded with the tail of the
//! previous month and the head of the next one.

use crate::render;
use crate::theme::Theme;
use chrono::Datelike;
use chrono::Days;
use chrono::Months;
use chrono::NaiveDate;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;

pub const GRID_DAYS: usize = 42;

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayKind {
    Previous,
    Current,
    Next,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub kind: DayKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    /// `None` for a month outside `1..=12` or a year chrono can't represent.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// The month `date` falls in.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn prev(&self) -> Self {
        self.shifted(self.first.checked_sub_months(Months::new(1)))
    }

    pub fn next(&self) -> Self {
        self.shifted(self.first.checked_add_months(Months::new(1)))
    }

    /// e.g. "January 2026".
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    pub fn weekdays() -> [&'static str; 7] {
        WEEKDAYS
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn days(&self) -> Vec<CalendarDay> {
        let lead = u64::from(self.first.weekday().num_days_from_sunday());
        let start = self.first.checked_sub_days(Days::new(lead)).unwrap_or(self.first);
        start
            .iter_days()
            .take(GRID_DAYS)
            .map(|date| CalendarDay {
                date,
                kind: if self.contains(date) {
                    DayKind::Current
                } else if date < self.first {
                    DayKind::Previous
                } else {
                    DayKind::Next
                },
            })
            .collect()
    }

    fn shifted(&self, first: Option<NaiveDate>) -> Self {
        first.map(|first| Self { first }).unwrap_or(*self)
    }
}

/// Inclusive limits on selectable dates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateBounds {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl DateBounds {
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        self.min.is_some_and(|min| date < min) || self.max.is_some_and(|max| date > max)
    }

    /// Only days of the displayed month inside the bounds can be picked.
    pub fn is_selectable(&self, day: &CalendarDay) -> bool {
        day.kind == DayKind::Current && !self.is_disabled(day.date)
    }
}

/// Renders one month: title, weekday header, then the 6×7 grid, 3 columns per day.
#[derive(Clone, Copy, Debug)]
pub struct MonthGrid {
    pub month: CalendarMonth,
    pub selected: Option<NaiveDate>,
    pub today: Option<NaiveDate>,
    pub bounds: DateBounds,
}

impl MonthGrid {
    pub fn new(month: CalendarMonth) -> Self {
        Self {
            month,
            selected: None,
            today: None,
            bounds: DateBounds::default(),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let title_style = theme.text_primary.add_modifier(Modifier::BOLD);
        render::render_str_centered(area, area.y, buf, &self.month.title(), title_style);

        let mut y = area.y + 1;
        if y >= area.bottom() {
            return;
        }
        let mut x = area.x;
        for name in WEEKDAYS {
            let label: String = name.chars().take(2).collect();
            let max = area.right().saturating_sub(x);
            x += render::render_str_clipped(x, y, max, buf, &format!("{label} "), theme.text_muted);
        }

        for week in self.month.days().chunks(7) {
            y += 1;
            if y >= area.bottom() {
                return;
            }
            let mut x = area.x;
            for day in week {
                let mut style = match day.kind {
                    DayKind::Current => theme.text_primary,
                    DayKind::Previous | DayKind::Next => theme.text_muted,
                };
                if self.bounds.is_disabled(day.date) {
                    style = theme.text_muted.add_modifier(Modifier::CROSSED_OUT);
                }
                if self.today == Some(day.date) {
                    style = style.patch(theme.accent).add_modifier(Modifier::BOLD);
                }
                if self.selected == Some(day.date) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                let max = area.right().saturating_sub(x).min(2);
                render::render_str_clipped(x, y, max, buf, &format!("{:>2}", day.date.day()), style);
                x = x.saturating_add(3);
                if x >= area.right() {
                    break;
                }
            }
        }
    }
}
