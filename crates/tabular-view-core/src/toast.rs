//! Transient notifications.
//!
//! [`ToastQueue`] does no timing of its own. The app calls [`ToastQueue::tick`] from its event
//! loop and redraws when toasts expire.

use crate::render;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use serde::Deserialize;
use serde::Serialize;
use std::time::Duration;
use std::time::Instant;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
    Alert,
}

impl ToastKind {
    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
            ToastKind::Warning => "⚠",
            ToastKind::Info => "ℹ",
            ToastKind::Alert => "!",
        }
    }

    fn style(self, theme: &Theme) -> Style {
        match self {
            ToastKind::Success => theme.success,
            ToastKind::Error => theme.danger,
            ToastKind::Warning | ToastKind::Alert => theme.warning,
            ToastKind::Info => theme.info,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    pub const ALL: [ToastPosition; 9] = [
        ToastPosition::TopLeft,
        ToastPosition::TopCenter,
        ToastPosition::TopRight,
        ToastPosition::CenterLeft,
        ToastPosition::Center,
        ToastPosition::CenterRight,
        ToastPosition::BottomLeft,
        ToastPosition::BottomCenter,
        ToastPosition::BottomRight,
    ];

    /// (column, row) alignment, each 0 = start, 1 = middle, 2 = end.
    fn anchor(self) -> (u8, u8) {
        let i = ToastPosition::ALL.iter().position(|p| *p == self).unwrap_or(2) as u8;
        (i % 3, i / 3)
    }
}

/// A toast before it is queued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    /// [`Duration::ZERO`] keeps the toast until it is removed.
    pub duration: Duration,
    pub show_close_button: bool,
    /// `None` uses the queue's default at push time.
    pub position: Option<ToastPosition>,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            duration: DEFAULT_DURATION,
            show_close_button: true,
            position: None,
        }
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn closable(mut self, show_close_button: bool) -> Self {
        self.show_close_button = show_close_button;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveToast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub duration: Duration,
    pub show_close_button: bool,
    pub position: ToastPosition,
    pub created: Instant,
}

impl ActiveToast {
    pub fn is_expired(&self, now: Instant) -> bool {
        !self.duration.is_zero() && now.saturating_duration_since(self.created) >= self.duration
    }
}

#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    default_position: ToastPosition,
    toasts: Vec<ActiveToast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) -> ToastId {
        self.push_at(toast, Instant::now())
    }

    /// Queues `toast` as if created at `now`.
    pub fn push_at(&mut self, toast: Toast, now: Instant) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        log::debug!("toast {id:?} ({:?}): {}", toast.kind, toast.message);
        self.toasts.push(ActiveToast {
            id,
            message: toast.message,
            kind: toast.kind,
            duration: toast.duration,
            show_close_button: toast.show_close_button,
            position: toast.position.unwrap_or(self.default_position),
            created: now,
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> ToastId {
        self.push(Toast::new(ToastKind::Success, message))
    }

    pub fn error(&mut self, message: impl Into<String>) -> ToastId {
        self.push(Toast::new(ToastKind::Error, message))
    }

    pub fn warning(&mut self, message: impl Into<String>) -> ToastId {
        self.push(Toast::new(ToastKind::Warning, message))
    }

    pub fn info(&mut self, message: impl Into<String>) -> ToastId {
        self.push(Toast::new(ToastKind::Info, message))
    }

    pub fn alert(&mut self, message: impl Into<String>) -> ToastId {
        self.push(Toast::new(ToastKind::Alert, message))
    }

    /// Returns whether a toast with `id` was queued.
    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn default_position(&self) -> ToastPosition {
        self.default_position
    }

    /// Applies to toasts pushed from now on.
    pub fn set_default_position(&mut self, position: ToastPosition) {
        self.default_position = position;
    }

    /// Drops expired toasts and returns their ids.
    pub fn tick(&mut self, now: Instant) -> Vec<ToastId> {
        let mut expired = Vec::new();
        self.toasts.retain(|t| {
            let keep = !t.is_expired(now);
            if !keep {
                expired.push(t.id);
            }
            keep
        });
        expired
    }

    /// Queued toasts in push order.
    pub fn toasts(&self) -> &[ActiveToast] {
        &self.toasts
    }

    pub fn at(&self, position: ToastPosition) -> impl Iterator<Item = &ActiveToast> + '_ {
        self.toasts.iter().filter(move |t| t.position == position)
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Draws each toast as one line stacked at its position inside `area`.
    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        for position in ToastPosition::ALL {
            let stack: Vec<&ActiveToast> = self.at(position).collect();
            if stack.is_empty() {
                continue;
            }
            let (col, row) = position.anchor();
            let height = (stack.len() as u16).min(area.height);
            let top = match row {
                0 => area.y,
                1 => area.y + (area.height - height) / 2,
                _ => area.bottom() - height,
            };
            for (i, toast) in stack.iter().take(height as usize).enumerate() {
                let close = if toast.show_close_button { " ×" } else { "" };
                let text = format!(" {} {}{} ", toast.kind.icon(), toast.message, close);
                let w = render::display_width(&text).min(area.width as usize) as u16;
                let x = match col {
                    0 => area.x,
                    1 => area.x + (area.width - w) / 2,
                    _ => area.right() - w,
                };
                let y = top + i as u16;
                let style = theme.text_primary.patch(toast.kind.style(theme));
                render::render_str_clipped(x, y, w, buf, &text, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase_and_order_is_kept() {
        let mut q = ToastQueue::new();
        let a = q.info("one");
        let b = q.error("two");
        let c = q.success("three");
        assert!(a < b && b < c);
        q.remove(b);
        let d = q.alert("four");
        assert!(d > c);
        let messages: Vec<&str> = q.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["one", "three", "four"]);
        assert_eq!(q.toasts()[2].kind, ToastKind::Alert);
    }

    #[test]
    fn tick_expires_by_duration() {
        let t0 = Instant::now();
        let mut q = ToastQueue::new();
        let short = q.push_at(Toast::new(ToastKind::Info, "short"), t0);
        let long = q.push_at(
            Toast::new(ToastKind::Info, "long").duration(Duration::from_secs(10)),
            t0,
        );
        let sticky = q.push_at(
            Toast::new(ToastKind::Warning, "sticky").duration(Duration::ZERO),
            t0,
        );

        assert!(q.tick(t0 + Duration::from_millis(2999)).is_empty());
        assert_eq!(q.tick(t0 + DEFAULT_DURATION), vec![short]);
        assert_eq!(q.tick(t0 + Duration::from_secs(3600)), vec![long]);
        assert_eq!(q.toasts().len(), 1);
        assert_eq!(q.toasts()[0].id, sticky);
    }

    #[test]
    fn default_position_applies_at_push_time() {
        let mut q = ToastQueue::new();
        q.info("a");
        q.set_default_position(ToastPosition::BottomLeft);
        q.info("b");
        q.push(Toast::new(ToastKind::Info, "c").position(ToastPosition::Center));

        let positions: Vec<ToastPosition> = q.toasts().iter().map(|t| t.position).collect();
        assert_eq!(
            positions,
            vec![
                ToastPosition::TopRight,
                ToastPosition::BottomLeft,
                ToastPosition::Center
            ]
        );
        assert_eq!(q.at(ToastPosition::BottomLeft).count(), 1);
        q.clear();
        assert!(q.is_empty());
    }

    #[test]
    fn renders_at_anchor() {
        let mut q = ToastQueue::new();
        q.push(Toast::new(ToastKind::Success, "Saved").closable(false));
        q.push(Toast::new(ToastKind::Error, "Oops").position(ToastPosition::BottomLeft));

        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        q.render(area, &mut buf, &Theme::default());
        let line = |y: u16| -> String {
            (0..area.width)
                .map(|x| buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
                .collect()
        };
        assert!(line(0).ends_with(" ✓ Saved "));
        assert!(line(4).starts_with(" ✗ Oops × "));
    }

    #[test]
    fn position_names_match_config_spelling() {
        let p: ToastPosition = serde_json::from_str("\"bottom-center\"").unwrap();
        assert_eq!(p, ToastPosition::BottomCenter);
    }
}
