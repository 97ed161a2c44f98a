use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Writes `input` at `(x, y)`, never exceeding `max_cols` terminal columns.
///
/// Wide characters that would straddle the limit are dropped rather than split. Returns the
/// number of columns written.
pub fn render_str_clipped(
    x: u16,
    y: u16,
    max_cols: u16,
    buf: &mut Buffer,
    input: &str,
    style: Style,
) -> u16 {
    let span = Span::raw(input);
    render_spans_clipped(x, y, max_cols, buf, std::slice::from_ref(&span), style)
}

/// Like [`render_str_clipped`] for styled spans. Spans without a style use `fallback_style`.
pub fn render_spans_clipped(
    x: u16,
    y: u16,
    max_cols: u16,
    buf: &mut Buffer,
    spans: &[Span<'_>],
    fallback_style: Style,
) -> u16 {
    let max_cols = max_cols as usize;
    let mut out_cols = 0usize;
    let mut tmp = [0u8; 4];

    for span in spans {
        let style = fallback_style.patch(span.style);
        for ch in span.content.chars() {
            let ch = if ch == '\t' { ' ' } else { ch };
            let w = UnicodeWidthChar::width(ch).unwrap_or(0);
            if w == 0 {
                continue;
            }
            if out_cols + w > max_cols {
                return out_cols as u16;
            }

            let dx = out_cols as u16;
            if let Some(cell) = buf.cell_mut((x + dx, y)) {
                cell.set_style(style);
                cell.set_symbol(ch.encode_utf8(&mut tmp));
            }
            if w == 2 {
                if let Some(cell) = buf.cell_mut((x + dx + 1, y)) {
                    cell.set_style(style);
                    cell.set_symbol("");
                }
            }
            out_cols += w;
        }
    }

    out_cols as u16
}

/// Renders `input` horizontally centered in the row `area.y`.
pub fn render_str_centered(area: Rect, y: u16, buf: &mut Buffer, input: &str, style: Style) {
    if area.width == 0 || y < area.y || y >= area.y.saturating_add(area.height) {
        return;
    }
    let w = display_width(input).min(area.width as usize) as u16;
    let x = area.x + (area.width - w) / 2;
    render_str_clipped(x, y, area.width - (x - area.x), buf, input, style);
}

pub fn display_width(input: &str) -> usize {
    UnicodeWidthStr::width(input)
}

pub fn spans_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(|s| display_width(&s.content)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
            .collect()
    }

    #[test]
    fn clips_to_width() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        let written = render_str_clipped(0, 0, 3, &mut buf, "abcdef", Style::default());
        assert_eq!(written, 3);
        assert_eq!(row_text(&buf, 0), "abc   ");
    }

    #[test]
    fn drops_wide_char_at_the_edge() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        let written = render_str_clipped(0, 0, 3, &mut buf, "你好", Style::default());
        assert_eq!(written, 2);
    }

    #[test]
    fn centers_text() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 7, 1));
        render_str_centered(Rect::new(0, 0, 7, 1), 0, &mut buf, "abc", Style::default());
        assert_eq!(row_text(&buf, 0), "  abc  ");
    }
}
