use crate::keymap::Binding;
use crate::keymap::TableBindings;
use crate::render;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;

#[derive(Clone, Debug)]
pub struct HelpBarOptions {
    pub style: Style,
    pub key_style: Style,
    pub separator: String,
    pub space: String,
}

impl Default for HelpBarOptions {
    fn default() -> Self {
        Self {
            style: Style::default(),
            key_style: Style::default(),
            separator: " • ".to_string(),
            space: " ".to_string(),
        }
    }
}

/// One-line summary of key bindings, e.g. `j down • k up • enter open`.
#[derive(Clone, Debug, Default)]
pub struct HelpBar {
    bindings: Vec<Binding>,
    options: HelpBarOptions,
}

impl HelpBar {
    pub fn new(bindings: Vec<Binding>) -> Self {
        Self {
            bindings,
            options: HelpBarOptions::default(),
        }
    }

    pub fn with_options(bindings: Vec<Binding>, options: HelpBarOptions) -> Self {
        Self { bindings, options }
    }

    /// Help for a table using `bindings`; page keys only appear when `paginated`.
    pub fn for_table(bindings: &TableBindings, paginated: bool, options: HelpBarOptions) -> Self {
        Self::with_options(bindings.help(paginated), options)
    }

    pub fn set_bindings(&mut self, bindings: Vec<Binding>) {
        self.bindings = bindings;
    }

    pub fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let spans = self.to_spans();
        buf.set_style(area, self.options.style);
        render::render_spans_clipped(area.x, area.y, area.width, buf, &spans, self.options.style);
    }

    fn to_spans(&self) -> Vec<Span<'static>> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, b) in self.bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    self.options.separator.clone(),
                    self.options.style,
                ));
            }
            spans.push(Span::styled(b.help_key.clone(), self.options.key_style));
            spans.push(Span::styled(self.options.space.clone(), self.options.style));
            spans.push(Span::styled(b.help_desc.clone(), self.options.style));
        }
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, 0)).map(|c| c.symbol()).unwrap_or(" "))
            .collect()
    }

    #[test]
    fn narrow_area_is_clipped() {
        let hb = HelpBar::for_table(&TableBindings::default(), true, HelpBarOptions::default());
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        hb.render_ref(Rect::new(0, 0, 3, 1), &mut buf);
        assert_eq!(row_text(&buf).chars().count(), 3);
    }

    #[test]
    fn page_hints_follow_pagination() {
        let bindings = TableBindings::default();
        let area = Rect::new(0, 0, 120, 1);

        let mut buf = Buffer::empty(area);
        HelpBar::for_table(&bindings, false, HelpBarOptions::default()).render_ref(area, &mut buf);
        let plain = row_text(&buf);
        assert!(plain.contains("sort"), "{plain}");
        assert!(!plain.contains("next page"), "{plain}");

        let mut buf = Buffer::empty(area);
        HelpBar::for_table(&bindings, true, HelpBarOptions::default()).render_ref(area, &mut buf);
        let paged = row_text(&buf);
        assert!(paged.contains("next page"), "{paged}");
    }
}
