use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::KeyModifiers;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub keys: Vec<KeyEvent>,
    pub help_key: String,
    pub help_desc: String,
}

impl Binding {
    pub fn new(
        help_key: impl Into<String>,
        help_desc: impl Into<String>,
        keys: Vec<KeyEvent>,
    ) -> Self {
        Self {
            keys,
            help_key: help_key.into(),
            help_desc: help_desc.into(),
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.keys.iter().any(|k| key_event_matches(k, event))
    }
}

pub fn key_event_matches(pattern: &KeyEvent, event: &KeyEvent) -> bool {
    pattern.code == event.code && pattern.modifiers == event.modifiers
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code)
}

pub fn key_char(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c))
}

pub fn key_ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c)).with_modifiers(KeyModifiers::ctrl())
}

/// Commands understood by [`crate::table::TableView`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableCommand {
    CursorUp,
    CursorDown,
    Activate,
    CycleSort,
    ReverseSort,
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    GrowPageSize,
    ShrinkPageSize,
}

/// Key bindings for table navigation.
///
/// Each field is a [`Binding`], so the same values drive both dispatch ([`Self::command_for`])
/// and the hints shown by [`crate::help::HelpBar`].
#[derive(Clone, Debug)]
pub struct TableBindings {
    pub cursor_up: Binding,
    pub cursor_down: Binding,
    pub activate: Binding,
    pub cycle_sort: Binding,
    pub reverse_sort: Binding,
    pub next_page: Binding,
    pub previous_page: Binding,
    pub first_page: Binding,
    pub last_page: Binding,
    pub grow_page_size: Binding,
    pub shrink_page_size: Binding,
}

impl Default for TableBindings {
    fn default() -> Self {
        Self {
            cursor_up: Binding::new("↑/k", "up", vec![key(KeyCode::Up), key_char('k')]),
            cursor_down: Binding::new("↓/j", "down", vec![key(KeyCode::Down), key_char('j')]),
            activate: Binding::new("enter", "open", vec![key(KeyCode::Enter)]),
            cycle_sort: Binding::new("s", "sort", vec![key_char('s')]),
            reverse_sort: Binding::new("r", "reverse", vec![key_char('r')]),
            next_page: Binding::new(
                "→/n",
                "next page",
                vec![key(KeyCode::Right), key(KeyCode::PageDown), key_char('n')],
            ),
            previous_page: Binding::new(
                "←/p",
                "prev page",
                vec![key(KeyCode::Left), key(KeyCode::PageUp), key_char('p')],
            ),
            first_page: Binding::new("g", "first", vec![key(KeyCode::Home), key_char('g')]),
            last_page: Binding::new("G", "last", vec![key(KeyCode::End), key_char('G')]),
            grow_page_size: Binding::new("+", "more rows", vec![key_char('+'), key_char('=')]),
            shrink_page_size: Binding::new("-", "fewer rows", vec![key_char('-')]),
        }
    }
}

impl TableBindings {
    pub fn command_for(&self, key: &KeyEvent) -> Option<TableCommand> {
        let table = [
            (&self.cursor_up, TableCommand::CursorUp),
            (&self.cursor_down, TableCommand::CursorDown),
            (&self.activate, TableCommand::Activate),
            (&self.cycle_sort, TableCommand::CycleSort),
            (&self.reverse_sort, TableCommand::ReverseSort),
            (&self.next_page, TableCommand::NextPage),
            (&self.previous_page, TableCommand::PreviousPage),
            (&self.first_page, TableCommand::FirstPage),
            (&self.last_page, TableCommand::LastPage),
            (&self.grow_page_size, TableCommand::GrowPageSize),
            (&self.shrink_page_size, TableCommand::ShrinkPageSize),
        ];
        table
            .into_iter()
            .find(|(binding, _)| binding.matches(key))
            .map(|(_, command)| command)
    }

    /// Bindings worth showing in a help bar, in display order.
    ///
    /// Page bindings are left out when the table is not paginated.
    pub fn help(&self, paginated: bool) -> Vec<Binding> {
        let mut out = vec![
            self.cursor_down.clone(),
            self.cursor_up.clone(),
            self.activate.clone(),
            self.cycle_sort.clone(),
            self.reverse_sort.clone(),
        ];
        if paginated {
            out.extend([
                self.next_page.clone(),
                self.previous_page.clone(),
                self.grow_page_size.clone(),
            ]);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_matches_exact_modifiers() {
        let b = Binding::new("q", "quit", vec![key_char('q')]);
        assert!(b.matches(&key_char('q')));
        assert!(!b.matches(&key_ctrl('q')));
    }

    #[test]
    fn default_bindings_resolve_commands() {
        let b = TableBindings::default();
        assert_eq!(b.command_for(&key_char('n')), Some(TableCommand::NextPage));
        assert_eq!(b.command_for(&key(KeyCode::End)), Some(TableCommand::LastPage));
        assert_eq!(b.command_for(&key_char('G')), Some(TableCommand::LastPage));
        assert_eq!(b.command_for(&key_char('g')), Some(TableCommand::FirstPage));
        assert_eq!(b.command_for(&key_ctrl('n')), None);
    }

    #[test]
    fn help_hides_page_keys_without_pagination() {
        let b = TableBindings::default();
        assert!(b.help(false).iter().all(|h| h.help_desc != "next page"));
        assert!(b.help(true).iter().any(|h| h.help_desc == "next page"));
    }
}
