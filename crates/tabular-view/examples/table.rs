use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::WriteLogger;
use std::fs::File;
use std::io;
use std::time::Duration;
use std::time::Instant;
use tabular_view::calendar::CalendarMonth;
use tabular_view::calendar::MonthGrid;
use tabular_view::config::TableConfig;
use tabular_view::crossterm_input::input_event_from_crossterm;
use tabular_view::help::HelpBar;
use tabular_view::help::HelpBarOptions;
use tabular_view::input::InputEvent;
use tabular_view::input::KeyCode;
use tabular_view::table::Column;
use tabular_view::table::Row;
use tabular_view::table::TableAction;
use tabular_view::table::TableView;
use tabular_view::table::Value;
use tabular_view::theme::Theme;
use tabular_view::toast::Toast;
use tabular_view::toast::ToastKind;
use tabular_view::toast::ToastPosition;
use tabular_view::toast::ToastQueue;

const PEOPLE: &str = r#"[
    {"id": 1, "name": "John Doe",    "email": "john@example.com"},
    {"id": 2, "name": "Jane Smith",  "email": "jane@example.com"},
    {"id": 3, "name": "Bob Johnson", "email": "bob@example.com"},
    {"id": 4, "name": "Alice Brown", "email": "alice@example.com"},
    {"id": 5, "name": "John Doe",    "email": "john@example.com"},
    {"id": 6, "name": "Jane Smith",  "email": "jane@example.com"}
]"#;

const LOAD_TIME: Duration = Duration::from_secs(2);

struct App {
    table: TableView<Row>,
    toasts: ToastQueue,
    month: CalendarMonth,
    today: chrono::NaiveDate,
    loading_until: Option<Instant>,
}

fn main() -> io::Result<()> {
    let log_file = File::create("tabular-view-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file).map_err(io::Error::other)?;

    let config = match std::env::args().nth(1) {
        Some(path) => TableConfig::load(path).map_err(io::Error::other)?,
        None => TableConfig {
            pagination: true,
            page_size: 5,
            ..Default::default()
        },
    };

    let mut rows: Vec<Row> = serde_json::from_str(PEOPLE).map_err(io::Error::other)?;
    rows.extend((7..=42).map(|id| {
        Row::new()
            .with("id", id)
            .with("name", format!("User {id:02}"))
            .with("email", format!("user{id}@example.com"))
    }));

    let mut table = TableView::with_options(config.to_options());
    table.set_columns(if config.columns.is_empty() {
        default_columns()
    } else {
        config.columns()
    });
    table.set_rows(rows);
    table.set_on_row_click(|row: &Row| log::info!("row clicked: {:?}", row.get("id")));

    let today = chrono::Local::now().date_naive();
    let mut app = App {
        table,
        toasts: ToastQueue::new(),
        month: CalendarMonth::containing(today),
        today,
        loading_until: None,
    };

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal, &Theme::default(), &mut app);

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    res
}

fn default_columns() -> Vec<Column<Row>> {
    vec![
        Column::new("id", "ID").width(4),
        Column::new("name", "Name"),
        Column::new("email", "Email"),
        Column::new("action", "Action")
            .sortable(false)
            .width(15)
            .render_with(|_: &Value, _: &Row, _: usize| -> Line<'static> {
                Line::from(vec![
                    Span::raw("[Edit]").cyan(),
                    Span::raw(" "),
                    Span::raw("[Delete]").red(),
                ])
            }),
    ]
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    theme: &Theme,
    app: &mut App,
) -> io::Result<()> {
    loop {
        let now = Instant::now();
        app.toasts.tick(now);
        if app.loading_until.is_some_and(|until| now >= until) {
            app.loading_until = None;
            app.table.set_loading(false);
            app.toasts.push(
                Toast::new(ToastKind::Success, "Loading completed successfully!")
                    .duration(Duration::from_millis(2000)),
            );
        }

        terminal.draw(|f| {
            let area = f.area();
            let block = Block::default()
                .title("TabularView (s sort, n/p pages, L load, c compact, b borders, [ ] month, q)")
                .borders(Borders::ALL);
            let inner = block.inner(area);
            f.render_widget(block, area);

            let buf = f.buffer_mut();
            let side_w = 22.min(inner.width / 3);
            let table_area = Rect::new(
                inner.x,
                inner.y,
                inner.width - side_w,
                inner.height.saturating_sub(1),
            );
            let help_area = Rect::new(inner.x, inner.y + table_area.height, inner.width, 1);
            let side_area = Rect::new(
                inner.x + table_area.width + 1,
                inner.y,
                side_w.saturating_sub(1),
                table_area.height.min(8),
            );

            app.table.render(table_area, buf, theme);

            let mut grid = MonthGrid::new(app.month);
            grid.today = Some(app.today);
            grid.render(side_area, buf, theme);

            let help = HelpBar::for_table(
                &app.table.options().bindings,
                app.table.options().pagination,
                HelpBarOptions {
                    style: theme.text_muted,
                    key_style: theme.accent,
                    ..Default::default()
                },
            );
            help.render_ref(help_area, buf);

            app.toasts.render(inner, buf, theme);
        })?;

        if !crossterm::event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Some(ev) = input_event_from_crossterm(crossterm::event::read()?) else {
            continue;
        };

        if let InputEvent::Key(key) = &ev {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('L') => {
                    app.table.set_loading(true);
                    app.loading_until = Some(Instant::now() + LOAD_TIME);
                    app.toasts
                        .success("Loading started! This will complete in 2 seconds.");
                    continue;
                }
                KeyCode::Char('c') | KeyCode::Char('b') => {
                    let mut options = app.table.options().clone();
                    if key.code == KeyCode::Char('c') {
                        options.compact = !options.compact;
                    } else {
                        options.bordered = !options.bordered;
                    }
                    app.table.set_options(options);
                    continue;
                }
                KeyCode::Char('[') => {
                    app.month = app.month.prev();
                    continue;
                }
                KeyCode::Char(']') => {
                    app.month = app.month.next();
                    continue;
                }
                _ => {}
            }
        }

        match app.table.handle_event(ev) {
            TableAction::RowActivated(index) => {
                let name = app.table.rows()[index]
                    .get("name")
                    .map(ToString::to_string)
                    .unwrap_or_default();
                app.toasts.push(
                    Toast::new(ToastKind::Info, format!("Clicked on: {name}"))
                        .duration(Duration::from_millis(2000))
                        .position(ToastPosition::TopCenter),
                );
            }
            TableAction::SortChanged { key, direction } => {
                log::info!("sorted by {key} {direction:?}");
            }
            TableAction::PageChanged(_)
            | TableAction::PageSizeChanged(_)
            | TableAction::Redraw
            | TableAction::None => {}
        }
    }
}
