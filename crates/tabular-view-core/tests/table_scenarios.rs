use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use tabular_view_core::table::Column;
use tabular_view_core::table::PageItem;
use tabular_view_core::table::Row;
use tabular_view_core::table::SortDirection;
use tabular_view_core::table::TableAction;
use tabular_view_core::table::TableStatus;
use tabular_view_core::table::TableView;
use tabular_view_core::table::TableViewOptions;
use tabular_view_core::table::page_window;
use tabular_view_core::table::paginate::page_range;
use tabular_view_core::table::sort::sorted_indices;
use tabular_view_core::theme::Theme;

const PEOPLE: &str = r#"[
    {"id": 1, "name": "John Doe",    "email": "john@example.com",  "role": "Admin"},
    {"id": 2, "name": "Jane Smith",  "email": "jane@example.com",  "role": "User"},
    {"id": 3, "name": "Bob Johnson", "email": "bob@example.com",   "role": "User"},
    {"id": 4, "name": "Alice Brown", "email": "alice@example.com", "role": "Editor"},
    {"id": 5, "name": "John Doe",    "email": "john2@example.com", "role": "User"},
    {"id": 6, "name": "Jane Smith",  "email": "jane2@example.com", "role": "Admin"}
]"#;

fn people() -> Vec<Row> {
    serde_json::from_str(PEOPLE).unwrap()
}

fn columns() -> Vec<Column<Row>> {
    vec![
        Column::new("id", "ID").width(4),
        Column::new("name", "Name"),
        Column::new("email", "Email"),
        Column::new("role", "Role").sortable(false),
    ]
}

fn paged_table(page_size: usize) -> TableView<Row> {
    let mut t = TableView::with_options(TableViewOptions {
        pagination: true,
        page_size,
        ..Default::default()
    });
    t.set_columns(columns());
    t.set_rows(people());
    t
}

fn ids(t: &TableView<Row>) -> Vec<String> {
    t.visible_rows()
        .map(|r| r.row.get("id").map(ToString::to_string).unwrap_or_default())
        .collect()
}

fn names(t: &TableView<Row>) -> Vec<String> {
    t.visible_rows()
        .map(|r| r.row.get("name").map(ToString::to_string).unwrap_or_default())
        .collect()
}

#[test]
fn scenario_a_two_pages_of_five() {
    let mut t = paged_table(5);
    assert_eq!(t.total_pages(), 2);
    assert_eq!(ids(&t), vec!["1", "2", "3", "4", "5"]);
    assert_eq!(t.go_to_page(2), TableAction::PageChanged(2));
    assert_eq!(ids(&t), vec!["6"]);
}

#[test]
fn scenario_b_stable_sort_by_name() {
    let mut t = paged_table(10);
    assert_eq!(
        t.sort_by("name"),
        TableAction::SortChanged {
            key: "name".into(),
            direction: SortDirection::Ascending
        }
    );
    assert_eq!(
        names(&t),
        vec![
            "Alice Brown",
            "Bob Johnson",
            "Jane Smith",
            "Jane Smith",
            "John Doe",
            "John Doe"
        ]
    );
    assert_eq!(ids(&t), vec!["4", "3", "2", "6", "1", "5"]);

    t.sort_by("name");
    assert_eq!(ids(&t), vec!["1", "5", "2", "6", "3", "4"]);
}

#[test]
fn scenario_c_page_window() {
    assert_eq!(
        page_window(6, 12),
        vec![
            PageItem::Page(1),
            PageItem::Ellipsis,
            PageItem::Page(4),
            PageItem::Page(5),
            PageItem::Page(6),
            PageItem::Page(7),
            PageItem::Page(8),
            PageItem::Ellipsis,
            PageItem::Page(12),
        ]
    );
}

#[test]
fn scenario_d_page_size_change_resets_page() {
    let mut t = paged_table(5);
    t.go_to_page(2);
    assert_eq!(t.set_page_size(10), TableAction::PageSizeChanged(10));
    assert_eq!(t.current_page(), 1);
    assert_eq!(t.total_pages(), 1);
}

#[test]
fn scenario_e_empty_data() {
    let mut t: TableView<Row> = TableView::with_options(TableViewOptions {
        pagination: true,
        ..Default::default()
    });
    t.set_columns(columns());
    t.set_rows(Vec::new());
    assert_eq!(t.status(), TableStatus::Empty);
    assert_eq!(t.total_pages(), 0);
    assert!(t.page_window().is_empty());
    assert_eq!(t.page_info(), None);
    assert_eq!(t.go_to_page(1), TableAction::None);

    let area = Rect::new(0, 0, 50, 6);
    let mut buf = Buffer::empty(area);
    t.render(area, &mut buf, &Theme::default());
    let text: String = buf.content().iter().map(|c| c.symbol()).collect();
    assert!(text.contains("No data available"));
    assert!(!text.contains('«'));
}

#[test]
fn out_of_range_pages_are_ignored() {
    let mut t = paged_table(5);
    assert_eq!(t.go_to_page(0), TableAction::None);
    assert_eq!(t.go_to_page(3), TableAction::None);
    assert_eq!(t.current_page(), 1);
    t.go_to_page(2);
    assert_eq!(t.go_to_page(3), TableAction::None);
    assert_eq!(t.current_page(), 2);
}

#[test]
fn non_sortable_header_is_a_no_op() {
    let mut t = paged_table(5);
    assert_eq!(t.sort_by("role"), TableAction::None);
    assert_eq!(t.sort_by("missing"), TableAction::None);
    assert_eq!(t.sort_state().key, None);
    assert_eq!(t.sorted_indices(), &[0, 1, 2, 3, 4, 5]);
}

#[test]
fn ties_keep_source_order_in_both_directions() {
    let rows = people();
    for key in ["id", "name", "email", "role"] {
        let asc = sorted_indices(&rows, key, SortDirection::Ascending);
        let desc = sorted_indices(&rows, key, SortDirection::Descending);
        assert_eq!(asc.len(), rows.len());

        let value = |i: usize| rows[i].get(key).cloned().unwrap_or_default();
        for order in [&asc, &desc] {
            for pair in order.windows(2) {
                if value(pair[0]) == value(pair[1]) {
                    assert!(pair[0] < pair[1], "{key}: tie out of source order");
                }
            }
        }
    }

    // Distinct keys: descending is exactly the reverse of ascending.
    let mut asc = sorted_indices(&rows, "email", SortDirection::Ascending);
    asc.reverse();
    assert_eq!(asc, sorted_indices(&rows, "email", SortDirection::Descending));
}

#[test]
fn sorting_sorted_rows_is_idempotent() {
    let rows = people();
    let once = sorted_indices(&rows, "name", SortDirection::Ascending);
    let sorted: Vec<Row> = once.iter().map(|&i| rows[i].clone()).collect();
    let twice = sorted_indices(&sorted, "name", SortDirection::Ascending);
    assert_eq!(twice, (0..sorted.len()).collect::<Vec<_>>());
}

#[test]
fn pages_concatenate_to_sorted_sequence() {
    for rows in 0..=23usize {
        for page_size in 1..=7 {
            let total = rows.div_ceil(page_size);
            let joined: Vec<usize> = (1..=total)
                .flat_map(|page| page_range(rows, page, page_size))
                .collect();
            assert_eq!(joined, (0..rows).collect::<Vec<_>>(), "{rows} rows / {page_size}");
        }
    }

    let mut t = paged_table(4);
    t.sort_by("email");
    let mut seen = Vec::new();
    for page in 1..=t.total_pages() {
        t.go_to_page(page);
        seen.extend_from_slice(t.visible_indices());
    }
    assert_eq!(seen, t.sorted_indices());
}

#[test]
fn loading_overrides_data() {
    let mut t = paged_table(5);
    t.set_loading(true);
    assert_eq!(t.status(), TableStatus::Loading);
    assert_eq!(t.sort_by("name"), TableAction::None);
    assert_eq!(t.go_to_page(2), TableAction::None);
    t.set_loading(false);
    assert_eq!(t.status(), TableStatus::Populated);
    assert!(matches!(t.sort_by("name"), TableAction::SortChanged { .. }));
}
