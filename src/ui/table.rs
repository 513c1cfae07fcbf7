//! Product table with sort indicators and the no-matches notice.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
};
use unicode_width::UnicodeWidthStr;

use crate::args::list::NO_MATCHES_MESSAGE;
use crate::catalog::{EnrichedProduct, Sex};
use crate::state::{AppState, Focus, SortColumn, SortDirection, SortOrder};
use crate::theme::{Theme, theme};

/// What: Header suffix for a column given the current sort.
///
/// Output:
/// - `"▲"`/`"▼"` on the sorted column, `"↕"` on the others.
#[must_use]
pub fn sort_indicator(sort: Option<SortOrder>, column: SortColumn) -> &'static str {
    match sort {
        Some(o) if o.column == column => match o.direction {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        },
        _ => "↕",
    }
}

/// Owner name colour: blue for `m`, red for `f`, muted when unknown or colouring is off.
fn owner_color(item: &EnrichedProduct, enabled: bool, th: &Theme) -> ratatui::style::Color {
    if !enabled {
        return th.text;
    }
    match item.owner_sex() {
        Some(Sex::Male) => th.sapphire,
        Some(Sex::Female) => th.red,
        None => th.overlay1,
    }
}

/// What: Render the product table, or the no-matches notice above an empty table.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state; `table_state` drives the highlighted row.
/// - `area`: Table rectangle.
pub(super) fn render_table(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Table;
    let block = Block::default()
        .title(Span::styled(
            format!("Products ({}/{})", app.results.len(), app.enriched.len()),
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface2 }));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let table_area = if app.results.is_empty() {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);
        let notice = Paragraph::new(Span::styled(
            NO_MATCHES_MESSAGE,
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        ));
        f.render_widget(notice, parts[0]);
        parts[1]
    } else {
        inner
    };

    let header_style = Style::default().fg(th.subtext0).add_modifier(Modifier::BOLD);
    let header = Row::new(
        [
            ("ID", SortColumn::Id),
            ("Product", SortColumn::Name),
            ("Category", SortColumn::Category),
            ("User", SortColumn::User),
        ]
        .map(|(name, col)| {
            Cell::from(format!("{name} {}", sort_indicator(app.sort, col)))
                .style(if app.sort.is_some_and(|o| o.column == col) {
                    header_style.fg(th.yellow)
                } else {
                    header_style
                })
        }),
    );

    let rows: Vec<Row> = app
        .results
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.id().to_string())
                    .style(Style::default().fg(th.text).add_modifier(Modifier::BOLD)),
                Cell::from(p.name().to_string()).style(Style::default().fg(th.text)),
                Cell::from(p.category_label()).style(Style::default().fg(th.subtext0)),
                Cell::from(p.owner_name().to_string())
                    .style(Style::default().fg(owner_color(p, app.owner_colors, &th))),
            ])
        })
        .collect();

    let id_width = app
        .results
        .iter()
        .map(|p| p.id().to_string().width())
        .max()
        .unwrap_or(0)
        .max("ID ↕".width());
    let widths = [
        Constraint::Length(u16::try_from(id_width).unwrap_or(u16::MAX)),
        Constraint::Fill(2),
        Constraint::Fill(2),
        Constraint::Fill(1),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .style(Style::default().fg(th.text).bg(th.base))
        .row_highlight_style(Style::default().fg(th.crust).bg(th.lavender))
        .highlight_symbol("> ");
    f.render_stateful_widget(table, table_area, &mut app.table_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::new_app;
    use crate::ui::tests::render_rows;

    #[test]
    /// What: Rows show id, name, "icon - title" and owner
    fn table_renders_enriched_columns() {
        let mut app = new_app();
        let rows = render_rows(&mut app, 100, 30);
        let banana = rows
            .iter()
            .find(|r| r.contains("Banana"))
            .expect("Banana row rendered");
        assert!(banana.contains("100"));
        assert!(banana.contains("Fruits"));
        assert!(banana.contains("Roma"));
        assert!(rows.iter().any(|r| r.contains("Products (5/5)")));
    }

    #[test]
    /// What: Empty result shows the notice and keeps the header
    fn table_empty_shows_notice() {
        let mut app = new_app();
        app.set_search_text("xyz");
        let screen = render_rows(&mut app, 100, 30).join("\n");
        assert!(screen.contains(NO_MATCHES_MESSAGE));
        assert!(screen.contains("Product ↕"));
        assert!(screen.contains("Products (0/5)"));
    }

    #[test]
    /// What: Sorted column header carries the direction arrow
    fn table_header_sort_indicator() {
        let mut app = new_app();
        app.set_sort(Some(SortOrder::desc(SortColumn::User)));
        let screen = render_rows(&mut app, 100, 30).join("\n");
        assert!(screen.contains("User ▼"));
        assert!(screen.contains("ID ↕"));
        assert_eq!(sort_indicator(None, SortColumn::Id), "↕");
        assert_eq!(
            sort_indicator(Some(SortOrder::asc(SortColumn::Id)), SortColumn::Id),
            "▲"
        );
    }

    #[test]
    /// What: Owner colours follow sex unless disabled
    fn owner_colors_follow_sex() {
        let app = new_app();
        let th = theme();
        let roma = &app.results[0];
        let anna = &app.results[3];
        assert_eq!(owner_color(roma, true, &th), th.sapphire);
        assert_eq!(owner_color(anna, true, &th), th.red);
        assert_eq!(owner_color(anna, false, &th), th.text);
    }
}
