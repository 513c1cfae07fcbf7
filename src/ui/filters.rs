//! Filter panel: user row, search box, category row and the reset hint.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::catalog::RecordId;
use crate::state::{AppState, Focus, NO_FILTER};
use crate::theme::{Theme, theme};

/// Prefix shown before the search text.
const SEARCH_PREFIX: &str = "> ";
/// Height of the search input box including its border.
const SEARCH_HEIGHT: u16 = 3;
/// Rows used by the panel besides the option rows: border, search box, reset hint.
const FIXED_ROWS: u16 = 2 + SEARCH_HEIGHT + 1;

/// What: Build a row of selectable labels, wrapped to `width` columns.
///
/// Inputs:
/// - `label`: Row caption ("Users", "Categories").
/// - `options`: `(id, text)` pairs, not including `All`.
/// - `active`: Currently selected id ([`NO_FILTER`] for `All`).
/// - `focused`: Whether this row has keyboard focus.
/// - `th`: Palette.
/// - `width`: Available columns.
///
/// Output:
/// - One or more lines like `Users:  All   Roma   Anna` with the active entry styled.
///
/// Details:
/// - Entries never split; continuation lines are indented under the first entry.
fn option_lines(
    label: &str,
    options: impl Iterator<Item = (RecordId, String)>,
    active: RecordId,
    focused: bool,
    th: &Theme,
    width: usize,
) -> Vec<Line<'static>> {
    let label_style = if focused {
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(th.overlay1)
    };
    let active_style = Style::default()
        .fg(th.crust)
        .bg(th.green)
        .add_modifier(Modifier::BOLD);
    let idle_style = Style::default().fg(th.text);

    let prefix = format!("{label}: ");
    let indent = prefix.width();
    let mut lines = Vec::new();
    let mut spans = vec![Span::styled(prefix, label_style)];
    let mut used = indent;
    let all = std::iter::once((NO_FILTER, "All".to_string()));
    for (id, text) in all.chain(options) {
        let chip = format!(" {text} ");
        let chip_w = chip.width();
        if used > indent && used + chip_w > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            spans.push(Span::raw(" ".repeat(indent)));
            used = indent;
        }
        let style = if id == active { active_style } else { idle_style };
        spans.push(Span::styled(chip, style));
        spans.push(Span::raw(" "));
        used += chip_w + 1;
    }
    lines.push(Line::from(spans));
    lines
}

/// Number of lines as a layout height.
fn line_count(lines: &[Line<'_>]) -> u16 {
    u16::try_from(lines.len()).unwrap_or(u16::MAX)
}

/// User and category rows laid out for one panel width.
pub(super) struct FilterPanel {
    /// Wrapped user row.
    users: Vec<Line<'static>>,
    /// Wrapped category row.
    categories: Vec<Line<'static>>,
}

impl FilterPanel {
    /// What: Lay out the option rows for a panel `width` columns wide (borders included).
    pub(super) fn build(app: &AppState, width: u16) -> Self {
        let th = theme();
        let inner = usize::from(width.saturating_sub(2));
        let users = option_lines(
            "Users",
            app.catalog.users.iter().map(|u| (u.id, u.name.clone())),
            app.criteria.selected_user_id,
            app.focus == Focus::Users,
            &th,
            inner,
        );
        let categories = option_lines(
            "Categories",
            app.catalog
                .categories
                .iter()
                .map(|c| (c.id, format!("{} {}", c.icon, c.title))),
            app.criteria.selected_category_id,
            app.focus == Focus::Categories,
            &th,
            inner,
        );
        Self { users, categories }
    }

    /// Total panel height including its border.
    pub(super) fn height(&self) -> u16 {
        FIXED_ROWS
            .saturating_add(line_count(&self.users))
            .saturating_add(line_count(&self.categories))
    }

    /// What: Render the filter panel (users, search, categories, reset hint).
    ///
    /// Inputs:
    /// - `f`: Frame to draw into.
    /// - `app`: Application state.
    /// - `area`: Panel rectangle.
    ///
    /// Details:
    /// - Places the terminal cursor at the end of the search text when the search has focus.
    pub(super) fn render(self, f: &mut Frame, app: &AppState, area: Rect) {
        let th = theme();
        let block = Block::default()
            .title(Span::styled("Filters", Style::default().fg(th.overlay1)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface2));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(line_count(&self.users)),
                Constraint::Length(SEARCH_HEIGHT),
                Constraint::Length(line_count(&self.categories)),
                Constraint::Length(1),
            ])
            .split(inner);

        f.render_widget(Paragraph::new(self.users), rows[0]);
        render_search(f, app, rows[1], &th);
        f.render_widget(Paragraph::new(self.categories), rows[2]);

        let reset = Line::from(vec![
            Span::styled("Ctrl+R ", Style::default().fg(th.sapphire)),
            Span::styled("Reset all filters", Style::default().fg(th.subtext0)),
        ]);
        f.render_widget(Paragraph::new(reset), rows[3]);
    }
}

/// Render the search input box; shows a clear hint while text is present.
fn render_search(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let focused = app.focus == Focus::Search;
    let text = app.criteria.search_text.as_str();
    let mut spans = vec![
        Span::styled(
            SEARCH_PREFIX,
            Style::default().fg(if focused { th.sapphire } else { th.overlay1 }),
        ),
        Span::styled(
            text.to_string(),
            Style::default().fg(if focused { th.text } else { th.subtext0 }),
        ),
    ];
    if !text.is_empty() {
        spans.push(Span::styled("  [Esc: clear]", Style::default().fg(th.overlay1)));
    }
    let title = if focused { "Search (focused)" } else { "Search" };
    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(Span::styled(
                title,
                Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 })),
    );
    f.render_widget(input, area);

    if focused {
        let offset = u16::try_from(SEARCH_PREFIX.width() + text.width()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(offset)
            .min(area.right().saturating_sub(2));
        f.set_cursor_position(Position::new(x, area.y.saturating_add(1)));
    }
}
