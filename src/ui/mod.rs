//! TUI rendering for prodcat.
//!
//! The UI only reads `AppState`: the filter panel mirrors the current
//! criteria and the table shows `app.results` as already computed.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::AppState;
use crate::theme::theme;

mod filters;
mod table;

pub use table::sort_indicator;

/// What: Render one full frame.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state (mutable only for the table selection state).
///
/// Output: None (draws into the frame).
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    // Background
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let footer_h = u16::from(app.show_keybinds_footer);
    let panel = filters::FilterPanel::build(app, area.width);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(panel.height()),
            Constraint::Min(3),
            Constraint::Length(footer_h),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "Product Categories",
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    )));
    f.render_widget(title, chunks[0]);

    panel.render(f, app, chunks[1]);
    table::render_table(f, app, chunks[2]);

    if app.show_keybinds_footer {
        let hints = Line::from(vec![
            Span::styled("Tab", Style::default().fg(th.sapphire)),
            Span::styled(" focus  ", Style::default().fg(th.overlay1)),
            Span::styled("←/→", Style::default().fg(th.sapphire)),
            Span::styled(" user/category  ", Style::default().fg(th.overlay1)),
            Span::styled("1-4", Style::default().fg(th.sapphire)),
            Span::styled(" sort  ", Style::default().fg(th.overlay1)),
            Span::styled("Ctrl+R", Style::default().fg(th.sapphire)),
            Span::styled(" reset  ", Style::default().fg(th.overlay1)),
            Span::styled("Esc", Style::default().fg(th.sapphire)),
            Span::styled(" clear/quit", Style::default().fg(th.overlay1)),
        ]);
        f.render_widget(Paragraph::new(hints), chunks[3]);
    }
}
