use crate::app::AppState;
use crate::domain::{format_clock, format_seconds};
use crate::timer::TimerPhase;
use crate::ui::styles::{
    border_style, default_style, hint_style, paused_style, running_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the active-session pane: task text, countdown clock and the
/// session controls, or the idle hint when nothing is running
pub fn render_session_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let title = format!(" Current Focus Session ({}) ", app.session_length.label());

    let lines = match app.session.current() {
        Some(task) => {
            let clock = format_clock(app.timer.remaining_seconds());
            let (clock_span, status) = match app.timer.phase() {
                TimerPhase::Running => (Span::styled(clock, running_style()), ""),
                TimerPhase::Paused => (Span::styled(clock, paused_style()), "  (paused)"),
                TimerPhase::Idle => (Span::styled(clock, paused_style()), ""),
            };

            let planned_seconds = app.session_length.seconds();
            let worked = planned_seconds.saturating_sub(app.timer.remaining_seconds());

            vec![
                Line::from(vec![
                    clock_span,
                    Span::styled(status.to_string(), hint_style()),
                ]),
                Line::styled(task.text.clone(), default_style()),
                Line::styled(
                    format!("worked {}", format_seconds(worked, true)),
                    hint_style(),
                ),
                Line::styled(
                    "c complete   r pause/resume   x stop",
                    hint_style(),
                ),
            ]
        }
        None => vec![
            Line::styled("No active session", default_style()),
            Line::styled(
                "Enter starts the selected task   l cycles the session length",
                hint_style(),
            ),
        ],
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(paragraph, area);
}
