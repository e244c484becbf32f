pub mod history_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod queue_pane;
pub mod session_pane;
pub mod stats_pane;
pub mod styles;

use crate::app::AppState;
use crate::domain::UiMode;
use history_pane::render_history_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use queue_pane::render_queue_pane;
use ratatui::{text::Line, widgets::Paragraph, Frame};
use session_pane::render_session_pane;
use stats_pane::render_stats_pane;
use styles::toast_style;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &mut AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // The daily counter rolls over on read, so fetch it before the panes
    // borrow the app immutably
    let completed_today = app.completed_today();

    render_keybindings(f, layout.keybindings_area);
    render_stats_pane(f, app, completed_today, layout.stats_area);
    render_session_pane(f, app, layout.session_area);
    render_queue_pane(f, app, layout.queue_area);
    render_history_pane(f, app, layout.history_area);

    // Toast line
    if let Some(message) = app.toast_message() {
        let toast = Paragraph::new(Line::raw(format!(" {}", message))).style(toast_style());
        f.render_widget(toast, layout.toast_area);
    }

    // Render input form if active
    if app.ui_mode == UiMode::AddingTask {
        render_input_form(f, app, size);
    }
}
