use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_add_task_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Quit
        KeyCode::Char('q') => return Ok(true),

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        // Queue actions
        KeyCode::Char('a') => app.open_add_task_form(),
        KeyCode::Char(' ') => app.toggle_selected_complete(),
        KeyCode::Char('d') => app.remove_selected(),
        KeyCode::Char('p') => app.cycle_selected_priority(),

        // Session flow
        KeyCode::Enter | KeyCode::Char('s') => app.start_selected_session(),
        KeyCode::Char('r') => app.pause_resume(),
        KeyCode::Char('c') => app.complete_session_early(),
        KeyCode::Char('x') => app.stop_session(),

        // Settings and history
        KeyCode::Char('l') => app.cycle_session_length(),
        KeyCode::Char('e') => app.export_history(),
        KeyCode::Char('C') => app.clear_history(),
        KeyCode::Char('T') => app.clear_today(),

        _ => {}
    }

    Ok(false)
}

/// Handle keys while the add-task form is open
fn handle_add_task_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => app.cancel_add_task_form(),
        KeyCode::Enter => app.submit_new_task(),
        KeyCode::Backspace => {
            app.input_buffer.pop();
        }
        KeyCode::Char(c) => app.input_buffer.push(c),
        _ => {}
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::KvStore;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_in(dir: &std::path::Path) -> AppState {
        AppState::new(KvStore::new(dir))
    }

    #[test]
    fn test_q_quits_in_normal_mode() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut app = app_in(temp_dir.path());

        assert!(handle_key(&mut app, press(KeyCode::Char('q'))).unwrap());
    }

    #[test]
    fn test_add_task_flow_through_keys() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut app = app_in(temp_dir.path());

        handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        for c in "Plan the week".chars() {
            handle_key(&mut app, press(KeyCode::Char(c))).unwrap();
        }
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.queue.len(), 1);
        assert_eq!(app.queue.tasks()[0].text, "Plan the week");
    }

    #[test]
    fn test_q_types_into_the_form_instead_of_quitting() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut app = app_in(temp_dir.path());

        handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();
        let quit = handle_key(&mut app, press(KeyCode::Char('q'))).unwrap();

        assert!(!quit);
        assert_eq!(app.input_buffer, "q");
    }

    #[test]
    fn test_esc_cancels_the_form() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut app = app_in(temp_dir.path());

        handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();
        handle_key(&mut app, press(KeyCode::Char('x'))).unwrap();
        handle_key(&mut app, press(KeyCode::Esc)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.queue.is_empty());
    }

    #[test]
    fn test_enter_starts_session_on_selected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut app = app_in(temp_dir.path());

        app.input_buffer = "focus".to_string();
        app.submit_new_task();
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();

        assert!(app.session.is_active());
        assert!(app.timer.is_running());
    }
}
