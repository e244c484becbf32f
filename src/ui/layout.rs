use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub stats_area: Rect,
    pub session_area: Rect,
    pub queue_area: Rect,
    pub history_area: Rect,
    pub toast_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Stats row: sessions today / tasks ready / avg session
/// - Session pane: the active countdown (or the idle hint)
/// - Main area: queue (60%) | history (40%)
/// - Bottom: toast line (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(4), // Stats row
            Constraint::Length(6), // Session pane
            Constraint::Min(0),    // Queue + history
            Constraint::Length(1), // Toast line
        ])
        .split(area);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Queue pane
            Constraint::Percentage(40), // History pane
        ])
        .split(vertical[3]);

    MainLayout {
        keybindings_area: vertical[0],
        stats_area: vertical[1],
        session_area: vertical[2],
        queue_area: middle[0],
        history_area: middle[1],
        toast_area: vertical[4],
    }
}

/// Create centered modal area (for the add-task form)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(8),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = create_layout(area);

        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.stats_area.height, 4);
        assert_eq!(layout.session_area.height, 6);
        assert!(layout.queue_area.height > 0);
        assert!(layout.history_area.height > 0);
        assert_eq!(layout.toast_area.height, 1);
        assert!(layout.queue_area.width > layout.history_area.width);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area);

        assert!(modal.width < area.width);
        assert!(modal.height < area.height);
        assert_eq!(modal.height, 8);
    }
}
