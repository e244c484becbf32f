use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" ↑/↓ select   "),
        Span::raw("a add   "),
        Span::raw("Enter start   "),
        Span::raw("r pause   "),
        Span::raw("c complete   "),
        Span::raw("x stop   "),
        Span::raw("Space done   "),
        Span::raw("d delete   "),
        Span::raw("p priority   "),
        Span::raw("l length   "),
        Span::raw("e export   "),
        Span::raw("C clear history   "),
        Span::raw("T clear today   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
