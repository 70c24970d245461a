use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::styles::hint_text;

/// Draw `message` in a box over the middle of `area`
pub fn draw_notice(frame: &mut Frame, area: Rect, message: &str) {
    let popup = centered(area, 60, 7);
    let block = Block::default()
        .title("Notice")
        .borders(Borders::ALL)
        .title_alignment(Alignment::Center);
    let inner = block.inner(popup);

    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    let layout = Layout::new(
        Direction::Vertical,
        [Constraint::Min(1), Constraint::Length(1)],
    )
    .split(inner);
    frame.render_widget(
        Paragraph::new(message.to_string()).wrap(Wrap { trim: true }),
        layout[0],
    );
    frame.render_widget(
        Paragraph::new(hint_text("Enter / Esc to dismiss")).alignment(Alignment::Center),
        layout[1],
    );
}

/// A rectangle of at most `width` x `height`, centred in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered() {
        assert_eq!(
            centered(Rect::new(0, 0, 100, 30), 60, 7),
            Rect::new(20, 11, 60, 7)
        );
        assert_eq!(
            centered(Rect::new(0, 0, 40, 5), 60, 7),
            Rect::new(0, 0, 40, 5)
        );
    }
}
