use course_markup::render_text;
use pretty_assertions::assert_eq;
use ratatui::prelude::*;

#[test]
fn test_strong() {
    assert_eq!(
        render_text("<p><strong>Instructor:</strong> Ferris</p>"),
        Text::from(vec![Line::from(vec![
            Span::styled("Instructor:", Style::new().add_modifier(Modifier::BOLD)),
            Span::styled(" Ferris", Style::new()),
        ])])
    );
}

#[test]
fn test_link() {
    assert_eq!(
        render_text("see <a href=\"https://example.com\">here</a>"),
        Text::from(vec![Line::from(vec![
            Span::styled("see ", Style::new()),
            Span::styled("here", Style::new().fg(Color::Blue)),
        ])])
    );
}

#[test]
fn test_entities_are_decoded() {
    assert_eq!(
        render_text("<p>&lt;script&gt; &amp; more</p>"),
        Text::from(vec![Line::from(vec![Span::styled(
            "<script> & more",
            Style::new()
        )])])
    );
}

#[test]
fn test_unknown_tag() {
    assert_eq!(
        render_text("<blink>hi</blink>"),
        Text::from(vec![Line::from(vec![Span::styled(
            "hi",
            Style::new().fg(Color::Red)
        )])])
    );
}
