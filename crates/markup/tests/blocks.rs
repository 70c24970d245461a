use course_markup::{render, render_text};
use pretty_assertions::assert_eq;
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

#[test]
fn test_br() {
    assert_eq!(
        render("a<br>string"),
        Paragraph::new(vec![
            vec![Span::styled("a", Style::new())].into(),
            vec![Span::styled("string", Style::new())].into(),
        ])
        .wrap(Wrap { trim: false })
    );
}

#[test]
fn test_br_multiple() {
    assert_eq!(
        render_text("a<br><br>string"),
        Text::from(vec![
            Line::from(vec![Span::styled("a", Style::new())]),
            Line::default(),
            Line::from(vec![Span::styled("string", Style::new())]),
        ])
    );
}

#[test]
fn test_linebreaks() {
    assert_eq!(
        render_text("a\nmultiline\nstring"),
        Text::from(vec![
            Line::from(vec![Span::styled("a", Style::new())]),
            Line::from(vec![Span::styled("multiline", Style::new())]),
            Line::from(vec![Span::styled("string", Style::new())]),
        ])
    );
}

#[test]
fn test_paragraphs() {
    assert_eq!(
        render_text("<p>one</p>\n<p>two</p>"),
        Text::from(vec![
            Line::from(vec![Span::styled("one", Style::new())]),
            Line::from(vec![Span::styled("two", Style::new())]),
        ])
    );
}

#[test]
fn test_divs_are_separated() {
    assert_eq!(
        render_text("<div><p>one</p></div>\n<div><p>two</p></div>"),
        Text::from(vec![
            Line::from(vec![Span::styled("one", Style::new())]),
            Line::default(),
            Line::from(vec![Span::styled("two", Style::new())]),
        ])
    );
}

#[test]
fn test_h3() {
    assert_eq!(
        render_text("<h3>header</h3>"),
        Text::from(vec![Line::from(vec![Span::styled(
            "header",
            Style::new().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        )])])
    );
}

#[test]
fn test_h5() {
    assert_eq!(
        render_text("<h5>header</h5>"),
        Text::from(vec![Line::from(vec![Span::styled(
            "header",
            Style::new().add_modifier(Modifier::BOLD)
        )])])
    );
}
