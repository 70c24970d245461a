//! Renders the small subset of HTML used by the course list to ratatui text.
//!
//! Block elements (`div`, `p`, headings, `li`) start and end lines, `br` breaks
//! a line, and inline elements only change the style. Whitespace-only text
//! between tags is layout, not content, and is dropped.
use std::mem::take;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
};
use tl::{HTMLTag, Node, NodeHandle, Parser};

/// Render `html` into a wrapped paragraph
pub fn render(html: &str) -> Paragraph<'static> {
    Paragraph::new(render_text(html)).wrap(Wrap { trim: false })
}

/// Render `html` into styled lines
pub fn render_text(html: &str) -> Text<'static> {
    let dom = match tl::parse(html, tl::ParserOptions::default()) {
        Ok(dom) => dom,
        Err(e) => {
            log::error!("couldn't parse html, showing it raw: {}", e);
            return Text::raw(html.to_string());
        }
    };

    let mut renderer = Renderer::default();
    for handle in dom.children() {
        renderer.node(dom.parser(), handle, Style::default());
    }

    renderer.finish()
}

#[derive(Default)]
struct Renderer {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
}

impl Renderer {
    fn node(&mut self, parser: &Parser, handle: &NodeHandle, style: Style) {
        let Some(node) = handle.get(parser) else {
            return;
        };
        match node {
            Node::Tag(t) => self.tag(parser, t, style),
            Node::Raw(s) => self.text(&s.as_utf8_str(), style),
            Node::Comment(_) => (),
        }
    }

    fn tag(&mut self, parser: &Parser, t: &HTMLTag, style: Style) {
        let name = t.name().as_utf8_str().to_ascii_lowercase();
        match name.as_str() {
            "br" => self.break_line(),
            "h1" | "h2" | "h3" => self.block(
                parser,
                t,
                style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
            "h4" | "h5" | "h6" => self.block(parser, t, style.add_modifier(Modifier::BOLD)),
            "p" | "li" => self.block(parser, t, style),
            "div" => {
                self.block(parser, t, style);
                self.separate();
            }
            "strong" | "b" => self.children(parser, t, style.add_modifier(Modifier::BOLD)),
            "em" | "i" => self.children(parser, t, style.add_modifier(Modifier::ITALIC)),
            "a" => self.children(parser, t, style.fg(Color::Blue)),
            "span" => self.children(parser, t, style),
            other => {
                log::warn!("unknown tag: {}", other);
                self.children(parser, t, style.fg(Color::Red));
            }
        }
    }

    fn children(&mut self, parser: &Parser, t: &HTMLTag, style: Style) {
        let children = t.children();
        for child in children.top().iter() {
            self.node(parser, child, style);
        }
    }

    fn block(&mut self, parser: &Parser, t: &HTMLTag, style: Style) {
        self.end_line();
        self.children(parser, t, style);
        self.end_line();
    }

    fn text(&mut self, s: &str, style: Style) {
        if s.contains('\n') && s.trim().is_empty() {
            return;
        }

        let decoded = html_escape::decode_html_entities(s);
        let mut parts = decoded.split('\n');
        if let Some(first) = parts.next() {
            self.push(first, style);
        }
        for part in parts {
            self.break_line();
            self.push(part.trim_start(), style);
        }
    }

    fn push(&mut self, s: &str, style: Style) {
        if !s.is_empty() {
            self.current.push(Span::styled(s.to_string(), style));
        }
    }

    /// Finish the current line, if anything is on it
    fn end_line(&mut self) {
        if !self.current.is_empty() {
            self.break_line();
        }
    }

    /// Finish the current line, even if it's empty
    fn break_line(&mut self) {
        self.lines.push(Line::from(take(&mut self.current)));
    }

    /// Leave a blank line after a block, unless there's one already
    fn separate(&mut self) {
        if matches!(self.lines.last(), Some(l) if !l.spans.is_empty()) {
            self.lines.push(Line::default());
        }
    }

    fn finish(mut self) -> Text<'static> {
        self.end_line();
        while matches!(self.lines.last(), Some(l) if l.spans.is_empty()) {
            self.lines.pop();
        }
        Text::from(self.lines)
    }
}
