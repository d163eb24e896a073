//! Minimal HTML builder.
//!
//! Tag names, attributes and fixed markup are `&'static str`, so only
//! compile-time literals can become markup. Every runtime value goes through
//! [`HtmlBuilder::text`] and is escaped.

use std::fmt::Display;

/// Escape HTML special characters
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[derive(Debug, Default)]
pub struct HtmlBuilder {
    buf: String,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<tag>`
    pub fn open(&mut self, tag: &'static str) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        self.buf.push('>');
        self
    }

    /// `<tag class="...">`
    pub fn open_class(&mut self, tag: &'static str, class: &'static str) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        self.buf.push_str(" class=\"");
        self.buf.push_str(class);
        self.buf.push_str("\">");
        self
    }

    /// `</tag>` followed by a newline for block elements.
    pub fn close(&mut self, tag: &'static str) -> &mut Self {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
        self.buf.push('\n');
        self
    }

    /// Escaped text content.
    pub fn text<T: Display>(&mut self, value: T) -> &mut Self {
        self.buf.push_str(&escape(&value.to_string()));
        self
    }

    /// `<tag>escaped value</tag>`
    pub fn element<T: Display>(&mut self, tag: &'static str, value: T) -> &mut Self {
        self.open(tag);
        self.text(value);
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
        self
    }

    /// `<tag class="...">escaped value</tag>`
    pub fn element_class<T: Display>(
        &mut self,
        tag: &'static str,
        class: &'static str,
        value: T,
    ) -> &mut Self {
        self.open_class(tag, class);
        self.text(value);
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
        self
    }

    /// Fixed markup known at compile time (doctype, head, style).
    pub fn literal(&mut self, markup: &'static str) -> &mut Self {
        self.buf.push_str(markup);
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Splice a fragment produced by another builder.
    pub fn fragment(&mut self, other: HtmlBuilder) -> &mut Self {
        self.buf.push_str(&other.buf);
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }
}
