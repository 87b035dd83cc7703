//! HTML renderer
//!
//! Renders a view tree to server-side HTML.

use pulldown_cmark::{html, Event, Options, Parser};

use super::{dedent, Component};

/// Render a tree to an HTML fragment
pub fn render_html(component: &Component) -> String {
    let mut buf = String::new();
    render_into(component, &mut buf);
    buf
}

/// Render a tree as a complete HTML document
pub fn render_document(title: &str, component: &Component) -> String {
    let mut buf = String::new();

    buf.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    buf.push_str("<meta charset=\"utf-8\">\n");
    buf.push_str(&format!("<title>{}</title>\n", escape(title)));
    buf.push_str("</head>\n<body>\n");
    buf.push_str("<div id=\"react-entry-point\">");
    render_into(component, &mut buf);
    buf.push_str("</div>\n</body>\n</html>\n");

    buf
}

fn render_into(component: &Component, buf: &mut String) {
    match component {
        Component::Div { children, style } => {
            if style.is_empty() {
                buf.push_str("<div>");
            } else {
                buf.push_str(&format!("<div style=\"{}\">", escape(&style.to_css())));
            }
            for child in children {
                render_into(child, buf);
            }
            buf.push_str("</div>");
        }
        Component::H3 { children } => {
            buf.push_str(&format!("<h3>{}</h3>", escape(children)));
        }
        Component::Br => buf.push_str("<br>"),
        Component::Markdown { source } => {
            buf.push_str("<div class=\"markdown\">");
            render_markdown(&dedent(source), buf);
            buf.push_str("</div>");
        }
    }
}

/// CommonMark to HTML. Raw HTML in the source is shown as text, not injected.
fn render_markdown(text: &str, buf: &mut String) {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let events = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    html::push_html(buf, events);
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Style;

    // ===== render_html tests =====

    #[test]
    fn render_html_nests_in_order() {
        let tree = Component::div(vec![
            Component::h3("Heading"),
            Component::br(),
            Component::markdown("body"),
        ]);

        assert_eq!(
            render_html(&tree),
            "<div><h3>Heading</h3><br><div class=\"markdown\"><p>body</p>\n</div></div>"
        );
    }

    #[test]
    fn render_html_emits_inline_style() {
        let tree = Component::styled_div(vec![], Style::new().with("backgroundColor", "white"));
        assert_eq!(
            render_html(&tree),
            "<div style=\"background-color: white\"></div>"
        );
    }

    #[test]
    fn render_html_escapes_text() {
        let tree = Component::h3("<script>alert(\"x\") & 'y'</script>");
        assert_eq!(
            render_html(&tree),
            "<h3>&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;</h3>"
        );
    }

    #[test]
    fn markdown_splits_paragraphs_on_blank_lines() {
        let tree = Component::markdown(
            "
            first line
            continues

            second
            ",
        );

        assert_eq!(
            render_html(&tree),
            "<div class=\"markdown\"><p>first line\ncontinues</p>\n<p>second</p>\n</div>"
        );
    }

    #[test]
    fn markdown_formats_inline_emphasis_and_links() {
        let html = render_html(&Component::markdown("Some *text* and [a link](http://x)"));

        assert!(html.contains("<p>Some <em>text</em> and <a href=\"http://x\">a link</a></p>"));
    }

    #[test]
    fn markdown_formats_headings() {
        let html = render_html(&Component::markdown("intro\n\n# Title"));

        assert!(html.contains("<h1>Title</h1>"));
        assert!(!html.contains("# Title"));
    }

    #[test]
    fn markdown_escapes_raw_html() {
        let html = render_html(&Component::markdown("before <script>x</script> after"));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_markdown_renders_empty_block() {
        assert_eq!(
            render_html(&Component::markdown("  \n ")),
            "<div class=\"markdown\"></div>"
        );
    }

    // ===== render_document tests =====

    #[test]
    fn render_document_wraps_tree() {
        let doc = render_document("A & B", &Component::br());

        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>A &amp; B</title>"));
        assert!(doc.contains("<div id=\"react-entry-point\"><br></div>"));
    }
}
