//! Chlorophylle x GDMP page.

use std::sync::Arc;

use crate::app::DashApp;
use crate::layout::{Component, Style};

pub const TITLE: &str = "Chlorophylle x GDMP";

const PLACEHOLDER: &str = "
            Lorem Ipsum blablabla
            ";

/// Name of the host a standalone page creates for itself
const STANDALONE_APP_NAME: &str = "chloro";

pub struct Chloro {
    app: Arc<DashApp>,
    main_layout: Component,
}

impl Chloro {
    /// Build the page. With `application`, the host is kept as given and is
    /// expected to place `main_layout()` itself; without one, a standalone
    /// host is created with this page as its whole layout.
    pub fn new(application: Option<Arc<DashApp>>) -> Self {
        let main_layout = Self::build_layout();

        let app = match application {
            Some(app) => {
                tracing::debug!(app = %app.name(), "Chloro page attached to existing app");
                app
            }
            None => {
                let app = DashApp::new(STANDALONE_APP_NAME);
                app.set_layout(main_layout.clone());
                tracing::debug!("Chloro page created standalone app");
                Arc::new(app)
            }
        };

        Self { app, main_layout }
    }

    pub fn build_layout() -> Component {
        Component::styled_div(
            vec![
                Component::h3(TITLE),
                Component::br(),
                Component::markdown(PLACEHOLDER),
            ],
            Style::new()
                .with("backgroundColor", "white")
                .with("padding", "10px 50px 10px 50px"),
        )
    }

    pub fn app(&self) -> &Arc<DashApp> {
        &self.app
    }

    pub fn main_layout(&self) -> &Component {
        &self.main_layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::render_html;

    #[test]
    fn standalone_app_uses_page_as_layout() {
        let page = Chloro::new(None);

        assert_eq!(page.app().name(), "chloro");
        assert_eq!(page.app().layout().as_ref(), Some(page.main_layout()));
    }

    #[test]
    fn standalone_apps_are_fresh_per_page() {
        let a = Chloro::new(None);
        let b = Chloro::new(None);

        assert!(!Arc::ptr_eq(a.app(), b.app()));
    }

    #[test]
    fn supplied_app_is_kept_and_left_untouched() {
        let host = Arc::new(DashApp::new("host"));
        let existing = Component::h3("Host home");
        host.set_layout(existing.clone());

        let page = Chloro::new(Some(Arc::clone(&host)));

        assert!(Arc::ptr_eq(page.app(), &host));
        assert_eq!(host.layout(), Some(existing));
        assert!(host.page_paths().is_empty());
    }

    #[test]
    fn host_can_embed_page_layout() {
        let host = Arc::new(DashApp::new("host"));
        let page = Chloro::new(Some(Arc::clone(&host)));

        host.add_page("/chloro", page.main_layout().clone()).unwrap();

        assert_eq!(host.page("/chloro").as_ref(), Some(page.main_layout()));
    }

    #[test]
    fn supplied_app_without_layout_stays_without_layout() {
        let host = Arc::new(DashApp::new("host"));

        let page = Chloro::new(Some(Arc::clone(&host)));

        assert!(page.app().layout().is_none());
    }

    #[test]
    fn layout_is_heading_break_and_text_in_container() {
        let layout = Chloro::build_layout();

        let Component::Div { children, style } = &layout else {
            panic!("expected a Div container, got {}", layout.kind());
        };
        assert_eq!(style.get("backgroundColor"), Some("white"));
        assert_eq!(style.get("padding"), Some("10px 50px 10px 50px"));

        let kinds: Vec<_> = children.iter().map(Component::kind).collect();
        assert_eq!(kinds, vec!["H3", "Br", "Markdown"]);
        assert_eq!(children[0], Component::h3("Chlorophylle x GDMP"));

        let Component::Markdown { source } = &children[2] else {
            panic!("expected Markdown");
        };
        assert!(source.contains("Lorem Ipsum blablabla"));
    }

    #[test]
    fn construction_is_idempotent() {
        let a = Chloro::new(None);
        let b = Chloro::new(None);

        assert_eq!(a.main_layout(), b.main_layout());

        let mut changed = a.main_layout().clone();
        if let Component::Div { children, .. } = &mut changed {
            children.push(Component::br());
        }
        assert_ne!(&changed, b.main_layout());
        assert_eq!(b.main_layout(), &Chloro::build_layout());
        assert_eq!(b.app().layout().as_ref(), Some(b.main_layout()));
    }

    #[test]
    fn layout_json_carries_dedented_placeholder() {
        let json = Chloro::build_layout().to_json();

        assert_eq!(json["props"]["children"][0]["props"]["children"], TITLE);
        assert_eq!(
            json["props"]["children"][2]["props"]["children"],
            "Lorem Ipsum blablabla"
        );
    }

    #[test]
    fn page_renders_to_html() {
        let html = render_html(Chloro::new(None).main_layout());

        assert_eq!(
            html,
            "<div style=\"background-color: white; padding: 10px 50px 10px 50px\">\
             <h3>Chlorophylle x GDMP</h3><br>\
             <div class=\"markdown\"><p>Lorem Ipsum blablabla</p>\n</div></div>"
        );
    }
}
