//! Order-admin field for entering the tracking code.

use crate::model::OrderId;
use crate::templates::{Templates, METABOX};
use minijinja::context;

/// Which affordance the field shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaboxMode {
    Add,
    Edit,
}

impl MetaboxMode {
    pub fn label(self) -> &'static str {
        match self {
            MetaboxMode::Add => "Add tracking code",
            MetaboxMode::Edit => "Edit tracking code",
        }
    }

    /// Dashicons class of the submit button.
    pub fn icon(self) -> &'static str {
        match self {
            MetaboxMode::Add => "dashicons-plus",
            MetaboxMode::Edit => "dashicons-edit",
        }
    }
}

/// Everything the metabox shows for one order.
#[derive(Debug, Clone, PartialEq)]
pub struct MetaboxView {
    pub order_id: OrderId,
    pub mode: MetaboxMode,
    pub value: String,
    pub nonce: String,
}

impl MetaboxView {
    pub fn new(order_id: OrderId, code: Option<&str>, nonce: String) -> Self {
        let (mode, value) = match code.filter(|c| !c.is_empty()) {
            Some(code) => (MetaboxMode::Edit, code.to_string()),
            None => (MetaboxMode::Add, String::new()),
        };
        Self {
            order_id,
            mode,
            value,
            nonce,
        }
    }

    pub fn render(&self, templates: &Templates) -> Result<String, minijinja::Error> {
        templates.render(
            METABOX,
            context! {
                order_id => self.order_id.0,
                nonce => &self.nonce,
                label => self.mode.label(),
                icon => self.mode.icon(),
                value => &self.value,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_code_offers_add() {
        let view = MetaboxView::new(OrderId(3), None, "abc".into());
        assert_eq!(view.mode, MetaboxMode::Add);

        let html = view.render(&Templates::new().unwrap()).unwrap();
        assert!(html.contains("Add tracking code"));
        assert!(html.contains("dashicons-plus"));
        assert!(html.contains(r#"value="""#));
        assert!(html.contains("var jadlog_order_id = 3;"));
        assert!(html.contains(r#"var jadlog_security_nonce = "abc";"#));
    }

    #[test]
    fn with_code_offers_edit() {
        let view = MetaboxView::new(OrderId(3), Some("JD3"), "abc".into());
        let html = view.render(&Templates::new().unwrap()).unwrap();
        assert!(html.contains("Edit tracking code"));
        assert!(html.contains("dashicons-edit"));
        assert!(html.contains(r#"value="JD3""#));
    }

    #[test]
    fn stored_markup_is_escaped() {
        let view = MetaboxView::new(OrderId(3), Some(r#""><script>x</script>"#), "n".into());
        let html = view.render(&Templates::new().unwrap()).unwrap();
        assert!(!html.contains("<script>x"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }
}
