//! # Markup Templates
//!
//! Every fragment this crate emits is rendered through one [`minijinja`]
//! environment. Templates named `*.html` are HTML-escaped automatically, so
//! stored values (tracking codes in particular) are never interpolated raw.
//! `*.txt` templates are left unescaped.

use minijinja::{AutoEscape, Environment, Value};

pub const METABOX: &str = "metabox.html";
pub const CUSTOMER_TRACKING: &str = "customer_tracking.html";
pub const EMAIL_HTML: &str = "email/tracking.html";
pub const EMAIL_PLAIN: &str = "email/tracking.txt";

const METABOX_SOURCE: &str = r#"<script type="text/javascript">
	var jadlog_order_id = {{ order_id }};
	var jadlog_security_nonce = "{{ nonce }}";
</script>
<div class="jadlog-tracking-code">
	<fieldset>
		<label for="add-jadlog-code">{{ label }}</label>
		<input type="text" id="add-jadlog-code" name="jadlog_tracking" value="{{ value }}" />
		<button type="button" class="button-secondary {{ icon }}" aria-label="{{ label }}"></button>
	</fieldset>
</div>
"#;

const CUSTOMER_TRACKING_SOURCE: &str = r#"<h2 id="{{ anchor }}" class="wc-jadlog-tracking__title">Jadlog delivery tracking</h2>
<p class="wc-jadlog-tracking__description">Tracking code:</p>
<table class="wc-jadlog-tracking__table woocommerce-table shop_table shop_table_responsive">
	<tbody>
		<tr>
			<th>{{ code }}</th>
			<td>
				<form method="POST" target="_blank" rel="nofollow noopener noreferrer" action="{{ carrier_url }}" class="wc-jadlog-tracking__form">
					<input type="hidden" name="cte" value="{{ code }}">
					<button class="wc-jadlog-tracking__button button">Query on Jadlog</button>
				</form>
			</td>
		</tr>
	</tbody>
</table>
"#;

// The message is already markup (it carries the escaped tracking link).
const EMAIL_HTML_SOURCE: &str = r#"<h1>{{ heading }}</h1>
{{ message | safe }}
"#;

const EMAIL_PLAIN_SOURCE: &str = "= {{ heading }} =\n\n{{ message }}\n";

/// Compiled template set, built once and shared.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|name| {
            if name.ends_with(".html") {
                AutoEscape::Html
            } else {
                AutoEscape::None
            }
        });
        env.add_template(METABOX, METABOX_SOURCE)?;
        env.add_template(CUSTOMER_TRACKING, CUSTOMER_TRACKING_SOURCE)?;
        env.add_template(EMAIL_HTML, EMAIL_HTML_SOURCE)?;
        env.add_template(EMAIL_PLAIN, EMAIL_PLAIN_SOURCE)?;
        Ok(Self { env })
    }

    pub fn render(&self, name: &str, ctx: Value) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}
