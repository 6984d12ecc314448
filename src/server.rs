//! The single-page web UI: one form, one submit action, up to three
//! predicted labels with proportional probability bars.
//!
//! Select options are populated from the model's trained domains, so the
//! form can only offer values the model knows about. A hand-crafted POST
//! can still carry anything, which is why the predictor re-validates.

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use log::warn;
use serde::Deserialize;

use crate::predictor::{InputRecord, Prediction, Predictor};
use crate::store::ModelStore;

/// Shared predictor handle for axum handlers.
pub type SharedPredictor = Arc<Predictor>;

/// Builds the application router. Public so tests can drive it with
/// `tower::ServiceExt::oneshot` without binding a socket.
pub fn app(predictor: SharedPredictor) -> Router {
    Router::new()
        .route("/", get(show_form))
        .route("/predict", post(handle_predict))
        .with_state(predictor)
}

/// The urlencoded form body, field names matching the rendered inputs.
#[derive(Debug, Deserialize)]
pub struct PredictForm {
    pub budget: f64,
    pub zip_code: String,
    pub age_range: String,
    pub income_level: String,
    pub gender: String,
}

async fn show_form(State(predictor): State<SharedPredictor>) -> Html<String> {
    Html(render_page(predictor.store(), None, None))
}

async fn handle_predict(
    State(predictor): State<SharedPredictor>,
    Form(form): Form<PredictForm>,
) -> Response {
    let record = InputRecord {
        age_range: form.age_range,
        income_level: form.income_level,
        gender: form.gender,
        zip_code: form.zip_code,
        budget: form.budget,
    };

    match predictor.predict(&record) {
        Ok(prediction) => {
            Html(render_page(predictor.store(), Some(&prediction), None)).into_response()
        }
        Err(e) => {
            warn!("prediction rejected: {}", e);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(render_page(predictor.store(), None, Some(&e.to_string()))),
            )
                .into_response()
        }
    }
}

fn render_page(store: &ModelStore, prediction: Option<&Prediction>, error: Option<&str>) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Vehicle Model Prediction</title>\n<style>\n\
         body { font-family: sans-serif; max-width: 640px; margin: 30px auto; }\n\
         h1 { color: #0073C2; text-align: center; }\n\
         label { display: block; margin-top: 12px; font-weight: bold; }\n\
         input, select { width: 100%; padding: 6px; margin-top: 4px; }\n\
         button { margin-top: 16px; padding: 8px 24px; }\n\
         .error { background: #fdecea; color: #c62828; padding: 10px; border-radius: 4px; }\n\
         .track { background: #eee; border-radius: 4px; margin: 6px 0 14px; }\n\
         .bar { height: 30px; line-height: 30px; color: white; font-weight: bold;\n\
                padding-left: 8px; border-radius: 4px; white-space: nowrap; }\n\
         .bar.high { background: #2e7d32; }\n\
         .bar.medium { background: #f9a825; }\n\
         .bar.low { background: #c62828; }\n\
         .footnote { color: #7f8c8d; }\n\
         </style>\n</head>\n<body>\n<h1>Vehicle Model Prediction</h1>\n",
    );

    if let Some(msg) = error {
        html.push_str(&format!(
            "<p class=\"error\">Prediction failed: {}</p>\n",
            escape(msg)
        ));
    }

    render_form(store, &mut html);

    if let Some(prediction) = prediction {
        render_results(prediction, &mut html);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_form(store: &ModelStore, html: &mut String) {
    let domains = store.domains();
    let (min, max) = store.budget_range();
    let default_budget = 25_000.0_f64.clamp(min, max);

    html.push_str("<form method=\"post\" action=\"/predict\">\n<h2>Input Customer Details</h2>\n");
    html.push_str(&format!(
        "<label for=\"budget\">Customer Budget:</label>\n\
         <input type=\"number\" id=\"budget\" name=\"budget\" \
         min=\"{}\" max=\"{}\" step=\"1000\" value=\"{}\" required>\n",
        min, max, default_budget
    ));
    render_select(html, "ZIP Code:", "zip_code", &domains.zip_codes);
    render_select(html, "Age Range:", "age_range", &domains.age_ranges);
    render_select(html, "Income Level:", "income_level", &domains.income_levels);
    render_select(html, "Gender:", "gender", &domains.genders);
    html.push_str("<button type=\"submit\">Predict Model</button>\n</form>\n");
}

fn render_select(html: &mut String, label: &str, name: &str, options: &[String]) {
    html.push_str(&format!(
        "<label for=\"{name}\">{label}</label>\n<select id=\"{name}\" name=\"{name}\">\n"
    ));
    for option in options {
        let escaped = escape(option);
        html.push_str(&format!(
            "<option value=\"{escaped}\">{escaped}</option>\n"
        ));
    }
    html.push_str("</select>\n");
}

fn render_results(prediction: &Prediction, html: &mut String) {
    html.push_str("<h2>Top 3 Predicted Vehicle Models</h2>\n");
    for entry in prediction.entries() {
        let pct = entry.percentage();
        html.push_str(&format!(
            "<h4>{}</h4>\n<div class=\"track\">\
             <div class=\"bar {}\" style=\"width: {:.1}%\">{:.1}%</div></div>\n",
            escape(&entry.label),
            entry.band(),
            pct,
            pct
        ));
    }
    html.push_str(
        "<hr>\n<p class=\"footnote\">These predictions are based on customer \
         demographics and preferences.</p>\n",
    );
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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
    use crate::store::CategoryDomains;

    fn test_store() -> ModelStore {
        let domains = CategoryDomains {
            age_ranges: vec!["25–34".into()],
            income_levels: vec!["Under $50,000".into()],
            genders: vec!["Female".into()],
            zip_codes: vec!["12345".into()],
        };
        ModelStore::new(
            "test",
            vec!["Sedan LX".into(), "SUV Max".into()],
            domains,
            (5_000.0, 100_000.0),
            vec![vec![0.0; 5]; 2],
            vec![0.0; 2],
        )
        .unwrap()
    }

    #[test]
    fn escape_covers_html_metacharacters() {
        assert_eq!(escape("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
        assert_eq!(escape("Under $50,000"), "Under $50,000");
    }

    #[test]
    fn form_offers_every_domain_value() {
        let page = render_page(&test_store(), None, None);
        assert!(page.contains("25–34"));
        assert!(page.contains("Under $50,000"));
        assert!(page.contains("Female"));
        assert!(page.contains("12345"));
        assert!(page.contains("min=\"5000\""));
        assert!(page.contains("max=\"100000\""));
    }

    #[test]
    fn error_banner_is_escaped() {
        let page = render_page(&test_store(), None, Some("bad <script> input"));
        assert!(page.contains("Prediction failed: bad &lt;script&gt; input"));
        assert!(!page.contains("bad <script>"));
    }
}
