//! Map page and browser client script.

use axum::{
    http::header,
    response::{Html, IntoResponse},
};

const INDEX_HTML: &str = include_str!("../../../static/index.html");
const SCRIPT_JS: &str = include_str!("../../../static/js/script.js");

/// Map page at `/`
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Browser client at `/js/script.js`
pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
}
