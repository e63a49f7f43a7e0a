use axum::response::Html;

static DEMO_PAGE: &str = include_str!("../../assets/demo.html");

/// `GET /demo` — self-contained demo page; its embedded script calls
/// `POST /predict` and renders the result color-coded by label.
pub async fn page() -> Html<&'static str> {
    Html(DEMO_PAGE)
}
