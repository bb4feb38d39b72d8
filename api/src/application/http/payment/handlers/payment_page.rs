use axum::{extract::State, response::Html};
use menubot_core::domain::payment::ports::PaymentService;
use qrcode::{QrCode, render::svg};

use crate::application::http::{
    html::{escape_html, page},
    server::{api_entities::api_error::ApiError, app_state::AppState},
};

const SCRIPT: &str = r#"
const root = document.getElementById("payment").dataset.root;
document.getElementById("check").onsubmit = async (event) => {
  event.preventDefault();
  const form = new FormData(event.target);
  const response = await fetch(`${root}/check_transaction`, {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify({ tx_hash: form.get("tx_hash"), amount: form.get("amount") }),
  });
  const body = await response.json();
  document.getElementById("result").textContent = body.message;
};
"#;

pub fn render_qr_svg(data: &str) -> Result<String, ApiError> {
    let code = QrCode::new(data.as_bytes())
        .map_err(|e| ApiError::InternalServerError(format!("Failed to build QR code: {}", e)))?;

    Ok(code
        .render::<svg::Color>()
        .min_dimensions(240, 240)
        .build())
}

#[utoipa::path(
    get,
    path = "/payment",
    tag = "payment",
    summary = "Payment page",
    description = "HTML page with a QR code of the receiving wallet and a form to check a transaction.",
    responses(
        (status = 200, content_type = "text/html", body = String)
    )
)]
pub async fn payment_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let uri = state.service.payment_uri()?;
    let qr = render_qr_svg(&uri)?;

    let body = format!(
        r#"<main id="payment" data-root="{root}">
<h1>Pay with Ether</h1>
<figure>{qr}<figcaption><code>{uri}</code></figcaption></figure>
<form id="check">
<label>Transaction hash <input name="tx_hash" required></label>
<label>Amount (ETH) <input name="amount" required></label>
<button class="button" type="submit">Check payment</button>
</form>
<p id="result"></p>
</main>"#,
        root = escape_html(&state.args.server.root_path),
        uri = escape_html(&uri),
    );

    Ok(Html(page("Payment", &body, SCRIPT)))
}
