use axum::{extract::State, response::Html};
use menubot_core::domain::menu::ports::MenuService;

use crate::application::http::{
    html::{escape_html, page},
    server::{api_entities::api_error::ApiError, app_state::AppState},
};

const SCRIPT: &str = r#"
const root = document.getElementById("shop").dataset.root;
async function showCategory(name) {
  const response = await fetch(`${root}/category/${encodeURIComponent(name)}`);
  const body = await response.json();
  const list = document.getElementById("items");
  list.innerHTML = "";
  document.getElementById("category").textContent = name;
  for (const item of body.data) {
    const li = document.createElement("li");
    li.textContent = `${item.item}: $${item.price.toFixed(2)} `;
    const add = document.createElement("button");
    add.className = "button";
    add.textContent = "Add to cart";
    add.onclick = () => addToCart(item);
    li.appendChild(add);
    list.appendChild(li);
  }
}
async function addToCart(item) {
  const response = await fetch(`${root}/add_to_cart`, {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify({ name: item.item, price: item.price.toFixed(2), quantity: 1 }),
  });
  const cart = await response.json();
  document.getElementById("total").textContent = `Cart: ${cart.item_count} item(s), $${cart.total}`;
}
document.querySelectorAll("[data-category]").forEach((button) => {
  button.onclick = () => showCategory(button.dataset.category);
});
"#;

#[utoipa::path(
    get,
    path = "/",
    tag = "menu",
    summary = "Shop front page",
    description = "HTML page with one button per menu category.",
    responses(
        (status = 200, content_type = "text/html", body = String)
    )
)]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let categories = state.service.get_categories().await?;

    let buttons: String = categories
        .iter()
        .map(|category| {
            let category = escape_html(category);
            format!(r#"<button class="button" data-category="{category}">{category}</button>"#)
        })
        .collect();

    let body = format!(
        r#"<main id="shop" data-root="{root}">
<h1>Menu</h1>
<nav>{buttons}</nav>
<h2 id="category"></h2>
<ul id="items"></ul>
<p id="total"></p>
</main>"#,
        root = escape_html(&state.args.server.root_path),
    );

    Ok(Html(page("Menu", &body, SCRIPT)))
}
