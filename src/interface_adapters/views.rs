//! Server-rendered HTML for the guest and admin pages.
//!
//! Pages are plain strings: every interpolated value goes through
//! [`escape_html`], and data handed to the page script is embedded with
//! [`script_json`].

use serde::Serialize;
use std::fmt::Write;

use crate::domain::defaults::AVAILABLE_EMOJIS;
use crate::domain::entities::{Catalog, Category, OrderBook};
use crate::domain::i18n::{Locale, Translations};

// Slice counts offered to guests.
const CUTTING_OPTIONS: [u32; 4] = [4, 6, 8, 12];

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
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

// JSON safe to place inside a <script> element.
pub fn script_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

struct PageText<'a> {
    translations: &'a Translations,
    locale: Locale,
}

impl PageText<'_> {
    fn get(&self, key: &str) -> String {
        escape_html(&self.translations.text(self.locale, key))
    }

    fn category(&self, category: Category) -> String {
        escape_html(&self.translations.category_label(self.locale, category))
    }
}

fn page_shell(locale: Locale, title: &str, body: &str, script: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ font-family: system-ui, sans-serif; max-width: 48rem; margin: 0 auto; padding: 1rem; }}
fieldset {{ margin-bottom: 1rem; border-radius: 0.5rem; }}
label {{ display: inline-block; margin: 0.2rem 0.6rem 0.2rem 0; }}
table {{ width: 100%; border-collapse: collapse; }}
td, th {{ border-bottom: 1px solid #ddd; padding: 0.3rem; text-align: left; }}
tr.done {{ opacity: 0.5; }}
.disabled {{ color: #999; text-decoration: line-through; }}
#status {{ min-height: 1.5rem; font-weight: bold; }}
</style>
</head>
<body>
<h1>🍕 {title}</h1>
<nav><a href="?lang=en">EN</a> | <a href="?lang=sk">SK</a></nav>
{body}
<script>
{script}
</script>
</body>
</html>
"#,
        lang = locale.tag(),
        title = title,
        body = body,
        script = script,
    )
}

/// Guest page: enabled ingredients only, an order form and the order script.
pub fn render_party_page(
    token: &str,
    locale: Locale,
    catalog: &Catalog,
    translations: &Translations,
) -> String {
    let text = PageText {
        translations,
        locale,
    };
    let mut body = String::new();

    let _ = write!(
        body,
        r#"<form id="order-form">
<p><label>{your_name} <input id="guest-name" name="name" required maxlength="64"></label>
<button type="button" id="load-order">{load_order}</button></p>
"#,
        your_name = text.get("your_name"),
        load_order = text.get("load_order"),
    );

    for (category, items) in catalog.iter() {
        if items.is_empty() {
            continue;
        }
        // One base per pizza; every other category is free choice.
        let input_type = if category == Category::Bases {
            "radio"
        } else {
            "checkbox"
        };
        let _ = writeln!(
            body,
            r#"<fieldset data-category="{category}"><legend>{label}</legend>"#,
            label = text.category(category),
        );
        for item in items {
            let _ = writeln!(
                body,
                r#"<label><input type="{input_type}" name="{category}" value="{id}"> {emoji} {name}</label>"#,
                id = escape_html(&item.id),
                emoji = escape_html(&item.emoji),
                name = escape_html(locale.ingredient_name(item)),
            );
        }
        body.push_str("</fieldset>\n");
    }

    let _ = write!(
        body,
        r#"<p><label>{cutting} <select id="cutting">"#,
        cutting = text.get("cutting")
    );
    for option in CUTTING_OPTIONS {
        let selected = if option == 8 { " selected" } else { "" };
        let _ = write!(body, r#"<option value="{option}"{selected}>{option}</option>"#);
    }
    let _ = write!(
        body,
        r#"</select></label></p>
<button type="submit">{save_order}</button>
</form>
<p id="status"></p>
"#,
        save_order = text.get("save_order"),
    );

    let script = format!(
        r#"const TOKEN = {token};
const form = document.getElementById("order-form");
const statusLine = document.getElementById("status");
const nameInput = document.getElementById("guest-name");

function collect() {{
  const ingredients = {{}};
  form.querySelectorAll("fieldset[data-category]").forEach((set) => {{
    const category = set.dataset.category;
    const picked = [...set.querySelectorAll("input:checked")].map((el) => el.value);
    if (picked.length === 0) return;
    ingredients[category] = set.querySelector("input[type=radio]") ? picked[0] : picked;
  }});
  return ingredients;
}}

function apply(order) {{
  form.querySelectorAll("fieldset[data-category] input").forEach((el) => {{ el.checked = false; }});
  if (!order) return;
  for (const [category, selection] of Object.entries(order.ingredients || {{}})) {{
    const ids = Array.isArray(selection) ? selection : [selection];
    ids.forEach((id) => {{
      const el = form.querySelector(`input[name="${{category}}"][value="${{CSS.escape(id)}}"]`);
      if (el) el.checked = true;
    }});
  }}
  if (order.cutting) document.getElementById("cutting").value = String(order.cutting);
}}

document.getElementById("load-order").addEventListener("click", async () => {{
  const name = nameInput.value.trim();
  if (!name) return;
  const res = await fetch(`/api/order/${{TOKEN}}?name=${{encodeURIComponent(name)}}`);
  const data = await res.json();
  apply(data.order);
  statusLine.textContent = data.order ? "✓" : "";
}});

form.addEventListener("submit", async (event) => {{
  event.preventDefault();
  const res = await fetch(`/api/order/${{TOKEN}}`, {{
    method: "POST",
    headers: {{ "Content-Type": "application/json" }},
    body: JSON.stringify({{
      name: nameInput.value,
      ingredients: collect(),
      cutting: Number(document.getElementById("cutting").value),
    }}),
  }});
  const data = await res.json();
  statusLine.textContent = data.message || data.error;
}});
"#,
        token = script_json(&token),
    );

    page_shell(locale, &text.get("party_title"), &body, &script)
}

/// Admin page: every order and the full catalog with edit controls.
pub fn render_admin_page(
    token: &str,
    locale: Locale,
    orders: &OrderBook,
    catalog: &Catalog,
    translations: &Translations,
) -> String {
    let text = PageText {
        translations,
        locale,
    };
    let mut body = String::new();

    let _ = writeln!(body, "<h2>{} ({})</h2>", text.get("orders"), orders.len());
    if orders.is_empty() {
        let _ = writeln!(body, "<p>{}</p>", text.get("no_orders"));
    } else {
        body.push_str("<table>\n");
        for (key, order) in orders.iter() {
            let mut picks = Vec::new();
            for (category, selection) in &order.ingredients {
                let names: Vec<String> = selection
                    .ids()
                    .into_iter()
                    .map(|id| match catalog.find(*category, id) {
                        Some(item) => format!("{} {}", item.emoji, locale.ingredient_name(item)),
                        None => id.to_string(),
                    })
                    .collect();
                picks.push(format!(
                    "<b>{}:</b> {}",
                    text.category(*category),
                    escape_html(&names.join(", "))
                ));
            }
            let cutting = order
                .cutting
                .map(|slices| format!("🔪 {slices}"))
                .unwrap_or_default();
            let _ = writeln!(
                body,
                r#"<tr class="{row_class}"><td>{name}</td><td>{picks}</td><td>{cutting}</td><td><label><input type="checkbox" data-done="{key}"{checked}> {done}</label></td><td><button data-delete-order="{key}">{delete}</button></td></tr>"#,
                row_class = if order.done { "done" } else { "" },
                name = escape_html(&order.display_name),
                picks = picks.join("<br>"),
                key = escape_html(key),
                checked = if order.done { " checked" } else { "" },
                done = text.get("done"),
                delete = text.get("delete"),
            );
        }
        body.push_str("</table>\n");
    }

    let _ = writeln!(body, "<h2>{}</h2>", text.get("ingredients"));
    for (category, items) in catalog.iter() {
        let _ = writeln!(
            body,
            r#"<fieldset><legend>{label}</legend><ul>"#,
            label = text.category(category),
        );
        for item in items {
            let _ = writeln!(
                body,
                r#"<li class="{class}">{emoji} {name_en} / {name_sk} <label><input type="checkbox" data-toggle="{category}/{id}"{checked}> {enabled}</label> <button data-delete-ingredient="{category}/{id}">{delete}</button></li>"#,
                class = if item.enabled { "" } else { "disabled" },
                emoji = escape_html(&item.emoji),
                name_en = escape_html(&item.name_en),
                name_sk = escape_html(&item.name_sk),
                id = escape_html(&item.id),
                checked = if item.enabled { " checked" } else { "" },
                enabled = text.get("enabled"),
                delete = text.get("delete"),
            );
        }
        body.push_str("</ul></fieldset>\n");
    }

    let _ = write!(
        body,
        r#"<h2>{add}</h2>
<form id="add-ingredient">
<select name="category">"#,
        add = text.get("add_ingredient"),
    );
    for category in Category::ALL {
        let _ = write!(
            body,
            r#"<option value="{category}">{label}</option>"#,
            label = text.category(category),
        );
    }
    body.push_str(r#"</select> <select name="emoji">"#);
    for emoji in AVAILABLE_EMOJIS {
        let _ = write!(body, r#"<option>{}</option>"#, escape_html(emoji));
    }
    let _ = write!(
        body,
        r#"</select>
<input name="name_en" placeholder="{name_en}" required>
<input name="name_sk" placeholder="{name_sk}">
<button type="submit">{add}</button>
</form>
<p id="status"></p>
"#,
        name_en = text.get("name_en"),
        name_sk = text.get("name_sk"),
        add = text.get("add_ingredient"),
    );

    let script = format!(
        r#"const TOKEN = {token};
const statusLine = document.getElementById("status");

async function call(method, path, body) {{
  const res = await fetch(`/api/${{path}}`, {{
    method,
    headers: {{ "Content-Type": "application/json" }},
    body: body === undefined ? undefined : JSON.stringify(body),
  }});
  const data = await res.json();
  if (!res.ok) {{
    statusLine.textContent = data.error || res.statusText;
    return;
  }}
  location.reload();
}}

document.querySelectorAll("[data-done]").forEach((el) => el.addEventListener("change", () =>
  call("PUT", `order/${{TOKEN}}/${{encodeURIComponent(el.dataset.done)}}/done`, {{ done: el.checked }})));
document.querySelectorAll("[data-delete-order]").forEach((el) => el.addEventListener("click", () =>
  call("DELETE", `order/${{TOKEN}}/${{encodeURIComponent(el.dataset.deleteOrder)}}`)));
document.querySelectorAll("[data-toggle]").forEach((el) => el.addEventListener("change", () =>
  call("PUT", `ingredients/${{TOKEN}}/${{el.dataset.toggle}}`, {{ enabled: el.checked }})));
document.querySelectorAll("[data-delete-ingredient]").forEach((el) => el.addEventListener("click", () =>
  call("DELETE", `ingredients/${{TOKEN}}/${{el.dataset.deleteIngredient}}`)));

document.getElementById("add-ingredient").addEventListener("submit", (event) => {{
  event.preventDefault();
  const data = new FormData(event.target);
  call("POST", `ingredients/${{TOKEN}}/${{data.get("category")}}`, {{
    name_en: data.get("name_en"),
    name_sk: data.get("name_sk"),
    emoji: data.get("emoji"),
  }});
}});
"#,
        token = script_json(&token),
    );

    page_shell(locale, &text.get("admin_title"), &body, &script)
}
