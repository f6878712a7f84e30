//! Item list, item form and error pages

use axum::http::StatusCode;

use super::{attr, layout, text, PageContext};
use crate::models::Item;

/// Item table, or an empty-state message.
pub fn index_page(page: &PageContext<'_>, items: &[Item]) -> String {
    if items.is_empty() {
        return layout(
            page,
            r#"<p class="muted">No items yet. Create your first one.</p>"#,
        );
    }

    let rows: String = items.iter().map(item_row).collect();
    let content = format!(
        r#"<table>
  <thead>
    <tr><th style="width:70px">ID</th><th>Name</th><th>Description</th><th style="width:120px">Price</th><th style="width:200px">Actions</th></tr>
  </thead>
  <tbody>
{rows}  </tbody>
</table>"#
    );
    layout(page, &content)
}

fn item_row(item: &Item) -> String {
    format!(
        r#"    <tr>
      <td>{id}</td>
      <td>{name}</td>
      <td class="muted">{description}</td>
      <td>{price}</td>
      <td>
        <a class="button secondary" href="/item/{id}/edit">Edit</a>
        <form class="inline" method="post" action="/item/{id}/delete" onsubmit="return confirm('Delete this item?');">
          <button class="button danger" type="submit">Delete</button>
        </form>
      </td>
    </tr>
"#,
        id = item.id,
        name = text(&item.name),
        description = text(item.description.as_deref().unwrap_or_default()),
        price = item.price_display(),
    )
}

/// Create form when `item` is `None`, edit form otherwise. Posts back to the
/// current URL.
pub fn form_page(page: &PageContext<'_>, item: Option<&Item>) -> String {
    let name = item.map(|i| i.name.as_str()).unwrap_or_default();
    let description = item
        .and_then(|i| i.description.as_deref())
        .unwrap_or_default();
    let price = item.map(Item::price_display).unwrap_or_default();

    let content = format!(
        r#"<form method="post">
  <div class="field">
    <label for="name">Name *</label>
    <input class="input" id="name" name="name" value="{name}" required>
  </div>
  <div class="field">
    <label for="description">Description</label>
    <textarea class="input" id="description" name="description" rows="3">{description}</textarea>
  </div>
  <div class="field">
    <label for="price">Price</label>
    <input class="input" id="price" name="price" type="number" step="0.01" min="0" value="{price}">
  </div>
  <div class="actions">
    <button class="button" type="submit">Save</button>
    <a class="button secondary" href="/">Cancel</a>
  </div>
</form>"#,
        name = attr(name),
        description = text(description),
        price = attr(&price),
    );
    layout(page, &content)
}

/// Standalone page for failed reads.
pub fn error_page(status: StatusCode, message: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>{status}</title></head>
<body>
  <h1>{status}</h1>
  <p>{message}</p>
  <p><a href="/">Back to items</a></p>
</body>
</html>
"#,
        status = status,
        message = text(message),
    )
}
