//! Server-rendered pages. Everything taken from an item is escaped.

use crate::inventory::InventoryItem;
use std::fmt::Write;

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <script src="/static/script.js" defer></script>
</head>
<body>
  <nav><a href="/">Home</a> | <a href="/inventory">Inventory</a> | <a href="/add-item">Add item</a></nav>
  <h1>{title}</h1>
{body}
</body>
</html>
"#,
        title = escape_html(title),
    )
}

pub fn home_page() -> String {
    layout(
        "Inventory Service",
        "  <p>Track stock levels for every item.</p>\n  <p><a href=\"/inventory\">View the inventory</a></p>",
    )
}

pub fn inventory_page(items: &[InventoryItem]) -> String {
    let mut rows = String::new();
    for item in items {
        let id = escape_html(&item.id);
        // Writing to a String cannot fail.
        let _ = write!(
            rows,
            r#"    <tr id="item-{id}" data-id="{id}">
      <td>{id}</td>
      <td id="name-{id}">{name}</td>
      <td id="description-{id}">{description}</td>
      <td id="quantity-{id}">{quantity}</td>
      <td><button class="edit">Edit</button> <button class="delete">Delete</button></td>
    </tr>
"#,
            name = escape_html(&item.name),
            description = escape_html(&item.description),
            quantity = item.quantity,
        );
    }

    let body = if items.is_empty() {
        "  <p>No items yet.</p>".to_string()
    } else {
        format!(
            r#"  <table id="inventory">
    <tr><th>ID</th><th>Name</th><th>Description</th><th>Quantity</th><th></th></tr>
{rows}  </table>"#
        )
    };

    layout("Inventory List", &body)
}

pub fn add_item_page() -> String {
    layout(
        "Add New Inventory Item",
        r#"  <form id="addItemForm">
    <label>ID <input id="id" name="id" required></label>
    <label>Name <input id="name" name="name" required></label>
    <label>Description <input id="description" name="description" required></label>
    <label>Quantity <input id="quantity" name="quantity" type="number" required></label>
    <button type="submit">Add</button>
  </form>"#,
    )
}
