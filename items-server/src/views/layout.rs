//! Page chrome: head, header actions, flashes, footer

use super::{text, PageContext};

const STYLE: &str = r#"
    :root { --bg: #0f172a; --card: #111827; --muted: #94a3b8; --fg: #e5e7eb; --accent: #0ea5e9; --red: #ef4444; }
    * { box-sizing: border-box; }
    body { margin: 0; font-family: system-ui, sans-serif; background: var(--bg); color: var(--fg); }
    .container { max-width: 980px; margin: 40px auto; padding: 0 16px; }
    header { display: flex; align-items: center; justify-content: space-between; margin-bottom: 18px; }
    .card { background: var(--card); border: 1px solid rgba(255,255,255,0.06); border-radius: 16px; padding: 18px; }
    .actions { display: flex; gap: 8px; }
    a.button, button.button { border: none; background: var(--accent); color: white; padding: 8px 12px; border-radius: 10px; text-decoration: none; font-weight: 600; cursor: pointer; }
    .secondary { background: #334155 !important; }
    .danger { background: var(--red) !important; }
    table { width: 100%; border-collapse: collapse; }
    th, td { text-align: left; padding: 10px 8px; border-bottom: 1px solid rgba(255,255,255,0.06); }
    th { font-size: 13px; color: var(--muted); text-transform: uppercase; }
    .muted { color: var(--muted); }
    form.inline { display: inline; }
    .input { width: 100%; padding: 10px 12px; background: var(--bg); color: var(--fg); border: 1px solid rgba(255,255,255,0.12); border-radius: 10px; }
    .field { margin-bottom: 12px; }
    .field label { display: block; margin-bottom: 6px; color: var(--muted); }
    .flash { background: rgba(14,165,233,0.12); border: 1px solid rgba(14,165,233,0.35); padding: 10px 12px; border-radius: 10px; margin-bottom: 12px; }
    footer { margin-top: 24px; color: var(--muted); font-size: 13px; text-align: center; }
"#;

/// Wrap page content in the shared layout.
pub fn layout(page: &PageContext<'_>, content: &str) -> String {
    let flashes: String = page
        .flashes
        .iter()
        .map(|msg| format!("<div class=\"flash\">{}</div>\n", text(msg)))
        .collect();

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <style>{style}</style>
</head>
<body>
  <div class="container">
    <header>
      <h1>{title}</h1>
      <div class="actions">
        <a href="/item/new" class="button">New Item</a>
        <a href="/" class="button secondary">Refresh</a>
      </div>
    </header>
    {flashes}
    <div class="card">
{content}
    </div>
    <footer>Connected to: <span class="muted">{database}</span></footer>
  </div>
</body>
</html>
"#,
        title = text(page.title),
        style = STYLE,
        flashes = flashes,
        content = content,
        database = text(page.database_display),
    )
}
