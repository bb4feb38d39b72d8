//! Minimal server-rendered pages.

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap `body` (already escaped) in the shared page layout.
pub fn page(title: &str, body: &str, script: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; max-width: 42rem; margin: 2rem auto; padding: 0 1rem; }}
.button {{ display: inline-block; margin: .25rem; padding: .5rem 1rem; border: 1px solid #444; border-radius: .25rem; background: #f4f4f4; cursor: pointer; }}
#items li {{ margin: .5rem 0; }}
</style>
</head>
<body>
{body}
<script>
{script}
</script>
</body>
</html>
"#,
        title = escape_html(title),
    )
}
