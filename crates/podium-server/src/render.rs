//! HTML rendering of the leaderboard page.

use podium_types::ScoreRecord;

const HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Leaderboard</title>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>
        body { font-family: monospace; max-width: 600px; margin: 20px auto; padding: 0 10px; }
        table { border-collapse: collapse; margin-bottom: 30px; width: 100%; }
        th, td { padding: 8px; border-bottom: 1px solid #ccc; text-align: left; }
    </style>
</head>
<body>
    <h1>Leaderboard</h1>
"#;

const FOOT: &str = r#"    <p><a href="/scores">JSON API</a></p>
</body>
</html>"#;

/// Render one table per category. `standings` must already be grouped,
/// ordered, and truncated.
pub fn leaderboard_page(standings: &[(String, Vec<ScoreRecord>)]) -> String {
    let mut html = String::from(HEAD);
    for (category, records) in standings {
        html.push_str(&format!("    <h2>{}</h2>\n", escape(category)));
        html.push_str("    <table>\n        <tr><th>#</th><th>Time</th><th>Date</th></tr>\n");
        for (i, record) in records.iter().enumerate() {
            let time = record.time().unwrap_or(0.0);
            let date: String = record.date().unwrap_or("").chars().take(10).collect();
            html.push_str(&format!(
                "        <tr><td>{}</td><td>{:.2}s</td><td>{}</td></tr>\n",
                i + 1,
                time,
                escape(&date)
            ));
        }
        html.push_str("    </table>\n");
    }
    html.push_str(FOOT);
    html
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stored(value: serde_json::Value) -> ScoreRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_board_has_header_and_footer() {
        let html = leaderboard_page(&[]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Leaderboard</h1>"));
        assert!(html.ends_with("</html>"));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn rows_are_numbered_with_two_decimal_times() {
        let standings = vec![(
            "Reef".to_string(),
            vec![
                stored(json!({"name": "Reef", "time": 3.14159, "date": "2026-10-16T09:00:00.000000Z"})),
                stored(json!({"name": "Reef", "time": 7.0, "date": "2026-10-17T09:00:00.000000Z"})),
            ],
        )];
        let html = leaderboard_page(&standings);
        assert!(html.contains("<h2>Reef</h2>"));
        assert!(html.contains("<tr><td>1</td><td>3.14s</td><td>2026-10-16</td></tr>"));
        assert!(html.contains("<tr><td>2</td><td>7.00s</td><td>2026-10-17</td></tr>"));
    }

    #[test]
    fn missing_fields_render_as_defaults() {
        let standings = vec![("Unknown".to_string(), vec![stored(json!({}))])];
        let html = leaderboard_page(&standings);
        assert!(html.contains("<tr><td>1</td><td>0.00s</td><td></td></tr>"));
    }

    #[test]
    fn category_names_are_escaped() {
        let standings = vec![("<b>&</b>".to_string(), Vec::new())];
        let html = leaderboard_page(&standings);
        assert!(html.contains("<h2>&lt;b&gt;&amp;&lt;/b&gt;</h2>"));
    }
}
