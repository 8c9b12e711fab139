//! HTML table view of a result set
//!
//! Produces one self-contained document: title, inline stylesheet, heading and
//! a `<table>` with a header row followed by one row per record. Column names
//! and cell text always pass through [`escape`] before they reach the markup.

use std::borrow::Cow;

use crate::result_set::ResultSet;

pub const DEFAULT_TITLE: &str = "BMS Data";

const STYLE: &str = "body{font-family: sans-serif; background-color: #f4f4f9; color: #333;} \
table{width: 100%; border-collapse: collapse; margin: 20px 0;} \
th, td{border: 1px solid #ddd; padding: 8px; text-align: left;} \
th{background-color: #4CAF50; color: white;}";

/// Escape `&`, `<`, `>`, `"`, `'` and `/`.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_safe(text)
}

pub fn to_html(set: &ResultSet) -> String {
    to_html_with_title(set, DEFAULT_TITLE)
}

pub fn to_html_with_title(set: &ResultSet, title: &str) -> String {
    let title = escape(title);
    let mut html = String::with_capacity(512 + set.len() * set.columns().len() * 24);

    html.push_str("<html><head><title>");
    html.push_str(&title);
    html.push_str("</title><style>");
    html.push_str(STYLE);
    html.push_str("</style></head><body><h1>");
    html.push_str(&title);
    html.push_str("</h1><table>");

    html.push_str("<tr>");
    for column in set.columns() {
        push_cell(&mut html, "th", column);
    }
    html.push_str("</tr>");

    for record in set.records() {
        html.push_str("<tr>");
        for value in record.values() {
            push_cell(&mut html, "td", &value.to_string());
        }
        html.push_str("</tr>");
    }

    html.push_str("</table></body></html>");
    html
}

fn push_cell(html: &mut String, tag: &str, text: &str) {
    html.push('<');
    html.push_str(tag);
    html.push('>');
    html.push_str(&escape(text));
    html.push_str("</");
    html.push_str(tag);
    html.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    fn set(columns: &[&str], rows: Vec<Vec<Value>>) -> ResultSet {
        ResultSet::from_rows(columns.iter().map(|c| c.to_string()).collect(), rows).unwrap()
    }

    #[test]
    fn renders_header_and_rows() {
        let html = to_html(&set(
            &["id", "name"],
            vec![
                vec![Value::Int(1), Value::from("alpha")],
                vec![Value::Int(2), Value::from("beta")],
            ],
        ));

        assert!(html.starts_with("<html><head><title>BMS Data</title><style>"));
        assert!(html.contains("<h1>BMS Data</h1>"));
        assert!(html.contains("<tr><th>id</th><th>name</th></tr>"));
        assert!(html.contains("<tr><td>1</td><td>alpha</td></tr>"));
        assert!(html.contains("<tr><td>2</td><td>beta</td></tr>"));
        assert!(html.ends_with("</table></body></html>"));
        assert_eq!(html.matches("<tr>").count(), 3);
    }

    #[test]
    fn empty_set_has_header_only() {
        let html = to_html(&set(&["id", "name"], vec![]));
        assert_eq!(html.matches("<tr>").count(), 1);
        assert!(html.contains("<th>id</th><th>name</th>"));
        assert!(!html.contains("<td>"));
    }

    #[test]
    fn escapes_cell_values() {
        let html = to_html(&set(
            &["note"],
            vec![vec![Value::from("<script>alert('x')</script>")]],
        ));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn escapes_column_names_and_title() {
        let html = to_html_with_title(&set(&["a&b", "\"q\""], vec![]), "<BMS>");
        assert!(html.contains("<th>a&amp;b</th>"));
        assert!(html.contains("<th>&quot;q&quot;</th>"));
        assert!(html.contains("<title>&lt;BMS&gt;</title>"));
    }

    #[test]
    fn null_renders_empty_cell() {
        let html = to_html(&set(&["id", "note"], vec![vec![Value::Int(3), Value::Null]]));
        assert!(html.contains("<tr><td>3</td><td></td></tr>"));
    }

    #[test]
    fn style_block_is_inline() {
        let html = to_html(&ResultSet::default());
        assert!(html.contains("border-collapse: collapse"));
        assert!(html.contains("th{background-color: #4CAF50"));
    }
}
