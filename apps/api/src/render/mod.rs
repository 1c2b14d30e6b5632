//! HTML rendering for the form and result pages.

pub mod templates;

use crate::analysis::AnalysisReport;
use crate::render::templates::{INDEX_PAGE, RESULT_PAGE_TEMPLATE};

pub fn render_index() -> &'static str {
    INDEX_PAGE
}

pub fn render_result(report: &AnalysisReport) -> String {
    RESULT_PAGE_TEMPLATE
        .replace("{percentage}", &format!("{:.1}", report.percentage))
        .replace("{matched_count}", &report.matched_keywords.len().to_string())
        .replace("{keyword_count}", &report.job_keywords.len().to_string())
        .replace(
            "{matched_items}",
            &list_items(&report.matched_keywords, "", "No matching keywords found."),
        )
        .replace(
            "{missing_items}",
            &list_items(&report.missing_keywords, "missing", "None."),
        )
}

fn list_items(items: &[String], class: &str, empty: &str) -> String {
    let class_attr = if class.is_empty() {
        String::new()
    } else {
        format!(r#" class="{class}""#)
    };
    if items.is_empty() {
        return format!("    <li{class_attr}><em>{}</em></li>", escape_html(empty));
    }
    items
        .iter()
        .map(|item| format!("    <li{class_attr}>{}</li>", escape_html(item)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn report(matched: &[&str], missing: &[&str], percentage: f64) -> AnalysisReport {
        let matched: Vec<String> = matched.iter().map(|s| s.to_string()).collect();
        let missing: Vec<String> = missing.iter().map(|s| s.to_string()).collect();
        AnalysisReport {
            job_keywords: matched.iter().chain(missing.iter()).cloned().collect(),
            resume_skills: vec![],
            matched_keywords: matched,
            missing_keywords: missing,
            percentage,
            lexicon_backend: "builtin".to_string(),
        }
    }

    #[test]
    fn test_result_page_shows_keywords_and_percentage() {
        let html = render_result(&report(&["python", "sql"], &["kafka"], 66.666_666));
        assert!(html.contains("66.7%"));
        assert!(html.contains("<li>python</li>"));
        assert!(html.contains(r#"<li class="missing">kafka</li>"#));
        assert!(html.contains("2 of 3 job keywords"));
        for placeholder in ["{percentage}", "{matched_items}", "{missing_items}", "{keyword_count}"] {
            assert!(!html.contains(placeholder), "{placeholder} left in page");
        }
    }

    #[test]
    fn test_result_page_with_no_matches() {
        let html = render_result(&report(&[], &["rust"], 0.0));
        assert!(html.contains("0.0%"));
        assert!(html.contains("No matching keywords found."));
    }

    #[test]
    fn test_keywords_are_escaped() {
        let html = render_result(&report(&["<script>"], &[], 100.0));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<li><script>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"a & "b" <c> 'd'"#), "a &amp; &quot;b&quot; &lt;c&gt; &#39;d&#39;");
    }

    #[test]
    fn test_index_has_form_fields() {
        let html = render_index();
        assert!(html.contains(r#"name="resume""#));
        assert!(html.contains(r#"name="job_description""#));
        assert!(html.contains(r#"action="/analyze""#));
    }
}
