//! Case Study Markup
//!
//! Renders a `CaseStudy` into the modal body HTML.

use crate::models::CaseStudy;

const MUTED: &str = "color: var(--text-secondary);";

/// Build the modal body for `study`. All record text is escaped.
pub fn render_case_study(study: &CaseStudy) -> String {
    let mut html = String::new();

    html.push_str(&format!("<h2>{}</h2>", escape_html(study.title)));
    html.push_str(&format!(
        r#"<p style="{} font-size: 1.1rem; margin-bottom: 30px;">{}</p>"#,
        MUTED,
        escape_html(study.description)
    ));

    push_section(&mut html, "The Challenge", study.challenge);
    push_section(&mut html, "Our Solution", study.solution);

    html.push_str("<h3>Results</h3>");
    html.push_str(r#"<ul style="list-style: none; margin-bottom: 25px;">"#);
    for result in study.results {
        html.push_str(&format!(
            r#"<li style="padding: 10px 0; {} border-bottom: 1px solid var(--glass-border);">✓ {}</li>"#,
            MUTED,
            escape_html(result)
        ));
    }
    html.push_str("</ul>");

    html.push_str("<h3>Technologies Used</h3>");
    html.push_str(r#"<div style="display: flex; flex-wrap: wrap; gap: 10px; margin-top: 15px;">"#);
    for tech in study.technologies {
        html.push_str(&format!(
            r#"<span style="padding: 8px 18px; background: var(--glass-bg); border: 1px solid var(--glass-border); border-radius: 50px; font-size: 0.9rem;">{}</span>"#,
            escape_html(tech)
        ));
    }
    html.push_str("</div>");

    html
}

fn push_section(html: &mut String, heading: &str, body: &str) {
    html.push_str(&format!("<h3>{}</h3>", heading));
    html.push_str(&format!(
        r#"<p style="{} margin-bottom: 25px;">{}</p>"#,
        MUTED,
        escape_html(body)
    ));
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
