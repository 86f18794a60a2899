//! HTML markup for the results area.

use std::fmt::Write as _;

use model::Assessment;

use crate::badge::Badge;
use crate::traits::ResultsRenderer;
use crate::UNSPECIFIED_TEST_TYPE;

/// Renders the results area as an HTML fragment.
///
/// Every interpolated value goes through [`escape_html`], so assessment
/// fields coming from the service cannot inject markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl ResultsRenderer for HtmlRenderer {
    fn name(&self) -> &str {
        "HtmlRenderer"
    }

    fn empty_state(&self, message: &str) -> String {
        format!("<div class=\"empty-state\">{}</div>", escape_html(message))
    }

    fn table(&self, recommendations: &[Assessment]) -> String {
        let mut out = String::with_capacity(256 + recommendations.len() * 512);
        out.push_str(
            "<table>\n<thead>\n<tr>\
             <th>#</th><th>Assessment</th><th>Remote support</th><th>Adaptive</th><th>Test type</th>\
             </tr>\n</thead>\n<tbody>\n",
        );
        for (idx, assessment) in recommendations.iter().enumerate() {
            push_row(&mut out, idx + 1, assessment);
        }
        out.push_str("</tbody>\n</table>");
        out
    }
}

fn push_row(out: &mut String, rank: usize, assessment: &Assessment) {
    let remote = Badge::remote(assessment);
    let adaptive = Badge::adaptive(assessment);

    // Writing into a String cannot fail
    let _ = write!(
        out,
        "<tr>\
         <td>{rank}</td>\
         <td><div><a href=\"{href}\" class=\"url-link\" target=\"_blank\" rel=\"noopener noreferrer\">{name}</a></div>\
         <div class=\"duration-badge\">{duration}</div></td>\
         <td><span class=\"{remote_class}\">{remote_text}</span></td>\
         <td><span class=\"{adaptive_class}\">{adaptive_text}</span></td>\
         <td><div class=\"tag-list\">{tags}</div></td>\
         </tr>\n",
        href = escape_html(assessment.link()),
        name = escape_html(assessment.display_name()),
        duration = escape_html(&assessment.duration_label()),
        remote_class = remote.css_class(),
        remote_text = escape_html(&remote.text()),
        adaptive_class = adaptive.css_class(),
        adaptive_text = escape_html(&adaptive.text()),
        tags = tags(&assessment.test_type),
    );
}

fn tags(test_types: &[String]) -> String {
    if test_types.is_empty() {
        return format!("<span class=\"tag\">{UNSPECIFIED_TEST_TYPE}</span>");
    }
    test_types
        .iter()
        .map(|t| format!("<span class=\"tag\">{}</span>", escape_html(t)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Encode the characters that are significant in HTML text and attributes.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
