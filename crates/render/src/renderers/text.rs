//! Terminal rendering of the results area.

use colored::{ColoredString, Colorize};

use model::{Assessment, SupportLevel};

use crate::badge::Badge;
use crate::traits::ResultsRenderer;
use crate::UNSPECIFIED_TEST_TYPE;

/// Renders results as colored plain-text lines for a terminal.
///
/// With `explain` set, each row is followed by the assessment description
/// when the service sent one.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    explain: bool,
}

impl TextRenderer {
    pub fn new(explain: bool) -> Self {
        Self { explain }
    }
}

impl ResultsRenderer for TextRenderer {
    fn name(&self) -> &str {
        "TextRenderer"
    }

    fn empty_state(&self, message: &str) -> String {
        format!("{}", message.dimmed())
    }

    fn table(&self, recommendations: &[Assessment]) -> String {
        let mut lines = Vec::with_capacity(recommendations.len() * 3);
        for (idx, rec) in recommendations.iter().enumerate() {
            lines.push(format!(
                "{}. {} ({})",
                (idx + 1).to_string().green(),
                rec.display_name().bold(),
                rec.duration_label()
            ));
            lines.push(format!("   {}", rec.link().cyan()));
            lines.push(format!(
                "   {}  {}  [{}]",
                paint(&Badge::remote(rec)),
                paint(&Badge::adaptive(rec)),
                test_types(&rec.test_type)
            ));
            if self.explain {
                if let Some(description) = rec.description.as_deref().filter(|d| !d.is_empty()) {
                    lines.push(format!("   {}", description.italic()));
                }
            }
        }
        lines.join("\n")
    }
}

fn paint(badge: &Badge<'_>) -> ColoredString {
    let text = badge.text();
    match badge.level {
        SupportLevel::Yes => text.green(),
        SupportLevel::No => text.red(),
        SupportLevel::Unknown => text.yellow(),
    }
}

fn test_types(test_types: &[String]) -> String {
    if test_types.is_empty() {
        UNSPECIFIED_TEST_TYPE.to_string()
    } else {
        test_types.join(", ")
    }
}
