//! Support badges shown for remote and adaptive testing.

use model::{Assessment, SupportLevel};

/// Which delivery mode a badge describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Remote,
    Adaptive,
}

impl BadgeKind {
    fn prefix(self) -> &'static str {
        match self {
            BadgeKind::Remote => "Remote",
            BadgeKind::Adaptive => "Adaptive",
        }
    }
}

/// A labeled tri-state badge.
///
/// The label keeps the service's own spelling (`"yes"`, `"YES"`); only the
/// style follows the normalized [`SupportLevel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge<'a> {
    pub kind: BadgeKind,
    pub label: &'a str,
    pub level: SupportLevel,
}

impl<'a> Badge<'a> {
    pub fn remote(assessment: &'a Assessment) -> Self {
        Self {
            kind: BadgeKind::Remote,
            label: assessment.remote_label(),
            level: assessment.remote_level(),
        }
    }

    pub fn adaptive(assessment: &'a Assessment) -> Self {
        Self {
            kind: BadgeKind::Adaptive,
            label: assessment.adaptive_label(),
            level: assessment.adaptive_level(),
        }
    }

    /// e.g. `"Remote: Yes"`
    pub fn text(&self) -> String {
        format!("{}: {}", self.kind.prefix(), self.label)
    }

    pub fn css_class(&self) -> &'static str {
        match self.level {
            SupportLevel::Yes => "pill pill-yes",
            SupportLevel::No => "pill pill-no",
            SupportLevel::Unknown => "pill pill-unknown",
        }
    }
}
