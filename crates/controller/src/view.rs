//! Host-document contract for the query form.
//!
//! The controller never touches a document directly. Everything it reads or
//! writes goes through [`FormView`], whose methods map onto the element ids
//! in [`ids`]. [`MemoryView`] is an in-memory document used by tests and by
//! the command-line front end.

use model::FormInput;

/// Most recent trigger and meta updates a [`MemoryView`] keeps
pub const HISTORY_LIMIT: usize = 64;

/// Element identifiers the controller relies on.
pub mod ids {
    pub const FORM: &str = "query-form";
    pub const QUERY_INPUT: &str = "query-input";
    pub const LIMIT_INPUT: &str = "k-input";
    pub const REMOTE_FILTER: &str = "remote-filter";
    pub const ADAPTIVE_FILTER: &str = "adaptive-filter";
    pub const SUBMIT_BUTTON: &str = "submit-btn";
    pub const BUTTON_ICON: &str = "btn-icon";
    pub const BUTTON_TEXT: &str = "btn-text";
    pub const RESULTS_BOX: &str = "results-box";
    pub const RESULTS_META: &str = "results-meta";
    pub const ERROR_MESSAGE: &str = "error-msg";
}

/// State of the submit trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    /// Enabled, default icon and label
    Ready,
    /// Disabled while a request is in flight
    Working,
}

impl TriggerState {
    pub fn disabled(self) -> bool {
        matches!(self, TriggerState::Working)
    }

    pub fn icon(self) -> &'static str {
        match self {
            TriggerState::Ready => "⚙️",
            TriggerState::Working => "⏳",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TriggerState::Ready => "Get recommendations",
            TriggerState::Working => "Finding assessments...",
        }
    }
}

/// Everything the controller needs from the host document.
pub trait FormView {
    /// Whether the form element exists at all.
    fn has_form(&self) -> bool;

    /// Current raw values of the query, limit and filter fields.
    ///
    /// A missing or unchecked checkbox reads as `false`.
    fn read_input(&self) -> FormInput;

    /// Show `Some(message)` in the error element, or hide it on `None`.
    fn set_error(&mut self, message: Option<&str>);

    /// Enable/disable the submit trigger and swap its icon and label.
    fn set_trigger(&mut self, state: TriggerState);

    /// Replace the text of the results count indicator.
    fn set_meta(&mut self, text: &str);

    /// Replace the content of the results area.
    fn set_results(&mut self, content: String);
}

/// In-memory document.
///
/// Besides the current element contents it records the last
/// [`HISTORY_LIMIT`] trigger and meta updates, so a caller can check the
/// loading sequence afterwards.
#[derive(Debug, Clone)]
pub struct MemoryView {
    form_present: bool,
    input: FormInput,
    trigger: TriggerState,
    meta: String,
    results: String,
    error: Option<String>,
    trigger_history: Vec<TriggerState>,
    meta_history: Vec<String>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self {
            form_present: true,
            input: FormInput::default(),
            trigger: TriggerState::Ready,
            meta: String::new(),
            results: String::new(),
            error: None,
            trigger_history: Vec::new(),
            meta_history: Vec::new(),
        }
    }

    /// A document whose form element is missing.
    pub fn without_form() -> Self {
        Self {
            form_present: false,
            ..Self::new()
        }
    }

    pub fn with_input(mut self, input: FormInput) -> Self {
        self.input = input;
        self
    }

    /// Overwrite the form fields, as a user typing would.
    pub fn fill(&mut self, input: FormInput) {
        self.input = input;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.input.query = query.into();
    }

    pub fn set_limit(&mut self, limit: impl Into<String>) {
        self.input.limit = limit.into();
    }

    pub fn trigger(&self) -> TriggerState {
        self.trigger
    }

    pub fn meta(&self) -> &str {
        &self.meta
    }

    pub fn results(&self) -> &str {
        &self.results
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn trigger_history(&self) -> &[TriggerState] {
        &self.trigger_history
    }

    pub fn meta_history(&self) -> &[String] {
        &self.meta_history
    }

    pub fn clear_history(&mut self) {
        self.trigger_history.clear();
        self.meta_history.clear();
    }

    /// Text content of an element by id, the way a document lookup would
    /// return it. `None` for unknown ids, the missing form, and a hidden
    /// error element.
    pub fn element_text(&self, id: &str) -> Option<String> {
        match id {
            ids::FORM if self.form_present => Some(String::new()),
            ids::QUERY_INPUT => Some(self.input.query.clone()),
            ids::LIMIT_INPUT => Some(self.input.limit.clone()),
            ids::REMOTE_FILTER => Some(self.input.prefer_remote.to_string()),
            ids::ADAPTIVE_FILTER => Some(self.input.prefer_adaptive.to_string()),
            ids::BUTTON_ICON => Some(self.trigger.icon().to_string()),
            ids::BUTTON_TEXT => Some(self.trigger.label().to_string()),
            ids::SUBMIT_BUTTON => Some(format!("{} {}", self.trigger.icon(), self.trigger.label())),
            ids::RESULTS_BOX => Some(self.results.clone()),
            ids::RESULTS_META => Some(self.meta.clone()),
            ids::ERROR_MESSAGE => self.error.clone(),
            _ => None,
        }
    }
}

impl Default for MemoryView {
    fn default() -> Self {
        Self::new()
    }
}

impl FormView for MemoryView {
    fn has_form(&self) -> bool {
        self.form_present
    }

    fn read_input(&self) -> FormInput {
        self.input.clone()
    }

    fn set_error(&mut self, message: Option<&str>) {
        self.error = message.filter(|m| !m.is_empty()).map(str::to_string);
    }

    fn set_trigger(&mut self, state: TriggerState) {
        self.trigger = state;
        record(&mut self.trigger_history, state);
    }

    fn set_meta(&mut self, text: &str) {
        self.meta = text.to_string();
        record(&mut self.meta_history, self.meta.clone());
    }

    fn set_results(&mut self, content: String) {
        self.results = content;
    }
}

fn record<T>(history: &mut Vec<T>, entry: T) {
    if history.len() == HISTORY_LIMIT {
        history.remove(0);
    }
    history.push(entry);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_states() {
        assert!(!TriggerState::Ready.disabled());
        assert!(TriggerState::Working.disabled());
        assert_eq!(TriggerState::Ready.label(), "Get recommendations");
        assert_eq!(TriggerState::Working.label(), "Finding assessments...");
        assert_eq!(TriggerState::Working.icon(), "⏳");
    }

    #[test]
    fn test_element_lookup() {
        let mut view = MemoryView::new();
        view.set_query("data analyst");
        view.set_meta("3 assessments");

        assert_eq!(view.element_text(ids::QUERY_INPUT).as_deref(), Some("data analyst"));
        assert_eq!(view.element_text(ids::RESULTS_META).as_deref(), Some("3 assessments"));
        assert_eq!(view.element_text(ids::ERROR_MESSAGE), None);
        assert_eq!(view.element_text("no-such-id"), None);
        assert!(view.element_text(ids::FORM).is_some());
        assert!(MemoryView::without_form().element_text(ids::FORM).is_none());
    }

    #[test]
    fn test_error_is_hidden_by_none_or_empty() {
        let mut view = MemoryView::new();
        view.set_error(Some("boom"));
        assert_eq!(view.error(), Some("boom"));
        view.set_error(None);
        assert_eq!(view.error(), None);
        view.set_error(Some(""));
        assert_eq!(view.error(), None);
    }

    #[test]
    fn test_history_keeps_latest_updates() {
        let mut view = MemoryView::new();
        for i in 0..HISTORY_LIMIT + 10 {
            view.set_meta(&format!("{i} assessments"));
            view.set_trigger(TriggerState::Working);
        }

        assert_eq!(view.meta_history().len(), HISTORY_LIMIT);
        assert_eq!(view.trigger_history().len(), HISTORY_LIMIT);
        assert_eq!(view.meta_history()[0], "10 assessments");
        assert_eq!(
            view.meta_history().last().map(String::as_str),
            Some(format!("{} assessments", HISTORY_LIMIT + 9).as_str())
        );

        view.clear_history();
        assert!(view.meta_history().is_empty());
        assert!(view.trigger_history().is_empty());
        assert_eq!(view.meta(), format!("{} assessments", HISTORY_LIMIT + 9));
    }
}
