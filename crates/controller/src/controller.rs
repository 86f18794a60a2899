//! # Submission Controller
//!
//! Drives one submit-to-render cycle:
//! 1. Read and normalize the form input
//! 2. Put the trigger into its working state
//! 3. Ask the recommendation source once
//! 4. Render the results, or the error/empty state
//! 5. Restore the trigger, whatever happened
//!
//! ```text
//! Idle -> Validating -> Loading -> Success -> Idle
//!             |                 \-> Failure -> Idle
//!             \-> Idle (blank query, no request sent)
//! ```

use tracing::{debug, error, info};

use model::{Assessment, ValidationError};
use rec_client::{ClientError, RecommendationSource};
use render::{count_label, ResultsRenderer};

use crate::error::{ControllerError, Result};
use crate::view::{FormView, TriggerState};

/// Empty-state text after a blank query was rejected
pub const WAITING_FOR_QUERY: &str = "Waiting for a query...";

/// Count indicator text while the request is pending
pub const REQUEST_IN_FLIGHT: &str = "Request in flight...";

/// User-facing error for any failed request
pub const FETCH_FAILED: &str = "Failed to fetch recommendations. Check backend & retry.";

/// Empty-state text after a failed request
pub const BACKEND_ERROR: &str = "Error calling backend.";

/// Where the controller is in the submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Loading,
    Success,
    Failure,
}

/// What a call to [`SubmissionController::submit`] ended with.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Input was invalid; nothing was sent
    Rejected(ValidationError),
    /// Results were rendered (after truncation to the requested limit)
    Rendered { count: usize },
    /// The request failed; the generic error message is showing
    Failed(ClientError),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Rendered { .. })
    }
}

/// Query form controller.
///
/// Owns the view it renders into and the source it fetches from. `submit`
/// takes `&mut self`, so one controller never has two requests in flight.
pub struct SubmissionController<V, S> {
    view: V,
    source: S,
    renderer: Box<dyn ResultsRenderer>,
    phase: Phase,
}

impl<V, S> SubmissionController<V, S>
where
    V: FormView,
    S: RecommendationSource,
{
    /// Wire a controller to a document.
    ///
    /// Fails without touching the view when the form element is missing.
    pub fn attach(
        view: V,
        source: S,
        renderer: impl ResultsRenderer + 'static,
    ) -> Result<Self> {
        info!("Attaching query form controller");
        if !view.has_form() {
            error!("Form not found. Check HTML IDs.");
            return Err(ControllerError::FormNotFound);
        }

        debug!("Using {} for the results area", renderer.name());
        Ok(Self {
            view,
            source,
            renderer: Box::new(renderer),
            phase: Phase::Idle,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the document, e.g. to change form fields between
    /// submissions.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Handle one form submission.
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.transition(Phase::Validating);
        self.view.set_error(None);

        let request = match self.view.read_input().normalize() {
            Ok(request) => request,
            Err(err) => {
                debug!("Rejected submission: {}", err);
                self.view.set_error(Some(&err.to_string()));
                self.render_empty_state(WAITING_FOR_QUERY);
                self.transition(Phase::Idle);
                return SubmitOutcome::Rejected(err);
            }
        };

        // Split the borrows so the guard can restore the trigger even if this
        // future is dropped while the request is pending.
        let Self {
            view,
            source,
            renderer,
            phase,
        } = self;
        let mut loading = LoadingGuard::enter(view, phase);
        loading.view.set_meta(REQUEST_IN_FLIGHT);

        info!(
            "Submitting query ({} chars, k={})",
            request.query.chars().count(),
            request.k
        );

        let outcome = match source.fetch_recommendations(&request).await {
            Ok(mut recommendations) => {
                recommendations.truncate(request.limit());
                *loading.phase = Phase::Success;
                write_results(&mut *loading.view, &**renderer, &recommendations);
                loading.view.set_error(None);
                info!("Rendered {} assessments", recommendations.len());
                SubmitOutcome::Rendered {
                    count: recommendations.len(),
                }
            }
            Err(err) => {
                error!("Failed to fetch recommendations: {}", err);
                *loading.phase = Phase::Failure;
                loading.view.set_error(Some(FETCH_FAILED));
                loading
                    .view
                    .set_results(renderer.empty_state(BACKEND_ERROR));
                SubmitOutcome::Failed(err)
            }
        };

        drop(loading); // trigger back to Ready, phase back to Idle
        outcome
    }

    /// Set the count indicator and render `recommendations` into the results area.
    pub fn render_results(&mut self, recommendations: &[Assessment]) {
        write_results(&mut self.view, &*self.renderer, recommendations);
    }

    /// Replace the results area with a single informational block.
    pub fn render_empty_state(&mut self, message: &str) {
        self.view.set_results(self.renderer.empty_state(message));
    }

    fn transition(&mut self, next: Phase) {
        debug!("Phase {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}

fn write_results<V: FormView + ?Sized>(
    view: &mut V,
    renderer: &dyn ResultsRenderer,
    recommendations: &[Assessment],
) {
    view.set_meta(&count_label(recommendations.len()));
    view.set_results(renderer.results(recommendations));
}

/// Holds the trigger in its working state for as long as it lives.
struct LoadingGuard<'a, V: FormView> {
    view: &'a mut V,
    phase: &'a mut Phase,
}

impl<'a, V: FormView> LoadingGuard<'a, V> {
    fn enter(view: &'a mut V, phase: &'a mut Phase) -> Self {
        view.set_trigger(TriggerState::Working);
        debug!("Phase {:?} -> {:?}", *phase, Phase::Loading);
        *phase = Phase::Loading;
        Self { view, phase }
    }
}

impl<V: FormView> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_trigger(TriggerState::Ready);
        debug!("Phase {:?} -> {:?}", *self.phase, Phase::Idle);
        *self.phase = Phase::Idle;
    }
}
