use crate::core::debounce::Debouncer;
use crate::domain::model::USERNAME_FEEDBACK_ID;
use crate::domain::ports::AvailabilityChecker;
use crate::page::{lock_page, show_feedback, NodeId, SharedPage};
use crate::utils::error::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const USERNAME_INPUT_ID: &str = "username";
pub const CSRF_FIELD_NAME: &str = "csrf_token";

#[derive(Debug, Clone, Copy)]
pub struct UsernameSettings {
    pub debounce: Duration,
    pub min_len: usize,
}

/// Debounced remote availability check for the username input.
pub struct UsernameWatcher<A: AvailabilityChecker + 'static> {
    page: SharedPage,
    input: NodeId,
    csrf_field: NodeId,
    checker: Arc<A>,
    min_len: usize,
    debouncer: Debouncer,
    // 最新一次發出的請求編號；較舊的回應會被丟棄
    generation: Arc<AtomicU64>,
}

impl<A: AvailabilityChecker + 'static> std::fmt::Debug for UsernameWatcher<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsernameWatcher")
            .field("input", &self.input)
            .field("csrf_field", &self.csrf_field)
            .field("min_len", &self.min_len)
            .field("debounce", &self.debouncer.delay())
            .finish()
    }
}

impl<A: AvailabilityChecker + 'static> UsernameWatcher<A> {
    /// `None` unless both the username input and the hidden token field exist.
    pub fn attach(page: &SharedPage, checker: Arc<A>, settings: UsernameSettings) -> Result<Option<Self>> {
        let (input, csrf_field) = {
            let guard = lock_page(page)?;
            (
                guard.get_element_by_id(USERNAME_INPUT_ID),
                guard.get_element_by_name(CSRF_FIELD_NAME),
            )
        };

        let (Some(input), Some(csrf_field)) = (input, csrf_field) else {
            tracing::debug!("Username watcher not attached: required elements missing");
            return Ok(None);
        };

        Ok(Some(Self {
            page: page.clone(),
            input,
            csrf_field,
            checker,
            min_len: settings.min_len,
            debouncer: Debouncer::new(settings.debounce),
            generation: Arc::new(AtomicU64::new(0)),
        }))
    }

    pub fn input(&self) -> NodeId {
        self.input
    }

    /// Handles a change of the input text.
    ///
    /// Short values schedule nothing and leave an already pending check alone;
    /// that check still fires with the value it captured.
    pub fn on_input(&self, value: &str) {
        let username = value.trim().to_string();
        if username.chars().count() < self.min_len {
            tracing::trace!("Username too short for availability check");
            return;
        }

        let page = self.page.clone();
        let input = self.input;
        let csrf_field = self.csrf_field;
        let checker = self.checker.clone();
        let generation = self.generation.clone();

        self.debouncer.schedule(async move {
            let issued = generation.fetch_add(1, Ordering::SeqCst) + 1;
            run_check(page, input, csrf_field, checker, generation, issued, username).await;
        });
    }
}

async fn run_check<A: AvailabilityChecker>(
    page: SharedPage,
    input: NodeId,
    csrf_field: NodeId,
    checker: Arc<A>,
    generation: Arc<AtomicU64>,
    issued: u64,
    username: String,
) {
    let csrf_token = match lock_page(&page) {
        Ok(guard) => guard.value(csrf_field).to_string(),
        Err(e) => {
            tracing::warn!("Skipping availability check: {}", e);
            return;
        }
    };

    tracing::debug!("Checking availability of '{}' (request #{})", username, issued);
    let result = match checker.check(&username, &csrf_token).await {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!("Username availability check failed: {}", e);
            return;
        }
    };

    let latest = generation.load(Ordering::SeqCst);
    if issued < latest {
        tracing::debug!(
            "Discarding stale availability response #{} (latest #{})",
            issued,
            latest
        );
        return;
    }

    let applied = lock_page(&page)
        .and_then(|mut guard| show_feedback(&mut guard, input, USERNAME_FEEDBACK_ID, &result.feedback()));
    if let Err(e) = applied {
        tracing::warn!("Could not render username feedback: {}", e);
    }
}
