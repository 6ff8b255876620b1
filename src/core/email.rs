use crate::domain::model::{Feedback, EMAIL_FEEDBACK_ID, MSG_INVALID_EMAIL};
use crate::page::{clear_feedback, lock_page, show_feedback, NodeId, SharedPage};
use crate::utils::error::Result;
use regex::Regex;
use std::sync::OnceLock;

pub const EMAIL_INPUT_ID: &str = "email";

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"))
}

/// `local@domain.tld`, none of the parts empty or containing whitespace or `@`.
pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value.trim())
}

#[derive(Debug)]
pub struct EmailWatcher {
    page: SharedPage,
    input: NodeId,
}

impl EmailWatcher {
    pub fn attach(page: &SharedPage) -> Result<Option<Self>> {
        let input = lock_page(page)?.get_element_by_id(EMAIL_INPUT_ID);
        Ok(input.map(|input| Self {
            page: page.clone(),
            input,
        }))
    }

    pub fn input(&self) -> NodeId {
        self.input
    }

    pub fn on_blur(&self) -> Result<()> {
        let mut page = lock_page(&self.page)?;
        if is_valid_email(page.value(self.input)) {
            clear_feedback(&mut page, self.input, EMAIL_FEEDBACK_ID)
        } else {
            tracing::debug!("Email failed format check");
            show_feedback(
                &mut page,
                self.input,
                EMAIL_FEEDBACK_ID,
                &Feedback::error(MSG_INVALID_EMAIL),
            )
        }
    }
}
