use crate::core::email::{EmailWatcher, EMAIL_INPUT_ID};
use crate::core::password::{PasswordConfirmWatcher, CONFIRM_PASSWORD_INPUT_ID};
use crate::core::submit::validate_registration;
use crate::core::username::{UsernameSettings, UsernameWatcher, USERNAME_INPUT_ID};
use crate::domain::model::FieldIssue;
use crate::domain::ports::{AvailabilityChecker, ConfigProvider};
use crate::page::{lock_page, SharedPage};
use crate::utils::error::Result;
use std::sync::Arc;

/// User interaction delivered to the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The text of input `field` changed to `value`.
    Input { field: String, value: String },
    /// Input `field` lost focus.
    Blur { field: String },
    /// Checkbox `field` was ticked or cleared.
    Toggle { field: String, checked: bool },
}

impl FieldEvent {
    pub fn input(field: &str, value: &str) -> Self {
        FieldEvent::Input {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn blur(field: &str) -> Self {
        FieldEvent::Blur {
            field: field.to_string(),
        }
    }

    pub fn toggle(field: &str, checked: bool) -> Self {
        FieldEvent::Toggle {
            field: field.to_string(),
            checked,
        }
    }
}

/// Interactive validator of one registration page.
///
/// Each watcher is attached only when its inputs exist; events for fields
/// without a watcher just update the page.
#[derive(Debug)]
pub struct FormValidator<A: AvailabilityChecker + 'static> {
    page: SharedPage,
    username: Option<UsernameWatcher<A>>,
    email: Option<EmailWatcher>,
    password: Option<PasswordConfirmWatcher>,
}

impl<A: AvailabilityChecker + 'static> FormValidator<A> {
    pub fn attach<C: ConfigProvider>(page: SharedPage, checker: Arc<A>, config: &C) -> Result<Self> {
        let settings = UsernameSettings {
            debounce: config.debounce(),
            min_len: config.min_username_len(),
        };

        let username = UsernameWatcher::attach(&page, checker, settings)?;
        let email = EmailWatcher::attach(&page)?;
        let password = PasswordConfirmWatcher::attach(&page)?;

        tracing::info!(
            "Validator attached (username: {}, email: {}, password confirmation: {})",
            username.is_some(),
            email.is_some(),
            password.is_some()
        );

        Ok(Self {
            page,
            username,
            email,
            password,
        })
    }

    pub fn page(&self) -> &SharedPage {
        &self.page
    }

    pub fn has_username_watcher(&self) -> bool {
        self.username.is_some()
    }

    pub fn has_email_watcher(&self) -> bool {
        self.email.is_some()
    }

    pub fn has_password_watcher(&self) -> bool {
        self.password.is_some()
    }

    /// Must be called from within a tokio runtime; the username check runs on
    /// spawned tasks.
    pub fn handle(&self, event: FieldEvent) -> Result<()> {
        match event {
            FieldEvent::Input { field, value } => {
                {
                    let mut page = lock_page(&self.page)?;
                    let Some(node) = page.get_element_by_id(&field) else {
                        tracing::debug!("Input event for unknown field '{}'", field);
                        return Ok(());
                    };
                    page.set_value(node, &value);
                }

                match field.as_str() {
                    USERNAME_INPUT_ID => {
                        if let Some(watcher) = &self.username {
                            watcher.on_input(&value);
                        }
                    }
                    CONFIRM_PASSWORD_INPUT_ID => {
                        if let Some(watcher) = &self.password {
                            watcher.on_input()?;
                        }
                    }
                    _ => {}
                }
            }
            FieldEvent::Blur { field } => {
                if field == EMAIL_INPUT_ID {
                    if let Some(watcher) = &self.email {
                        watcher.on_blur()?;
                    }
                }
            }
            FieldEvent::Toggle { field, checked } => {
                let mut page = lock_page(&self.page)?;
                match page.get_element_by_id(&field) {
                    Some(node) => page.set_checked(node, checked),
                    None => tracing::debug!("Toggle event for unknown field '{}'", field),
                }
            }
        }
        Ok(())
    }

    /// Runs the full registration rules against the current page values.
    pub fn submit(&self) -> Result<Vec<FieldIssue>> {
        let page = lock_page(&self.page)?;
        let issues = validate_registration(&page);
        if issues.is_empty() {
            tracing::info!("Registration form passed validation");
        } else {
            tracing::info!("Registration form has {} issue(s)", issues.len());
        }
        Ok(issues)
    }
}
