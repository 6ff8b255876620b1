use crate::domain::model::{
    Feedback, CONFIRM_PASSWORD_FEEDBACK_ID, MSG_PASSWORDS_MATCH, MSG_PASSWORDS_MISMATCH,
};
use crate::page::{lock_page, show_feedback, NodeId, SharedPage};
use crate::utils::error::Result;

pub const PASSWORD_INPUT_ID: &str = "password";
pub const CONFIRM_PASSWORD_INPUT_ID: &str = "confirm_password";

pub fn confirmation_feedback(password: &str, confirmation: &str) -> Feedback {
    if password == confirmation {
        Feedback::success(MSG_PASSWORDS_MATCH)
    } else {
        Feedback::error(MSG_PASSWORDS_MISMATCH)
    }
}

#[derive(Debug)]
pub struct PasswordConfirmWatcher {
    page: SharedPage,
    password: NodeId,
    confirm: NodeId,
}

impl PasswordConfirmWatcher {
    /// 兩個密碼欄位都存在時才會掛上
    pub fn attach(page: &SharedPage) -> Result<Option<Self>> {
        let guard = lock_page(page)?;
        let password = guard.get_element_by_id(PASSWORD_INPUT_ID);
        let confirm = guard.get_element_by_id(CONFIRM_PASSWORD_INPUT_ID);
        drop(guard);

        Ok(match (password, confirm) {
            (Some(password), Some(confirm)) => Some(Self {
                page: page.clone(),
                password,
                confirm,
            }),
            _ => None,
        })
    }

    pub fn input(&self) -> NodeId {
        self.confirm
    }

    /// Compares against the password's current value on every confirmation change.
    pub fn on_input(&self) -> Result<()> {
        let mut page = lock_page(&self.page)?;
        let feedback = confirmation_feedback(page.value(self.password), page.value(self.confirm));
        show_feedback(&mut page, self.confirm, CONFIRM_PASSWORD_FEEDBACK_ID, &feedback)
    }
}
