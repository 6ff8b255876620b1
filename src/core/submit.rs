use crate::core::email::{is_valid_email, EMAIL_INPUT_ID};
use crate::core::password::{CONFIRM_PASSWORD_INPUT_ID, PASSWORD_INPUT_ID};
use crate::core::username::USERNAME_INPUT_ID;
use crate::domain::model::FieldIssue;
use crate::page::{Page, AGREE_TERMS_ID};

pub const USERNAME_MIN_LEN: usize = 4;
pub const USERNAME_MAX_LEN: usize = 80;
pub const EMAIL_MAX_LEN: usize = 120;
pub const PASSWORD_MIN_LEN: usize = 8;

const MSG_REQUIRED: &str = "This field is required.";
const MSG_AGREE_TERMS: &str = "You must agree to the terms and conditions";

/// Whitespace-only text counts as missing.
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Full registration rules, run once when the form is submitted.
///
/// Inputs missing from the page are skipped. At most one issue per field, in
/// page order. Lengths count the raw value, surrounding whitespace included.
pub fn validate_registration(page: &Page) -> Vec<FieldIssue> {
    let mut issues = Vec::new();
    let value = |id: &str| page.get_element_by_id(id).map(|n| page.value(n).to_string());

    if let Some(username) = value(USERNAME_INPUT_ID) {
        let len = username.chars().count();
        if is_blank(&username) {
            issues.push(FieldIssue::new(USERNAME_INPUT_ID, MSG_REQUIRED));
        } else if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
            issues.push(FieldIssue::new(
                USERNAME_INPUT_ID,
                format!(
                    "Field must be between {} and {} characters long.",
                    USERNAME_MIN_LEN, USERNAME_MAX_LEN
                ),
            ));
        }
    }

    if let Some(email) = value(EMAIL_INPUT_ID) {
        if is_blank(&email) {
            issues.push(FieldIssue::new(EMAIL_INPUT_ID, MSG_REQUIRED));
        } else if !is_valid_email(&email) {
            issues.push(FieldIssue::new(EMAIL_INPUT_ID, "Invalid email address."));
        } else if email.chars().count() > EMAIL_MAX_LEN {
            issues.push(FieldIssue::new(
                EMAIL_INPUT_ID,
                format!("Field cannot be longer than {} characters.", EMAIL_MAX_LEN),
            ));
        }
    }

    let password = value(PASSWORD_INPUT_ID);
    if let Some(password) = &password {
        if is_blank(password) {
            issues.push(FieldIssue::new(PASSWORD_INPUT_ID, MSG_REQUIRED));
        } else if password.chars().count() < PASSWORD_MIN_LEN {
            issues.push(FieldIssue::new(
                PASSWORD_INPUT_ID,
                format!("Password must be at least {} characters long", PASSWORD_MIN_LEN),
            ));
        }
    }

    if let Some(confirm) = value(CONFIRM_PASSWORD_INPUT_ID) {
        if is_blank(&confirm) {
            issues.push(FieldIssue::new(CONFIRM_PASSWORD_INPUT_ID, MSG_REQUIRED));
        } else if password.as_deref().is_some_and(|p| p != confirm) {
            issues.push(FieldIssue::new(CONFIRM_PASSWORD_INPUT_ID, "Passwords must match"));
        }
    }

    if let Some(terms) = page.get_element_by_id(AGREE_TERMS_ID) {
        if !page.is_checked(terms) {
            issues.push(FieldIssue::new(AGREE_TERMS_ID, MSG_AGREE_TERMS));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Element;

    fn filled(username: &str, email: &str, password: &str, confirm: &str) -> Page {
        let mut page = Page::registration_form("tok");
        for (id, v) in [
            (USERNAME_INPUT_ID, username),
            (EMAIL_INPUT_ID, email),
            (PASSWORD_INPUT_ID, password),
            (CONFIRM_PASSWORD_INPUT_ID, confirm),
        ] {
            let node = page.get_element_by_id(id).unwrap();
            page.set_value(node, v);
        }
        let terms = page.get_element_by_id(AGREE_TERMS_ID).unwrap();
        page.set_checked(terms, true);
        page
    }

    fn fields(issues: &[FieldIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.field.as_str()).collect()
    }

    #[test]
    fn test_valid_registration() {
        let page = filled("alice", "alice@example.com", "Secret123", "Secret123");
        assert!(validate_registration(&page).is_empty());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let page = Page::registration_form("tok");
        let issues = validate_registration(&page);
        assert_eq!(
            fields(&issues),
            vec!["username", "email", "password", "confirm_password", "agree_terms"]
        );
        assert!(issues[..4].iter().all(|i| i.message == MSG_REQUIRED));
        assert_eq!(issues[4].message, MSG_AGREE_TERMS);
    }

    #[test]
    fn test_length_and_match_rules() {
        let long_email = format!("{}@example.com", "a".repeat(120));
        let page = filled("abc", &long_email, "short", "other");
        let issues = validate_registration(&page);

        assert_eq!(
            fields(&issues),
            vec!["username", "email", "password", "confirm_password"]
        );
        assert_eq!(issues[2].message, "Password must be at least 8 characters long");
        assert_eq!(issues[3].message, "Passwords must match");
    }

    #[test]
    fn test_whitespace_only_values_are_required() {
        let page = filled("   ", " ", "        ", "        ");
        let issues = validate_registration(&page);

        assert_eq!(
            fields(&issues),
            vec!["username", "email", "password", "confirm_password"]
        );
        assert!(issues.iter().all(|i| i.message == MSG_REQUIRED));
    }

    #[test]
    fn test_username_length_counts_surrounding_whitespace() {
        let page = filled("abc ", "abc@example.com", "Secret123", "Secret123");
        assert!(validate_registration(&page).is_empty());

        let too_long = format!("{} ", "a".repeat(USERNAME_MAX_LEN));
        let page = filled(&too_long, "abc@example.com", "Secret123", "Secret123");
        assert_eq!(fields(&validate_registration(&page)), vec!["username"]);
    }

    #[test]
    fn test_terms_checkbox() {
        let mut page = filled("alice", "alice@example.com", "Secret123", "Secret123");
        let terms = page.get_element_by_id(AGREE_TERMS_ID).unwrap();

        assert!(validate_registration(&page).is_empty());

        page.set_checked(terms, false);
        assert_eq!(
            validate_registration(&page),
            vec![FieldIssue::new(AGREE_TERMS_ID, MSG_AGREE_TERMS)]
        );
    }

    #[test]
    fn test_prechecked_terms_element() {
        let mut page = Page::new();
        let root = page.root();
        let group = page.append(root, Element::new("div"));
        page.append(
            group,
            Element::new("input")
                .with_id(AGREE_TERMS_ID)
                .with_type("checkbox")
                .with_checked(true),
        );
        assert!(validate_registration(&page).is_empty());
    }

    #[test]
    fn test_missing_inputs_are_skipped() {
        let page = Page::new();
        assert!(validate_registration(&page).is_empty());
    }
}
