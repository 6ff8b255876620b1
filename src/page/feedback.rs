use crate::domain::model::Feedback;
use crate::page::document::{Element, NodeId, Page};
use crate::utils::error::{Result, ValidatorError};

pub const HINT_CLASS: &str = "form-text";

/// Returns the feedback element `feedback_id`, creating it as the last child of
/// `input`'s parent on first use.
pub fn ensure_feedback(page: &mut Page, input: NodeId, feedback_id: &str) -> Result<NodeId> {
    if let Some(existing) = page.get_element_by_id(feedback_id) {
        return Ok(existing);
    }

    let parent = page
        .element(input)
        .parent()
        .ok_or_else(|| ValidatorError::DetachedElement {
            id: page.element(input).id.clone().unwrap_or_default(),
        })?;

    tracing::debug!("Creating feedback element '{}'", feedback_id);
    let node = page.append(
        parent,
        Element::new("div")
            .with_id(feedback_id)
            .with_class(HINT_CLASS),
    );
    Ok(node)
}

pub fn show_feedback(page: &mut Page, input: NodeId, feedback_id: &str, feedback: &Feedback) -> Result<()> {
    let node = ensure_feedback(page, input, feedback_id)?;
    let el = page.element_mut(node);
    el.text = feedback.text.clone();
    el.color = Some(feedback.tone.color().to_string());
    Ok(())
}

/// Empties the text; colour is left as is.
pub fn clear_feedback(page: &mut Page, input: NodeId, feedback_id: &str) -> Result<()> {
    let node = ensure_feedback(page, input, feedback_id)?;
    page.element_mut(node).text.clear();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Tone, USERNAME_FEEDBACK_ID};

    #[test]
    fn test_ensure_feedback_is_idempotent() {
        let mut page = Page::registration_form("tok");
        let input = page.get_element_by_id("username").unwrap();
        let group = page.element(input).parent().unwrap();
        let before = page.element(group).children().len();

        let first = ensure_feedback(&mut page, input, USERNAME_FEEDBACK_ID).unwrap();
        let second = ensure_feedback(&mut page, input, USERNAME_FEEDBACK_ID).unwrap();

        assert_eq!(first, second);
        assert_eq!(page.element(group).children().len(), before + 1);
        assert_eq!(page.element(group).children().last(), Some(&first));
        assert_eq!(page.element(first).class.as_deref(), Some(HINT_CLASS));
    }

    #[test]
    fn test_ensure_feedback_reuses_existing_node_anywhere_on_page() {
        let mut page = Page::registration_form("tok");
        let root = page.root();
        let existing = page.append(root, Element::new("small").with_id("email-feedback"));
        let input = page.get_element_by_id("email").unwrap();

        let node = ensure_feedback(&mut page, input, "email-feedback").unwrap();
        assert_eq!(node, existing);
    }

    #[test]
    fn test_ensure_feedback_detached_input() {
        let mut page = Page::new();
        let input = page.create_element(Element::new("input").with_id("orphan"));

        let err = ensure_feedback(&mut page, input, "orphan-feedback").unwrap_err();
        assert!(matches!(err, ValidatorError::DetachedElement { ref id } if id == "orphan"));
    }

    #[test]
    fn test_show_then_clear() {
        let mut page = Page::registration_form("tok");
        let input = page.get_element_by_id("email").unwrap();

        show_feedback(&mut page, input, "email-feedback", &Feedback::error("bad")).unwrap();
        assert_eq!(page.feedback_of("email-feedback"), Some(("bad", Some(Tone::Error.color()))));

        clear_feedback(&mut page, input, "email-feedback").unwrap();
        assert_eq!(page.feedback_of("email-feedback").unwrap().0, "");
    }
}
