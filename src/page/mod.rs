pub mod document;
pub mod feedback;

pub use document::{lock_page, Element, NodeId, Page, SharedPage, AGREE_TERMS_ID};
pub use feedback::{clear_feedback, ensure_feedback, show_feedback};
