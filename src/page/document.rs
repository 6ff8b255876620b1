use crate::utils::error::{Result, ValidatorError};
use std::sync::{Arc, Mutex, MutexGuard};

/// Handle to an element inside a [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub name: Option<String>,
    pub class: Option<String>,
    pub input_type: Option<String>,
    pub value: String,
    pub text: String,
    pub color: Option<String>,
    pub checked: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    pub fn with_type(mut self, input_type: &str) -> Self {
        self.input_type = Some(input_type.to_string());
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// In-memory element tree of one loaded page.
///
/// Elements are never removed; a page lives until it is dropped.
#[derive(Debug, Clone)]
pub struct Page {
    nodes: Vec<Element>,
}

pub const AGREE_TERMS_ID: &str = "agree_terms";

pub type SharedPage = Arc<Mutex<Page>>;

pub fn lock_page(page: &SharedPage) -> Result<MutexGuard<'_, Page>> {
    page.lock().map_err(|e| ValidatorError::PageError {
        message: e.to_string(),
    })
}

impl Page {
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new("body")],
        }
    }

    /// Registration page with username, email, password and confirmation inputs,
    /// each inside its own `div.form-group`, the terms checkbox and the hidden
    /// anti-forgery field.
    pub fn registration_form(csrf_token: &str) -> Self {
        let mut page = Self::new();
        let form = page.append(page.root(), Element::new("form").with_id("register-form"));

        page.append(
            form,
            Element::new("input")
                .with_type("hidden")
                .with_name("csrf_token")
                .with_value(csrf_token),
        );

        for (id, input_type) in [
            ("username", "text"),
            ("email", "email"),
            ("password", "password"),
            ("confirm_password", "password"),
        ] {
            let group = page.append(form, Element::new("div").with_class("form-group"));
            page.append(
                group,
                Element::new("input")
                    .with_id(id)
                    .with_name(id)
                    .with_type(input_type),
            );
        }

        let terms = page.append(form, Element::new("div").with_class("form-check"));
        page.append(
            terms,
            Element::new("input")
                .with_id(AGREE_TERMS_ID)
                .with_name(AGREE_TERMS_ID)
                .with_type("checkbox"),
        );

        page
    }

    pub fn into_shared(self) -> SharedPage {
        Arc::new(Mutex::new(self))
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn create_element(&mut self, element: Element) -> NodeId {
        self.nodes.push(Element {
            parent: None,
            children: Vec::new(),
            ..element
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Moves `child` to the end of `parent`'s children.
    ///
    /// Fails when `parent` is `child` itself or one of its descendants.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let mut current = Some(parent);
        while let Some(node) = current {
            if node == child {
                return Err(ValidatorError::PageError {
                    message: "cannot append an element under itself or its descendant".to_string(),
                });
            }
            current = self.nodes[node.0].parent;
        }

        self.link(parent, child);
        Ok(())
    }

    fn link(&mut self, parent: NodeId, child: NodeId) {
        if let Some(old) = self.nodes[child.0].parent.take() {
            self.nodes[old.0].children.retain(|&c| c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    pub fn append(&mut self, parent: NodeId, element: Element) -> NodeId {
        let node = self.create_element(element);
        self.link(parent, node);
        node
    }

    pub fn element(&self, node: NodeId) -> &Element {
        &self.nodes[node.0]
    }

    pub fn element_mut(&mut self, node: NodeId) -> &mut Element {
        &mut self.nodes[node.0]
    }

    fn is_attached(&self, node: NodeId) -> bool {
        let mut current = node;
        loop {
            if current == self.root() {
                return true;
            }
            match self.nodes[current.0].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// First attached element carrying `id`, in creation order.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        (0..self.nodes.len())
            .map(NodeId)
            .find(|&n| self.nodes[n.0].id.as_deref() == Some(id) && self.is_attached(n))
    }

    pub fn get_element_by_name(&self, name: &str) -> Option<NodeId> {
        (0..self.nodes.len())
            .map(NodeId)
            .find(|&n| self.nodes[n.0].name.as_deref() == Some(name) && self.is_attached(n))
    }

    pub fn value(&self, node: NodeId) -> &str {
        &self.nodes[node.0].value
    }

    pub fn set_value(&mut self, node: NodeId, value: &str) {
        self.nodes[node.0].value = value.to_string();
    }

    pub fn is_checked(&self, node: NodeId) -> bool {
        self.nodes[node.0].checked
    }

    pub fn set_checked(&mut self, node: NodeId, checked: bool) {
        self.nodes[node.0].checked = checked;
    }

    /// Text and colour of the element with `id`, if present.
    pub fn feedback_of(&self, id: &str) -> Option<(&str, Option<&str>)> {
        self.get_element_by_id(id).map(|n| {
            let el = &self.nodes[n.0];
            (el.text.as_str(), el.color.as_deref())
        })
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
