//! The [`TestElement`] handed to runner notifications.

/// One test element (a class, or a method within a class) as seen by the
/// runner's lifecycle notifications.
///
/// The skip marker is resolved once, when the element is built, and carried
/// as a plain boolean; observers only ever read the flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestElement {
    /// Display label of the enclosing test class; may be empty.
    pub class_label: String,
    /// Display label of the test method; empty for class-level elements.
    pub method_label: String,
    /// Skip marker: when set, no notification for this element is recorded.
    pub skip: bool,
}

impl TestElement {
    /// A class-level element (no method label).
    pub fn class(class_label: impl Into<String>) -> Self {
        Self {
            class_label: class_label.into(),
            method_label: String::new(),
            skip: false,
        }
    }

    /// A method-level element.
    pub fn method(class_label: impl Into<String>, method_label: impl Into<String>) -> Self {
        Self {
            class_label: class_label.into(),
            method_label: method_label.into(),
            skip: false,
        }
    }

    /// Same element with the skip marker set.
    pub fn skipped(mut self) -> Self {
        self.skip = true;
        self
    }
}
