use crate::builder::Selector;

/// Specificity triple: (ids, classes + attributes + pseudo-classes,
/// elements + pseudo-elements).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Specificity(pub u16, pub u16, pub u16);

impl Selector {
    /// Count fragment weights per the CSS specificity rules.
    pub fn specificity(&self) -> Specificity {
        let ids = u16::from(self.id.is_some());
        let classes =
            (self.classes.len() + self.attributes.len() + self.pseudo_classes.len()) as u16;
        let elements = u16::from(self.element.is_some()) + u16::from(self.pseudo_element.is_some());
        Specificity(ids, classes, elements)
    }
}
