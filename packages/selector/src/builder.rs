use crate::error::{SelectorError, SelectorResult};
use crate::fragment::FragmentKind;
use std::fmt;

/// Renders a selector to its CSS text form.
pub trait ToCss {
    fn to_css(&self) -> String;
}

/// A compound selector under construction.
///
/// Start from one of the fragment entry points ([`element`], [`id`],
/// [`class`], [`attr`], [`pseudo_class`], [`pseudo_element`]), then chain
/// further fragments. Appends consume the builder and return a new one, so
/// chains read `element("a").class("icon")?.pseudo_class("hover")?`.
///
/// Classes, attributes, and pseudo-classes accumulate in insertion order;
/// element, id, and pseudo-element are set at most once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selector {
    pub(crate) element: Option<String>,
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attributes: Vec<String>,
    pub(crate) pseudo_classes: Vec<String>,
    pub(crate) pseudo_element: Option<String>,
    /// Highest-precedence fragment kind appended so far.
    highest: Option<FragmentKind>,
}

/// Start a selector with an element (tag name) fragment.
pub fn element(name: impl Into<String>) -> Selector {
    Selector {
        element: Some(name.into()),
        highest: Some(FragmentKind::Element),
        ..Selector::default()
    }
}

/// Start a selector with an id fragment. The value is bare, without `#`.
pub fn id(name: impl Into<String>) -> Selector {
    Selector {
        id: Some(name.into()),
        highest: Some(FragmentKind::Id),
        ..Selector::default()
    }
}

/// Start a selector with a class fragment. The value is bare, without `.`.
pub fn class(name: impl Into<String>) -> Selector {
    Selector {
        classes: vec![name.into()],
        highest: Some(FragmentKind::Class),
        ..Selector::default()
    }
}

/// Start a selector with an attribute expression, without the brackets.
pub fn attr(expr: impl Into<String>) -> Selector {
    Selector {
        attributes: vec![expr.into()],
        highest: Some(FragmentKind::Attribute),
        ..Selector::default()
    }
}

/// Start a selector with a pseudo-class fragment, without the `:`.
pub fn pseudo_class(name: impl Into<String>) -> Selector {
    Selector {
        pseudo_classes: vec![name.into()],
        highest: Some(FragmentKind::PseudoClass),
        ..Selector::default()
    }
}

/// Start a selector with a pseudo-element fragment, without the `::`.
pub fn pseudo_element(name: impl Into<String>) -> Selector {
    Selector {
        pseudo_element: Some(name.into()),
        highest: Some(FragmentKind::PseudoElement),
        ..Selector::default()
    }
}

impl Selector {
    /// Append an element fragment.
    pub fn element(mut self, name: impl Into<String>) -> SelectorResult<Self> {
        self.check(FragmentKind::Element)?;
        self.element = Some(name.into());
        self.highest = Some(FragmentKind::Element);
        Ok(self)
    }

    /// Append an id fragment.
    pub fn id(mut self, name: impl Into<String>) -> SelectorResult<Self> {
        self.check(FragmentKind::Id)?;
        self.id = Some(name.into());
        self.highest = Some(FragmentKind::Id);
        Ok(self)
    }

    /// Append a class fragment.
    pub fn class(mut self, name: impl Into<String>) -> SelectorResult<Self> {
        self.check(FragmentKind::Class)?;
        self.classes.push(name.into());
        self.highest = Some(FragmentKind::Class);
        Ok(self)
    }

    /// Append an attribute expression fragment.
    pub fn attr(mut self, expr: impl Into<String>) -> SelectorResult<Self> {
        self.check(FragmentKind::Attribute)?;
        self.attributes.push(expr.into());
        self.highest = Some(FragmentKind::Attribute);
        Ok(self)
    }

    /// Append a pseudo-class fragment.
    pub fn pseudo_class(mut self, name: impl Into<String>) -> SelectorResult<Self> {
        self.check(FragmentKind::PseudoClass)?;
        self.pseudo_classes.push(name.into());
        self.highest = Some(FragmentKind::PseudoClass);
        Ok(self)
    }

    /// Append a pseudo-element fragment.
    pub fn pseudo_element(mut self, name: impl Into<String>) -> SelectorResult<Self> {
        self.check(FragmentKind::PseudoElement)?;
        self.pseudo_element = Some(name.into());
        self.highest = Some(FragmentKind::PseudoElement);
        Ok(self)
    }

    /// Singularity first, then ordering.
    fn check(&self, kind: FragmentKind) -> SelectorResult<()> {
        if kind.is_singular() && self.is_set(kind) {
            return Err(SelectorError::DuplicateFragment { kind });
        }
        if let Some(seen) = self.highest {
            if seen > kind {
                return Err(SelectorError::OutOfOrder { kind, seen });
            }
        }
        Ok(())
    }

    fn is_set(&self, kind: FragmentKind) -> bool {
        match kind {
            FragmentKind::Element => self.element.is_some(),
            FragmentKind::Id => self.id.is_some(),
            FragmentKind::PseudoElement => self.pseudo_element.is_some(),
            FragmentKind::Class | FragmentKind::Attribute | FragmentKind::PseudoClass => false,
        }
    }
}

impl ToCss for Selector {
    fn to_css(&self) -> String {
        let mut css = String::new();

        if let Some(element) = &self.element {
            css.push_str(element);
        }
        if let Some(id) = &self.id {
            css.push('#');
            css.push_str(id);
        }
        for class in &self.classes {
            css.push('.');
            css.push_str(class);
        }
        for attribute in &self.attributes {
            css.push('[');
            css.push_str(attribute);
            css.push(']');
        }
        for pseudo_class in &self.pseudo_classes {
            css.push(':');
            css.push_str(pseudo_class);
        }
        if let Some(pseudo_element) = &self.pseudo_element {
            css.push_str("::");
            css.push_str(pseudo_element);
        }

        css
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
