use std::fmt;

/// The six fragment kinds, declared in their required append order.
///
/// The derived ordering is the precedence table: a fragment may only be
/// appended while no later-ordered kind is present on the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FragmentKind {
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
}

impl FragmentKind {
    /// Kinds that may appear at most once per selector.
    pub fn is_singular(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Human label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Id => "id",
            Self::Class => "class",
            Self::Attribute => "attribute",
            Self::PseudoClass => "pseudo-class",
            Self::PseudoElement => "pseudo-element",
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
