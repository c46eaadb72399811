use std::fmt;

/// Combinators joining two selectors in a compound expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    Descendant,
    Child,
    AdjacentSibling,
    GeneralSibling,
}

impl Combinator {
    /// The CSS token for this combinator.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::AdjacentSibling => "+",
            Self::GeneralSibling => "~",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
