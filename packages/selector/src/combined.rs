use crate::builder::ToCss;
use std::fmt;
use tracing::debug;

/// A terminal combined selector: two rendered selectors joined by a
/// combinator token. It renders to its stored text and takes no further
/// fragment appends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedSelector {
    css: String,
}

/// Join two selectors with a combinator token, one space on each side.
///
/// The token is taken verbatim; it is not checked against the fixed
/// combinator set. Operands may themselves be combined selectors, which
/// flattens nested combinations left to right.
pub fn combine<L: ToCss, R: ToCss>(left: &L, token: &str, right: &R) -> CombinedSelector {
    let css = format!("{} {} {}", left.to_css(), token, right.to_css());
    debug!(%css, "Combined selectors");
    CombinedSelector { css }
}

impl ToCss for CombinedSelector {
    fn to_css(&self) -> String {
        self.css.clone()
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css)
    }
}
