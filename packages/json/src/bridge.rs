use crate::error::BridgeResult;
use crate::shape::Shape;
use serde::Serialize;
use tracing::{debug, instrument};

/// Maps a parsed [`Shape`] onto a concrete type.
///
/// The implementing type is the template: its method set is what the parsed
/// value gains. Implementations take whatever fields the shape holds and are
/// infallible; nothing checks the shape against what those methods will
/// later need.
pub trait FromShape {
    fn from_shape(shape: &Shape) -> Self;
}

/// Encode a value as canonical JSON text.
pub fn serialize<T: Serialize>(value: &T) -> BridgeResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// Encode a value as human-readable JSON text.
pub fn serialize_pretty<T: Serialize>(value: &T) -> BridgeResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Parse text into a plain structural shape.
///
/// Fails only on malformed JSON. Any well-formed document is accepted,
/// whatever its fields.
#[instrument(skip(text), fields(len = text.len()))]
pub fn parse(text: &str) -> BridgeResult<Shape> {
    let value = serde_json::from_str(text)?;
    Ok(Shape::new(value))
}

/// Parse text and bind the result to `T`'s capability set.
pub fn deserialize<T: FromShape>(text: &str) -> BridgeResult<T> {
    let shape = parse(text)?;
    debug!(template = std::any::type_name::<T>(), "Binding parsed shape");
    Ok(T::from_shape(&shape))
}
