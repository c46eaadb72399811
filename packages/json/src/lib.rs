//! # JSON bridge
//!
//! Text encoding and decoding for plain data values, with an explicit
//! capability-binding step on the way back in.
//!
//! Decoding is split in two: `parse` turns text into a [`Shape`] (a plain
//! structural value, accepted as long as the text is well-formed JSON), and
//! [`FromShape`] maps that shape onto a concrete type. The mapping does not
//! cross-check the shape against what the type's methods need; a missing
//! field shows up later, when the bound value is used.

pub mod bridge;
pub mod error;
pub mod shape;


pub use bridge::{deserialize, parse, serialize, serialize_pretty, FromShape};
pub use error::{BridgeError, BridgeResult};
pub use shape::Shape;
