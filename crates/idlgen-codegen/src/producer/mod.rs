//! Producers for each kind of model entity.
//!
//! Each producer implements the [`Producer`](crate::traits::Producer) trait.

pub mod enums;

pub use enums::{EnumsProducer, ReturnTypePolicy};
