//! Common types and traits shared by aggregates

pub mod aggregate_id;
pub mod id_generator;

// Re-exports
pub use aggregate_id::AggregateId;
pub use id_generator::{IdGenerator, SequentialIdGenerator, UuidV4Generator};
