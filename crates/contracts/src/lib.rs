//! Shared data contracts and the pure dashboard core of ToyStore Manager.
//!
//! Everything in this crate is synchronous and free of I/O, so the same code
//! runs inside the wasm frontend and the mock API backend.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;
