//! In-memory engine for the AquaDesk back office: one store, five
//! departments (telesales, warehouse, reception, HR, CCTV), and the
//! dispatch logic that routes maintenance leads to the nearest free
//! technician.
//!
//! Everything is synchronous and single-threaded. Workflows take
//! `&mut DeskStore`, validate at the boundary, mutate, and append to the
//! operations log; nothing is persisted.

pub mod cctv;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod geo;
pub mod hr;
pub mod reception;
pub mod seed;
pub mod store;
pub mod telesales;
pub mod types;
pub mod warehouse;

pub use error::{DeskError, DeskResult};
pub use store::DeskStore;
