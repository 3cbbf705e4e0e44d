//! Logistics editing events and the reconciliation state machine

mod event;
mod reconciler;

pub use event::*;
pub use reconciler::*;
