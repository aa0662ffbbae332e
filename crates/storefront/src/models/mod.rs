//! Session-backed visitor state.

pub mod session;
