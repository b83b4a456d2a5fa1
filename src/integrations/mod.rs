//! External service integrations.

pub mod webhook {
    pub use crate::webhook::*;
}
