//! Configuration Module
//!
//! Settings schema, credential resolution, and the reading passage source.

mod credentials;
mod reading;
mod settings;

pub use credentials::*;
pub use reading::*;
pub use settings::*;
