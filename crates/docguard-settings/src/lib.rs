//! Configuration variable resolution.
//!
//! This crate is intentionally IO-free: variables are read through a caller-supplied
//! lookup so tests never touch the process environment.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{Overrides, ResolvedSettings};
pub use resolve::{
    resolve_settings, ENV_GITHUB_TOKEN, ENV_MANIFEST_PATH, ENV_MANIFEST_TOKEN, ENV_MANIFEST_URL,
    TOKEN_VARS,
};
