//! Core processing building blocks: source lookup, Lanczos resize, and PNG save
//! helpers. These are internal primitives consumed by the high-level `api` module.
pub mod locate;
pub mod resize;
pub mod save;
