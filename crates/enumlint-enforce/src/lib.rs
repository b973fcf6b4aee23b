//! Enforcement for enumlint.
//!
//! Runs the `Rails/EnumNegative` rule over parsed Ruby files: enum values
//! named `not_*` collide with the negated scopes Rails 6+ generates for every
//! enum value, so they are reported and, where the value is an array list,
//! rewritten into an explicit index hash.

pub mod correction;
pub mod engine;
pub mod inspector;
pub mod render;
pub mod sink;
pub mod types;
