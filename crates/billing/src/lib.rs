//! Theater billing domain module.
//!
//! This crate prices performances of a play catalogue, awards volume credits
//! and renders customer statements, implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod config;
pub mod invoice;
pub mod money;
pub mod play;
pub mod pricing;
pub mod statement;

pub use config::{StatementConfig, StatementLocale};
pub use invoice::{Invoice, Performance};
pub use money::usd;
pub use play::{Genre, Play, PlayCatalogue, PlayId};
pub use pricing::{amount_for, volume_credits_for};
pub use statement::{
    Statement, StatementLine, build_statement, play_for, render_plain_text, statement,
    statement_with,
};
