//! Command implementations for dijtrace

pub mod dispatch;
mod export;
mod helpers;
mod path;
mod run;
