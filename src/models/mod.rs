//! Entity models for the Freshservice API.
//!
//! Entities are immutable snapshots decoded from API responses with
//! `from_value`. Each one exposes read accessors and a canonical
//! `to_array`/`to_json` serialization.

mod attachment;
mod common;
mod conversation;
mod department;
mod enums;
#[cfg(test)]
mod fixtures;
mod requester;
mod ticket;

pub use attachment::*;
pub use conversation::*;
pub use department::*;
pub use enums::*;
pub use requester::*;
pub use ticket::*;
