//! Request payload builders.
//!
//! Builders collect fields through `with_*` methods that consume and return
//! the builder. Mandatory-field checks run when the payload is serialized
//! (`to_array`/`to_json`), not while fields are being set. The one
//! exception is the enumerated ticket fields, which are checked as soon as
//! they are set.

mod department;
mod requester;
mod ticket;

pub use department::*;
pub use requester::*;
pub use ticket::*;

/// True when a text field is unset or empty.
fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

/// True when an ID field is unset or zero.
fn is_unset_id(value: Option<u64>) -> bool {
    value.is_none_or(|id| id == 0)
}
