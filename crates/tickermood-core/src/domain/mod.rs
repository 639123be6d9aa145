//! # Domain Models
//!
//! Canonical types shared by every stage of the mention pipeline.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated, uppercase ticker symbol |
//! | [`Instrument`] | Symbol plus display name |
//! | [`InstrumentCatalog`] | Ordered instruments with unique symbols |
//! | [`RawTextRecord`] | Post title, optional body and comments |
//! | [`UtcDateTime`] | UTC timestamp |
//!
//! All types validate at construction; a catalog with duplicate symbols
//! cannot be built.

mod instrument;
mod record;
mod symbol;
mod timestamp;

pub use instrument::{Instrument, InstrumentCatalog};
pub use record::RawTextRecord;
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
