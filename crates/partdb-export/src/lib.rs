//! # partdb-export
//!
//! Turns fetched inventory records into a correctly-escaped CSV byte
//! stream: a fixed header row, one data row per record in the order
//! received, and a synthesized `Link` column pointing back into the
//! Part-DB web UI. The stream is emitted chunk-by-chunk so a client
//! disconnect stops serialization instead of finishing a file nobody
//! reads.
//!
//! Output is UTF-8 by default; a legacy single-byte Western-European
//! encoding can be selected at configuration time for consumers such
//! as old spreadsheet imports.

pub mod columns;
pub mod encoding;
pub mod error;
pub mod stream;

pub use columns::ExportRecord;
pub use encoding::OutputEncoding;
pub use error::ExportError;
pub use stream::csv_stream;
