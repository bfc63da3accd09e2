//! PurdueLink Export Layer
//!
//! Serializes a contact collection to CSV: thirteen fixed columns, a
//! header row, RFC-4180-style quoting. The output is a complete
//! document ready to be offered as a file download; how the download is
//! triggered is the host surface's business.

#![warn(missing_docs)]

mod csv;

pub use csv::{export_csv, EXPORT_FILE_NAME, HEADERS};
