//! CSV rendering of a contact collection

use chrono::DateTime;
use purlink_domain::ContactRecord;

/// Suggested filename for the exported document
pub const EXPORT_FILE_NAME: &str = "purdue-link-contacts.csv";

/// Column headers, in the fixed export order
pub const HEADERS: [&str; 13] = [
    "Name",
    "Title",
    "Company",
    "Location",
    "Purdue Grad",
    "Graduation Year",
    "LinkedIn URL",
    "Connection Degree",
    "Profile Image URL",
    "Rating",
    "Tags",
    "Comments",
    "Date Added",
];

/// Render the collection as a complete CSV document
///
/// Header row first, one row per record in the given order, rows joined
/// with a single newline. Every cell goes through the quoting rule: a
/// value containing a comma, a double quote, or a newline is wrapped in
/// double quotes with embedded quotes doubled; anything else is emitted
/// bare.
pub fn export_csv(records: &[ContactRecord]) -> String {
    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(HEADERS.join(","));
    rows.extend(records.iter().map(render_row));
    rows.join("\n")
}

fn render_row(record: &ContactRecord) -> String {
    let tags: Vec<&str> = record.tags.iter().collect();
    let cells = [
        escape(&record.name),
        escape(&record.title),
        escape(&record.company),
        escape(&record.location),
        escape(if record.is_purdue_grad { "Yes" } else { "No" }),
        escape(&record.graduation_year),
        escape(&record.linkedin_url),
        escape(&record.connection_degree),
        escape(&record.profile_image_url),
        escape(&record.rating.to_string()),
        escape(&tags.join("; ")),
        escape(&record.comments),
        escape(&display_date(&record.date_added)),
    ];
    cells.join(",")
}

/// Quote a cell when it carries a comma, double quote, or newline
fn escape(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Human-readable form of the stored timestamp
///
/// Rendered in the fixed `M/D/YYYY, h:mm:ss AM` shape so exports are
/// identical across machines. A timestamp that does not parse is
/// emitted as stored.
fn display_date(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        Err(_) => iso.to_string(),
    }
}
