//! Tolerant parser for delimited catalog text.
//!
//! Layout: a header row, then one product per line:
//! `name,url,type,gender,imageId`
//!
//! Rows exported from spreadsheets sometimes come out tab separated, so
//! a row that falls short of the header's column count under commas is
//! split again on tabs. Rows that are still short are skipped, never
//! padded, and never reported as an error.

use crate::types::Product;
use tracing::debug;

/// Positions every product needs: name, url, type, gender.
/// The fifth position (imageId) is optional.
pub const REQUIRED_FIELDS: usize = 4;

/// Number of comma separated columns declared by the header line
pub fn header_width(header: &str) -> usize {
    header.split(',').count()
}

/// Split a data row into fields.
///
/// Tries commas first, then tabs when the comma split yields fewer than
/// `width` fields. Returns `None` if neither split is wide enough.
///
/// Example: `"a\tb\tc\td\te"` with width 5 -> `Some(["a", "b", "c", "d", "e"])`
pub fn split_row(line: &str, width: usize) -> Option<Vec<&str>> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() >= width {
        return Some(fields);
    }

    let fields: Vec<&str> = line.split('\t').collect();
    (fields.len() >= width).then_some(fields)
}

/// Parse raw catalog text into products, preserving row order.
///
/// Never fails. An input with no usable rows yields an empty Vec; deciding
/// what that means is up to the caller.
pub fn parse(raw: &str) -> Vec<Product> {
    let mut lines = raw.split('\n');

    // `split` always yields at least one item, even for ""
    let header = lines.next().unwrap_or_default();
    let width = header_width(header).max(REQUIRED_FIELDS);

    let mut products = Vec::new();
    let mut dropped = 0usize;

    for (idx, line) in lines.enumerate() {
        // Header is line 1
        let line_no = idx + 2;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() {
            continue;
        }

        let Some(fields) = split_row(line_trimmed, width) else {
            debug!(
                line = line_no,
                expected = width,
                found = line_trimmed.split(',').count(),
                "Skipping row with too few fields"
            );
            dropped += 1;
            continue;
        };

        let product = Product::from_fields(
            fields[0],
            fields[1],
            fields[2],
            fields[3],
            fields.get(4).copied(),
        );

        if product.name.is_empty() {
            debug!(line = line_no, "Skipping row with empty name");
            dropped += 1;
            continue;
        }

        products.push(product);
    }

    debug!(kept = products.len(), dropped, "Parsed catalog text");
    products
}
