use awsipmatch::SearchResults;
use comfy_table::presets::NOTHING;
use comfy_table::{Cell, Table};
use std::io::{self, Write};

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

const HEADER: [&str; 5] = ["IP", "PREFIX", "REGION", "SERVICE", "BORDER GROUP"];
const NOT_FOUND: &str = "-";

/*--------------------------------------------------------------------------------------
  Search Results Table
--------------------------------------------------------------------------------------*/

/// Build the results table: one row per grouped match, or a single placeholder row for an
/// address without matches.
pub fn results_table(search_results: &SearchResults) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(HEADER.to_vec());

    for address_results in &search_results.addresses {
        let address = address_results.address.to_string();

        if address_results.rows.is_empty() {
            table.add_row(vec![
                Cell::new(&address),
                Cell::new(NOT_FOUND),
                Cell::new(NOT_FOUND),
                Cell::new(NOT_FOUND),
                Cell::new(NOT_FOUND),
            ]);
            continue;
        }

        for row in &address_results.rows {
            table.add_row(vec![
                Cell::new(&address),
                Cell::new(&row.prefix),
                Cell::new(&row.region),
                Cell::new(&row.services),
                Cell::new(&row.network_border_group),
            ]);
        }
    }

    // Left-aligned columns separated by a two-space gutter
    for column in table.column_iter_mut() {
        column.set_padding((0, 2));
    }

    table
}

/// Write the results table, one line per row, without trailing whitespace.
pub fn print_results<W: Write>(search_results: &SearchResults, writer: &mut W) -> io::Result<()> {
    for line in results_table(search_results).lines() {
        writeln!(writer, "{}", line.trim_end())?;
    }
    writer.flush()
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
