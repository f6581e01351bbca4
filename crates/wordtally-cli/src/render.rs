use std::io::Write;

use wordtally::FrequencyTable;

/// Output formats for a frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RenderFormat {
    /// A numbered, aligned listing.
    Text,

    /// A JSON array of `{"word", "count"}` objects.
    Json,
}

/// Display orders for a frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortOrder {
    /// Descending count, ties by word.
    Count,

    /// Ascending word.
    Word,

    /// Whatever order the table iterates in.
    None,
}

#[derive(serde::Serialize)]
struct WordCount<'a> {
    word: &'a str,
    count: u64,
}

fn ordered_entries(
    table: &FrequencyTable<String, u64>,
    sort: SortOrder,
) -> Vec<(String, u64)> {
    match sort {
        SortOrder::Count => table.to_sorted_vec(),
        SortOrder::Word => {
            let mut entries: Vec<(String, u64)> =
                table.iter().map(|(w, &c)| (w.clone(), c)).collect();
            entries.sort();
            entries
        }
        SortOrder::None => table.iter().map(|(w, &c)| (w.clone(), c)).collect(),
    }
}

/// Write `table` to `writer`.
pub fn render_table(
    writer: &mut dyn Write,
    table: &FrequencyTable<String, u64>,
    format: RenderFormat,
    sort: SortOrder,
) -> Result<(), Box<dyn std::error::Error>> {
    let entries = ordered_entries(table, sort);

    match format {
        RenderFormat::Text => {
            writeln!(writer, "=== Word Frequency Count ===")?;
            for (idx, (word, count)) in entries.iter().enumerate() {
                writeln!(writer, "{:<3}. {word:<20} - {count}", idx + 1)?;
            }
        }
        RenderFormat::Json => {
            let rows: Vec<WordCount<'_>> = entries
                .iter()
                .map(|(word, count)| WordCount {
                    word,
                    count: *count,
                })
                .collect();
            serde_json::to_writer_pretty(&mut *writer, &rows)?;
            writeln!(writer)?;
        }
    }

    writer.flush()?;
    Ok(())
}
