//! Raw data viewer: prints the filtered table a page at a time.

use std::io::{BufRead, Write};

use crate::console::{is_affirmative, is_decline, Console};
use crate::error::BikeshareResult;
use crate::types::{DataSet, Schema, Value};

/// A contiguous slice of rows, `start` being the position of the first one in the table.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    pub start: usize,
    pub rows: &'a [Vec<Value>],
}

impl Page<'_> {
    pub fn end(&self) -> usize {
        self.start + self.rows.len()
    }
}

/// Pages of at most `page_size` rows covering `data` exactly once, in order.
///
/// # Panics
///
/// Panics if `page_size == 0`.
pub fn pages(data: &DataSet, page_size: usize) -> impl Iterator<Item = Page<'_>> {
    assert!(page_size > 0, "page_size must be > 0");
    data.rows
        .chunks(page_size)
        .enumerate()
        .map(move |(i, rows)| Page {
            start: i * page_size,
            rows,
        })
}

/// Render a page as an aligned text table with a leading row-position column.
pub fn render_page(schema: &Schema, page: &Page<'_>) -> String {
    let headers: Vec<&str> = std::iter::once("").chain(schema.field_names()).collect();
    let cells: Vec<Vec<String>> = page
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            std::iter::once((page.start + i).to_string())
                .chain(row.iter().map(Value::to_string))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(c, h)| {
            cells
                .iter()
                .filter_map(|r| r.get(c))
                .map(String::len)
                .chain(std::iter::once(h.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = pad_line(headers.iter().copied(), &widths);
    for row in &cells {
        out.push('\n');
        out.push_str(&pad_line(row.iter().map(String::as_str), &widths));
    }
    out
}

fn pad_line<'a>(values: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    values
        .zip(widths.iter().copied())
        .map(|(v, w)| format!("{v:<w$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Offer the raw rows of `data`, `page_size` at a time.
///
/// Nothing is printed unless the first answer is affirmative. After every page except the last
/// the user is asked whether to continue; only "no" or end of input stops paging. Returns the
/// number of rows printed.
pub fn view_raw_data<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    data: &DataSet,
    page_size: usize,
) -> BikeshareResult<usize> {
    let wants = console.ask("Do you wish to access the raw data? Enter yes or no.")?;
    if !wants.as_deref().is_some_and(is_affirmative) {
        return Ok(0);
    }

    let total = data.row_count();
    let mut shown = 0;
    for page in pages(data, page_size) {
        console.say(&render_page(&data.schema, &page))?;
        shown = page.end();
        if shown >= total {
            break;
        }
        match console.ask("Do you want to see more raw data? Enter yes or no.")? {
            Some(answer) if !is_decline(&answer) => {}
            _ => break,
        }
    }
    log::debug!("raw data: showed {shown} of {total} rows");
    Ok(shown)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{pages, render_page, view_raw_data};
    use crate::console::Console;
    use crate::types::{DataSet, DataType, Field, Schema, Value};

    fn numbered(n: usize) -> DataSet {
        let schema = Schema::new(vec![
            Field::new("Start Station", DataType::Utf8),
            Field::new("Trip Duration", DataType::Float64),
        ]);
        let rows = (0..n)
            .map(|i| vec![Value::Utf8(format!("Station {i}")), Value::Float64(60.0 * i as f64)])
            .collect();
        DataSet::new(schema, rows)
    }

    fn run(data: &DataSet, script: &str) -> (usize, String) {
        let mut console = Console::new(script.as_bytes(), Vec::new(), Duration::ZERO);
        let shown = view_raw_data(&mut console, data, 5).unwrap();
        (shown, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn twelve_rows_page_as_five_five_two() {
        let data = numbered(12);
        let sizes: Vec<usize> = pages(&data, 5).map(|p| p.rows.len()).collect();
        assert_eq!(sizes, vec![5, 5, 2]);
        let starts: Vec<usize> = pages(&data, 5).map(|p| p.start).collect();
        assert_eq!(starts, vec![0, 5, 10]);
    }

    #[test]
    fn exhausting_the_table_stops_without_another_prompt() {
        let (shown, out) = run(&numbered(12), "yes\nyes\nyes\n");
        assert_eq!(shown, 12);
        assert_eq!(out.matches("see more raw data").count(), 2);
        assert!(out.contains("Station 11"));
        // Each row printed exactly once.
        assert_eq!(out.matches("Station 4 ").count(), 1);
    }

    #[test]
    fn declining_stops_after_current_page() {
        let (shown, out) = run(&numbered(12), "yes\nno\n");
        assert_eq!(shown, 5);
        assert!(out.contains("Station 4"));
        assert!(!out.contains("Station 5"));
    }

    #[test]
    fn small_table_prints_whole_without_more_prompt() {
        let (shown, out) = run(&numbered(3), "yes\n");
        assert_eq!(shown, 3);
        assert!(!out.contains("see more"));
    }

    #[test]
    fn negative_or_missing_answer_prints_nothing() {
        assert_eq!(run(&numbered(3), "no\n").0, 0);
        assert_eq!(run(&numbered(3), "").0, 0);
        assert_eq!(run(&numbered(0), "yes\n").0, 0);
    }

    #[test]
    fn render_aligns_columns_and_numbers_rows_from_page_start() {
        let data = numbered(7);
        let page = pages(&data, 5).nth(1).unwrap();
        let text = render_page(&data.schema, &page);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "   Start Station  Trip Duration");
        assert_eq!(lines[1], "5  Station 5      300.0");
        assert_eq!(lines[2], "6  Station 6      360.0");
    }

    #[test]
    fn anything_but_no_shows_the_next_page() {
        let (shown, out) = run(&numbered(12), "yes
y

No
");
        assert_eq!(shown, 12);
        assert!(out.contains("Station 9"));

        let (shown, _) = run(&numbered(12), "yes
y
 no 
");
        assert_eq!(shown, 10);
    }

    #[test]
    fn end_of_input_stops_paging() {
        assert_eq!(run(&numbered(12), "yes
").0, 5);
    }
}
