use std::error::Error;

use scraper::Selector;

use crate::listing::Listing;
use crate::text_manipulators::extract_text;

/// Placeholder text the site puts in the sole data row of a page past the
/// end of the result set.
pub const NO_RECORDS_SENTINEL: &str = "No records available to match this query";

/// The data rows of one page, plus whether further pages should be fetched.
#[derive(Debug)]
pub struct ParsedPage {
    pub rows: Vec<Vec<String>>,
    pub has_more: bool,
}

/// Raised when a page contains no `table.engineTable` with the expected
/// caption at all. Distinct from the sentinel row: the sentinel means the
/// result set ran out, a missing table means the page is malformed, and
/// treating it as end-of-data would silently truncate the scrape.
#[derive(Debug)]
pub struct MissingTableError {
    caption: String,
}

impl std::fmt::Display for MissingTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "no engineTable with caption '{}' in page", self.caption)
    }
}
impl Error for MissingTableError {}

pub struct PageParser {
    listing: Listing,
}

impl PageParser {
    pub fn new(listing: Listing) -> Self {
        Self { listing }
    }

    /// Extracts the data rows of one result page. There are a few
    /// table.engineTable in the page; we want the one that carries the
    /// listing's caption, and within it the tr.data1 rows.
    pub fn parse(&self, html: &str) -> anyhow::Result<ParsedPage> {
        let table_selector = Selector::parse("table.engineTable").unwrap();
        let caption_selector = Selector::parse("caption").unwrap();
        let row_selector = Selector::parse("tr.data1").unwrap();
        let cell_selector = Selector::parse("td").unwrap();

        let document = scraper::Html::parse_document(html);
        for table in document.select(&table_selector) {
            let caption_matches = table
                .select(&caption_selector)
                .any(|caption| extract_text(caption).trim() == self.listing.caption());
            if !caption_matches {
                continue;
            }

            let rows: Vec<Vec<String>> = table
                .select(&row_selector)
                .map(|row| {
                    row.select(&cell_selector)
                        .map(|cell| extract_text(cell).trim().to_string())
                        .collect()
                })
                .collect();

            // A lone sentinel row means we've queried past the last page.
            if let Some(first_field) = rows.first().and_then(|row| row.first()) {
                if first_field.as_str() == NO_RECORDS_SENTINEL {
                    return Ok(ParsedPage {
                        rows: vec![],
                        has_more: false,
                    });
                }
            }

            return Ok(ParsedPage {
                rows,
                has_more: true,
            });
        }

        Err(MissingTableError {
            caption: self.listing.caption().to_string(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results_page(rows: &str) -> String {
        format!(
            r#"<html><body>
            <table class="engineTable"><caption>Some other table</caption>
              <tr class="data1"><td>decoy</td></tr>
            </table>
            <table class="engineTable"><caption>Match results</caption>
              <tr class="headlinks"><td>Team</td><td>Result</td></tr>
              {rows}
            </table>
            </body></html>"#
        )
    }

    #[test]
    fn extracts_data_rows_in_cell_order() {
        let html = results_page(
            r#"<tr class="data1"><td>Australia</td><td>won</td><td>45 runs</td></tr>
               <tr class="data1"><td>England</td><td>lost</td><td>45 runs</td></tr>"#,
        );
        let parsed = PageParser::new(Listing::MatchResults).parse(&html).unwrap();
        assert!(parsed.has_more);
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(parsed.rows[0], vec!["Australia", "won", "45 runs"]);
        assert_eq!(parsed.rows[1][0], "England");
    }

    #[test]
    fn sentinel_row_signals_no_more_pages() {
        let html = results_page(&format!(
            r#"<tr class="data1"><td>{NO_RECORDS_SENTINEL}</td></tr>"#
        ));
        let parsed = PageParser::new(Listing::MatchResults).parse(&html).unwrap();
        assert!(!parsed.has_more);
        assert!(parsed.rows.is_empty());
    }

    #[test]
    fn rows_outside_the_captioned_table_are_ignored() {
        let html = results_page(r#"<tr class="data1"><td>Australia</td></tr>"#);
        let parsed = PageParser::new(Listing::MatchResults).parse(&html).unwrap();
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rows[0][0], "Australia");
    }

    #[test]
    fn missing_caption_is_an_error() {
        let html = r#"<html><body>
            <table class="engineTable"><caption>Something else</caption>
              <tr class="data1"><td>Australia</td></tr>
            </table>
            </body></html>"#;
        let err = PageParser::new(Listing::MatchResults)
            .parse(html)
            .unwrap_err();
        assert!(err.to_string().contains("Match results"));
    }

    #[test]
    fn header_rows_without_data_class_are_skipped() {
        let html = results_page("");
        let parsed = PageParser::new(Listing::MatchResults).parse(&html).unwrap();
        assert!(parsed.rows.is_empty());
        assert!(parsed.has_more);
    }
}
