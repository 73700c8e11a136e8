/// Label-driven lookup over the parsed station page.
///
/// The NDBC status page is an irregular HTML table: measurement labels sit in
/// plain `<td>` cells ("Wave Height (WVHT):") with the value in the adjacent
/// cell, while visually similar cells wrap whole nested sub-tables of
/// descriptive text. The only reliable disambiguator observed is to demand
/// that a label cell serializes to a single line and that exactly one cell
/// matches the label pattern.
///
/// Match failures here are never fatal. Zero or multiple matches mean "metric
/// unavailable" and are reported to the caller as `None`; the count is logged
/// at debug level so `--verbose` surfaces which pattern misbehaved.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::logging;
use crate::model::NdbcError;

/// How the value text is located once a label has matched.
///
/// The mode is chosen by the caller per lookup; it is never auto-detected
/// from page structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMode {
    /// Match whole label cells, read the next sibling `<td>`. Used for the
    /// normalized wave/wind metrics.
    SiblingCell,
    /// Match a bare text node, read the node immediately following it in
    /// document order, with literal `<td>`/`</td>` markup stripped. Used for
    /// the raw swell inspection.
    NextNode,
}

/// A queryable station page.
pub struct StationPage {
    html: Html,
}

impl StationPage {
    pub fn parse(body: &str) -> Self {
        Self { html: Html::parse_document(body) }
    }

    /// Looks up the raw value text for a label pattern, or `None` when the
    /// label is absent, ambiguous, or has no value beside it.
    pub fn metric(&self, label_pattern: &str, mode: ExtractMode) -> Option<String> {
        match mode {
            ExtractMode::SiblingCell => self.sibling_cell_metric(label_pattern),
            ExtractMode::NextNode => self.next_node_metric(label_pattern),
        }
    }

    fn sibling_cell_metric(&self, label_pattern: &str) -> Option<String> {
        let cell_re = match Regex::new(&format!("<td>{}</td>", label_pattern)) {
            Ok(re) => re,
            Err(e) => {
                logging::warn(None, &format!("invalid label pattern \"{}\": {}", label_pattern, e));
                return None;
            }
        };

        let td = Selector::parse("td").expect("td selector must parse");
        let matches: Vec<ElementRef<'_>> = self
            .html
            .select(&td)
            .filter(|cell| {
                let serialized = cell.html();
                // Cells wrapping nested markup serialize across several
                // lines; a genuine label cell is a single line.
                !serialized.contains('\n') && cell_re.is_match(&serialized)
            })
            .collect();

        if matches.len() != 1 {
            logging::debug(
                None,
                &format!(
                    "Unexpected match count for \"{}\": {}",
                    label_pattern,
                    matches.len()
                ),
            );
            return None;
        }

        let value_cell = matches[0]
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|e| e.value().name() == "td")?;

        Some(value_cell.text().collect::<String>().trim().to_string())
    }

    fn next_node_metric(&self, label_pattern: &str) -> Option<String> {
        let label_re = match Regex::new(label_pattern) {
            Ok(re) => re,
            Err(e) => {
                logging::warn(None, &format!("invalid label pattern \"{}\": {}", label_pattern, e));
                return None;
            }
        };
        let cell_markup = Regex::new("</?td>").expect("cell markup pattern must parse");

        let mut nodes = self.html.root_element().descendants();
        while let Some(node) = nodes.next() {
            let matched = match node.value().as_text() {
                Some(text) => label_re.is_match(&text.text),
                None => false,
            };
            if !matched {
                continue;
            }

            // The node immediately after the label text in document order:
            // either the following cell element or a bare text node.
            let next = nodes.next()?;
            let fragment = match ElementRef::wrap(next) {
                Some(element) => element.html(),
                None => next.value().as_text().map(|t| t.text.to_string())?,
            };
            return Some(cell_markup.replace_all(&fragment, "").trim().to_string());
        }

        None
    }

    /// Returns the text of the single `<caption>` containing "Conditions at".
    ///
    /// Zero or multiple matching captions means the page structure is broken,
    /// which is fatal for the whole reading.
    pub fn conditions_caption(&self) -> Result<String, NdbcError> {
        let caption = Selector::parse("caption").expect("caption selector must parse");
        let mut captions = self
            .html
            .select(&caption)
            .map(|c| c.text().collect::<String>())
            .filter(|text| text.contains("Conditions at"));

        match (captions.next(), captions.next()) {
            (Some(only), None) => Ok(only),
            (None, _) => Err(NdbcError::MalformedCaption { count: 0 }),
            (Some(_), Some(_)) => {
                Err(NdbcError::MalformedCaption { count: 2 + captions.count() })
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
