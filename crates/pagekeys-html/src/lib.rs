//! pagekeys HTML loader
//!
//! HTML5 parsing built on html5ever, producing a `pagekeys_dom::Document`.

mod parser;

pub use parser::HtmlParser;
pub use pagekeys_dom::Document;

/// Parse an HTML string into a Document
pub fn parse(html: &str) -> Result<Document, ParseError> {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),
}
