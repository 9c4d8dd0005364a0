//! Input parsing and data source handling.

mod delimiter;
mod parser;
mod source;
mod table;

pub use delimiter::{DELIMITERS, detect_delimiter, format_label};
pub use parser::{ParseOutcome, ParseWarning, Parser, ParserConfig, tokenize_line};
pub use source::{SourceMetadata, content_hash};
pub use table::ParsedTable;
