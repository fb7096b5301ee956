use std::io::BufRead;
use std::path::Path;

use derive_getters::Dissolve;
use eyre::{Result, WrapErr};

use alignkit_core_rs::Error;

use super::table::Table;

/// A plain-text substitution matrix reader:
/// - Blank lines and lines starting with `#` are ignored.
/// - The first remaining line holds whitespace-separated single-symbol column headers.
/// - Every following line holds a single-symbol row header and one integer per column.
///
/// Returns an error if any header is longer than one symbol, a cell is not an integer, or the
/// number of cells in a row doesn't match the number of column headers.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Dissolve)]
pub struct Reader<R> {
    reader: R,
}

impl Reader<()> {
    /// Reads the whole table from the given file. The file is closed before the function returns.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Table> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|err| Error::configuration(format!("can't open {}: {err}", path.display())))?;
        let table = Reader::new(std::io::BufReader::new(file))
            .read()
            .wrap_err_with(|| format!("Failed to parse substitution matrix {}", path.display()))?;
        log::info!(
            "Loaded {}x{} substitution matrix from {}",
            table.rows().len(),
            table.columns().len(),
            path.display()
        );
        Ok(table)
    }
}

impl<R: BufRead> Reader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn symbol(token: &str, lineno: usize) -> Result<u8> {
        let bytes = token.as_bytes();
        if bytes.len() != 1 || !bytes[0].is_ascii_graphic() {
            return Err(Error::invalid_parameter(
                "substitution matrix",
                format!("line {lineno}: header {token:?} must be a single symbol"),
            )
            .into());
        }
        Ok(bytes[0])
    }

    /// Consumes the reader and parses the table.
    pub fn read(mut self) -> Result<Table> {
        let mut columns: Option<Vec<u8>> = None;
        let mut rows = Vec::new();

        let mut line = String::new();
        let mut lineno = 0;
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                break;
            }
            lineno += 1;

            let content = line.trim();
            if content.is_empty() || content.starts_with('#') {
                continue;
            }

            let mut tokens = content.split_whitespace();
            match &columns {
                None => {
                    columns = Some(
                        tokens
                            .map(|x| Self::symbol(x, lineno))
                            .collect::<Result<Vec<_>>>()?,
                    );
                }
                Some(_) => {
                    // The line is non-empty, hence there is at least one token
                    let header = Self::symbol(tokens.next().unwrap_or_default(), lineno)?;
                    let values = tokens
                        .map(|x| {
                            x.parse::<i32>().map_err(|_| {
                                Error::invalid_parameter(
                                    "substitution matrix",
                                    format!("line {lineno}: {x:?} is not an integer score"),
                                )
                            })
                        })
                        .collect::<std::result::Result<Vec<_>, _>>()?;
                    rows.push((header, values));
                }
            }
        }

        let columns = columns.ok_or_else(|| {
            Error::invalid_parameter("substitution matrix", "the matrix source is empty")
        })?;
        Table::new(columns, rows)
    }
}
