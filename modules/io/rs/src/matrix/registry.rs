use std::path::PathBuf;

use eyre::{Result, WrapErr};
use itertools::Itertools;

use alignkit_core_rs::Error;

use super::reader::Reader;
use super::table::Table;

const BUNDLED: [(&str, &str); 3] = [
    (
        "blosum50",
        include_str!("../../resources/matrices/blosum50.txt"),
    ),
    (
        "blosum62",
        include_str!("../../resources/matrices/blosum62.txt"),
    ),
    (
        "blosum80",
        include_str!("../../resources/matrices/blosum80.txt"),
    ),
];

/// Resolves substitution matrix names (e.g. `"blosum62"`) to parsed tables.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum Registry {
    /// Matrices bundled with the crate: NCBI BLOSUM50, BLOSUM62 and BLOSUM80, each covering the
    /// 20 standard amino acids, the B, Z, X ambiguity codes and the `*` stop.
    #[default]
    Builtin,
    /// Matrices stored as `<dir>/<name>.txt`, where the name is lower-cased.
    Directory(PathBuf),
}

impl Registry {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Registry::Directory(dir.into())
    }

    pub fn builtin() -> Self {
        Registry::Builtin
    }

    pub fn resolve(&self, name: &str) -> Result<Table> {
        let key = name.trim().to_ascii_lowercase();
        if key.is_empty() {
            return Err(Error::configuration("substitution matrix name is empty").into());
        }

        match self {
            Registry::Builtin => match BUNDLED.iter().find(|(x, _)| *x == key) {
                Some((_, content)) => {
                    let table = Reader::new(content.as_bytes())
                        .read()
                        .wrap_err_with(|| format!("Failed to parse bundled matrix {key}"))?;
                    log::info!("Loaded bundled {key} substitution matrix");
                    Ok(table)
                }
                None => Err(Error::configuration(format!(
                    "unknown substitution matrix {name:?}, bundled matrices: {}",
                    BUNDLED.iter().map(|(x, _)| *x).join(", ")
                ))
                .into()),
            },
            Registry::Directory(dir) => {
                let path = dir.join(format!("{key}.txt"));
                if !path.is_file() {
                    return Err(Error::configuration(format!(
                        "substitution matrix {name:?} not found at {}",
                        path.display()
                    ))
                    .into());
                }
                Reader::from_path(path)
            }
        }
    }
}
