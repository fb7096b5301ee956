use eyre::{ensure, Result, WrapErr};

use alignkit_core_rs::alphabet::Alphabet;
use alignkit_core_rs::{Error, Interrupt};

use crate::config::Config;
use crate::extension;
use crate::index::WordIndex;
use crate::result::{self, ExtendedHit, Hit, Outcome};

/// Seed-and-extend search of a single DNA query: exact word seeds followed by an ungapped
/// extension of every seed.
#[derive(Clone, Debug)]
pub struct Searcher {
    query: Vec<u8>,
    index: WordIndex,
    interrupt: Option<Interrupt>,
}

impl Searcher {
    pub fn new(query: &[u8], config: Config) -> Result<Self> {
        let (word_size, interrupt) = config.dissolve();
        ensure!(
            word_size >= 2 && word_size <= query.len(),
            Error::invalid_parameter(
                "word_size",
                format!(
                    "must be within [2, {}] (query length), got {word_size}",
                    query.len()
                )
            )
        );
        Alphabet::Dna
            .validate(query)
            .wrap_err("Invalid query sequence")?;

        let index = WordIndex::new(query, word_size);
        log::debug!(
            "Indexed {} distinct words of size {word_size} in a query of length {}",
            index.len(),
            query.len()
        );

        Ok(Self {
            query: query.to_vec(),
            index,
            interrupt,
        })
    }

    pub fn query(&self) -> &[u8] {
        &self.query
    }

    pub fn word_size(&self) -> usize {
        *self.index.word_size()
    }

    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    /// Exact word matches ordered by the target offset, then by the query offset.
    pub fn hits(&self, target: &[u8]) -> Result<Vec<Hit>> {
        Alphabet::Dna
            .validate(target)
            .wrap_err("Invalid target sequence")?;

        let mut hits = Vec::new();
        self.index.scan(target, |toffset, qoffsets| {
            Interrupt::poll(self.interrupt.as_ref())?;
            hits.extend(qoffsets.iter().map(|qoffset| Hit::new(*qoffset, toffset)));
            Ok::<(), eyre::Report>(())
        })?;
        log::debug!("Found {} seed hits in a target of length {}", hits.len(), target.len());
        Ok(hits)
    }

    /// Ungapped extension of a single hit.
    pub fn extend(&self, target: &[u8], hit: Hit) -> Result<ExtendedHit> {
        let (qoffset, toffset) = (*hit.query(), *hit.target());
        ensure!(
            qoffset < self.query.len() && toffset < target.len(),
            Error::invalid_parameter(
                "hit",
                format!(
                    "{hit} is outside of the query (length {}) or the target (length {})",
                    self.query.len(),
                    target.len()
                )
            )
        );
        Ok(extension::extend(&self.query, target, hit))
    }

    /// All extended hits, best first (see [`result::rank`]).
    pub fn search(&self, target: &[u8]) -> Result<Vec<ExtendedHit>> {
        let hits = self.hits(target)?;

        let mut extended = Vec::with_capacity(hits.len());
        for hit in hits {
            Interrupt::poll(self.interrupt.as_ref())?;
            extended.push(extension::extend(&self.query, target, hit));
        }
        result::rank(&mut extended);
        Ok(extended)
    }

    /// The top-ranked extended hit, [`Outcome::Empty`] if the target shares no word with the
    /// query.
    pub fn best_hit(&self, target: &[u8]) -> Result<Outcome> {
        let outcome = Outcome::from(self.search(target)?.into_iter().next());
        if outcome.is_empty() {
            log::debug!("No seed hits, the search result is empty");
        }
        Ok(outcome)
    }
}
