use ahash::{HashMap, HashMapExt};
use derive_getters::Getters;

/// Words up to this length are packed into a single `u64` (2 bits per nucleotide).
pub const MAX_PACKED_WORD: usize = 32;

#[inline(always)]
fn encode(symbol: u8) -> Option<u64> {
    match symbol {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

/// Rolling 2-bit encoding of all `word_size` windows of the sequence. Yields `(offset, code)`
/// for every window made only of `ACGT` symbols.
fn packed_windows(seq: &[u8], word_size: usize) -> impl Iterator<Item = (usize, u64)> + '_ {
    debug_assert!(word_size >= 1 && word_size <= MAX_PACKED_WORD);
    let mask = if word_size == MAX_PACKED_WORD {
        u64::MAX
    } else {
        (1u64 << (2 * word_size)) - 1
    };

    let mut code = 0u64;
    let mut valid = 0usize;
    seq.iter().enumerate().filter_map(move |(ind, &symbol)| {
        match encode(symbol) {
            Some(bits) => {
                code = ((code << 2) | bits) & mask;
                valid += 1;
            }
            None => {
                code = 0;
                valid = 0;
            }
        }
        (valid >= word_size).then(|| (ind + 1 - word_size, code))
    })
}

/// Number of `word_size` windows in a sequence of the given length.
fn windows(length: usize, word_size: usize) -> usize {
    (length + 1).saturating_sub(word_size)
}

#[derive(Clone, Eq, PartialEq, Debug)]
enum Words {
    Packed(HashMap<u64, Vec<usize>>),
    Raw(HashMap<Vec<u8>, Vec<usize>>),
}

/// Every `word_size`-long substring of the query mapped to the ascending list of its offsets.
#[derive(Clone, Eq, PartialEq, Debug, Getters)]
pub struct WordIndex {
    word_size: usize,
    #[getter(skip)]
    words: Words,
}

impl WordIndex {
    pub fn new(query: &[u8], word_size: usize) -> Self {
        let words = if word_size <= MAX_PACKED_WORD {
            let mut words: HashMap<u64, Vec<usize>> = HashMap::new();
            for (offset, code) in packed_windows(query, word_size) {
                words.entry(code).or_default().push(offset);
            }
            Words::Packed(words)
        } else {
            let mut words: HashMap<Vec<u8>, Vec<usize>> = HashMap::new();
            for (offset, word) in query.windows(word_size).enumerate() {
                words.entry(word.to_vec()).or_default().push(offset);
            }
            Words::Raw(words)
        };

        Self { word_size, words }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        match &self.words {
            Words::Packed(x) => x.len(),
            Words::Raw(x) => x.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Query offsets of the word, empty if the query doesn't contain it.
    pub fn get(&self, word: &[u8]) -> &[usize] {
        if word.len() != self.word_size {
            return &[];
        }
        let offsets = match &self.words {
            Words::Packed(words) => packed_windows(word, self.word_size)
                .next()
                .and_then(|(_, code)| words.get(&code)),
            Words::Raw(words) => words.get(word),
        };
        offsets.map_or(&[][..], |x| x.as_slice())
    }

    /// Slides a window over the target (ascending offsets) and calls `f(target_offset, query_offsets)`
    /// for every window. Windows absent from the index get an empty list.
    pub fn scan<E>(
        &self,
        target: &[u8],
        mut f: impl FnMut(usize, &[usize]) -> Result<(), E>,
    ) -> Result<(), E> {
        match &self.words {
            Words::Packed(words) => {
                let mut codes = packed_windows(target, self.word_size).peekable();
                for offset in 0..windows(target.len(), self.word_size) {
                    let offsets: &[usize] = match codes.next_if(|(x, _)| *x == offset) {
                        Some((_, code)) => words.get(&code).map_or(&[][..], |x| x.as_slice()),
                        None => &[],
                    };
                    f(offset, offsets)?;
                }
            }
            Words::Raw(words) => {
                for (offset, window) in target.windows(self.word_size).enumerate() {
                    let offsets = words.get(window).map_or(&[][..], |x| x.as_slice());
                    f(offset, offsets)?;
                }
            }
        }
        Ok(())
    }
}
