use eyre::Result;

use alignkit_alignment_rs::pairwise::Config;

use super::{aligner, Score};

/// Scores of every possible alignment of the two sequences, enumerated column by column.
fn enumerate(seq1: &[u8], seq2: &[u8], equal: Score, different: Score, gap: Score) -> Vec<Score> {
    if seq1.is_empty() || seq2.is_empty() {
        return vec![-gap * (seq1.len() + seq2.len()) as Score];
    }

    let mut scores = Vec::new();
    let diagonal = if seq1[0] == seq2[0] { equal } else { different };
    for (column, rest1, rest2) in [
        (diagonal, &seq1[1..], &seq2[1..]),
        (-gap, &seq1[1..], seq2),
        (-gap, seq1, &seq2[1..]),
    ] {
        for score in enumerate(rest1, rest2, equal, different, gap) {
            scores.push(column + score);
        }
    }
    scores
}

fn global_optimum(seq1: &[u8], seq2: &[u8], equal: Score, different: Score, gap: Score) -> Score {
    enumerate(seq1, seq2, equal, different, gap)
        .into_iter()
        .max()
        .unwrap()
}

fn local_optimum(seq1: &[u8], seq2: &[u8], equal: Score, different: Score, gap: Score) -> Score {
    let mut best = 0;
    for start1 in 0..seq1.len() {
        for end1 in start1 + 1..=seq1.len() {
            for start2 in 0..seq2.len() {
                for end2 in start2 + 1..=seq2.len() {
                    best = best.max(global_optimum(
                        &seq1[start1..end1],
                        &seq2[start2..end2],
                        equal,
                        different,
                        gap,
                    ));
                }
            }
        }
    }
    best
}

/// Deterministic pseudo-random DNA sequences of length 0 to 5.
fn sequences(count: usize) -> Vec<Vec<u8>> {
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as usize
    };

    (0..count)
        .map(|_| {
            let len = next() % 6;
            (0..len).map(|_| b"ACGT"[next() % 4]).collect()
        })
        .collect()
}

#[test]
fn test_against_enumeration() -> Result<()> {
    let seqs = sequences(24);
    for (equal, different, gap) in [(1, -1, 1), (2, 0, 1), (2, -1, 2), (3, -2, 0)] {
        let global = aligner(Config::global(gap), equal, different);
        let local = aligner(Config::local(gap), equal, different);

        for pair in seqs.chunks_exact(2) {
            let (seq1, seq2) = (pair[0].as_slice(), pair[1].as_slice());

            let expected = global_optimum(seq1, seq2, equal, different, gap);
            let result = global.align(seq1, seq2)?;
            assert_eq!(*result.score(), expected, "{seq1:?} vs {seq2:?}");
            assert_eq!(result.ungapped1(), seq1);
            assert_eq!(result.ungapped2(), seq2);
            assert_eq!(result.rescore(global.scorer(), gap)?, expected);

            for alignment in global.align_all(seq1, seq2)? {
                assert_eq!(alignment.rescore(global.scorer(), gap)?, expected);
            }

            let expected_local = local_optimum(seq1, seq2, equal, different, gap);
            let result = local.align(seq1, seq2)?;
            assert_eq!(*result.score(), expected_local, "{seq1:?} vs {seq2:?}");
            assert_eq!(result.rescore(local.scorer(), gap)?, expected_local);
            assert!(expected_local >= expected);
        }
    }
    Ok(())
}
