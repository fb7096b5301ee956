use std::ops::Range;

use eyre::Result;

use alignkit_alignment_rs::pairwise::{Alignment, Config};

use super::{aligner, Score};

struct Workload<'a> {
    seq1: (&'a [u8], Range<usize>),
    seq2: (&'a [u8], Range<usize>),
    score: Score,
    rle: &'a str,
}

fn ensure(equal: Score, different: Score, gap: Score, w: Workload<'_>) -> Result<Alignment<Score>> {
    let aligner = aligner(Config::local(gap), equal, different);
    let result = aligner.align(w.seq1.0, w.seq2.0)?;

    assert_eq!(*result.score(), w.score);
    assert_eq!(aligner.score(w.seq1.0, w.seq2.0)?, w.score);
    assert_eq!(result.seq1(), &w.seq1.1);
    assert_eq!(result.seq2(), &w.seq2.1);
    assert_eq!(result.ungapped1(), &w.seq1.0[w.seq1.1.clone()]);
    assert_eq!(result.ungapped2(), &w.seq2.0[w.seq2.1.clone()]);
    assert_eq!(result.rle(), w.rle);
    assert_eq!(result.rescore(aligner.scorer(), gap)?, w.score);

    // No all-gap columns at the alignment ends
    if let (Some(first), Some(last)) = (result.aligned1().first(), result.aligned1().last()) {
        assert_ne!(*first, b'-');
        assert_ne!(*last, b'-');
        assert_ne!(result.aligned2()[0], b'-');
        assert_ne!(result.aligned2()[result.len() - 1], b'-');
    }
    Ok(result)
}

#[test]
fn test_report_example() -> Result<()> {
    let result = ensure(
        2,
        -1,
        2,
        Workload {
            seq1: (b"ACACACTA", 0..5),
            seq2: (b"AGCACACA", 3..8),
            score: 10,
            rle: "5=",
        },
    )?;
    assert_eq!(
        result.to_string(),
        "Sequence 1 aligned: ACACA\nSequence 2 aligned: ACACA\nAlignment score: 10"
    );

    ensure(
        2,
        -1,
        2,
        Workload {
            seq1: (b"AGCACACA", 2..7),
            seq2: (b"ACACACTA", 1..6),
            score: 10,
            rle: "5=",
        },
    )?;
    Ok(())
}

#[test]
fn test_no_gaps() -> Result<()> {
    for w in [
        Workload {
            seq1: (b"AAGAA", 1..4),
            seq2: (b"AGA", 0..3),
            score: 3,
            rle: "3=",
        },
        Workload {
            seq1: (b"AGTCCCGTGTCCCAGGGG", 0..4),
            seq2: (b"AGTC", 0..4),
            score: 4,
            rle: "4=",
        },
        Workload {
            seq1: (b"CGCGCGCGTTT", 6..11),
            seq2: (b"CGTTT", 0..5),
            score: 5,
            rle: "5=",
        },
        Workload {
            seq1: (b"ACGTTTACG", 4..9),
            seq2: (b"TTACG", 0..5),
            score: 5,
            rle: "5=",
        },
        Workload {
            seq1: (b"TTACG", 0..5),
            seq2: (b"ACGTTTACG", 4..9),
            score: 5,
            rle: "5=",
        },
    ] {
        ensure(1, -1, 1, w)?;
    }
    Ok(())
}

#[test]
fn test_gaps() -> Result<()> {
    ensure(
        1,
        -1,
        1,
        Workload {
            seq1: (b"AAAGGGAGGGTTTA", 3..10),
            seq2: (b"GGGGGGG", 0..6),
            score: 5,
            rle: "3=1^3=",
        },
    )?;
    ensure(
        1,
        -1,
        1,
        Workload {
            seq1: (b"GGGGGGG", 0..6),
            seq2: (b"AAAGGGAGGGTTTA", 3..10),
            score: 5,
            rle: "3=1v3=",
        },
    )?;
    ensure(
        2,
        -1,
        1,
        Workload {
            seq1: (b"TTTTACGTTACGTTTT", 4..13),
            seq2: (b"ACGTACGT", 0..8),
            score: 15,
            rle: "3=1^5=",
        },
    )?;
    ensure(
        3,
        -3,
        2,
        Workload {
            seq1: (b"GGTTGACTA", 1..7),
            seq2: (b"TGTTACGG", 1..6),
            score: 13,
            rle: "3=1^2=",
        },
    )?;
    Ok(())
}

#[test]
fn test_empty() -> Result<()> {
    let aligner = aligner(Config::local(2), 2, -1);
    let workload: Vec<(&[u8], &[u8])> = vec![(b"AAA", b"TTT"), (b"ACGT", b""), (b"", b"ACGT"), (b"", b"")];
    for (seq1, seq2) in workload {
        let result = aligner.align(seq1, seq2)?;
        assert!(result.is_empty());
        assert_eq!(*result.score(), 0);
        assert_eq!(result.seq1(), &(0..0));
        assert_eq!(aligner.score(seq1, seq2)?, 0);

        let all = aligner.align_all(seq1, seq2)?;
        assert_eq!(all, vec![result]);
    }
    Ok(())
}

#[test]
fn test_first_maximum_wins() -> Result<()> {
    // The maximum (10) is attained at (5, 8), (6, 7) and (8, 8), the first row-major one is used
    let aligner = aligner(Config::local(2), 2, -1);
    let matrices = aligner.matrices(b"ACACACTA", b"AGCACACA")?;
    assert_eq!(matrices.cells_with(10), vec![(5, 8), (6, 7), (8, 8)]);
    assert_eq!(matrices.argmax(), (5, 8, 10));

    let result = aligner.align(b"ACACACTA", b"AGCACACA")?;
    assert_eq!(result.seq1(), &(0..5));

    // Identical sequences with a repeated unit: the first copy is reported
    let result = aligner.align(b"ACGTTTTTACGT", b"ACGT")?;
    assert_eq!(*result.score(), 8);
    assert_eq!(result.seq1(), &(0..4));
    Ok(())
}

#[test]
fn test_local_dominates_global() -> Result<()> {
    let local = aligner(Config::local(2), 2, -1);
    let global = aligner(Config::global(2), 2, -1);
    let workload: Vec<(&[u8], &[u8])> = vec![
        (b"ACACACTA", b"AGCACACA"),
        (b"AAA", b"TTT"),
        (b"GATTACA", b"GCATGCU"),
        (b"A", b"ACGTACGT"),
        (b"", b"ACGT"),
    ];
    for (seq1, seq2) in workload {
        let score = local.score(seq1, seq2)?;
        assert!(score >= 0);
        assert!(score >= global.score(seq1, seq2)?);
    }
    Ok(())
}
