use eyre::Result;

use alignkit_alignment_rs::pairwise::{Aligner, Config};
use alignkit_alignment_rs::scoring::symbols::Scorer;
use alignkit_alignment_rs::scoring::Policy;
use alignkit_core_rs::alphabet::Alphabet;
use alignkit_core_rs::Error;
use alignkit_io_rs::matrix::Registry;

use super::{aligner, invrle, Score};

struct Workload<'a> {
    seq1: &'a [u8],
    seq2: &'a [u8],
    score: Score,
    aligned: (&'a str, &'a str),
    rle: &'a str,
}

fn ensure(equal: Score, different: Score, gap: Score, w: Workload<'_>) -> Result<()> {
    let aligner = aligner(Config::global(gap), equal, different);
    let inv = invrle(w.rle);

    for (seq1, seq2, rle) in [(w.seq1, w.seq2, w.rle), (w.seq2, w.seq1, inv.as_str())] {
        let result = aligner.align(seq1, seq2)?;
        assert_eq!(*result.score(), w.score);
        assert_eq!(aligner.score(seq1, seq2)?, w.score);
        assert_eq!(result.ungapped1(), seq1);
        assert_eq!(result.ungapped2(), seq2);
        assert_eq!(result.seq1(), &(0..seq1.len()));
        assert_eq!(result.seq2(), &(0..seq2.len()));
        assert_eq!(result.rescore(aligner.scorer(), gap)?, w.score);
        if seq1 == w.seq1 {
            assert_eq!(result.rle(), rle);
            assert_eq!(
                (
                    std::str::from_utf8(result.aligned1())?,
                    std::str::from_utf8(result.aligned2())?
                ),
                w.aligned
            );
        }
    }
    Ok(())
}

#[test]
fn test_report_example() -> Result<()> {
    ensure(
        2,
        0,
        1,
        Workload {
            seq1: b"ATGAAGGT",
            seq2: b"AGAGAGGC",
            score: 10,
            aligned: ("ATGA-AGGT", "A-GAGAGGC"),
            rle: "1=1^2=1v3=1X",
        },
    )?;
    ensure(
        2,
        0,
        2,
        Workload {
            seq1: b"ATGAAGGT",
            seq2: b"AGAGAGGC",
            score: 8,
            aligned: ("ATGAAGGT", "AGAGAGGC"),
            rle: "1=3X3=1X",
        },
    )?;

    let aligner = super::aligner(Config::global(1), 2, 0);
    assert_eq!(
        aligner.align(b"ATGAAGGT", b"AGAGAGGC")?.to_string(),
        "Sequence 1 aligned: ATGA-AGGT\nSequence 2 aligned: A-GAGAGGC\nAlignment score: 10"
    );
    Ok(())
}

#[test]
fn test_simple() -> Result<()> {
    for w in [
        Workload {
            seq1: b"ACGT",
            seq2: b"ACGT",
            score: 4,
            aligned: ("ACGT", "ACGT"),
            rle: "4=",
        },
        Workload {
            seq1: b"AC",
            seq2: b"AGC",
            score: 1,
            aligned: ("A-C", "AGC"),
            rle: "1=1v1=",
        },
        Workload {
            seq1: b"A",
            seq2: b"",
            score: -1,
            aligned: ("A", "-"),
            rle: "1^",
        },
        Workload {
            seq1: b"",
            seq2: b"",
            score: 0,
            aligned: ("", ""),
            rle: "",
        },
    ] {
        ensure(1, -1, 1, w)?;
    }

    ensure(
        1,
        -1,
        2,
        Workload {
            seq1: b"A",
            seq2: b"",
            score: -2,
            aligned: ("A", "-"),
            rle: "1^",
        },
    )?;
    Ok(())
}

#[test]
fn test_zero_gap() -> Result<()> {
    let aligner = super::aligner(Config::global(0), 2, 0);
    assert_eq!(aligner.score(b"ATGAAGGT", b"AGAGAGGC")?, 12);
    Ok(())
}

#[test]
fn test_determinism() -> Result<()> {
    let aligner = super::aligner(Config::global(1), 1, -1);
    let first = aligner.align(b"GATTACA", b"GCATGCU")?;
    for _ in 0..10 {
        assert_eq!(aligner.align(b"GATTACA", b"GCATGCU")?, first);
    }
    assert_eq!(*first.score(), 0);
    assert_eq!(first.aligned1(), b"G-ATTACA");
    assert_eq!(first.aligned2(), b"GCA-TGCU");
    Ok(())
}

#[test]
fn test_alphabet_validation() -> Result<()> {
    let aligner = super::aligner(
        Config {
            alphabet: Some(Alphabet::Dna),
            ..Config::global(1)
        },
        1,
        -1,
    );
    aligner.align(b"ACGT", b"TTGA")?;

    let err = aligner.align(b"ACGT", b"ACNT").unwrap_err();
    assert_eq!(
        Error::of(&err),
        Some(&Error::InvalidAlphabet {
            symbol: 'N',
            position: 2,
            alphabet: Alphabet::Dna
        })
    );
    let err = aligner.matrices(b"acgt", b"ACGT").unwrap_err();
    assert!(matches!(
        Error::of(&err),
        Some(Error::InvalidAlphabet { symbol: 'a', .. })
    ));
    Ok(())
}

#[test]
fn test_protein() -> Result<()> {
    let table = Registry::builtin().resolve("blosum62")?;
    let aligner = Aligner::new(
        Policy::<Score>::protein(&table)?,
        Config {
            alphabet: Some(Alphabet::Protein),
            ..Config::global(8)
        },
    )?;

    let result = aligner.align(b"HEAGAWGHEE", b"HEAGAWGHEE")?;
    // Sum of the BLOSUM62 diagonal: H8 E5 A4 G6 A4 W11 G6 H8 E5 E5
    assert_eq!(*result.score(), 62);
    assert_eq!(result.rle(), "10=");

    let result = aligner.align(b"MKV", b"MRV")?;
    // M/M 5, K/R 2, V/V 4
    assert_eq!(*result.score(), 11);
    assert_eq!(result.rle(), "1=1X1=");

    // Ambiguity codes are scored like any other protein symbol: B/V -3, Z/E 4, X/A 0
    let result = aligner.align(b"MKBZX", b"MKVEA")?;
    assert_eq!(*result.score(), 5 + 5 - 3 + 4);
    assert_eq!(result.rle(), "2=3X");
    Ok(())
}

#[test]
fn test_protein_scoring_is_total() -> Result<()> {
    let symbols = Alphabet::Protein.symbols();
    for name in ["blosum50", "blosum62", "blosum80"] {
        let policy = Policy::<Score>::protein(&Registry::builtin().resolve(name)?)?;
        for a in symbols {
            for b in symbols {
                assert_eq!(policy.score(*a, *b)?, policy.score(*b, *a)?, "{name}");
            }
        }

        let aligner = Aligner::new(
            policy,
            Config {
                alphabet: Some(Alphabet::Protein),
                ..Config::global(8)
            },
        )?;
        aligner.align(symbols, b"BZXWAC")?;
    }
    Ok(())
}
