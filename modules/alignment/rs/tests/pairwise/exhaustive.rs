use eyre::Result;
use itertools::Itertools;

use alignkit_alignment_rs::pairwise::Config;

use super::aligner;

fn rows(alignments: &[alignkit_alignment_rs::pairwise::Alignment<i32>]) -> Vec<(String, String)> {
    alignments
        .iter()
        .map(|x| {
            (
                String::from_utf8_lossy(x.aligned1()).into_owned(),
                String::from_utf8_lossy(x.aligned2()).into_owned(),
            )
        })
        .collect()
}

#[test]
fn test_global_ties() -> Result<()> {
    let aligner = aligner(Config::global(1), 1, -1);

    let all = aligner.align_all(b"GATTACA", b"GCATGCU")?;
    assert_eq!(
        rows(&all),
        vec![
            ("G-ATTACA".to_string(), "GCA-TGCU".to_string()),
            ("G-ATTACA".to_string(), "GCAT-GCU".to_string()),
            ("G-ATTACA".to_string(), "GCATG-CU".to_string()),
        ]
    );
    assert_eq!(all[0], aligner.align(b"GATTACA", b"GCATGCU")?);

    let all = aligner.align_all(b"AAA", b"AA")?;
    assert_eq!(
        all.iter().map(|x| x.aligned2().clone()).collect_vec(),
        vec![b"-AA".to_vec(), b"A-A".to_vec(), b"AA-".to_vec()]
    );
    Ok(())
}

#[test]
fn test_all_optimal() -> Result<()> {
    let aligner = aligner(Config::global(1), 1, -1);
    let (seq1, seq2) = (b"AAAAAAAA", b"AAAA");

    let all = aligner.align_all(seq1, seq2)?;
    assert_eq!(all.len(), 70);
    assert_eq!(all[0], aligner.align(seq1, seq2)?);
    assert_eq!(all[0].aligned2(), b"----AAAA");

    for alignment in &all {
        assert_eq!(*alignment.score(), 0);
        assert_eq!(alignment.rescore(aligner.scorer(), 1)?, 0);
        assert_eq!(alignment.ungapped1(), seq1);
        assert_eq!(alignment.ungapped2(), seq2);
    }
    assert!(all.iter().map(|x| x.aligned2()).all_unique());
    Ok(())
}

#[test]
fn test_local_ties() -> Result<()> {
    let aligner = aligner(Config::local(2), 2, -1);
    let all = aligner.align_all(b"ACACACTA", b"AGCACACA")?;
    assert_eq!(
        rows(&all),
        vec![
            ("ACACA".to_string(), "ACACA".to_string()),
            ("CACAC".to_string(), "CACAC".to_string()),
            ("CACACTA".to_string(), "CACAC-A".to_string()),
        ]
    );
    assert_eq!(all[0], aligner.align(b"ACACACTA", b"AGCACACA")?);
    assert_eq!(
        all.iter().map(|x| (x.seq1().clone(), x.seq2().clone())).collect_vec(),
        vec![(0..5, 3..8), (1..6, 2..7), (1..8, 2..8)]
    );
    for alignment in &all {
        assert_eq!(alignment.rescore(aligner.scorer(), 2)?, 10);
    }
    Ok(())
}

#[test]
fn test_path_cap() -> Result<()> {
    let aligner = super::aligner(
        Config {
            max_paths: 2,
            ..Config::global(1)
        },
        1,
        -1,
    );
    let all = aligner.align_all(b"AAA", b"AA")?;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].aligned2(), b"-AA");

    // C(20, 10) optimal alignments, truncated at the default cap
    let aligner = super::aligner(Config::global(1), 1, -1);
    let all = aligner.align_all(&[b'A'; 20], &[b'A'; 10])?;
    assert_eq!(all.len(), 1024);
    assert!(all.iter().all(|x| *x.score() == 0));
    Ok(())
}
