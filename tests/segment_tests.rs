use stylogram::scorer::segment::build;
use stylogram::scorer::AuthorLabel;

use AuthorLabel::{CandidateA as A, CandidateB as B, Neither as N};

fn toks(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}

#[test]
fn test_uniform_labels_give_one_segment() {
    let tokens = toks("one two three");
    let segments = build(&tokens, &[A, A, A]);

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].start, 0);
    assert_eq!(segments[0].end, 3);
    assert_eq!(segments[0].label, A);
    assert_eq!(segments[0].text, "one two three");
}

#[test]
fn test_runs_are_collapsed_in_order() {
    let tokens = toks("a1 a2 n1 b1 b2 b3");
    let segments = build(&tokens, &[A, A, N, B, B, B]);

    assert_eq!(segments.len(), 3);
    assert_eq!((segments[0].label, segments[0].start, segments[0].end), (A, 0, 2));
    assert_eq!((segments[1].label, segments[1].start, segments[1].end), (N, 2, 3));
    assert_eq!((segments[2].label, segments[2].start, segments[2].end), (B, 3, 6));
    assert_eq!(segments[1].text, "n1");
}

#[test]
fn test_segment_count_is_one_plus_label_changes() {
    let tokens = toks("w w w w w w w");
    let labels = [A, B, B, N, N, N, A];
    let changes = labels.windows(2).filter(|p| p[0] != p[1]).count();

    let segments = build(&tokens, &labels);
    assert_eq!(segments.len(), changes + 1);
}

#[test]
fn test_segments_cover_every_token_exactly_once() {
    let tokens = toks("t0 t1 t2 t3 t4 t5");
    let labels = [N, A, A, B, N, N];
    let segments = build(&tokens, &labels);

    assert_eq!(segments.first().unwrap().start, 0);
    assert_eq!(segments.last().unwrap().end, tokens.len());
    for pair in segments.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
}

#[test]
fn test_concatenated_texts_reconstruct_the_sequence() {
    let tokens = toks("the quick brown fox jumps over");
    let labels = [A, A, N, B, B, A];
    let segments = build(&tokens, &labels);

    let rebuilt: Vec<String> = segments.iter().map(|s| s.text.clone()).collect();
    assert_eq!(rebuilt.join(" "), tokens.join(" "));
}

#[test]
fn test_alternating_labels_give_singleton_segments() {
    let tokens = toks("w0 w1 w2 w3");
    let segments = build(&tokens, &[A, B, A, B]);

    assert_eq!(segments.len(), 4);
    for (i, seg) in segments.iter().enumerate() {
        assert_eq!(seg.start, i);
        assert_eq!(seg.end, i + 1);
    }
}

#[test]
fn test_empty_input_gives_no_segments() {
    assert!(build(&[], &[]).is_empty());
}

#[test]
fn test_single_token_segment() {
    let tokens = toks("alone");
    let segments = build(&tokens, &[N]);

    assert_eq!(segments.len(), 1);
    assert_eq!((segments[0].start, segments[0].end), (0, 1));
    assert_eq!(segments[0].label, N);
    assert_eq!(segments[0].text, "alone");
}
