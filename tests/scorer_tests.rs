use rstest::rstest;
use stylogram::model::{bracketed, BigramModel};
use stylogram::scorer::{AuthorLabel, LlrScorer};

fn toks(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}

fn tiny_scorer(eps: f64) -> LlrScorer {
    let model_a = BigramModel::train(&toks("a a b"), 1.0);
    let model_b = BigramModel::train(&toks("b b a"), 1.0);
    LlrScorer::new(model_a, model_b, eps)
}

#[test]
fn test_vocab_union_size() {
    // Both models share {a, b, <s>, </s>}
    let scorer = tiny_scorer(0.25);
    assert_eq!(scorer.vocab_size(), 4);
}

#[test]
fn test_hand_computed_window_score() {
    // A trained on [a, a, b], B on [b, b, a], k=1, V=4.
    // Window [a, b] brackets to <s> a b </s>:
    //   pA(<s>,a)=2/5  pB=1/5   -> log2 = 1
    //   pA(a,b)=2/6    pB=1/5   -> log2(5/3)
    //   pA(b,</s>)=2/5 pB=1/6   -> log2(12/5)
    // Sum = log2(2 * 5/3 * 12/5) = log2(8) = 3
    let scorer = tiny_scorer(0.25);
    let score = scorer.score_window(&toks("a b"));
    assert!((score - 3.0).abs() < 1e-9, "got {score}");
}

#[test]
fn test_score_is_sum_of_per_bigram_terms() {
    let model_a = BigramModel::train(&toks("the quick brown fox the quick"), 1.0);
    let model_b = BigramModel::train(&toks("lazy dog sleeps the lazy dog"), 1.0);
    let scorer = LlrScorer::new(model_a.clone(), model_b.clone(), 0.25);

    let window = toks("the lazy fox");
    let v = scorer.vocab_size();

    let expected: f64 = bracketed(&window)
        .windows(2)
        .map(|pair| {
            let p_a = model_a.probability(pair[0], pair[1], v);
            let p_b = model_b.probability(pair[0], pair[1], v);
            (p_a / p_b).log2()
        })
        .sum();

    let score = scorer.score_window(&window);
    assert!((score - expected).abs() < 1e-12);
}

#[test]
fn test_score_window_deterministic() {
    let scorer = tiny_scorer(0.25);
    let window = toks("a b a");
    let first = scorer.score_window(&window);
    let second = scorer.score_window(&window);
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_symmetric_corpora_give_opposite_scores() {
    let model_a = BigramModel::train(&toks("a a b"), 1.0);
    let model_b = BigramModel::train(&toks("b b a"), 1.0);

    let forward = LlrScorer::new(model_a.clone(), model_b.clone(), 0.25);
    let reversed = LlrScorer::new(model_b, model_a, 0.25);

    let window = toks("a b");
    let s1 = forward.score_window(&window);
    let s2 = reversed.score_window(&window);
    assert!((s1 + s2).abs() < 1e-9);
}

#[rstest]
#[case(0.0, AuthorLabel::Neither)]
#[case(0.25, AuthorLabel::Neither)] // boundary itself is NEITHER
#[case(-0.25, AuthorLabel::Neither)]
#[case(0.25 + 1e-9, AuthorLabel::CandidateA)]
#[case(-0.25 - 1e-9, AuthorLabel::CandidateB)]
#[case(5.0, AuthorLabel::CandidateA)]
#[case(-5.0, AuthorLabel::CandidateB)]
fn test_label_band(#[case] score: f64, #[case] expected: AuthorLabel) {
    let scorer = tiny_scorer(0.25);
    assert_eq!(scorer.label(score), expected);
}

#[test]
fn test_label_with_zero_band() {
    // eps = 0: only an exact zero stays NEITHER
    let scorer = tiny_scorer(0.0);
    assert_eq!(scorer.label(0.0), AuthorLabel::Neither);
    assert_eq!(scorer.label(f64::MIN_POSITIVE), AuthorLabel::CandidateA);
    assert_eq!(scorer.label(-f64::MIN_POSITIVE), AuthorLabel::CandidateB);
}

#[test]
fn test_label_display_names() {
    assert_eq!(AuthorLabel::CandidateA.to_string(), "A");
    assert_eq!(AuthorLabel::CandidateB.to_string(), "B");
    assert_eq!(AuthorLabel::Neither.to_string(), "NEITHER");
    assert_eq!(AuthorLabel::Neither.short(), "N");
}
