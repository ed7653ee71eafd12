//! Merging edited re-parses into annotated texts.

use atf_parser::atf::annotations::{AlignmentToken, LemmatizationToken};
use atf_parser::atf::lines::{ControlLine, Line, LineLabel, TextLine};
use atf_parser::atf::merging::DiffAlgorithm;
use atf_parser::atf::testing::factories::{lemmatized, reading, text_line, word};
use atf_parser::{parse_atf, Text};
use proptest::prelude::*;
use rstest::rstest;

fn lemma(value: &str, lemma: &str) -> LemmatizationToken {
    LemmatizationToken::new(value, Some(vec![lemma.to_string()]))
}

/// Parse a single text line and lemmatize its first word.
fn annotated(source: &str, first: &str) -> Text {
    let text = parse_atf(source).unwrap();
    let mut row = text.lemmatization();
    row[0][0] = lemma(&row[0][0].value, first);
    text.update_lemmatization(&row).unwrap()
}

fn first_lemma(text: &Text) -> Vec<String> {
    text.lines()[0].content()[0].unique_lemma().to_vec()
}

#[test]
fn test_deleted_middle_word() {
    let old = TextLine::new(
        LineLabel::number(1),
        vec![
            lemmatized(word(vec![reading("bu")]), "W1"),
            lemmatized(word(vec![reading("mu")]), "W2"),
            lemmatized(word(vec![reading("bu")]), "W1"),
        ],
    );
    let new = TextLine::new(
        LineLabel::number(1),
        vec![word(vec![reading("bu")]), word(vec![reading("bu")])],
    );
    let merged = old.merge_with(&new, DiffAlgorithm::Lcs);
    let lemmas: Vec<Vec<String>> = merged
        .content
        .iter()
        .map(|token| token.unique_lemma().to_vec())
        .collect();
    assert_eq!(lemmas, vec![vec!["W1".to_string()], vec!["W1".to_string()]]);
}

#[test]
fn test_different_line_kinds_are_replaced() {
    let control = Line::ControlLine(ControlLine::new("&", " single ruling"));
    assert_eq!(Line::EmptyLine.merge(&control), control);
    let merged = Text::new(vec![Line::EmptyLine]).merge(&Text::new(vec![control.clone()]));
    assert_eq!(merged.lines(), &[control]);
}

#[rstest]
#[case("1. kur# ra ma")]
#[case("1. [kur] ra")]
#[case("1. kur?")]
#[case("1. ku-r ra")]
fn test_lemma_survives_when_clean_value_is_unchanged(#[case] edited: &str) {
    let old = annotated("1. kur ra", "šadû I");
    let new = parse_atf(edited).unwrap();
    let merged = old.merge(&new);
    if new.lines()[0].content()[0].clean_value() == "kur" {
        assert_eq!(first_lemma(&merged), vec!["šadû I".to_string()]);
        assert_eq!(merged.atf(), new.atf());
    } else {
        assert!(first_lemma(&merged).is_empty());
    }
}

/// Parse a single text line and lemmatize every word in order.
fn lemmatized_text(source: &str, lemmas: &[&str]) -> Text {
    let text = parse_atf(source).unwrap();
    let row = text.lemmatization()[0]
        .iter()
        .zip(lemmas)
        .map(|(token, lemma_id)| lemma(&token.value, lemma_id))
        .collect();
    text.update_lemmatization(&vec![row]).unwrap()
}

fn lemmas(text: &Text) -> Vec<Vec<String>> {
    text.lines()[0]
        .content()
        .iter()
        .map(|token| token.unique_lemma().to_vec())
        .collect()
}

fn ids(ids: &[&[&str]]) -> Vec<Vec<String>> {
    ids.iter()
        .map(|row| row.iter().map(|id| id.to_string()).collect())
        .collect()
}

#[rstest(algorithm => [DiffAlgorithm::Lcs, DiffAlgorithm::Myers])]
fn test_flag_edit_next_to_duplicate_keeps_positions(algorithm: DiffAlgorithm) {
    let old = lemmatized_text("1. kur kur#", &["L1", "L2"]);
    let new = parse_atf("1. kur# kur#").unwrap();
    let merged = old.merge_with(&new, algorithm);
    assert_eq!(lemmas(&merged), ids(&[&["L1"], &["L2"]]));
    assert_eq!(merged.atf(), "1. kur# kur#");
}

#[rstest(algorithm => [DiffAlgorithm::Lcs, DiffAlgorithm::Myers])]
fn test_insert_before_flag_edit_keeps_lemmas(algorithm: DiffAlgorithm) {
    let old = lemmatized_text("1. kur ra", &["L1", "L2"]);
    let new = parse_atf("1. ma kur# ra").unwrap();
    let merged = old.merge_with(&new, algorithm);
    assert_eq!(lemmas(&merged), ids(&[&[], &["L1"], &["L2"]]));
    assert_eq!(merged.atf(), "1. ma kur# ra");
}

#[test]
fn test_lemma_is_dropped_when_content_changed() {
    let old = annotated("1. kur ra", "šadû I");
    let merged = old.merge(&parse_atf("1. ku ra").unwrap());
    assert!(first_lemma(&merged).is_empty());
    assert_eq!(merged.atf(), "1. ku ra");
}

#[test]
fn test_unchanged_lines_keep_all_annotations() {
    let old = annotated("1. kur ra\n2. nu", "šadû I");
    let new = parse_atf("@obverse\n1. kur ra\n2. nu").unwrap();
    let merged = old.merge(&new);
    assert_eq!(merged.lines()[1], old.lines()[0]);
    assert_eq!(merged.atf(), new.atf());
}

#[test]
fn test_renumbered_line_keeps_lemmas() {
    let old = annotated("1. kur ra", "šadû I");
    let merged = old.merge(&parse_atf("2. kur ra").unwrap());
    assert_eq!(merged.atf(), "2. kur ra");
    assert_eq!(first_lemma(&merged), vec!["šadû I".to_string()]);
}

#[test]
fn test_alignment_survives_flag_edit() {
    let text = parse_atf("1. kur ra").unwrap();
    let aligned = text
        .update_alignment(&vec![vec![
            AlignmentToken::new("kur", Some(3)),
            AlignmentToken::new("ra", None),
        ]])
        .unwrap();
    let merged = aligned.merge(&parse_atf("1. kur# ra").unwrap());
    assert_eq!(merged.lines()[0].content()[0].alignment(), Some(3));
}

#[test]
fn test_merge_adopts_new_parser_version() {
    let old = Text::with_version(parse_atf("1. kur").unwrap().lines().to_vec(), "0.1.0");
    let merged = old.merge(&parse_atf("1. kur").unwrap());
    assert_eq!(merged.parser_version(), atf_parser::atf::ATF_PARSER_VERSION);
}

fn lemmatized_line() -> impl Strategy<Value = Line> {
    let token = prop_oneof![
        Just(word(vec![reading("bu")])),
        Just(lemmatized(word(vec![reading("bu")]), "W1")),
        Just(lemmatized(word(vec![reading("mu")]), "W2")),
        Just(word(vec![reading("ku")])),
    ];
    (1u32..4, prop::collection::vec(token, 1..6))
        .prop_map(|(number, content)| text_line(number, content))
}

fn text_strategy() -> impl Strategy<Value = Text> {
    prop::collection::vec(
        prop_oneof![
            lemmatized_line(),
            Just(Line::EmptyLine),
            Just(Line::ControlLine(ControlLine::new("@", "obverse"))),
        ],
        0..6,
    )
    .prop_map(Text::new)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_merge_with_itself_is_identity(text in text_strategy()) {
        prop_assert_eq!(text.merge(&text), text);
    }

    #[test]
    fn test_merge_is_deterministic(old in text_strategy(), new in text_strategy()) {
        let first = old.merge(&new);
        let second = old.merge(&new);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.lines().len(), new.lines().len());
        prop_assert_eq!(first.atf(), new.atf());
    }

    #[test]
    fn test_myers_agrees_on_identity(text in text_strategy()) {
        prop_assert_eq!(text.merge_with(&text, DiffAlgorithm::Myers), text);
    }
}
