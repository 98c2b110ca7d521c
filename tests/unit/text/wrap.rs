use super::*;
use crate::foundation::error::QuoteError;

fn mono(s: &str) -> QuoteResult<f32> {
    Ok(s.chars().count() as f32 * 10.0)
}

fn words_per_paragraph(text: &str) -> Vec<Vec<String>> {
    text.split('\n')
        .map(|p| p.split_whitespace().map(str::to_string).collect())
        .collect()
}

#[test]
fn greedy_fill_respects_max_width() {
    let text = "the quick brown fox jumps over the lazy dog";
    let lines = wrap_text(text, 100.0, mono).unwrap();
    assert_eq!(
        lines,
        vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]
    );
    for line in &lines {
        assert!(mono(line).unwrap() <= 100.0, "{line:?} overflows");
    }
}

#[test]
fn words_are_preserved_in_order() {
    let text = "one two  three\tfour\n\nfive six seven eight nine ten";
    let lines = wrap_text(text, 90.0, mono).unwrap();

    let flat: Vec<String> = lines
        .iter()
        .flat_map(|l| l.split_whitespace().map(str::to_string))
        .collect();
    let expected: Vec<String> = words_per_paragraph(text).into_iter().flatten().collect();
    assert_eq!(flat, expected);
}

#[test]
fn long_word_sits_alone_untruncated() {
    let lines = wrap_text("a supercalifragilistic b", 50.0, mono).unwrap();
    assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
}

#[test]
fn long_first_word_is_not_preceded_by_empty_line() {
    let lines = wrap_text("extraordinarily", 30.0, mono).unwrap();
    assert_eq!(lines, vec!["extraordinarily"]);
}

#[test]
fn blank_lines_are_preserved() {
    let lines = wrap_text("A\n\nB", 400.0, mono).unwrap();
    assert_eq!(lines, vec!["A", "", "B"]);

    let lines = wrap_text("A\n   \nB\n", 400.0, mono).unwrap();
    assert_eq!(lines, vec!["A", "", "B", ""]);
}

#[test]
fn wrapping_wrapped_output_is_stable() {
    let text = "Not all those who wander are lost.\n\nThe old that is strong does not wither, deep roots are not reached by the frost.";
    let first = wrap_text(text, 120.0, mono).unwrap();
    let rejoined = first.join("\n");
    let second = wrap_text(&rejoined, 120.0, mono).unwrap();
    assert_eq!(first, second);
}

#[test]
fn rejoined_paragraphs_rewrap_to_same_partition() {
    let text = "Not all those who wander are lost.\n\nThe old that is strong does not wither, deep roots are not reached by the frost.";
    let first = wrap_text(text, 120.0, mono).unwrap();

    let rejoined = first
        .split(|l| l.is_empty())
        .map(|para| para.join(" "))
        .collect::<Vec<_>>()
        .join("\n\n");
    assert_eq!(rejoined, text);

    let second = wrap_text(&rejoined, 120.0, mono).unwrap();
    assert_eq!(first, second);
}

#[test]
fn measurement_errors_propagate() {
    let err = wrap_text("a b", 10.0, |_| Err(QuoteError::measurement("no font")))
        .unwrap_err();
    assert!(matches!(err, QuoteError::Measurement(_)));
}

#[test]
fn empty_text_yields_one_empty_line() {
    assert_eq!(wrap_text("", 10.0, mono).unwrap(), vec![String::new()]);
}
