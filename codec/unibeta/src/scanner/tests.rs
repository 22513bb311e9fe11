use pretty_assertions::assert_eq;

use super::*;

fn tokens(input: &str) -> Vec<BetaToken> {
    BetaScanner::new(input.as_bytes())
        .map(|scanned| scanned.token)
        .collect()
}

fn letter(letter: u8, marks: CombiningMarks) -> BetaToken {
    BetaToken::Letter { letter, marks }
}

// === Sigma ===

#[test]
fn sigma_form_inference() {
    assert_eq!(SigmaForm::infer(b'a'), SigmaForm::Medial);
    assert_eq!(SigmaForm::infer(b'Z'), SigmaForm::Medial);
    assert_eq!(SigmaForm::infer(b'\''), SigmaForm::Medial);
    assert_eq!(SigmaForm::infer(b' '), SigmaForm::Final);
    assert_eq!(SigmaForm::infer(b','), SigmaForm::Final);
    assert_eq!(SigmaForm::infer(b'*'), SigmaForm::Final);
    assert_eq!(SigmaForm::infer(0), SigmaForm::Final);
}

#[test]
fn sigma_digits() {
    for form in [SigmaForm::Medial, SigmaForm::Final, SigmaForm::Lunate] {
        assert_eq!(SigmaForm::from_digit(form.digit()), Some(form));
    }
    assert_eq!(SigmaForm::from_digit(b'4'), None);
    assert_eq!(SigmaForm::from_digit(b's'), None);
}

#[test]
fn bare_sigma_uses_lookahead() {
    assert_eq!(
        tokens("sa"),
        vec![BetaToken::Sigma(SigmaForm::Medial), letter(b'a', CombiningMarks::empty())]
    );
    assert_eq!(tokens("s"), vec![BetaToken::Sigma(SigmaForm::Final)]);
    assert_eq!(
        tokens("s "),
        vec![BetaToken::Sigma(SigmaForm::Final), BetaToken::Other(b' ')]
    );
    assert_eq!(
        tokens("s'"),
        vec![BetaToken::Sigma(SigmaForm::Medial), BetaToken::Other(b'\'')]
    );
}

#[test]
fn explicit_sigma_digit_is_consumed() {
    let scanned: Vec<_> = BetaScanner::new(b"s2s3").collect();
    assert_eq!(scanned.len(), 2);
    assert_eq!(scanned[0].token, BetaToken::Sigma(SigmaForm::Final));
    assert_eq!(scanned[0].source, b"s2");
    assert_eq!(scanned[1].token, BetaToken::Sigma(SigmaForm::Lunate));
    assert_eq!(scanned[1].start, 2);
    assert_eq!(scanned[1].end(), 4);
}

#[test]
fn uppercase_sigma_without_asterisk_is_small() {
    assert_eq!(tokens("S"), vec![BetaToken::Sigma(SigmaForm::Final)]);
}

#[test]
fn sigma_does_not_take_marks() {
    assert_eq!(
        tokens("s/"),
        vec![BetaToken::Sigma(SigmaForm::Final), BetaToken::Other(b'/')]
    );
}

#[test]
fn capital_sigma() {
    assert_eq!(
        tokens("*s"),
        vec![BetaToken::CapitalSigma {
            lunate: false,
            marks: CombiningMarks::empty()
        }]
    );
    assert_eq!(
        tokens("*s3"),
        vec![BetaToken::CapitalSigma {
            lunate: true,
            marks: CombiningMarks::empty()
        }]
    );
}

// === Letters and marks ===

#[test]
fn small_letter_collects_trailing_marks() {
    let scanned: Vec<_> = BetaScanner::new(b"a)/|b").collect();
    assert_eq!(
        scanned[0].token,
        letter(
            b'a',
            CombiningMarks::PSILI | CombiningMarks::OXIA | CombiningMarks::YPOGEGRAMMENI
        )
    );
    assert_eq!(scanned[0].source, b"a)/|");
    assert_eq!(scanned[1].token, letter(b'b', CombiningMarks::empty()));
}

#[test]
fn uppercase_without_asterisk_is_small() {
    assert_eq!(tokens("A("), vec![letter(b'a', CombiningMarks::DASIA)]);
}

#[test]
fn capital_takes_marks_before_letter() {
    assert_eq!(
        tokens("*)/a"),
        vec![letter(b'A', CombiningMarks::PSILI | CombiningMarks::OXIA)]
    );
}

#[test]
fn capital_takes_only_subscript_after_letter() {
    assert_eq!(
        tokens("*(w|"),
        vec![letter(b'W', CombiningMarks::DASIA | CombiningMarks::YPOGEGRAMMENI)]
    );
    assert_eq!(
        tokens("*a/"),
        vec![letter(b'A', CombiningMarks::empty()), BetaToken::Other(b'/')]
    );
}

#[test]
fn repeated_marks_coalesce() {
    assert_eq!(tokens("e//"), vec![letter(b'e', CombiningMarks::OXIA)]);
}

#[test]
fn stray_asterisk_is_literal() {
    assert_eq!(
        tokens("*)1"),
        vec![
            BetaToken::Other(b'*'),
            BetaToken::Other(b')'),
            BetaToken::Other(b'1')
        ]
    );
    assert_eq!(tokens("*"), vec![BetaToken::Other(b'*')]);
}

// === Other tokens ===

#[test]
fn quote_and_punctuation() {
    assert_eq!(
        tokens("\"a\";"),
        vec![
            BetaToken::Quote,
            letter(b'a', CombiningMarks::empty()),
            BetaToken::Quote,
            BetaToken::Other(b';'),
        ]
    );
}

#[test]
fn non_ascii_sequence_passes_through_whole() {
    let input = "a\u{2603}b";
    let scanned: Vec<_> = BetaScanner::new(input.as_bytes()).collect();
    assert_eq!(scanned.len(), 3);
    assert_eq!(scanned[1].token, BetaToken::Passthrough);
    assert_eq!(scanned[1].source, "\u{2603}".as_bytes());
}

#[test]
fn truncated_sequence_is_clamped() {
    let scanned: Vec<_> = BetaScanner::new(&[b'a', 0xE2, 0x98]).collect();
    assert_eq!(scanned.len(), 2);
    assert_eq!(scanned[1].source, &[0xE2, 0x98]);
}

#[test]
fn input_ends_at_nul() {
    assert_eq!(tokens("ab\0cd").len(), 2);
    let mut scanner = BetaScanner::new(b"a\0b");
    assert!(scanner.next_token().is_some());
    assert_eq!(scanner.pos(), 1);
    assert!(scanner.next_token().is_none());
}

#[test]
fn empty_input() {
    assert!(tokens("").is_empty());
}
