//! Public conversion API.

use pretty_assertions::assert_eq;
use unibeta::{
    beta_to_greek, beta_to_utf8, beta_to_utf8_with, greek_to_beta, try_beta_to_utf8,
    try_utf8_to_beta, utf8_to_beta, Betacode, ConvertError, Direction, Options,
};

#[test]
fn slice_api_writes_terminator() {
    let mut out = [0xFF_u8; 16];
    let n = beta_to_utf8(b"lo/gos", &mut out);
    assert_eq!(&out[..n], "λ\u{1F79}γος".as_bytes());
    assert_eq!(out[n], 0);

    let mut out = [0xFF_u8; 16];
    let n = utf8_to_beta("λόγος".as_bytes(), &mut out);
    assert_eq!(&out[..n], b"lo/gos");
    assert_eq!(out[n], 0);
}

#[test]
fn input_capacity_bounds_the_scan() {
    let input = *b"abg\0\0\0";
    let mut out = [0_u8; 16];
    let n = beta_to_utf8(&input[..2], &mut out);
    assert_eq!(&out[..n], "αβ".as_bytes());
}

#[test]
fn sigma_defaulting() {
    assert_eq!(beta_to_greek("s2"), beta_to_greek("s"));
    assert_eq!(greek_to_beta("ς"), "s");
    assert_eq!(greek_to_beta("ς."), "s.");
}

#[test]
fn combining_mark_order() {
    // Acute and rough breathing on alpha precompose.
    assert_eq!(beta_to_greek("a/("), "\u{1F05}");
    // Without a precomposed form the marks follow in fixed order.
    assert_eq!(beta_to_greek("k/("), "\u{03BA}\u{0314}\u{0301}");
}

#[test]
fn breathing_directions() {
    // `(` is rough (dasia) and `)` smooth (psili), whatever the mark order.
    assert_eq!(beta_to_greek("a/("), "\u{1F05}");
    assert_eq!(beta_to_greek("a/)"), "\u{1F04}");
    assert_eq!(beta_to_greek("r("), "\u{1FE5}");
    assert_eq!(beta_to_greek("k("), "\u{03BA}\u{0314}");
    assert_eq!(beta_to_greek("k)"), "\u{03BA}\u{0313}");
    assert_eq!(greek_to_beta("\u{1F05}"), "a(/");
}

#[test]
fn quotation_toggling() {
    assert_eq!(beta_to_greek("\"lo/gos\""), "«λ\u{1F79}γος»");
}

#[test]
fn capacity_one_gives_empty_string() {
    let mut out = [0xFF_u8; 1];
    assert_eq!(beta_to_utf8(b"a)/nqrwpos", &mut out), 0);
    assert_eq!(out, [0]);

    let mut out = [0xFF_u8; 1];
    assert_eq!(utf8_to_beta("ἄνθρωπος".as_bytes(), &mut out), 0);
    assert_eq!(out, [0]);
}

#[test]
fn zero_capacity_writes_nothing() {
    let mut out: [u8; 0] = [];
    assert_eq!(beta_to_utf8(b"a", &mut out), 0);
    assert_eq!(utf8_to_beta(b"a", &mut out), 0);
}

#[test]
fn escape_fallback() {
    let mut out = [0_u8; 10];
    let n = utf8_to_beta("\u{2603}".as_bytes(), &mut out);
    assert_eq!(&out[..n], b"{\\u2603}");
}

#[test]
fn escape_without_room_is_skipped() {
    let mut out = [0xFF_u8; 5];
    let n = utf8_to_beta("\u{2603}ab".as_bytes(), &mut out);
    assert_eq!(&out[..=n], b"ab\0");

    let mut out = [0_u8; 5];
    assert_eq!(
        try_utf8_to_beta("\u{2603}ab".as_bytes(), &mut out),
        Err(ConvertError::OutputExhausted {
            written: 2,
            consumed: 5
        })
    );
}

#[test]
fn scalars_above_bmp_escape() {
    assert_eq!(greek_to_beta("a\u{1F600}b"), "a{\\u1F600}b");
}

#[test]
fn stray_continuation_bytes_escape() {
    let mut out = [0_u8; 32];
    let n = utf8_to_beta(&[0xA8, b'a', 0xA9, 0xAF], &mut out);
    assert_eq!(&out[..n], b"{\\uFFFD}a{\\uFFFD}{\\uFFFD}");
}

#[test]
fn unmarked_letters_round_trip() {
    for letter in "abgdezhqiklmncoprtufxywv".chars() {
        let beta = letter.to_string();
        assert_eq!(greek_to_beta(&beta_to_greek(&beta)), beta);
        let capital = format!("*{letter}");
        assert_eq!(greek_to_beta(&beta_to_greek(&capital)), capital);
    }
    assert_eq!(greek_to_beta(&beta_to_greek("s")), "s");
    assert_eq!(greek_to_beta(&beta_to_greek("*s")), "*s");
}

#[test]
fn sentence_round_trip() {
    let beta = "*)en a)rxh=| h)=n o( lo/gos, kai\\ o( lo/gos h)=n pro\\s to\\n qeo/n.";
    let greek = beta_to_greek(beta);
    assert_eq!(
        greek,
        "\u{1F18}ν \u{1F00}ρχ\u{1FC7} \u{1F26}ν \u{1F41} λ\u{1F79}γος, \
         κα\u{1F76} \u{1F41} λ\u{1F79}γος \u{1F26}ν πρ\u{1F78}ς τ\u{1F78}ν θε\u{1F79}ν."
    );
    assert_eq!(greek_to_beta(&greek), beta);
}

#[test]
fn tonos_option() {
    let mut out = [0_u8; 8];
    let n = beta_to_utf8_with(b"a/", &mut out, Options::tonos());
    assert_eq!(&out[..n], "\u{03AC}".as_bytes());
}

#[test]
fn try_api_reports_truncation() {
    let mut out = [0_u8; 5];
    assert_eq!(
        try_beta_to_utf8(b"abg", &mut out),
        Err(ConvertError::OutputExhausted {
            written: 4,
            consumed: 2
        })
    );
    assert_eq!(&out[..5], "αβ\0".as_bytes());

    let mut out = [0_u8; 7];
    assert_eq!(try_beta_to_utf8(b"abg", &mut out), Ok(6));

    let mut out = [0_u8; 3];
    assert_eq!(
        try_utf8_to_beta("αβγ".as_bytes(), &mut out),
        Err(ConvertError::OutputExhausted {
            written: 2,
            consumed: 4
        })
    );
}

#[test]
fn error_messages() {
    let err = ConvertError::OutputExhausted {
        written: 4,
        consumed: 2,
    };
    assert_eq!(
        err.to_string(),
        "output buffer full after 4 bytes (2 input bytes converted)"
    );
}

#[test]
fn betacode_facade() {
    let codec = Betacode::default();
    assert_eq!(codec.capacity(), Betacode::DEFAULT_CAPACITY);
    assert_eq!(codec.beta2greek("qeo/s").as_deref(), Ok("θε\u{1F79}ς"));
    assert_eq!(codec.greek2beta("θεός").as_deref(), Ok("qeo/s"));

    let tonos = Betacode::new().with_options(Options::tonos());
    assert_eq!(tonos.beta2greek("qeo/s").as_deref(), Ok("θε\u{03CC}ς"));
}

#[test]
fn betacode_facade_rejects_overlong_input() {
    let long = "a".repeat(Betacode::DEFAULT_CAPACITY);
    let err = Betacode::new().greek2beta(&long);
    assert!(matches!(
        err,
        Err(ConvertError::OutputExhausted { written: 149, .. })
    ));

    let small = Betacode::with_capacity(4);
    assert!(small.beta2greek("ab").is_err());
    assert_eq!(small.beta2greek("a").as_deref(), Ok("α"));
}

#[test]
fn direction_names() {
    for direction in [Direction::BetaToGreek, Direction::GreekToBeta] {
        assert_eq!(Direction::from_name(direction.name()), Some(direction));
    }
    assert_eq!(Direction::from_name("codepoints"), None);
}

#[test]
fn direction_converts_into_any_sink() {
    let mut out = Vec::new();
    let progress =
        Direction::GreekToBeta.convert_into("αβ".as_bytes(), Options::default(), &mut out);
    assert!(!progress.truncated);
    assert_eq!(progress.consumed, 4);
    assert_eq!(out, b"ab");
}
