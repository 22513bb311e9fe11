//! Greek code points back to Beta Code.
//!
//! Two 256-entry tables cover the Greek and Coptic block (U+0300..U+03FF,
//! which also holds the combining diacritics) and Greek Extended
//! (U+1F00..U+1FFF). Each entry carries the Beta Code spelling and whether
//! the code point is a letter, which decides how a preceding sigma is
//! written. An empty spelling means "no Beta Code form".
//!
//! Lowercase letters are spelled letter first, then breathing, diaeresis,
//! accent and iota subscript (`a)/|`). Capitals put `*` and the marks
//! before the letter and the iota subscript after it (`*)/a|`).

/// Beta Code spelling of one Greek code point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReverseEntry {
    pub beta: &'static str,
    pub letter: bool,
}

impl ReverseEntry {
    /// Returns `true` if the code point has a Beta Code spelling.
    pub fn is_mapped(&self) -> bool {
        !self.beta.is_empty()
    }
}

const NONE: ReverseEntry = ReverseEntry {
    beta: "",
    letter: false,
};

const fn ltr(beta: &'static str) -> ReverseEntry {
    ReverseEntry { beta, letter: true }
}

const fn sym(beta: &'static str) -> ReverseEntry {
    ReverseEntry {
        beta,
        letter: false,
    }
}

/// Entry for a code point in U+0300..U+03FF, `None` outside the block.
pub fn reverse_03xx(codepoint: u32) -> Option<&'static ReverseEntry> {
    let index = usize::try_from(codepoint.checked_sub(0x0300)?).ok()?;
    GREEK_03XX.get(index)
}

/// Entry for a code point in U+1F00..U+1FFF, `None` outside the block.
pub fn reverse_1fxx(codepoint: u32) -> Option<&'static ReverseEntry> {
    let index = usize::try_from(codepoint.checked_sub(0x1F00)?).ok()?;
    GREEK_1FXX.get(index)
}

#[rustfmt::skip]
static GREEK_03XX: [ReverseEntry; 256] = [
    // U+0300
    sym("\\"), sym("/"), NONE, NONE, NONE, NONE, NONE, NONE,
    // U+0308
    sym("+"), NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    // U+0310
    NONE, NONE, NONE, sym(")"), sym("("), NONE, NONE, NONE,
    // U+0318
    NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    // U+0320
    NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    // U+0328
    NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    // U+0330
    NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    // U+0338
    NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    // U+0340
    NONE, NONE, sym("="), sym(")"), sym("+/"), sym("|"), NONE, NONE,
    // U+0348
    NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    // U+0350
    NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    // U+0358
    NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    // U+0360
    NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    // U+0368
    NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    // U+0370
    NONE, NONE, NONE, NONE, sym("#"), NONE, NONE, NONE,
    // U+0378
    NONE, NONE, sym("|"), NONE, NONE, NONE, sym(";"), NONE,
    // U+0380
    NONE, NONE, NONE, NONE, sym("/"), sym("+/"), ltr("*/a"), sym(":"),
    // U+0388
    ltr("*/e"), ltr("*/h"), ltr("*/i"), NONE, ltr("*/o"), NONE, ltr("*/u"), ltr("*/w"),
    // U+0390
    ltr("i+/"), ltr("*a"), ltr("*b"), ltr("*g"), ltr("*d"), ltr("*e"), ltr("*z"), ltr("*h"),
    // U+0398
    ltr("*q"), ltr("*i"), ltr("*k"), ltr("*l"), ltr("*m"), ltr("*n"), ltr("*c"), ltr("*o"),
    // U+03A0
    ltr("*p"), ltr("*r"), NONE, ltr("*s"), ltr("*t"), ltr("*u"), ltr("*f"), ltr("*x"),
    // U+03A8
    ltr("*y"), ltr("*w"), ltr("*+i"), ltr("*+u"), ltr("a/"), ltr("e/"), ltr("h/"), ltr("i/"),
    // U+03B0
    ltr("u+/"), ltr("a"), ltr("b"), ltr("g"), ltr("d"), ltr("e"), ltr("z"), ltr("h"),
    // U+03B8
    ltr("q"), ltr("i"), ltr("k"), ltr("l"), ltr("m"), ltr("n"), ltr("c"), ltr("o"),
    // U+03C0
    ltr("p"), ltr("r"), ltr("s2"), ltr("s1"), ltr("t"), ltr("u"), ltr("f"), ltr("x"),
    // U+03C8
    ltr("y"), ltr("w"), ltr("i+"), ltr("u+"), ltr("o/"), ltr("u/"), ltr("w/"), NONE,
    // U+03D0
    ltr("b"), ltr("q"), NONE, NONE, NONE, ltr("f"), ltr("p"), NONE,
    // U+03D8
    NONE, NONE, NONE, NONE, ltr("*v"), ltr("v"), NONE, NONE,
    // U+03E0
    NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    // U+03E8
    NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    // U+03F0
    ltr("k"), ltr("r"), ltr("s3"), NONE, NONE, ltr("e"), NONE, NONE,
    // U+03F8
    NONE, ltr("*s3"), NONE, NONE, NONE, NONE, NONE, NONE,
];

#[rustfmt::skip]
static GREEK_1FXX: [ReverseEntry; 256] = [
    // U+1F00
    ltr("a)"), ltr("a("), ltr("a)\\"), ltr("a(\\"), ltr("a)/"), ltr("a(/"), ltr("a)="), ltr("a(="),
    // U+1F08
    ltr("*)a"), ltr("*(a"), ltr("*)\\a"), ltr("*(\\a"), ltr("*)/a"), ltr("*(/a"), ltr("*)=a"), ltr("*(=a"),
    // U+1F10
    ltr("e)"), ltr("e("), ltr("e)\\"), ltr("e(\\"), ltr("e)/"), ltr("e(/"), NONE, NONE,
    // U+1F18
    ltr("*)e"), ltr("*(e"), ltr("*)\\e"), ltr("*(\\e"), ltr("*)/e"), ltr("*(/e"), NONE, NONE,
    // U+1F20
    ltr("h)"), ltr("h("), ltr("h)\\"), ltr("h(\\"), ltr("h)/"), ltr("h(/"), ltr("h)="), ltr("h(="),
    // U+1F28
    ltr("*)h"), ltr("*(h"), ltr("*)\\h"), ltr("*(\\h"), ltr("*)/h"), ltr("*(/h"), ltr("*)=h"), ltr("*(=h"),
    // U+1F30
    ltr("i)"), ltr("i("), ltr("i)\\"), ltr("i(\\"), ltr("i)/"), ltr("i(/"), ltr("i)="), ltr("i(="),
    // U+1F38
    ltr("*)i"), ltr("*(i"), ltr("*)\\i"), ltr("*(\\i"), ltr("*)/i"), ltr("*(/i"), ltr("*)=i"), ltr("*(=i"),
    // U+1F40
    ltr("o)"), ltr("o("), ltr("o)\\"), ltr("o(\\"), ltr("o)/"), ltr("o(/"), NONE, NONE,
    // U+1F48
    ltr("*)o"), ltr("*(o"), ltr("*)\\o"), ltr("*(\\o"), ltr("*)/o"), ltr("*(/o"), NONE, NONE,
    // U+1F50
    ltr("u)"), ltr("u("), ltr("u)\\"), ltr("u(\\"), ltr("u)/"), ltr("u(/"), ltr("u)="), ltr("u(="),
    // U+1F58
    NONE, ltr("*(u"), NONE, ltr("*(\\u"), NONE, ltr("*(/u"), NONE, ltr("*(=u"),
    // U+1F60
    ltr("w)"), ltr("w("), ltr("w)\\"), ltr("w(\\"), ltr("w)/"), ltr("w(/"), ltr("w)="), ltr("w(="),
    // U+1F68
    ltr("*)w"), ltr("*(w"), ltr("*)\\w"), ltr("*(\\w"), ltr("*)/w"), ltr("*(/w"), ltr("*)=w"), ltr("*(=w"),
    // U+1F70
    ltr("a\\"), ltr("a/"), ltr("e\\"), ltr("e/"), ltr("h\\"), ltr("h/"), ltr("i\\"), ltr("i/"),
    // U+1F78
    ltr("o\\"), ltr("o/"), ltr("u\\"), ltr("u/"), ltr("w\\"), ltr("w/"), NONE, NONE,
    // U+1F80
    ltr("a)|"), ltr("a(|"), ltr("a)\\|"), ltr("a(\\|"), ltr("a)/|"), ltr("a(/|"), ltr("a)=|"), ltr("a(=|"),
    // U+1F88
    ltr("*)a|"), ltr("*(a|"), ltr("*)\\a|"), ltr("*(\\a|"), ltr("*)/a|"), ltr("*(/a|"), ltr("*)=a|"), ltr("*(=a|"),
    // U+1F90
    ltr("h)|"), ltr("h(|"), ltr("h)\\|"), ltr("h(\\|"), ltr("h)/|"), ltr("h(/|"), ltr("h)=|"), ltr("h(=|"),
    // U+1F98
    ltr("*)h|"), ltr("*(h|"), ltr("*)\\h|"), ltr("*(\\h|"), ltr("*)/h|"), ltr("*(/h|"), ltr("*)=h|"), ltr("*(=h|"),
    // U+1FA0
    ltr("w)|"), ltr("w(|"), ltr("w)\\|"), ltr("w(\\|"), ltr("w)/|"), ltr("w(/|"), ltr("w)=|"), ltr("w(=|"),
    // U+1FA8
    ltr("*)w|"), ltr("*(w|"), ltr("*)\\w|"), ltr("*(\\w|"), ltr("*)/w|"), ltr("*(/w|"), ltr("*)=w|"), ltr("*(=w|"),
    // U+1FB0
    NONE, NONE, ltr("a\\|"), ltr("a|"), ltr("a/|"), NONE, ltr("a="), ltr("a=|"),
    // U+1FB8
    NONE, NONE, ltr("*\\a"), ltr("*/a"), ltr("*a|"), sym(")"), sym("|"), sym(")"),
    // U+1FC0
    sym("="), sym("+="), ltr("h\\|"), ltr("h|"), ltr("h/|"), NONE, ltr("h="), ltr("h=|"),
    // U+1FC8
    ltr("*\\e"), ltr("*/e"), ltr("*\\h"), ltr("*/h"), ltr("*h|"), sym(")\\"), sym(")/"), sym(")="),
    // U+1FD0
    NONE, NONE, ltr("i+\\"), ltr("i+/"), NONE, NONE, ltr("i="), ltr("i+="),
    // U+1FD8
    NONE, NONE, ltr("*\\i"), ltr("*/i"), NONE, sym("(\\"), sym("(/"), sym("(="),
    // U+1FE0
    NONE, NONE, ltr("u+\\"), ltr("u+/"), ltr("r)"), ltr("r("), ltr("u="), ltr("u+="),
    // U+1FE8
    NONE, NONE, ltr("*\\u"), ltr("*/u"), ltr("*(r"), sym("+\\"), sym("+/"), sym("\\"),
    // U+1FF0
    NONE, NONE, ltr("w\\|"), ltr("w|"), ltr("w/|"), NONE, ltr("w="), ltr("w=|"),
    // U+1FF8
    ltr("*\\o"), ltr("*/o"), ltr("*\\w"), ltr("*/w"), ltr("*w|"), sym("/"), sym("("), NONE,
];
