//! Regex fragments for the target language's lexical syntax.
//!
//! Each function returns an uncompiled fragment suitable for splicing into
//! a larger pattern. Fragments use only non-capturing groups, so the capture
//! groups of a rule are exactly the ones its own pattern declares.
//!
//! ```text
//! symbol      = `? part (` part)* `?
//! part        = (identifier | named-char) (letter | digit | named-char)*
//! real        = (float | int) ` (float | int)?  |  float
//! base        = int ^^ (real | int)
//! scientific  = (real | int) *^ int
//! pattern     = symbol _{1,3} symbol?  |  _{1,3} symbol
//! ```

/// Letters that may start and continue an identifier: ASCII letters, `$`,
/// Greek letters and `∂`.
const LETTER: &str = concat!(
    r"a-zA-Z$",
    r"\x{0391}-\x{03A9}\x{03B1}-\x{03C9}",
    r"\x{03D1}\x{03D2}\x{03D5}\x{03D6}\x{03F0}\x{03F1}\x{03F5}",
    r"\x{2202}",
);

pub fn identifier() -> String {
    format!("[{LETTER}][{LETTER}0-9]*")
}

/// `\[Name]` escapes, e.g. `\[Alpha]`.
pub fn named_character() -> String {
    r"\\\[[a-zA-Z][a-zA-Z0-9]*\]".to_owned()
}

/// A symbol, optionally qualified with backtick context marks
/// (`` Global`x ``, `` `x ``, `` Ctx` ``).
pub fn symbol() -> String {
    let named = named_character();
    let part = format!("(?:{}|{named})(?:[{LETTER}0-9]|{named})*", identifier());
    format!("`?{part}(?:`{part})*`?")
}

pub fn integer() -> String {
    "[0-9]+".to_owned()
}

/// `1.5`, `.5` or `1.`.
pub fn float() -> String {
    r"[0-9]*\.[0-9]+|[0-9]+\.".to_owned()
}

/// Precision or accuracy marked numbers (`` 1.5`20 ``, `` 3` ``), or a
/// plain float.
pub fn real() -> String {
    let (int, float) = (integer(), float());
    format!("(?:{float}|{int})`(?:{float}|{int})?|{float}")
}

/// Base-N literals such as `2^^101`, `8 ^^ 17` or `` 2^^101`10 ``.
///
/// Digits after `^^` are decimal only.
pub fn base() -> String {
    let int = integer();
    format!(r"{int}\s*\^\^\s*(?:{}|{int})", real())
}

/// `1.2*^3`, `` 1.5`10*^4 ``. The exponent is an unsigned integer.
pub fn scientific() -> String {
    let int = integer();
    format!(r"(?:{}|{int})\s*\*\^\s*{int}", real())
}

/// Blanks bound to or restricted by a symbol (`x_`, `x__Integer`, `_List`).
///
/// Bare blanks with no symbol on either side are operators.
pub fn pattern() -> String {
    let sym = symbol();
    format!("{sym}_{{1,3}}(?:{sym})?|_{{1,3}}{sym}")
}

/// `#name`, `#"name"`, `#`, `##`, `#2`, `##3`.
pub fn slot() -> String {
    let sym = symbol();
    format!(r##"#{sym}|#"{sym}"|##?[0-9]*"##)
}

/// `::` name with optional space in between, as three capture groups.
pub fn message() -> String {
    format!(r"(::)(\s*)({})", symbol())
}
