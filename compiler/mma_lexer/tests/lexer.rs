//! End-to-end lexing tests: rule table, builtin and Unicode passes, and
//! lexical scope annotation through the public API.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use mma_lexer::symbols;
use mma_lexer::TokenKind::{
    self, Builtin, Comment, Group, LocalScope, Message, Number, Operator, Pattern, Slot,
    String as Str, Symbol, Unknown, Whitespace as Ws,
};
use mma_lexer::{LexerConfig, MathematicaLexer, Passes, ScopeResolution, SymbolTables};
use pretty_assertions::assert_eq;

fn lexer() -> MathematicaLexer {
    MathematicaLexer::standard().unwrap()
}

fn lex(text: &str) -> Vec<(TokenKind, &str)> {
    lexer().lex(text).into_iter().map(|t| (t.kind, t.text)).collect()
}

/// Every input in `texts` lexes to exactly one token of `kind`.
fn assert_single(lexer: &MathematicaLexer, texts: &[&str], kind: TokenKind) {
    for text in texts {
        let tokens: Vec<_> = lexer.tokens(text).map(|t| (t.kind, t.text)).collect();
        assert_eq!(tokens, vec![(kind, *text)], "lexing {text:?}");
    }
}

// === Comments ===

#[test]
fn comments() {
    assert_eq!(
        lex("(* a comment *)"),
        vec![(Comment, "(*"), (Comment, " a comment "), (Comment, "*)")]
    );
}

#[test]
fn comments_with_code() {
    assert_eq!(
        lex("(* Plot[Sin[x], {x, 0, 2 Pi}] *)"),
        vec![
            (Comment, "(*"),
            (Comment, " Plot[Sin[x], {x, 0, 2 Pi}] "),
            (Comment, "*)"),
        ]
    );
}

#[test]
fn nested_comments() {
    assert_eq!(
        lex("(* foo (* bar *) baz *)"),
        vec![
            (Comment, "(*"),
            (Comment, " foo "),
            (Comment, "(*"),
            (Comment, " bar "),
            (Comment, "*)"),
            (Comment, " baz "),
            (Comment, "*)"),
        ]
    );
}

#[test]
fn nested_comment_is_one_region() {
    let text = "(* a (* b *) c *)";
    let lexer = lexer();
    let mut tokens = lexer.tokens(text);
    let mut max_depth = 0;
    let mut last_end = 0;
    while let Some(token) = tokens.next() {
        assert_eq!(token.kind, Comment);
        max_depth = max_depth.max(tokens.rule_set_depth());
        last_end = token.end();
    }
    assert_eq!(max_depth, 3);
    assert_eq!(tokens.rule_set_depth(), 1);
    assert_eq!(last_end, text.chars().count());
}

#[test]
fn multiline_comment() {
    assert_eq!(
        lex("(* a comment\non two lines *)"),
        vec![
            (Comment, "(*"),
            (Comment, " a comment\non two lines "),
            (Comment, "*)"),
        ]
    );
}

#[test]
fn unterminated_comment_runs_to_end() {
    let tokens = lex("(* open f[x]");
    assert!(tokens.iter().all(|(kind, _)| *kind == Comment));
}

// === Strings ===

#[test]
fn strings() {
    assert_eq!(
        lex("\"a string\""),
        vec![(Str, "\""), (Str, "a string"), (Str, "\"")]
    );
    assert_eq!(
        lex(r#""a string \" with a quote""#),
        vec![
            (Str, "\""),
            (Str, "a string "),
            (Str, r#"\""#),
            (Str, " with a quote"),
            (Str, "\""),
        ]
    );
    assert_eq!(
        lex(r#""a string with a newline\n""#),
        vec![
            (Str, "\""),
            (Str, "a string with a newline"),
            (Str, r"\n"),
            (Str, "\""),
        ]
    );
    assert_eq!(
        lex(r#""a string with \ two backslashes""#),
        vec![
            (Str, "\""),
            (Str, "a string with "),
            (Str, r"\"),
            (Str, " two backslashes"),
            (Str, "\""),
        ]
    );
}

#[test]
fn string_closing_quote_on_newline() {
    assert_eq!(
        lex("\"test string\n\"abc"),
        vec![
            (Str, "\""),
            (Str, "test string\n"),
            (Str, "\""),
            (Symbol, "abc"),
        ]
    );
}

#[test]
fn unterminated_string() {
    assert_eq!(lex("\"abc"), vec![(Str, "\""), (Str, "abc")]);
}

// === Numbers ===

#[test]
fn numbers() {
    let lexer = lexer();
    assert_single(&lexer, &["123"], Number);
    assert_single(&lexer, &["1.23", "10.1", ".123"], Number);
    assert_single(&lexer, &["1`", "1.2`", "1.23`30", "20`20"], Number);
    assert_single(&lexer, &["2^^101", "8 ^^ 17", "10^^ 3.4", "2^^101`10"], Number);
    assert_single(&lexer, &["1*^3", "2 *^23", "1.23*^4", "1.5`10*^4"], Number);
}

#[test]
fn base_digits_are_decimal() {
    assert_eq!(lex("2^^101`10"), vec![(Number, "2^^101`10")]);
    assert_eq!(lex("2^^abc")[0], (Number, "2"));
    assert_eq!(lex("2^^abc").last(), Some(&(Symbol, "abc")));
}

#[test]
fn scientific_exponent_is_unsigned() {
    let lexed = lex("1.5*^-3");
    assert_eq!(lexed[0], (Number, "1.5"));
    assert_eq!(lexed.last(), Some(&(Number, "3")));
}

// === Patterns, slots, messages ===

#[test]
fn patterns() {
    assert_single(
        &lexer(),
        &[
            "_Head",
            "__Head",
            "___Head",
            "x_Head",
            "x__Head",
            "x___Head",
            "Foo`Bar_Head",
            "Foo`Bar__Integer",
            "Foo`Bar___Baz",
            "Foo`Bar_Ctx`Baz",
            "Foo`Bar__Ctx`Baz",
            "Foo`Bar___Ctx`Baz`Qux",
        ],
        Pattern,
    );
}

#[test]
fn slots() {
    assert_single(
        &lexer(),
        &["#", "#1", "#234", "##", "##2", "##23", "#foo", "#\"foo\"", "#foo`bar", "#Foo$1`Bar2$"],
        Slot,
    );
}

#[test]
fn messages() {
    assert_eq!(
        lex("General::foo"),
        vec![(Builtin, "General"), (Operator, "::"), (Message, "foo")]
    );
    assert_eq!(
        lex("Foo::bar"),
        vec![(Symbol, "Foo"), (Operator, "::"), (Message, "bar")]
    );
    assert_eq!(
        lex("Foo`Bar::baz"),
        vec![(Symbol, "Foo`Bar"), (Operator, "::"), (Message, "baz")]
    );
    assert_eq!(
        lex("f:: usage"),
        vec![(Symbol, "f"), (Operator, "::"), (Ws, " "), (Message, "usage")]
    );
}

// === Operators and symbols ===

#[test]
fn operators() {
    assert_single(&lexer(), symbols::OPERATORS, Operator);
}

#[test]
fn symbols() {
    assert_single(
        &lexer(),
        &["foo", "Foo", "camelCase", "Context`symbol", "`symbol", "$foo`bar", "$Bar`Baz`Qux"],
        Symbol,
    );
}

#[test]
fn get() {
    assert_eq!(lex("<<Foo`"), vec![(Operator, "<<"), (Symbol, "Foo`")]);
    assert_eq!(lex("<<Foo`Bar`"), vec![(Operator, "<<"), (Symbol, "Foo`Bar`")]);
}

#[test]
fn builtins() {
    assert_single(&lexer(), symbols::SYSTEM_SYMBOLS, Builtin);
}

#[test]
fn builtins_outside_the_table_need_registering() {
    assert_eq!(lex("ParetoDistribution"), vec![(Symbol, "ParetoDistribution")]);

    let tables = SymbolTables::standard().with_builtin("ParetoDistribution");
    let lexer = MathematicaLexer::new(LexerConfig::default().with_tables(tables)).unwrap();
    let kinds: Vec<_> = lexer.lex("ParetoDistribution").iter().map(|t| t.kind).collect();
    assert_eq!(kinds, [Builtin]);
}

// === Unicode ===

fn as_strings(chars: &[char]) -> Vec<String> {
    chars.iter().map(char::to_string).collect()
}

fn assert_single_chars(chars: &[char], kind: TokenKind) {
    let lexer = lexer();
    let texts = as_strings(chars);
    let texts: Vec<&str> = texts.iter().map(String::as_str).collect();
    assert_single(&lexer, &texts, kind);
}

#[test]
fn unicode_builtins() {
    assert_single_chars(symbols::UNICODE_SYSTEM_SYMBOLS, Builtin);
}

#[test]
fn unicode_groupings() {
    assert_single_chars(symbols::UNICODE_GROUPINGS, Group);
}

#[test]
fn unicode_operators() {
    assert_single_chars(symbols::UNICODE_OPERATORS, Operator);
}

#[test]
fn unicode_undefined() {
    assert_single_chars(symbols::UNICODE_SYSTEM_UNDEFINED_SYMBOLS, Symbol);
}

#[test]
fn unknown_code_point() {
    assert_eq!(lex("a☃"), vec![(Symbol, "a"), (Unknown, "☃")]);
}

#[test]
fn unicode_greek() {
    assert_eq!(lex("varλ1a"), vec![(Symbol, "varλ1a")]);
    assert_eq!(lex("Δ"), vec![(Symbol, "Δ")]);
    assert_eq!(
        lex("f[Δx_List] := Δx"),
        vec![
            (Symbol, "f"),
            (Group, "["),
            (Pattern, "Δx_List"),
            (Group, "]"),
            (Ws, " "),
            (Operator, ":="),
            (Ws, " "),
            (Symbol, "Δx"),
        ]
    );
    assert_eq!(lex("a∂_"), vec![(Pattern, "a∂_")]);
}

// === Lexical scope ===

#[test]
fn lexical_scope_simple() {
    assert_eq!(
        lex("Block[{x = 1}, Sin[x]]"),
        vec![
            (Builtin, "Block"),
            (Group, "["),
            (Group, "{"),
            (LocalScope, "x"),
            (Ws, " "),
            (Operator, "="),
            (Ws, " "),
            (Number, "1"),
            (Group, "}"),
            (Group, ","),
            (Ws, " "),
            (Builtin, "Sin"),
            (Group, "["),
            (LocalScope, "x"),
            (Group, "]"),
            (Group, "]"),
        ]
    );
    assert_eq!(
        lex("Module[{y := Cos[x]}, x + y]"),
        vec![
            (Builtin, "Module"),
            (Group, "["),
            (Group, "{"),
            (LocalScope, "y"),
            (Ws, " "),
            (Operator, ":="),
            (Ws, " "),
            (Builtin, "Cos"),
            (Group, "["),
            (Symbol, "x"),
            (Group, "]"),
            (Group, "}"),
            (Group, ","),
            (Ws, " "),
            (Symbol, "x"),
            (Ws, " "),
            (Operator, "+"),
            (Ws, " "),
            (LocalScope, "y"),
            (Group, "]"),
        ]
    );
    assert_eq!(
        lex("With[{$foo = 1}, f[$foo]]"),
        vec![
            (Builtin, "With"),
            (Group, "["),
            (Group, "{"),
            (LocalScope, "$foo"),
            (Ws, " "),
            (Operator, "="),
            (Ws, " "),
            (Number, "1"),
            (Group, "}"),
            (Group, ","),
            (Ws, " "),
            (Symbol, "f"),
            (Group, "["),
            (LocalScope, "$foo"),
            (Group, "]"),
            (Group, "]"),
        ]
    );
}

#[test]
fn lexical_scope_nested() {
    assert_eq!(
        lex("Block[{Plus = Times}, x + With[{y = 1}, 3 * y]]"),
        vec![
            (Builtin, "Block"),
            (Group, "["),
            (Group, "{"),
            (LocalScope, "Plus"),
            (Ws, " "),
            (Operator, "="),
            (Ws, " "),
            (Builtin, "Times"),
            (Group, "}"),
            (Group, ","),
            (Ws, " "),
            (Symbol, "x"),
            (Ws, " "),
            (Operator, "+"),
            (Ws, " "),
            (Builtin, "With"),
            (Group, "["),
            (Group, "{"),
            (LocalScope, "y"),
            (Ws, " "),
            (Operator, "="),
            (Ws, " "),
            (Number, "1"),
            (Group, "}"),
            (Group, ","),
            (Ws, " "),
            (Number, "3"),
            (Ws, " "),
            (Operator, "*"),
            (Ws, " "),
            (LocalScope, "y"),
            (Group, "]"),
            (Group, "]"),
        ]
    );
}

#[test]
fn lexical_scope_nasty() {
    let text =
        "Block[{x=Module[{y=<|a->1,b->2|>},y],z=With[{k={1,2}},k*3]}, x+y*Block[{k=3},f[k]]]";
    assert_eq!(
        lex(text),
        vec![
            (Builtin, "Block"),
            (Group, "["),
            (Group, "{"),
            (LocalScope, "x"),
            (Operator, "="),
            (Builtin, "Module"),
            (Group, "["),
            (Group, "{"),
            (LocalScope, "y"),
            (Operator, "="),
            (Group, "<|"),
            (Symbol, "a"),
            (Operator, "->"),
            (Number, "1"),
            (Group, ","),
            (Symbol, "b"),
            (Operator, "->"),
            (Number, "2"),
            (Group, "|>"),
            (Group, "}"),
            (Group, ","),
            (LocalScope, "y"),
            (Group, "]"),
            (Group, ","),
            (LocalScope, "z"),
            (Operator, "="),
            (Builtin, "With"),
            (Group, "["),
            (Group, "{"),
            (LocalScope, "k"),
            (Operator, "="),
            (Group, "{"),
            (Number, "1"),
            (Group, ","),
            (Number, "2"),
            (Group, "}"),
            (Group, "}"),
            (Group, ","),
            (LocalScope, "k"),
            (Operator, "*"),
            (Number, "3"),
            (Group, "]"),
            (Group, "}"),
            (Group, ","),
            (Ws, " "),
            (LocalScope, "x"),
            (Operator, "+"),
            (Symbol, "y"),
            (Operator, "*"),
            (Builtin, "Block"),
            (Group, "["),
            (Group, "{"),
            (LocalScope, "k"),
            (Operator, "="),
            (Number, "3"),
            (Group, "}"),
            (Group, ","),
            (Symbol, "f"),
            (Group, "["),
            (LocalScope, "k"),
            (Group, "]"),
            (Group, "]"),
            (Group, "]"),
        ]
    );
}

/// Kinds of every token spelled `name`.
fn kinds_of(lexer: &MathematicaLexer, text: &str, name: &str) -> Vec<TokenKind> {
    lexer
        .tokens(text)
        .filter(|t| t.text == name)
        .map(|t| t.kind)
        .collect()
}

#[test]
fn shadowing() {
    let lexer = lexer();
    assert_eq!(
        kinds_of(&lexer, "Block[{x=1}, Module[{x=2}, x]]", "x"),
        [LocalScope, LocalScope, LocalScope]
    );
}

#[test]
fn right_hand_side_exclusion() {
    let lexer = lexer();
    let text = "Block[{x = Block[{y = 1}, y]}, x]";
    assert_eq!(kinds_of(&lexer, text, "x"), [LocalScope, LocalScope]);
    assert_eq!(kinds_of(&lexer, text, "y"), [LocalScope, LocalScope]);
}

#[test]
fn comma_disambiguation() {
    let lexer = lexer();
    let text = "Block[{x = {1, 2}, y = 3}, x+y]";
    assert_eq!(kinds_of(&lexer, text, "x"), [LocalScope, LocalScope]);
    assert_eq!(kinds_of(&lexer, text, "y"), [LocalScope, LocalScope]);
}

#[test]
fn scope_state_is_fresh_per_input() {
    let lexer = lexer();
    assert_eq!(kinds_of(&lexer, "Module[{x}, x", "x"), [LocalScope, LocalScope]);
    assert_eq!(kinds_of(&lexer, "x", "x"), [Symbol]);
}

#[test]
fn enclosing_resolution() {
    let config = LexerConfig::default().with_resolution(ScopeResolution::Enclosing);
    let lexer = MathematicaLexer::new(config).unwrap();
    assert_eq!(
        kinds_of(&lexer, "Module[{x}, With[{y = 2}, x y]]", "x"),
        [LocalScope, LocalScope]
    );
}

// === Configuration ===

#[test]
fn raw_config_skips_annotation() {
    let lexer = MathematicaLexer::new(LexerConfig::raw()).unwrap();
    let kinds: Vec<_> = lexer.tokens("Block[{x}, Sin[x]] ∞").map(|t| t.kind).collect();
    assert!(!kinds.contains(&LocalScope));
    assert!(!kinds.contains(&Builtin));
    assert_eq!(kinds.last(), Some(&Unknown));
}

#[test]
fn scope_pass_needs_builtin_pass() {
    let config = LexerConfig::default().with_passes(Passes::LEXICAL_SCOPE);
    let lexer = MathematicaLexer::new(config).unwrap();
    assert_eq!(kinds_of(&lexer, "Block[{x}, x]", "x"), [Symbol, Symbol]);
}

#[test]
fn custom_scoping_keyword() {
    let tables = SymbolTables::standard().with_scoping_keyword("DynamicModule");
    let lexer = MathematicaLexer::new(LexerConfig::default().with_tables(tables)).unwrap();
    assert_eq!(
        kinds_of(&lexer, "DynamicModule[{x}, x]", "x"),
        [LocalScope, LocalScope]
    );
}

#[test]
fn custom_operator() {
    let tables = SymbolTables::standard().with_operator("<->");
    let lexer = MathematicaLexer::new(LexerConfig::default().with_tables(tables)).unwrap();
    assert_eq!(kinds_of(&lexer, "a<->b", "<->"), [Operator]);
}

#[test]
fn raw_tokens_match_rule_table() {
    let lexer = lexer();
    let raw: Vec<_> = lexer.raw_tokens("Sin[π]").into_iter().map(|t| t.kind).collect();
    assert_eq!(raw, [Symbol, Group, Symbol, Group]);
    let lexed: Vec<_> = lexer.lex("Sin[π]").into_iter().map(|t| t.kind).collect();
    assert_eq!(lexed, [Builtin, Group, Builtin, Group]);
}

// === Literal examples ===

#[test]
fn literal_examples() {
    assert_eq!(lex("123"), vec![(Number, "123")]);
    assert_eq!(lex("2^^101"), vec![(Number, "2^^101")]);
    assert_eq!(lex("x_Integer"), vec![(Pattern, "x_Integer")]);
}

#[test]
fn free_function() {
    let tokens = mma_lexer::lex("f[x_] := x^2").unwrap();
    assert_eq!(tokens.first().map(|t| t.kind), Some(Symbol));
    assert_eq!(tokens[2].kind, Pattern);
    assert_eq!(tokens.iter().map(|t| t.text).collect::<String>(), "f[x_] := x^2");
}
