use super::*;

// === Standard tables ===

#[test]
fn system_names_are_builtins() {
    let tables = SymbolTables::standard();
    assert!(tables.is_builtin("Sin"));
    assert!(tables.is_builtin("$Version"));
    assert!(!tables.is_builtin("sin"));
    assert!(!tables.is_builtin("foo"));
}

#[test]
fn unicode_builtins_are_builtins() {
    let tables = SymbolTables::standard();
    assert!(tables.is_builtin("π"));
    assert!(tables.is_builtin("∞"));
    assert!(!tables.is_builtin("ππ"));
    assert!(!tables.is_builtin(""));
}

#[test]
fn scoping_keywords() {
    let tables = SymbolTables::standard();
    for name in ["Block", "Module", "With"] {
        assert!(tables.is_scoping_keyword(name));
    }
    assert!(!tables.is_scoping_keyword("Table"));
}

#[test]
fn classify_unicode_priority() {
    let tables = SymbolTables::standard();
    assert_eq!(tables.classify_unicode('ⅇ'), Some(TokenKind::Builtin));
    assert_eq!(tables.classify_unicode('⌈'), Some(TokenKind::Group));
    assert_eq!(tables.classify_unicode('⊕'), Some(TokenKind::Operator));
    assert_eq!(tables.classify_unicode('ℏ'), Some(TokenKind::Symbol));
    assert_eq!(tables.classify_unicode('☃'), None);
}

#[test]
fn default_is_standard() {
    let tables = SymbolTables::default();
    assert_eq!(tables.operators(), SymbolTables::standard().operators());
    assert_eq!(tables.groupings().len(), symbols::GROUPINGS.len());
}

// === Extension ===

#[test]
fn empty_tables_know_nothing() {
    let tables = SymbolTables::empty();
    assert!(!tables.is_builtin("Sin"));
    assert!(tables.operators().is_empty());
    assert!(tables.groupings().is_empty());
    assert_eq!(tables.classify_unicode('⊕'), None);
}

#[test]
fn with_builtin_adds_name() {
    let tables = SymbolTables::standard().with_builtin("MyFunction");
    assert!(tables.is_builtin("MyFunction"));
}

#[test]
fn with_scoping_keyword_is_also_builtin() {
    let tables = SymbolTables::empty().with_scoping_keyword("DynamicModule");
    assert!(tables.is_scoping_keyword("DynamicModule"));
    assert!(tables.is_builtin("DynamicModule"));
}

#[test]
fn words_are_deduplicated() {
    let before = SymbolTables::standard().operators().len();
    let tables = SymbolTables::standard()
        .with_operator(":=")
        .with_operator("<->")
        .with_operator("");
    assert_eq!(tables.operators().len(), before + 1);
    assert_eq!(tables.operators().last().map(String::as_str), Some("<->"));

    let tables = SymbolTables::empty().with_grouping("[").with_grouping("[");
    assert_eq!(tables.groupings(), ["[".to_owned()]);
}

#[test]
fn single_char_only_for_one_code_point() {
    assert_eq!(single_char("λ"), Some('λ'));
    assert_eq!(single_char("ab"), None);
    assert_eq!(single_char(""), None);
}
