use super::*;

#[test]
fn default_runs_every_pass() {
    let config = LexerConfig::default();
    assert_eq!(config.passes, Passes::all());
    assert_eq!(config.resolution, ScopeResolution::Innermost);
    assert!(config.tables.is_builtin("Module"));
}

#[test]
fn raw_runs_no_pass() {
    assert!(LexerConfig::raw().passes.is_empty());
}

#[test]
fn builders_replace_fields() {
    let config = LexerConfig::default()
        .with_tables(SymbolTables::empty())
        .with_passes(Passes::BUILTINS)
        .with_resolution(ScopeResolution::Enclosing);
    assert!(!config.tables.is_builtin("Module"));
    assert_eq!(config.passes, Passes::BUILTINS);
    assert_eq!(config.resolution, ScopeResolution::Enclosing);
}
