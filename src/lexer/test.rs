use super::*;

fn lex(input: &str) -> Lexed {
    Lexer::new(input).analyze().unwrap()
}

fn match_expected(input: &str, expected: Vec<(TokenKind, TokenValue)>) {
    let tokens = lex(input).tokens;
    assert_eq!(tokens.len(), expected.len());

    tokens
        .iter()
        .zip(expected.iter())
        .for_each(|(t, (kind, value))| {
            assert_eq!(t.kind, *kind);
            assert_eq!(t.value, *value);
        });
}

fn text(s: &str) -> TokenValue {
    TokenValue::Text(s.to_string())
}

#[test]
fn test_declarations() {
    let input = "int x = 5;\nfloat y = \"hi\";\n";
    let lexed = lex(input);
    let expected = vec![
        Token::new(TokenKind::Identifier, text("x"), 1),
        Token::new(TokenKind::Operator, text("="), 1),
        Token::new(TokenKind::Integer, TokenValue::Integer(5), 1),
        Token::new(TokenKind::Punctuator, text(";"), 1),
        Token::new(TokenKind::Identifier, text("y"), 2),
        Token::new(TokenKind::Operator, text("="), 2),
        Token::new(TokenKind::Literal, text("\"hi\""), 2),
        Token::new(TokenKind::Punctuator, text(";"), 2),
    ];
    assert_eq!(lexed.tokens, expected);

    let symbols: Vec<_> = lexed
        .symbols
        .iter()
        .map(|(name, entry)| (name.as_str(), entry.data_type, entry.line))
        .collect();
    assert_eq!(
        symbols,
        vec![("x", Some(DataType::Int), 1), ("y", Some(DataType::Float), 2)]
    );
    assert!(lexed.diagnostics.is_empty());
}

#[test]
fn test_empty_input() {
    let lexed = lex("");
    assert!(lexed.tokens.is_empty());
    assert!(lexed.symbols.is_empty());
}

#[test]
fn test_number_literals() {
    match_expected(
        "123 123.456 .5 7.",
        vec![
            (TokenKind::Integer, TokenValue::Integer(123)),
            (TokenKind::Float, TokenValue::Float(123.456)),
            (TokenKind::Float, TokenValue::Float(0.5)),
            (TokenKind::Float, TokenValue::Float(7.0)),
        ],
    );
}

#[test]
fn test_invalid_numbers() {
    for input in ["x = 1.2.3;", "x = .;", "x = 99999999999999999999;"] {
        let err = Lexer::new(input).analyze().unwrap_err();
        assert_eq!(err.line, 1);
        assert!(matches!(err.error, LexerErrorType::InvalidNumber { .. }));
    }

    let err = Lexer::new("a = 1;\nb = 1..2;").analyze().unwrap_err();
    assert_eq!(err.line, 2);
    assert!(err.to_string().contains("`1..2`"));
}

#[test]
fn test_integers_are_64_bit() {
    match_expected(
        "9223372036854775807 0 007",
        vec![
            (TokenKind::Integer, TokenValue::Integer(i64::MAX)),
            (TokenKind::Integer, TokenValue::Integer(0)),
            (TokenKind::Integer, TokenValue::Integer(7)),
        ],
    );

    let err = Lexer::new("big = 9223372036854775808;").analyze().unwrap_err();
    assert_eq!(err.line, 1);
    assert!(matches!(
        err.error,
        LexerErrorType::InvalidNumber { ref lexeme, .. } if lexeme == "9223372036854775808"
    ));
}

#[test]
fn test_strings() {
    match_expected(
        r#""hello" 'world' "it's" 'a "b"'"#,
        vec![
            (TokenKind::Literal, text("\"hello\"")),
            (TokenKind::Literal, text("'world'")),
            (TokenKind::Literal, text("\"it's\"")),
            (TokenKind::Literal, text("'a \"b\"'")),
        ],
    );
}

#[test]
fn test_unterminated_string() {
    let lexed = lex("s = \"abc\n;");
    let last = lexed.tokens.last().unwrap();
    assert_eq!(last.kind, TokenKind::Literal);
    assert_eq!(last.value, text("\"abc\n;"));
    assert_eq!(last.line, 1);
    assert_eq!(lexed.diagnostics.len(), 1);
    assert!(!lexed.diagnostics[0].is_error());
}

#[test]
fn test_multiline_string_keeps_lines() {
    let lexed = lex("a = 'x\ny';\nb = 1;");
    let b = lexed.tokens.iter().find(|t| t.value == text("b")).unwrap();
    assert_eq!(b.line, 3);
}

#[test]
fn test_operators_and_punctuators() {
    match_expected(
        "+ - * / = ; ,",
        vec![
            (TokenKind::Operator, text("+")),
            (TokenKind::Operator, text("-")),
            (TokenKind::Operator, text("*")),
            (TokenKind::Operator, text("/")),
            (TokenKind::Operator, text("=")),
            (TokenKind::Punctuator, text(";")),
            (TokenKind::Punctuator, text(",")),
        ],
    );
}

#[test]
fn test_symbol_runs_are_split() {
    match_expected(
        "x=\"hi\";=;",
        vec![
            (TokenKind::Identifier, text("x")),
            (TokenKind::Operator, text("=")),
            (TokenKind::Literal, text("\"hi\"")),
            (TokenKind::Punctuator, text(";")),
            (TokenKind::Operator, text("=")),
            (TokenKind::Punctuator, text(";")),
        ],
    );
}

#[test]
fn test_unrecognized_chars_skipped() {
    match_expected(
        "a @= #1 $;",
        vec![
            (TokenKind::Identifier, text("a")),
            (TokenKind::Operator, text("=")),
            (TokenKind::Integer, TokenValue::Integer(1)),
            (TokenKind::Punctuator, text(";")),
        ],
    );
}

#[test]
fn test_type_keywords_emit_no_tokens() {
    let lexed = lex("int float char");
    assert!(lexed.tokens.is_empty());
    assert!(lexed.symbols.is_empty());
}

#[test]
fn test_first_occurrence_wins() {
    let lexed = lex("x = 1;\nint x = 2;\nx = 3;");
    assert_eq!(lexed.symbols.len(), 1);
    let entry = lexed.symbols.get("x").unwrap();
    assert_eq!(entry.data_type, None);
    assert_eq!(entry.line, 1);
}

#[test]
fn test_pending_type_sticks_until_replaced() {
    let lexed = lex("int a = 1; b = 2; char c = 'c'; _d1 = 4;");
    let types: Vec<_> = lexed
        .symbols
        .iter()
        .map(|(name, entry)| (name.clone(), entry.data_type))
        .collect();
    assert_eq!(
        types,
        vec![
            ("a".to_string(), Some(DataType::Int)),
            ("b".to_string(), Some(DataType::Int)),
            ("c".to_string(), Some(DataType::Char)),
            ("_d1".to_string(), Some(DataType::Char)),
        ]
    );
}

#[test]
fn test_lexing_is_idempotent() {
    let input = "int x = 5;\nx = 'y';\nfloat z = 1.5;";
    assert_eq!(lex(input), lex(input));
}

#[test]
fn test_lines_never_decrease() {
    let lexed = lex("a = 1;\n\n b\n=\n2\n;");
    let lines: Vec<_> = lexed.tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 1, 1, 1, 3, 4, 5, 6]);
}
