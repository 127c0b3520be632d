//! Edge case tests for loxc-lex

#[cfg(test)]
mod tests {
    use crate::{scan, Literal, ScanError, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        let output = scan(source);
        assert!(!output.has_errors(), "unexpected errors: {:?}", output.errors);
        output.tokens
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).iter().map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert_eq!(lex_all(""), vec![Token::eof(1)]);
    }

    #[test]
    fn test_edge_only_newlines() {
        assert_eq!(lex_all("\n\n\n"), vec![Token::eof(4)]);
    }

    #[test]
    fn test_edge_crlf_counts_once() {
        let tokens = lex_all("a\r\nb");
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0], Token::new(TokenKind::Identifier, "x", None, 1));
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("var {} = 1;", name));
        assert_eq!(t[1].lexeme, name);
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        assert_eq!(
            kinds("and or nil"),
            vec![TokenKind::And, TokenKind::Or, TokenKind::Nil, TokenKind::Eof]
        );
    }

    #[test]
    fn test_edge_trailing_dot_number() {
        let t = lex_all("123.");
        assert_eq!(t.len(), 3);
        assert_eq!(
            t[0],
            Token::new(TokenKind::Number, "123", Some(Literal::Number(123.0)), 1)
        );
        assert_eq!(t[1], Token::new(TokenKind::Dot, ".", None, 1));
    }

    #[test]
    fn test_edge_leading_dot_number() {
        assert_eq!(
            kinds(".5"),
            vec![TokenKind::Dot, TokenKind::Number, TokenKind::Eof]
        );
    }

    #[test]
    fn test_edge_negative_number_is_two_tokens() {
        assert_eq!(
            kinds("-1"),
            vec![TokenKind::Minus, TokenKind::Number, TokenKind::Eof]
        );
    }

    #[test]
    fn test_edge_method_call_on_number() {
        assert_eq!(
            kinds("1.abs"),
            vec![
                TokenKind::Number,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_edge_number_then_identifier() {
        let t = lex_all("123abc");
        assert_eq!(t[0].lexeme, "123");
        assert_eq!(t[1].lexeme, "abc");
    }

    #[test]
    fn test_edge_multiline_string() {
        let t = lex_all("\"one\ntwo\nthree\" x");
        assert_eq!(t[0].literal, Some(Literal::Str("one\ntwo\nthree".to_string())));
        assert_eq!(t[0].line, 3);
        assert_eq!(t[1].line, 3);
    }

    #[test]
    fn test_edge_comment_only_source() {
        assert_eq!(lex_all("//comment"), vec![Token::eof(1)]);
    }

    #[test]
    fn test_edge_line_comment_keeps_newline() {
        let t = lex_all("// one\n// two\nx");
        assert_eq!(t[0].line, 3);
    }

    #[test]
    fn test_edge_nested_comment_produces_nothing() {
        let t = lex_all("/* a /* b\n */ c\n */");
        assert_eq!(t, vec![Token::eof(3)]);
    }

    #[test]
    fn test_edge_deeply_nested_comment() {
        let source = format!("{}{} x", "/* ".repeat(500), "*/ ".repeat(500));
        let t = lex_all(&source);
        assert_eq!(t[0].lexeme, "x");
    }

    #[test]
    fn test_edge_slash_star_inside_line_comment() {
        let t = lex_all("// /* not a block\nx");
        assert_eq!(t[0].lexeme, "x");
    }

    #[test]
    fn test_edge_comment_markers_inside_string() {
        let t = lex_all("\"/* // */\"");
        assert_eq!(t[0].literal, Some(Literal::Str("/* // */".to_string())));
    }

    #[test]
    fn test_edge_unterminated_comment_reports_once() {
        let output = scan("/* /* /*\n");
        assert_eq!(output.tokens, vec![Token::eof(2)]);
        assert_eq!(
            output.errors,
            vec![ScanError::UnterminatedComment { line: 2, opened_on: 1 }]
        );
    }

    #[test]
    fn test_edge_unterminated_string_reports_once() {
        let output = scan("print \"no end\n;");
        assert_eq!(output.tokens.len(), 2);
        assert_eq!(output.tokens[0].kind, TokenKind::Print);
        assert_eq!(
            output.errors,
            vec![ScanError::UnterminatedString { line: 2, opened_on: 1 }]
        );
    }

    #[test]
    fn test_edge_every_bad_character_reported() {
        let output = scan("@#^");
        let found: Vec<_> = output
            .errors
            .iter()
            .map(|e| match e {
                ScanError::UnexpectedCharacter { found, .. } => *found,
                other => panic!("unexpected error {:?}", other),
            })
            .collect();
        assert_eq!(found, vec!['@', '#', '^']);
        assert_eq!(output.tokens, vec![Token::eof(1)]);
    }

    #[test]
    fn test_edge_non_ascii_letter_not_identifier() {
        let output = scan("ñ");
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.tokens, vec![Token::eof(1)]);
    }

    #[test]
    fn test_edge_nul_character_is_unexpected() {
        let output = scan("a\0b");
        assert_eq!(
            output.errors,
            vec![ScanError::UnexpectedCharacter { line: 1, found: '\0' }]
        );
        assert_eq!(output.tokens.len(), 3);
    }
}
