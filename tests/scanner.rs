// Integration tests for the TINY scanner

use tiny_front::scanner::{Scanner, Token, TokenKind, MAX_TOKEN_LEN};
use TokenKind::*;

fn scan(source: &str) -> Vec<Token> {
    Scanner::from_source(source).tokenize()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source).into_iter().map(|t| t.kind).collect()
}

#[test]
fn test_digit_runs_are_single_numbers() {
    for source in ["0", "7", "42", "0001", "9876543210"] {
        let mut scanner = Scanner::from_source(source);
        let token = scanner.get_token();
        assert_eq!(token.kind, Number, "{source}");
        assert_eq!(token.lexeme, source);
        assert_eq!(scanner.get_token().kind, EndOfFile);
    }
}

#[test]
fn test_number_stops_before_next_token() {
    let tokens = scan("123;");
    assert_eq!(tokens[0].lexeme, "123");
    assert_eq!(tokens[1].kind, Semicolon);
}

#[test]
fn test_non_keywords_are_identifiers() {
    for word in ["x", "abc", "If", "forx", "downtoo", "Repeat", "endd", "then", "end"] {
        let tokens = scan(word);
        assert_eq!(tokens[0].kind, Id, "{word}");
        assert_eq!(tokens[0].lexeme, word);
    }
}

#[test]
fn test_each_reserved_word() {
    let expected = [
        ("if", If),
        ("else", Else),
        ("repeat", Repeat),
        ("until", Until),
        ("read", Read),
        ("write", Write),
        ("for", For),
        ("to", To),
        ("downto", Downto),
        ("do", Do),
        ("enddo", EndDo),
        ("reg", Reg),
        ("and", And),
        ("or", Or),
        ("not", Not),
    ];
    for (word, kind) in expected {
        assert_eq!(kinds(word), [kind, EndOfFile], "{word}");
    }
}

#[test]
fn test_assignment_sequence() {
    assert_eq!(
        kinds("x:=3+4;"),
        [Id, Assign, Number, Plus, Number, Semicolon, EndOfFile]
    );
}

#[test]
fn test_plus_assign_sequence() {
    assert_eq!(kinds("a+=1"), [Id, PlusAssign, Number, EndOfFile]);
}

#[test]
fn test_comparison_sequence() {
    assert_eq!(
        kinds("x<=y<>z>w"),
        [Id, LessOrEqual, Id, NotEqual, Id, GreaterThan, Id, EndOfFile]
    );
}

#[test]
fn test_comparison_with_spaces_and_numbers() {
    assert_eq!(
        kinds("1 < 2 >= 3 <> 4 = 5"),
        [Number, LessThan, Number, GreaterOrEqual, Number, NotEqual, Number, Equal, Number, EndOfFile]
    );
}

#[test]
fn test_comment_between_tokens() {
    assert_eq!(kinds("x { ignored : stuff += } y"), [Id, Id, EndOfFile]);
}

#[test]
fn test_unterminated_comment_yields_one_eof() {
    let tokens = scan("{ ignored to the end");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, EndOfFile);
}

#[test]
fn test_reset_is_independent_of_previous_scan() {
    let mut scanner = Scanner::new("repeat\n  x := x + 1\nuntil x > 9\n{ open".as_bytes());
    let first = scanner.tokenize();
    assert_eq!(first.last().unwrap().line, 4);

    scanner.reset("write y".as_bytes());
    let second = scanner.tokenize();
    let fresh = Scanner::from_source("write y").tokenize();
    assert_eq!(second, fresh);
    assert!(second.iter().all(|t| t.line == 1));
}

#[test]
fn test_regular_expression_operators() {
    assert_eq!(
        kinds("reg r := (a|b)#&c?"),
        [Reg, Id, Assign, LParen, Id, Union, Id, RParen, Closure, Concat, Id, Optional, EndOfFile]
    );
}

#[test]
fn test_arithmetic_operators() {
    assert_eq!(
        kinds("a-b*c/d%e^f"),
        [Id, Minus, Id, Times, Id, Over, Id, Remain, Id, Power, Id, EndOfFile]
    );
}

#[test]
fn test_errors_do_not_stop_scanning() {
    let tokens = scan("x : = 1 ! y");
    let got: Vec<(TokenKind, &str)> = tokens.iter().map(|t| (t.kind, t.lexeme.as_str())).collect();
    assert_eq!(
        got,
        [
            (Id, "x"),
            (Error, ":"),
            (Equal, "="),
            (Number, "1"),
            (Error, "!"),
            (Id, "y"),
            (EndOfFile, ""),
        ]
    );
}

#[test]
fn test_oversized_number_truncated_and_synchronized() {
    let digits = "9".repeat(MAX_TOKEN_LEN * 2);
    let tokens = scan(&format!("{digits} x"));
    assert_eq!(tokens[0].kind, Number);
    assert_eq!(tokens[0].lexeme, "9".repeat(MAX_TOKEN_LEN));
    assert_eq!(tokens[1].lexeme, "x");
}

#[test]
fn test_for_loop_program() {
    let source = "for i := 1 to 10 do\n  s += i\nenddo;\nwrite s\n";
    let tokens = scan(source);
    let got: Vec<(TokenKind, usize)> = tokens.iter().map(|t| (t.kind, t.line)).collect();
    assert_eq!(
        got,
        [
            (For, 1),
            (Id, 1),
            (Assign, 1),
            (Number, 1),
            (To, 1),
            (Number, 1),
            (Do, 1),
            (Id, 2),
            (PlusAssign, 2),
            (Id, 2),
            (EndDo, 3),
            (Semicolon, 3),
            (Write, 4),
            (Id, 4),
            (EndOfFile, 4),
        ]
    );
}
