// End-to-end tests for analysis runs over files on disk

use std::fs;
use std::io::BufRead;
use std::path::PathBuf;
use std::process;

use tiny_front::analyze::{analyze, analyze_code, Parse, TokenCollector};
use tiny_front::errors::FrontendError;
use tiny_front::listing::{Capture, Listing, TraceFlags};
use tiny_front::scanner::{Scanner, TokenKind};
use tiny_front::tree::{ExpKind, StmtKind, SyntaxTree};

/// Accepts `id := num` statements separated by anything.
struct AssignParser;

impl Parse for AssignParser {
    fn parse<R: BufRead>(&mut self, scanner: &mut Scanner<R>, tree: &mut SyntaxTree) {
        let mut token = scanner.get_token();
        while !token.is_eof() {
            if token.kind == TokenKind::Id {
                let line = token.line;
                let name = token.lexeme.clone();
                assert_eq!(scanner.get_token().kind, TokenKind::Assign);
                let value = scanner.get_token();
                let stmt = tree
                    .new_statement(StmtKind::Assign { name }, line, scanner.listing_mut())
                    .unwrap();
                let constant = ExpKind::Const(value.lexeme.parse().unwrap());
                let num = tree
                    .new_expression(constant, value.line, scanner.listing_mut())
                    .unwrap();
                tree.attach(stmt, 0, num).unwrap();
                tree.push_root(stmt).unwrap();
            }
            token = scanner.get_token();
        }
    }
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tiny-front-{}-{}", process::id(), name))
}

#[test]
fn test_listing_contains_tree_dump() {
    let source = temp_path("dump.tny");
    let listing = temp_path("dump.lst");
    fs::write(&source, "x := 5;\ny := 7;\n").unwrap();

    let tree = analyze_code(&source, &listing, TraceFlags::default(), &mut AssignParser).unwrap();
    assert_eq!(tree.roots().len(), 2);

    let text = fs::read_to_string(&listing).unwrap();
    assert_eq!(
        text,
        "\nSyntax tree:\n  Assign to: x\n    Const: 5\n  Assign to: y\n    Const: 7\n"
    );

    fs::remove_file(&source).unwrap();
    fs::remove_file(&listing).unwrap();
}

#[test]
fn test_echo_and_trace_in_listing() {
    let source = temp_path("trace.tny");
    let listing = temp_path("trace.lst");
    fs::write(&source, "read x;\nwrite x\n").unwrap();

    let flags = TraceFlags {
        echo_source: true,
        trace_scan: true,
        trace_parse: true,
    };
    let mut collector = TokenCollector::new();
    let tree = analyze_code(&source, &listing, flags, &mut collector).unwrap();
    assert!(tree.is_empty());
    assert_eq!(collector.tokens().len(), 6);

    let text = fs::read_to_string(&listing).unwrap();
    assert!(text.starts_with("   1: read x;\n\t1: reserved word: read\n"));
    assert!(text.contains("\t1: ID, name= x\n\t1: ;\n"));
    assert!(text.contains("   2: write x\n\t2: reserved word: write\n"));
    assert!(text.ends_with("\t2: EOF\n"));
    assert!(!text.contains("Syntax tree:"));

    fs::remove_file(&source).unwrap();
    fs::remove_file(&listing).unwrap();
}

#[test]
fn test_missing_source_creates_no_listing() {
    let source = temp_path("missing.tny");
    let listing = temp_path("missing.lst");

    let err = analyze_code(&source, &listing, TraceFlags::default(), &mut TokenCollector::new())
        .unwrap_err();
    assert!(matches!(err, FrontendError::SourceNotFound { .. }));
    assert_eq!(err.to_string(), format!("File {} not found", source.display()));
    assert!(!listing.exists());
}

#[test]
fn test_parse_trace_disabled() {
    let capture = Capture::new();
    let listing = Listing::new(capture.clone(), TraceFlags::NONE);
    let tree = analyze("a := 1".as_bytes(), listing, &mut AssignParser).unwrap();
    assert_eq!(tree.len(), 2);
    assert_eq!(capture.contents(), "");
}
