use super::Scanner;
use crate::bind::BindError;

#[test]
fn doc_comment_fills_pending_slot() {
	let mut scan = Scanner::new("/** Canvas doc. */\n#define X 1\n// note\ntypedef");
	scan.skip_noise();
	assert_eq!(scan.pending_doc(), Some("/** Canvas doc. */"));
	assert!(scan.starts_with_keyword("typedef"));
	assert_eq!(scan.take_doc(), Some("/** Canvas doc. */"));
	assert_eq!(scan.take_doc(), None);
}

#[test]
fn later_doc_comment_replaces_earlier_one() {
	let mut scan = Scanner::new("/** first */ /* plain */ /** second */ x");
	scan.skip_noise();
	assert_eq!(scan.take_doc(), Some("/** second */"));
}

#[test]
fn continued_preprocessor_lines_are_skipped() {
	let mut scan = Scanner::new("#define TVG_API \\\n    __attribute__((visibility(\"default\")))\nTVG_API");
	scan.skip_noise();
	assert!(scan.starts_with_keyword("TVG_API"));
}

#[test]
fn extern_c_guard_is_noise() {
	let mut scan = Scanner::new("extern \"C\" {\ntypedef enum");
	scan.skip_noise();
	assert!(scan.starts_with("typedef enum"));
}

#[test]
fn keyword_match_respects_identifier_boundary() {
	let mut scan = Scanner::new("TVG_APIX foo;");
	assert!(scan.starts_with("TVG_API"));
	assert!(!scan.starts_with_keyword("TVG_API"));
}

#[test]
fn skipped_statement_drops_pending_doc() {
	let mut scan = Scanner::new("/** orphan */ typedef uint8_t Tvg_Path_Command; next");
	scan.skip_noise();
	scan.skip_statement();
	assert_eq!(scan.pending_doc(), None);
	assert!(scan.starts_with("next"));
}

#[test]
fn balanced_block_supports_nesting() {
	let mut scan = Scanner::new("{ a { b } c } Name;");
	scan.expect("{").expect("open brace");
	let body = scan.read_block(b'{', b'}', "}").expect("block closes");
	assert_eq!(body, " a { b } c ");
	assert_eq!(scan.expect_identifier().expect("name"), "Name");
}

#[test]
fn unbalanced_block_reports_position() {
	let mut scan = Scanner::new("{\n  A,\n  B");
	scan.expect("{").expect("open brace");
	let err = scan.read_block(b'{', b'}', "}").expect_err("missing close");
	match err {
		BindError::Expected { expected, at, line, column } => {
			assert_eq!(expected, "}");
			assert_eq!(at, 10);
			assert_eq!(line, 3);
			assert_eq!(column, 4);
		}
		other => panic!("unexpected error {other:?}"),
	}
}

#[test]
fn statement_read_tracks_parentheses() {
	let mut scan = Scanner::new("Tvg_Result f(int (*cb)(int a; int b), int c); rest");
	let statement = scan.read_statement();
	assert_eq!(statement, "Tvg_Result f(int (*cb)(int a; int b), int c)");
	assert!(scan.try_consume(";"));
}

#[test]
fn backtracking_restores_position() {
	let mut scan = Scanner::new("typedef struct _Tvg_Canvas Tvg_Canvas;");
	let mark = scan.mark();
	scan.expect("typedef struct").expect("prefix");
	assert_eq!(scan.read_identifier(), "_Tvg_Canvas");
	scan.reset(mark);
	assert_eq!(scan.pos(), 0);
}
