use coolgen_scan::{
	Delimiter, Quote, ScannerConfig, Session, TokenKind, ValidSymbols, Variant,
};

fn valid(kinds: &[TokenKind]) -> ValidSymbols {
	kinds.iter().copied().collect()
}

fn strings() -> ValidSymbols {
	valid(&[TokenKind::StringStart, TokenKind::StringContent])
}

fn session(source: &str, variant: Variant) -> Session<'_> {
	Session::new(source, ScannerConfig::new(variant)).expect("default config is valid")
}

#[track_caller]
fn expect_token(session: &mut Session<'_>, valid: ValidSymbols, kind: TokenKind, text: &str) {
	let source = session.source();
	match session.next_token(valid) {
		Some(token) => {
			assert_eq!(kind, token.kind, "at {:?}", token.span);
			assert_eq!(text, token.text(source));
		},
		None => panic!("no token where {} `{}` was expected ({:?})", kind, text, session),
	}
}

#[track_caller]
fn expect_nothing(session: &mut Session<'_>, valid: ValidSymbols) {
	let before = session.position();
	if let Some(token) = session.next_token(valid) {
		panic!("unexpected {} `{}`", token.kind, token.text(session.source()));
	}
	assert_eq!(before, session.position());
}

#[test]
fn format_triple_string() {
	let source = r#"f"""hello {x} world""""#;
	let mut s = session(source, Variant::StringAware);

	expect_token(&mut s, strings(), TokenKind::StringStart, r#"f""""#);
	let open = s.scanner().state().delimiters().top().expect("literal open");
	assert!(open.is_format() && open.is_triple());
	assert_eq!(Some(Quote::Double), open.quote());

	expect_token(&mut s, strings(), TokenKind::StringContent, "hello ");
	expect_nothing(&mut s, strings());

	// the grammar takes `{x}`
	s.seek(s.position() + 3);

	expect_token(&mut s, strings(), TokenKind::StringContent, " world");
	expect_token(&mut s, strings(), TokenKind::StringEnd, r#"""""#);
	assert!(s.scanner().state().delimiters().is_empty());
	assert!(!s.scanner().state().is_inside_f_string());
	assert_eq!(source.len(), s.position());
}

#[test]
fn raw_string_escape() {
	let source = r"r'a\'b' + 1";
	let mut s = session(source, Variant::StringAware);

	expect_token(&mut s, strings(), TokenKind::StringStart, "r'");
	expect_token(&mut s, strings(), TokenKind::StringContent, r"a\'b");
	expect_token(&mut s, strings(), TokenKind::StringEnd, "'");
	assert_eq!(7, s.position());
}

#[test]
fn plain_escape_is_left_to_grammar() {
	let source = r#""a\tb""#;
	let mut s = session(source, Variant::StringAware);

	expect_token(&mut s, strings(), TokenKind::StringStart, "\"");
	expect_token(&mut s, strings(), TokenKind::StringContent, "a");
	expect_nothing(&mut s, strings());
	s.seek(s.position() + 2);
	expect_token(&mut s, strings(), TokenKind::StringContent, "b");
	expect_token(&mut s, strings(), TokenKind::StringEnd, "\"");
}

#[test]
fn unterminated_single_line_string() {
	let mut s = session("'abc\ndef'", Variant::StringAware);
	expect_token(&mut s, strings(), TokenKind::StringStart, "'");
	expect_nothing(&mut s, strings());
}

#[test]
fn statement_terminators() {
	let note = valid(&[TokenKind::NoteTerminator]);

	let mut s = session("  12 ! \n", Variant::StringAware);
	expect_token(&mut s, note, TokenKind::NoteTerminator, "");
	assert_eq!(8, s.position());

	let mut s = session("  !! \n", Variant::StringAware);
	expect_nothing(&mut s, note);

	// only the terminator-focused grammar pads with dots
	let mut s = session("0100. \n", Variant::StringAware);
	expect_nothing(&mut s, note);
	let mut s = session("0100. \n", Variant::TerminatorFocused);
	expect_token(&mut s, note, TokenKind::NoteTerminator, "");
}

#[test]
fn block_terminators() {
	let block = valid(&[TokenKind::BlockTerminator]);

	let mut s = session(" 3 !\nEND", Variant::TerminatorFocused);
	expect_token(&mut s, block, TokenKind::BlockTerminator, "");
	assert_eq!(5, s.position());

	let mut s = session("  + MORE", Variant::TerminatorFocused);
	expect_token(&mut s, block, TokenKind::BlockTerminator, "");
	assert_eq!(2, s.position());

	// the string-aware grammar has no block terminator
	let mut s = session(" 3 !\n", Variant::StringAware);
	expect_nothing(&mut s, block);
}

#[test]
fn boolean_breaks() {
	let and = valid(&[TokenKind::BoolAndBreak]);
	let or = valid(&[TokenKind::BoolOrBreak]);
	let both = and.with(TokenKind::BoolOrBreak);

	let mut s = session(" 3! AND", Variant::TerminatorFocused);
	expect_token(&mut s, and, TokenKind::BoolAndBreak, "AND");

	let mut s = session(" OR", Variant::TerminatorFocused);
	expect_token(&mut s, or, TokenKind::BoolOrBreak, "OR");

	let mut s = session(" ANDX", Variant::TerminatorFocused);
	expect_nothing(&mut s, both);

	let mut s = session("A = B\n  0020 !  OR C = D", Variant::TerminatorFocused);
	s.seek(5);
	expect_token(&mut s, both, TokenKind::BoolOrBreak, "OR");
}

#[test]
fn empty_candidate_set() {
	for variant in [Variant::StringAware, Variant::TerminatorFocused] {
		for source in ["'x'", "f\"\"\"", " 12 !\n", "  + x", " AND"] {
			let mut s = session(source, variant);
			expect_nothing(&mut s, ValidSymbols::none());
		}
	}
}

#[test]
fn error_recovery() {
	let recovering = ValidSymbols::from_flags(Variant::StringAware, &[true; 5]);
	assert!(recovering.is_error_recovery());

	let mut s = session("'x'", Variant::StringAware);
	expect_nothing(&mut s, recovering);
	expect_nothing(&mut s, strings().with(TokenKind::ErrorSentinel));

	let recovering = ValidSymbols::from_flags(Variant::TerminatorFocused, &[true; 5]);
	let mut s = session(" 12\n", Variant::TerminatorFocused);
	expect_nothing(&mut s, recovering);
}

#[test]
fn host_flag_tables() {
	// [note, start, content, end, sentinel]
	let start_only = ValidSymbols::from_flags(Variant::StringAware, &[false, true, false, false, false]);
	let mut s = session("b'x'", Variant::StringAware);
	expect_token(&mut s, start_only, TokenKind::StringStart, "b'");
}

#[test]
fn deep_nesting_caps_snapshot() {
	// back quotes never triple, so each one opens a literal
	let source = "`".repeat(300);
	let mut s = session(&source, Variant::StringAware);
	let start = valid(&[TokenKind::StringStart]);

	for _ in 0..300 {
		expect_token(&mut s, start, TokenKind::StringStart, "`");
	}

	let back = {
		let mut d = Delimiter::new();
		d.set_quote(Quote::Back);
		d.as_byte()
	};
	let snapshot = s.snapshot();
	assert_eq!(255, snapshot[1]);
	assert_eq!(2 + 255, snapshot.len());
	assert!(snapshot[2..].iter().all(|&b| b == back));
}
