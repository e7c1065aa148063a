use super::*;
use crate::{
    ast::{PrimitivePool, Rc, Statement, Term, TermPool},
    context::{Config, DiagnosticContext, Severity, State},
    Language,
};

fn smt_state() -> State {
    State::new(Config::new().language(Language::Smtlib2).check_headers(true))
}

fn attribute(pool: &mut PrimitivePool, key: &str, args: Vec<Rc<Term>>) -> Rc<Term> {
    let key = pool.add(Term::new_attribute(key));
    if args.is_empty() {
        key
    } else {
        pool.add(Term::new_app(key, args))
    }
}

fn messages(state: &State) -> Vec<(Severity, &str)> {
    state
        .diagnostics()
        .iter()
        .map(|d| (d.severity, d.message.as_str()))
        .collect()
}

#[test]
fn test_parse() {
    let mut pool = PrimitivePool::new();
    let lang = Some(Language::Smtlib2);

    let version = pool.add(Term::new_decimal("2.6"));
    let source = pool.add(Term::new_attribute("Generated by hand"));
    let license = pool.add(Term::new_string("https://creativecommons.org/licenses/by/4.0/"));
    let industrial = pool.add(Term::new_string("industrial"));
    let unsat = pool.add(Term::new_symbol("unsat"));

    let cases = [
        (":smt-lib-version", version.clone(), Field::LangVersion, "2.6"),
        (":source", source, Field::ProblemSource, "Generated by hand"),
        (
            ":license",
            license,
            Field::ProblemLicense,
            "https://creativecommons.org/licenses/by/4.0/",
        ),
        (":category", industrial, Field::ProblemCategory, "industrial"),
        (":status", unsat, Field::ProblemStatus, "unsat"),
    ];
    for (key, value, field, expected) in cases {
        let term = attribute(&mut pool, key, vec![value]);
        assert_eq!(
            parse(lang, &term),
            HeaderParse::Recognized(field, expected.to_owned()),
            "key: {key}"
        );
    }

    let unrelated = attribute(&mut pool, ":produce-models", vec![version.clone()]);
    assert_eq!(parse(lang, &unrelated), HeaderParse::NotAHeader);

    let f = pool.add(Term::new_symbol("f"));
    let not_attribute = pool.add(Term::new_app(f, vec![version.clone()]));
    assert_eq!(parse(lang, &not_attribute), HeaderParse::NotAHeader);

    // Only SMT-LIB embeds metadata
    let term = attribute(&mut pool, ":smt-lib-version", vec![version]);
    for lang in [None, Some(Language::Tptp), Some(Language::Dimacs), Some(Language::Zf)] {
        assert_eq!(parse(lang, &term), HeaderParse::NotAHeader);
    }
}

#[test]
fn test_parse_malformed() {
    let mut pool = PrimitivePool::new();
    let lang = Some(Language::Smtlib2);
    let outer = Span::point((1, 1));
    let inner = Span::point((1, 20));

    let integer = pool.add(Term::new_integer("2").at(inner));
    let string = pool.add(Term::new_string("x").at(inner));
    let symbol = pool.add(Term::new_symbol("maybe").at(inner));

    let cases = [
        (":smt-lib-version", integer.clone(), HeaderError::ExpectedVersion),
        (":source", string.clone(), HeaderError::ExpectedSymbol),
        (":license", symbol.clone(), HeaderError::ExpectedString),
        (":category", integer, HeaderError::ExpectedString),
        (":status", symbol, HeaderError::ExpectedStatus),
    ];
    for (key, value, err) in cases {
        let head = pool.add(Term::new_attribute(key));
        let term = pool.add(Term::new_app(head, vec![value]).at(outer));
        assert_eq!(parse(lang, &term), HeaderParse::Malformed(Some(inner), err), "key: {key}");
    }

    // Empty values are reported at the attribute itself
    let bare = pool.add(Term::new_attribute(":license").at(outer));
    assert_eq!(
        parse(lang, &bare),
        HeaderParse::Malformed(Some(outer), HeaderError::EmptyValue(":license".to_owned()))
    );
    let bare_status = pool.add(Term::new_attribute(":status").at(outer));
    assert_eq!(
        parse(lang, &bare_status),
        HeaderParse::Malformed(Some(outer), HeaderError::ExpectedStatus)
    );

    // With too many values, the first one is blamed
    let head = pool.add(Term::new_attribute(":license"));
    let other = pool.add(Term::new_string("y"));
    let term = pool.add(Term::new_app(head, vec![string, other]).at(outer));
    assert_eq!(
        parse(lang, &term),
        HeaderParse::Malformed(Some(inner), HeaderError::ExpectedString)
    );

    // A value without a span falls back to the span of the attribute
    let head = pool.add(Term::new_attribute(":source"));
    let unlocated = pool.add(Term::new_string("x"));
    let term = pool.add(Term::new_app(head, vec![unlocated]).at(outer));
    assert_eq!(
        parse(lang, &term),
        HeaderParse::Malformed(Some(outer), HeaderError::ExpectedSymbol)
    );
}

#[test]
fn test_field_names() {
    let smt = Some(Language::Smtlib2);
    assert_eq!(Field::LangVersion.name(smt), ":smt-lib-version");
    assert_eq!(Field::ProblemStatus.name(smt), ":status");
    assert_eq!(Field::ProblemVersion.name(smt), "problem version");
    assert_eq!(Field::ProblemStatus.name(Some(Language::Tptp)), "problem status");
    assert_eq!(Field::ProblemLicense.name(None), "problem license");
    assert_eq!(Field::ProblemCategory.to_string(), "problem category");
}

#[test]
fn test_header_state() {
    let empty = HeaderState::new();
    let one = empty.set(Field::ProblemStatus, "sat");
    let two = one.set(Field::ProblemStatus, "unsat");

    assert!(empty.is_empty());
    assert_eq!(one.get(Field::ProblemStatus), Some("sat"));
    assert_eq!(two.get(Field::ProblemStatus), Some("unsat"));
    assert_eq!(two.len(), 1);

    let removed = two.remove(Field::ProblemStatus);
    assert!(!removed.contains(Field::ProblemStatus));
    assert!(two.contains(Field::ProblemStatus));
    assert_eq!(removed, empty);
}

#[test]
fn test_status_consumption() {
    let mut pool = PrimitivePool::new();
    let mut state = smt_state();
    let sat = pool.add(Term::new_symbol("sat"));
    let status = attribute(&mut pool, ":status", vec![sat]);

    let first = Statement::check_sat().at(Span::point((3, 1)));
    let second = Statement::check_sat().at(Span::point((4, 1)));

    inspect(&mut state, Statement::set_info(status));
    assert_eq!(state.header_state().get(Field::ProblemStatus), Some("sat"));

    let returned = inspect(&mut state, first.clone());
    assert_eq!(returned, first);
    assert!(!state.header_state().contains(Field::ProblemStatus));
    assert!(!state.has_errors());

    inspect(&mut state, second);
    let errors: Vec<_> = state.diagnostics().iter().filter(|d| d.is_error()).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "missing :status header before this solve request");
    assert_eq!(errors[0].location.span, Some(Span::point((4, 1))));
}

#[test]
fn test_status_in_pack() {
    let mut pool = PrimitivePool::new();
    let mut state = smt_state();
    let p = pool.add(Term::new_symbol("p"));
    let unsat = pool.add(Term::new_symbol("unsat"));
    let status = attribute(&mut pool, ":status", vec![unsat]);

    // A pack is inspected element by element, so the wrapped solve request consumes the status
    let goal = Statement::goal(p.clone());
    let returned = inspect(
        &mut state,
        Statement::pack(vec![Statement::set_info(status), goal.clone()]),
    );
    assert_eq!(returned.flatten().len(), 3);
    assert!(!state.has_errors());
    assert!(!state.header_state().contains(Field::ProblemStatus));

    inspect(&mut state, goal.at(Span::point((6, 1))));
    assert_eq!(
        messages(&state),
        vec![(Severity::Error, "missing :status header before this solve request")]
    );
}

#[test]
fn test_off_by_default() {
    let mut state = State::new(Config::new().language(Language::ICnf));
    let mut pool = PrimitivePool::new();
    let x = pool.add(Term::new_symbol("1"));

    inspect(&mut state, Statement::prove_assuming(vec![x]));
    finalize(&mut state);
    assert!(state.diagnostics().is_empty());
}

#[test]
fn test_malformed_header_is_not_recorded() {
    let mut pool = PrimitivePool::new();
    let mut state = smt_state();
    let mit = pool.add(Term::new_string("MIT"));
    let license = attribute(&mut pool, ":license", vec![mit]);
    inspect(&mut state, Statement::set_info(license));
    let before = state.header_state().clone();

    let value_loc = Span::point((2, 21));
    let symbol = pool.add(Term::new_symbol("GPL").at(value_loc));
    let head = pool.add(Term::new_attribute(":license"));
    let malformed = pool.add(Term::new_app(head, vec![symbol]).at(Span::point((2, 11))));
    inspect(&mut state, Statement::set_info(malformed).at(Span::point((2, 1))));

    assert_eq!(messages(&state), vec![(Severity::Error, "expected a single string")]);
    assert_eq!(state.diagnostics()[0].location.span, Some(value_loc));
    assert_eq!(state.header_state(), &before);
    assert_eq!(state.header_state().get(Field::ProblemLicense), Some("MIT"));
}

#[test]
fn test_other_attributes_pass_through() {
    let mut pool = PrimitivePool::new();
    let mut state = smt_state();
    let true_ = pool.bool_true();
    let option = attribute(&mut pool, ":produce-models", vec![true_]);
    let statement = Statement::set_info(option);

    let returned = inspect(&mut state, statement.clone());
    assert_eq!(returned, statement);
    assert!(state.diagnostics().is_empty());
    assert!(state.header_state().is_empty());
}

#[test]
fn test_repeated_header_last_wins() {
    let mut pool = PrimitivePool::new();
    let mut state = smt_state();
    for license in ["MIT", "CC-BY-4.0"] {
        let value = pool.add(Term::new_string(license));
        let term = attribute(&mut pool, ":license", vec![value]);
        inspect(&mut state, Statement::set_info(term));
    }
    assert!(state.diagnostics().is_empty());
    assert_eq!(state.header_state().get(Field::ProblemLicense), Some("CC-BY-4.0"));
    assert_eq!(state.header_state().len(), 1);
}

#[test]
fn test_allow_lists() {
    let mut pool = PrimitivePool::new();
    let config = Config::new()
        .language(Language::Smtlib2)
        .check_headers(true)
        .allowed_licenses(["MIT"])
        .allowed_lang_versions(["2.6"]);
    let mut state = State::new(config);

    let gpl = pool.add(Term::new_string("GPL"));
    let license = attribute(&mut pool, ":license", vec![gpl]);
    let old = pool.add(Term::new_decimal("2.0"));
    let version = attribute(&mut pool, ":smt-lib-version", vec![old]);

    let loc = Span::point((2, 1));
    inspect(&mut state, Statement::set_info(license).at(loc));
    inspect(&mut state, Statement::set_info(version));

    assert_eq!(
        messages(&state),
        vec![
            (Severity::Error, "'GPL' is not an allowed license"),
            (Severity::Error, "'2.0' is not an allowed language version"),
        ]
    );
    assert_eq!(state.diagnostics()[0].location.span, Some(loc));

    // Disallowed values are still recorded
    assert_eq!(state.header_state().get(Field::ProblemLicense), Some("GPL"));
    assert_eq!(state.header_state().get(Field::LangVersion), Some("2.0"));
}

#[test]
fn test_finalize() {
    let mut pool = PrimitivePool::new();
    let mut state = smt_state();
    finalize(&mut state);
    assert_eq!(
        messages(&state),
        vec![
            (
                Severity::Warning,
                "the following header fields are missing, default values will be assumed: :license"
            ),
            (
                Severity::Error,
                "the following header fields are missing: :smt-lib-version, :source, :category"
            ),
        ]
    );

    let mut state = smt_state();
    let mit = pool.add(Term::new_string("MIT"));
    let license = attribute(&mut pool, ":license", vec![mit]);
    let industrial = pool.add(Term::new_string("industrial"));
    let category = attribute(&mut pool, ":category", vec![industrial]);
    inspect(&mut state, Statement::set_info(license));
    inspect(&mut state, Statement::set_info(category));
    finalize(&mut state);
    assert_eq!(
        messages(&state),
        vec![(
            Severity::Error,
            "the following header fields are missing: :smt-lib-version, :source"
        )]
    );
    assert!(state.diagnostics()[0].location.span.is_none());
}

#[test]
fn test_other_languages_have_no_requirements() {
    for lang in [Language::Tptp, Language::Dimacs, Language::ICnf, Language::Zf] {
        let mut state = State::new(Config::new().language(lang).check_headers(true));
        finalize(&mut state);
        assert!(state.diagnostics().is_empty());

        // Solve requests still need a status
        inspect(&mut state, Statement::prove());
        assert_eq!(
            messages(&state),
            vec![(Severity::Error, "missing problem status header before this solve request")]
        );
    }
}

#[test]
fn test_disabled() {
    let mut pool = PrimitivePool::new();
    let mut state = State::new(Config::new().language(Language::Smtlib2).check_headers(false));
    let bogus = pool.add(Term::new_integer("7"));
    let status = attribute(&mut pool, ":status", vec![bogus]);

    inspect(&mut state, Statement::set_info(status));
    inspect(&mut state, Statement::check_sat());
    finalize(&mut state);
    assert!(state.diagnostics().is_empty());
    assert!(state.header_state().is_empty());
}
