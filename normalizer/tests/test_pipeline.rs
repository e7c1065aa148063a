use normalizer::{
    ast::{PrimitivePool, Rc, Span, Statement, StatementKind, Term, TermPool},
    context::{Config, Diagnostic, DiagnosticContext, Severity},
    headers::Field,
    normalize,
    translation::SurfaceStatement,
    Error, Language, Normalized, Pipeline,
};

fn set_info(pool: &mut PrimitivePool, key: &str, value: Term) -> SurfaceStatement {
    let key = pool.add(Term::new_attribute(key));
    let value = pool.add(value);
    let attribute = pool.add(Term::new_app(key, vec![value]));
    SurfaceStatement::new("set-info", vec![attribute])
}

/// A complete SMT-LIB header, declaring the problem as satisfiable.
fn smt_header(pool: &mut PrimitivePool, license: &str) -> Vec<SurfaceStatement> {
    vec![
        set_info(pool, ":smt-lib-version", Term::new_decimal("2.6")),
        set_info(pool, ":source", Term::new_attribute("Handcrafted")),
        set_info(pool, ":category", Term::new_string("crafted")),
        set_info(pool, ":license", Term::new_string(license)),
    ]
}

fn assert_and_check(pool: &mut PrimitivePool) -> Vec<SurfaceStatement> {
    let p = pool.add(Term::new_symbol("p"));
    vec![
        SurfaceStatement::new("assert", vec![p]),
        set_info(pool, ":status", Term::new_symbol("sat")),
        SurfaceStatement::new("check-sat", Vec::new()),
    ]
}

fn rejected(result: Result<Normalized, Error>) -> Vec<Diagnostic> {
    match result {
        Err(Error::Rejected(diagnostics)) => diagnostics,
        other => panic!("expected the input to be rejected, got {:?}", other),
    }
}

fn smt_config() -> Config {
    Config::new()
        .language(Language::Smtlib2)
        .check_headers(true)
        .input_file("problem.smt2")
}

#[test]
fn test_valid_header() {
    let mut pool = PrimitivePool::new();
    let mut items = smt_header(&mut pool, "MIT");
    items.extend(assert_and_check(&mut pool));

    let normalized = normalize(&mut pool, smt_config().allowed_licenses(["MIT"]), &items).unwrap();
    assert!(normalized.diagnostics.is_empty());
    assert_eq!(normalized.statements.len(), items.len());
    assert!(normalized.statements.last().unwrap().is_prove());

    // The status was consumed by the solve request
    assert_eq!(normalized.headers.get(Field::LangVersion), Some("2.6"));
    assert!(!normalized.headers.contains(Field::ProblemStatus));
}

#[test]
fn test_disallowed_license() {
    let mut pool = PrimitivePool::new();
    let mut items = smt_header(&mut pool, "Proprietary");
    items.extend(assert_and_check(&mut pool));

    let config = smt_config().allowed_licenses(["MIT", "CC-BY-4.0"]);
    let mut pipeline = Pipeline::new(&mut pool, config).unwrap();
    for item in &items {
        pipeline.feed(item);
    }
    assert_eq!(pipeline.state().num_errors(), 1);
    let diagnostics = rejected(pipeline.finish());

    let errors: Vec<_> = diagnostics.iter().filter(|d| d.is_error()).collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("not an allowed license"));
    assert!(errors[0].message.contains("Proprietary"));
}

#[test]
fn test_disallowed_license_is_recorded() {
    let mut pool = PrimitivePool::new();
    let items = smt_header(&mut pool, "Proprietary");

    let config = smt_config().allowed_licenses(["MIT"]);
    let mut pipeline = Pipeline::new(&mut pool, config).unwrap();
    for item in &items {
        pipeline.feed(item);
    }
    assert_eq!(
        pipeline.state().header_state().get(Field::ProblemLicense),
        Some("Proprietary")
    );
}

#[test]
fn test_missing_fields() {
    let mut pool = PrimitivePool::new();
    let items = vec![
        set_info(&mut pool, ":smt-lib-version", Term::new_decimal("2.6")),
        set_info(&mut pool, ":category", Term::new_string("industrial")),
    ];

    let diagnostics = rejected(normalize(&mut pool, smt_config(), &items));
    let messages: Vec<_> = diagnostics
        .iter()
        .map(|d| (d.severity, d.message.as_str()))
        .collect();
    assert_eq!(
        messages,
        [
            (
                Severity::Warning,
                "the following header fields are missing, default values will be assumed: :license",
            ),
            (Severity::Error, "the following header fields are missing: :source"),
        ]
    );
    assert!(diagnostics[0].to_string().starts_with("warning: problem.smt2: "));
    assert_eq!(
        diagnostics[1].to_string(),
        "error: problem.smt2: the following header fields are missing: :source"
    );
}

#[test]
fn test_missing_status() {
    let mut pool = PrimitivePool::new();
    let mut items = smt_header(&mut pool, "MIT");
    items.extend(assert_and_check(&mut pool));
    items.push(SurfaceStatement::new("check-sat", Vec::new()).at(Span::point((12, 1))));

    let diagnostics = rejected(normalize(&mut pool, smt_config(), &items));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].to_string(),
        "error: problem.smt2:12:1: missing :status header before this solve request"
    );
}

#[test]
fn test_header_checks_disabled() {
    let mut pool = PrimitivePool::new();
    let items = vec![SurfaceStatement::new("check-sat", Vec::new())];
    let config = smt_config().check_headers(false);

    let normalized = normalize(&mut pool, config, &items).unwrap();
    assert!(normalized.diagnostics.is_empty());
    assert!(normalized.headers.is_empty());
}

#[test]
fn test_solve_requests_without_metadata() {
    let mut pool = PrimitivePool::new();
    let x1 = pool.add(Term::new_symbol("1"));
    let items = vec![
        SurfaceStatement::new("clause", vec![x1.clone()]),
        SurfaceStatement::new("a", vec![x1]),
    ];
    let normalized = normalize(&mut pool, Config::new().language(Language::ICnf), &items).unwrap();
    assert!(normalized.diagnostics.is_empty());
    assert!(normalized.statements[1].is_prove());

    // Once enabled, goals wrapped in packs need a status like any other solve request
    let p = pool.add(Term::new_symbol("p"));
    let goal = SurfaceStatement::new("goal", vec![p]);
    let items = vec![goal.clone(), goal];
    let config = Config::new().language(Language::Zf).check_headers(true);
    let diagnostics = rejected(normalize(&mut pool, config, &items));
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics
        .iter()
        .all(|d| d.message == "missing problem status header before this solve request"));
}

#[test]
fn test_conjecture() {
    let mut pool = PrimitivePool::new();
    let p = pool.add(Term::new_symbol("p"));
    let items = vec![SurfaceStatement::new("conjecture", vec![p.clone()])];
    let config = Config::new().language(Language::Tptp);

    let normalized = normalize(&mut pool, config, &items).unwrap();
    assert!(normalized.diagnostics.is_empty());

    let flat: Vec<_> = normalized
        .statements
        .into_iter()
        .flat_map(Statement::flatten)
        .collect();
    let kinds: Vec<_> = flat.iter().map(|s| s.kind.clone()).collect();
    assert_eq!(
        kinds,
        [
            StatementKind::Push(1),
            StatementKind::Consequent(p.clone()),
            StatementKind::Prove(Vec::new()),
            StatementKind::Pop(1),
            StatementKind::Antecedent(p),
        ]
    );
    let tag = |s: &Statement| s.attr.as_ref().map(|a: &Rc<Term>| a.is_bool_true());
    assert_eq!(tag(&flat[1]), Some(false));
    assert_eq!(tag(&flat[4]), Some(true));
}

#[test]
fn test_plain_and_unknown_roles() {
    let mut pool = PrimitivePool::new();
    let p = pool.add(Term::new_symbol("p"));
    let config = || Config::new().language(Language::Tptp);

    let items = vec![SurfaceStatement::new("plain", vec![p.clone()])];
    let normalized = normalize(&mut pool, config(), &items).unwrap();
    assert!(normalized.diagnostics.is_empty());
    assert!(normalized.statements[0].clone().flatten().is_empty());

    let items = vec![SurfaceStatement::new("foo", vec![p])];
    let normalized = normalize(&mut pool, config(), &items).unwrap();
    assert!(normalized.statements[0].clone().flatten().is_empty());
    assert_eq!(normalized.diagnostics.len(), 1);
    assert_eq!(normalized.diagnostics[0].severity, Severity::Warning);
    assert!(normalized.diagnostics[0].message.contains("foo"));
}

#[test]
fn test_no_language() {
    let mut pool = PrimitivePool::new();
    assert!(matches!(
        Pipeline::new(&mut pool, Config::new()),
        Err(Error::NoInputLanguage)
    ));
    assert!(matches!(
        normalizer::detect_language("notes.txt"),
        Err(Error::UnknownExtension(_))
    ));
    assert_eq!(
        normalizer::detect_language("QF_LIA/bench.smt2").unwrap(),
        Language::Smtlib2
    );
}
