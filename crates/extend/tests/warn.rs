use std::rc::Rc;

use less_extend::{
    ast::{FileInfo, Ruleset, Stmt},
    codemap::CodeMap,
    extend::{ExtendIds, ExtendProcessor, Extension},
    Options,
};
use macros::{extend, extending, root, ruleset, selector, TestLogger};


#[test]
fn unmatched_extend_warns() {
    let logger = TestLogger::default();
    let options = Options::default().logger(&logger);
    let mut root = root(vec![extending(".a", ".zzz"), ruleset(&[".b"], Vec::new())]);

    less_extend::process_extends(&mut root, &options).unwrap();

    assert_eq!(
        &[String::from("extend '.zzz' has no matches")],
        logger.warning_messages().as_slice()
    );
    assert!(logger.warning_locations().iter().all(Option::is_none));
}

#[test]
fn unmatched_extend_while_quiet() {
    let logger = TestLogger::default();
    let options = Options::default().logger(&logger).quiet(true);
    let mut root = root(vec![extending(".a", ".zzz"), ruleset(&[".b"], Vec::new())]);

    less_extend::process_extends(&mut root, &options).unwrap();

    assert_eq!(&[] as &[String], logger.warning_messages().as_slice());
}

#[test]
fn matched_extend_does_not_warn() {
    let logger = TestLogger::default();
    let options = Options::default().logger(&logger);
    let mut root = root(vec![extending(".a", ".b"), ruleset(&[".b"], Vec::new())]);

    less_extend::process_extends(&mut root, &options).unwrap();

    assert_eq!(&[] as &[String], logger.warning_messages().as_slice());
}

#[test]
fn extend_matched_only_through_chaining_does_not_warn() {
    let logger = TestLogger::default();
    let options = Options::default().logger(&logger);
    let mut root = root(vec![extending(".a", ".b"), extending(".b", ".c")]);

    less_extend::process_extends(&mut root, &options).unwrap();

    // `.a:extend(.b)` matched `.b:extend(.c)`, and the extend derived from the
    // two is never reported
    assert_eq!(
        &[String::from("extend '.c' has no matches")],
        logger.warning_messages().as_slice()
    );
}

#[test]
fn identical_unmatched_extends_warn_once() {
    let logger = TestLogger::default();
    let options = Options::default().logger(&logger);
    let mut root = root(vec![
        ruleset(&[".a", ".b"], vec![Stmt::Extend(extend(".zzz"))]),
        ruleset(&[".c"], Vec::new()),
    ]);

    less_extend::process_extends(&mut root, &options).unwrap();

    assert_eq!(
        &[String::from("extend '.zzz' has no matches")],
        logger.warning_messages().as_slice()
    );
}

#[test]
fn repeated_checks_warn_once() {
    let logger = TestLogger::default();
    let options = Options::default().logger(&logger);
    let mut processor = ExtendProcessor::new(&options);

    let mut ids = ExtendIds::new();
    let mut extension = Extension::from_rule(&extend(".zzz"), &mut ids);
    extension.find_self_selectors(&[selector(".a")]);
    let extends = vec![Rc::new(extension)];

    processor.check_extends_for_non_matched(&extends);
    processor.check_extends_for_non_matched(&extends);

    assert_eq!(
        &[String::from("extend '.zzz' has no matches")],
        logger.warning_messages().as_slice()
    );
    assert_eq!(
        vec![(0, ".zzz")],
        processor.warned_extends().collect::<Vec<_>>()
    );
}

#[test]
fn derived_extends_are_never_reported() {
    let logger = TestLogger::default();
    let options = Options::default().logger(&logger);
    let mut processor = ExtendProcessor::new(&options);

    let mut ids = ExtendIds::new();
    let mut extension = Extension::from_rule(&extend(".zzz"), &mut ids);
    extension.parent_ids.push(ids.next_id());

    processor.check_extends_for_non_matched(&[Rc::new(extension)]);

    assert_eq!(&[] as &[String], logger.warning_messages().as_slice());
}

#[test]
fn unrenderable_selector_is_reported_as_unknown() {
    let logger = TestLogger::default();
    let options = Options::default().logger(&logger);
    let mut processor = ExtendProcessor::new(&options);

    let mut ids = ExtendIds::new();
    let mut extension = Extension::from_rule(&extend(".zzz"), &mut ids);
    extension.selector.elements[0].value =
        less_extend::ast::ElementValue::Variable("name".to_owned());

    processor.check_extends_for_non_matched(&[Rc::new(extension)]);

    assert_eq!(
        &[String::from("extend '_unknown_' has no matches")],
        logger.warning_messages().as_slice()
    );
}

#[test]
fn warning_points_at_extend() {
    let mut map = CodeMap::new();
    let file = map.add_file(
        "input.less".to_owned(),
        ".b {}\n.a:extend(.zzz) {}\n".to_owned(),
    );

    let mut rule = extend(".zzz");
    rule.index = 8;
    rule.file_info = Some(FileInfo::new(file));

    let logger = TestLogger::default();
    let options = Options::default().logger(&logger);
    let mut root = root(vec![Stmt::Ruleset(Ruleset::new(
        vec![selector(".a").with_extend(rule)],
        Vec::new(),
    ))]);

    less_extend::process_extends(&mut root, &options).unwrap();

    let locations = logger.warning_locations();
    assert_eq!(locations.len(), 1);
    let location = locations[0].as_ref().expect("warning has no location");
    assert_eq!(location.file.name(), "input.less");
    assert_eq!(location.begin.line, 1);
    assert_eq!(location.begin.column, 2);
}
