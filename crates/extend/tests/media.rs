use less_extend::ast::{AtRule, Media, Stmt};
use macros::{extending, root, ruleset, TestLogger};


test!(
    extend_inside_media_stays_inside,
    root(vec![
        Stmt::Media(Media::new(
            "print",
            vec![extending(".a", ".b"), ruleset(&[".b"], Vec::new())],
        )),
        ruleset(&[".b"], Vec::new()),
    ]),
    vec![vec![".a"], vec![".b", ".a"], vec![".b"]]
);
test!(
    top_level_extend_reaches_into_media,
    root(vec![
        extending(".a", ".b"),
        Stmt::Media(Media::new("print", vec![ruleset(&[".b"], Vec::new())])),
    ]),
    vec![vec![".a"], vec![".b", ".a"]]
);
test!(
    extend_in_one_media_does_not_reach_another,
    root(vec![
        Stmt::Media(Media::new("print", vec![extending(".a", ".b")])),
        Stmt::Media(Media::new("screen", vec![ruleset(&[".b"], Vec::new())])),
    ]),
    vec![vec![".a"], vec![".b"]]
);
test!(
    top_level_extend_chains_into_media_extend,
    root(vec![
        extending(".a", ".b"),
        Stmt::Media(Media::new(
            "print",
            vec![extending(".b", ".c"), ruleset(&[".c"], Vec::new())],
        )),
        ruleset(&[".c"], Vec::new()),
    ]),
    vec![vec![".a"], vec![".b", ".a"], vec![".c", ".b", ".a"], vec![".c"]]
);
test!(
    extend_inside_supports_stays_inside,
    root(vec![
        Stmt::AtRule(AtRule::new(
            "supports",
            Some("(display: grid)".to_owned()),
            vec![extending(".a", ".b"), ruleset(&[".b"], Vec::new())],
        )),
        ruleset(&[".b"], Vec::new()),
    ]),
    vec![vec![".a"], vec![".b", ".a"], vec![".b"]]
);
test!(
    nested_media_inherits_outer_extends,
    root(vec![Stmt::Media(Media::new(
        "screen",
        vec![
            extending(".a", ".b"),
            Stmt::Media(Media::new(
                "(min-width: 100px)",
                vec![ruleset(&[".b"], Vec::new())],
            )),
        ],
    ))]),
    vec![vec![".a"], vec![".b", ".a"]]
);

#[test]
fn unmatched_extend_inside_media_is_not_reported() {
    let logger = TestLogger::default();
    let options = less_extend::Options::default().logger(&logger);
    let mut root = root(vec![Stmt::Media(Media::new(
        "print",
        vec![extending(".a", ".zzz")],
    ))]);

    less_extend::process_extends(&mut root, &options).unwrap();

    assert_eq!(&[] as &[String], logger.warning_messages().as_slice());
}
