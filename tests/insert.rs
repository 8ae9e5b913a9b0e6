use view_router::{InsertError, Route, Router};

struct InsertTest(Vec<(&'static str, &'static str, Result<(), InsertError>)>);

impl InsertTest {
    fn run(self) {
        let mut router = Router::new();
        for (index, (path, name, expected)) in self.0.into_iter().enumerate() {
            let got = router.insert(Route::new(path, name, index));
            assert_eq!(got, expected, "{path}");
        }
    }
}

fn conflict(with: &'static str) -> InsertError {
    InsertError::Conflict { with: with.into() }
}

#[test]
fn distinct_patterns() {
    InsertTest(vec![
        ("/", "main", Ok(())),
        ("/package/:name", "package", Ok(())),
        ("/search", "search", Ok(())),
        ("/package/:name/files", "files", Ok(())),
    ])
    .run()
}

#[test]
fn duplicate_pattern() {
    InsertTest(vec![
        ("/package/:name", "package", Ok(())),
        ("/package/:name", "package2", Err(conflict("/package/:name"))),
    ])
    .run()
}

#[test]
fn captures_conflict_positionally() {
    InsertTest(vec![
        ("/package/:name", "package", Ok(())),
        ("/package/:id", "by-id", Err(conflict("/package/:name"))),
        ("/package/list", "list", Ok(())),
    ])
    .run()
}

#[test]
fn trailing_slash_is_the_same_pattern() {
    InsertTest(vec![
        ("/search", "search", Ok(())),
        ("/search/", "search2", Err(conflict("/search"))),
    ])
    .run()
}

#[test]
fn unnamed_capture() {
    InsertTest(vec![("/package/:", "package", Err(InsertError::UnnamedParam))]).run()
}

#[test]
fn missing_leading_slash() {
    InsertTest(vec![(
        "package/:name",
        "package",
        Err(InsertError::MissingLeadingSlash),
    )])
    .run()
}

#[test]
fn duplicate_name() {
    InsertTest(vec![
        ("/", "main", Ok(())),
        (
            "/search",
            "main",
            Err(InsertError::DuplicateName {
                name: "main".into(),
            }),
        ),
    ])
    .run()
}

#[test]
fn failed_insert_leaves_earlier_routes_registered() {
    let mut router = Router::new();
    let routes = vec![
        Route::new("/", "main", 0),
        Route::new("/package/:name", "package", 1),
        Route::new("/package/:id", "by-id", 2),
    ];

    assert_eq!(
        router.register(routes),
        Err(InsertError::Conflict {
            with: "/package/:name".into()
        })
    );
    assert!(router.resolve("/package/libfoo").is_ok());
}
