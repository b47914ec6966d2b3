use pathmux::{MatchError, Router};

macro_rules! match_tests {
    ($($name:ident {
        routes = $routes:expr,
        $( $route:literal :: $path:literal =>
            $( $(@$none:tt)? None )?
            $( $(@$some:tt)? { $( $key:literal => $val:literal ),* $(,)? } )?
        ),* $(,)?
    }),* $(,)?) => { $(
        #[test]
        fn $name() {
            let mut router = Router::new();

            for route in $routes {
                router.insert(route, route.to_owned()).unwrap();
            }

            $(match router.at($path) {
                Err(err) => {
                    $($( @$some )?
                        panic!("Expected value for route '{}', got {}", $path, err)
                    )?

                    $($( @$none )?
                        assert_eq!(err, MatchError::NotFound, "'{}'", $path);
                    )?
                }
                Ok(result) => {
                    $($( @$some )?
                        if result.value != $route {
                            panic!(
                                "Wrong value for route '{}'. Expected '{}', found '{}'",
                                $path, $route, result.value
                            );
                        }

                        let mut expected_params = vec![$(($key, $val)),*];
                        let mut got_params = result.params.iter().collect::<Vec<_>>();
                        expected_params.sort();
                        got_params.sort();

                        assert_eq!(
                            got_params, expected_params,
                            "Wrong params for route '{}'",
                            $path
                        );

                        router.at_mut($path).unwrap().value.push_str("CHECKED");
                        assert!(router.at($path).unwrap().value.contains("CHECKED"));

                        let val = router.at_mut($path).unwrap().value;
                        *val = val.replace("CHECKED", "");
                    )?

                    $($( @$none )?
                        panic!(
                            "Unexpected value for route '{}', got: {:?}",
                            $path,
                            result.params
                        );
                    )?
                }
            })*
        }
   )* };
}

match_tests! {
    basic {
        routes = [
            "/hi",
            "/contact",
            "/co",
            "/c",
            "/a",
            "/ab",
            "/doc",
            "/doc/rust_faq.html",
            "/doc/rust1.26.html",
            "/ʯ",
            "/β",
        ],
        "/a"       :: "/a"       => {},
        ""         :: "/"        => None,
        "/hi"      :: "/hi"      => {},
        "/contact" :: "/contact" => {},
        "/co"      :: "/co"      => {},
        ""         :: "/con"     => None,
        ""         :: "/cona"    => None,
        ""         :: "/no"      => None,
        "/ab"      :: "/ab"      => {},
        "/ʯ"       :: "/ʯ"       => {},
        "/β"       :: "/β"       => {},
        "/doc"     :: "/doc/"    => {},
        "/doc/rust_faq.html" :: "/doc/rust_faq.html" => {},
        ""         :: "/doc/rust_faq"  => None,
    },
    params {
        routes = [
            "/",
            "/cmd/whoami",
            "/cmd/whoami/root",
            "/cmd/:tool/:sub",
            "/search/:query",
            "/info/:user/public",
            "/info/:user/project/rustlang",
            "/info/:user/project/:project",
            "/:username//////:repo",
        ],
        "/"                             :: "/"                             => {},
        "/cmd/:tool/:sub"               :: "/cmd/test/3"                   => { "tool" => "test", "sub" => "3" },
        "/cmd/whoami"                   :: "/cmd/whoami"                   => {},
        "/cmd/whoami"                   :: "/cmd/whoami/"                  => {},
        "/cmd/:tool/:sub"               :: "/cmd/whoami/r"                 => { "tool" => "whoami", "sub" => "r" },
        "/cmd/whoami/root"              :: "/cmd/whoami/root"              => {},
        ""                              :: "/cmd/whoami/root/x"            => None,
        "/search/:query"                :: "/search/actix"                 => { "query" => "actix" },
        "/search/:query"                :: "/search/someth!ng+in+ünìcodé"  => { "query" => "someth!ng+in+ünìcodé" },
        "/info/:user/public"            :: "/info/gordon/public"           => { "user" => "gordon" },
        "/info/:user/project/rustlang"  :: "/info/gordon/project/rustlang" => { "user" => "gordon" },
        "/info/:user/project/:project"  :: "/info/gordon/project/rust"     => { "user" => "gordon", "project" => "rust" },
        "/:username//////:repo"         :: "/alice/project1"               => { "username" => "alice", "repo" => "project1" },
        "/:username//////:repo"         :: "/search"                       => None,
    },
    first_match_wins {
        routes = [
            "/:username",
            "/static",
            "/users/:id",
            "/users/new",
        ],
        "/:username"  :: "/static"     => { "username" => "static" },
        "/:username"  :: "/alice"      => { "username" => "alice" },
        "/users/:id"  :: "/users/new"  => { "id" => "new" },
        "/users/:id"  :: "/users/5"    => { "id" => "5" },
    },
    specific_first {
        routes = [
            "/static",
            "/users/new",
            "/:username",
            "/users/:id",
        ],
        "/static"     :: "/static"     => {},
        "/:username"  :: "/alice"      => { "username" => "alice" },
        "/users/new"  :: "/users/new"  => {},
        "/users/:id"  :: "/users/5"    => { "id" => "5" },
    },
    normalized_paths {
        routes = [
            "/a/b",
            "/:user/:repo/issues",
        ],
        "/a/b"                 :: "/a//////b"                => {},
        "/a/b"                 :: "a/b/"                     => {},
        "/a/b"                 :: "/a/../b"                  => {},
        "/a/b"                 :: "/./a/./b/."               => {},
        ""                     :: "/b"                       => None,
        "/:user/:repo/issues"  :: "//alice//repo//issues//"  => { "user" => "alice", "repo" => "repo" },
        "/:user/:repo/issues"  :: "/alice/../repo/issues"    => { "user" => "alice", "repo" => "repo" },
    },
    case_sensitive {
        routes = [
            "/Users/:id",
        ],
        "/Users/:id" :: "/Users/5" => { "id" => "5" },
        ""           :: "/users/5" => None,
        ""           :: "/USERS/5" => None,
    },
    segment_count {
        routes = [
            "/:a/:b",
        ],
        ""       :: "/x"     => None,
        ""       :: "/"      => None,
        ""       :: "/x/y/z" => None,
        "/:a/:b" :: "/x/y"   => { "a" => "x", "b" => "y" },
    },
    repeated_key {
        routes = [
            "/:id/posts/:id",
        ],
        "/:id/posts/:id" :: "/1/posts/2" => { "id" => "2" },
    },
    dots_in_segments {
        routes = [
            "/files/:name",
            "/.well-known/:doc",
        ],
        "/files/:name"      :: "/files/a.tar.gz"          => { "name" => "a.tar.gz" },
        "/files/:name"      :: "/files/..."               => { "name" => "..." },
        "/.well-known/:doc" :: "/.well-known/security.txt" => { "doc" => "security.txt" },
        ""                  :: "/files/.."                => None,
    },
    root_only {
        routes = [
            "/",
        ],
        "/" :: "/"    => {},
        "/" :: ""     => {},
        "/" :: "//./" => {},
        ""  :: "/a"   => None,
    },
}

#[test]
fn empty_router() {
    let router = Router::<()>::new();
    assert!(router.is_empty());

    for path in ["", "/", "/a", "/a/b/c", "//..//"] {
        assert_eq!(router.at(path).unwrap_err(), MatchError::NotFound, "{path}");
    }
}

#[test]
fn params_are_fresh_per_match() {
    let mut router = Router::new();
    router.insert("/:user/:repo", ()).unwrap();

    let first = router.at("/alice/project1").unwrap().params;
    let second = router.at("/bob/project2").unwrap().params;

    assert_eq!(first.get("user"), Some("alice"));
    assert_eq!(second.get("user"), Some("bob"));
    assert_ne!(first, second);
}

#[test]
fn concurrent_matching() {
    use std::sync::Arc;
    use std::thread;

    let mut router = Router::new();
    router.insert("/:user/:repo", "repo").unwrap();
    router.insert("/:user", "user").unwrap();
    let router = Arc::new(router);

    let handles = (0..8)
        .map(|i| {
            let router = router.clone();
            thread::spawn(move || {
                for j in 0..100 {
                    let path = format!("/user{i}/repo{j}");
                    let matched = router.at(&path).unwrap();
                    assert_eq!(*matched.value, "repo");
                    assert_eq!(matched.params.get("repo"), Some(format!("repo{j}").as_str()));
                }
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn match_error_display() {
    assert_eq!(MatchError::NotFound.to_string(), "matching route not found");
}
