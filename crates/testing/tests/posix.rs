use std::borrow::Cow;

use twinpath::{posix, ParsedPath, PathObject};

#[test]
fn resolve() {
	assert_eq!("/var/file", posix::resolve(&["/var/lib", "../", "file/"]));
	assert_eq!("/absolute", posix::resolve(&["/some/dir", ".", "/absolute/"]));
	assert_eq!(
		"/foo/tmp.3/cycles/root.js",
		posix::resolve(&["/foo/tmp.3/", "../tmp.3/cycles/root.js"])
	);
	assert_eq!("/c", posix::resolve(&["/a/b", "../../c"]));
	assert_eq!("/", posix::resolve(&["/", "..", ".."]));
	assert_eq!("a/b", posix::resolve(&["a", "b"]));
	assert_eq!("../a", posix::resolve(&["..", "a"]));
	assert_eq!(".", posix::resolve(&["a", ".."]));
	assert_eq!(".", posix::resolve(&["", ""]));
	assert_eq!(".", posix::resolve::<&str>(&[]));
	assert_eq!("/x/y", posix::resolve(&[String::from("/x"), String::from("y")]));
}

#[test]
fn resolve_from() {
	assert_eq!("/home/you", posix::resolve_from("/home/me", &["../you"]));
	assert_eq!("/home/me", posix::resolve_from("/home/me", &[""]));
	assert_eq!("/home/me", posix::resolve_from("/home/me", &[] as &[&str]));
	assert_eq!("/etc/hosts", posix::resolve_from("/home/me", &["/etc", "hosts"]));
	assert_eq!("/x", posix::resolve_from("/", &["../../x"]));
	assert_eq!("a", posix::resolve_from("", &["a"]));
	assert_eq!("base/a", posix::resolve_from("base", &["a"]));
}

#[test]
fn normalize() {
	assert_eq!(".", posix::normalize(""));
	assert_eq!(".", posix::normalize("."));
	assert_eq!("/", posix::normalize("/"));
	assert_eq!("/", posix::normalize("//"));
	assert_eq!("/", posix::normalize("/.."));
	assert_eq!("/a/b/", posix::normalize("///a//b/"));
	assert_eq!("/a/d", posix::normalize("/a/b/c/../../d"));
	assert_eq!("foo/baz", posix::normalize("foo/bar/../baz"));
	assert_eq!("../bar", posix::normalize("./foo/../../bar"));
	assert_eq!("..", posix::normalize(".."));
	assert_eq!("../", posix::normalize("../"));
	assert_eq!(".", posix::normalize("a/.."));
	assert_eq!("./", posix::normalize("a/../"));
	assert_eq!("./", posix::normalize("./"));
	assert_eq!("/foo/bar", posix::normalize("/foo//bar/./baz/.."));
	assert_eq!("...", posix::normalize("./..."));
	assert_eq!(r"a\..\b", posix::normalize(r"a\..\b"));
}

#[test]
fn is_absolute() {
	assert!(posix::is_absolute("/"));
	assert!(posix::is_absolute("/home"));
	assert!(posix::is_absolute("//home"));
	assert!(!posix::is_absolute(""));
	assert!(!posix::is_absolute("home"));
	assert!(!posix::is_absolute("./home"));
	assert!(!posix::is_absolute(r"\home"));
	assert!(!posix::is_absolute("C:/home"));
}

#[test]
fn join() {
	assert_eq!("/foo/bar/baz/asdf", posix::join(&["/foo", "bar", "baz/asdf", "quux", ".."]));
	assert_eq!("foo/bar", posix::join(&["foo", "/bar"]));
	assert_eq!("a/b/", posix::join(&["a/", "/b/"]));
	assert_eq!("/x", posix::join(&["/", "..", "x"]));
	assert_eq!("../x", posix::join(&["..", "x"]));
	assert_eq!("a", posix::join(&["", "a", ""]));
	assert_eq!(".", posix::join(&["", ""]));
	assert_eq!(".", posix::join::<&str>(&[]));
}

#[test]
fn relative() {
	assert_eq!(
		"../../impl/bbb",
		posix::relative("/data/orandea/test/aaa", "/data/orandea/impl/bbb")
	);
	assert_eq!("", posix::relative("/a/b", "/a/b"));
	assert_eq!("", posix::relative("/a/", "/a"));
	assert_eq!("..", posix::relative("/a/b/c", "/a/b"));
	assert_eq!("b/c", posix::relative("/a", "/a/b/c"));
	assert_eq!("a", posix::relative("/", "/a"));
	assert_eq!("../..", posix::relative("/a/b", "/"));
	assert_eq!("../barbaz", posix::relative("/foo/bar", "/foo/barbaz"));
	assert_eq!("../a", posix::relative("/A", "/a"));
	assert_eq!("../c", posix::relative("a/b", "a/c"));
	assert_eq!("../b", posix::relative("../a", "../b"));
	assert_eq!("../../b", posix::relative("a", "../b"));
	// No common base, so the resolved target comes back.
	assert_eq!("/b", posix::relative("a", "/b"));
	// Going back down from above the start needs the current directory.
	assert_eq!("a", posix::relative("..", "a"));
	assert_eq!("y", posix::relative("../x", "y"));
	assert_eq!("../a", posix::relative("../../b", "../a"));
}

#[test]
fn to_namespaced_path() {
	assert_eq!(Cow::Borrowed("/foo/../bar"), posix::to_namespaced_path("/foo/../bar"));
	assert_eq!(Cow::Borrowed(""), posix::to_namespaced_path(""));
}

#[test]
fn dirname() {
	assert_eq!("/a", posix::dirname("/a/b/"));
	assert_eq!("/a", posix::dirname("/a/b"));
	assert_eq!("/a/b", posix::dirname("/a/b//c"));
	assert_eq!("/", posix::dirname("/a"));
	assert_eq!("/", posix::dirname("//a"));
	assert_eq!("/", posix::dirname("/"));
	assert_eq!("/", posix::dirname("///"));
	assert_eq!("a", posix::dirname("a/b"));
	assert_eq!("a", posix::dirname("a//b//"));
	assert_eq!(".", posix::dirname("a"));
	assert_eq!(".", posix::dirname(""));
}

#[test]
fn basename() {
	assert_eq!("quux.html", posix::basename("/foo/bar/baz/asdf/quux.html", None));
	assert_eq!("quux", posix::basename("/foo/bar/baz/asdf/quux.html", Some(".html")));
	assert_eq!("b", posix::basename("a/b//", None));
	assert_eq!("", posix::basename("/", None));
	assert_eq!("", posix::basename("", None));
	assert_eq!("file.", posix::basename("file.txt", Some("txt")));
	assert_eq!("aa", posix::basename("aaa", Some("a")));
	assert_eq!("a", posix::basename("a", Some("a")));
	assert_eq!("file.TXT", posix::basename("file.TXT", Some(".txt")));
	assert_eq!(r"a\b", posix::basename(r"a\b", None));
}

#[test]
fn extname() {
	assert_eq!(".html", posix::extname("index.html"));
	assert_eq!(".md", posix::extname("index.coffee.md"));
	assert_eq!(".", posix::extname("index."));
	assert_eq!("", posix::extname("index"));
	assert_eq!("", posix::extname(".index"));
	assert_eq!(".md", posix::extname(".index.md"));
	assert_eq!(".c", posix::extname("a/b.c/"));
	assert_eq!("", posix::extname("a.b/c"));
	assert_eq!(".", posix::extname("..."));
	assert_eq!("", posix::extname("/.."));
	assert_eq!("", posix::extname(""));
}

#[test]
fn parse() {
	let parsed = posix::parse("/home/user/dir/file.txt");
	assert_eq!("/", parsed.root);
	assert_eq!("/home/user/dir", parsed.dir);
	assert_eq!("file.txt", parsed.base);
	assert_eq!(".txt", parsed.ext);
	assert_eq!("file", parsed.name);

	let parsed = posix::parse("file");
	assert_eq!(
		("", "", "file", "", "file"),
		(parsed.root, parsed.dir, parsed.base, parsed.ext, parsed.name)
	);

	let parsed = posix::parse("/");
	assert_eq!(
		("/", "/", "", "", ""),
		(parsed.root, parsed.dir, parsed.base, parsed.ext, parsed.name)
	);

	let parsed = posix::parse("a/b/");
	assert_eq!(("", "a", "b"), (parsed.root, parsed.dir, parsed.base));

	let parsed = posix::parse("./.bashrc");
	assert_eq!((".", ".bashrc", "", ".bashrc"), (parsed.dir, parsed.base, parsed.ext, parsed.name));

	assert_eq!(ParsedPath::default(), posix::parse(""));
}

#[test]
fn format() {
	let object = PathObject::new().root("/ignored").dir("/home/user/dir").base("file.txt");
	assert_eq!("/home/user/dir/file.txt", posix::format(&object));
	assert_eq!("/file.txt", posix::format(&PathObject::new().root("/").base("file.txt")));
	assert_eq!("/file.txt", posix::format(&PathObject::new().root("/").name("file").ext(".txt")));
	assert_eq!("file.txt", posix::format(&PathObject::new().name("file").ext("txt")));
	assert_eq!("dir/x", posix::format(&PathObject::new().dir("dir").name("x")));
	assert_eq!("base", posix::format(&PathObject::new().base("base").name("name").ext(".ext")));
	assert_eq!("", posix::format(&PathObject::new()));

	for path in ["/home/user/file.txt", "dir/file", "/file", "file.tar.gz"] {
		assert_eq!(path, posix::format(&posix::parse(path).into()));
	}
}

#[test]
fn constants() {
	assert_eq!('/', posix::SEP);
	assert_eq!("/", posix::SEP_STR);
	assert_eq!(':', posix::DELIMITER);
	assert_eq!(":", posix::DELIMITER_STR);
}
