//! The POSIX path grammar.
//!
//! Paths are separated by `/` and are absolute if, and only if, they start
//! with `/`. There is exactly one root. Unlike [`std::path`] none of these
//! functions look at the host: they work the same on every platform.
//!
//! ```
//! use twinpath::posix;
//!
//! assert_eq!(posix::join(&["/usr", "local/", "../lib"]), "/usr/lib");
//! assert_eq!(posix::resolve(&["/a/b", "../../c"]), "/c");
//! assert_eq!(posix::relative("/a/b", "/a/c"), "../c");
//! ```
//!
//! [`std::path`]: https://doc.rust-lang.org/std/path/index.html

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use log::debug;

use crate::parsed::{ParsedPath, PathObject};
use crate::pure::{self, Normalizer};
use crate::util::is_posix_separator as is_separator;
#[cfg(feature = "std")]
use crate::{
	error::{Error, Result},
	file_url::{self, FileUrlSource},
};
#[cfg(feature = "std")]
use url::Url;

/// The path separator.
pub const SEP: char = '/';
/// [`SEP`] as a string.
pub const SEP_STR: &str = "/";
/// The separator between entries of the `PATH` environment variable.
pub const DELIMITER: char = ':';
/// [`DELIMITER`] as a string.
pub const DELIMITER_STR: &str = ":";

/// The POSIX grammar as a [`PathGrammar`](crate::PathGrammar) implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Posix;

/// The length of the root: `1` for absolute paths, otherwise `0`.
fn root_len(path: &str) -> usize {
	usize::from(is_absolute(path))
}

/// Resolve a sequence of paths into a single normalized path.
///
/// Paths are considered from right to left and resolution stops at the
/// first absolute one. Empty paths are skipped. No current directory is
/// consulted so if none of the paths is absolute the result stays relative;
/// use [`resolve_from`] to supply a base.
pub fn resolve<P: AsRef<str>>(paths: &[P]) -> String {
	resolve_inner(None, paths)
}

/// Like [`resolve`] but with `cwd` as the implicit base in front of `paths`.
///
/// ```
/// use twinpath::posix;
///
/// assert_eq!(posix::resolve_from("/home/me", &["src", "./lib.rs"]), "/home/me/src/lib.rs");
/// assert_eq!(posix::resolve_from("/home/me", &["/etc", "hosts"]), "/etc/hosts");
/// ```
pub fn resolve_from<P: AsRef<str>>(cwd: &str, paths: &[P]) -> String {
	resolve_inner(Some(cwd), paths)
}

fn resolve_inner<P: AsRef<str>>(cwd: Option<&str>, paths: &[P]) -> String {
	// Collected right to left, normalized left to right.
	let mut pieces = Vec::new();
	let mut absolute = false;
	for path in paths.iter().map(AsRef::as_ref).rev().chain(cwd) {
		if path.is_empty() {
			continue;
		}
		pieces.push(path);
		if is_absolute(path) {
			absolute = true;
			break;
		}
	}

	let mut normalizer = Normalizer::new(is_separator, !absolute);
	for piece in pieces.iter().rev().copied() {
		normalizer.push(piece);
	}
	let tail = normalizer.finish(SEP);
	if absolute {
		let mut resolved = String::with_capacity(tail.len() + 1);
		resolved.push(SEP);
		resolved.push_str(&tail);
		resolved
	} else if tail.is_empty() {
		".".into()
	} else {
		tail
	}
}

/// Normalize a path, collapsing `.`, `..` and repeated separators.
///
/// A trailing separator is kept. Leading `..` segments of a relative path are
/// kept, those of an absolute path are dropped.
///
/// ```
/// use twinpath::posix;
///
/// assert_eq!(posix::normalize("/foo//bar/./baz/.."), "/foo/bar");
/// assert_eq!(posix::normalize("../a/b/../../.."), "../..");
/// assert_eq!(posix::normalize("docs/"), "docs/");
/// ```
pub fn normalize(path: &str) -> String {
	if path.is_empty() {
		return ".".into();
	}
	let absolute = is_absolute(path);
	let trailing_separator = path.ends_with(SEP);
	let tail = Normalizer::new(is_separator, !absolute).push(path).finish(SEP);

	let mut normalized = String::with_capacity(tail.len() + 2);
	if absolute {
		normalized.push(SEP);
	}
	if tail.is_empty() {
		if !absolute {
			normalized.push('.');
		}
	} else {
		normalized.push_str(&tail);
	}
	if trailing_separator && normalized != SEP_STR {
		normalized.push(SEP);
	}
	normalized
}

/// Is the path absolute.
pub fn is_absolute(path: &str) -> bool {
	path.starts_with(SEP)
}

/// Join paths together and normalize the result.
///
/// Empty paths are ignored. Joining nothing gives `.`.
pub fn join<P: AsRef<str>>(paths: &[P]) -> String {
	let mut joined = String::new();
	for path in paths.iter().map(AsRef::as_ref).filter(|path| !path.is_empty()) {
		if !joined.is_empty() {
			joined.push(SEP);
		}
		joined.push_str(path);
	}
	normalize(&joined)
}

/// The relative path that leads from `from` to `to`.
///
/// Both paths are resolved first. Segments are compared exactly. Identical
/// paths give an empty string. If only one of them resolves to an absolute
/// path the two share no base and the resolved `to` is returned as-is. The
/// same happens when `from` climbs above the directory it is relative to,
/// since the way back down depends on the current directory.
///
/// ```
/// use twinpath::posix;
///
/// assert_eq!(posix::relative("/data/orandea/test/aaa", "/data/orandea/impl"), "../../impl");
/// assert_eq!(posix::relative("../a", "../b"), "../b");
/// assert_eq!(posix::relative("..", "a"), "a");
/// ```
pub fn relative(from: &str, to: &str) -> String {
	if from == to {
		return String::new();
	}
	let from = resolve(&[from]);
	let to = resolve(&[to]);
	if from == to {
		return String::new();
	}
	if is_absolute(&from) != is_absolute(&to) {
		debug!("no common base between {from:?} and {to:?}");
		return to;
	}

	let from_segments = pure::segments(&from, SEP);
	let to_segments = pure::segments(&to, SEP);
	let common = pure::common_prefix_len(&from_segments, &to_segments, |a, b| a == b);
	if from_segments[common..].contains(&"..") {
		debug!("no common base between {from:?} and {to:?}: {from:?} leaves its start");
		return to;
	}
	pure::relative_segments(&from_segments, &to_segments, common, SEP)
}

/// POSIX paths have no namespace prefix so this returns `path` unchanged.
pub fn to_namespaced_path(path: &str) -> Cow<'_, str> {
	Cow::Borrowed(path)
}

/// The directory portion of a path.
///
/// Trailing separators are ignored. A path without a directory gives `.`
/// and the root is its own directory.
///
/// ```
/// use twinpath::posix;
///
/// assert_eq!(posix::dirname("/a/b/"), "/a");
/// assert_eq!(posix::dirname("/a//b"), "/a");
/// assert_eq!(posix::dirname("file.txt"), ".");
/// assert_eq!(posix::dirname("/"), "/");
/// ```
pub fn dirname(path: &str) -> &str {
	let root_len = root_len(path);
	let segment = pure::last_segment(path, root_len, is_separator);
	match pure::dir_before(path, segment.start, root_len, is_separator) {
		Some(dir) => dir,
		None if root_len > 0 => &path[..root_len],
		None => ".",
	}
}

/// The last segment of a path, ignoring trailing separators.
///
/// If `suffix` is given and the segment ends with it (without being equal
/// to it) then it is removed.
///
/// ```
/// use twinpath::posix;
///
/// assert_eq!(posix::basename("/home/user/notes.txt", None), "notes.txt");
/// assert_eq!(posix::basename("/home/user/notes.txt", Some(".txt")), "notes");
/// assert_eq!(posix::basename("/home/user/", None), "user");
/// assert_eq!(posix::basename(".txt", Some(".txt")), ".txt");
/// ```
pub fn basename<'a>(path: &'a str, suffix: Option<&str>) -> &'a str {
	let base = &path[pure::last_segment(path, 0, is_separator)];
	match suffix {
		Some(suffix) => pure::strip_suffix_strict(base, suffix),
		None => base,
	}
}

/// The extension of the last segment, including the leading `.`.
///
/// ```
/// use twinpath::posix;
///
/// assert_eq!(posix::extname("src/index.ts"), ".ts");
/// assert_eq!(posix::extname(".gitignore"), "");
/// assert_eq!(posix::extname("archive.tar.gz"), ".gz");
/// ```
pub fn extname(path: &str) -> &str {
	pure::split_extension(basename(path, None)).1
}

/// Build a path from its parts. See [`PathObject`].
pub fn format(object: &PathObject<'_>) -> String {
	pure::format(object, SEP)
}

/// Split a path into its parts. See [`ParsedPath`].
pub fn parse(path: &str) -> ParsedPath<'_> {
	let root_len = root_len(path);
	let root = &path[..root_len];
	let segment = pure::last_segment(path, root_len, is_separator);
	let dir = pure::dir_before(path, segment.start, root_len, is_separator).unwrap_or(root);
	let base = &path[segment];
	let (name, ext) = pure::split_extension(base);
	ParsedPath { root, dir, base, ext, name }
}

/// Convert a `file:` URL to a path.
///
/// The URL's host is ignored.
///
/// ```
/// use twinpath::posix;
///
/// assert_eq!(posix::from_file_url("file:///home/me/My%20Files").unwrap(), "/home/me/My Files");
/// assert!(posix::from_file_url("https://example.com/").is_err());
/// ```
#[cfg(feature = "std")]
pub fn from_file_url<U: FileUrlSource>(url: U) -> Result<String> {
	let url = file_url::parse_file_url(url)?;
	file_url::decode_path(url.path())
}

/// Convert an absolute path to a `file:` URL.
///
/// ```
/// use twinpath::posix;
///
/// let url = posix::to_file_url("/home/me/My Files").unwrap();
/// assert_eq!(url.as_str(), "file:///home/me/My%20Files");
/// assert!(posix::to_file_url("relative/path").is_err());
/// ```
#[cfg(feature = "std")]
pub fn to_file_url(path: &str) -> Result<Url> {
	if !is_absolute(path) {
		debug!("rejecting {path:?}: a file URL needs an absolute path");
		return Err(Error::NotAbsolutePath { path: path.into() });
	}
	file_url::with_path(path, true)
}
