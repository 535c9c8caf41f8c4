//! The Windows path grammar.
//!
//! Both `\` and `/` separate path segments but `\` is always used when a
//! path is built. A path may start with a drive (`C:`) or a UNC share
//! (`\\server\share`), together called the path's device. Drive letters keep
//! the case they were written with and are compared case-insensitively.
//!
//! ```
//! use twinpath::windows;
//!
//! assert_eq!(windows::normalize(r"C:\foo\..\bar"), r"C:\bar");
//! assert_eq!(
//!     windows::join(&["//server/share", "dir", "file.txt"]),
//!     r"\\server\share\dir\file.txt"
//! );
//! assert!(windows::relative(r"C:\a\b", r"D:\a\b").is_err());
//! ```

pub(crate) mod kind;

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::parsed::{ParsedPath, PathObject};
use crate::pure::{self, Normalizer};
use crate::util::is_windows_separator as is_separator;
#[cfg(feature = "std")]
use crate::{
	file_url::{self, FileUrlSource},
	util::is_drive_letter,
};
#[cfg(feature = "std")]
use url::Url;

pub use kind::{ParsedRoot, WinPathKind};

/// The canonical path separator.
pub const SEP: char = '\\';
/// [`SEP`] as a string.
pub const SEP_STR: &str = "\\";
/// The separator between entries of the `PATH` environment variable.
pub const DELIMITER: char = ';';
/// [`DELIMITER`] as a string.
pub const DELIMITER_STR: &str = ";";

/// The Windows grammar as a [`PathGrammar`](crate::PathGrammar) implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Windows;

/// Case-insensitive comparison, as used for devices and path segments.
fn eq_ignore_case(a: &str, b: &str) -> bool {
	a.eq_ignore_ascii_case(b)
		|| a.chars().flat_map(char::to_lowercase).eq(b.chars().flat_map(char::to_lowercase))
}

/// Accumulates paths from right to left until both a device and an
/// absolute root are known.
struct Resolver<'a> {
	device: Cow<'a, str>,
	pieces: Vec<&'a str>,
	absolute: bool,
}
impl<'a> Resolver<'a> {
	fn new() -> Self {
		Self { device: Cow::Borrowed(""), pieces: Vec::new(), absolute: false }
	}

	fn is_done(&self) -> bool {
		self.absolute && !self.device.is_empty()
	}

	/// Add the next path to the left. Returns true once resolution is done.
	fn push(&mut self, path: &'a str) -> bool {
		let root = ParsedRoot::parse(path);
		let device = root.device();
		if !device.is_empty() {
			if self.device.is_empty() {
				self.device = device;
			} else if !eq_ignore_case(&device, &self.device) {
				trace!("skipping {path:?}: not on device {}", self.device);
				return false;
			}
		}
		if !self.absolute {
			self.pieces.push(root.rest());
			self.absolute = root.is_absolute();
		}
		self.is_done()
	}

	fn finish(self) -> String {
		let mut normalizer = Normalizer::new(is_separator, !self.absolute);
		for piece in self.pieces.iter().rev().copied() {
			normalizer.push(piece);
		}
		let tail = normalizer.finish(SEP);
		let mut resolved = String::with_capacity(self.device.len() + tail.len() + 1);
		resolved.push_str(&self.device);
		if self.absolute {
			resolved.push(SEP);
		}
		resolved.push_str(&tail);
		if resolved.is_empty() {
			resolved.push('.');
		}
		resolved
	}
}

/// Resolve a sequence of paths into a single normalized path.
///
/// Paths are considered from right to left. Once a device is known, paths on
/// other devices are skipped. Resolution stops when an absolute path on a
/// known device has been seen. No current directory is consulted; use
/// [`resolve_from`] to supply one.
///
/// ```
/// use twinpath::windows;
///
/// assert_eq!(windows::resolve(&[r"C:\a", r"D:\b"]), r"D:\b");
/// assert_eq!(windows::resolve(&[r"C:\a", r"\b", "c"]), r"C:\b\c");
/// assert_eq!(windows::resolve(&[r"D:\a", "d:b"]), r"d:\a\b");
/// assert_eq!(windows::resolve(&[r"C:\a", "d:b"]), "d:b");
/// ```
pub fn resolve<P: AsRef<str>>(paths: &[P]) -> String {
	resolve_inner(None, paths)
}

/// Like [`resolve`] but with `cwd` as the implicit base in front of `paths`.
///
/// When the paths name a drive other than the one `cwd` is on, the root of
/// that drive is used as the base instead.
///
/// ```
/// use twinpath::windows;
///
/// assert_eq!(windows::resolve_from(r"C:\Users\me", &["docs"]), r"C:\Users\me\docs");
/// assert_eq!(windows::resolve_from(r"C:\Users\me", &[r"\tmp"]), r"C:\tmp");
/// assert_eq!(windows::resolve_from(r"C:\Users\me", &["D:notes"]), r"D:\notes");
/// ```
pub fn resolve_from<P: AsRef<str>>(cwd: &str, paths: &[P]) -> String {
	resolve_inner(Some(cwd), paths)
}

fn resolve_inner<P: AsRef<str>>(cwd: Option<&str>, paths: &[P]) -> String {
	let mut resolver = Resolver::new();
	for path in paths.iter().map(|path| path.as_ref()).rev() {
		if !path.is_empty() && resolver.push(path) {
			return resolver.finish();
		}
	}
	if let Some(cwd) = cwd.filter(|cwd| !cwd.is_empty()) {
		let cwd_device = ParsedRoot::parse(cwd).device();
		if resolver.device.is_empty() || eq_ignore_case(&cwd_device, &resolver.device) {
			resolver.push(cwd);
		} else {
			trace!("{cwd:?} is not on {}, using the drive root", resolver.device);
			resolver.absolute = true;
		}
	}
	resolver.finish()
}

/// Normalize a path, collapsing `.`, `..` and repeated separators.
///
/// The root is kept with its separators made canonical. A trailing
/// separator is kept.
///
/// ```
/// use twinpath::windows;
///
/// assert_eq!(windows::normalize("C:/temp//foo/bar/..\\"), r"C:\temp\foo\");
/// assert_eq!(windows::normalize(r"\\server\share"), r"\\server\share\");
/// assert_eq!(windows::normalize(r"..\a\..\.."), r"..\..");
/// assert_eq!(windows::normalize("C:"), "C:.");
/// ```
pub fn normalize(path: &str) -> String {
	if path.is_empty() {
		return ".".into();
	}
	let root = ParsedRoot::parse(path);
	let device = root.device();
	if root.is_bare_share() {
		return format!("{device}{SEP}");
	}

	let absolute = root.is_absolute();
	let mut tail = Normalizer::new(is_separator, !absolute).push(root.rest()).finish(SEP);
	if tail.is_empty() && !absolute {
		tail.push('.');
	}
	if !tail.is_empty() && path.bytes().last().is_some_and(is_separator) {
		tail.push(SEP);
	}

	let mut normalized = String::with_capacity(device.len() + tail.len() + 1);
	normalized.push_str(&device);
	if absolute {
		normalized.push(SEP);
	}
	normalized.push_str(&tail);
	normalized
}

/// Is the path absolute.
///
/// This includes root relative paths such as `\Windows` which don't depend
/// on the current directory, only on the current drive.
pub fn is_absolute(path: &str) -> bool {
	ParsedRoot::parse(path).is_absolute()
}

/// Join paths together and normalize the result.
///
/// Empty paths are ignored. Joining nothing gives `.`. Only the first path
/// can make the result a UNC path.
///
/// ```
/// use twinpath::windows;
///
/// assert_eq!(windows::join(&["C:", "foo", r"..\bar"]), r"C:\bar");
/// assert_eq!(windows::join(&["", r"\\", "share"]), r"\share");
/// assert_eq!(windows::join::<&str>(&[]), ".");
/// ```
pub fn join<P: AsRef<str>>(paths: &[P]) -> String {
	let mut pieces = paths.iter().map(|path| path.as_ref()).filter(|path| !path.is_empty());
	let Some(first) = pieces.next() else {
		return ".".into();
	};
	let mut joined = String::from(first);
	for piece in pieces {
		joined.push(SEP);
		joined.push_str(piece);
	}

	// Only a first piece of the form `\\server` may start a UNC path. For
	// anything else a leading run of separators collapses to one.
	let first = first.as_bytes();
	let starts_unc = first.len() > 2
		&& is_separator(first[0])
		&& is_separator(first[1])
		&& !is_separator(first[2]);
	if !starts_unc {
		let leading = joined.bytes().take_while(|&b| is_separator(b)).count();
		if leading >= 2 {
			joined.replace_range(..leading, SEP_STR);
		}
	}
	normalize(&joined)
}

/// The relative path that leads from `from` to `to`.
///
/// Both paths are resolved first and compared case-insensitively. The
/// result uses the case of `to`.
///
/// # Errors
///
/// Fails with [`Error::CrossDeviceRelative`] if the paths are on different
/// devices, if only one of them is absolute, or if `from` climbs above the
/// directory it is relative to. No relative path can connect them without
/// knowing the current directory.
///
/// ```
/// use twinpath::windows;
///
/// assert_eq!(
///     windows::relative(r"C:\orandea\test\aaa", r"c:\orandea\impl\bbb").unwrap(),
///     r"..\..\impl\bbb"
/// );
/// assert_eq!(windows::relative(r"C:\a", r"C:\A").unwrap(), "");
/// assert!(windows::relative("..", "a").is_err());
/// ```
pub fn relative(from: &str, to: &str) -> Result<String> {
	if from == to {
		return Ok(String::new());
	}
	let from = resolve(&[from]);
	let to = resolve(&[to]);
	if eq_ignore_case(&from, &to) {
		return Ok(String::new());
	}

	let from_root = ParsedRoot::parse(&from);
	let to_root = ParsedRoot::parse(&to);
	if from_root.is_absolute() != to_root.is_absolute()
		|| !eq_ignore_case(&from_root.device(), &to_root.device())
	{
		debug!("no relative path from {from:?} to {to:?}: different devices");
		return Err(Error::CrossDeviceRelative { from, to });
	}

	let from_segments = pure::segments(from_root.rest(), SEP);
	let to_segments = pure::segments(to_root.rest(), SEP);
	let common = pure::common_prefix_len(&from_segments, &to_segments, eq_ignore_case);
	if from_segments[common..].contains(&"..") {
		debug!("no relative path from {from:?} to {to:?}: {from:?} leaves its start");
		return Err(Error::CrossDeviceRelative { from, to });
	}
	Ok(pure::relative_segments(&from_segments, &to_segments, common, SEP))
}

/// Prefix an absolute drive or UNC path with `\\?\` so Windows APIs accept
/// it regardless of length.
///
/// Other paths, including those that already use a device namespace, are
/// returned unchanged.
///
/// ```
/// use twinpath::windows;
///
/// assert_eq!(windows::to_namespaced_path(r"C:\foo\..\bar"), r"\\?\C:\bar");
/// assert_eq!(windows::to_namespaced_path(r"\\server\share\file"), r"\\?\UNC\server\share\file");
/// assert_eq!(windows::to_namespaced_path(r"relative\path"), r"relative\path");
/// ```
pub fn to_namespaced_path(path: &str) -> Cow<'_, str> {
	if path.is_empty() {
		return Cow::Borrowed(path);
	}
	let resolved = resolve(&[path]);
	match ParsedRoot::parse(&resolved).kind() {
		WinPathKind::Drive(_) => Cow::Owned(format!(r"\\?\{resolved}")),
		WinPathKind::Unc => Cow::Owned(format!(r"\\?\UNC\{}", &resolved[2..])),
		_ => Cow::Borrowed(path),
	}
}

/// The directory portion of a path.
///
/// The root is never split: the directory of `C:\file` is `C:\` and a bare
/// UNC share is its own directory.
///
/// ```
/// use twinpath::windows;
///
/// assert_eq!(windows::dirname(r"C:\foo\bar\"), r"C:\foo");
/// assert_eq!(windows::dirname(r"C:\foo"), r"C:\");
/// assert_eq!(windows::dirname("C:foo"), "C:");
/// assert_eq!(windows::dirname(r"\\server\share"), r"\\server\share");
/// assert_eq!(windows::dirname("foo"), ".");
/// ```
pub fn dirname(path: &str) -> &str {
	let root_len = ParsedRoot::parse(path).root_len();
	let segment = pure::last_segment(path, root_len, is_separator);
	match pure::dir_before(path, segment.start, root_len, is_separator) {
		Some(dir) => dir,
		None if root_len > 0 => &path[..root_len],
		None => ".",
	}
}

/// The last segment of a path, ignoring trailing separators.
///
/// The root is not a segment so `C:\` and `\\server\share` have an empty
/// basename. If `suffix` is given and the segment ends with it (without
/// being equal to it) then it is removed.
///
/// ```
/// use twinpath::windows;
///
/// assert_eq!(windows::basename(r"C:\temp\myfile.html", None), "myfile.html");
/// assert_eq!(windows::basename(r"C:\temp\myfile.html", Some(".html")), "myfile");
/// assert_eq!(windows::basename("C:foo.txt", None), "foo.txt");
/// ```
pub fn basename<'a>(path: &'a str, suffix: Option<&str>) -> &'a str {
	let root_len = ParsedRoot::parse(path).root_len();
	let base = &path[pure::last_segment(path, root_len, is_separator)];
	match suffix {
		Some(suffix) => pure::strip_suffix_strict(base, suffix),
		None => base,
	}
}

/// The extension of the last segment, including the leading `.`.
pub fn extname(path: &str) -> &str {
	pure::split_extension(basename(path, None)).1
}

/// Build a path from its parts. See [`PathObject`].
pub fn format(object: &PathObject<'_>) -> String {
	pure::format(object, SEP)
}

/// Split a path into its parts. See [`ParsedPath`].
///
/// ```
/// use twinpath::windows;
///
/// let parsed = windows::parse(r"C:\path\dir\file.txt");
/// assert_eq!(parsed.root, r"C:\");
/// assert_eq!(parsed.dir, r"C:\path\dir");
/// assert_eq!(parsed.base, "file.txt");
/// assert_eq!(parsed.ext, ".txt");
/// assert_eq!(parsed.name, "file");
/// ```
pub fn parse(path: &str) -> ParsedPath<'_> {
	let root = ParsedRoot::parse(path);
	let root_len = root.root_len();
	let segment = pure::last_segment(path, root_len, is_separator);
	let dir = pure::dir_before(path, segment.start, root_len, is_separator).unwrap_or(root.root());
	let base = &path[segment];
	let (name, ext) = pure::split_extension(base);
	ParsedPath { root: root.root(), dir, base, ext, name }
}

/// Convert a `file:` URL to a path.
///
/// URLs with a host become UNC paths.
///
/// # Errors
///
/// Fails if the URL isn't a `file:` URL or if it names a drive that isn't a
/// single ASCII letter.
///
/// ```
/// use twinpath::windows;
///
/// assert_eq!(
///     windows::from_file_url("file:///C:/Users/me/My%20Files").unwrap(),
///     r"C:\Users\me\My Files"
/// );
/// assert_eq!(windows::from_file_url("file://server/share/file").unwrap(), r"\\server\share\file");
/// assert!(windows::from_file_url("file:///CD:/file").is_err());
/// ```
#[cfg(feature = "std")]
pub fn from_file_url<U: FileUrlSource>(url: U) -> Result<String> {
	let url = file_url::parse_file_url(url)?;
	// Swap separators before decoding so an encoded `/` stays a `/`.
	let path = file_url::decode_path(&url.path().replace('/', SEP_STR))?;

	let trimmed = path.trim_start_matches(SEP);
	let first = trimmed.split(SEP).next().unwrap_or("");
	let path = if first.ends_with(':') {
		if first.len() != 2 || !is_drive_letter(first.as_bytes()[0]) {
			debug!("rejecting {url}: {first:?} is not a drive");
			return Err(Error::InvalidDriveLetter { segment: first.into() });
		}
		// `C:` on its own still names the root of the drive.
		let mut drive = String::with_capacity(trimmed.len() + 1);
		drive.push_str(first);
		drive.push(SEP);
		drive.push_str(trimmed[first.len()..].trim_start_matches(SEP));
		drive
	} else {
		path
	};

	match url.host_str().filter(|host| !host.is_empty()) {
		Some(host) => Ok(format!(r"\\{host}{path}")),
		None => Ok(path),
	}
}

/// Convert an absolute path to a `file:` URL.
///
/// The server of a UNC path becomes the URL's host.
///
/// # Errors
///
/// Fails if the path is not absolute or the server name isn't a valid host.
///
/// ```
/// use twinpath::windows;
///
/// let url = windows::to_file_url(r"C:\Users\foo").unwrap();
/// assert_eq!(url.path(), "/C:/Users/foo");
/// let url = windows::to_file_url(r"\\server\share\file").unwrap();
/// assert_eq!(url.as_str(), "file://server/share/file");
/// ```
#[cfg(feature = "std")]
pub fn to_file_url(path: &str) -> Result<Url> {
	if !is_absolute(path) {
		debug!("rejecting {path:?}: a file URL needs an absolute path");
		return Err(Error::NotAbsolutePath { path: path.into() });
	}
	let (host, rest) = split_url_host(path);
	let mut url_path = rest.replace(SEP, "/");
	if !url_path.starts_with('/') {
		url_path.insert(0, '/');
	}
	let mut url = file_url::with_path(&url_path, false)?;
	if let Some(host) = host.filter(|&host| host != "localhost") {
		if url.set_host(Some(host)).is_err() || url.host_str().is_none() {
			debug!("rejecting {path:?}: {host:?} is not a valid host");
			return Err(Error::InvalidHostname { hostname: host.into() });
		}
	}
	Ok(url)
}

/// Split `\\host\rest` into `(Some(host), "\rest")`.
///
/// The host must be followed by a separator and then either a segment or
/// the end of the path.
#[cfg(feature = "std")]
fn split_url_host(path: &str) -> (Option<&str>, &str) {
	let bytes = path.as_bytes();
	if bytes.len() < 3 || !is_separator(bytes[0]) || !is_separator(bytes[1]) {
		return (None, path);
	}
	let end = bytes[2..].iter().position(|&b| is_separator(b)).map_or(bytes.len(), |n| n + 2);
	let followed_by_segment =
		end < bytes.len() && bytes.get(end + 1).map_or(true, |&b| !is_separator(b));
	if end == 2 || !followed_by_segment {
		return (None, path);
	}
	(Some(&path[2..end]), &path[end..])
}
