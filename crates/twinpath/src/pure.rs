//! Grammar independent building blocks.
//!
//! Nothing here knows what a root looks like. Callers split the root off
//! first and hand the rest of the path over along with a separator predicate.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use crate::parsed::PathObject;

/// Collapses `.` and `..` segments across one or more raw path strings.
///
/// Retained segments are slices of the input so pushing never allocates
/// beyond growing the segment stack.
#[derive(Debug)]
pub(crate) struct Normalizer<'a> {
	segments: Vec<&'a str>,
	is_separator: fn(u8) -> bool,
	allow_above_root: bool,
}
impl<'a> Normalizer<'a> {
	/// `allow_above_root` keeps `..` segments that have nothing left to pop.
	/// Relative paths need them. For absolute paths they are dropped.
	pub fn new(is_separator: fn(u8) -> bool, allow_above_root: bool) -> Self {
		Self { segments: Vec::new(), is_separator, allow_above_root }
	}

	/// Push every segment of `raw`, which must not contain a root.
	pub fn push(&mut self, raw: &'a str) -> &mut Self {
		let is_separator = self.is_separator;
		for segment in raw.split(|c: char| c.is_ascii() && is_separator(c as u8)) {
			self.push_segment(segment);
		}
		self
	}

	fn push_segment(&mut self, segment: &'a str) {
		match segment {
			"" | "." => {}
			".." => match self.segments.last() {
				Some(&last) if last != ".." => {
					self.segments.pop();
				}
				_ => {
					if self.allow_above_root {
						self.segments.push("..");
					}
				}
			},
			name => self.segments.push(name),
		}
	}

	/// Join the retained segments with `separator`.
	///
	/// The result has no root and no trailing separator. It is empty if
	/// nothing was retained.
	pub fn finish(&self, separator: char) -> String {
		let len = self.segments.iter().map(|s| s.len() + 1).sum();
		let mut out = String::with_capacity(len);
		for (i, segment) in self.segments.iter().enumerate() {
			if i > 0 {
				out.push(separator);
			}
			out.push_str(segment);
		}
		out
	}
}

/// The byte range of the final segment of `path`.
///
/// Trailing separators are skipped and the search never looks before
/// `root_len`. The range is empty when `path` is only a root.
pub(crate) fn last_segment(
	path: &str,
	root_len: usize,
	is_separator: fn(u8) -> bool,
) -> Range<usize> {
	let bytes = path.as_bytes();
	let mut end = bytes.len();
	while end > root_len && is_separator(bytes[end - 1]) {
		end -= 1;
	}
	let start = bytes[root_len..end]
		.iter()
		.rposition(|&b| is_separator(b))
		.map_or(root_len, |pos| root_len + pos + 1);
	start..end
}

/// The directory part of `path` given the start of its last segment.
///
/// Returns `None` if there is nothing before the segment except the root,
/// in which case the caller picks between the root and `.`.
pub(crate) fn dir_before(
	path: &str,
	segment_start: usize,
	root_len: usize,
	is_separator: fn(u8) -> bool,
) -> Option<&str> {
	if segment_start > root_len {
		Some(crate::util::trim_end_separators(&path[..segment_start], root_len, is_separator))
	} else {
		None
	}
}

/// Where the extension starts in a file name, if it has one.
///
/// A leading `.` marks a hidden file rather than an extension, so `.bashrc`
/// has none. `..` has none either but `...` has `.`.
pub(crate) fn extension_start(base: &str) -> Option<usize> {
	if base == ".." {
		return None;
	}
	match base.bytes().rposition(|b| b == b'.') {
		Some(0) | None => None,
		Some(pos) => Some(pos),
	}
}

/// Split a file name into `(name, ext)`.
pub(crate) fn split_extension(base: &str) -> (&str, &str) {
	match extension_start(base) {
		Some(pos) => base.split_at(pos),
		None => (base, ""),
	}
}

/// Strip `suffix` from `base` unless it is the whole of `base`.
pub(crate) fn strip_suffix_strict<'a>(base: &'a str, suffix: &str) -> &'a str {
	if suffix.len() < base.len() {
		base.strip_suffix(suffix).unwrap_or(base)
	} else {
		base
	}
}

/// Number of leading segments `a` and `b` share under `eq`.
pub(crate) fn common_prefix_len<F>(a: &[&str], b: &[&str], eq: F) -> usize
where
	F: Fn(&str, &str) -> bool,
{
	a.iter().zip(b).take_while(|&(&a, &b)| eq(a, b)).count()
}

/// Build the relative path leading from the `from` segments to the `to`
/// segments once their common prefix is known.
pub(crate) fn relative_segments(
	from: &[&str],
	to: &[&str],
	common: usize,
	separator: char,
) -> String {
	let mut out = String::new();
	for _ in common..from.len() {
		if !out.is_empty() {
			out.push(separator);
		}
		out.push_str("..");
	}
	for segment in &to[common..] {
		if !out.is_empty() {
			out.push(separator);
		}
		out.push_str(segment);
	}
	out
}

/// Split a normalized path (root already removed) into its segments.
///
/// A lone `.` is the empty relative path and has no segments.
pub(crate) fn segments(path: &str, separator: char) -> Vec<&str> {
	path.split(separator).filter(|s| !s.is_empty() && *s != ".").collect()
}

/// Build a path string from its parts.
///
/// `base` wins over `name` and `ext`. A `dir` equal to the `root` is joined
/// without an extra separator.
pub(crate) fn format(object: &PathObject<'_>, separator: char) -> String {
	let root = object.root.unwrap_or("");
	let dir = object.dir.filter(|dir| !dir.is_empty()).unwrap_or(root);
	let mut out = String::with_capacity(dir.len() + 1 + object.base.map_or(0, str::len));
	out.push_str(dir);
	if !dir.is_empty() && dir != root {
		out.push(separator);
	}
	match object.base.filter(|base| !base.is_empty()) {
		Some(base) => out.push_str(base),
		None => {
			out.push_str(object.name.unwrap_or(""));
			if let Some(ext) = object.ext.filter(|ext| !ext.is_empty()) {
				if !ext.starts_with('.') {
					out.push('.');
				}
				out.push_str(ext);
			}
		}
	}
	out
}
