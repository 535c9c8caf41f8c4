//! The operation set shared by every path grammar and the platform switch
//! that picks one.

use alloc::borrow::Cow;
use alloc::string::String;

use crate::error::Result;
use crate::parsed::{ParsedPath, PathObject};
use crate::{posix, windows};
#[cfg(feature = "std")]
use crate::file_url::FileUrlSource;
#[cfg(feature = "std")]
use url::Url;

/// The operations every path grammar provides.
///
/// Implemented by [`posix::Posix`] and [`windows::Windows`] so generic code
/// can be written once and run against either grammar.
///
/// ```
/// use twinpath::PathGrammar;
/// use twinpath::{posix::Posix, windows::Windows};
///
/// fn file_name<G: PathGrammar>(path: &str) -> &str {
///     G::basename(path, None)
/// }
/// assert_eq!(file_name::<Posix>("/srv/www/index.html"), "index.html");
/// assert_eq!(file_name::<Windows>(r"C:\srv\www\index.html"), "index.html");
/// ```
pub trait PathGrammar: Sealed {
	/// The canonical path separator.
	const SEP: char;
	/// The separator used between entries of a `PATH`-style list.
	const DELIMITER: char;

	fn resolve<P: AsRef<str>>(paths: &[P]) -> String;
	fn resolve_from<P: AsRef<str>>(cwd: &str, paths: &[P]) -> String;
	fn normalize(path: &str) -> String;
	fn is_absolute(path: &str) -> bool;
	fn join<P: AsRef<str>>(paths: &[P]) -> String;
	fn relative(from: &str, to: &str) -> Result<String>;
	fn to_namespaced_path(path: &str) -> Cow<'_, str>;
	fn dirname(path: &str) -> &str;
	fn basename<'a>(path: &'a str, suffix: Option<&str>) -> &'a str;
	fn extname(path: &str) -> &str;
	fn format(object: &PathObject<'_>) -> String;
	fn parse(path: &str) -> ParsedPath<'_>;
	#[cfg(feature = "std")]
	fn from_file_url<U: FileUrlSource>(url: U) -> Result<String>;
	#[cfg(feature = "std")]
	fn to_file_url(path: &str) -> Result<Url>;
}

macro_rules! impl_path_grammar {
	($grammar:ty, $module:ident, |$from:ident, $to:ident| $relative:expr) => {
		impl Sealed for $grammar {}
		impl PathGrammar for $grammar {
			const SEP: char = $module::SEP;
			const DELIMITER: char = $module::DELIMITER;

			fn resolve<P: AsRef<str>>(paths: &[P]) -> String {
				$module::resolve(paths)
			}
			fn resolve_from<P: AsRef<str>>(cwd: &str, paths: &[P]) -> String {
				$module::resolve_from(cwd, paths)
			}
			fn normalize(path: &str) -> String {
				$module::normalize(path)
			}
			fn is_absolute(path: &str) -> bool {
				$module::is_absolute(path)
			}
			fn join<P: AsRef<str>>(paths: &[P]) -> String {
				$module::join(paths)
			}
			fn relative($from: &str, $to: &str) -> Result<String> {
				$relative
			}
			fn to_namespaced_path(path: &str) -> Cow<'_, str> {
				$module::to_namespaced_path(path)
			}
			fn dirname(path: &str) -> &str {
				$module::dirname(path)
			}
			fn basename<'a>(path: &'a str, suffix: Option<&str>) -> &'a str {
				$module::basename(path, suffix)
			}
			fn extname(path: &str) -> &str {
				$module::extname(path)
			}
			fn format(object: &PathObject<'_>) -> String {
				$module::format(object)
			}
			fn parse(path: &str) -> ParsedPath<'_> {
				$module::parse(path)
			}
			#[cfg(feature = "std")]
			fn from_file_url<U: FileUrlSource>(url: U) -> Result<String> {
				$module::from_file_url(url)
			}
			#[cfg(feature = "std")]
			fn to_file_url(path: &str) -> Result<Url> {
				$module::to_file_url(path)
			}
		}
	};
}

impl_path_grammar!(posix::Posix, posix, |from, to| Ok(posix::relative(from, to)));
impl_path_grammar!(windows::Windows, windows, |from, to| windows::relative(from, to));

/// Which grammar to use.
///
/// [`Platform::current`] is fixed when the crate is compiled. Hosts that
/// detect the platform some other way can pass their answer to
/// [`Platform::from_is_windows`] once and keep the value around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
	Posix,
	Windows,
}
impl Platform {
	/// The platform this crate was compiled for.
	pub const fn current() -> Self {
		Self::from_is_windows(cfg!(windows))
	}

	pub const fn from_is_windows(is_windows: bool) -> Self {
		if is_windows {
			Self::Windows
		} else {
			Self::Posix
		}
	}

	pub const fn is_windows(self) -> bool {
		matches!(self, Self::Windows)
	}

	pub const fn sep(self) -> char {
		match self {
			Self::Posix => posix::SEP,
			Self::Windows => windows::SEP,
		}
	}

	pub const fn delimiter(self) -> char {
		match self {
			Self::Posix => posix::DELIMITER,
			Self::Windows => windows::DELIMITER,
		}
	}
}

/// Forward an operation to the selected grammar.
macro_rules! dispatch {
	($platform:expr, $name:ident($($arg:expr),*)) => {
		match $platform {
			Platform::Posix => <posix::Posix as PathGrammar>::$name($($arg),*),
			Platform::Windows => <windows::Windows as PathGrammar>::$name($($arg),*),
		}
	};
}

/// Each of these forwards to the grammar of the same name in [`posix`] or
/// [`windows`].
impl Platform {
	pub fn resolve<P: AsRef<str>>(self, paths: &[P]) -> String {
		dispatch!(self, resolve(paths))
	}
	pub fn resolve_from<P: AsRef<str>>(self, cwd: &str, paths: &[P]) -> String {
		dispatch!(self, resolve_from(cwd, paths))
	}
	pub fn normalize(self, path: &str) -> String {
		dispatch!(self, normalize(path))
	}
	pub fn is_absolute(self, path: &str) -> bool {
		dispatch!(self, is_absolute(path))
	}
	pub fn join<P: AsRef<str>>(self, paths: &[P]) -> String {
		dispatch!(self, join(paths))
	}
	pub fn relative(self, from: &str, to: &str) -> Result<String> {
		dispatch!(self, relative(from, to))
	}
	pub fn to_namespaced_path(self, path: &str) -> Cow<'_, str> {
		dispatch!(self, to_namespaced_path(path))
	}
	pub fn dirname(self, path: &str) -> &str {
		dispatch!(self, dirname(path))
	}
	pub fn basename<'a>(self, path: &'a str, suffix: Option<&str>) -> &'a str {
		dispatch!(self, basename(path, suffix))
	}
	pub fn extname(self, path: &str) -> &str {
		dispatch!(self, extname(path))
	}
	pub fn format(self, object: &PathObject<'_>) -> String {
		dispatch!(self, format(object))
	}
	pub fn parse(self, path: &str) -> ParsedPath<'_> {
		dispatch!(self, parse(path))
	}
	#[cfg(feature = "std")]
	pub fn from_file_url<U: FileUrlSource>(self, url: U) -> Result<String> {
		dispatch!(self, from_file_url(url))
	}
	#[cfg(feature = "std")]
	pub fn to_file_url(self, path: &str) -> Result<Url> {
		dispatch!(self, to_file_url(path))
	}
}

mod private {
	pub trait Sealed {}
}
use private::Sealed;
