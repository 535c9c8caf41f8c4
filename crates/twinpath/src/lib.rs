//! Path string manipulation for POSIX and Windows paths.
//!
//! The [`posix`] and [`windows`] modules implement the same set of
//! operations for their grammar. Neither touches the filesystem and both are
//! available on every platform. The crate root re-exports the grammar of the
//! platform being compiled for.
//!
//! ```
//! use twinpath::{posix, windows};
//!
//! assert_eq!(posix::join(&["/srv", "www/", "./index.html"]), "/srv/www/index.html");
//! assert_eq!(windows::join(&["C:/srv", "www", "index.html"]), r"C:\srv\www\index.html");
//! assert_eq!(posix::extname("index.ts"), ".ts");
//! assert_eq!(windows::dirname(r"C:\srv\www"), r"C:\srv");
//! ```
//!
//! # Choosing a grammar at runtime
//!
//! Code that works with either grammar can be generic over [`PathGrammar`]
//! or take a [`Platform`] value.
//!
//! ```
//! use twinpath::Platform;
//!
//! let platform = Platform::from_is_windows(true);
//! assert_eq!(platform.normalize("C:/temp/../file"), r"C:\file");
//! assert_eq!(Platform::Posix.normalize("/temp/../file"), "/file");
//! ```
//!
//! # File URLs
//!
//! With the `std` feature (on by default) paths can be converted to and from
//! `file:` URLs.
//!
//! ```
//! # #[cfg(feature = "std")]
//! # {
//! use twinpath::{posix, windows};
//!
//! let url = windows::to_file_url(r"C:\Users\foo").unwrap();
//! assert_eq!(url.as_str(), "file:///C:/Users/foo");
//! assert_eq!(posix::from_file_url("file:///tmp/a%20b").unwrap(), "/tmp/a b");
//! # }
//! ```
//!
//! # Absolute paths
//!
//! [`sys_absolute`] makes a path absolute according to the rules of the
//! current platform, without needing the path to exist.
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

use alloc::string::String;

// Utility functions.
mod util;

mod error;
#[cfg(feature = "std")]
mod file_url;
mod grammar;
mod parsed;
mod pure;

pub mod posix;
pub mod windows;

pub use error::{Error, Result};
#[cfg(feature = "std")]
pub use file_url::FileUrlSource;
pub use grammar::{PathGrammar, Platform};
pub use parsed::{ParsedPath, PathObject};

/// The grammar of the platform being compiled for.
#[cfg(windows)]
pub use windows as native;
/// The grammar of the platform being compiled for.
#[cfg(not(windows))]
pub use posix as native;

pub use native::{
	basename, dirname, extname, format, is_absolute, join, normalize, parse, resolve, resolve_from,
	to_namespaced_path, DELIMITER, DELIMITER_STR, SEP, SEP_STR,
};
#[cfg(feature = "std")]
pub use native::{from_file_url, to_file_url};

/// The relative path from `from` to `to` using the native grammar.
///
/// This always returns a `Result` so it has the same signature on every
/// platform, even though only Windows paths can fail.
pub fn relative(from: &str, to: &str) -> Result<String> {
	Platform::current().relative(from, to)
}

/// Converts a path to absolute according to the rules of the current platform.
///
/// The path is resolved against [`std::env::current_dir`]. Unlike
/// [`std::fs::canonicalize`] this does not resolve symlinks and the path does
/// not need to exist.
///
/// # Example
///
/// ```
/// use twinpath::sys_absolute;
/// use std::env::current_dir;
///
/// let cwd = current_dir().unwrap();
/// let cwd = cwd.to_str().unwrap();
/// assert_eq!(
///     sys_absolute("path/to/.//file").unwrap(),
///     twinpath::join(&[cwd, "path/to/file"])
/// );
/// ```
#[cfg(feature = "std")]
pub fn sys_absolute(path: &str) -> std::io::Result<String> {
	let cwd = std::env::current_dir()?;
	let cwd = cwd.to_str().ok_or_else(|| {
		std::io::Error::new(std::io::ErrorKind::InvalidData, "current directory is not valid UTF-8")
	})?;
	Ok(native::resolve_from(cwd, &[path]))
}
