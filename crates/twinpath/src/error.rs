//! Errors reported by path operations.
//!
//! Every operation is deterministic, so these describe bad input rather than
//! transient conditions. Retrying with the same arguments gives the same error.

use alloc::string::String;

use thiserror::Error;

/// Result type alias for fallible path operations.
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for fallible path operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	/// A URL given to `from_file_url` does not use the `file:` scheme.
	#[error("expected a `file:` URL, found scheme `{scheme}:`")]
	InvalidUrlScheme {
		/// The scheme that was found, without the trailing `:`.
		scheme: String,
	},

	/// `to_file_url` was given a path that is not absolute.
	#[error("path must be absolute: {path:?}")]
	NotAbsolutePath {
		/// The rejected path.
		path: String,
	},

	/// Windows `relative` between paths that live on different devices.
	///
	/// No relative path can lead from one drive or UNC share to another. An
	/// unknown current directory counts as a device of its own, so this is
	/// also reported when only one path is absolute or when a relative `from`
	/// climbs above it.
	#[error("no relative path from {from:?} to {to:?}: they are on different devices")]
	CrossDeviceRelative {
		/// The resolved origin path.
		from: String,
		/// The resolved target path.
		to: String,
	},

	/// A file URL whose first path segment looks like a drive but is not a
	/// single ASCII letter followed by `:`.
	#[error("invalid drive letter in file URL: {segment:?}")]
	InvalidDriveLetter {
		/// The offending path segment.
		segment: String,
	},

	/// A UNC server name that cannot be used as a URL host.
	#[error("invalid hostname: {hostname:?}")]
	InvalidHostname {
		/// The rejected host.
		hostname: String,
	},

	/// A file URL that percent-decodes to bytes which are not UTF-8.
	#[error("file URL does not decode to UTF-8")]
	InvalidPercentEncoding,

	/// A string that could not be parsed as a URL at all.
	#[cfg(feature = "std")]
	#[error("invalid URL: {0}")]
	InvalidUrl(#[from] url::ParseError),
}
