//! `file:` URL handling shared by the POSIX and Windows grammars.

use std::borrow::Cow;
use std::string::{String, ToString};

use log::debug;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use crate::error::{Error, Result};

/// Characters the URL path setter would otherwise drop or reinterpret.
const PATH: &AsciiSet = &CONTROLS.add(b' ').add(b'%');
/// [`PATH`] plus `\`, which is an ordinary character in a POSIX file name.
const POSIX_PATH: &AsciiSet = &PATH.add(b'\\');

/// Anything that can be read as a URL by `from_file_url`.
pub trait FileUrlSource {
	fn into_url(self) -> Result<Url>;
}
impl FileUrlSource for Url {
	fn into_url(self) -> Result<Url> {
		Ok(self)
	}
}
impl FileUrlSource for &Url {
	fn into_url(self) -> Result<Url> {
		Ok(self.clone())
	}
}
impl FileUrlSource for &str {
	fn into_url(self) -> Result<Url> {
		Url::parse(self).map_err(|err| {
			debug!("rejecting {self:?}: {err}");
			Error::InvalidUrl(err)
		})
	}
}
impl FileUrlSource for &String {
	fn into_url(self) -> Result<Url> {
		self.as_str().into_url()
	}
}
impl FileUrlSource for String {
	fn into_url(self) -> Result<Url> {
		self.as_str().into_url()
	}
}

/// Parse `source` and make sure it's a `file:` URL.
pub(crate) fn parse_file_url(source: impl FileUrlSource) -> Result<Url> {
	let url = source.into_url()?;
	if url.scheme() != "file" {
		debug!("rejecting {url}: not a file URL");
		return Err(Error::InvalidUrlScheme { scheme: url.scheme().into() });
	}
	Ok(url)
}

/// Percent-decode a URL path.
///
/// A `%` that isn't followed by two hex digits is kept as a literal `%`.
pub(crate) fn decode_path(path: &str) -> Result<String> {
	percent_decode_str(path).decode_utf8().map(Cow::into_owned).map_err(|err| {
		debug!("rejecting URL path {path:?}: {err}");
		Error::InvalidPercentEncoding
	})
}

/// A `file:` URL with an empty authority and `path` as its path.
///
/// `%`, spaces and control characters in `path` are escaped first, and `\`
/// too if `escape_backslash` is set. The URL path setter takes care of the
/// remaining characters.
pub(crate) fn with_path(path: &str, escape_backslash: bool) -> Result<Url> {
	let set = if escape_backslash { POSIX_PATH } else { PATH };
	let mut url = Url::parse("file:///")?;
	url.set_path(&utf8_percent_encode(path, set).to_string());
	Ok(url)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decode() {
		assert_eq!(Ok("a b".into()), decode_path("a%20b"));
		assert_eq!(Ok("\u{e9}".into()), decode_path("%c3%A9"));
		assert_eq!(Ok("100%".into()), decode_path("100%"));
		assert_eq!(Ok("%2".into()), decode_path("%2"));
		assert_eq!(Ok("%zz".into()), decode_path("%zz"));
		assert_eq!(Err(Error::InvalidPercentEncoding), decode_path("%FF"));
	}

	#[test]
	fn encode() {
		let path = |path: &str, escape_backslash| {
			with_path(path, escape_backslash).map(String::from)
		};
		assert_eq!(Ok("file:///a%20b/100%25".into()), path("/a b/100%", true));
		assert_eq!(Ok("file:///a%5Cb".into()), path(r"/a\b", true));
		assert_eq!(Ok("file:///%09%0A%0D".into()), path("/\t\n\r", false));
	}
}
