use alloc::borrow::Cow;
use alloc::string::String;

use crate::util::{is_drive_letter, is_windows_separator as is_separator};

/// Windows path type.
///
/// This does not do any validation so parsing the kind will never fail,
/// even for broken or invalid paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WinPathKind {
	/// A path that's relative to the current directory, e.g. `file.txt`.
	CurrentDirectoryRelative,
	/// A DOS root relative path (e.g. `\file`).
	///
	/// Broken UNC paths such as `\\server` or `\\\share` are also parsed as
	/// root relative.
	RootRelative,
	/// A DOS drive relative path (e.g. `C:file`).
	DriveRelative(u8),
	/// A traditional drive path such as `C:\`, `R:\`, etc.
	Drive(u8),
	/// A path to a network directory such as `\\server\share\`.
	Unc,
	/// A device path such as `\\.\COM1`.
	Device,
	/// A path that is passed to the NT kernel without parsing, except to
	/// change the prefix. These start with `\\?\`.
	Verbatim,
}
impl WinPathKind {
	/// Is the path absolute.
	///
	/// Root relative paths count as absolute: they don't depend on a current
	/// directory, only on a device.
	pub const fn is_absolute(self) -> bool {
		!matches!(self, Self::CurrentDirectoryRelative | Self::DriveRelative(_))
	}

	/// Does the path start with a device (a drive letter or a server/share).
	pub const fn has_device(self) -> bool {
		!matches!(self, Self::CurrentDirectoryRelative | Self::RootRelative)
	}

	/// Is the path one of the weird ones from DOS.
	///
	/// These should probably be considered invalid if given from a configuration file
	/// but you may want to support them if given through command line arguments
	/// (e.g. because they come from the command prompt or a bat file).
	pub const fn is_legacy_relative(self) -> bool {
		matches!(self, Self::DriveRelative(_) | Self::RootRelative)
	}

	/// The drive letter, if any, as written.
	pub const fn drive(self) -> Option<u8> {
		match self {
			Self::Drive(letter) | Self::DriveRelative(letter) => Some(letter),
			_ => None,
		}
	}
}

/// States of the root parser. Each state knows how far it has read.
#[derive(Clone, Copy, Debug)]
enum State {
	Start,
	DriveLetterSeen,
	FirstSeparatorSeen,
	UncServer { start: usize },
	UncShare { server: (usize, usize), start: usize },
}

/// A Windows path split into its root and the rest.
///
/// Parsing reads at most up to the end of a UNC share, so it is cheap to
/// do repeatedly.
#[derive(Clone, Copy, Debug)]
pub struct ParsedRoot<'a> {
	path: &'a str,
	kind: WinPathKind,
	server: (usize, usize),
	share: (usize, usize),
	device_len: usize,
	root_len: usize,
}
impl<'a> ParsedRoot<'a> {
	/// Parse the root of `path`.
	pub fn parse(path: &'a str) -> Self {
		let bytes = path.as_bytes();
		let mut this = Self {
			path,
			kind: WinPathKind::CurrentDirectoryRelative,
			server: (0, 0),
			share: (0, 0),
			device_len: 0,
			root_len: 0,
		};
		let mut state = State::Start;
		loop {
			state = match state {
				State::Start => match bytes.first() {
					Some(&b) if is_separator(b) => State::FirstSeparatorSeen,
					Some(&b) if is_drive_letter(b) => State::DriveLetterSeen,
					_ => return this,
				},
				State::DriveLetterSeen => {
					if bytes.get(1) != Some(&b':') {
						return this;
					}
					let letter = bytes[0];
					this.device_len = 2;
					if bytes.get(2).copied().is_some_and(is_separator) {
						this.kind = WinPathKind::Drive(letter);
						this.root_len = 3;
					} else {
						this.kind = WinPathKind::DriveRelative(letter);
						this.root_len = 2;
					}
					return this;
				}
				State::FirstSeparatorSeen => {
					if bytes.get(1).copied().is_some_and(is_separator) {
						State::UncServer { start: 2 }
					} else {
						return this.root_relative();
					}
				}
				State::UncServer { start } => {
					let end = scan(bytes, start, |b| !is_separator(b));
					// The server must be followed by a separator.
					if end == start || end == bytes.len() {
						return this.root_relative();
					}
					let share = scan(bytes, end, is_separator);
					if share == bytes.len() {
						return this.root_relative();
					}
					State::UncShare { server: (start, end), start: share }
				}
				State::UncShare { server, start } => {
					let end = scan(bytes, start, |b| !is_separator(b));
					this.kind = match &path[server.0..server.1] {
						"." => WinPathKind::Device,
						"?" => WinPathKind::Verbatim,
						_ => WinPathKind::Unc,
					};
					this.server = server;
					this.share = (start, end);
					this.device_len = end;
					this.root_len = if end < bytes.len() { end + 1 } else { end };
					return this;
				}
			}
		}
	}

	fn root_relative(mut self) -> Self {
		self.kind = WinPathKind::RootRelative;
		self.root_len = 1;
		self
	}

	/// Get the type of path.
	pub const fn kind(&self) -> WinPathKind {
		self.kind
	}

	pub const fn is_absolute(&self) -> bool {
		self.kind.is_absolute()
	}

	/// The length of the root, including a separator that follows the device.
	pub const fn root_len(&self) -> usize {
		self.root_len
	}

	/// Is the whole path just a UNC style device with nothing after the share.
	pub const fn is_bare_share(&self) -> bool {
		matches!(self.kind, WinPathKind::Unc | WinPathKind::Device | WinPathKind::Verbatim)
			&& self.device_len == self.path.len()
	}

	/// The root as written.
	pub fn root(&self) -> &'a str {
		&self.path[..self.root_len]
	}

	/// Everything after the root.
	pub fn rest(&self) -> &'a str {
		&self.path[self.root_len..]
	}

	/// The device in canonical form: `C:` for drives (case as written) and
	/// `\\server\share` for UNC style paths. Empty if there's no device.
	pub fn device(&self) -> Cow<'a, str> {
		let device = &self.path[..self.device_len];
		match self.kind {
			WinPathKind::Unc | WinPathKind::Device | WinPathKind::Verbatim => {
				let server = &self.path[self.server.0..self.server.1];
				let share = &self.path[self.share.0..self.share.1];
				// Already canonical if written as `\\server\share`.
				if device.len() == server.len() + share.len() + 3 && !device.contains('/') {
					Cow::Borrowed(device)
				} else {
					let mut canonical = String::with_capacity(server.len() + share.len() + 3);
					canonical.push_str(r"\\");
					canonical.push_str(server);
					canonical.push('\\');
					canonical.push_str(share);
					Cow::Owned(canonical)
				}
			}
			_ => Cow::Borrowed(device),
		}
	}
}

/// Advance from `start` while `f` holds.
fn scan(bytes: &[u8], start: usize, f: impl Fn(u8) -> bool) -> usize {
	bytes[start..].iter().position(|&b| !f(b)).map_or(bytes.len(), |n| start + n)
}
