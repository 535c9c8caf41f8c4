/// A path split into its parts by `parse`.
///
/// Every field borrows from the parsed string. `base` is always `name`
/// followed by `ext`, and `root` is a prefix of `dir`.
///
/// ```
/// use twinpath::posix;
///
/// let parsed = posix::parse("/home/user/notes.txt");
/// assert_eq!(parsed.root, "/");
/// assert_eq!(parsed.dir, "/home/user");
/// assert_eq!(parsed.base, "notes.txt");
/// assert_eq!(parsed.name, "notes");
/// assert_eq!(parsed.ext, ".txt");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ParsedPath<'a> {
	pub root: &'a str,
	pub dir: &'a str,
	pub base: &'a str,
	pub ext: &'a str,
	pub name: &'a str,
}

/// The parts used by `format` to build a path.
///
/// Any field may be missing. A `base` takes precedence over `name` and
/// `ext`. Without a `dir` the `root` is used, and without either the
/// result is just the file name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PathObject<'a> {
	pub root: Option<&'a str>,
	pub dir: Option<&'a str>,
	pub base: Option<&'a str>,
	pub ext: Option<&'a str>,
	pub name: Option<&'a str>,
}
impl<'a> PathObject<'a> {
	pub const fn new() -> Self {
		Self { root: None, dir: None, base: None, ext: None, name: None }
	}

	pub const fn root(mut self, root: &'a str) -> Self {
		self.root = Some(root);
		self
	}

	pub const fn dir(mut self, dir: &'a str) -> Self {
		self.dir = Some(dir);
		self
	}

	pub const fn base(mut self, base: &'a str) -> Self {
		self.base = Some(base);
		self
	}

	pub const fn ext(mut self, ext: &'a str) -> Self {
		self.ext = Some(ext);
		self
	}

	pub const fn name(mut self, name: &'a str) -> Self {
		self.name = Some(name);
		self
	}
}
impl<'a> From<ParsedPath<'a>> for PathObject<'a> {
	fn from(parsed: ParsedPath<'a>) -> Self {
		Self {
			root: Some(parsed.root),
			dir: Some(parsed.dir),
			base: Some(parsed.base),
			ext: Some(parsed.ext),
			name: Some(parsed.name),
		}
	}
}
