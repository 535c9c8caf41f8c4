/// Is `b` a valid Windows drive letter.
pub const fn is_drive_letter(b: u8) -> bool {
	b.is_ascii_alphabetic()
}

pub const fn is_posix_separator(b: u8) -> bool {
	b == b'/'
}

pub const fn is_windows_separator(b: u8) -> bool {
	matches!(b, b'/' | b'\\')
}

/// Trim trailing separators, stopping before `floor`.
///
/// `floor` is the length of a root that must survive the trim.
pub fn trim_end_separators(path: &str, floor: usize, is_sep: fn(u8) -> bool) -> &str {
	let bytes = path.as_bytes();
	let mut end = bytes.len();
	while end > floor && is_sep(bytes[end - 1]) {
		end -= 1;
	}
	&path[..end]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn trim() {
		assert_eq!("/a", trim_end_separators("/a//", 0, is_posix_separator));
		assert_eq!("/", trim_end_separators("///", 1, is_posix_separator));
		assert_eq!(r"C:\", trim_end_separators(r"C:\\/", 3, is_windows_separator));
	}
}
