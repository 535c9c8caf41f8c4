//! Property-based tests for the laws both grammars share.

use proptest::prelude::*;
use twinpath::posix::{self, Posix};
use twinpath::windows::{self, Windows};
use twinpath::{PathGrammar, PathObject};

fn segment_strategy() -> impl Strategy<Value = String> {
	prop_oneof![
		1 => Just(".".to_owned()),
		1 => Just("..".to_owned()),
		6 => "[a-c]{1,3}(\\.[a-c]{0,2})?",
	]
}

/// Segments joined by `separators`, behind one of `roots`.
fn path_strategy(
	roots: Vec<&'static str>,
	separators: Vec<&'static str>,
	min_segments: usize,
) -> impl Strategy<Value = String> {
	(
		prop::sample::select(roots),
		prop::collection::vec(
			(segment_strategy(), prop::sample::select(separators)),
			min_segments..6,
		),
	)
		.prop_map(|(root, parts)| {
			let mut path = String::from(root);
			for (i, (segment, separator)) in parts.iter().enumerate() {
				if i > 0 {
					path.push_str(separator);
				}
				path.push_str(segment);
			}
			path
		})
}

fn posix_path_strategy() -> impl Strategy<Value = String> {
	path_strategy(vec!["", "/", "//"], vec!["/", "//"], 0)
}

fn posix_absolute_strategy() -> impl Strategy<Value = String> {
	path_strategy(vec!["/"], vec!["/"], 0)
}

fn windows_path_strategy() -> impl Strategy<Value = String> {
	path_strategy(
		vec!["", "C:", r"C:\", "c:/", r"\", r"\\server\share\", "//srv/sh/", r"\\.\pipe\"],
		vec![r"\", "/", r"\\"],
		0,
	)
}

fn windows_absolute_strategy() -> impl Strategy<Value = String> {
	path_strategy(vec![r"C:\"], vec![r"\"], 0)
}

/// Path segments drawn from `alphabet`.
fn url_segments_strategy(alphabet: &'static str) -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec(alphabet, 0..5)
}

fn normalize_is_idempotent<G: PathGrammar>(path: &str) -> Result<(), TestCaseError> {
	let once = G::normalize(path);
	prop_assert_eq!(&once, &G::normalize(&once), "path: {:?}", path);
	if G::is_absolute(path) {
		prop_assert!(G::is_absolute(&once), "{:?} became {:?}", path, once);
	}
	Ok(())
}

fn resolve_is_normalized<G: PathGrammar>(path: &str) -> Result<(), TestCaseError> {
	let resolved = G::resolve(&[path]);
	prop_assert!(!resolved.is_empty());
	prop_assert_eq!(&resolved, &G::resolve(&[resolved.as_str()]));
	Ok(())
}

fn parse_is_consistent<G: PathGrammar>(path: &str) -> Result<(), TestCaseError> {
	let parsed = G::parse(path);
	prop_assert_eq!(parsed.base, format!("{}{}", parsed.name, parsed.ext));
	prop_assert!(parsed.dir.starts_with(parsed.root), "{:?}", parsed);
	prop_assert_eq!(parsed.base, G::basename(path, None));
	prop_assert_eq!(parsed.ext, G::extname(path));

	let formatted = G::format(&PathObject::from(parsed));
	prop_assert_eq!(parsed, G::parse(&formatted));
	Ok(())
}

fn basename_survives_dirname<G: PathGrammar>(path: &str) -> Result<(), TestCaseError> {
	let base = G::basename(path, None);
	if !base.is_empty() {
		let rebuilt = format!("{}{}{}", G::dirname(path), G::SEP, base);
		prop_assert_eq!(base, G::basename(&rebuilt, None));
	}
	Ok(())
}

fn relative_leads_to_target<G: PathGrammar>(from: &str, to: &str) -> Result<(), TestCaseError> {
	let relative = G::relative(from, to).map_err(|err| TestCaseError::fail(err.to_string()))?;
	prop_assert!(!G::is_absolute(&relative));
	prop_assert_eq!(G::resolve(&[from, relative.as_str()]), G::resolve(&[to]));
	Ok(())
}

proptest! {
	#[test]
	fn posix_normalize_idempotent(path in posix_path_strategy()) {
		normalize_is_idempotent::<Posix>(&path)?;
	}

	#[test]
	fn windows_normalize_idempotent(path in windows_path_strategy()) {
		normalize_is_idempotent::<Windows>(&path)?;
	}

	#[test]
	fn posix_resolve_normalized(path in posix_path_strategy()) {
		resolve_is_normalized::<Posix>(&path)?;
	}

	#[test]
	fn windows_resolve_normalized(path in windows_path_strategy()) {
		resolve_is_normalized::<Windows>(&path)?;
	}

	#[test]
	fn posix_parse_consistent(path in posix_path_strategy()) {
		parse_is_consistent::<Posix>(&path)?;
	}

	#[test]
	fn windows_parse_consistent(path in windows_path_strategy()) {
		parse_is_consistent::<Windows>(&path)?;
	}

	#[test]
	fn posix_basename_survives_dirname(path in posix_path_strategy()) {
		basename_survives_dirname::<Posix>(&path)?;
	}

	#[test]
	fn windows_basename_survives_dirname(path in windows_path_strategy()) {
		basename_survives_dirname::<Windows>(&path)?;
	}

	// join(a, b) == normalize(a + "/" + b)
	#[test]
	fn posix_join_normalizes(a in posix_path_strategy(), b in posix_path_strategy()) {
		prop_assume!(!a.is_empty() && !b.is_empty());
		prop_assert_eq!(posix::join(&[&a, &b]), posix::normalize(&format!("{a}/{b}")));
	}

	// Same law for Windows, except that a first path made only of
	// separators never turns the result into a UNC path.
	#[test]
	fn windows_join_normalizes(a in windows_path_strategy(), b in windows_path_strategy()) {
		prop_assume!(!a.is_empty() && !b.is_empty());
		prop_assume!(a.bytes().any(|c| c != b'\\' && c != b'/'));
		prop_assert_eq!(windows::join(&[&a, &b]), windows::normalize(&format!(r"{a}\{b}")));
	}

	// Putting dirname and basename back together gives the same path.
	#[test]
	fn posix_dirname_basename(path in path_strategy(vec!["", "/"], vec!["/", "//"], 1)) {
		let base = posix::basename(&path, None);
		prop_assume!(!base.is_empty());
		prop_assert_eq!(posix::join(&[posix::dirname(&path), base]), posix::normalize(&path));
	}

	#[test]
	fn posix_format_parse(path in path_strategy(vec!["", "/"], vec!["/", "//"], 1)) {
		let formatted = posix::format(&PathObject::from(posix::parse(&path)));
		prop_assert_eq!(posix::normalize(&formatted), posix::normalize(&path));
	}

	#[test]
	fn posix_relative(from in posix_absolute_strategy(), to in posix_absolute_strategy()) {
		relative_leads_to_target::<Posix>(&from, &to)?;
	}

	#[test]
	fn windows_relative(from in windows_absolute_strategy(), to in windows_absolute_strategy()) {
		relative_leads_to_target::<Windows>(&from, &to)?;
	}

	#[test]
	fn posix_file_url_round_trip(
		segments in url_segments_strategy("[a-z0-9 %#?\u{e9}_\\\\-]{1,6}")
	) {
		let path = format!("/{}", segments.join("/"));
		let url = posix::to_file_url(&path).map_err(|err| TestCaseError::fail(err.to_string()))?;
		prop_assert_eq!(Ok(path), posix::from_file_url(&url));
	}

	#[test]
	fn windows_file_url_round_trip(
		drive in "[A-Z]",
		segments in url_segments_strategy("[a-z0-9 %#?\u{e9}_-]{1,6}")
	) {
		let path = format!(r"{drive}:\{}", segments.join(r"\"));
		let url = windows::to_file_url(&path).map_err(|err| TestCaseError::fail(err.to_string()))?;
		prop_assert_eq!(Ok(path), windows::from_file_url(&url));
	}

	#[test]
	fn windows_separators_are_canonical(path in windows_path_strategy()) {
		prop_assert!(!windows::normalize(&path).contains('/'));
	}
}
