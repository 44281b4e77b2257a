//! Minimal element-path walker over `quick-xml` events.
//!
//! Descriptors and POMs are only ever read by element path, so the walker
//! reports each element open/close and text node together with the local
//! names of all enclosing elements (namespace prefixes dropped).

use quick_xml::Reader;
use quick_xml::events::Event;
use std::borrow::Cow;

/// A node visited while walking a document.
#[derive(Debug)]
pub(crate) enum Node<'a> {
	/// An element was opened. `line` is 1-based.
	Open { path: &'a [String], line: usize },
	/// Text (entities unescaped) or CDATA directly inside the innermost element.
	Text { path: &'a [String], text: &'a str },
	/// The innermost element of `path` is about to be closed.
	Close { path: &'a [String] },
}

/// Walk `content`, calling `visit` for every node under the root element.
///
/// Returns `Ok(false)` without visiting anything when the root element's
/// local name is not `root`, or when the document has no root element.
pub(crate) fn walk_document(
	content: &str,
	root: &str,
	mut visit: impl FnMut(Node<'_>),
) -> Result<bool, quick_xml::Error> {
	let mut reader = Reader::from_str(content);
	reader.trim_text(true);

	let mut path: Vec<String> = Vec::new();
	let mut saw_root = false;

	loop {
		match reader.read_event()? {
			Event::Start(e) => {
				let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
				if path.is_empty() {
					if name != root {
						return Ok(false);
					}
					saw_root = true;
				}
				path.push(name);
				let line = line_at(content, tag_start(content, reader.buffer_position()));
				visit(Node::Open { path: &path, line });
			}
			Event::Empty(e) => {
				let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
				if path.is_empty() {
					if name != root {
						return Ok(false);
					}
					saw_root = true;
				}
				path.push(name);
				let line = line_at(content, tag_start(content, reader.buffer_position()));
				visit(Node::Open { path: &path, line });
				visit(Node::Close { path: &path });
				path.pop();
			}
			Event::Text(e) => {
				let text = e.unescape()?;
				visit(Node::Text { path: &path, text: &text });
			}
			Event::CData(e) => {
				let raw = e.into_inner();
				let text: Cow<'_, str> = String::from_utf8_lossy(&raw);
				visit(Node::Text { path: &path, text: &text });
			}
			Event::End(_) => {
				visit(Node::Close { path: &path });
				path.pop();
			}
			Event::Eof => break,
			_ => {}
		}
	}

	Ok(saw_root)
}

/// Check whether `path` is exactly the element path `expected`.
pub(crate) fn is_at(path: &[String], expected: &[&str]) -> bool {
	path.len() == expected.len() && path.iter().zip(expected).all(|(a, b)| a == b)
}

/// Offset of the `<` opening the tag that ends just before `end`.
///
/// A literal `<` cannot occur inside a tag, so the nearest one is the start.
fn tag_start(content: &str, end: usize) -> usize {
	let end = end.min(content.len());
	content.as_bytes()[..end]
		.iter()
		.rposition(|b| *b == b'<')
		.unwrap_or(0)
}

/// 1-based line number of a byte offset.
fn line_at(content: &str, offset: usize) -> usize {
	let end = offset.min(content.len());
	content.as_bytes()[..end].iter().filter(|b| **b == b'\n').count() + 1
}
