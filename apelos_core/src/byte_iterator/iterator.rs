//! A peekable byte stream over any `Read` source.
//!
//! GeoJSON files are parsed straight from disk through this iterator, one byte at a
//! time, without loading them into a `String` first. With `debug` enabled the last
//! few bytes are kept in a ring buffer so parse errors can show where they happened.

use anyhow::{Error, Result, anyhow};
use std::io::Read;

const DEBUG_RING_BUFFER_SIZE: usize = 24;
const BUFFER_SIZE: usize = 8192;

/// Buffered, peekable iterator over the bytes of a reader.
///
/// `position` counts every byte that has been loaded into `peeked_byte`, so the
/// byte currently under the cursor sits at `position - 1`.
pub struct ByteIterator<'a> {
	buffer: Box<[u8; BUFFER_SIZE]>,
	buffer_len: usize,
	buffer_pos: usize,
	source: Box<dyn Read + 'a>,
	peeked_byte: Option<u8>,
	position: usize,
	is_debug_enabled: bool,
	debug_buffer: [u8; DEBUG_RING_BUFFER_SIZE],
}

impl<'a> ByteIterator<'a> {
	/// Wraps `reader`. When `debug` is set, errors include a snapshot of the recently read bytes.
	pub fn from_reader(reader: impl Read + 'a, debug: bool) -> Self {
		let mut iter = ByteIterator {
			buffer: Box::new([0; BUFFER_SIZE]),
			buffer_len: 0,
			buffer_pos: 0,
			source: Box::new(reader),
			peeked_byte: None,
			position: 0,
			is_debug_enabled: debug,
			debug_buffer: [0; DEBUG_RING_BUFFER_SIZE],
		};
		iter.fill_buffer();
		iter.advance();
		iter
	}

	#[inline]
	fn fill_buffer(&mut self) {
		// read errors end the stream; the parser then reports "unexpected end"
		self.buffer_len = self.source.read(&mut self.buffer[..]).unwrap_or(0);
		self.buffer_pos = 0;
	}

	#[inline]
	fn next_byte(&mut self) -> Option<u8> {
		if self.buffer_pos >= self.buffer_len {
			self.fill_buffer();
			if self.buffer_len == 0 {
				return None;
			}
		}
		let byte = self.buffer[self.buffer_pos];
		self.buffer_pos += 1;
		Some(byte)
	}

	/// Builds an error that names the current byte position.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		let position = self.position.saturating_sub(1);
		if !self.is_debug_enabled {
			return anyhow!("{msg} at position {position}");
		}

		let (start, length) = if self.position < DEBUG_RING_BUFFER_SIZE {
			(0, position)
		} else {
			(self.position % DEBUG_RING_BUFFER_SIZE, DEBUG_RING_BUFFER_SIZE - 1)
		};
		let snapshot: Vec<u8> = self
			.debug_buffer
			.iter()
			.cycle()
			.skip(start)
			.take(length)
			.copied()
			.collect();

		let mut context = String::from_utf8_lossy(&snapshot).into_owned();
		if self.peeked_byte.is_none() {
			context.push_str("<EOF>");
		}
		anyhow!("{msg} at position {position}: {context}")
	}

	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	/// The byte under the cursor, without consuming it.
	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.peeked_byte
	}

	/// Moves the cursor one byte forward.
	#[inline]
	pub fn advance(&mut self) {
		self.peeked_byte = self.next_byte();
		if self.is_debug_enabled
			&& let Some(byte) = self.peeked_byte
		{
			self.debug_buffer[self.position % DEBUG_RING_BUFFER_SIZE] = byte;
		}
		self.position += 1;
	}

	/// Returns the byte under the cursor and moves forward.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let byte = self.peeked_byte;
		self.advance();
		byte
	}

	/// Like [`consume`](Self::consume), but running out of input is an error.
	#[inline]
	pub fn expect_next_byte(&mut self) -> Result<u8> {
		match self.peeked_byte {
			Some(byte) => {
				self.advance();
				Ok(byte)
			}
			None => Err(self.format_error("unexpected end")),
		}
	}

	/// Like [`peek`](Self::peek), but running out of input is an error.
	#[inline]
	pub fn expect_peeked_byte(&self) -> Result<u8> {
		self.peeked_byte.ok_or_else(|| self.format_error("unexpected end"))
	}

	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peeked_byte {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}

	/// True once only whitespace is left.
	pub fn is_exhausted(&mut self) -> bool {
		self.skip_whitespace();
		self.peeked_byte.is_none()
	}

	/// Steps over a leading UTF-8 byte order mark (`EF BB BF`).
	///
	/// Only valid at the start of the stream. A lone `EF` that does not begin a
	/// byte order mark is an error, since no JSON document can start with it.
	pub fn skip_bom(&mut self) -> Result<()> {
		if self.position != 1 || self.peeked_byte != Some(0xEF) {
			return Ok(());
		}
		for expected in [0xEF, 0xBB, 0xBF] {
			if self.peeked_byte != Some(expected) {
				return Err(self.format_error("invalid byte order mark"));
			}
			self.advance();
		}
		Ok(())
	}
}
