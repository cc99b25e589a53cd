//! JSON output with forward slashes escaped as `\/`.
//!
//! `serde_json` never escapes `/`, while some encoders do. Both spellings
//! decode to the same string, so documents written here read back with plain
//! [`serde_json::from_str`].

use std::io;

use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};
use serde_json::Serializer;

/// [`Formatter`] adapter, that writes every `/` inside of strings (and keys) as `\/`.
#[derive(Debug, Clone)]
pub struct EscapeSlashes<F = CompactFormatter> {
    inner: F,
}

impl EscapeSlashes<CompactFormatter> {
    /// Compact output, as written by [`serde_json::to_string`].
    pub fn new() -> Self {
        Self::wrap(CompactFormatter)
    }
}

impl Default for EscapeSlashes<CompactFormatter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> EscapeSlashes<PrettyFormatter<'a>> {
    /// Pretty printed output with two-space indentation.
    pub fn pretty() -> Self {
        Self::wrap(PrettyFormatter::new())
    }
}

impl<F: Formatter> EscapeSlashes<F> {
    /// Escape slashes on top of any other formatter.
    pub fn wrap(inner: F) -> Self {
        Self { inner }
    }
}

// Layout hooks are forwarded so the wrapped formatter keeps its whitespace.
impl<F: Formatter> Formatter for EscapeSlashes<F> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut parts = fragment.split('/');

        if let Some(first) = parts.next() {
            self.inner.write_string_fragment(writer, first)?;
        }

        for part in parts {
            writer.write_all(b"\\/")?;
            self.inner.write_string_fragment(writer, part)?;
        }

        Ok(())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn end_object_key<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_key(writer)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_value(writer)
    }
}

/// Serialize value as compact JSON into `writer`, escaping slashes.
pub fn to_writer<W, T>(writer: W, value: &T) -> serde_json::Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::with_formatter(writer, EscapeSlashes::new());
    value.serialize(&mut serializer)
}

/// Serialize value as compact JSON string, escaping slashes.
pub fn to_string<T: ?Sized + Serialize>(value: &T) -> serde_json::Result<String> {
    serialize_with(value, EscapeSlashes::new())
}

/// Serialize value as pretty printed JSON string, escaping slashes.
pub fn to_string_pretty<T: ?Sized + Serialize>(value: &T) -> serde_json::Result<String> {
    serialize_with(value, EscapeSlashes::pretty())
}

fn serialize_with<T, F>(value: &T, formatter: F) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
    F: Formatter,
{
    let mut output = Vec::with_capacity(128);
    let mut serializer = Serializer::with_formatter(&mut output, formatter);
    value.serialize(&mut serializer)?;

    String::from_utf8(output)
        .map_err(|err| serde_json::Error::io(io::Error::new(io::ErrorKind::InvalidData, err)))
}
