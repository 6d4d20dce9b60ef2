//! Code point sources.
//!
//! An [`Input`] yields raw `u32` code points rather than `char` so that
//! UTF-16 sources can deliver unpaired surrogates to the lexer, which
//! reports them. Sources are fused: once `getc` returns `None` it keeps
//! returning `None`.
//!
//! The source owns the live [`Position`]; the lexer advances its line,
//! paragraph and page counters as it consumes terminators.

use ecl_ir::Position;
use ecl_lexer_core::decode_utf16_at;

/// Pull source of code points.
pub trait Input {
    /// Next code point, or `None` at the end of the input.
    fn getc(&mut self) -> Option<u32>;

    fn position(&self) -> &Position;

    fn position_mut(&mut self) -> &mut Position;
}

impl<T: Input + ?Sized> Input for &mut T {
    #[inline]
    fn getc(&mut self) -> Option<u32> {
        (**self).getc()
    }

    #[inline]
    fn position(&self) -> &Position {
        (**self).position()
    }

    #[inline]
    fn position_mut(&mut self) -> &mut Position {
        (**self).position_mut()
    }
}

/// Input over UTF-8 text.
#[derive(Clone, Debug)]
pub struct StringInput {
    text: String,
    offset: usize,
    position: Position,
}

impl StringInput {
    pub fn new(text: impl Into<String>) -> Self {
        StringInput {
            text: text.into(),
            offset: 0,
            position: Position::default(),
        }
    }

    /// Input whose position reports `filename`.
    pub fn with_filename(text: impl Into<String>, filename: impl Into<String>) -> Self {
        StringInput {
            text: text.into(),
            offset: 0,
            position: Position::new(filename),
        }
    }
}

impl Input for StringInput {
    fn getc(&mut self) -> Option<u32> {
        let ch = self.text.get(self.offset..)?.chars().next()?;
        self.offset += ch.len_utf8();
        Some(u32::from(ch))
    }

    fn position(&self) -> &Position {
        &self.position
    }

    fn position_mut(&mut self) -> &mut Position {
        &mut self.position
    }
}

/// Input over UTF-16 code units.
///
/// Surrogate pairs are joined; unpaired surrogates are returned as is.
#[derive(Clone, Debug)]
pub struct Utf16Input {
    units: Vec<u16>,
    offset: usize,
    position: Position,
}

impl Utf16Input {
    pub fn new(units: impl Into<Vec<u16>>) -> Self {
        Utf16Input {
            units: units.into(),
            offset: 0,
            position: Position::default(),
        }
    }

    /// Encode `text` as UTF-16.
    pub fn from_text(text: &str) -> Self {
        Utf16Input::new(text.encode_utf16().collect::<Vec<_>>())
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.position.set_filename(filename);
        self
    }
}

impl Input for Utf16Input {
    fn getc(&mut self) -> Option<u32> {
        let (c, len) = decode_utf16_at(&self.units, self.offset)?;
        self.offset += len;
        Some(c)
    }

    fn position(&self) -> &Position {
        &self.position
    }

    fn position_mut(&mut self) -> &mut Position {
        &mut self.position
    }
}
