use crate::access::ByteView;
use crate::error::{Error, Result};
use crate::view::{View, ViewMut};

/// Owning, growable byte buffer that views refer to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Data {
    bytes: Vec<u8>,
}

impl Data {
    /// Zero-filled buffer of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Parses hex digit pairs; ASCII whitespace between digits is ignored.
    pub fn from_hex(text: &str) -> Result<Self> {
        let digits: Vec<u8> = text
            .bytes()
            .filter(|byte| !byte.is_ascii_whitespace())
            .collect();

        if digits.len() % 2 != 0 {
            return Err(Error::InvalidHex(format!(
                "odd number of digits ({})",
                digits.len()
            )));
        }

        let bytes = digits
            .chunks_exact(2)
            .map(|pair| -> Result<u8> { Ok((hex_value(pair[0])? << 4) | hex_value(pair[1])?) })
            .collect::<Result<Vec<u8>>>()?;

        Ok(Self { bytes })
    }

    pub fn resize(&mut self, size: usize) -> &mut Self {
        self.bytes.resize(size, 0);
        self
    }

    pub fn view(&self) -> View<'_> {
        View::new(&self.bytes)
    }

    pub fn view_mut(&mut self) -> ViewMut<'_> {
        ViewMut::new(&mut self.bytes)
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

fn hex_value(digit: u8) -> Result<u8> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        other => Err(Error::InvalidHex(format!(
            "unexpected character '{}'",
            other as char
        ))),
    }
}

impl ByteView for Data {
    fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn is_read_only(&self) -> bool {
        false
    }
}

impl From<Vec<u8>> for Data {
    fn from(bytes: Vec<u8>) -> Self {
        Data::from_vec(bytes)
    }
}

impl From<&[u8]> for Data {
    fn from(bytes: &[u8]) -> Self {
        Data::from_vec(bytes.to_vec())
    }
}

impl From<&str> for Data {
    fn from(text: &str) -> Self {
        Data::from_vec(text.as_bytes().to_vec())
    }
}

impl<'a> From<&'a Data> for View<'a> {
    fn from(data: &'a Data) -> Self {
        data.view()
    }
}

impl<'a> From<&'a mut Data> for ViewMut<'a> {
    fn from(data: &'a mut Data) -> Self {
        data.view_mut()
    }
}

impl PartialEq<View<'_>> for Data {
    fn eq(&self, other: &View<'_>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<Data> for View<'_> {
    fn eq(&self, other: &Data) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
