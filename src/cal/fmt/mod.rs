//! Turning dates and times into text.

#[cfg(feature="format")] pub(crate) mod custom;
pub(crate) mod iso;

use std::fmt;


/// The **ISO** trait is implemented by every value that has a canonical
/// ISO 8601 text form.
pub trait ISO: Sized {

    /// Returns a value that displays as the canonical ISO 8601 form.
    fn iso(&self) -> ISOString<'_, Self> {
        ISOString(self)
    }

    /// Writes the canonical form to the formatter.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result;
}


/// A wrapper that formats its value as ISO 8601 text.
#[derive(Debug)]
pub struct ISOString<'a, T: 'a>(&'a T);

impl<'a, T> fmt::Display for ISOString<'a, T>
where T: ISO {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        ISO::fmt(self.0, f)
    }
}
