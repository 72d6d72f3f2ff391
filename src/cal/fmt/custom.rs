//! Formatting and reading dates by layout strings.
//!
//! A layout is literal text with fields in braces, such as
//! `{:D} {:M} {04>:Y}`. Each field names a part of the date or time after
//! its colon, and can be given an alignment, a zero for zero-padding, and a
//! width before it.

use std::error::Error as ErrorTrait;
use std::fmt;
use std::str::CharIndices;

use log::trace;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::calendar::Month;
use crate::cal::datetime::{Date, DateTime};

use pad::{PadStr, Alignment};


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Field<'a> {
    Literal(&'a str),

    Year(NumArguments),
    YearOfCentury(NumArguments),

    MonthName(bool, TextArguments),
    MonthNumber(NumArguments),

    Day(NumArguments),
    WeekdayName(bool, TextArguments),

    Hour(NumArguments),
    Hour12(NumArguments),
    Minute(NumArguments),
    Second(NumArguments),
    Meridiem(TextArguments),
}

impl<'a> Field<'a> {
    fn format<T>(&self, when: &T, w: &mut String, locale: &locale::Time) where T: DatePiece+TimePiece {
        match *self {
            Field::Literal(s)             => w.push_str(s),
            Field::Year(a)                => a.format(w, when.year()),
            Field::YearOfCentury(a)       => a.format(w, when.year_of_century()),
            Field::MonthName(true, a)     => a.format(w, &locale.long_month_name(when.month().months_from_january())),
            Field::MonthName(false, a)    => a.format(w, &locale.short_month_name(when.month().months_from_january())),
            Field::MonthNumber(a)         => a.format(w, when.month() as i64),
            Field::Day(a)                 => a.format(w, when.day() as i64),
            Field::WeekdayName(true, a)   => a.format(w, &locale.long_day_name(when.weekday() as usize)),
            Field::WeekdayName(false, a)  => a.format(w, &locale.short_day_name(when.weekday() as usize)),
            Field::Hour(a)                => a.format(w, when.hour() as i64),
            Field::Hour12(a)              => a.format(w, hour_12(when.hour()) as i64),
            Field::Minute(a)              => a.format(w, when.minute() as i64),
            Field::Second(a)              => a.format(w, when.second() as i64),
            Field::Meridiem(a)            => a.format(w, if when.hour() < 12 { "AM" } else { "PM" }),
        }
    }
}

/// Turns an hour from 0 to 23 into one from 1 to 12.
fn hour_12(hour: i8) -> i8 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}


#[derive(PartialEq, Eq, Clone, Debug)]
pub struct DateFormat<'a> {
    pub fields: Vec<Field<'a>>,
}


#[derive(PartialEq, Eq, Clone, Debug, Copy)]
pub enum FormatError {
    InvalidChar { c: char, colon: bool, pos: Pos },
    OpenCurlyBrace { open_pos: Pos },
    CloseCurlyBrace { close_pos: Pos },
    MissingField { open_pos: Pos, close_pos: Pos },
    DoubleAlignment { open_pos: Pos, current_alignment: Alignment },
    DoubleWidth { open_pos: Pos, current_width: Width },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FormatError::InvalidChar { c, colon: true, pos }   => write!(f, "invalid field name {:?} at position {}", c, pos),
            FormatError::InvalidChar { c, colon: false, pos }  => write!(f, "invalid character {:?} in field at position {}", c, pos),
            FormatError::OpenCurlyBrace { open_pos }           => write!(f, "unclosed brace at position {}", open_pos),
            FormatError::CloseCurlyBrace { close_pos }         => write!(f, "unopened brace at position {}", close_pos),
            FormatError::MissingField { open_pos, .. }         => write!(f, "field at position {} has no name", open_pos),
            FormatError::DoubleAlignment { open_pos, .. }      => write!(f, "field at position {} has two alignments", open_pos),
            FormatError::DoubleWidth { open_pos, .. }          => write!(f, "field at position {} has two widths", open_pos),
        }
    }
}

impl ErrorTrait for FormatError {
}

pub type Width = usize;
pub type Pos = usize;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Arguments {
    pub alignment: Option<Alignment>,
    pub width:     Option<Width>,
    pub pad_char:  Option<char>,
}

impl Arguments {
    pub fn empty() -> Self {
        Self {
            alignment: None,
            width:     None,
            pad_char:  None,
        }
    }

    pub fn set_width(&mut self, width: Width) -> Self {
        self.width = Some(width);
        *self
    }

    pub fn set_alignment(&mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        *self
    }

    pub fn set_pad_char(&mut self, pad_char: char) -> Self {
        self.pad_char = Some(pad_char);
        *self
    }

    pub fn update_width(&mut self, width: Width, open_pos: Pos) -> Result<(), FormatError> {
        match self.width {
            None => { self.width = Some(width); Ok(())},
            Some(existing) => Err(FormatError::DoubleWidth { open_pos, current_width: existing }),
        }
    }

    pub fn update_alignment(&mut self, alignment: Alignment, open_pos: Pos) -> Result<(), FormatError> {
        match self.alignment {
            None => { self.alignment = Some(alignment); Ok(())},
            Some(existing) => Err(FormatError::DoubleAlignment { open_pos, current_alignment: existing }),
        }
    }

    fn format(self, w: &mut String, string: &str) {
        let width     = self.width.unwrap_or(0);
        let pad_char  = self.pad_char.unwrap_or(' ');
        let alignment = self.alignment.unwrap_or(Alignment::Left);
        w.push_str(&string.pad(width, pad_char, alignment, false));
    }

    /// Whether a number in this field takes up exactly its width in
    /// digits, so it can be read back without knowing where it ends.
    fn fixed_width(&self) -> Option<Width> {
        match (self.pad_char, self.width) {
            (Some('0'), Some(width)) if width > 0 => Some(width),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.alignment.is_none() && self.width.is_none() && self.pad_char.is_none()
    }
}


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct TextArguments(Arguments);

impl TextArguments {
    #[cfg(test)]
    fn empty() -> TextArguments {
        TextArguments(Arguments::empty())
    }

    fn format(self, w: &mut String, string: &str) {
        self.0.format(w, string)
    }
}


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct NumArguments(Arguments);

impl NumArguments {
    #[cfg(test)]
    fn empty() -> NumArguments {
        NumArguments(Arguments::empty())
    }

    fn format(self, w: &mut String, number: i64) {
        // Zero-padding goes between the sign and the digits.
        if number < 0 && self.0.pad_char == Some('0') {
            let mut args = self.0;
            args.width = args.width.map(|width| width.saturating_sub(1));
            w.push('-');
            args.format(w, &number.unsigned_abs().to_string())
        }
        else {
            self.0.format(w, &number.to_string())
        }
    }
}

impl<'a> DateFormat<'a> {
    pub fn format<T>(&self, when: &T, locale: &locale::Time) -> String where T: DatePiece+TimePiece {
        let mut buf = String::new();

        for field in &self.fields {
            field.format(when, &mut buf, locale);
        }

        buf
    }

    pub fn parse(input: &'a str) -> Result<DateFormat<'a>, FormatError> {
        let mut parser = FormatParser::new(input);
        parser.parse_format_string()?;

        Ok(DateFormat { fields: parser.fields })
    }

    /// Reads a date-time from text laid out in this format.
    ///
    /// Literal text has to match exactly, numbers are runs of digits, and
    /// month and weekday names are matched regardless of case. A weekday
    /// is checked for being a name, but doesn’t have to agree with the
    /// date. Parts the format leaves out default to year 0, January, the
    /// 1st, and midnight.
    pub fn read(&self, input: &str, locale: &locale::Time) -> Result<DateTime, LayoutError> {
        let mut reader = Reader { input, pos: 0 };
        let mut fields = ReadFields::default();

        for field in &self.fields {
            match *field {
                Field::Literal(s)           => reader.literal(s)?,
                Field::Year(a)              => fields.year = Some(reader.number(a.0, 9, true)?),
                Field::YearOfCentury(a)     => {
                    let year = reader.number(a.0, 2, false)?;
                    fields.year = Some(if year >= 69 { year + 1900 } else { year + 2000 });
                },
                Field::MonthName(long, _)   => {
                    let names = (0 .. 12).map(|i| if long { locale.long_month_name(i) } else { locale.short_month_name(i) });
                    fields.month = Some(reader.name(names)? as i64 + 1);
                },
                Field::MonthNumber(a)       => fields.month = Some(reader.number(a.0, 2, false)?),
                Field::Day(a)               => fields.day = Some(reader.number(a.0, 2, false)?),
                Field::WeekdayName(long, _) => {
                    let names = (0 .. 7).map(|i| if long { locale.long_day_name(i) } else { locale.short_day_name(i) });
                    let _ = reader.name(names)?;
                },
                Field::Hour(a)              => fields.hour = Some(reader.number(a.0, 2, false)?),
                Field::Hour12(a)            => {
                    let hour = reader.number(a.0, 2, false)?;
                    if !(1 ..= 12).contains(&hour) {
                        return Err(LayoutError::OutOfRange);
                    }
                    fields.hour = Some(hour);
                },
                Field::Minute(a)            => fields.minute = Some(reader.number(a.0, 2, false)?),
                Field::Second(a)            => fields.second = Some(reader.number(a.0, 2, false)?),
                Field::Meridiem(_)          => fields.pm = Some(reader.meridiem()?),
            }
        }

        if reader.pos < input.len() {
            return Err(LayoutError::TrailingText { pos: reader.pos });
        }

        trace!("Read {:?} as {:?}", input, fields);
        fields.to_date_time()
    }
}


/// The parts of a date-time found while reading, before they are checked.
#[derive(Debug, Default)]
struct ReadFields {
    year:   Option<i64>,
    month:  Option<i64>,
    day:    Option<i64>,
    hour:   Option<i64>,
    minute: Option<i64>,
    second: Option<i64>,
    pm:     Option<bool>,
}

impl ReadFields {
    fn to_date_time(&self) -> Result<DateTime, LayoutError> {
        let mut hour = self.hour.unwrap_or(0);
        match self.pm {
            Some(true) if hour < 12  => hour += 12,
            Some(false) if hour == 12 => hour = 0,
            _ => {},
        }

        let month = Month::from_one(narrow(self.month.unwrap_or(1))?).map_err(|_| LayoutError::OutOfRange)?;
        DateTime::ymd_hms(
            self.year.unwrap_or(0),
            month,
            narrow(self.day.unwrap_or(1))?,
            narrow(hour)?,
            narrow(self.minute.unwrap_or(0))?,
            narrow(self.second.unwrap_or(0))?,
        ).map_err(|_| LayoutError::OutOfRange)
    }
}


/// Narrows a field read as `i64` without letting it wrap into range.
fn narrow(field: i64) -> Result<i8, LayoutError> {
    i8::try_from(field).map_err(|_| LayoutError::OutOfRange)
}


/// A cursor through the text being read.
struct Reader<'i> {
    input: &'i str,
    pos:   usize,
}

impl<'i> Reader<'i> {
    fn rest(&self) -> &'i str {
        &self.input[self.pos ..]
    }

    fn literal(&mut self, expected: &str) -> Result<(), LayoutError> {
        if self.rest().starts_with(expected) {
            self.pos += expected.len();
            Ok(())
        }
        else {
            Err(LayoutError::Mismatch { pos: self.pos })
        }
    }

    fn number(&mut self, args: Arguments, max_digits: usize, signed: bool) -> Result<i64, LayoutError> {
        let negative = signed && self.rest().starts_with('-');
        if negative {
            self.pos += 1;
        }

        let count = match args.fixed_width() {
            Some(width) => {
                // The sign takes up one of the padded places.
                let width = if negative { width.saturating_sub(1).max(1) } else { width };
                let count = self.rest().bytes().take(width).take_while(u8::is_ascii_digit).count();
                if count < width {
                    return Err(LayoutError::ExpectedDigits { pos: self.pos + count });
                }
                count
            },
            None => {
                let spaces = self.rest().bytes().take_while(|&b| b == b' ').count();
                self.pos += spaces;
                self.rest().bytes().take(max_digits).take_while(u8::is_ascii_digit).count()
            },
        };

        if count == 0 {
            return Err(LayoutError::ExpectedDigits { pos: self.pos });
        }

        let digits = &self.rest()[.. count];

        // A padded field may be wider than the number it holds, but only
        // with leading zeros.
        let significant = digits.trim_start_matches('0');
        if significant.len() > max_digits {
            return Err(LayoutError::OutOfRange);
        }

        self.pos += count;

        let number = significant.bytes().fold(0_i64, |n, b| n * 10 + (b - b'0') as i64);
        Ok(if negative { -number } else { number })
    }

    /// Matches one of the given names, returning its index.
    fn name<I: Iterator<Item=String>>(&mut self, names: I) -> Result<usize, LayoutError> {
        let rest = self.rest();
        for (index, name) in names.enumerate() {
            if let Some(candidate) = rest.get(.. name.len()) {
                if !name.is_empty() && candidate.eq_ignore_ascii_case(&name) {
                    self.pos += name.len();
                    return Ok(index);
                }
            }
        }

        Err(LayoutError::UnknownName { pos: self.pos })
    }

    fn meridiem(&mut self) -> Result<bool, LayoutError> {
        match self.rest().get(.. 2) {
            Some(m) if m.eq_ignore_ascii_case("AM") => { self.pos += 2; Ok(false) },
            Some(m) if m.eq_ignore_ascii_case("PM") => { self.pos += 2; Ok(true) },
            _ => Err(LayoutError::ExpectedMeridiem { pos: self.pos }),
        }
    }
}


/// An error reading a date-time by a layout.
#[derive(PartialEq, Eq, Clone, Debug, Copy)]
pub enum LayoutError {

    /// The layout string itself is invalid.
    Layout(FormatError),

    /// Literal text in the layout isn’t in the input.
    Mismatch { pos: Pos },

    /// A number was expected but there were no digits, or too few.
    ExpectedDigits { pos: Pos },

    /// No month or weekday name matched.
    UnknownName { pos: Pos },

    /// An AM or PM was expected.
    ExpectedMeridiem { pos: Pos },

    /// The layout finished before the input did.
    TrailingText { pos: Pos },

    /// The fields read make no valid date-time.
    OutOfRange,
}

impl From<FormatError> for LayoutError {
    fn from(error: FormatError) -> Self {
        LayoutError::Layout(error)
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LayoutError::Layout(ref e)              => write!(f, "invalid layout: {}", e),
            LayoutError::Mismatch { pos }           => write!(f, "text does not match layout at position {}", pos),
            LayoutError::ExpectedDigits { pos }     => write!(f, "expected digits at position {}", pos),
            LayoutError::UnknownName { pos }        => write!(f, "unknown month or weekday name at position {}", pos),
            LayoutError::ExpectedMeridiem { pos }   => write!(f, "expected AM or PM at position {}", pos),
            LayoutError::TrailingText { pos }       => write!(f, "extra text at position {}", pos),
            LayoutError::OutOfRange                 => write!(f, "datetime field out of range"),
        }
    }
}

impl ErrorTrait for LayoutError {
    fn source(&self) -> Option<&(dyn ErrorTrait + 'static)> {
        match *self {
            LayoutError::Layout(ref e)  => Some(e),
            _                           => None,
        }
    }
}


impl DateTime {

    /// Formats this date-time by the given layout, with English month and
    /// weekday names.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use civil::DateTime;
    ///
    /// let then = DateTime::from_fields(2048, 1, 30, 12, 34, 56);
    /// let text = then.format("{:D} {:M} {04>:Y} {02>:h}:{02>:m}:{02>:s}").unwrap();
    /// assert_eq!(text, "30 Jan 2048 12:34:56");
    /// ```
    pub fn format(&self, layout: &str) -> Result<String, FormatError> {
        Ok(DateFormat::parse(layout)?.format(self, &locale::Time::english()))
    }

    /// Reads a date-time from text laid out by the given layout.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use civil::DateTime;
    ///
    /// let then = DateTime::parse_layout("{:M} {:D}, {:Y} {02>:H}:{02>:m}:{02>:s}{:p}", "Sep 30, 2099 06:48:30PM").unwrap();
    /// assert_eq!(then, DateTime::from_fields(2099, 9, 30, 18, 48, 30));
    /// ```
    pub fn parse_layout(layout: &str, text: &str) -> Result<Self, LayoutError> {
        DateFormat::parse(layout)?.read(text, &locale::Time::english())
    }
}

impl Date {

    /// Formats this date by the given layout. Time fields read as midnight.
    pub fn format(&self, layout: &str) -> Result<String, FormatError> {
        self.midnight().format(layout)
    }

    /// Reads a date from text laid out by the given layout. Any time fields
    /// are read and checked, then dropped.
    pub fn parse_layout(layout: &str, text: &str) -> Result<Self, LayoutError> {
        DateTime::parse_layout(layout, text).map(|dt| dt.date())
    }
}


struct FormatParser<'a> {
    iter:   CharIndices<'a>,
    fields: Vec<Field<'a>>,
    input:  &'a str,
    anchor: Option<Pos>,
    peekee: Option<Option<(Pos, char)>>,
}

impl<'a> FormatParser<'a> {
    fn new(input: &'a str) -> FormatParser<'a> {
        FormatParser {
            iter:   input.char_indices(),
            fields: Vec::new(),
            input,
            anchor: None,
            peekee: None,
        }
    }

    fn next(&mut self) -> Option<(Pos, char)> {
        match self.peekee.take() {
            Some(p) => p,
            None    => self.iter.next(),
        }
    }

    fn peek(&mut self) -> Option<(Pos, char)> {
        match self.peekee {
            Some(thing) => thing,
            None => {
                let thing = self.iter.next();
                self.peekee = Some(thing);
                thing
            }
        }
    }

    fn collect_up_to_anchor(&mut self, position: Option<Pos>) {
        if let Some(pos) = self.anchor.take() {
            let text = match position {
                Some(new_pos) => &self.input[pos..new_pos],
                None          => &self.input[pos..],
            };
            self.fields.push(Field::Literal(text));
        }
    }

    fn parse_format_string(&mut self) -> Result<(), FormatError> {
        loop {
            match self.next() {
                Some((new_pos, '{')) => {
                    self.collect_up_to_anchor(Some(new_pos));

                    let field = self.parse_a_thing(new_pos)?;
                    self.fields.push(field);
                },
                Some((new_pos, '}')) => {
                    if let Some((_, '}')) = self.next() {
                        self.collect_up_to_anchor(Some(new_pos));

                        let field = Field::Literal(&self.input[new_pos ..=new_pos]);
                        self.fields.push(field);
                    }
                    else {
                        return Err(FormatError::CloseCurlyBrace { close_pos: new_pos });
                    }
                },
                Some((pos, _)) => {
                    if self.anchor.is_none() {
                        self.anchor = Some(pos);
                    }
                }
                None => break,
            }
        }

        // Any literal characters after the last field.
        self.collect_up_to_anchor(None);
        Ok(())
    }

    // Literal fields are slices of the layout string, so escaped braces
    // become their own one-character Literal fields rather than being
    // joined onto the text around them.

    fn parse_number(&mut self, just_parsed_character: char) -> usize {
        let mut number = just_parsed_character.to_digit(10).unwrap_or(0) as usize;

        while let Some((_, n)) = self.peek() {
            match n.to_digit(10) {
                Some(digit) => {
                    number = number.saturating_mul(10).saturating_add(digit as usize);
                    let _ = self.next();
                },
                None => break,
            }
        }

        number
    }

    fn parse_a_thing(&mut self, open_pos: Pos) -> Result<Field<'a>, FormatError> {
        let mut args = Arguments::empty();
        let mut bit = None;
        let close_pos;
        let mut first = true;
        let mut long = false;

        loop {
            match self.next() {
                Some((pos, '{')) if first => return Ok(Field::Literal(&self.input[pos ..=pos])),
                Some((_, '<')) => { args.update_alignment(Alignment::Left, open_pos)?; continue },
                Some((_, '^')) => { args.update_alignment(Alignment::Middle, open_pos)?; continue },
                Some((_, '>')) => { args.update_alignment(Alignment::Right, open_pos)?; continue },
                Some((_, '0')) => { args.pad_char = Some('0'); continue },
                Some((_, n)) if n.is_ascii_digit() => { args.update_width(self.parse_number(n), open_pos)?; continue },
                Some((_, '_')) => { long = true; },
                Some((_, ':')) => {
                    let bitlet = match self.next() {
                        Some((_, 'Y')) => Field::Year(NumArguments(args)),
                        Some((_, 'y')) => Field::YearOfCentury(NumArguments(args)),
                        Some((_, 'M')) => Field::MonthName(long, TextArguments(args)),
                        Some((_, 'N')) => Field::MonthNumber(NumArguments(args)),
                        Some((_, 'D')) => Field::Day(NumArguments(args)),
                        Some((_, 'E')) => Field::WeekdayName(long, TextArguments(args)),
                        Some((_, 'h')) => Field::Hour(NumArguments(args)),
                        Some((_, 'H')) => Field::Hour12(NumArguments(args)),
                        Some((_, 'm')) => Field::Minute(NumArguments(args)),
                        Some((_, 's')) => Field::Second(NumArguments(args)),
                        Some((_, 'p')) => Field::Meridiem(TextArguments(args)),
                        Some((pos, c)) => return Err(FormatError::InvalidChar { c, colon: true, pos }),
                        None => return Err(FormatError::OpenCurlyBrace { open_pos }),
                    };

                    bit = Some(bitlet);
                },
                Some((pos, '}')) => { close_pos = pos; break; },
                Some((pos, c)) => return Err(FormatError::InvalidChar { c, colon: false, pos }),
                None => return Err(FormatError::OpenCurlyBrace { open_pos }),
            };

            first = false;
        }

        match bit {
            Some(b) => Ok(b),
            None    => Err(FormatError::MissingField { open_pos, close_pos }),
        }
    }
}


#[cfg(test)]
mod test {
    pub(crate) use super::{DateFormat, FormatError, LayoutError, Arguments, NumArguments, TextArguments};
    pub(crate) use super::Field::*;
    pub(crate) use pad::Alignment;
    pub(crate) use crate::cal::datetime::{Date, DateTime};

    mod parse {
        use super::*;

        macro_rules! test {
            ($name: ident: $input: expr => $result: expr) => {
                #[test]
                fn $name() {
                    assert_eq!(DateFormat::parse($input), $result)
                }
            };
        }

        test!(empty_string: ""                      => Ok(DateFormat { fields: vec![] }));
        test!(entirely_literal: "Date!"             => Ok(DateFormat { fields: vec![ Literal("Date!") ] }));
        test!(single_element: "{:Y}"                => Ok(DateFormat { fields: vec![ Year(NumArguments::empty()) ] }));
        test!(two_long_years: "{:Y}{:Y}"            => Ok(DateFormat { fields: vec![ Year(NumArguments::empty()), Year(NumArguments::empty()) ] }));
        test!(surrounded: "({:D})"                  => Ok(DateFormat { fields: vec![ Literal("("), Day(NumArguments::empty()), Literal(")") ] }));
        test!(a_bunch_of_elements: "{:Y}-{:M}-{:D}" => Ok(DateFormat { fields: vec![ Year(NumArguments::empty()), Literal("-"), MonthName(false, TextArguments::empty()), Literal("-"), Day(NumArguments::empty()) ] }));
        test!(twelve_hour: "{:H}{:p}"               => Ok(DateFormat { fields: vec![ Hour12(NumArguments::empty()), Meridiem(TextArguments::empty()) ] }));
        test!(month_number: "{:N}"                  => Ok(DateFormat { fields: vec![ MonthNumber(NumArguments::empty()) ] }));

        test!(missing_field: "{}"                              => Err(FormatError::MissingField { open_pos: 0, close_pos: 1 }));
        test!(invalid_char: "{a}"                              => Err(FormatError::InvalidChar { c: 'a', colon: false, pos: 1 }));
        test!(invalid_char_after_colon: "{:7}"                 => Err(FormatError::InvalidChar { c: '7', colon: true, pos: 2 }));
        test!(open_curly_brace: "{"                            => Err(FormatError::OpenCurlyBrace { open_pos: 0 }));
        test!(mystery_close_brace: "}"                         => Err(FormatError::CloseCurlyBrace { close_pos: 0 }));
        test!(another_mystery_close_brace: "This is a test: }" => Err(FormatError::CloseCurlyBrace { close_pos: 16 }));

        test!(escaping_open: "{{"  => Ok(DateFormat { fields: vec![ Literal("{") ] }));
        test!(escaping_close: "}}" => Ok(DateFormat { fields: vec![ Literal("}") ] }));

        test!(escaping_middle: "The character {{ is my favourite!" => Ok(DateFormat { fields: vec![ Literal("The character "), Literal("{"), Literal(" is my favourite!") ] }));
        test!(escaping_middle_2: "It's way better than }}."        => Ok(DateFormat { fields: vec![ Literal("It's way better than "), Literal("}"), Literal(".") ] }));

        mod alignment {
            use super::*;

            test!(left:   "{<:Y}" => Ok(DateFormat { fields: vec![ Year(NumArguments(Arguments::empty().set_alignment(Alignment::Left))) ]}));
            test!(right:  "{>:Y}" => Ok(DateFormat { fields: vec![ Year(NumArguments(Arguments::empty().set_alignment(Alignment::Right))) ]}));
            test!(middle: "{^:Y}" => Ok(DateFormat { fields: vec![ Year(NumArguments(Arguments::empty().set_alignment(Alignment::Middle))) ]}));
        }

        mod alignment_fails {
            use super::*;

            test!(double_left:  "{<<:Y}" => Err(FormatError::DoubleAlignment { open_pos: 0, current_alignment: Alignment::Left }));
            test!(double_right: "{>>:Y}" => Err(FormatError::DoubleAlignment { open_pos: 0, current_alignment: Alignment::Right }));
            test!(left_right: "{<>:Y}"   => Err(FormatError::DoubleAlignment { open_pos: 0, current_alignment: Alignment::Left }));
            test!(right_middle: "{>^:Y}" => Err(FormatError::DoubleAlignment { open_pos: 0, current_alignment: Alignment::Right }));
        }

        mod width {
            use super::*;

            test!(width_2: "{>2:D}"                 => Ok(DateFormat { fields: vec![ Day(NumArguments(Arguments::empty().set_width(2).set_alignment(Alignment::Right))) ] }));
            test!(width_10_other: "{10>:D}"         => Ok(DateFormat { fields: vec![ Day(NumArguments(Arguments::empty().set_width(10).set_alignment(Alignment::Right))) ] }));
            test!(zero_padded: "{02>:D}"            => Ok(DateFormat { fields: vec![ Day(NumArguments(Arguments::empty().set_pad_char('0').set_width(2).set_alignment(Alignment::Right))) ] }));
            test!(width_123456789: "{>123456789:D}" => Ok(DateFormat { fields: vec![ Day(NumArguments(Arguments::empty().set_width(123456789).set_alignment(Alignment::Right))) ] }));
        }
    }

    mod format {
        use super::*;

        #[test]
        fn zero_value() {
            let text = DateTime::default().format("{:D} {:M} {04>:Y} {02>:h}:{02>:m}:{02>:s}");
            assert_eq!(text, Ok("1 Jan 0001 00:00:00".to_string()));
        }

        #[test]
        fn long_names() {
            let text = Date::from_fields(2042, 7, 6).format("{:_E}, {:_M} {:D}");
            assert_eq!(text, Ok("Sunday, July 6".to_string()));
        }

        #[test]
        fn twelve_hour_clock() {
            let then = DateTime::from_fields(2099, 9, 30, 0, 5, 0);
            assert_eq!(then.format("{:H}:{02>:m}{:p}"), Ok("12:05AM".to_string()));
            assert_eq!((then + crate::duration::Duration::of_hours(13)).format("{:H}{:p}"), Ok("1PM".to_string()));
        }

        #[test]
        fn negative_year_keeps_sign_in_front() {
            assert_eq!(Date::from_fields(-5, 1, 1).format("{04>:Y}"), Ok("-005".to_string()));
        }

        #[test]
        fn bad_layout() {
            assert_eq!(Date::default().format("{:Q}"), Err(FormatError::InvalidChar { c: 'Q', colon: true, pos: 2 }));
        }
    }

    mod read {
        use super::*;

        #[test]
        fn day_first() {
            let then = DateTime::parse_layout("{02>:D} {:M} {04>:Y} {02>:h}:{02>:m}:{02>:s}", "11 Jan 1994 05:45:23");
            assert_eq!(then, Ok(DateTime::from_fields(1994, 1, 11, 5, 45, 23)));
        }

        #[test]
        fn wrong_order() {
            let then = DateTime::parse_layout("{02>:D} {:M} {04>:Y}", "Jan 11 1994");
            assert_eq!(then, Err(LayoutError::ExpectedDigits { pos: 0 }));
        }

        #[test]
        fn short_form() {
            let date = Date::parse_layout("{04>:Y}-{:M}-{02>:D}", "2092-dec-16");
            assert_eq!(date, Ok(Date::from_fields(2092, 12, 16)));
        }

        #[test]
        fn long_form() {
            let date = Date::parse_layout("{:M} {:D}, {:Y}", "Sep 30, 2099");
            assert_eq!(date, Ok(Date::from_fields(2099, 9, 30)));
        }

        #[test]
        fn twelve_midnight() {
            let then = DateTime::parse_layout("{:N}/{:D}/{:y} {:H}{:p}", "3/4/21 12am");
            assert_eq!(then, Ok(DateTime::from_fields(2021, 3, 4, 0, 0, 0)));
        }

        #[test]
        fn two_digit_year_pivot() {
            assert_eq!(Date::parse_layout("{:y}", "69"), Ok(Date::from_fields(1969, 1, 1)));
            assert_eq!(Date::parse_layout("{:y}", "68"), Ok(Date::from_fields(2068, 1, 1)));
        }

        #[test]
        fn weekday_name() {
            let date = Date::parse_layout("{:_E} {:D} {:_M} {:Y}", "Friday 8 April 2033");
            assert_eq!(date, Ok(Date::from_fields(2033, 4, 8)));
        }

        #[test]
        fn wide_padded_fields_keep_their_range() {
            assert_eq!(DateTime::parse_layout("{020>:Y}", "99999999999999999999"), Err(LayoutError::OutOfRange));
            assert_eq!(Date::parse_layout("{:Y}-{:N}-{03>:D}", "2095-09-257"), Err(LayoutError::OutOfRange));
            assert_eq!(Date::parse_layout("{:Y}-{03>:N}", "2095-257"), Err(LayoutError::OutOfRange));
            assert_eq!(Date::parse_layout("{04>:y}", "1999"), Err(LayoutError::OutOfRange));
        }

        #[test]
        fn wide_padded_fields_with_leading_zeros() {
            assert_eq!(Date::parse_layout("{:Y}-{:N}-{03>:D}", "2095-09-030"), Ok(Date::from_fields(2095, 9, 30)));
            assert_eq!(Date::parse_layout("{04>:y}", "0019"), Ok(Date::from_fields(2019, 1, 1)));
            assert_eq!(Date::parse_layout("{012>:Y}", "000000002095"), Ok(Date::from_fields(2095, 1, 1)));
        }

        #[test]
        fn errors() {
            assert_eq!(Date::parse_layout("{:Y}-{:N}", "2092/12"), Err(LayoutError::Mismatch { pos: 4 }));
            assert_eq!(Date::parse_layout("{:M}", "Foo"), Err(LayoutError::UnknownName { pos: 0 }));
            assert_eq!(Date::parse_layout("{:Y}", "2092 "), Err(LayoutError::TrailingText { pos: 4 }));
            assert_eq!(Date::parse_layout("{:Y}-{:N}-{:D}", "2095-02-30"), Err(LayoutError::OutOfRange));
            assert_eq!(DateTime::parse_layout("{:H}{:p}", "13PM"), Err(LayoutError::OutOfRange));
            assert_eq!(DateTime::parse_layout("{:H}{:p}", "11XM"), Err(LayoutError::ExpectedMeridiem { pos: 2 }));
            assert_eq!(Date::parse_layout("{:Y", "2092"), Err(LayoutError::Layout(FormatError::OpenCurlyBrace { open_pos: 0 })));
        }
    }
}
