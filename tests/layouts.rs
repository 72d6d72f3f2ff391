#![cfg(feature = "format")]

use civil::{Date, DateTime, DateFormat, LayoutError};


#[test]
fn format_then_read_back() {
    let layout = "{:_E} {02>:D} {:_M} {04>:Y}, {02>:H}:{02>:m}:{02>:s} {:p}";

    for &(y, m, d, h, mi, s) in &[
        (2095, 9, 30, 0, 0, 0),
        (2033, 4, 8, 12, 30, 15),
        (1970, 1, 1, 23, 59, 59),
        (1, 12, 31, 11, 1, 2),
    ] {
        let then = DateTime::from_fields(y, m, d, h, mi, s);
        let text = then.format(layout).unwrap();
        assert_eq!(DateTime::parse_layout(layout, &text), Ok(then), "{:?}", text);
    }
}

#[test]
fn compact_fields_need_fixed_widths() {
    let layout = "{04>:Y}{02>:N}{02>:D}{02>:h}{02>:m}";
    let then = DateTime::parse_layout(layout, "209509301147").unwrap();
    assert_eq!(then, DateTime::from_fields(2095, 9, 30, 11, 47, 0));
    assert_eq!(then.format(layout), Ok("209509301147".to_string()));
}

#[test]
fn negative_years_read_back() {
    let date = Date::from_fields(-5, 6, 7);
    let text = date.format("{04>:Y}-{02>:N}-{02>:D}").unwrap();
    assert_eq!(text, "-005-06-07");
    assert_eq!(Date::parse_layout("{04>:Y}-{02>:N}-{02>:D}", &text), Ok(date));
    assert_eq!(Date::parse_layout("{:Y}-{:N}-{:D}", "-5-6-7"), Ok(date));
}

#[test]
fn missing_fields_take_defaults() {
    let then = DateTime::parse_layout("{:h}:{:m}", "7:08").unwrap();
    assert_eq!(then, DateTime::from_fields(0, 1, 1, 7, 8, 0));
}

#[test]
fn spaces_before_unpadded_numbers() {
    let date = Date::parse_layout("{:M} {:D}", "Mar  4").unwrap();
    assert_eq!(date, Date::from_fields(0, 3, 4));
}

#[test]
fn a_layout_can_be_reused() {
    let layout = DateFormat::parse("{:D}/{:N}/{:Y}").unwrap();
    let locale = locale::Time::english();

    let a = layout.read("30/9/2095", &locale).unwrap();
    let b = layout.read("1/1/1970", &locale).unwrap();
    assert!(b.is_before(&a));
    assert_eq!(layout.format(&a, &locale), "30/9/2095");
}

#[test]
fn error_messages() {
    let error = Date::parse_layout("{:Y}", "year").unwrap_err();
    assert_eq!(error, LayoutError::ExpectedDigits { pos: 0 });
    assert_eq!(error.to_string(), "expected digits at position 0");
}

#[test]
fn overlong_year_is_out_of_range() {
    let digits = "9".repeat(20);
    assert_eq!(DateTime::parse_layout("{020>:Y}", &digits), Err(LayoutError::OutOfRange));
    assert_eq!(DateTime::parse_layout("{010>:Y}", "1000000000"), Err(LayoutError::OutOfRange));
}

#[test]
fn wide_fields_never_wrap_into_range() {
    assert_eq!(Date::parse_layout("{:Y}-{03>:N}-{:D}", "2095-257-1"), Err(LayoutError::OutOfRange));
    assert_eq!(Date::parse_layout("{:Y}-{:N}-{03>:D}", "2095-09-257"), Err(LayoutError::OutOfRange));
    assert_eq!(DateTime::parse_layout("{03>:h}:{:m}", "280:00"), Err(LayoutError::OutOfRange));
    assert_eq!(DateTime::parse_layout("{:h}:{03>:m}", "1:060"), Err(LayoutError::OutOfRange));
    assert_eq!(DateTime::parse_layout("{:h}:{:m}:{04>:s}", "1:2:0300"), Err(LayoutError::OutOfRange));
}

#[test]
fn padded_year_of_century_stays_two_digits() {
    assert_eq!(Date::parse_layout("{04>:y}", "1999"), Err(LayoutError::OutOfRange));
    assert_eq!(Date::parse_layout("{04>:y}", "0099"), Ok(Date::from_fields(1999, 1, 1)));
}
