use civil::{Date, DateTime, Month, Year};
use civil::{DatePiece, TimePiece};


#[test]
fn year_1600() {
    assert!(Year(1600).is_leap_year());
}

#[test]
fn year_1900() {
    assert!(!Year(1900).is_leap_year());
}

#[test]
fn year_2000() {
    assert!(Year(2000).is_leap_year());
}

#[test]
fn year_2038() {
    assert!(!Year(2038).is_leap_year());
}

#[test]
fn year_zero_and_before() {
    assert!(Year(0).is_leap_year());
    assert!(Year(-4).is_leap_year());
    assert!(!Year(-100).is_leap_year());
}


#[test]
fn the_distant_past() {
    let date = Date::ymd(7, Month::April, 1).unwrap();

    assert_eq!(date.year(),  7);
    assert_eq!(date.month(), Month::April);
    assert_eq!(date.day(),   1);
}

#[test]
fn the_distant_future() {
    let date = Date::ymd(1048576, Month::October, 13).unwrap();

    assert_eq!(date.year(), 1048576);
    assert_eq!(date.month(), Month::October);
    assert_eq!(date.day(), 13);
}

#[test]
fn normalising_constructor() {
    assert_eq!(Date::from_fields(2021, 10, 32), Date::ymd(2021, Month::November, 1).unwrap());
    assert_eq!(Date::from_fields(2021, 0, 1), Date::ymd(2020, Month::December, 1).unwrap());
    assert_eq!(Date::from_fields(2021, 3, 0), Date::ymd(2021, Month::February, 28).unwrap());
}


#[test]
fn day_start_of_year() {
    let date = Date::yd(2015, 1).unwrap();
    assert_eq!(2015, date.year());
    assert_eq!(Month::January, date.month());
    assert_eq!(1, date.day());
}

#[test]
fn from_yearday() {
    for date in vec![
        Date::ymd(1971, Month::January,  1).unwrap(),
        Date::ymd(1989, Month::November, 10).unwrap(),
        Date::ymd(1990, Month::July,     8).unwrap(),
        Date::ymd(2001, Month::February, 3).unwrap(),
        Date::ymd(2000, Month::December, 31).unwrap(),
        Date::ymd(-1,   Month::March,    1).unwrap(),
    ] {
        let new_date = Date::yd(date.year(), date.yearday() as i64).unwrap();
        assert_eq!(new_date, date);
        assert_eq!(new_date.yearday(), date.yearday());
    }
}

#[test]
fn yearday_out_of_range() {
    assert!(Date::yd(2015, 0).is_err());
    assert!(Date::yd(2015, 366).is_err());
    assert!(Date::yd(2016, 366).is_ok());
}

#[test]
fn end_of_year_day() {
    assert_eq!(Date::ymd(2015, Month::December, 31).unwrap().yearday(), 365);
    assert_eq!(Date::ymd(2016, Month::December, 31).unwrap().yearday(), 366);
}

#[test]
fn yearday() {
    for year in 1 .. 2058 {
        assert_eq!( Date::ymd(year, Month::January, 31).unwrap().yearday() + 1,
                    Date::ymd(year, Month::February, 1).unwrap().yearday());
        assert_eq!( Date::ymd(year, Month::March, 31).unwrap().yearday() + 1,
                    Date::ymd(year, Month::April, 1).unwrap().yearday());
        assert_eq!( Date::ymd(year, Month::April, 30).unwrap().yearday() + 1,
                    Date::ymd(year, Month::May, 1).unwrap().yearday());
    }
    assert_eq!( Date::ymd(1600, Month::February, 29).unwrap().yearday() + 1,
                Date::ymd(1600, Month::March, 1).unwrap().yearday());
    assert_eq!( Date::ymd(1601, Month::February, 28).unwrap().yearday() + 1,
                Date::ymd(1601, Month::March, 1).unwrap().yearday());
}


#[test]
fn every_year_keeps_its_fields() {
    for year in -9999 ..= 9999 {
        let then = DateTime::from_fields(year, 5, 20, 22, 2, 31);
        assert_eq!(then.date_time(), (year, Month::May, 20, 22, 2, 31));
    }
}

#[test]
fn every_month_keeps_its_fields() {
    for month in 1 ..= 12 {
        let then = DateTime::from_fields(1969, month, 12, 22, 2, 31);
        assert_eq!(then.month(), Month::from_one(month as i8).unwrap());
        assert_eq!((then.day(), then.hour(), then.minute(), then.second()), (12, 22, 2, 31));
    }
}

#[test]
fn every_day_keeps_its_fields() {
    for day in 1 ..= 31 {
        let then = DateTime::from_fields(1969, 1, day, 22, 2, 31);
        assert_eq!(then.day() as i64, day);
        assert_eq!(then.month(), Month::January);
    }
}
