use revisit_core::{day_difference, Date, DateError};

#[test]
fn difference_is_antisymmetric_and_zero_on_self() {
    let a = Date::new(2024, 3, 10);
    let b = Date::new(2023, 11, 5);

    assert_eq!(
        day_difference(a, b).unwrap(),
        -day_difference(b, a).unwrap()
    );
    assert_eq!(day_difference(a, a).unwrap(), 0);
    assert_eq!(day_difference(b, b).unwrap(), 0);
}

#[test]
fn adding_n_days_yields_difference_n() {
    // Starting points chosen to cross month, year, and leap boundaries.
    let starts = [
        Date::new(2024, 2, 27),
        Date::new(2023, 12, 30),
        Date::new(2000, 2, 28),
        Date::new(1999, 1, 1),
    ];
    for start in starts {
        let origin = start.to_ordinal_day().unwrap();
        for n in [0i64, 1, 2, 4, 7, 30, 240, 365, 366, 1000] {
            let later = Date::from_ordinal_day(origin + n);
            assert_eq!(
                day_difference(start, later).unwrap(),
                n,
                "{start} + {n} days should differ by {n}, got {later}"
            );
        }
    }
}

#[test]
fn leap_day_round_trips() {
    let leap_day = Date::new(2024, 2, 29);
    let ordinal = leap_day.to_ordinal_day().unwrap();
    assert_eq!(Date::from_ordinal_day(ordinal), leap_day);

    // The same triple in a non-leap year does not exist.
    let err = Date::new(2023, 2, 29).to_ordinal_day().unwrap_err();
    assert_eq!(
        err,
        DateError::InvalidDate {
            year: 2023,
            month: 2,
            day: 29
        }
    );
}

#[test]
fn february_30_is_invalid_in_non_leap_year() {
    let err = Date::new(2023, 2, 30).to_ordinal_day().unwrap_err();
    assert!(matches!(err, DateError::InvalidDate { month: 2, day: 30, .. }));
}

#[test]
fn out_of_range_month_and_day_are_invalid() {
    assert!(Date::new(2024, 13, 1).to_ordinal_day().is_err());
    assert!(Date::new(2024, 0, 1).to_ordinal_day().is_err());
    assert!(Date::new(2024, 1, 32).to_ordinal_day().is_err());
    assert!(Date::new(2024, 4, 31).to_ordinal_day().is_err());
    assert!(Date::new(2024, 1, 0).to_ordinal_day().is_err());
}

#[test]
fn difference_propagates_invalid_dates() {
    let valid = Date::new(2024, 3, 10);
    let invalid = Date::new(2024, 2, 30);
    assert!(day_difference(invalid, valid).is_err());
    assert!(day_difference(valid, invalid).is_err());
}

#[test]
fn unix_epoch_is_ordinal_zero() {
    assert_eq!(Date::new(1970, 1, 1).to_ordinal_day().unwrap(), 0);
    assert_eq!(Date::from_ordinal_day(0), Date::new(1970, 1, 1));
}
