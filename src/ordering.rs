//! Range predicates over ordered values.
//!
//! All of them answer `false` when `start > end`, and when `val` can't be
//! compared with a bound at all (a NaN, say).

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// Exclusive check: `start < val < end`.
///
/// # Examples
///
/// ```
/// # use typext::ordering::is_between;
/// assert!(is_between(&5, &1, &10));
/// assert!(!is_between(&1, &1, &10));
/// ```
pub fn is_between<T: PartialOrd + ?Sized>(val: &T, start: &T, end: &T) -> bool {
    val > start && val < end
}

/// Inclusive check: `start <= val <= end`.
///
/// # Examples
///
/// ```
/// # use typext::ordering::is_within;
/// assert!(is_within(&1, &1, &10));
/// assert!(!is_within(&11, &1, &10));
/// ```
pub fn is_within<T: PartialOrd + ?Sized>(val: &T, start: &T, end: &T) -> bool {
    val >= start && val <= end
}

pub trait RangeExt {
    fn is_between(&self, start: &Self, end: &Self) -> bool;
    fn is_within(&self, start: &Self, end: &Self) -> bool;
}

impl<T: PartialOrd + ?Sized> RangeExt for T {
    fn is_between(&self, start: &T, end: &T) -> bool {
        is_between(self, start, end)
    }

    fn is_within(&self, start: &T, end: &T) -> bool {
        is_within(self, start, end)
    }
}

/// Inclusive containment for calendar types.
pub trait Between {
    fn between(&self, start: &Self, end: &Self) -> bool;
}

impl<Tz: TimeZone> Between for DateTime<Tz> {
    fn between(&self, start: &Self, end: &Self) -> bool {
        is_within(self, start, end)
    }
}

macro_rules! naive_between_impl {
    ($($name:ty),*) => {
        $(
            impl Between for $name {
                fn between(&self, start: &Self, end: &Self) -> bool {
                    is_within(self, start, end)
                }
            }
        )*
    };
}

naive_between_impl!(NaiveDate, NaiveDateTime);

/// True if `date` lies in `[start, end]`.
///
/// # Examples
///
/// ```
/// # use typext::ordering::between;
/// use chrono::NaiveDate;
/// let day = |d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
/// assert!(between(&day(10), &day(1), &day(10)));
/// assert!(!between(&day(11), &day(1), &day(10)));
/// ```
pub fn between<D: Between>(date: &D, start: &D, end: &D) -> bool {
    date.between(start, end)
}
