use crate::error::{Error, Result};

/// Checks whether `source` equals any of `candidates`.
///
/// `None` has no meaningful membership and is rejected rather than reported
/// as absent from the set.
///
/// # Examples
///
/// ```
/// # use typext::is_in;
/// assert_eq!(is_in(Some(&3), &[1, 2, 3, 4]), Ok(true));
/// assert_eq!(is_in(Some(&5), &[1, 2, 3, 4]), Ok(false));
/// assert!(is_in(None, &[1, 2, 3, 4]).is_err());
/// ```
pub fn is_in<T: PartialEq>(source: Option<&T>, candidates: &[T]) -> Result<bool> {
    let source = source
        .ok_or_else(|| Error::invalid_argument("source", "value is absent"))?;
    Ok(candidates.contains(source))
}

/// Membership for values that are known to be present.
///
/// This covers `Option` too, comparing it against a set of options. To
/// reject an absent value instead, use [`TryIsIn::try_is_in`].
pub trait IsIn {
    fn is_in(&self, candidates: &[Self]) -> bool where Self: Sized;
}

impl<T: PartialEq> IsIn for T {
    fn is_in(&self, candidates: &[T]) -> bool {
        candidates.contains(self)
    }
}

/// Method form of [`is_in`] for values that may be absent.
///
/// # Examples
///
/// ```
/// # use typext::TryIsIn;
/// assert_eq!(Some(2).try_is_in(&[1, 2]), Ok(true));
/// assert!(None::<i32>.try_is_in(&[1, 2]).is_err());
/// ```
pub trait TryIsIn<T> {
    fn try_is_in(&self, candidates: &[T]) -> Result<bool>;
}

impl<T: PartialEq> TryIsIn<T> for Option<T> {
    fn try_is_in(&self, candidates: &[T]) -> Result<bool> {
        is_in(self.as_ref(), candidates)
    }
}
