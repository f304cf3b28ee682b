use core::{
    fmt,
    hash::{Hash, Hasher},
    ops::BitAnd,
};

use tracing::trace;

use crate::error::EmptyValueError;

pub const UNWRAP_MESSAGE: &str = "called `Optional::unwrap()` on a `None` value";

/// A single slot that is either empty or holds exactly one `T`.
///
/// Reading the value out is destructive: [`Optional::unwrap`] and friends take
/// `&mut self`, move the payload out and leave the container empty, so the
/// same container can be refilled and read again for its whole lifetime.
///
/// # Example
///
/// ```rust
/// use optional::option::{none, some, Optional};
///
/// let mut opt: Optional<String> = none();
/// assert!(opt.is_none());
///
/// opt = some("hello".to_owned());
/// assert!(opt.is_some());
///
/// assert_eq!(opt.unwrap(), "hello");
/// assert!(opt.is_none());
/// assert_eq!(opt.unwrap_or(" world".to_owned()), " world");
///
/// opt = Optional::from("im here".to_owned());
/// let len = opt
///     .as_ref()
///     .map(|name| format!("{name}, too!"))
///     .unwrap_or_default()
///     .len();
/// assert_eq!(len, "im here, too!".len());
/// assert!(opt.is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Optional<T> {
    None,
    Some(T),
}

#[must_use]
pub const fn some<T>(value: T) -> Optional<T> {
    Optional::Some(value)
}
#[must_use]
pub const fn none<T>() -> Optional<T> {
    Optional::None
}

impl<T> Optional<T> {
    #[must_use]
    pub const fn empty() -> Self {
        Self::None
    }
    #[must_use]
    pub const fn of(value: T) -> Self {
        Self::Some(value)
    }

    #[must_use]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }
    #[must_use]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Move the value out, leaving `self` empty
    pub fn try_expect(&mut self, msg: &str) -> Result<T, EmptyValueError> {
        match core::mem::replace(self, Self::None) {
            Self::Some(value) => Ok(value),
            Self::None => {
                trace!(reason = msg, "destructive read on an empty container");
                Err(EmptyValueError::new(msg))
            }
        }
    }
    pub fn try_unwrap(&mut self) -> Result<T, EmptyValueError> {
        self.try_expect(UNWRAP_MESSAGE)
    }

    /// # Panic
    ///
    /// `self` is empty
    #[track_caller]
    pub fn expect(&mut self, msg: &str) -> T {
        match self.try_expect(msg) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
    /// # Panic
    ///
    /// `self` is empty
    #[track_caller]
    pub fn unwrap(&mut self) -> T {
        self.expect(UNWRAP_MESSAGE)
    }

    pub fn unwrap_or(&mut self, default: T) -> T {
        self.unwrap_or_else(|| default)
    }
    pub fn unwrap_or_else(&mut self, f: impl FnOnce() -> T) -> T {
        match self.take() {
            Self::Some(value) => value,
            Self::None => f(),
        }
    }
    pub fn unwrap_or_default(&mut self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Return the previous state and leave `self` empty
    pub fn take(&mut self) -> Self {
        core::mem::replace(self, Self::None)
    }
    /// Return the previous state and leave `self` holding `value`
    pub fn replace(&mut self, value: T) -> Self {
        core::mem::replace(self, Self::Some(value))
    }
    /// Store `value`, dropping any previous payload
    pub fn emplace(&mut self, value: T) -> &mut T {
        *self = Self::Some(value);
        match self {
            Self::Some(value) => value,
            Self::None => unreachable!(),
        }
    }
    pub fn clear(&mut self) {
        *self = Self::None;
    }

    pub fn map<U>(&mut self, f: impl FnOnce(T) -> U) -> Optional<U> {
        match self.take() {
            Self::Some(value) => Optional::Some(f(value)),
            Self::None => Optional::None,
        }
    }
    pub fn and_then<U>(&mut self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
        self.map(f).flatten()
    }

    /// `other` if `self` holds a value; `self` is left untouched
    pub fn and<U>(&self, other: Optional<U>) -> Optional<U> {
        if self.is_none() {
            return Optional::None;
        }
        other
    }

    pub fn convert<U>(&mut self) -> Optional<U>
    where
        U: From<T>,
    {
        self.map(U::from)
    }
    /// Move the state of `other` into `self`, leaving `other` empty
    pub fn assign_from<U>(&mut self, other: &mut Optional<U>)
    where
        T: From<U>,
    {
        *self = other.convert();
    }
}
impl<T> Optional<Optional<T>> {
    pub fn flatten(&mut self) -> Optional<T> {
        self.take().unwrap_or_default()
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_some().hash(state);
        if let Self::Some(value) = self {
            value.hash(state);
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(f, "Some({value})"),
            Self::None => write!(f, "None"),
        }
    }
}

impl<T, U> BitAnd<Optional<U>> for Optional<T> {
    type Output = Optional<U>;
    fn bitand(self, rhs: Optional<U>) -> Self::Output {
        self.and(rhs)
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::Some(value)
    }
}
impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}
impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }
}

#[cfg(feature = "nightly")]
#[cfg(test)]
#[bench]
fn bench_unwrap_refill(bencher: &mut test::Bencher) {
    use test::black_box;
    let mut opt = none::<u64>();
    bencher.iter(|| {
        for i in 0..1024 {
            opt.replace(black_box(i));
            black_box(opt.unwrap());
        }
    });
}
#[cfg(feature = "nightly")]
#[cfg(test)]
#[bench]
fn bench_map_chain(bencher: &mut test::Bencher) {
    use test::black_box;
    bencher.iter(|| {
        for i in 0..1024_u64 {
            let mut opt = black_box(some(i));
            black_box(opt.map(|n| n * 2).and_then(|n| some(n + 1)).unwrap_or(0));
        }
    });
}
