//! Non-owning views into an [`Optional`].
//!
//! A view never drops its referent and the borrow checker keeps it from
//! outliving the container it was taken from.

use crate::option::Optional;

pub type Ref<'a, T> = Optional<&'a T>;
pub type Mut<'a, T> = Optional<&'a mut T>;

impl<T> Optional<T> {
    /// Borrow the payload in place; `self` keeps its value
    pub fn as_ref(&self) -> Ref<'_, T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }
    /// Borrow the payload mutably; writes through the view land in `self`
    pub fn as_mut(&mut self) -> Mut<'_, T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }
}

impl<T: Clone> Ref<'_, T> {
    pub fn cloned(&mut self) -> Optional<T> {
        self.map(T::clone)
    }
}
impl<T: Copy> Ref<'_, T> {
    pub fn copied(&mut self) -> Optional<T> {
        self.map(|value| *value)
    }
}
impl<T: Clone> Mut<'_, T> {
    pub fn cloned(&mut self) -> Optional<T> {
        self.map(|value| value.clone())
    }
}
