use crate::option::Optional;

impl<T> Optional<T> {
    /// Same as [`Optional::map`]
    pub fn pipe<U>(&mut self, f: impl FnOnce(T) -> U) -> Optional<U> {
        self.map(f)
    }

    /// Run `f` for its side effect if a value is held.
    ///
    /// Returns whether `f` was called.
    pub fn pipe_effect(&mut self, f: impl FnOnce(T)) -> bool {
        let Self::Some(value) = self.take() else {
            return false;
        };
        f(value);
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::option::{none, some};

    #[test]
    fn test_pipe() {
        let mut opt = some(3);
        assert_eq!(opt.pipe(|n| n * 2).pipe(|n| n + 1), some(7));
        assert!(opt.is_none());
        assert_eq!(none::<i32>().pipe(|n| n * 2), none());
    }

    #[test]
    fn test_pipe_effect() {
        let mut seen = vec![];
        let mut opt = some("a");
        assert!(opt.pipe_effect(|s| seen.push(s)));
        assert!(opt.is_none());
        assert!(!opt.pipe_effect(|s| seen.push(s)));
        assert_eq!(seen, ["a"]);
    }
}
