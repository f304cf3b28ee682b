use crate::{ops::call::Method, option::Optional};

/// A receiver bound to a method, invoked later with [`MethodProxy::call`]
#[derive(Debug, Clone, Copy)]
pub struct MethodProxy<T, M> {
    receiver: T,
    method: M,
}
impl<T, M> MethodProxy<T, M> {
    #[must_use]
    pub const fn new(receiver: T, method: M) -> Self {
        Self { receiver, method }
    }

    pub fn call<Args>(self, args: Args) -> <M as Method<T, Args>>::Output
    where
        M: Method<T, Args>,
    {
        self.method.invoke(self.receiver, args)
    }

    #[must_use]
    pub fn receiver(&self) -> &T {
        &self.receiver
    }
}

impl<T> Optional<T> {
    /// Project a plain field out of the held value
    pub fn project<F>(&mut self, field: impl FnOnce(T) -> F) -> Optional<F> {
        self.map(field)
    }

    /// Bind the held value to `method` without calling it yet
    pub fn project_method<M>(&mut self, method: M) -> Optional<MethodProxy<T, M>> {
        self.map(|receiver| MethodProxy::new(receiver, method))
    }
}

#[cfg(test)]
mod tests {
    use crate::option::{none, some};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Account {
        name: String,
        balance: u64,
    }
    impl Account {
        fn new(name: &str, balance: u64) -> Self {
            Self {
                name: name.to_owned(),
                balance,
            }
        }
        fn balance(&self) -> u64 {
            self.balance
        }
        fn deposit(mut self, amount: u64) -> Self {
            self.balance += amount;
            self
        }
        fn transfer(&self, to: &mut Account, amount: u64) -> bool {
            if self.balance < amount {
                return false;
            }
            to.balance += amount;
            true
        }
    }

    #[test]
    fn test_project_field() {
        let mut acc = some(Account::new("alice", 10));
        assert_eq!(acc.project(|a| a.name), some(String::from("alice")));
        assert!(acc.is_none());
        assert_eq!(none::<Account>().project(|a| a.balance), none());
    }

    #[test]
    fn test_project_field_through_view() {
        let acc = some(Account::new("bob", 7));
        assert_eq!(acc.as_ref().project(|a| a.balance), some(7));
        assert_eq!(acc.as_ref().project(|a| a.name.len()), some(3));
        assert!(acc.is_some());
    }

    #[test]
    fn test_project_method() {
        let acc = some(Account::new("carol", 5));
        let mut proxy = acc.as_ref().project_method(Account::balance);
        assert_eq!(proxy.unwrap().call(()), 5);

        let mut proxy = some(Account::new("dave", 1)).project_method(Account::deposit);
        let proxy = proxy.unwrap();
        assert_eq!(proxy.receiver().name, "dave");
        assert_eq!(proxy.call((4,)), Account::new("dave", 5));
    }

    #[test]
    fn test_project_method_with_args() {
        let from = some(Account::new("erin", 3));
        let mut to = Account::new("frank", 0);
        let sent = from
            .as_ref()
            .project_method(Account::transfer)
            .map(|proxy| proxy.call((&mut to, 2)));
        assert_eq!(sent, some(true));
        assert_eq!(to.balance, 2);
    }

    #[test]
    fn test_project_method_on_none() {
        let mut called = false;
        let mut proxy = none::<Account>().project_method(|a: Account, _: ()| {
            called = true;
            a.balance
        });
        assert!(proxy.is_none());
        assert_eq!(proxy.map(|p| p.call(((),))), none());
        assert!(!called);
    }
}
