use crate::option::Optional;

/// A callable consuming an argument tuple
pub trait Callable<Args> {
    type Output;
    fn call_with(self, args: Args) -> Self::Output;
}

/// A method-like callable taking a receiver followed by an argument tuple
pub trait Method<Recv, Args> {
    type Output;
    fn invoke(self, receiver: Recv, args: Args) -> Self::Output;
}

macro_rules! impl_callable {
    ($($arg:ident),*) => {
        impl<Func, Ret, $($arg,)*> Callable<($($arg,)*)> for Func
        where
            Func: FnOnce($($arg),*) -> Ret,
        {
            type Output = Ret;
            #[allow(non_snake_case)]
            fn call_with(self, ($($arg,)*): ($($arg,)*)) -> Ret {
                self($($arg),*)
            }
        }
        impl<Func, Ret, Recv, $($arg,)*> Method<Recv, ($($arg,)*)> for Func
        where
            Func: FnOnce(Recv, $($arg),*) -> Ret,
        {
            type Output = Ret;
            #[allow(non_snake_case)]
            fn invoke(self, receiver: Recv, ($($arg,)*): ($($arg,)*)) -> Ret {
                self(receiver, $($arg),*)
            }
        }
    };
}
impl_callable!();
impl_callable!(A);
impl_callable!(A, B);
impl_callable!(A, B, C);
impl_callable!(A, B, C, D);
impl_callable!(A, B, C, D, E);
impl_callable!(A, B, C, D, E, G);

impl<F> Optional<F> {
    /// Consume and invoke the held callable; an empty container invokes nothing
    pub fn call<Args>(&mut self, args: Args) -> Optional<<F as Callable<Args>>::Output>
    where
        F: Callable<Args>,
    {
        self.map(|f| f.call_with(args))
    }
}
