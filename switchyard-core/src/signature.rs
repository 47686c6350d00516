//! # Signatures
//!
//! A [`Signature`] fixes the parameter list and return type shared by every
//! callable in one dispatch table. It is implemented for function-pointer
//! types, so a table over `i32` keys whose callables take a `String` and
//! return nothing is written `DispatchTable<i32, fn(String)>`.
//!
//! The function-pointer type is only used as a type-level tag. Callables are
//! stored as boxed `dyn Fn` objects and may capture state.
//!
//! Arities from zero to twelve parameters are supported.

/// The fixed parameter list and return type of a dispatch table.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a dispatch signature",
    label = "expected a function-pointer type such as `fn(String) -> i32`",
    note = "Signatures are written as `fn(T1, .., Tn) -> R` with up to twelve owned parameters."
)]
pub trait Signature: 'static {
    /// The parameters, as a tuple (`()` for no parameters).
    type Args;

    /// The return type. `()` for signatures without a return value.
    type Output;

    /// The unsized callable type stored by the table.
    type Callable: ?Sized + Send + Sync;

    /// Invokes `callable`, spreading the argument tuple into the call.
    fn invoke(callable: &Self::Callable, args: Self::Args) -> Self::Output;
}

/// A callable of signature `S`, boxed for storage.
pub type BoxedCallable<S> = Box<<S as Signature>::Callable>;

/// Conversion of a closure or function into a stored callable of signature `S`.
///
/// Implemented for every `Fn` whose parameters and return type match `S`
/// exactly, so a mismatched callable is rejected at compile time.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not match the dispatch signature `{S}`",
    label = "parameter list or return type differs from `{S}`",
    note = "Every case and the default of one table must share the same signature."
)]
pub trait IntoCallable<S: Signature> {
    /// Box the callable.
    fn into_callable(self) -> BoxedCallable<S>;
}

/// Implements [`Signature`] and [`IntoCallable`] for one arity.
macro_rules! impl_signature {
    ($($T:ident),*) => {
        impl<R: 'static, $($T: 'static,)*> Signature for fn($($T,)*) -> R {
            type Args = ($($T,)*);
            type Output = R;
            type Callable = dyn Fn($($T,)*) -> R + Send + Sync;

            #[inline]
            #[allow(non_snake_case)]
            fn invoke(callable: &Self::Callable, args: Self::Args) -> Self::Output {
                let ($($T,)*) = args;
                callable($($T,)*)
            }
        }

        impl<F, R: 'static, $($T: 'static,)*> IntoCallable<fn($($T,)*) -> R> for F
        where
            F: Fn($($T,)*) -> R + Send + Sync + 'static,
        {
            fn into_callable(self) -> BoxedCallable<fn($($T,)*) -> R> {
                Box::new(self)
            }
        }
    };
}

impl_signature!();
impl_signature!(T1);
impl_signature!(T1, T2);
impl_signature!(T1, T2, T3);
impl_signature!(T1, T2, T3, T4);
impl_signature!(T1, T2, T3, T4, T5);
impl_signature!(T1, T2, T3, T4, T5, T6);
impl_signature!(T1, T2, T3, T4, T5, T6, T7);
impl_signature!(T1, T2, T3, T4, T5, T6, T7, T8);
impl_signature!(T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_signature!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_signature!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
impl_signature!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12);
