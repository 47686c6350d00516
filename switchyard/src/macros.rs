//! The `dispatch_table!` construction macro.

/// Build a [`DispatchTable`](crate::DispatchTable) from `key => callable`
/// arms, with `_ => callable` naming the default.
///
/// Arms are registered in the order written and the default arm may appear
/// anywhere. The expansion calls [`DispatchTable::new`], so a second `_` arm
/// or a repeated key panics. The table type must be known from context.
///
/// [`DispatchTable::new`]: crate::DispatchTable::new
///
/// # Example
///
/// ```rust
/// use switchyard::{DispatchTable, dispatch_table};
///
/// let table: DispatchTable<&str, fn(u32) -> u32> = dispatch_table! {
///     "double" => |x: u32| x * 2,
///     "square" => |x: u32| x * x,
///     _ => |x: u32| x,
/// };
///
/// assert_eq!(table.resolve(&"square", (7,)), 49);
/// assert_eq!(table.resolve(&"negate", (7,)), 7);
/// ```
#[macro_export]
macro_rules! dispatch_table {
    (@directives [$($acc:expr),*]) => {
        [$($acc),*]
    };
    (@directives [$($acc:expr),*] _ => $callable:expr $(, $($rest:tt)*)?) => {
        $crate::dispatch_table!(
            @directives [$($acc,)* $crate::Directive::default($callable)] $($($rest)*)?
        )
    };
    (@directives [$($acc:expr),*] $key:expr => $callable:expr $(, $($rest:tt)*)?) => {
        $crate::dispatch_table!(
            @directives [$($acc,)* $crate::Directive::case($key, $callable)] $($($rest)*)?
        )
    };
    ($($arms:tt)*) => {
        $crate::DispatchTable::new($crate::dispatch_table!(@directives [] $($arms)*))
    };
}
