//! The `args!` macro for building argument batches.

/// Builds an [`Arguments`](crate::Arguments) batch.
///
/// Positional values come first, separated by commas. Named values follow a
/// semicolon as `name = value` pairs.
///
/// # Examples
///
/// ```rust
/// use currying::{Arguments, args};
///
/// let empty: Arguments<i32> = args![];
/// assert!(empty.is_empty());
///
/// let positional = args![1, 2, 3];
/// assert_eq!(positional.positional(), &[1, 2, 3]);
///
/// let mixed = args![4; z = 3];
/// assert_eq!(mixed.positional(), &[4]);
/// assert_eq!(mixed.get("z"), Some(&3));
///
/// let named_only = args![; z = 3, w = 4];
/// assert_eq!(named_only.positional_len(), 0);
/// assert_eq!(named_only.named_len(), 2);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Arguments::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut arguments = $crate::Arguments::new();
        $(arguments.push($value);)+
        arguments
    }};
    ($($value:expr),* ; $($name:ident = $named:expr),* $(,)?) => {{
        let mut arguments = $crate::Arguments::new();
        $(arguments.push($value);)*
        $(arguments.insert(::core::stringify!($name), $named);)*
        arguments
    }};
}
