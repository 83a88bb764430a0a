//! Macros for building call arguments with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`arguments!`]: build [`Arguments`](crate::signature::Arguments) from
//!   positional values and `name = value` keyword pairs

// ============================================================================
// ARGUMENTS MACRO
// ============================================================================

/// Builds [`Arguments`](crate::signature::Arguments) for one call.
///
/// Positional values come first, separated from keyword pairs by `;`. Every
/// value only needs to convert into [`serde_json::Value`].
///
/// # Examples
///
/// ```
/// use argguard::arguments;
/// use serde_json::json;
///
/// let none = arguments![];
/// assert!(none.is_empty());
///
/// let positional = arguments!["_", 0];
/// assert_eq!(positional.positional().len(), 2);
///
/// let mixed = arguments!["_", 0; c = json!({"k": 1}), d = json!([])];
/// assert_eq!(mixed.keyword_value("d"), Some(&json!([])));
///
/// let keywords = arguments![; s = "text"];
/// assert_eq!(keywords.keyword_value("s"), Some(&json!("text")));
/// ```
#[macro_export]
macro_rules! arguments {
    () => {
        $crate::signature::Arguments::new()
    };

    ($($value:expr),+ $(,)?) => {{
        let mut args = $crate::signature::Arguments::new();
        $( args.push($value); )+
        args
    }};

    ($($value:expr),* ; $($name:ident = $keyword:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut args = $crate::signature::Arguments::new();
        $( args.push($value); )*
        $( args.insert(stringify!($name), $keyword); )*
        args
    }};
}
