//! Property-based tests for argguard.

use argguard::prelude::*;
use proptest::prelude::*;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn echo(annotation: impl Into<Annotation>) -> ValidatedFn<fn(&Arguments) -> Value> {
    let signature = Signature::builder()
        .positional("x", annotation)
        .build()
        .unwrap();
    let body: fn(&Arguments) -> Value = |args| args.get(0).cloned().unwrap_or(Value::Null);
    ValidatedFn::new(signature, body)
}

fn counted(
    annotation: impl Into<Annotation>,
) -> (ValidatedFn<impl Fn(&Arguments) -> Value>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let signature = Signature::builder()
        .positional("x", annotation)
        .build()
        .unwrap();
    let f = ValidatedFn::new(signature, move |args: &Arguments| {
        counter.fetch_add(1, Ordering::SeqCst);
        args.get(0).cloned().unwrap_or(Value::Null)
    });
    (f, calls)
}

// ============================================================================
// ACCEPTED VALUES: the original result comes back unchanged
// ============================================================================

proptest! {
    #[test]
    fn accepted_numbers_return_the_original(n in 0i64..) {
        let f = echo(non_negative().of(TypeTag::Integer));
        prop_assert_eq!(f.call(&arguments![n]).unwrap(), json!(n));
    }

    #[test]
    fn accepted_words_return_the_original(s in "[a-z0-9_-]{1,24}") {
        let f = echo(no_whitespaces().of(non_empty().of(TypeTag::String)));
        prop_assert_eq!(f.call(&arguments![s.as_str()]).unwrap(), json!(s));
    }

    #[test]
    fn wrapped_and_skipped_agree_on_accepted_values(s in "[a-z ]{0,5}[a-z][a-z ]{0,5}") {
        let f = echo(non_blank().of(TypeTag::String));
        let args = arguments![s.as_str()];
        prop_assert_eq!(f.call(&args).unwrap(), f.skip_validations()(&args));
    }
}

// ============================================================================
// REJECTED VALUES: the body never runs
// ============================================================================

proptest! {
    #[test]
    fn rejected_numbers_never_run_the_body(n in i64::MIN..0) {
        let (f, calls) = counted(non_negative().of(TypeTag::Integer));
        let err = f.call(&arguments![n]).unwrap_err();
        prop_assert!(err.is_rejection());
        prop_assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn whitespace_strings_never_run_the_body(
        head in "[a-z]{0,8}",
        space in "[ \t\n\r]",
        tail in "[a-z]{0,8}",
    ) {
        let (f, calls) = counted(no_whitespaces().of(TypeTag::String));
        let value = format!("{head}{space}{tail}");
        let err = f.call(&arguments![value]).unwrap_err();
        prop_assert!(err.is_rejection());
        prop_assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn non_strings_are_inapplicable_not_rejected(
        n in any::<i64>().prop_filter("zero is vacant", |n| *n != 0),
    ) {
        let (f, calls) = counted(non_blank().of(TypeTag::String));
        let err = f.call(&arguments![n]).unwrap_err();
        prop_assert!(err.is_internal());
        prop_assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}

// ============================================================================
// DEFAULTS: a failing default fails like the same explicit value
// ============================================================================

proptest! {
    #[test]
    fn default_fails_like_explicit_value(s in "[a-z]{0,6} [a-z]{0,6}") {
        let signature = Signature::builder()
            .positional_with_default("a", no_whitespaces().of(TypeTag::String), s.as_str())
            .build()
            .unwrap();
        let f = validate_parameters(signature, |_: &Arguments| ());

        let implicit = f.call(&arguments![]).unwrap_err();
        let explicit = f.call(&arguments![s.as_str()]).unwrap_err();
        prop_assert_eq!(implicit.to_string(), explicit.to_string());
    }
}
