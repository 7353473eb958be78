//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use seqkit_foundation::{Error, ErrorContext, ErrorKind, InvalidArgument, Limits};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_negative_length() {
    let err = Error::negative_length(-5);
    assert!(matches!(
        err.kind,
        ErrorKind::InvalidArgument(InvalidArgument::NegativeLength(-5))
    ));
    assert!(err.is_invalid_argument());
}

#[test]
fn error_length_too_large() {
    let err = Error::length_too_large(10, 8);
    let msg = format!("{err}");
    assert!(msg.contains("10"));
    assert!(msg.contains('8'));
}

#[test]
fn error_index_out_of_bounds() {
    let err = Error::index_out_of_bounds(-9, 3);
    assert!(err.is_invalid_argument());
    let msg = format!("{err}");
    assert!(msg.contains("-9"));
    assert!(msg.contains("length 3"));
}

#[test]
fn error_empty_reduction() {
    let err = Error::empty_reduction();
    assert!(err.is_empty_reduction());
    assert_eq!(
        format!("{err}"),
        "reduce of empty sequence with no initial value"
    );
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_display() {
    let ctx = ErrorContext::new().with_operation("slice");
    assert_eq!(ctx.to_string(), "in slice");

    let ctx = ErrorContext::new().with_argument("length");
    assert_eq!(ctx.to_string(), "argument `length`");
}

#[test]
fn context_does_not_change_message() {
    let err = Error::negative_length(-1).in_operation("construct");
    assert_eq!(format!("{err}"), "invalid argument: negative length -1");
    assert_eq!(err.context.and_then(|c| c.operation), Some("construct"));
}

// =============================================================================
// Limits
// =============================================================================

#[test]
fn limits_surface_invalid_argument() {
    let limits = Limits::default().with_max_length(100);
    assert!(limits.check_length(101).unwrap_err().is_invalid_argument());
    assert!(limits.check_length(-1).unwrap_err().is_invalid_argument());
    assert_eq!(limits.check_length(100).unwrap(), 100);
}

#[test]
fn error_is_std_error() {
    fn takes_std_error(_: &dyn std::error::Error) {}
    takes_std_error(&Error::empty_reduction());
}
