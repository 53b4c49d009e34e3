//! Unit tests for `AppError` display formatting and conversions.

use argument_arena::AppError;

#[test]
fn config_error_display_includes_message() {
    let err = AppError::Config("bad port".into());
    assert_eq!(err.to_string(), "config: bad port");
}

#[test]
fn no_active_session_display_names_the_remedy() {
    let err = AppError::NoActiveSession;
    assert_eq!(err.to_string(), "no active session: start one first");
}

#[test]
fn io_error_converts_via_from() {
    let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
    let err: AppError = io.into();
    assert!(matches!(err, AppError::Io(_)));
    assert!(err.to_string().contains("port taken"));
}

#[test]
fn errors_implement_std_error() {
    fn assert_error<E: std::error::Error>(_err: &E) {}
    assert_error(&AppError::NoActiveSession);
}
