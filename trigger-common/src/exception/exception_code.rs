#![allow(non_snake_case)]

use std::backtrace::Backtrace;
use std::sync::Arc;

use super::exception::{ErrorCode, ErrorCodeBacktrace};

macro_rules! build_exceptions {
    ($($body:ident($code:expr)),*$(,)*) => {
            impl ErrorCode {
                $(
                pub fn $body(display_text: impl Into<String>) -> ErrorCode {
                    let bt = Some(ErrorCodeBacktrace::Origin(Arc::new(Backtrace::capture())));
                    ErrorCode::create(
                        $code,
                        display_text.into(),
                        None,
                        bt,
                    )
                }
                paste::item! {
                    pub fn [< $body:snake _ code >] ()  -> u16{
                        $code
                    }
                }
                )*
            }
    }
}

// Internal errors [0, 2000].
impl ErrorCode {
    pub const MISSING_FIELD_CODE: u16 = 1010;
    pub const UNKNOWN_EXCEPTION_CODE: u16 = 1999;
}
build_exceptions! {
    IllegalArgument(1002),
    NotFound(1003),
    LookupFailed(1005),
    MissingField(ErrorCode::MISSING_FIELD_CODE),
    UnknownException(ErrorCode::UNKNOWN_EXCEPTION_CODE),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_constructors_carry_their_code() {
        let err = ErrorCode::MissingField("userid");
        assert_eq!(err.code(), ErrorCode::missing_field_code());
        assert_eq!(err.code(), 1010);
        assert_eq!(err.display_text(), "userid");
        assert_eq!(ErrorCode::IllegalArgument("x").code(), 1002);
    }

    #[test]
    fn display_includes_code_and_text() {
        let err = ErrorCode::NotFound("event_lookup_step");
        assert_eq!(
            err.to_string(),
            "Code: 1003, displayText = event_lookup_step."
        );
    }
}
