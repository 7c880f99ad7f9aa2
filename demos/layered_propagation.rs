//! Each layer rewraps the error it received with its own call site.

use std::process::ExitCode;

use error_trail::{code_location, make_error, make_sized_error, ErrorKind, MaybeError};

fn h(_c: char) -> MaybeError {
    // A generic error with the default message budget.
    Some(make_error!("{} - We have a problem", code_location!()))
}

fn g(_x: f32) -> MaybeError {
    let mut err = h('A');

    if let Some(inner) = err.take() {
        // A sized, generic error.
        err = Some(make_sized_error!(512, "{} - {}", code_location!(), inner.first_message()));
    }

    err
}

fn f(_s: &str) -> MaybeError {
    let mut err = g(2.5);

    if let Some(mut inner) = err.take() {
        // Keep the received chain and add a typed, sized entry on top.
        inner.append_typed_sized(
            ErrorKind::InvalidArgument,
            512,
            format_args!("{} - rejecting input", code_location!()),
        );
        err = Some(inner);
    }

    err
}

fn main() -> ExitCode {
    let Some(err) = f("blah!") else {
        return ExitCode::SUCCESS;
    };

    eprintln!("{}:{}", err.first_kind(), err.first_message());
    eprintln!("{:#}", err);

    ExitCode::FAILURE
}
