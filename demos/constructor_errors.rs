//! Constructors that can fail report through an out parameter instead of
//! tracking an "initialized" flag on the object.

use error_trail::{code_location, make_error, make_typed_error, ErrorKind, MaybeError};

#[derive(Debug, Default, Clone, Copy)]
struct InitArgs {
    height: f64,
    width: f64,
}

#[derive(Debug, Default)]
#[allow(dead_code)]
struct Rectangle {
    height: f64,
    width: f64,
}

impl Rectangle {
    fn new(args: InitArgs, err: &mut MaybeError) -> Self {
        // Clear any leftover error.
        *err = None;

        if args.height <= 0.0 {
            *err = Some(make_error!(
                "{} - args.height is not positive: {}",
                code_location!(),
                args.height
            ));
            return Self::default();
        }

        if args.width <= 0.0 {
            *err = Some(make_typed_error!(
                ErrorKind::InvalidArgument,
                "{} - args.width is not positive: {}",
                code_location!(),
                args.width
            ));
            return Self::default();
        }

        Self { height: args.height, width: args.width }
    }
}

fn main() {
    let mut args = InitArgs { height: -1.0, width: -2.0 };
    let mut err: MaybeError = None;

    let _r1 = Rectangle::new(args, &mut err);
    if let Some(e) = &err {
        eprintln!("Something went bad - {} : {}", e.first_kind(), e.first_message());
    }

    args.height = 1.0;
    let _r2 = Rectangle::new(args, &mut err);
    if let Some(e) = &err {
        eprintln!("Something went bad - {} : {}", e.first_kind(), e.first_message());
    }

    args.width = 2.0;
    let r3 = Rectangle::new(args, &mut err);
    match &err {
        Some(e) => eprintln!("Something went bad: {}", e.first_message()),
        None => eprintln!("This time everything went well: {r3:?}"),
    }
}
