/// Helper macros for creating native functions
#[doc(hidden)]
#[macro_export]
macro_rules! __count {
    () => (0usize);
    ( $x:tt $($xs:tt)* ) => (1usize + __count!($($xs)*));
}

/// Creates a `Builtin` that takes a fixed number of arguments.
/// Each parameter is bound to a `&Value`, and the body must produce a `Value`.
/// Calls with the wrong number of arguments produce an error value without running the body.
#[macro_export]
macro_rules! native_function {
    ( $func_name:ident ( $( $param:ident ),* ) => $body:expr ) => {
        {
            fn body(args: &[Value]) -> Value {
                const _ARGC: usize = __count!( $( $param )* );

                match args {
                    [ $( $param ),* ] => $body,
                    _ => Value::from(RuntimeError::wrong_argument_count(args.len(), _ARGC)),
                }
            }

            Builtin::new(stringify!($func_name), body)
        }
    };
}
