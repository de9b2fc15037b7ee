/// Declares marker types implementing [`Event`](crate::Event).
///
/// Each entry becomes a unit struct. The event name defaults to the struct
/// name; `as "name"` overrides it.
///
/// ```rust
/// use typed_emitter::{Event, events};
///
/// events! {
///     /// A user logged in.
///     pub struct LoggedIn as "logged-in": (String, u32);
///     pub struct Tick: ();
/// }
///
/// assert_eq!(LoggedIn::NAME, "logged-in");
/// assert_eq!(Tick::NAME, "Tick");
/// ```
#[macro_export]
macro_rules! events {
    (@name $name:ident $label:literal) => {
        $label
    };
    (@name $name:ident) => {
        stringify!($name)
    };
    ($(
        $(#[$meta:meta])*
        $vis:vis struct $name:ident $(as $label:literal)? : $args:ty;
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            $vis struct $name;

            impl $crate::Event for $name {
                type Args = $args;
                const NAME: &'static str = $crate::events!(@name $name $($label)?);
            }
        )*
    };
}

#[cfg(test)]
mod tests {
    use crate::Event;

    events! {
        struct Plain: ();
        /// Documented and renamed.
        pub(crate) struct Renamed as "renamed-event": (String, i32);
    }

    #[test]
    fn test_default_and_custom_names() {
        assert_eq!(Plain::NAME, "Plain");
        assert_eq!(Renamed::NAME, "renamed-event");
    }

    #[test]
    fn test_args_type_is_declared_tuple() {
        let args: <Renamed as Event>::Args = ("x".to_string(), 1);
        assert_eq!(args, ("x".to_string(), 1));
    }
}
