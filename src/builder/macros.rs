//! Macros for ergonomic state construction.

/// Declare a fieldless enum usable as an automaton state.
///
/// Derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug`, and the
/// serde traits, and implements [`State`](crate::core::State) with the
/// variant name as the described form.
///
/// # Example
///
/// ```
/// use nondet::core::State;
/// use nondet::state_enum;
///
/// state_enum! {
///     pub enum Door {
///         Closed,
///         Open,
///         Locked,
///     }
/// }
///
/// assert_eq!(Door::Locked.describe(), "Locked");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn describe(&self) -> String {
                match self {
                    $(Self::$variant => stringify!($variant).to_string()),*
                }
            }
        }
    };
}
