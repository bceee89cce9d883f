//! Value-object macro for decision makers.
//!
//! - **`decision_maker!`** - Declares a configuration struct and generates its
//!   constructor, defaults, accessors, equality and display
//!
//! # Usage
//!
//! ```
//! use mcda_core::decision_maker;
//! use mcda_core::domain::decision_maker::validators;
//!
//! decision_maker! {
//!     /// Scales every weight by a factor.
//!     pub struct Scaler {
//!         factor: f64 = 2.0 => validators::positive,
//!         label: String = String::from("x2"),
//!     }
//! }
//!
//! let scaler = Scaler::new(3.0, "x3".to_string()).unwrap();
//! assert_eq!(*scaler.factor(), 3.0);
//! assert_eq!(scaler.to_string(), r#"Scaler(factor=3.0, label="x3")"#);
//! assert_eq!(Scaler::default(), Scaler::new(2.0, "x2".into()).unwrap());
//! assert!(Scaler::new(-1.0, "neg".into()).is_err());
//! ```

/// Declares a decision maker configuration struct.
///
/// Each field is written `name: Type = default` with an optional
/// `=> validator`, where the validator is a function
/// `fn(&'static str, &Type) -> Result<(), DataError>` run by `new`.
///
/// Generates:
/// - The struct with `Debug`, `Clone` and `PartialEq` derived
/// - `new(..) -> Result<Self, DataError>` taking every field in order
/// - `Default` from the declared defaults
/// - One read accessor per field
/// - `ValueObject` with the type name and the rendered fields
/// - `Display` as `Name(field=value, ...)`
///
/// The `DecisionMaker` implementation stays hand-written so the capability
/// kind is always declared explicitly.
#[macro_export]
macro_rules! decision_maker {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty = $default:expr $(=> $validator:path)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $field: $ty,
            )*
        }

        impl $name {
            /// Creates a new instance, running every declared validator.
            #[allow(clippy::too_many_arguments)]
            pub fn new($($field: $ty),*) -> ::std::result::Result<Self, $crate::domain::foundation::DataError> {
                $($( $validator(stringify!($field), &$field)?; )?)*
                Ok(Self { $($field),* })
            }

            $(
                pub fn $field(&self) -> &$ty {
                    &self.$field
                }
            )*
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self {
                    $($field: $default),*
                }
            }
        }

        impl $crate::domain::decision_maker::ValueObject for $name {
            const NAME: &'static str = stringify!($name);

            fn fields(&self) -> ::std::vec::Vec<(&'static str, ::std::string::String)> {
                vec![$((stringify!($field), format!("{:?}", self.$field))),*]
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let fields = $crate::domain::decision_maker::ValueObject::fields(self)
                    .into_iter()
                    .map(|(name, value)| format!("{}={}", name, value))
                    .collect::<::std::vec::Vec<_>>();
                write!(
                    f,
                    "{}({})",
                    <Self as $crate::domain::decision_maker::ValueObject>::NAME,
                    fields.join(", ")
                )
            }
        }
    };
}
