//! Closed string enums with a forward-compatible escape hatch.
//!
//! Servers add new enum members faster than clients are regenerated, so every
//! enum carries an `Unknown(String)` variant instead of failing to
//! deserialize. A record holding an `Unknown` member reports itself through
//! [`Schema::has_invalid_enum`](crate::Schema::has_invalid_enum) and is kept
//! in its unparsed form.
//!
//! ```ignore
//! string_enum! {
//!     /// Users resource type.
//!     pub enum UsersType {
//!         Users => "users",
//!     }
//! }
//!
//! assert!(UsersType::from("users").is_valid());
//! assert!(!UsersType::from("bogus").is_valid());
//! assert!(UsersType::from_value("bogus").is_err());
//! ```

/// Implemented by every enum produced with [`string_enum!`].
pub trait StringEnum: Sized {
    /// Type name used in error messages.
    const NAME: &'static str;
    /// Every wire value the client knows about.
    const ALLOWED_VALUES: &'static [&'static str];

    fn as_str(&self) -> &str;

    /// Linear membership check against [`Self::ALLOWED_VALUES`].
    fn is_valid(&self) -> bool {
        Self::ALLOWED_VALUES.contains(&self.as_str())
    }
}

/// Reports whether a field holds an enum member outside its allowed set.
///
/// Implemented for every [`string_enum!`] type and for the containers models
/// wrap them in, so `Schema::has_invalid_enum` reads as a plain `||` chain.
pub trait EnumCheck {
    fn is_invalid(&self) -> bool;
}

impl<E: EnumCheck> EnumCheck for Option<E> {
    fn is_invalid(&self) -> bool {
        self.as_ref().is_some_and(EnumCheck::is_invalid)
    }
}

impl<E: EnumCheck> EnumCheck for crate::Nullable<E> {
    fn is_invalid(&self) -> bool {
        self.get().is_some_and(EnumCheck::is_invalid)
    }
}

impl<E: EnumCheck> EnumCheck for Vec<E> {
    fn is_invalid(&self) -> bool {
        self.iter().any(EnumCheck::is_invalid)
    }
}

/// Generates a string-backed enum with an `Unknown(String)` fallback.
///
/// The first listed member is the `Default`.
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// Value outside the allowed set, kept verbatim.
            Unknown(String),
        }

        impl $name {
            /// Parses `value`, failing when it is outside the allowed set.
            pub fn from_value(value: &str) -> $crate::Result<Self> {
                let parsed = Self::from(value);
                if $crate::StringEnum::is_valid(&parsed) {
                    Ok(parsed)
                } else {
                    Err($crate::Error::InvalidEnumValue {
                        enum_name: <Self as $crate::StringEnum>::NAME,
                        value: value.to_string(),
                        allowed: <Self as $crate::StringEnum>::ALLOWED_VALUES,
                    })
                }
            }

            pub fn as_str(&self) -> &str {
                $crate::StringEnum::as_str(self)
            }

            pub fn is_valid(&self) -> bool {
                $crate::StringEnum::is_valid(self)
            }
        }

        impl $crate::StringEnum for $name {
            const NAME: &'static str = stringify!($name);
            const ALLOWED_VALUES: &'static [&'static str] = &[$($value),+];

            fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $value,)+
                    $name::Unknown(other) => other.as_str(),
                }
            }
        }

        impl $crate::EnumCheck for $name {
            fn is_invalid(&self) -> bool {
                !$crate::StringEnum::is_valid(self)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::from(<Self as $crate::StringEnum>::ALLOWED_VALUES[0])
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($value => $name::$variant,)+
                    other => $name::Unknown(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($value => $name::$variant,)+
                    _ => $name::Unknown(value),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Unknown(other) => other,
                    known => $crate::StringEnum::as_str(&known).to_string(),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::StringEnum::as_str(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::{EnumCheck, StringEnum};
    use crate::{Error, Nullable};

    string_enum! {
        /// Test fixture.
        pub enum Colour {
            Red => "red",
            DarkBlue => "dark_blue",
        }
    }

    #[test]
    fn known_and_unknown_values() {
        assert_eq!(Colour::from("red"), Colour::Red);
        assert_eq!(Colour::from("dark_blue").as_str(), "dark_blue");
        let other = Colour::from("Red");
        assert_eq!(other, Colour::Unknown("Red".into()));
        assert!(!other.is_valid());
        assert_eq!(other.to_string(), "Red");
    }

    #[test]
    fn containers_report_invalid_members() {
        assert!(!Some(Colour::Red).is_invalid());
        assert!(Some(Colour::from("teal")).is_invalid());
        assert!(!Option::<Colour>::None.is_invalid());
        assert!(!Nullable::<Colour>::Null.is_invalid());
        assert!(Nullable::new(Colour::from("teal")).is_invalid());
        assert!(vec![Colour::Red, Colour::from("teal")].is_invalid());
    }

    #[test]
    fn from_value_enumerates_allowed_values() {
        assert_eq!(Colour::from_value("red").unwrap(), Colour::Red);
        let err = Colour::from_value("green").unwrap_err();
        match &err {
            Error::InvalidEnumValue {
                enum_name,
                value,
                allowed,
            } => {
                assert_eq!(*enum_name, "Colour");
                assert_eq!(value, "green");
                assert_eq!(*allowed, Colour::ALLOWED_VALUES);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("red, dark_blue"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let decoded: Colour = serde_json::from_str("\"violet\"").unwrap();
        assert_eq!(decoded, Colour::Unknown("violet".into()));
        assert_eq!(serde_json::to_string(&decoded).unwrap(), "\"violet\"");
        assert_eq!(serde_json::to_string(&Colour::DarkBlue).unwrap(), "\"dark_blue\"");
        assert_eq!(Colour::default(), Colour::Red);
    }
}
