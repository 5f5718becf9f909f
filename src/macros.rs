/// Creates enums with string values. The syntax for this is like specifying an enum with numeric
/// values, just with strings instead of numbers.
/// Every created enum has a `Custom(String)` variant which is used to represent values giphy
/// accepts but which are not (yet) covered by the enum, e.g. a newly supported language.
///
/// The generated enum implements [`std::fmt::Display`] (which is the wire representation),
/// [`From<String>`] / [`From<&str>`] (checks if the given string matches a known value; if not
/// `<name>::Custom(value)`) and [`serde::Serialize`] as well as [`serde::Deserialize`].
macro_rules! enum_values {
    ($(#[$attribute:meta])* $v:vis enum $name:ident { $($(#[$field_attribute:meta])* $field:ident = $value:literal)* }) => {
        $(
            #[$attribute]
        )*
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        $v enum $name {
            $(
                $(
                    #[$field_attribute]
                )*
                $field
            ),*,
            Custom(String)
        }

        impl $name {
            /// All known (non-custom) values.
            pub fn all() -> Vec<$name> {
                vec![
                    $(
                        $name::$field
                    ),*
                ]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let value = match self {
                    $(
                        $name::$field => $value
                    ),*,
                    $name::Custom(raw) => raw.as_str()
                };
                write!(f, "{}", value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $(
                        $value => $name::$field
                    ),*,
                    _ => $name::Custom(value)
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
                where D: serde::Deserializer<'de>
            {
                Ok(Self::from(String::deserialize(deserializer)?))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where S: serde::ser::Serializer {
                serializer.serialize_str(self.to_string().as_str())
            }
        }
    };
}

pub(crate) use enum_values;
