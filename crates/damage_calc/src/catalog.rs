//! Name-keyed catalogs shared by abilities and items.

/// Lowercase alphanumeric form of a display name ("Choice Band" -> "choiceband").
pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Declares a fieldless enum whose variants carry a display name.
///
/// Generates `ALL`, `name()`, `from_name()` (exact name through a phf map,
/// then a loose id match), `Display`, `FromStr`, and serde impls that go
/// through the display name.
macro_rules! catalog {
    (
        $(#[$meta:meta])*
        $vis:vis enum $ty:ident via $map:ident, $err:ident {
            $($variant:ident => $name:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $ty {
            $($variant,)*
        }

        static $map: ::phf::Map<&'static str, $ty> = ::phf::phf_map! {
            $($name => $ty::$variant,)*
        };

        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant,)*];

            pub const fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)*
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                if let Some(found) = $map.get(name.trim()) {
                    return Some(*found);
                }
                let id = $crate::catalog::to_id(name);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| $crate::catalog::to_id(v.name()) == id)
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::error::CalcError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::from_name(s).ok_or_else(|| $crate::error::CalcError::$err(s.to_string()))
            }
        }

        impl ::serde::Serialize for $ty {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::std::result::Result<Self, D::Error> {
                let name = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                name.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use catalog;
