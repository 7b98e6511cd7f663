//! Shared value-object behaviour for path types.
//!
//! Each path type exposes `as_str()` and a validating `new(&str)`; this macro
//! derives equality, hashing, ordering, formatting, parsing and serde from them
//! using the comparison policy in [`super::natural`].

macro_rules! path_value {
    ($ty:ident) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::paths::natural::eq_ignore_case(self.as_str(), other.as_str())
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $crate::paths::natural::hash_ignore_case(self.as_str(), state)
            }
        }

        impl PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $ty {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                $crate::paths::natural::natural_cmp(self.as_str(), other.as_str())
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($ty)).field(&self.as_str()).finish()
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::errors::PathError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                $ty::new(s)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = $crate::errors::PathError;

            fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
                $ty::new(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = $crate::errors::PathError;

            fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
                $ty::new(&s)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> String {
                value.as_str().to_string()
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                $ty::new(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use path_value;
