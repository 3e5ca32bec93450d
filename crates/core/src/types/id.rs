//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_i32()`
/// - `From<i32>` and `Into<i32>` implementations
/// - `sqlx` `Type`, `Encode`, and `Decode` implementations (with `postgres` feature)
///
/// # Example
///
/// ```rust
/// # use goprac_core::define_id;
/// define_id!(LocationId);
/// define_id!(InterviewId);
///
/// let location_id = LocationId::new(1);
/// let interview_id = InterviewId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: LocationId = interview_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        #[cfg(feature = "postgres")]
        impl ::sqlx::Type<::sqlx::Postgres> for $name {
            fn type_info() -> ::sqlx::postgres::PgTypeInfo {
                <i32 as ::sqlx::Type<::sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &::sqlx::postgres::PgTypeInfo) -> bool {
                <i32 as ::sqlx::Type<::sqlx::Postgres>>::compatible(ty)
            }
        }

        #[cfg(feature = "postgres")]
        impl<'r> ::sqlx::Decode<'r, ::sqlx::Postgres> for $name {
            fn decode(
                value: ::sqlx::postgres::PgValueRef<'r>,
            ) -> ::core::result::Result<Self, ::sqlx::error::BoxDynError> {
                let id = <i32 as ::sqlx::Decode<::sqlx::Postgres>>::decode(value)?;
                Ok(Self(id))
            }
        }

        #[cfg(feature = "postgres")]
        impl ::sqlx::Encode<'_, ::sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut ::sqlx::postgres::PgArgumentBuffer,
            ) -> ::std::result::Result<::sqlx::encode::IsNull, ::sqlx::error::BoxDynError> {
                <i32 as ::sqlx::Encode<::sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }
    };
}

// Define standard entity IDs
define_id!(LocationId);
define_id!(UserId);
define_id!(InterviewId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = LocationId::new(42);
        assert_eq!(id.as_i32(), 42);
        assert_eq!(i32::from(id), 42);
        assert_eq!(LocationId::from(42), id);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(InterviewId::new(7).to_string(), "7");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = LocationId::new(3);
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");

        let parsed: LocationId = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_ids_are_distinct_types() {
        // Same underlying value, different types; comparable only within a type
        assert_eq!(UserId::new(1), UserId::new(1));
        assert_ne!(UserId::new(1), UserId::new(2));
    }
}
