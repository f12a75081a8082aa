//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. The backend assigns
//! opaque UUIDs to every resource, so the wrappers carry a [`uuid::Uuid`].

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `uuid::Uuid` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_uuid()`
/// - `From<Uuid>` and `Into<Uuid>` implementations
/// - `Display` and `FromStr` for route/CLI parameters
///
/// # Example
///
/// ```rust
/// # use pawmart_core::define_id;
/// define_id!(UserId);
/// define_id!(PetId);
///
/// let user_id: UserId = "0f8fad5b-d9cb-469f-a165-70867728950e".parse().unwrap();
///
/// // These are different types, so this won't compile:
/// // let _: UserId = PetId::new(user_id.as_uuid());
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
        pub struct $name(::uuid::Uuid);

        impl $name {
            /// Create a new ID from a UUID value.
            #[must_use]
            pub const fn new(id: ::uuid::Uuid) -> Self {
                Self(id)
            }

            /// Generate a fresh random ID.
            #[must_use]
            pub fn random() -> Self {
                Self(::uuid::Uuid::new_v4())
            }

            /// Get the underlying UUID value.
            #[must_use]
            pub const fn as_uuid(&self) -> ::uuid::Uuid {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<::uuid::Uuid> for $name {
            fn from(id: ::uuid::Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for ::uuid::Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::uuid::Error;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.parse::<::uuid::Uuid>().map(Self)
            }
        }
    };
}

// Define standard entity IDs
define_id!(UserId);
define_id!(ProductId);
define_id!(PetId);
define_id!(ServiceId);
define_id!(AppointmentId);
define_id!(RecordId);

/// Errors that can occur when parsing a [`ProductKey`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid product key: expected \"new\" or a UUID, got {0:?}")]
pub struct ProductKeyError(pub String);

/// A product route key: either an existing product ID or the `"new"`
/// sentinel the admin console uses for a product that does not exist yet.
///
/// Looking up [`ProductKey::New`] never touches the backend - callers
/// synthesize an empty draft instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductKey {
    /// An existing product.
    Existing(ProductId),
    /// A product being created; has no backend identity yet.
    New,
}

impl ProductKey {
    /// Returns `true` for the `"new"` sentinel.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        matches!(self, Self::New)
    }

    /// Returns the product ID for an existing product.
    #[must_use]
    pub const fn id(&self) -> Option<ProductId> {
        match self {
            Self::Existing(id) => Some(*id),
            Self::New => None,
        }
    }
}

impl core::fmt::Display for ProductKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Existing(id) => write!(f, "{id}"),
            Self::New => write!(f, "new"),
        }
    }
}

impl core::str::FromStr for ProductKey {
    type Err = ProductKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("new") {
            return Ok(Self::New);
        }
        s.parse::<ProductId>()
            .map(Self::Existing)
            .map_err(|_| ProductKeyError(s.to_owned()))
    }
}
