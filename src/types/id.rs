// ABOUTME: Phantom-typed identifiers for compile-time type safety.
// ABOUTME: Prevents accidental swapping of image and chat IDs.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Marker types for phantom type parameters.
/// Using empty enums prevents instantiation and requires no trait bounds.
pub enum ImageMarker {}
pub enum ChatMarker {}

/// A type-safe identifier that prevents accidental mixing of different ID types.
///
/// Using phantom types, this ensures you can't accidentally pass an `ImageId`
/// where a `ChatId` is expected, catching bugs at compile time.
#[must_use = "IDs reference resources and should not be ignored"]
pub struct Id<T> {
    value: String,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(value: String) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_inner(self) -> String {
        self.value
    }
}

impl Id<ImageMarker> {
    /// Build an image identity from the raw engine identifier.
    ///
    /// Engines report identities as `sha256:<digest>`; the algorithm prefix is
    /// stripped so the identity stays stable across listing and prune APIs,
    /// which disagree about including it.
    pub fn from_engine(raw: &str) -> Self {
        Self::new(raw.strip_prefix("sha256:").unwrap_or(raw).to_string())
    }

    /// The first 12 characters of the identity, as shown in `docker images`.
    pub fn short(&self) -> &str {
        self.value.get(..12).unwrap_or(&self.value)
    }
}

// Manual trait implementations that don't require T to implement the trait.
// This is necessary because T is only used as a phantom type marker.

impl<T> std::fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Id").field("value", &self.value).finish()
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> std::fmt::Display for Id<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::new(value))
    }
}

pub type ImageId = Id<ImageMarker>;
pub type ChatId = Id<ChatMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_engine_strips_digest_prefix() {
        let id = ImageId::from_engine("sha256:4bcff63911fcb4448bd4fdacec207030997caf25e9bea4045fa6c8c44de311d1");
        assert!(id.as_str().starts_with("4bcff63911fc"));
        assert_eq!(id.short(), "4bcff63911fc");
    }

    #[test]
    fn from_engine_keeps_unprefixed_values() {
        let id = ImageId::from_engine("4bcff63911fc");
        assert_eq!(id.as_str(), "4bcff63911fc");
    }

    #[test]
    fn short_handles_values_under_twelve_chars() {
        let id = ImageId::new("abc".to_string());
        assert_eq!(id.short(), "abc");
    }
}
