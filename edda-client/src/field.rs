use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A typed attribute of a cached document
///
/// Cache documents are serialized AWS beans: an attribute may be missing, an explicit `null`, or a value, and each is
/// written back the way it was read. Use with `#[serde(skip_serializing_if = "Field::is_absent")]` on a container
/// that has `#[serde(default)]`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Field<T> {
  /// Not in the document
  #[default]
  Absent,
  /// Present as `null`
  Null,
  Value(T),
}

impl<T> Field<T> {
  pub fn is_absent(&self) -> bool {
    matches!(self, Self::Absent)
  }

  pub fn as_ref(&self) -> Option<&T> {
    match self {
      Self::Value(value) => Some(value),
      _ => None,
    }
  }

  pub fn as_mut(&mut self) -> Option<&mut T> {
    match self {
      Self::Value(value) => Some(value),
      _ => None,
    }
  }

  pub fn into_option(self) -> Option<T> {
    match self {
      Self::Value(value) => Some(value),
      _ => None,
    }
  }
}

impl<T: Deref> Field<T> {
  pub fn as_deref(&self) -> Option<&T::Target> {
    self.as_ref().map(Deref::deref)
  }
}

impl<T> Field<Vec<T>> {
  /// Elements of a list attribute; none when it is missing or `null`
  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.as_deref().unwrap_or_default().iter()
  }
}

/// AWS SDK shapes do not distinguish a missing attribute from a `null` one
impl<T> From<Option<T>> for Field<T> {
  fn from(value: Option<T>) -> Self {
    value.map_or(Self::Absent, Self::Value)
  }
}

impl<T: Serialize> Serialize for Field<T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Self::Value(value) => value.serialize(serializer),
      _ => serializer.serialize_none(),
    }
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Ok(Option::<T>::deserialize(deserializer)?.map_or(Self::Null, Self::Value))
  }
}
