use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of a non-paginated read
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResult<T> {
  /// When the request was issued
  pub issued_at: DateTime<Utc>,

  pub result: T,
}

impl<T> ServiceResult<T> {
  pub fn new(issued_at: DateTime<Utc>, result: T) -> Self {
    Self { issued_at, result }
  }

  pub fn into_result(self) -> T {
    self.result
  }
}

/// Outcome of a read whose AWS counterpart is paginated
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedServiceResult<T> {
  /// When the request was issued
  pub issued_at: DateTime<Utc>,

  /// Token for the next page; `None` when there are no further pages
  pub next_token: Option<String>,

  pub result: T,
}

impl<T> PaginatedServiceResult<T> {
  pub fn new(issued_at: DateTime<Utc>, next_token: Option<String>, result: T) -> Self {
    Self {
      issued_at,
      next_token,
      result,
    }
  }

  /// The cache service returns whole collections, so its results are always the last page
  pub fn last_page(issued_at: DateTime<Utc>, result: T) -> Self {
    Self::new(issued_at, None, result)
  }

  pub fn has_next_page(&self) -> bool {
    self.next_token.is_some()
  }

  pub fn into_result(self) -> T {
    self.result
  }
}
