use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Url;

use crate::error::{Error, Result};

/// Characters that would terminate or corrupt a matrix parameter
const MATRIX: &AsciiSet = &CONTROLS
  .add(b' ')
  .add(b'"')
  .add(b'#')
  .add(b'%')
  .add(b';')
  .add(b'=')
  .add(b'?');

/// Path segments additionally may not contain a separator
const SEGMENT: &AsciiSet = &MATRIX.add(b'/');

/// A cache service query: `/api/v2/{collection}[;_expand][;{field}={value}]...`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
  collection: String,
  expand: bool,
  matrix: Vec<(String, String)>,
}

impl Query {
  /// Query a collection mirrored from AWS, i.e. `aws/instances`
  pub fn aws(resource: &str) -> Self {
    Self {
      collection: format!("aws/{resource}"),
      expand: false,
      matrix: Vec::new(),
    }
  }

  /// Query a derived view, i.e. `view/loadBalancerInstances`
  pub fn view(resource: &str) -> Self {
    Self {
      collection: format!("view/{resource}"),
      expand: false,
      matrix: Vec::new(),
    }
  }

  /// Append a path segment, such as the name of a single resource
  pub fn segment(mut self, value: &str) -> Self {
    self.collection.push('/');
    self.collection.extend(utf8_percent_encode(value, SEGMENT));
    self
  }

  /// Return full documents instead of resource identifiers
  pub fn expand(mut self) -> Self {
    self.expand = true;
    self
  }

  /// Restrict the results server-side to documents where `field` equals `value`
  pub fn matrix(mut self, field: &str, value: &str) -> Self {
    self.matrix.push((field.to_owned(), value.to_owned()));
    self
  }

  /// Fully qualified URL for this query against the given base URL
  pub fn url(&self, base_url: &str) -> Result<String> {
    let mut url = format!("{}/api/v2/{}", base_url.trim_end_matches('/'), self.collection);

    if self.expand {
      url.push_str(";_expand");
    }

    for (field, value) in &self.matrix {
      url.push(';');
      url.push_str(field);
      url.push('=');
      url.extend(utf8_percent_encode(value, MATRIX));
    }

    Url::parse(&url).map_err(|err| Error::Config(format!("invalid cache service url [{url}]: {err}")))?;

    Ok(url)
  }
}

/// Request values that may be left unset
pub trait Unset {
  fn is_unset(&self) -> bool;
}

impl<T> Unset for Vec<T> {
  fn is_unset(&self) -> bool {
    self.is_empty()
  }
}

impl<T> Unset for Option<T> {
  fn is_unset(&self) -> bool {
    self.is_none()
  }
}

/// Fail when a request field the cache service cannot honour has been supplied
///
/// Dropping the field silently would return results that look complete but are not
pub fn validate_empty<V: Unset>(field: &'static str, value: &V) -> Result<()> {
  match value.is_unset() {
    true => Ok(()),
    false => Err(Error::UnsupportedField(field)),
  }
}

/// Fail when a field required to build the query is absent or blank
pub fn validate_not_empty<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str> {
  match value.map(str::trim) {
    Some(value) if !value.is_empty() => Ok(value),
    _ => Err(Error::MissingField(field)),
  }
}
