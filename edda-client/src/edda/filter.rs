//! Client-side re-application of the ID/name/owner filters the cache service does not support

/// True when `values` is empty (no filter for this field) or contains `value`
///
/// An absent field never matches a non-empty filter
pub fn matches<S: AsRef<str>>(values: &[S], value: Option<&str>) -> bool {
  if values.is_empty() {
    return true;
  }

  match value {
    Some(value) => values.iter().any(|v| v.as_ref() == value),
    None => false,
  }
}

/// True when at least one filter list restricts the results
pub fn should_filter<S: AsRef<str>>(filters: &[&[S]]) -> bool {
  filters.iter().any(|values| !values.is_empty())
}

#[cfg(test)]
mod tests {
  use rstest::*;

  use super::*;

  #[rstest]
  #[case(&[], Some("i-1"), true)]
  #[case(&[], None, true)]
  #[case(&["i-1", "i-2"], Some("i-2"), true)]
  #[case(&["i-1", "i-2"], Some("i-3"), false)]
  #[case(&["i-1"], None, false)]
  #[case(&["i-1"], Some("I-1"), false)]
  fn matches_test(#[case] values: &[&str], #[case] value: Option<&str>, #[case] expected: bool) {
    assert_eq!(matches(values, value), expected);
  }

  #[test]
  fn it_keeps_exactly_matching_elements() {
    let ids = vec!["vol-2".to_string(), "vol-4".to_string()];
    let volumes = ["vol-1", "vol-2", "vol-3", "vol-4"];

    let kept: Vec<_> = volumes.iter().filter(|v| matches(&ids, Some(**v))).collect();
    assert_eq!(kept, [&"vol-2", &"vol-4"]);
  }

  #[test]
  fn it_combines_dimensions_with_and() {
    let owners = ["123456789012"];
    let ids = ["ami-1"];
    let images = [
      ("ami-1", "123456789012"),
      ("ami-1", "210987654321"),
      ("ami-2", "123456789012"),
    ];

    let kept: Vec<_> = images
      .iter()
      .filter(|(id, owner)| matches(&owners, Some(*owner)) && matches(&ids, Some(*id)))
      .collect();
    assert_eq!(kept, [&("ami-1", "123456789012")]);
  }

  #[test]
  fn it_filters_only_when_a_list_is_set() {
    let empty: &[&str] = &[];
    assert!(!should_filter(&[empty, empty]));
    assert!(should_filter(&[empty, &["sg-1"]]));
  }
}
