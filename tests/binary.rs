use std::path::Path;

use weft::{deserialize_tokens, serialize_tokens, tokenize};

#[test]
fn cache_roundtrip_preserves_the_store() {
  let input = "@partial-markup outer {\n@embedded-code {\nx{}\n}\n}\n";
  let store = tokenize(input, Path::new("doc.weft")).unwrap();
  let bytes = serialize_tokens(&store).unwrap();
  let back = deserialize_tokens(&bytes).unwrap();
  assert_eq!(store, back);
}

#[test]
fn cache_bytes_are_stable_for_the_same_input() {
  let input = "@documentation note\ntext\n";
  let store = tokenize(input, Path::new("doc.weft")).unwrap();
  assert_eq!(
    serialize_tokens(&store).unwrap(),
    serialize_tokens(&store).unwrap()
  );
}

#[test]
fn truncated_cache_is_rejected() {
  assert!(deserialize_tokens(b"WE").is_err());
  assert!(deserialize_tokens(b"WEFT").is_err());
}
