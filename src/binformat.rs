use crate::lexer::TokenStore;
use std::io::Read;

const MAGIC: &[u8] = b"WEFT";
const VERSION: u16 = 1;

/// Serialize a scanned token store as a binary cache: magic, version,
/// bincode payload.
pub fn serialize_tokens(store: &TokenStore) -> Result<Vec<u8>, String> {
  let payload = bincode::serialize(store).map_err(|e| e.to_string())?;
  let mut out = Vec::with_capacity(MAGIC.len() + 2 + payload.len());
  out.extend_from_slice(MAGIC);
  out.extend_from_slice(&VERSION.to_le_bytes());
  out.extend_from_slice(&payload);
  Ok(out)
}

pub fn deserialize_tokens(mut bytes: &[u8]) -> Result<TokenStore, String> {
  let mut magic = [0u8; 4];
  bytes.read_exact(&mut magic).map_err(|e| e.to_string())?;
  if &magic != MAGIC {
    return Err("invalid magic (not a weft token cache)".into());
  }
  let mut ver = [0u8; 2];
  bytes.read_exact(&mut ver).map_err(|e| e.to_string())?;
  let version = u16::from_le_bytes(ver);
  if version != VERSION {
    return Err(format!("unsupported format version: {}", version));
  }
  let store = bincode::deserialize(bytes).map_err(|e| e.to_string())?;
  Ok(store)
}
