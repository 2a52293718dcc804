use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use weft::DocumentMeta;

pub fn meta(name: &str) -> DocumentMeta {
    DocumentMeta {
        name: name.to_string(),
        path: PathBuf::from(format!("{}.weft", name)),
        templates_root: PathBuf::from("."),
        registry: Arc::new(HashMap::new()),
        partial: false,
    }
}
