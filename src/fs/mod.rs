//! Filesystem helpers: document load/dump, best-effort delete, digests.

mod files;
mod hash;

pub use files::{delete, dump_json, dump_jsonl, dump_yaml, load_json, load_jsonl, load_yaml};
pub use hash::{sha256_file, sha256_hex};
