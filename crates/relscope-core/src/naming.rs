//! Identifier normalization and key-naming convention helpers.
//!
//! Shared by the profiler (primary-key detection) and the naming signal.
//! All comparisons happen on cleaned names: lowercase, non-alphanumerics
//! collapsed to single underscores.

use regex::Regex;
use std::sync::OnceLock;

/// Normalize a column/table name: lowercase, non-alnum → underscore,
/// collapse runs, trim.
pub fn clean_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_underscore = true; // trims leading separators
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_underscore = false;
        } else if !last_underscore {
            out.push('_');
            last_underscore = true;
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}

/// `"document_id"` → `"document"`.
pub fn id_stem(cleaned: &str) -> &str {
    cleaned.strip_suffix("_id").unwrap_or(cleaned)
}

/// Strip the common key suffixes (`_id`, `_key`, `_code`, `_num`, `_no`)
/// from a cleaned name.
pub fn key_stem(cleaned: &str) -> &str {
    for suffix in ["_id", "_key", "_code", "_num", "_no"] {
        if let Some(stem) = cleaned.strip_suffix(suffix) {
            return stem;
        }
    }
    cleaned
}

/// `"customers"` → `"customer"`. Plural handling is deliberately shallow;
/// Jaro-Winkler matching covers irregular plurals elsewhere.
pub fn singularize(cleaned: &str) -> &str {
    if cleaned.len() > 3 {
        if let Some(s) = cleaned.strip_suffix("ies") {
            // categories → categor(ies); the stem comparison below is
            // prefix-based, so dropping the suffix is enough
            return s;
        }
    }
    if cleaned.len() > 1 {
        if let Some(s) = cleaned.strip_suffix('s') {
            return s;
        }
    }
    cleaned
}

fn identifier_suffix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(_id|_key|_no|_num|_code)$").expect("invalid regex"))
}

/// True when a cleaned name resembles an identifier/key column name.
pub fn looks_like_identifier(cleaned: &str) -> bool {
    cleaned == "id" || identifier_suffix_regex().is_match(cleaned)
}

/// True when `col` (cleaned) is a primary-key name for table `table`
/// (cleaned): `id`, `{table}_id`, or an `_id` column whose stem prefixes
/// the table name (pluralization-tolerant).
pub fn is_pk_name(col: &str, table: &str) -> bool {
    if col == "id" {
        return true;
    }
    let table_singular = singularize(table);
    if col == format!("{table}_id") || col == format!("{table_singular}_id") {
        return true;
    }
    col.ends_with("_id") && table.starts_with(id_stem(col))
}

/// True when `col` (cleaned) names a foreign key into table `table`
/// (cleaned): `{table}_id`, `{table}_key`, or a key-suffixed column whose
/// stem prefixes the table name (pluralization-tolerant).
pub fn is_fk_name_for(col: &str, table: &str) -> bool {
    let table_singular = singularize(table);
    for t in [table, table_singular] {
        if col == format!("{t}_id") || col == format!("{t}_key") {
            return true;
        }
    }
    if col.ends_with("_id") || col.ends_with("_key") {
        let stem = key_stem(col);
        return !stem.is_empty() && (table.starts_with(stem) || table_singular.starts_with(stem));
    }
    false
}
