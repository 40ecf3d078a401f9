//! Input-side collaborators: glob/path resolution and path-aware parsing.
//!
//! The core never touches the filesystem; everything here exists to turn CLI
//! arguments into `serde_json::Value` documents, with errors that name the
//! offending file and (for parse failures) the JSON path of the failure
//! point.

use std::path::PathBuf;

use serde_json::Value;

use crate::error::Error;

/// Resolve a mix of literal paths and glob patterns into concrete paths.
/// A pattern that is explicitly a glob but matches nothing is an error.
pub fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>, Error>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();
    for raw in patterns {
        let pattern = raw.as_ref();
        if has_glob_chars(pattern) {
            let entries = glob::glob(pattern).map_err(|source| Error::BadGlob {
                pattern: pattern.to_string(),
                source,
            })?;
            let mut matched_any = false;
            for entry in entries {
                let path = entry.map_err(|source| Error::GlobEntry { source })?;
                matched_any = true;
                out.push(path);
            }
            if !matched_any {
                return Err(Error::EmptyGlob {
                    pattern: pattern.to_string(),
                });
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }
    Ok(out)
}

/// Parse one JSON document with JSON-path context in the error message.
pub fn parse_with_path(source: &str, origin: &str) -> Result<Value, Error> {
    let de = &mut serde_json::Deserializer::from_str(source);
    serde_path_to_error::deserialize::<_, Value>(de).map_err(|err| {
        let path = err.path().to_string();
        Error::Parse {
            path: origin.to_string(),
            message: format!("at JSON path {path}: {}", err.into_inner()),
        }
    })
}

/// Select a subnode by RFC 6901 pointer; a missing target is an error rather
/// than silently inferring/trimming the whole document.
pub fn select_pointer(document: &Value, pointer: &str, origin: &str) -> Result<Value, Error> {
    document
        .pointer(pointer)
        .cloned()
        .ok_or_else(|| Error::PointerMiss {
            pointer: pointer.to_string(),
            path: origin.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn literal_paths_pass_through_unresolved() {
        let paths = resolve_file_path_patterns(["a.json", "dir/b.json"]).expect("resolve");
        assert_eq!(paths, [PathBuf::from("a.json"), PathBuf::from("dir/b.json")]);
    }

    #[test]
    fn parse_errors_carry_origin_and_json_path() {
        let err = parse_with_path(r#"{ "a": [1, false,] }"#, "sample.json")
            .expect_err("trailing comma");
        let rendered = err.to_string();
        assert!(rendered.contains("sample.json"), "{rendered}");
    }

    #[test]
    fn pointer_selects_or_errors() {
        let document = json!({ "data": { "items": [1, 2] } });
        let selected = select_pointer(&document, "/data/items", "x.json").expect("hit");
        assert_eq!(selected, json!([1, 2]));
        let err = select_pointer(&document, "/data/missing", "x.json").expect_err("miss");
        assert!(matches!(err, Error::PointerMiss { .. }));
    }
}
