//! Embedded built-in families.
//!
//! The source of truth lives in `tagboard-family/data/*_CODES.json`; the
//! tables below are generated from it at build time.

#![allow(clippy::unreadable_literal)]

use crate::Dictionary;

include!(concat!(env!("OUT_DIR"), "/builtins.rs"));

/// Look up a built-in family by name.
///
/// Matching ignores ASCII case and an optional `tag` prefix, so `36h11`,
/// `tag36h11` and `Tag36h11` all resolve to [`TAG36H11`].
pub fn builtin_dictionary(name: &str) -> Option<Dictionary> {
    let wanted = normalize(name);
    BUILTINS
        .iter()
        .copied()
        .find(|dict| normalize(dict.name) == wanted)
}

/// Names of all built-in families.
pub fn builtin_names() -> Vec<&'static str> {
    BUILTINS.iter().map(|d| d.name).collect()
}

fn normalize(name: &str) -> String {
    let lower = name.trim().to_ascii_lowercase();
    let stripped = lower.strip_prefix("tag").unwrap_or(&lower);
    stripped.trim_start_matches(['_', '-']).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TagFamily;

    #[test]
    fn embedded_tables_have_expected_sizes() {
        assert_eq!(TAG36H11.tag_count(), 587);
        assert_eq!(TAG36H11.bits_per_side(), 6);
        assert_eq!(TAG16H5.tag_count(), 30);
        assert_eq!(TAG16H5.bits_per_side(), 4);
    }

    #[test]
    fn lookup_accepts_prefixed_and_mixed_case_names() {
        for name in ["36h11", "tag36h11", "Tag36h11", "TAG_36H11"] {
            let dict = builtin_dictionary(name).expect("builtin");
            assert_eq!(dict.name, "36h11");
        }
        assert!(builtin_dictionary("25h9").is_none());
    }

    #[test]
    fn embedded_codes_fit_their_bit_count() {
        for dict in BUILTINS {
            let mask = (1u64 << dict.bit_count()) - 1;
            assert!(dict.codes.iter().all(|&c| c & !mask == 0), "{}", dict.name);
        }
    }

    #[test]
    fn embedded_codes_are_unique() {
        for dict in BUILTINS {
            let mut codes = dict.codes.to_vec();
            codes.sort_unstable();
            codes.dedup();
            assert_eq!(codes.len(), dict.codes.len(), "{}", dict.name);
        }
    }

    fn source_codes(raw: &str) -> Vec<u64> {
        let parsed: serde_json::Value = serde_json::from_str(raw).expect("codes json");
        parsed["codes"]
            .as_array()
            .expect("codes array")
            .iter()
            .map(|c| c.as_u64().expect("u64 code"))
            .collect()
    }

    #[test]
    fn decoded_tags_match_upright_source_layout() {
        let tables = [
            (TAG36H11, include_str!("../data/TAG36H11_CODES.json")),
            (TAG16H5, include_str!("../data/TAG16H5_CODES.json")),
        ];
        for (dict, raw) in tables {
            let codes = source_codes(raw);
            let n = dict.bits_per_side();
            assert_eq!(codes.len(), dict.tag_count());
            for (id, code) in codes.into_iter().enumerate() {
                let bits = dict.bit_matrix(id as u32).expect("decodable");
                for r in 0..n {
                    for c in 0..n {
                        let upright = (code >> (r * n + c)) & 1 == 1;
                        assert_eq!(
                            bits.get(r, c),
                            upright,
                            "{} id {id} cell ({r}, {c})",
                            dict.name
                        );
                    }
                }
            }
        }
    }
}
