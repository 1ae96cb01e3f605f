//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. The domain set has the expected count
//! 2. All domain byte strings are unique
//! 3. All domains are null-terminated and follow `CRAFTER::*::V1\0`
//! 4. `canonical_hash` is plain SHA-256 over `domain || data`
//! 5. No raw `CRAFTER::` domain literals in production source outside `hash.rs`

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crafter_kernel::proof::hash::{canonical_hash, ALL_DOMAINS, DOMAIN_PLAN};
use sha2::{Digest, Sha256};

// ---------------------------------------------------------------------------
// 1. Count
// ---------------------------------------------------------------------------

/// ACCEPTANCE: HASH-DOMAIN-LOCK
#[test]
fn hash_domain_set_count() {
    assert_eq!(
        ALL_DOMAINS.len(),
        5,
        "expected 5 domains; if you added a new domain, update this count"
    );
}

// ---------------------------------------------------------------------------
// 2. Unique bytes
// ---------------------------------------------------------------------------

/// ACCEPTANCE: HASH-DOMAIN-LOCK
#[test]
fn hash_domain_all_unique_bytes() {
    let mut seen = BTreeSet::new();
    for domain in ALL_DOMAINS {
        assert!(
            seen.insert(domain),
            "duplicate domain bytes: {}",
            String::from_utf8_lossy(domain)
        );
    }
}

// ---------------------------------------------------------------------------
// 3. Wire format
// ---------------------------------------------------------------------------

/// ACCEPTANCE: HASH-DOMAIN-LOCK
#[test]
fn hash_domain_naming_convention() {
    for domain in ALL_DOMAINS {
        let (last, body) = domain.split_last().expect("non-empty domain");
        assert_eq!(*last, 0, "domain not null-terminated");
        let body = std::str::from_utf8(body).expect("domain is ASCII");
        assert!(!body.contains('\0'), "interior null in {body}");
        assert!(body.starts_with("CRAFTER::"), "bad prefix: {body}");
        assert!(body.ends_with("::V1"), "bad suffix: {body}");
        let middle = &body["CRAFTER::".len()..body.len() - "::V1".len()];
        assert!(
            !middle.is_empty()
                && middle
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c == '_'),
            "bad domain name: {body}"
        );
    }
}

// ---------------------------------------------------------------------------
// 4. Hash construction
// ---------------------------------------------------------------------------

/// ACCEPTANCE: HASH-DOMAIN-LOCK
#[test]
fn canonical_hash_is_sha256_of_domain_then_data() {
    let data = br#"{"steps":[]}"#;
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_PLAN);
    hasher.update(data);
    let expected = format!("sha256:{}", hex::encode(hasher.finalize()));

    let actual = canonical_hash(DOMAIN_PLAN, data);
    assert_eq!(actual.as_str(), expected);
    assert_eq!(actual.algorithm(), "sha256");
    assert_eq!(actual.hex_digest().len(), 64);
}

/// ACCEPTANCE: HASH-DOMAIN-LOCK
#[test]
fn distinct_domains_separate_identical_data() {
    let digests: BTreeSet<String> = ALL_DOMAINS
        .iter()
        .map(|d| canonical_hash(d, b"same bytes").as_str().to_string())
        .collect();
    assert_eq!(digests.len(), ALL_DOMAINS.len());
}

// ---------------------------------------------------------------------------
// 5. No stray domain literals
// ---------------------------------------------------------------------------

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_path_buf()
}

fn rs_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            out.push(path);
        }
    }
}

/// ACCEPTANCE: HASH-DOMAIN-LOCK
#[test]
fn no_domain_literals_outside_hash_module() {
    let root = workspace_root();
    let mut files = Vec::new();
    for krate in ["kernel", "search", "harness"] {
        rs_files(&root.join(krate).join("src"), &mut files);
    }
    assert!(!files.is_empty(), "no sources found under {}", root.display());

    let mut violations = Vec::new();
    for path in files {
        if path.ends_with("proof/hash.rs") {
            continue;
        }
        let content = fs::read_to_string(&path).expect("readable source");
        for (line_no, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with("//") {
                continue;
            }
            if trimmed.contains("b\"CRAFTER::") {
                violations.push(format!("{}:{}: {trimmed}", path.display(), line_no + 1));
            }
        }
    }
    assert!(violations.is_empty(), "raw domain literals:\n{}", violations.join("\n"));
}
