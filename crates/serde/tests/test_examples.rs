use meridian_fhir::r4::Resource;
use meridian_serde::{Codec, json_differences};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "R4")]
#[test]
fn test_r4_json_examples() {
    let examples_dir = json_examples_dir("R4");
    let checked = test_json_examples_in_dir(&examples_dir, &Codec::lenient());
    assert!(checked > 0, "no examples found in {}", examples_dir.display());
}

/// Every fixture outside the lenient-only list uses modelled members only.
#[cfg(feature = "R4")]
#[test]
fn test_r4_json_examples_strict() {
    let examples_dir = json_examples_dir("R4");
    let codec = Codec::strict();

    for path in json_files(&examples_dir) {
        let filename = file_name(&path);
        if let Some(reason) = should_skip_file(&filename, LENIENT_ONLY) {
            println!("Skipping strict check for {}: {}", filename, reason);
            continue;
        }
        let content = fs::read_to_string(&path).unwrap();
        if let Err(err) = codec.decode_str::<Resource>(&content) {
            panic!("{} failed strict decoding: {}", filename, err);
        }
    }
}

#[cfg(feature = "R4")]
#[test]
fn test_lenient_only_examples_fail_strict_decoding() {
    let examples_dir = json_examples_dir("R4");
    for (filename, _) in LENIENT_ONLY {
        let content = fs::read_to_string(examples_dir.join(filename)).unwrap();
        let err = Codec::strict()
            .decode_str::<Resource>(&content)
            .expect_err("strict decoding should reject unmodelled members");
        println!("{}: {}", filename, err);
    }
}

const LENIENT_ONLY: &[(&str, &str)] = &[(
    "medicationrequest-example.json",
    "dosageInstruction uses the unmodelled Dosage type",
)];

fn tests_data_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("serde crate has parent directory")
        .join("fhir")
        .join("tests")
        .join("data")
}

fn json_examples_dir(version: &str) -> PathBuf {
    tests_data_root().join("json").join(version)
}

fn should_skip_file(
    filename: &str,
    skip_entries: &[(&'static str, &'static str)],
) -> Option<&'static str> {
    for (pattern, reason) in skip_entries {
        if let Some(prefix) = pattern.strip_suffix('*') {
            if filename.starts_with(prefix) {
                return Some(*reason);
            }
        } else if filename == *pattern {
            return Some(*reason);
        }
    }
    None
}

fn json_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

fn file_name(path: &Path) -> String {
    path.file_name().unwrap().to_string_lossy().to_string()
}

/// Decodes, re-encodes and compares every example; returns how many were checked.
fn test_json_examples_in_dir(dir: &Path, codec: &Codec) -> usize {
    let mut checked = 0;
    let mut failures = Vec::new();

    for path in json_files(dir) {
        let filename = file_name(&path);
        println!("Processing file: {}", path.display());

        let content = fs::read_to_string(&path).unwrap();
        let json_value: Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(err) => {
                failures.push(format!("{}: invalid JSON: {}", filename, err));
                continue;
            }
        };

        let resource: Resource = match codec.decode(&json_value) {
            Ok(resource) => resource,
            Err(err) => {
                failures.push(format!("{}: {}", filename, err));
                continue;
            }
        };
        println!("Resource type: {}", resource.resource_type());

        let reencoded = codec.encode(&resource);
        let differences = json_differences(&json_value, &reencoded);
        if !differences.is_empty() {
            println!(
                "Found {} differences between original and re-encoded JSON:",
                differences.len()
            );
            for difference in &differences {
                println!("  Path: {}", difference.path);
                println!("    Original: {:?}", difference.original);
                println!("    Re-encoded: {:?}", difference.reencoded);
            }
            failures.push(format!("{}: {} differences", filename, differences.len()));
            continue;
        }

        // A second pass over the re-encoded tree must be a fixed point.
        let again: Resource = codec.decode(&reencoded).unwrap();
        assert_eq!(again, resource, "{} is not stable across re-decoding", filename);
        checked += 1;
    }

    assert!(
        failures.is_empty(),
        "{} example(s) failed:\n{}",
        failures.len(),
        failures.join("\n")
    );
    checked
}
