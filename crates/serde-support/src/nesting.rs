//! Nesting check run over raw JSON text before it is parsed.
//!
//! The decoder parses without `serde_json`'s fixed recursion limit, so the
//! limit has to come from [`DecodeOptions::max_depth`] instead. Every JSON
//! object counts as one level, matching [`DecodeContext::descend`] for
//! modelled content, and the error carries the same pointer the decoder
//! would report. Arrays do not count as levels, but the total number of open
//! containers is capped at `2 * max_depth + 1`, which is as deep as arrays of
//! objects can go within the object limit.
//!
//! Malformed text is not reported here; the parser reports it afterwards.
//!
//! [`DecodeContext::descend`]: crate::DecodeContext::descend

use crate::context::DecodeOptions;
use crate::error::{DecodeError, DecodeErrorKind};

enum Frame {
    Object { key: Option<String>, expect_key: bool },
    Array { index: usize },
}

/// Fails with `DepthExceeded` when `input` nests deeper than `options` allow.
pub fn check_nesting(input: &[u8], options: &DecodeOptions) -> Result<(), DecodeError> {
    let max = options.max_depth;
    let max_containers = max.saturating_mul(2).saturating_add(1);
    let mut frames: Vec<Frame> = Vec::new();
    let mut objects = 0usize;
    let mut pos = 0;

    while pos < input.len() {
        match input[pos] {
            b'"' => {
                let Some(end) = string_end(input, pos) else {
                    return Ok(());
                };
                if let Some(Frame::Object { key, expect_key }) = frames.last_mut()
                    && *expect_key
                {
                    let Some(text) = member_name(&input[pos..=end]) else {
                        return Ok(());
                    };
                    *key = Some(text);
                    *expect_key = false;
                }
                pos = end;
            }
            open @ (b'{' | b'[') => {
                let too_deep = open == b'{' && objects >= max;
                if too_deep || frames.len() >= max_containers {
                    return Err(DecodeError::new(
                        DecodeErrorKind::DepthExceeded { max },
                        pointer(&frames),
                    ));
                }
                if open == b'{' {
                    objects += 1;
                    frames.push(Frame::Object {
                        key: None,
                        expect_key: true,
                    });
                } else {
                    frames.push(Frame::Array { index: 0 });
                }
            }
            b'}' | b']' => match frames.pop() {
                Some(Frame::Object { .. }) => objects -= 1,
                Some(Frame::Array { .. }) => {}
                None => return Ok(()),
            },
            b',' => match frames.last_mut() {
                Some(Frame::Object { expect_key, .. }) => *expect_key = true,
                Some(Frame::Array { index }) => *index += 1,
                None => return Ok(()),
            },
            _ => {}
        }
        pos += 1;
    }
    Ok(())
}

/// Index of the quote closing the string that opens at `start`.
fn string_end(input: &[u8], start: usize) -> Option<usize> {
    let mut pos = start + 1;
    while pos < input.len() {
        match input[pos] {
            b'\\' => pos += 2,
            b'"' => return Some(pos),
            _ => pos += 1,
        }
    }
    None
}

/// Decodes a quoted member name, escapes included.
fn member_name(quoted: &[u8]) -> Option<String> {
    let inner = &quoted[1..quoted.len() - 1];
    if inner.contains(&b'\\') {
        serde_json::from_slice(quoted).ok()
    } else {
        std::str::from_utf8(inner).ok().map(str::to_string)
    }
}

fn pointer(frames: &[Frame]) -> String {
    let mut out = String::new();
    for frame in frames {
        match frame {
            Frame::Object { key: Some(key), .. } => {
                out.push('/');
                out.push_str(&key.replace('~', "~0").replace('/', "~1"));
            }
            Frame::Object { key: None, .. } => {}
            Frame::Array { index } => {
                out.push('/');
                out.push_str(&index.to_string());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_objects(levels: usize) -> String {
        let mut text = String::from("1");
        for _ in 0..levels {
            text = format!(r#"{{"a/b":{text}}}"#);
        }
        text
    }

    #[test]
    fn objects_within_limit_pass() {
        let options = DecodeOptions::default().with_max_depth(3);
        let input = nested_objects(3);
        assert_eq!(check_nesting(input.as_bytes(), &options), Ok(()));
    }

    #[test]
    fn deepest_object_is_located() {
        let options = DecodeOptions::default().with_max_depth(3);
        let input = nested_objects(4);
        let err = check_nesting(input.as_bytes(), &options).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::DepthExceeded { max: 3 });
        assert_eq!(err.path, "/a~1b/a~1b/a~1b");
    }

    #[test]
    fn array_indexes_and_later_members_are_tracked() {
        let options = DecodeOptions::default().with_max_depth(2);
        let input = r#"{"first": 1, "list": [{}, {"x": "{[", "deep": {}}]}"#;
        let err = check_nesting(input.as_bytes(), &options).unwrap_err();
        assert_eq!(err.path, "/list/1/deep");
    }

    #[test]
    fn escaped_member_names_are_decoded() {
        let options = DecodeOptions::default().with_max_depth(1);
        let input = r#"{"say \"hi\"!": {}}"#;
        let err = check_nesting(input.as_bytes(), &options).unwrap_err();
        assert_eq!(err.path, "/say \"hi\"!");
    }

    #[test]
    fn bare_arrays_are_capped() {
        let options = DecodeOptions::default().with_max_depth(2);
        assert_eq!(check_nesting(b"[[[[[1]]]]]", &options), Ok(()));

        let err = check_nesting(b"[[[[[[1]]]]]]", &options).unwrap_err();
        assert_eq!(err.path, "/0/0/0/0/0");
    }

    #[test]
    fn malformed_text_is_left_to_the_parser() {
        let options = DecodeOptions::default();
        assert_eq!(check_nesting(b"]]}", &options), Ok(()));
        assert_eq!(check_nesting(br#"{"open"#, &options), Ok(()));
    }
}
