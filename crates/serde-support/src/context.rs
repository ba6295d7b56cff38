//! Decode options and the per-call decode context.
//!
//! A [`DecodeContext`] is created for every top-level decode call and dropped
//! when it returns. It tracks the JSON-pointer path of the node being decoded
//! and the current nesting depth, so errors can be located and adversarial
//! nesting fails fast instead of exhausting the stack.

use crate::error::{DecodeError, DecodeErrorKind};

/// Default maximum nesting depth of complex elements, resources and extensions.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options recognised by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Reject unrecognised members instead of preserving them.
    pub strict: bool,
    /// Maximum nesting depth before decoding fails with `DepthExceeded`.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecodeOptions {
    /// Lenient options: unrecognised members are kept for re-encoding.
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Strict options: unrecognised members are decode errors.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[derive(Debug, Clone)]
enum PathSegment {
    Key(String),
    Index(usize),
}

/// Mutable state threaded through one decode call.
#[derive(Debug)]
pub struct DecodeContext<'o> {
    options: &'o DecodeOptions,
    path: Vec<PathSegment>,
    depth: usize,
}

impl<'o> DecodeContext<'o> {
    pub fn new(options: &'o DecodeOptions) -> Self {
        Self {
            options,
            path: Vec::new(),
            depth: 0,
        }
    }

    pub fn options(&self) -> &DecodeOptions {
        self.options
    }

    pub fn is_strict(&self) -> bool {
        self.options.strict
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Runs `f` with `key` appended to the current path.
    pub fn at_key<R>(&mut self, key: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        self.path.push(PathSegment::Key(key.to_string()));
        let out = f(self);
        self.path.pop();
        out
    }

    /// Runs `f` with `index` appended to the current path.
    pub fn at_index<R>(&mut self, index: usize, f: impl FnOnce(&mut Self) -> R) -> R {
        self.path.push(PathSegment::Index(index));
        let out = f(self);
        self.path.pop();
        out
    }

    /// Runs `f` one nesting level deeper, failing once `max_depth` is exceeded.
    pub fn descend<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, DecodeError>,
    ) -> Result<T, DecodeError> {
        if self.depth >= self.options.max_depth {
            return Err(self.error(DecodeErrorKind::DepthExceeded {
                max: self.options.max_depth,
            }));
        }
        self.depth += 1;
        let out = f(self);
        self.depth -= 1;
        out
    }

    /// The current location as a JSON pointer.
    pub fn pointer(&self) -> String {
        let mut out = String::new();
        for segment in &self.path {
            out.push('/');
            match segment {
                PathSegment::Key(key) => {
                    for ch in key.chars() {
                        match ch {
                            '~' => out.push_str("~0"),
                            '/' => out.push_str("~1"),
                            other => out.push(other),
                        }
                    }
                }
                PathSegment::Index(index) => out.push_str(&index.to_string()),
            }
        }
        out
    }

    /// Builds an error located at the current path.
    pub fn error(&self, kind: DecodeErrorKind) -> DecodeError {
        DecodeError::new(kind, self.pointer())
    }

    /// Builds an error located at `key` below the current path.
    pub fn error_at(&mut self, key: &str, kind: DecodeErrorKind) -> DecodeError {
        self.at_key(key, |ctx| ctx.error(kind))
    }
}
