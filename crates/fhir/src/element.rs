/// Generic element container supporting FHIR's extension mechanism.
///
/// In FHIR, primitive elements can carry an `id` and `extension` list next to
/// their value. In JSON the value sits under the member name and the metadata
/// under the same name prefixed with `_`:
///
/// ```json
/// {
///   "birthDate": "1970-03-30",
///   "_birthDate": { "id": "bd-1", "extension": [ ... ] }
/// }
/// ```
///
/// # Type Parameters
///
/// * `V` - The value type (e.g., `String`, `i32`, `PreciseDecimal`)
/// * `E` - The extension type (the model's `Extension` struct)
///
/// # Forms
///
/// An element is one of:
/// 1. **Primitive value**: only `value` is set.
/// 2. **Extended primitive**: `value` plus `id` and/or `extension`.
/// 3. **Extension-only**: `id` and/or `extension` without a value.
///
/// An element with none of the three is empty and is never written.
///
/// # Examples
///
/// ```rust
/// use meridian_fhir::{Element, r4::Extension};
///
/// let simple: Element<String, Extension> = Element::from("Hello World".to_string());
/// assert_eq!(simple.value.as_deref(), Some("Hello World"));
///
/// let annotated = Element::<String, Extension>::new("Hello".to_string()).with_id("text-1");
/// assert_eq!(annotated.id.as_deref(), Some("text-1"));
///
/// let empty: Element<bool, Extension> = Element::default();
/// assert!(empty.is_empty());
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Element<V, E> {
    /// Optional element identifier for referencing within the resource
    pub id: Option<String>,
    /// Optional extensions providing additional metadata
    pub extension: Option<Vec<E>>,
    /// The actual primitive value
    pub value: Option<V>,
}

impl<V, E> Default for Element<V, E> {
    fn default() -> Self {
        Self {
            id: None,
            extension: None,
            value: None,
        }
    }
}

impl<V, E> Element<V, E> {
    /// Creates an element holding only a value.
    pub fn new(value: V) -> Self {
        Self {
            id: None,
            extension: None,
            value: Some(value),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_extension(mut self, extension: Vec<E>) -> Self {
        self.extension = Some(extension);
        self
    }

    /// Returns `true` if no value, id, or extensions are present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && !self.has_metadata()
    }

    /// Returns `true` when the element needs a `_` companion on the wire.
    ///
    /// An empty extension list does not count; it is not written.
    #[inline]
    pub fn has_metadata(&self) -> bool {
        self.id.is_some() || self.extension.as_ref().is_some_and(|ext| !ext.is_empty())
    }
}

impl<V, E> From<V> for Element<V, E> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}
