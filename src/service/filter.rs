//! Call modifiers merged into the next API call.
//!
//! A [`ParameterFilter`] is an immutable value: every `with_*` call returns a
//! new filter and leaves the receiver untouched. Different kinds of modifier
//! stack (a filter may carry both an object id and a mask); setting the same
//! kind again replaces the previous value.

/// Object id, object mask, result limit and result offset for one call.
///
/// # Example
///
/// ```rust
/// use softlayer_api::ParameterFilter;
///
/// let by_id = ParameterFilter::new().with_object_id(12345);
/// let masked = by_id.with_object_mask(["id", "  title "]);
///
/// assert_eq!(by_id.object_id(), Some(12345));
/// assert!(by_id.object_mask().is_none());
///
/// assert_eq!(masked.object_id(), Some(12345));
/// assert_eq!(masked.object_mask(), Some(&["id".to_string(), "title".to_string()][..]));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterFilter {
    object_id: Option<u64>,
    object_mask: Option<Vec<String>>,
    result_limit: Option<u32>,
    result_offset: Option<u32>,
}

impl ParameterFilter {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this filter targeting the object with the given id.
    #[must_use]
    pub fn with_object_id(&self, id: u64) -> Self {
        Self {
            object_id: Some(id),
            ..self.clone()
        }
    }

    /// Returns a copy of this filter with the given object mask.
    ///
    /// Tokens are trimmed and empty tokens are dropped. A mask with no
    /// remaining tokens clears the mask.
    #[must_use]
    pub fn with_object_mask<I, S>(&self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<String> = tokens
            .into_iter()
            .map(|token| token.as_ref().trim().to_string())
            .filter(|token| !token.is_empty())
            .collect();

        Self {
            object_mask: (!tokens.is_empty()).then_some(tokens),
            ..self.clone()
        }
    }

    /// Returns a copy of this filter limiting the number of results.
    #[must_use]
    pub fn with_result_limit(&self, count: u32) -> Self {
        Self {
            result_limit: Some(count),
            ..self.clone()
        }
    }

    /// Returns a copy of this filter skipping the first `count` results.
    #[must_use]
    pub fn with_result_offset(&self, count: u32) -> Self {
        Self {
            result_offset: Some(count),
            ..self.clone()
        }
    }

    /// Returns the object id, if set.
    #[must_use]
    pub const fn object_id(&self) -> Option<u64> {
        self.object_id
    }

    /// Returns the mask tokens, if set.
    #[must_use]
    pub fn object_mask(&self) -> Option<&[String]> {
        self.object_mask.as_deref()
    }

    /// Returns the result limit, if set.
    #[must_use]
    pub const fn result_limit(&self) -> Option<u32> {
        self.result_limit
    }

    /// Returns the result offset, if set.
    #[must_use]
    pub const fn result_offset(&self) -> Option<u32> {
        self.result_offset
    }

    /// Returns `true` if no modifier is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.object_id.is_none()
            && self.object_mask.is_none()
            && self.result_limit.is_none()
            && self.result_offset.is_none()
    }
}
