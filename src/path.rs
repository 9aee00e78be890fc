//! Path segmentation shared by both request kinds.

/// The `/`-separated parts of a URI path, consumed from the end.
///
/// A path such as `/image-service/abcd1234/info.json` splits into
/// `["", "image-service", "abcd1234", "info.json"]`; the leading empty part is
/// kept so that the remaining prefix joins back with its leading slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PathSegments<'a> {
    segments: Vec<&'a str>,
}

impl<'a> PathSegments<'a> {
    pub(crate) fn split(path: &'a str) -> Self {
        Self {
            segments: path.split('/').collect(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }

    /// Removes and returns the last segment, or `""` once exhausted.
    pub(crate) fn pop(&mut self) -> &'a str {
        self.segments.pop().unwrap_or_default()
    }

    /// Joins whatever precedes the identifier, if anything does.
    pub(crate) fn into_prefix(self) -> Option<String> {
        (self.segments.len() > 1).then(|| self.segments.join("/"))
    }
}
