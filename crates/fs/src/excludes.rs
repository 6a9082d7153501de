use crate::record::File;

/// Root-relative path prefixes whose files are skipped.
///
/// Matching is a case-sensitive literal prefix test against
/// [`File::relative_path`], which always uses `/` as separator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnorePrefixes {
    prefixes: Vec<String>,
}

impl IgnorePrefixes {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        IgnorePrefixes {
            prefixes: prefixes.into_iter().map(|p| normalize(p.into())).collect(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.prefixes
    }

    #[inline]
    #[must_use]
    pub fn is_ignored(&self, file: &File) -> bool {
        if self.prefixes.is_empty() {
            return false;
        }
        let relative = file.relative_path();
        self.prefixes
            .iter()
            .any(|prefix| relative.starts_with(prefix.as_str()))
    }
}

// Windows users type `\`; relative paths are rendered with `/`.
#[cfg(windows)]
fn normalize(prefix: String) -> String {
    prefix.replace('\\', "/")
}

#[cfg(not(windows))]
fn normalize(prefix: String) -> String {
    prefix
}

#[cfg(test)]
#[path = "excludes_tests.rs"]
mod tests;
