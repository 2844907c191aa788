//! Path joining into capacity-bounded buffers.

use crate::error::ArchError;

/// Separator inserted between joined segments.
pub const SEPARATOR: char = '/';

/// Whether `c` separates path segments. Archive paths use either convention.
pub fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Join `segment` onto `base` in place, never letting `base` grow past
/// `capacity` bytes.
///
/// An empty `base` becomes `segment`. Otherwise exactly one separator is
/// placed between the two; a trailing separator already on `base` is reused.
/// If the result would not fit, `base` is left untouched.
pub fn join(base: &mut String, segment: &str, capacity: usize) -> Result<(), ArchError> {
    if capacity == 0 {
        return Err(ArchError::InvalidParameter(
            "path capacity must be non-zero".to_string(),
        ));
    }

    let needs_separator = !base.is_empty() && !base.ends_with(is_separator);
    let required = base.len() + usize::from(needs_separator) + segment.len();
    if required > capacity {
        return Err(ArchError::CapacityExceeded { required, capacity });
    }

    if needs_separator {
        base.push(SEPARATOR);
    }
    base.push_str(segment);
    Ok(())
}

/// Text path with a fixed maximum length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathBuffer {
    text: String,
    capacity: usize,
}

impl PathBuffer {
    pub fn new(capacity: usize) -> Result<Self, ArchError> {
        if capacity == 0 {
            return Err(ArchError::InvalidParameter(
                "path capacity must be non-zero".to_string(),
            ));
        }
        let mut text = String::new();
        text.try_reserve_exact(capacity)
            .map_err(|_| ArchError::Allocation {
                requested: capacity,
            })?;
        Ok(Self { text, capacity })
    }

    pub fn with_initial(initial: &str, capacity: usize) -> Result<Self, ArchError> {
        let mut buffer = Self::new(capacity)?;
        buffer.join(initial)?;
        Ok(buffer)
    }

    pub fn join(&mut self, segment: &str) -> Result<&mut Self, ArchError> {
        join(&mut self.text, segment, self.capacity)?;
        Ok(self)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for PathBuffer {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_join_into_empty_base() {
        let mut base = String::new();
        join(&mut base, "x", 16).unwrap();
        assert_eq!(base, "x");
    }

    #[test]
    fn test_join_inserts_single_separator() {
        let mut base = "a".to_string();
        join(&mut base, "b", 16).unwrap();
        assert_eq!(base, "a/b");

        let mut base = "a/".to_string();
        join(&mut base, "b", 16).unwrap();
        assert_eq!(base, "a/b");

        let mut base = "a\\".to_string();
        join(&mut base, "b", 16).unwrap();
        assert_eq!(base, "a\\b");
    }

    #[test]
    fn test_join_rejects_zero_capacity() {
        let mut base = "a".to_string();
        let err = join(&mut base, "b", 0).unwrap_err();
        assert!(matches!(err, ArchError::InvalidParameter(_)));
        assert_eq!(base, "a");
    }

    #[test]
    fn test_join_overflow_leaves_base_untouched() {
        let mut base = "abc".to_string();
        let err = join(&mut base, "def", 6).unwrap_err();
        match err {
            ArchError::CapacityExceeded { required, capacity } => {
                assert_eq!(required, 7);
                assert_eq!(capacity, 6);
            }
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(base, "abc");

        join(&mut base, "def", 7).unwrap();
        assert_eq!(base, "abc/def");
    }

    #[test]
    fn test_path_buffer_chain() {
        let mut path = PathBuffer::with_initial("root", 32).unwrap();
        path.join("sub").unwrap().join("file.txt").unwrap();
        assert_eq!(path.as_str(), "root/sub/file.txt");
        assert_eq!(path.capacity(), 32);
        assert!(PathBuffer::new(0).is_err());
    }

    proptest! {
        #[test]
        fn prop_join_never_exceeds_capacity(
            base in "[a-z/]{0,12}",
            segment in "[a-z]{0,12}",
            capacity in 1usize..32,
        ) {
            let mut joined = base.clone();
            match join(&mut joined, &segment, capacity) {
                Ok(()) => {
                    prop_assert!(joined.len() <= capacity);
                    prop_assert!(joined.ends_with(segment.as_str()));
                }
                Err(_) => prop_assert_eq!(joined, base),
            }
        }

        #[test]
        fn prop_join_adds_no_doubled_separator(
            base in "[a-z]{1,8}/?",
            segment in "[a-z]{1,8}",
        ) {
            let mut joined = base.clone();
            join(&mut joined, &segment, 64).unwrap();
            prop_assert!(!joined.contains("//"));
            prop_assert_eq!(joined, format!("{}/{}", base.trim_end_matches('/'), segment));
        }
    }
}
