/// Errors returned by the checked accessors of an [`AvlBiMap`](crate::AvlBiMap).
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// [`at_left`](crate::AvlBiMap::at_left) was given a left key that is not in the map.
    #[error("left key not found in bimap")]
    LeftKeyNotFound,
    /// [`at_right`](crate::AvlBiMap::at_right) was given a right key that is not in the map.
    #[error("right key not found in bimap")]
    RightKeyNotFound,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn messages_name_the_missing_side() {
        assert_eq!(Error::LeftKeyNotFound.to_string(), "left key not found in bimap");
        assert_eq!(Error::RightKeyNotFound.to_string(), "right key not found in bimap");
    }
}
