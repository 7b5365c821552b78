//! Type-level names for the two orderings of an [`AvlBiMap`](crate::AvlBiMap).

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Left {}
    impl Sealed for super::Right {}
}

/// One of the two orderings maintained by an [`AvlBiMap`](crate::AvlBiMap).
///
/// This trait is sealed; [`Left`] and [`Right`] are its only implementors.
pub trait Side: sealed::Sealed + 'static {
    /// The other ordering.
    type Opposite: Side<Opposite = Self>;

    #[doc(hidden)]
    const INDEX: usize;
}

/// The ordering by left key.
#[derive(Debug)]
pub enum Left {}

/// The ordering by right key.
#[derive(Debug)]
pub enum Right {}

impl Side for Left {
    type Opposite = Right;
    const INDEX: usize = crate::raw::LEFT;
}

impl Side for Right {
    type Opposite = Left;
    const INDEX: usize = crate::raw::RIGHT;
}
