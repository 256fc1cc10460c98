//! Sentinel-based index trait for compact node links.
//!
//! Links between nodes are stored as a plain unsigned integer with a reserved
//! sentinel value (`Idx::MAX`) meaning "no neighbor", instead of
//! `Option<Idx>`. This keeps nodes small and link updates branch-cheap.

/// A copyable slot index with a reserved sentinel "none" value.
///
/// Implemented for the unsigned integer types. The sentinel is always the
/// type's `MAX`, which the arena never hands out as a real slot index.
///
/// # Example
///
/// ```
/// use slotlist::Index;
///
/// let idx: u32 = 5;
/// assert!(idx.is_some());
/// assert!(u32::NONE.is_none());
/// ```
pub trait Index: Copy + Eq {
    /// Sentinel value representing "no index".
    const NONE: Self;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is not the sentinel value.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Returns the index as a `usize`, for indexing into slot storage.
    fn as_usize(self) -> usize;

    /// Creates an index from a `usize` slot position.
    fn from_usize(val: usize) -> Self;
}

macro_rules! impl_index {
    ($($ty:ty),*) => {
        $(
            impl Index for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as Self
                }
            }
        )*
    };
}

impl_index!(u8, u16, u32, u64, usize);
