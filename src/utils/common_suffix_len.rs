use core::ops::{Index, Range};

/// Given two lookups and ranges calculates the length of the common suffix.
///
/// Counterpart of [`super::common_prefix_len::common_prefix_len`], walking
/// both ranges backwards.
pub fn common_suffix_len<Old, New>(
    old: &Old,
    old_range: Range<usize>,
    new: &New,
    new_range: Range<usize>,
) -> usize
where
    Old: Index<usize> + ?Sized,
    New: Index<usize> + ?Sized,
    New::Output: PartialEq<Old::Output>,
{
    new_range
        .rev()
        .zip(old_range.rev())
        .take_while(|x| new[x.0] == old[x.1])
        .count()
}
