use core::pin::Pin;

pub(crate) fn iter_pin_mut<T>(slice: Pin<&mut [T]>) -> impl Iterator<Item = Pin<&mut T>> {
    // SAFETY: `std` _could_ make this unsound if it were to decide Pin's
    // invariants aren't required to transmit through slices. Otherwise this has
    // the same safety as a normal field pin projection.
    unsafe { slice.get_unchecked_mut() }
        .iter_mut()
        .map(|t| unsafe { Pin::new_unchecked(t) })
}

pub(crate) fn pin_project_array<T, const N: usize>(array: Pin<&mut [T; N]>) -> [Pin<&mut T>; N] {
    // SAFETY: same reasoning as `iter_pin_mut`, applied to fixed-length arrays.
    unsafe { array.get_unchecked_mut() }
        .each_mut()
        .map(|t| unsafe { Pin::new_unchecked(t) })
}
