//! Element transfer policies.
//!
//! A [`TransferPolicy`] decides how a bounded container copies, moves, assigns
//! and retires elements over ranges of pre-existing slots. The sequence
//! algorithms only ever talk to the policy, so an element kind with a cheaper
//! bulk primitive (raw bytes, plain-old-data records) can swap in a single
//! memory operation for what would otherwise be one assignment per element.
//!
//! Two policies ship with the crate:
//!
//! - [`CloneTransfer`] - the default, works for any `Clone + Default` element.
//! - [`PodTransfer`] - bulk byte operations for [`bytemuck::Pod`] elements.

use core::mem;
use core::ops::Range;

use bytemuck::Pod;

/// Strategy for moving elements between slots.
///
/// Every operation is total over slots that already hold live values; no
/// operation constructs into uninitialised memory. Ranges handed in by the
/// containers are always in bounds and `dst.len() == src.len()` for the
/// two-slice operations.
///
/// # Examples
///
/// ```rust
/// use fixed_containers::generic::transfer::{CloneTransfer, TransferPolicy};
///
/// let mut slots = [1, 2, 3, 0, 0];
/// // Shift `[0, 3)` right by two, the way an insert at the front opens a gap.
/// <CloneTransfer as TransferPolicy<i32>>::move_within(&mut slots, 0..3, 2);
/// assert_eq!(&slots[2..], &[1, 2, 3]);
/// ```
pub trait TransferPolicy<T> {
    /// Produces copies of `src` in `dst`, leaving `src` untouched.
    fn copy(dst: &mut [T], src: &[T]);

    /// Moves `slots[src]` to start at `dest` within one buffer. The ranges may
    /// overlap. Source slots not overwritten are left valid but unspecified.
    fn move_within(slots: &mut [T], src: Range<usize>, dest: usize);

    /// Moves every element of `src` into `dst`, leaving `src` valid but
    /// unspecified.
    fn move_into(dst: &mut [T], src: &mut [T]);

    /// Overwrites one live slot.
    fn assign(slot: &mut T, value: T) {
        *slot = value;
    }

    /// Overwrites every slot in `dst` with `value`.
    fn fill(dst: &mut [T], value: &T);

    /// Returns slots that just left the active range to a neutral state.
    fn destroy(slots: &mut [T]);
}

/// Per-element policy built on `Clone` and `Default`.
///
/// Moves use [`mem::take`], so moved-from slots hold `T::default()`, and
/// `destroy` resets slots to `T::default()` which drops whatever resources the
/// retired values owned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CloneTransfer;

impl<T: Clone + Default> TransferPolicy<T> for CloneTransfer {
    fn copy(dst: &mut [T], src: &[T]) {
        dst.clone_from_slice(src);
    }

    fn move_within(slots: &mut [T], src: Range<usize>, dest: usize) {
        let count = src.len();
        if dest <= src.start {
            for i in 0..count {
                let value = mem::take(&mut slots[src.start + i]);
                slots[dest + i] = value;
            }
        } else {
            for i in (0..count).rev() {
                let value = mem::take(&mut slots[src.start + i]);
                slots[dest + i] = value;
            }
        }
    }

    fn move_into(dst: &mut [T], src: &mut [T]) {
        for (slot, value) in dst.iter_mut().zip(src.iter_mut()) {
            *slot = mem::take(value);
        }
    }

    fn fill(dst: &mut [T], value: &T) {
        for slot in dst {
            slot.clone_from(value);
        }
    }

    fn destroy(slots: &mut [T]) {
        for slot in slots {
            *slot = T::default();
        }
    }
}

/// Bulk policy for plain-old-data elements.
///
/// Copies and moves are single byte copies over the slot range (a move is the
/// same as a copy for trivially relocatable data), and `destroy` zero-fills.
///
/// # Examples
///
/// ```rust
/// use fixed_containers::generic::fixed_vec::FixedVec;
/// use fixed_containers::generic::transfer::PodTransfer;
///
/// let mut bytes: FixedVec<u8, 16, PodTransfer> = FixedVec::from_slice(&b"hello"[..]).unwrap();
/// bytes.insert_slice(0, b">> ").unwrap();
/// assert_eq!(bytes.as_slice(), b">> hello");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PodTransfer;

impl<T: Pod> TransferPolicy<T> for PodTransfer {
    fn copy(dst: &mut [T], src: &[T]) {
        let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst);
        dst_bytes.copy_from_slice(bytemuck::cast_slice(src));
    }

    fn move_within(slots: &mut [T], src: Range<usize>, dest: usize) {
        slots.copy_within(src, dest);
    }

    fn move_into(dst: &mut [T], src: &mut [T]) {
        <Self as TransferPolicy<T>>::copy(dst, src);
    }

    fn fill(dst: &mut [T], value: &T) {
        dst.fill(*value);
    }

    fn destroy(slots: &mut [T]) {
        bytemuck::fill_zeroes(slots);
    }
}
