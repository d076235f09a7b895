//! Third-party stores and policies plugged into the containers.

use core::ops::Range;

use fixed_containers::prelude::*;

/// Element owning an external handle that must be released on erase.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
struct Handle {
    id: u32,
    open: bool,
}

impl Handle {
    fn open(id: u32) -> Self {
        Self { id, open: true }
    }
}

/// Closes handles on destroy and leaves moved-from slots closed.
struct HandlePolicy;

impl TransferPolicy<Handle> for HandlePolicy {
    fn copy(dst: &mut [Handle], src: &[Handle]) {
        dst.clone_from_slice(src);
    }

    fn move_within(slots: &mut [Handle], src: Range<usize>, dest: usize) {
        <CloneTransfer as TransferPolicy<Handle>>::move_within(slots, src, dest);
    }

    fn move_into(dst: &mut [Handle], src: &mut [Handle]) {
        <CloneTransfer as TransferPolicy<Handle>>::move_into(dst, src);
    }

    fn fill(dst: &mut [Handle], value: &Handle) {
        dst.fill(value.clone());
    }

    fn destroy(slots: &mut [Handle]) {
        for slot in slots {
            slot.open = false;
        }
    }
}

/// Store with a capacity unrelated to its array length.
#[derive(Default)]
struct HalfStore {
    words: [u16; 8],
}

impl Storage for HalfStore {
    type Item = u16;

    const CAPACITY: usize = 4;

    fn slots(&self) -> &[u16] {
        &self.words[..4]
    }

    fn slots_mut(&mut self) -> &mut [u16] {
        &mut self.words[..4]
    }
}

#[test]
fn erase_closes_retired_handles() {
    let mut handles = FixedVec::<Handle, 4, HandlePolicy>::new();
    for id in 1..=4 {
        handles.push_back(Handle::open(id)).unwrap();
    }

    handles.erase(1..3);
    assert_eq!(handles.as_slice(), &[Handle::open(1), Handle::open(4)]);
    assert!(handles.store().slots()[2..].iter().all(|h| !h.open));

    let popped = handles.pop_back().unwrap();
    assert_eq!(popped, Handle::open(4));
    assert!(!handles.store().slots()[1].open);
}

#[test]
fn custom_store_bounds_the_sequence() {
    let mut list: BasicFixedVec<HalfStore, PodTransfer> = BasicFixedVec::new();
    assert_eq!(list.capacity(), 4);
    list.try_extend([1, 2, 3, 4]).unwrap();
    assert!(list.is_full());
    assert_eq!(
        list.push_back(5),
        Err(CollectionError::CapacityExceeded {
            requested: 5,
            capacity: 4
        })
    );

    let copy = FixedVec::<u16, 10>::try_from_fixed(&list).unwrap();
    assert_eq!(copy, list);
}

#[test]
fn sorted_set_over_custom_policy() {
    let mut set: SortedUnique<ArrayStore<Handle, 3>, Identity, NaturalOrder, HandlePolicy> =
        SortedUnique::new();
    set.insert(Handle::open(9)).unwrap();
    set.insert(Handle::open(2)).unwrap();
    assert_eq!(
        set.insert(Handle::open(9)).unwrap(),
        Insertion::AlreadyPresent(1)
    );

    let ids: Vec<_> = set.iter().map(|h| h.id).collect();
    assert_eq!(ids, vec![2, 9]);

    assert_eq!(set.erase(&Handle::open(2)), Some(Handle::open(2)));
    assert!(set.as_sequence().store().slots()[1..].iter().all(|h| !h.open));
}
