use std::cmp::Ordering;
use std::fmt;
use log::trace;

use crate::{Error, Result};

/// Capacity used by [`IndexedPriorityQueue::new`]
const DEFAULT_CAPACITY: usize = 11;

/// Total order used to arrange the heap
pub trait Comparator<E> {
    fn compare(&self, a: &E, b: &E) -> Ordering;
}

/// Orders elements by their `Ord` implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl<E: Ord> Comparator<E> for NaturalOrder {
    fn compare(&self, a: &E, b: &E) -> Ordering {
        a.cmp(b)
    }
}

impl<E, F> Comparator<E> for F
where
    F: Fn(&E, &E) -> Ordering,
{
    fn compare(&self, a: &E, b: &E) -> Ordering {
        self(a, b)
    }
}

/// Stable reference to an element queued in an [`IndexedPriorityQueue`].
///
/// A handle stops resolving once its element leaves the queue, even if the
/// underlying slot is later reused for another element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    slot: usize,
    generation: u64,
}

/// One occupied position of the heap array
#[derive(Debug, Clone)]
struct Node<E> {
    element: E,
    slot: usize,
}

/// Locator entry: where the element owning this slot currently sits
#[derive(Debug, Clone, Copy)]
struct Locator {
    generation: u64,
    position: Option<usize>,
}

/// Array-backed binary min-heap with a locator for O(log n) arbitrary removal.
///
/// Every queued element owns a locator slot that tracks its index in the heap
/// array. [`offer`](Self::offer) hands out a [`Handle`] to that slot, and
/// [`remove`](Self::remove) uses it to find the element without scanning.
/// Elements that compare equal may coexist; the handle disambiguates them.
///
/// Removal moves the last element into the hole, promotes it unconditionally
/// to the root along its ancestor path, and sifts it back down. Promotion only
/// rotates one root-to-leaf path, so the sift-down from the root is the only
/// repair the heap needs.
pub struct IndexedPriorityQueue<E, C = NaturalOrder> {
    heap: Vec<Node<E>>,
    locators: Vec<Locator>,
    free_slots: Vec<usize>,
    comparator: C,
}

impl<E: Ord> IndexedPriorityQueue<E, NaturalOrder> {
    /// Creates an empty queue ordered by `E`'s natural order
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty queue with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }

    /// Builds a queue from `elements` with a single bottom-up heapify
    pub fn from_collection<I>(elements: I) -> (Self, Vec<Handle>)
    where
        I: IntoIterator<Item = E>,
    {
        let elements: Vec<E> = elements.into_iter().collect();
        let mut queue = Self::with_capacity(elements.len());
        let handles = queue.batch_insert(elements);
        (queue, handles)
    }
}

impl<E: Ord> Default for IndexedPriorityQueue<E, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, C> IndexedPriorityQueue<E, C>
where
    C: Comparator<E>,
{
    /// Creates an empty queue ordered by `comparator` instead of `E: Ord`
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_capacity_and_comparator(DEFAULT_CAPACITY, comparator)
    }

    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        IndexedPriorityQueue {
            heap: Vec::with_capacity(capacity),
            locators: Vec::with_capacity(capacity),
            free_slots: Vec::new(),
            comparator,
        }
    }

    /// Returns the number of queued elements
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the size of the backing array
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Inserts `element` and returns the handle that locates it
    pub fn offer(&mut self, element: E) -> Handle {
        self.ensure_capacity(self.heap.len() + 1);
        let handle = self.allocate_slot();
        let index = self.heap.len();
        self.heap.push(Node {
            element,
            slot: handle.slot,
        });
        self.locators[handle.slot].position = Some(index);
        self.bubble_up(index);
        handle
    }

    /// Appends every element, then restores the heap bottom-up in O(n)
    pub fn batch_insert<I>(&mut self, elements: I) -> Vec<Handle>
    where
        I: IntoIterator<Item = E>,
    {
        let elements = elements.into_iter();
        let (lower, _) = elements.size_hint();
        self.ensure_capacity(self.heap.len() + lower);

        let mut handles = Vec::with_capacity(lower);
        for element in elements {
            self.ensure_capacity(self.heap.len() + 1);
            let handle = self.allocate_slot();
            self.locators[handle.slot].position = Some(self.heap.len());
            self.heap.push(Node {
                element,
                slot: handle.slot,
            });
            handles.push(handle);
        }

        if self.heap.len() > 1 {
            for index in (0..=(self.heap.len() - 2) / 2).rev() {
                self.sift_down(index);
            }
        }
        handles
    }

    /// Returns the minimum without removing it
    pub fn peek(&self) -> Option<&E> {
        self.heap.first().map(|node| &node.element)
    }

    /// Removes and returns the minimum
    pub fn poll(&mut self) -> Option<E> {
        if self.heap.is_empty() {
            None
        } else {
            Some(self.remove_at(0))
        }
    }

    /// Removes the element behind `handle`.
    ///
    /// Fails with [`Error::ElementNotFound`] if the handle no longer refers
    /// to a queued element; the heap is left untouched in that case.
    pub fn remove(&mut self, handle: Handle) -> Result<E> {
        let index = self.locate(handle).ok_or(Error::ElementNotFound)?;
        Ok(self.remove_at(index))
    }

    /// Replaces the element behind `handle` by `element` (remove + offer)
    pub fn rekey(&mut self, handle: Handle, element: E) -> Result<Handle> {
        self.remove(handle)?;
        Ok(self.offer(element))
    }

    /// Returns the element behind `handle`, if it is still queued
    pub fn get(&self, handle: Handle) -> Option<&E> {
        self.locate(handle).map(|index| &self.heap[index].element)
    }

    /// Returns true if `handle` refers to a queued element
    pub fn contains(&self, handle: Handle) -> bool {
        self.locate(handle).is_some()
    }

    /// Removes every element; outstanding handles stop resolving
    pub fn clear(&mut self) {
        for node in self.heap.drain(..) {
            let locator = &mut self.locators[node.slot];
            locator.position = None;
            locator.generation += 1;
            self.free_slots.push(node.slot);
        }
    }

    /// Iterates the queued elements in heap-array order
    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.heap.iter().map(|node| &node.element)
    }

    fn locate(&self, handle: Handle) -> Option<usize> {
        self.locators
            .get(handle.slot)
            .filter(|locator| locator.generation == handle.generation)
            .and_then(|locator| locator.position)
    }

    fn allocate_slot(&mut self) -> Handle {
        if let Some(slot) = self.free_slots.pop() {
            Handle {
                slot,
                generation: self.locators[slot].generation,
            }
        } else {
            self.locators.push(Locator {
                generation: 0,
                position: None,
            });
            Handle {
                slot: self.locators.len() - 1,
                generation: 0,
            }
        }
    }

    /// Doubles the backing array until it holds `min_len` elements
    fn ensure_capacity(&mut self, min_len: usize) {
        let capacity = self.heap.capacity();
        if min_len <= capacity {
            return;
        }
        let mut new_capacity = capacity.max(1);
        while new_capacity < min_len {
            new_capacity *= 2;
        }
        trace!("growing heap from {} to {} slots", capacity, new_capacity);
        self.heap.reserve_exact(new_capacity - self.heap.len());
        self.locators
            .reserve(new_capacity.saturating_sub(self.locators.len()));
    }

    fn remove_at(&mut self, index: usize) -> E {
        let last = self.heap.len() - 1;
        let node = self.heap.swap_remove(index);

        if index != last {
            self.locators[self.heap[index].slot].position = Some(index);
            self.force_to_top(index);
            self.sift_down(0);
        }

        let locator = &mut self.locators[node.slot];
        locator.position = None;
        locator.generation += 1;
        self.free_slots.push(node.slot);
        node.element
    }

    /// Swaps the node at `index` with its ancestors until it is the root
    fn force_to_top(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            self.swap_nodes(index, parent);
            index = parent;
        }
    }

    fn bubble_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.less(index, parent) {
                self.swap_nodes(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smaller = if right < len && self.less(right, left) {
                right
            } else {
                left
            };

            if self.less(smaller, index) {
                self.swap_nodes(index, smaller);
                index = smaller;
            } else {
                break;
            }
        }
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.comparator
            .compare(&self.heap[a].element, &self.heap[b].element)
            == Ordering::Less
    }

    fn swap_nodes(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.locators[self.heap[a].slot].position = Some(a);
        self.locators[self.heap[b].slot].position = Some(b);
    }
}

impl<E: fmt::Debug, C> fmt::Debug for IndexedPriorityQueue<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedPriorityQueue")
            .field("heap", &self.heap.iter().map(|n| &n.element).collect::<Vec<_>>())
            .field("free_slots", &self.free_slots.len())
            .finish()
    }
}

impl<E: fmt::Display, C> fmt::Display for IndexedPriorityQueue<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, node) in self.heap.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", node.element)?;
        }
        write!(f, "]")
    }
}
