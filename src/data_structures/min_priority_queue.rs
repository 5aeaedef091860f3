use log::{debug, trace};

use crate::{Error, Result};

/// A generic priority queue backed by a binary min-heap
///
/// Each element is paired with a non-negative `i32` priority; the element
/// with the lowest priority value is always at the front. The heap is stored
/// as a vector of `(priority, element)` pairs interpreted as an implicit
/// binary tree: the parent of index `i` lives at `(i - 1) / 2`, its children
/// at `2i + 1` and `2i + 2`.
///
/// Duplicate elements and duplicate priorities are both permitted. No
/// ordering is guaranteed among entries of equal priority.
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<E> {
    /// The min-heap of paired priority and element, stored in a vector
    heap: Vec<(i32, E)>,
}

impl<E> MinPriorityQueue<E> {
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinPriorityQueue { heap: Vec::new() }
    }

    /// Creates a new empty priority queue with space for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinPriorityQueue {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Adds `element` to the queue with priority `priority`.
    ///
    /// Negative priorities are rejected: the call leaves the queue untouched
    /// and returns without signalling an error. Use [`try_insert`] for a
    /// checked variant.
    ///
    /// The new entry is appended at the next leaf position and bubbled up
    /// toward the root while it is strictly smaller than its parent. O(log n).
    ///
    /// [`try_insert`]: MinPriorityQueue::try_insert
    pub fn insert(&mut self, priority: i32, element: E) {
        if priority < 0 {
            debug!("ignoring insert with negative priority {}", priority);
            return;
        }

        self.heap.push((priority, element));
        self.bubble_up(self.heap.len() - 1);
    }

    /// Checked variant of [`insert`] that reports a negative priority as
    /// [`Error::NegativePriority`] instead of silently dropping the entry.
    ///
    /// [`insert`]: MinPriorityQueue::insert
    pub fn try_insert(&mut self, priority: i32, element: E) -> Result<()> {
        if priority < 0 {
            return Err(Error::NegativePriority(priority));
        }

        self.heap.push((priority, element));
        self.bubble_up(self.heap.len() - 1);
        Ok(())
    }

    /// Inserts every `(priority, element)` pair from `entries`, in iteration
    /// order.
    ///
    /// Equivalent to calling [`insert`] once per pair, so entries with a
    /// negative priority are skipped. This is n sequential inserts
    /// (O(n log n)), not a bulk heapify.
    ///
    /// [`insert`]: MinPriorityQueue::insert
    pub fn insert_all<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (i32, E)>,
    {
        for (priority, element) in entries {
            self.insert(priority, element);
        }
    }

    /// Removes the element with the lowest priority value and returns it, or
    /// `None` if the queue is empty.
    ///
    /// The last leaf replaces the root and is bubbled down: at each node the
    /// smallest of the node and its in-range children is found, the node is
    /// swapped toward the smaller child, and the walk stops once neither
    /// child is smaller. O(log n).
    pub fn remove_front(&mut self) -> Option<E> {
        if self.heap.is_empty() {
            return None;
        }

        // swap_remove overwrites the root with the last entry and shrinks
        // the vector by one in a single step
        let (_, element) = self.heap.swap_remove(0);
        self.bubble_down(0);

        Some(element)
    }

    /// Returns the element with the lowest priority value without removing
    /// it, or `None` if the queue is empty. O(1).
    pub fn peek(&self) -> Option<&E> {
        self.heap.first().map(|(_, element)| element)
    }

    /// Returns the front entry as a `(priority, element)` pair without
    /// removing it, or `None` if the queue is empty. O(1).
    pub fn peek_with_priority(&self) -> Option<(i32, &E)> {
        self.heap.first().map(|(priority, element)| (*priority, element))
    }

    /// Returns the priorities of all entries in internal heap order.
    ///
    /// The ordering matches [`get_all_elements`]: index `i` of both vectors
    /// refers to the same entry.
    ///
    /// [`get_all_elements`]: MinPriorityQueue::get_all_elements
    pub fn get_all_priorities(&self) -> Vec<i32> {
        self.heap.iter().map(|(priority, _)| *priority).collect()
    }

    /// Index of the parent of the node at `child`. Only valid for `child > 0`.
    fn parent(child: usize) -> usize {
        (child - 1) / 2
    }

    /// Index of the left child of the node at `parent`
    fn left_child(parent: usize) -> usize {
        2 * parent + 1
    }

    /// Index of the right child of the node at `parent`
    fn right_child(parent: usize) -> usize {
        2 * parent + 2
    }

    /// Restores the min-heap property upward from `child`: the entry is
    /// swapped with its parent while it is strictly smaller, stopping at the
    /// root or at a parent that is not larger.
    fn bubble_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = Self::parent(child);
            if self.heap[child].0 < self.heap[parent].0 {
                self.heap.swap(child, parent);
                child = parent;
            } else {
                break;
            }
        }
    }

    /// Restores the min-heap property downward from `parent`: the entry is
    /// swapped with the smaller of its in-range children until neither child
    /// is smaller.
    fn bubble_down(&mut self, mut parent: usize) {
        let length = self.heap.len();

        loop {
            let left = Self::left_child(parent);
            let right = Self::right_child(parent);
            let mut smallest = parent;

            if left < length && self.heap[left].0 < self.heap[smallest].0 {
                smallest = left;
            }

            if right < length && self.heap[right].0 < self.heap[smallest].0 {
                smallest = right;
            }

            if smallest == parent {
                break;
            }

            self.heap.swap(parent, smallest);
            parent = smallest;
        }
    }

    /// Re-establishes the min-heap property over the whole vector after
    /// arbitrary-position edits, by bubbling down every internal node from
    /// the last parent back to the root. O(n).
    fn rebuild(&mut self) {
        for index in (0..self.heap.len() / 2).rev() {
            self.bubble_down(index);
        }
    }
}

impl<E> MinPriorityQueue<E>
where
    E: PartialEq,
{
    /// Returns true if the queue contains an entry equal to `element`.
    /// Linear scan, O(n).
    pub fn contains(&self, element: &E) -> bool {
        self.heap.iter().any(|(_, e)| e == element)
    }

    /// Returns the priority of the first entry equal to `element` in
    /// internal heap order, or `None` if there is no match. Linear scan,
    /// O(n).
    ///
    /// With duplicate elements the first match in array order wins, which is
    /// not necessarily the lowest priority among the duplicates.
    pub fn priority_of(&self, element: &E) -> Option<i32> {
        self.heap
            .iter()
            .find(|(_, e)| e == element)
            .map(|(priority, _)| *priority)
    }

    /// Legacy variant of [`priority_of`] that returns the reserved sentinel
    /// `-1` when no entry matches.
    ///
    /// `-1` cannot collide with a stored priority because negative
    /// priorities are rejected on insertion.
    ///
    /// [`priority_of`]: MinPriorityQueue::priority_of
    pub fn get_priority(&self, element: &E) -> i32 {
        self.priority_of(element).unwrap_or(-1)
    }
}

impl<E> MinPriorityQueue<E>
where
    E: PartialEq + Clone,
{
    /// Moves `element` to priority `new_priority`.
    ///
    /// Every entry equal to `element` is removed, so duplicate copies
    /// collapse to a single entry at the new priority. If no entry matched,
    /// the queue is left untouched. A negative `new_priority` follows the
    /// [`insert`] contract: the removals stand and nothing is reinserted.
    ///
    /// [`insert`]: MinPriorityQueue::insert
    pub fn change_priority(&mut self, element: &E, new_priority: i32) {
        let before = self.heap.len();
        self.heap.retain(|(_, e)| e != element);
        let removed = before - self.heap.len();

        if removed == 0 {
            return;
        }

        if removed > 1 {
            trace!("collapsed {} duplicate entries on priority change", removed);
        }

        // Erasing at arbitrary positions can leave the survivors out of heap
        // order, so the invariant is rebuilt before reinserting.
        self.rebuild();
        self.insert(new_priority, element.clone());
    }
}

impl<E> MinPriorityQueue<E>
where
    E: Clone,
{
    /// Returns all elements in internal heap order (NOT sorted by priority).
    /// O(n).
    pub fn get_all_elements(&self) -> Vec<E> {
        self.heap.iter().map(|(_, element)| element.clone()).collect()
    }
}

impl<E> MinPriorityQueue<E>
where
    E: Default,
{
    /// Legacy variant of [`remove_front`] that returns a default-constructed
    /// element instead of `None` when the queue is empty.
    ///
    /// [`remove_front`]: MinPriorityQueue::remove_front
    pub fn remove_front_or_default(&mut self) -> E {
        self.remove_front().unwrap_or_default()
    }
}

impl<E> MinPriorityQueue<E>
where
    E: Default + Clone,
{
    /// Legacy variant of [`peek`] that returns a default-constructed element
    /// instead of `None` when the queue is empty.
    ///
    /// [`peek`]: MinPriorityQueue::peek
    pub fn peek_or_default(&self) -> E {
        self.peek().cloned().unwrap_or_default()
    }
}

impl<E> Default for MinPriorityQueue<E> {
    fn default() -> Self {
        MinPriorityQueue::new()
    }
}

impl<E> FromIterator<(i32, E)> for MinPriorityQueue<E> {
    /// Builds a queue by sequential insertion, with the same
    /// negative-priority filtering as [`insert`].
    ///
    /// [`insert`]: MinPriorityQueue::insert
    fn from_iter<I: IntoIterator<Item = (i32, E)>>(iter: I) -> Self {
        let mut queue = MinPriorityQueue::new();
        queue.insert_all(iter);
        queue
    }
}
