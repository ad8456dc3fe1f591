use crate::Cost;
use thiserror::Error;

/// The Error returned when dequeuing from an empty [`PriorityQueue`].
///
/// Trying to take the minimum of zero elements is a usage error, so it is
/// reported instead of being silently tolerated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("dequeue from an empty PriorityQueue")]
pub struct EmptyQueueError;

/// A binary min-heap of `(item, priority)` pairs.
///
/// The pair with the lowest priority is always the next one out. Both
/// [`enqueue`](PriorityQueue::enqueue) and [`dequeue`](PriorityQueue::dequeue)
/// run in `O(log n)`.
///
/// The queue is a multiset: the same item may be enqueued several times at
/// different priorities. There is no decrease-key operation; callers that
/// improve an item's priority push a fresh entry and the heap order makes
/// sure the fresher, cheaper entry comes out first.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use graph_search::PriorityQueue;
/// let mut queue = PriorityQueue::new();
/// queue.enqueue('b', 2);
/// queue.enqueue('a', 1);
/// queue.enqueue('c', 3);
///
/// assert_eq!(queue.dequeue(), Ok(('a', 1)));
/// assert_eq!(queue.dequeue(), Ok(('b', 2)));
/// assert_eq!(queue.dequeue(), Ok(('c', 3)));
/// assert!(queue.dequeue().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct PriorityQueue<T> {
    heap: Vec<(T, Cost)>,
}

impl<T> PriorityQueue<T> {
    /// Creates a new, empty PriorityQueue.
    pub fn new() -> PriorityQueue<T> {
        PriorityQueue { heap: Vec::new() }
    }

    /// Creates a new, empty PriorityQueue with space for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> PriorityQueue<T> {
        PriorityQueue {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// The number of elements currently in the queue.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Adds `item` to the queue at the given `priority`.
    ///
    /// The new element is appended and then sifted up until its parent's
    /// priority is no longer greater.
    pub fn enqueue(&mut self, item: T, priority: Cost) {
        self.heap.push((item, priority));
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the `(item, priority)` pair with the lowest priority.
    ///
    /// The last element takes the root's place and is sifted down, always
    /// swapping with the smaller child. When both children carry the same
    /// priority the left one wins, so dequeue order is deterministic.
    ///
    /// ## Errors
    /// [`EmptyQueueError`] if the queue holds no elements.
    pub fn dequeue(&mut self) -> Result<(T, Cost), EmptyQueueError> {
        if self.heap.is_empty() {
            return Err(EmptyQueueError);
        }
        let entry = self.heap.swap_remove(0);
        if self.heap.len() > 1 {
            self.sift_down(0);
        }
        Ok(entry)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].1 < self.heap[parent].1 {
                self.heap.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < self.heap.len() && self.heap[left].1 < self.heap[smallest].1 {
                smallest = left;
            }
            if right < self.heap.len() && self.heap[right].1 < self.heap[smallest].1 {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> PriorityQueue<T> {
        PriorityQueue::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_dequeue() {
        let mut queue = PriorityQueue::new();
        for priority in [5, 3, 8, 1, 9, 2] {
            queue.enqueue(priority, priority);
        }

        assert_eq!(queue.len(), 6);

        let mut order = vec![];
        while let Ok((_, priority)) = queue.dequeue() {
            order.push(priority);
        }

        assert_eq!(order, vec![1, 2, 3, 5, 8, 9]);
        assert!(queue.is_empty());
    }

    #[test]
    fn dequeue_empty() {
        let mut queue = PriorityQueue::<u32>::new();

        assert_eq!(queue.dequeue(), Err(EmptyQueueError));

        queue.enqueue(7, 7);
        assert!(queue.dequeue().is_ok());
        assert_eq!(queue.dequeue(), Err(EmptyQueueError));
    }

    #[test]
    fn interleaved() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("e", 40);
        queue.enqueue("a", 10);
        queue.enqueue("c", 30);

        assert_eq!(queue.dequeue(), Ok(("a", 10)));

        queue.enqueue("b", 20);
        queue.enqueue("f", 50);

        assert_eq!(queue.dequeue(), Ok(("b", 20)));
        assert_eq!(queue.dequeue(), Ok(("c", 30)));
        assert_eq!(queue.dequeue(), Ok(("e", 40)));
        assert_eq!(queue.dequeue(), Ok(("f", 50)));
    }

    #[test]
    fn duplicate_priorities() {
        let mut queue = PriorityQueue::new();
        queue.enqueue('x', 1);
        queue.enqueue('y', 1);
        queue.enqueue('z', 1);

        let mut items = vec![];
        while let Ok((item, priority)) = queue.dequeue() {
            assert_eq!(priority, 1);
            items.push(item);
        }
        items.sort_unstable();

        assert_eq!(items, vec!['x', 'y', 'z']);
    }

    #[test]
    fn random_heap_property() {
        let mut rng = oorandom::Rand32::new(7);
        let mut queue = PriorityQueue::new();

        for i in 0..1000 {
            queue.enqueue(i, rng.rand_range(0..10_000) as usize);
        }

        let mut previous = 0;
        while let Ok((_, priority)) = queue.dequeue() {
            assert!(priority >= previous, "{} dequeued after {}", priority, previous);
            previous = priority;
        }
    }
}
