/// Trait for max-priority queues keyed by a totally ordered priority
pub trait PriorityQueue<T, P>
where
    P: Ord,
{
    /// Inserts a value with the given priority
    fn push(&mut self, value: T, priority: P);

    /// Removes and returns the entry with the highest priority
    fn pop(&mut self) -> Option<(T, P)>;

    /// Returns the entry with the highest priority without removing it
    fn peek(&self) -> Option<(&T, &P)>;

    /// Returns the number of queued entries
    fn len(&self) -> usize;

    /// Returns true if nothing is queued
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the name of the implementation
    fn name(&self) -> &'static str;

    /// Pops every entry, highest priority first
    fn pop_all(&mut self) -> Vec<(T, P)> {
        let mut popped = Vec::with_capacity(self.len());
        while let Some(entry) = self.pop() {
            popped.push(entry);
        }
        popped
    }
}
