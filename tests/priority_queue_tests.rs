use rail_itinerary::data_structures::StablePriorityQueue;

#[test]
fn test_pops_lowest_priority_first() {
    let mut queue: StablePriorityQueue<usize, u64> = StablePriorityQueue::new();
    queue.push(1, 10);
    queue.push(2, 5);
    queue.push(3, 7);

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.peek(), Some((2, 5)));
    assert_eq!(queue.pop(), Some((2, 5)));
    assert_eq!(queue.pop(), Some((3, 7)));
    assert_eq!(queue.pop(), Some((1, 10)));
    assert!(queue.is_empty());
    assert_eq!(queue.pop(), None);
}

#[test]
fn test_equal_priorities_pop_in_insertion_order() {
    let mut queue: StablePriorityQueue<usize, u64> = StablePriorityQueue::new();
    // Higher vertex ids first, so a plain (priority, vertex) heap would reorder them
    for vertex in [9, 4, 7, 1] {
        queue.push(vertex, 3);
    }
    queue.push(0, 8);

    let order: Vec<usize> = std::iter::from_fn(|| queue.pop().map(|(v, _)| v)).collect();
    assert_eq!(order, vec![9, 4, 7, 1, 0]);
}

#[test]
fn test_duplicate_entries_are_kept() {
    let mut queue: StablePriorityQueue<usize, u64> = StablePriorityQueue::new();
    queue.push(5, 100);
    queue.push(5, 2);

    assert_eq!(queue.pop(), Some((5, 2)));
    assert_eq!(queue.pop(), Some((5, 100)));

    queue.push(1, 1);
    queue.clear();
    assert!(queue.is_empty());
}
