use crate::sorting_algorithms::{SortEngine, Step};

/// Lomuto quicksort with the last element of each subrange as pivot.
///
/// Recursion is kept on an explicit stack of inclusive ranges so the sort can
/// be suspended after any step; the left subrange is always sorted before
/// the right one.
pub struct QuickSort {
    pub values: Vec<i32>,
    ranges: Vec<(usize, usize)>,
    partition: Option<Partition>,
}

#[derive(Debug, Clone, Copy)]
struct Partition {
    left: usize,
    right: usize,
    pivot: i32,
    /// Next slot for an element smaller than the pivot.
    store: usize,
    j: usize,
    pending_swap: Option<(usize, usize)>,
}

impl QuickSort {
    pub fn new(values: Vec<i32>) -> Self {
        let ranges = if values.len() > 1 {
            vec![(0, values.len() - 1)]
        } else {
            Vec::new()
        };
        QuickSort {
            values,
            ranges,
            partition: None,
        }
    }

    fn begin_partition(&mut self, left: usize, right: usize) {
        self.partition = Some(Partition {
            left,
            right,
            pivot: self.values[right],
            store: left,
            j: left,
            pending_swap: None,
        });
    }

    /// Queues both sides of a finished partition, left on top.
    fn push_subranges(&mut self, left: usize, pivot_index: usize, right: usize) {
        if pivot_index + 1 < right {
            self.ranges.push((pivot_index + 1, right));
        }
        if pivot_index > left + 1 {
            self.ranges.push((left, pivot_index - 1));
        }
    }
}

impl Iterator for QuickSort {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if let Some(partition) = self.partition.as_mut() {
                if let Some((a, b)) = partition.pending_swap.take() {
                    let step = Step::Swap {
                        left: a,
                        right: b,
                        values: (self.values[a], self.values[b]),
                    };
                    self.values.swap(a, b);
                    return Some(step);
                }

                if partition.j < partition.right {
                    let j = partition.j;
                    partition.j += 1;
                    let value = self.values[j];
                    if value < partition.pivot {
                        if partition.store != j {
                            partition.pending_swap = Some((partition.store, j));
                        }
                        partition.store += 1;
                    }
                    return Some(Step::CompareWithPivot {
                        index: j,
                        pivot_index: partition.right,
                        value,
                        pivot: partition.pivot,
                    });
                }

                let Partition {
                    left,
                    right,
                    pivot,
                    store,
                    ..
                } = *partition;
                self.partition = None;
                self.push_subranges(left, store, right);
                if store != right {
                    self.values.swap(store, right);
                    return Some(Step::PlacePivot {
                        from: right,
                        to: store,
                        pivot,
                    });
                }
                continue;
            }

            let (left, right) = self.ranges.pop()?;
            self.begin_partition(left, right);
        }
    }
}

impl SortEngine for QuickSort {
    fn values(&self) -> &[i32] {
        &self.values
    }

    fn into_values(self: Box<Self>) -> Vec<i32> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::array::generate_array;

    #[test]
    fn partition_splits_around_pivot() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..25 {
            let values = generate_array(&mut rng);
            let pivot = *values.last().unwrap();
            let mut sort = QuickSort::new(values);
            sort.next();
            while sort.partition.is_some() {
                sort.next();
            }
            let pivot_index = sort.values.iter().position(|&v| v == pivot).unwrap();
            assert!(sort.values[..pivot_index].iter().all(|&v| v <= pivot));
            assert!(sort.values[pivot_index + 1..].iter().all(|&v| v >= pivot));
        }
    }

    #[test]
    fn pivot_placement_is_logged() {
        let mut sort = QuickSort::new(vec![4, 1, 3]);
        let lines: Vec<String> = sort.by_ref().map(|step| step.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "Comparing: 4 with pivot 3",
                "Comparing: 1 with pivot 3",
                "Swapping: 4 and 1",
                "Placing pivot 3 at position 1",
            ]
        );
        assert_eq!(sort.values, vec![1, 3, 4]);
    }

    #[test]
    fn descending_input_sorts() {
        let mut sort = QuickSort::new((1..=30).rev().collect());
        sort.by_ref().for_each(drop);
        assert_eq!(sort.values, (1..=30).collect::<Vec<_>>());
    }
}
