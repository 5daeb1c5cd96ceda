use crate::sorting_algorithms::{SortEngine, Step};

/// Min-scan-and-swap. For each outer index the suffix is scanned for its
/// minimum, one comparison per step, then the minimum is swapped into place.
pub struct SelectionSort {
    pub values: Vec<i32>,
    i: usize,
    j: usize,
    min_index: usize,
}

impl SelectionSort {
    pub fn new(values: Vec<i32>) -> Self {
        SelectionSort {
            values,
            i: 0,
            j: 1,
            min_index: 0,
        }
    }
}

impl Iterator for SelectionSort {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let len = self.values.len();
        loop {
            if self.i + 1 >= len {
                return None;
            }
            if self.j < len {
                let j = self.j;
                self.j += 1;
                let step = Step::Compare {
                    left: j,
                    right: self.min_index,
                    values: (self.values[j], self.values[self.min_index]),
                };
                if self.values[j] < self.values[self.min_index] {
                    self.min_index = j;
                }
                return Some(step);
            }

            // scan finished, move on to the next outer index
            let (i, min_index) = (self.i, self.min_index);
            self.i += 1;
            self.j = self.i + 1;
            self.min_index = self.i;
            if min_index != i {
                let step = Step::Swap {
                    left: i,
                    right: min_index,
                    values: (self.values[i], self.values[min_index]),
                };
                self.values.swap(i, min_index);
                return Some(step);
            }
        }
    }
}

impl SortEngine for SelectionSort {
    fn values(&self) -> &[i32] {
        &self.values
    }

    fn into_values(self: Box<Self>) -> Vec<i32> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_minimum_into_each_position() {
        let mut sort = SelectionSort::new(vec![3, 1, 2]);
        let steps: Vec<Step> = sort.by_ref().collect();
        assert_eq!(
            steps,
            vec![
                Step::Compare {
                    left: 1,
                    right: 0,
                    values: (1, 3)
                },
                Step::Compare {
                    left: 2,
                    right: 1,
                    values: (2, 1)
                },
                Step::Swap {
                    left: 0,
                    right: 1,
                    values: (3, 1)
                },
                Step::Compare {
                    left: 2,
                    right: 1,
                    values: (2, 3)
                },
                Step::Swap {
                    left: 1,
                    right: 2,
                    values: (3, 2)
                },
            ]
        );
        assert_eq!(sort.values, vec![1, 2, 3]);
    }

    #[test]
    fn comparisons_are_quadratic() {
        let sort = SelectionSort::new((1..=10).rev().collect());
        let comparisons = sort.filter(|step| !step.is_swap()).count();
        assert_eq!(comparisons, 10 * 9 / 2);
    }
}
