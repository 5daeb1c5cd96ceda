use crate::sorting_algorithms::{SortEngine, Step};

/// Adjacent compare-and-swap with a shrinking inner bound.
pub struct BubbleSort {
    pub values: Vec<i32>,
    pass: usize,
    j: usize,
    pending_swap: Option<usize>,
}

impl BubbleSort {
    pub fn new(values: Vec<i32>) -> Self {
        BubbleSort {
            values,
            pass: 0,
            j: 0,
            pending_swap: None,
        }
    }
}

impl Iterator for BubbleSort {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        // an out-of-order comparison is always followed by its swap
        if let Some(j) = self.pending_swap.take() {
            let step = Step::Swap {
                left: j,
                right: j + 1,
                values: (self.values[j], self.values[j + 1]),
            };
            self.values.swap(j, j + 1);
            return Some(step);
        }

        let len = self.values.len();
        loop {
            if self.pass + 1 >= len {
                return None;
            }
            if self.j + 1 < len - self.pass {
                let j = self.j;
                self.j += 1;
                if self.values[j] > self.values[j + 1] {
                    self.pending_swap = Some(j);
                }
                return Some(Step::Compare {
                    left: j,
                    right: j + 1,
                    values: (self.values[j], self.values[j + 1]),
                });
            }
            self.pass += 1;
            self.j = 0;
        }
    }
}

impl SortEngine for BubbleSort {
    fn values(&self) -> &[i32] {
        &self.values
    }

    fn into_values(self: Box<Self>) -> Vec<i32> {
        self.values
    }
}
