use crate::sorting_algorithms::{SortEngine, Step};

/// In-place heapsort: bottom-up max-heap build, then repeated root
/// extraction. Only swaps are reported as steps.
pub struct HeapSort {
    pub values: Vec<i32>,
    phase: Phase,
    sift: Option<Sift>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Roots `0..remaining` still need a sift-down, highest first.
    Build { remaining: usize },
    /// `values[..=end]` is the unsorted heap.
    Extract { end: usize },
    Done,
}

/// A sift-down in progress: `index` may be smaller than its children
/// within the first `len` elements.
#[derive(Debug, Clone, Copy)]
struct Sift {
    index: usize,
    len: usize,
}

impl HeapSort {
    pub fn new(values: Vec<i32>) -> Self {
        let remaining = values.len() / 2;
        HeapSort {
            values,
            phase: Phase::Build { remaining },
            sift: None,
        }
    }

    fn largest_of_family(&self, sift: Sift) -> usize {
        let left = 2 * sift.index + 1;
        let right = left + 1;
        let mut largest = sift.index;
        if left < sift.len && self.values[left] > self.values[largest] {
            largest = left;
        }
        if right < sift.len && self.values[right] > self.values[largest] {
            largest = right;
        }
        largest
    }

    fn swap(&mut self, a: usize, b: usize) -> Step {
        let step = Step::Swap {
            left: a,
            right: b,
            values: (self.values[a], self.values[b]),
        };
        self.values.swap(a, b);
        step
    }
}

impl Iterator for HeapSort {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if let Some(sift) = self.sift {
                let largest = self.largest_of_family(sift);
                if largest != sift.index {
                    self.sift = Some(Sift {
                        index: largest,
                        len: sift.len,
                    });
                    return Some(self.swap(sift.index, largest));
                }
                self.sift = None;
                continue;
            }

            match self.phase {
                Phase::Build { remaining: 0 } => {
                    self.phase = match self.values.len() {
                        0 | 1 => Phase::Done,
                        len => Phase::Extract { end: len - 1 },
                    };
                }
                Phase::Build { remaining } => {
                    self.phase = Phase::Build {
                        remaining: remaining - 1,
                    };
                    self.sift = Some(Sift {
                        index: remaining - 1,
                        len: self.values.len(),
                    });
                }
                Phase::Extract { end } => {
                    self.phase = if end > 1 {
                        Phase::Extract { end: end - 1 }
                    } else {
                        Phase::Done
                    };
                    self.sift = Some(Sift { index: 0, len: end });
                    return Some(self.swap(0, end));
                }
                Phase::Done => return None,
            }
        }
    }
}

impl SortEngine for HeapSort {
    fn values(&self) -> &[i32] {
        &self.values
    }

    fn into_values(self: Box<Self>) -> Vec<i32> {
        self.values
    }
}
