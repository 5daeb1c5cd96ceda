pub mod bubble_sort;
pub mod heapsort;
pub mod quicksort;
pub mod selection_sort;

use std::fmt;

pub use bubble_sort::BubbleSort;
pub use heapsort::HeapSort;
pub use quicksort::QuickSort;
pub use selection_sort::SelectionSort;

/// One visualized step of a sort engine.
///
/// Values are captured before the step mutates the array, so a `Swap` reads
/// the same way it is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Compare {
        left: usize,
        right: usize,
        values: (i32, i32),
    },
    CompareWithPivot {
        index: usize,
        pivot_index: usize,
        value: i32,
        pivot: i32,
    },
    Swap {
        left: usize,
        right: usize,
        values: (i32, i32),
    },
    PlacePivot {
        from: usize,
        to: usize,
        pivot: i32,
    },
}

impl Step {
    /// Indices marked as active when this step is drawn.
    pub fn highlights(&self) -> Highlights {
        match *self {
            Step::Compare { left, right, .. } | Step::Swap { left, right, .. } => {
                Highlights::pair(left, right)
            }
            Step::CompareWithPivot {
                index, pivot_index, ..
            } => Highlights::pair(index, pivot_index),
            Step::PlacePivot { from, to, .. } => Highlights::pair(to, from),
        }
    }

    /// True for steps that moved elements.
    pub fn is_swap(&self) -> bool {
        matches!(self, Step::Swap { .. } | Step::PlacePivot { .. })
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Compare { values, .. } => write!(f, "Comparing: {} and {}", values.0, values.1),
            Step::CompareWithPivot { value, pivot, .. } => {
                write!(f, "Comparing: {} with pivot {}", value, pivot)
            }
            Step::Swap { values, .. } => write!(f, "Swapping: {} and {}", values.0, values.1),
            Step::PlacePivot { to, pivot, .. } => {
                write!(f, "Placing pivot {} at position {}", pivot, to)
            }
        }
    }
}

/// The 0-2 indices drawn as active in a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highlights([Option<usize>; 2]);

impl Highlights {
    pub fn none() -> Self {
        Self([None, None])
    }

    pub fn pair(a: usize, b: usize) -> Self {
        if a == b {
            Self([Some(a), None])
        } else {
            Self([Some(a), Some(b)])
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&Some(index))
    }
}

/// A resumable sorting process. Each call to `next` performs one step on
/// the owned array and reports it; `None` means the array is sorted.
pub trait SortEngine: Iterator<Item = Step> {
    fn values(&self) -> &[i32];
    fn into_values(self: Box<Self>) -> Vec<i32>;
}

/// Which start action an algorithm belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Quadratic,
    Improved,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuadraticAlgorithm {
    #[default]
    SelectionSort,
    BubbleSort,
}

impl QuadraticAlgorithm {
    pub fn next(self) -> Self {
        match self {
            QuadraticAlgorithm::SelectionSort => QuadraticAlgorithm::BubbleSort,
            QuadraticAlgorithm::BubbleSort => QuadraticAlgorithm::SelectionSort,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImprovedAlgorithm {
    #[default]
    QuickSort,
    HeapSort,
}

impl ImprovedAlgorithm {
    pub fn next(self) -> Self {
        match self {
            ImprovedAlgorithm::QuickSort => ImprovedAlgorithm::HeapSort,
            ImprovedAlgorithm::HeapSort => ImprovedAlgorithm::QuickSort,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Quadratic(QuadraticAlgorithm),
    Improved(ImprovedAlgorithm),
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Quadratic(QuadraticAlgorithm::SelectionSort) => "Selection sort (SelectSort)",
            Algorithm::Quadratic(QuadraticAlgorithm::BubbleSort) => "Bubble sort (BubbleSort)",
            Algorithm::Improved(ImprovedAlgorithm::QuickSort) => "Quick sort (QuickSort)",
            Algorithm::Improved(ImprovedAlgorithm::HeapSort) => "Heap sort (HeapSort)",
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Algorithm::Quadratic(_) => Family::Quadratic,
            Algorithm::Improved(_) => Family::Improved,
        }
    }

    /// Builds the engine that will sort `values` in place.
    pub fn engine(&self, values: Vec<i32>) -> Box<dyn SortEngine> {
        match self {
            Algorithm::Quadratic(QuadraticAlgorithm::SelectionSort) => {
                Box::new(SelectionSort::new(values))
            }
            Algorithm::Quadratic(QuadraticAlgorithm::BubbleSort) => {
                Box::new(BubbleSort::new(values))
            }
            Algorithm::Improved(ImprovedAlgorithm::QuickSort) => Box::new(QuickSort::new(values)),
            Algorithm::Improved(ImprovedAlgorithm::HeapSort) => Box::new(HeapSort::new(values)),
        }
    }
}

impl From<QuadraticAlgorithm> for Algorithm {
    fn from(algorithm: QuadraticAlgorithm) -> Self {
        Algorithm::Quadratic(algorithm)
    }
}

impl From<ImprovedAlgorithm> for Algorithm {
    fn from(algorithm: ImprovedAlgorithm) -> Self {
        Algorithm::Improved(algorithm)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::array::{generate_array, ARRAY_SIZE};

    const ALL: [Algorithm; 4] = [
        Algorithm::Quadratic(QuadraticAlgorithm::SelectionSort),
        Algorithm::Quadratic(QuadraticAlgorithm::BubbleSort),
        Algorithm::Improved(ImprovedAlgorithm::QuickSort),
        Algorithm::Improved(ImprovedAlgorithm::HeapSort),
    ];

    fn is_sorted(values: &[i32]) -> bool {
        values.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn every_algorithm_sorts_random_permutations() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let values = generate_array(&mut rng);
            for algorithm in ALL {
                let mut engine = algorithm.engine(values.clone());
                engine.by_ref().for_each(drop);
                let sorted = engine.into_values();
                assert!(is_sorted(&sorted), "{} left {:?}", algorithm, sorted);
                assert_eq!(sorted, (1..=ARRAY_SIZE as i32).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn tiny_inputs_finish_immediately() {
        for algorithm in ALL {
            assert_eq!(algorithm.engine(Vec::new()).count(), 0);
            assert_eq!(algorithm.engine(vec![42]).count(), 0);
        }
    }

    #[test]
    fn sorted_input_needs_no_swaps_except_heap_building() {
        let sorted: Vec<i32> = (1..=ARRAY_SIZE as i32).collect();
        for algorithm in ALL {
            let mut engine = algorithm.engine(sorted.clone());
            let steps: Vec<Step> = engine.by_ref().collect();
            assert!(!steps.is_empty(), "{} made no comparisons", algorithm);
            let swaps = steps.iter().filter(|step| step.is_swap()).count();
            if algorithm != Algorithm::Improved(ImprovedAlgorithm::HeapSort) {
                assert_eq!(swaps, 0, "{} swapped sorted input", algorithm);
            }
            assert_eq!(engine.into_values(), sorted);
        }
    }

    #[test]
    fn stopping_midway_keeps_a_permutation() {
        let mut rng = StdRng::seed_from_u64(99);
        let values = generate_array(&mut rng);
        for algorithm in ALL {
            for cut in [1, 17, 250] {
                let mut engine = algorithm.engine(values.clone());
                engine.by_ref().take(cut).for_each(drop);
                let mut partial = engine.into_values();
                partial.sort_unstable();
                assert_eq!(partial, (1..=ARRAY_SIZE as i32).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn step_log_lines() {
        let compare = Step::Compare {
            left: 0,
            right: 1,
            values: (5, 3),
        };
        assert_eq!(compare.to_string(), "Comparing: 5 and 3");
        let pivot = Step::CompareWithPivot {
            index: 2,
            pivot_index: 4,
            value: 8,
            pivot: 6,
        };
        assert_eq!(pivot.to_string(), "Comparing: 8 with pivot 6");
        let place = Step::PlacePivot {
            from: 4,
            to: 1,
            pivot: 6,
        };
        assert_eq!(place.to_string(), "Placing pivot 6 at position 1");
        assert!(place.highlights().contains(1) && place.highlights().contains(4));
    }

    #[test]
    fn highlights_collapse_duplicates() {
        assert_eq!(Highlights::pair(3, 3), Highlights([Some(3), None]));
        assert!(Highlights::pair(3, 4).contains(4));
        assert!((0..50).all(|i| !Highlights::none().contains(i)));
    }
}
