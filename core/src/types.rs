use num_traits::ToPrimitive;

/// Unique identifier of a node, also used as its key in the graph.
pub type NodeLabel = smartstring::alias::String;

/// Edge payloads that may carry a numeric cost.
///
/// The spanning tree and shortest path computations, as well as
/// [`cost`](crate::graph::Graph::cost) and
/// [`render_adjacency_matrix`](crate::graph::Graph::render_adjacency_matrix),
/// only consider edges whose weight has a numeric view. Everything else is
/// invisible to them. Weights that can not be represented as an `i64` are
/// treated like non-numeric weights, and sums of costs saturate at the `i64`
/// bounds.
pub trait Weight: Clone + PartialEq {
    /// Numeric value of this weight, or `None` if the edge takes no part in
    /// cost-based computations.
    fn cost(&self) -> Option<i64>;
}

macro_rules! numeric_weight {
    ($($t:ty),+) => {
        $(
            impl Weight for $t {
                fn cost(&self) -> Option<i64> {
                    self.to_i64()
                }
            }
        )+
    };
}

numeric_weight!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Weight for String {
    fn cost(&self) -> Option<i64> {
        None
    }
}

impl Weight for &str {
    fn cost(&self) -> Option<i64> {
        None
    }
}

/// Label of the `index`-th node under the contiguous alphabetic labeling
/// scheme starting at `'a'`. Only meaningful for the first 26 indexes.
pub fn alpha_label(index: usize) -> String {
    char::from((b'a' as usize + index) as u8).to_string()
}
