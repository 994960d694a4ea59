//! # Deinterlace Capability Set
//!
//! Ordered, duplicate-free list of the deinterlace methods the current video
//! pipeline can honour. The list combines what the decoder declares with what
//! the render backend declares in its [`RenderInfo`](bridge_traits::RenderInfo).
//!
//! Order matters: methods keep the position they were first seen at, and
//! [`InterlaceMethod::None`] is placed at the front when it has to be added.

use bridge_traits::InterlaceMethod;
use serde::{Deserialize, Serialize};

/// Methods every software decoder can offer.
pub const SW_DEINTERLACE_METHODS: [InterlaceMethod; 3] = [
    InterlaceMethod::None,
    InterlaceMethod::Deinterlace,
    InterlaceMethod::DeinterlaceHalf,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeinterlaceMethods {
    methods: Vec<InterlaceMethod>,
}

impl Default for DeinterlaceMethods {
    fn default() -> Self {
        Self::new()
    }
}

impl DeinterlaceMethods {
    /// The reset state: only [`InterlaceMethod::None`].
    pub fn new() -> Self {
        Self {
            methods: vec![InterlaceMethod::None],
        }
    }

    /// Build a set from a candidate list, keeping the first occurrence of
    /// each method. The result may be empty.
    pub fn from_candidates(candidates: impl IntoIterator<Item = InterlaceMethod>) -> Self {
        let mut set = Self {
            methods: Vec::new(),
        };
        for method in candidates {
            set.push_unique(method);
        }
        set
    }

    /// Linear membership test; the set never holds more than a handful of entries.
    pub fn contains(&self, method: InterlaceMethod) -> bool {
        self.methods.contains(&method)
    }

    /// Append `method` unless already present. Returns `true` if it was added.
    pub fn push_unique(&mut self, method: InterlaceMethod) -> bool {
        if self.contains(method) {
            return false;
        }
        self.methods.push(method);
        true
    }

    /// Fold in the methods declared by the render backend.
    ///
    /// Unseen methods are appended in the order given, then `None` is
    /// prepended if still absent. Returns the number of methods added.
    pub fn merge_render_methods(&mut self, render_methods: &[InterlaceMethod]) -> usize {
        let mut added = 0;
        for &method in render_methods {
            if self.push_unique(method) {
                added += 1;
            }
        }

        if !self.contains(InterlaceMethod::None) {
            self.methods.insert(0, InterlaceMethod::None);
            added += 1;
        }

        added
    }

    pub fn as_slice(&self) -> &[InterlaceMethod] {
        &self.methods
    }

    pub fn to_vec(&self) -> Vec<InterlaceMethod> {
        self.methods.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = InterlaceMethod> + '_ {
        self.methods.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
