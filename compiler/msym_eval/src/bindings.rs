//! Matrix name bindings for one request.

use msym_algebra::SymbolicMatrix;
use rustc_hash::FxHashMap;

/// Uppercased name → matrix. Read-only once evaluation starts.
#[derive(Clone, Debug, Default)]
pub struct MatrixBindings {
    matrices: FxHashMap<String, SymbolicMatrix>,
}

impl MatrixBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` (case-insensitive). A later binding of the same name
    /// replaces the earlier one.
    pub fn insert(&mut self, name: &str, matrix: SymbolicMatrix) {
        self.matrices.insert(name.to_ascii_uppercase(), matrix);
    }

    pub fn get(&self, name: &str) -> Option<&SymbolicMatrix> {
        self.matrices.get(&name.to_ascii_uppercase())
    }

    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    /// Bound names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.matrices.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<N: AsRef<str>> FromIterator<(N, SymbolicMatrix)> for MatrixBindings {
    fn from_iter<I: IntoIterator<Item = (N, SymbolicMatrix)>>(iter: I) -> Self {
        let mut bindings = MatrixBindings::new();
        for (name, matrix) in iter {
            bindings.insert(name.as_ref(), matrix);
        }
        bindings
    }
}

#[cfg(test)]
mod tests;
