//! Comparison configuration.

/// The switches of the equivalence relation, read once per top-level call.
/// All default to off, which gives strict nominal comparison of acyclic
/// values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Track visited pairs so cyclic graphs terminate and compare
    /// consistently.
    pub circular: bool,
    /// Ignore constructor identity and classify by structural tag, so
    /// same-shaped values from different realms (or same-named classes)
    /// compare equal.
    pub cross_realm: bool,
    /// Enable the tree-node fast path and source-text function comparison.
    pub tree_node: bool,
    /// Also compare symbol-keyed properties of objects.
    pub include_symbol_keys: bool,
    /// Resolve unclassified host objects through their conversions instead
    /// of failing outright.
    pub coercion_fallback: bool,
}

impl Options {
    pub fn circular(mut self, on: bool) -> Options {
        self.circular = on;
        self
    }

    pub fn cross_realm(mut self, on: bool) -> Options {
        self.cross_realm = on;
        self
    }

    pub fn tree_node(mut self, on: bool) -> Options {
        self.tree_node = on;
        self
    }

    pub fn include_symbol_keys(mut self, on: bool) -> Options {
        self.include_symbol_keys = on;
        self
    }

    pub fn coercion_fallback(mut self, on: bool) -> Options {
        self.coercion_fallback = on;
        self
    }
}

/// Property enumeration strategy, fixed at engine construction. `Auto`
/// walks small shapes in entry order and falls back to indexed tail-first
/// iteration for large ones; the choice is not observable in results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PropScan {
    #[default]
    Auto,
    Forward,
    Reverse,
}
