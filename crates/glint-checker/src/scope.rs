//! Lexical scope tracking.
//!
//! A [`Scope`] maps binding names to usage metadata for one lexical
//! block; a [`ScopeStack`] keeps the scopes of the enclosing blocks,
//! innermost on top. Name lookup walks innermost to outermost and
//! stops at the first scope containing the name, so shadowed outer
//! bindings are never touched by inner references.

use glint_ast::Visibility;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Usage metadata tracked for one binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    /// How many times the binding has been read.
    pub usages: u32,
    pub visibility: Visibility,
}

impl Binding {
    fn new(visibility: Visibility) -> Self {
        Self {
            usages: 0,
            visibility,
        }
    }
}

/// One lexical block's name-to-binding mapping.
pub type Scope = FxHashMap<String, Binding>;

/// An ordered stack of lexical scopes.
///
/// The stack is never empty while traversal runs: the module scope is
/// pushed when a run starts and popped only when it finishes. Popping
/// or declaring on an empty stack is a contract violation on the
/// caller's side and panics.
#[derive(Debug, Default)]
pub struct ScopeStack {
    scopes: SmallVec<[Scope; 4]>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self {
            scopes: SmallVec::new(),
        }
    }

    /// Opens a new empty scope on top of the stack.
    pub fn push(&mut self) {
        self.scopes.push(Scope::default());
    }

    /// Removes and returns the innermost scope.
    ///
    /// Panics when the stack is empty. Callers must pair every `pop`
    /// with an earlier `push`.
    pub fn pop(&mut self) -> Scope {
        self.scopes
            .pop()
            .expect("scope stack underflow: pop without matching push")
    }

    /// Declares `name` in the innermost scope.
    ///
    /// Re-declaring a name already present in that scope overwrites
    /// the previous entry; the usage count starts over at zero.
    pub fn declare(&mut self, name: &str, visibility: Visibility) {
        tracing::debug!(name = %name, ?visibility, "declare binding");
        let scope = self
            .scopes
            .last_mut()
            .expect("scope stack underflow: declare with no open scope");
        scope.insert(name.to_string(), Binding::new(visibility));
    }

    /// Records a read of `name`.
    ///
    /// The search walks scopes innermost to outermost and increments
    /// the usage count of the first match only. Returns whether any
    /// enclosing scope contained the name.
    pub fn mark_used(&mut self, name: &str) -> bool {
        for scope in self.scopes.iter_mut().rev() {
            if let Some(binding) = scope.get_mut(name) {
                binding.usages += 1;
                return true;
            }
        }
        false
    }

    /// Whether `name` resolves in any enclosing scope, without
    /// recording a read.
    pub fn contains(&self, name: &str) -> bool {
        self.scopes.iter().rev().any(|scope| scope.contains_key(name))
    }

    /// Number of currently open scopes.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}
