use crate::utils::CheapClone;

/// A single lifecycle observer
pub type Hook<E> = CheapClone<dyn Fn(&E)>;

/// An ordered list of observers for one lifecycle event.
///
/// Observers run in list order. Wrapping a caller's hook is done by
/// [`prepend`](HookChain::prepend)-ing our own observer, which makes "ours first,
/// then the caller's" an explicit property of the chain instead of a side effect
/// of overwriting a field.
pub struct HookChain<E> {
    hooks: Vec<Hook<E>>,
}

impl<E> HookChain<E> {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Run `hook` after every observer already in the chain
    pub fn push<F: Fn(&E) + 'static>(&mut self, hook: F) {
        self.hooks.push(CheapClone::new(hook));
    }

    /// Run `hook` before every observer already in the chain
    pub fn prepend<F: Fn(&E) + 'static>(&mut self, hook: F) {
        self.hooks.insert(0, CheapClone::new(hook));
    }

    /// Builder flavour of [`push`](HookChain::push)
    pub fn then<F: Fn(&E) + 'static>(mut self, hook: F) -> Self {
        self.push(hook);
        self
    }

    pub fn call(&self, event: &E) {
        for hook in &self.hooks {
            hook(event);
        }
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl<E> Default for HookChain<E> {
    fn default() -> Self {
        Self::new()
    }
}
impl<E> Clone for HookChain<E> {
    fn clone(&self) -> Self {
        Self {
            hooks: self.hooks.clone(),
        }
    }
}
// Two chains are equal when they hold the very same observers, in the same order
impl<E> PartialEq for HookChain<E> {
    fn eq(&self, other: &Self) -> bool {
        self.hooks.len() == other.hooks.len()
            && self
                .hooks
                .iter()
                .zip(other.hooks.iter())
                .all(|(a, b)| CheapClone::ptr_eq(a, b))
    }
}
impl<E> core::fmt::Debug for HookChain<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookChain")
            .field("len", &self.hooks.len())
            .finish_non_exhaustive()
    }
}
