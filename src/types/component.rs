//! Component callables.

use std::fmt;
use std::rc::Rc;

use crate::types::Node;

/// A component: a callable embedded in a tree.
///
/// In head position of a sequence it receives the remaining slots as
/// arguments and its result replaces the whole sequence. In any other
/// position it is called with no arguments at normalization or render
/// time. Either way the result is normalized recursively, so a component
/// may return elements, scalars, further components, or [`Node::Empty`]
/// to produce nothing.
///
/// Cloning is shallow (`Rc`); equality is pointer identity, so a tree
/// compares equal to itself and to clones of itself but two separately
/// built components never compare equal.
#[derive(Clone)]
pub struct Component {
    f: Rc<dyn Fn(&[Node]) -> Node>,
}

impl Component {
    /// Wrap a function as a component.
    pub fn new(f: impl Fn(&[Node]) -> Node + 'static) -> Self {
        Self { f: Rc::new(f) }
    }

    /// Invoke the component.
    pub fn call(&self, args: &[Node]) -> Node {
        (self.f)(args)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Component(..)")
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.f, &other.f)
    }
}
