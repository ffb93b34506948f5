// Small helpers shared by the components.
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::error::{LandingError, Result};

/// Interior-mutable handle passed between components. Equality is identity,
/// so handing the same handle down again never re-renders a child.
#[derive(Debug, Default)]
pub struct Shared<T>(Rc<RefCell<T>>);

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

pub fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or(LandingError::NoWindow)
}

pub fn document() -> Result<web_sys::Document> {
    window()?.document().ok_or(LandingError::NoDocument)
}

pub fn set_body_overflow(value: &str) -> Result<()> {
    let body = document()?.body().ok_or(LandingError::ElementMissing("body"))?;
    body.style().set_property("overflow", value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_equality_is_identity() {
        let a = Shared::new(1);
        let b = a.clone();
        let c = Shared::new(1);
        assert!(a == b);
        assert!(a != c);
        b.set(5);
        assert_eq!(*a.borrow(), 5);
    }
}
