use std::{
    cell::Cell,
    rc::Rc,
};

/// Element that counts its drops in a shared counter.
#[derive(Debug)]
pub struct Tracked {
    pub value: i32,
    drops: Rc<Cell<usize>>,
}

impl Tracked {

    pub fn new(value: i32, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            value,
            drops: drops.clone(),
        }
    }
}

impl Clone for Tracked {

    fn clone(&self) -> Self {
        Self {
            value: self.value,
            drops: self.drops.clone(),
        }
    }
}

impl PartialEq for Tracked {

    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Drop for Tracked {

    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

pub fn drop_counter() -> Rc<Cell<usize>> {
    Rc::new(Cell::new(0))
}

pub fn values<T: Clone>(array: &crate::DynamicArray<T>) -> Vec<T> {
    array.iter().cloned().collect()
}
