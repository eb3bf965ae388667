//! Constructor brands.

use std::rc::Rc;

/// The constructor a composite was built by. Identity is the allocation;
/// `name` doubles as the structural tag under cross-realm comparison, so two
/// same-named brands model the "same" class defined in two realms.
#[derive(Debug)]
pub struct ClassDef {
    name: Rc<str>,
}

impl ClassDef {
    pub fn new(name: &str) -> Rc<ClassDef> {
        Rc::new(ClassDef {
            name: Rc::from(name),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
