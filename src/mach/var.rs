use super::Val;
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Names are bound lazily by assignment or input.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
}

impl Var {
    pub fn fetch(&self, var_name: &str) -> Result<Val> {
        match self.vars.get(var_name) {
            Some(val) => Ok(val.clone()),
            None => Err(error!(UndefinedVariable; var_name)),
        }
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: Val) {
        self.vars.insert(var_name.clone(), value);
    }

    /// Bindings sorted by name.
    pub fn snapshot(&self) -> Vec<(Rc<str>, Val)> {
        let mut all: Vec<(Rc<str>, Val)> = self
            .vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        all.sort_by(|a, b| a.0.cmp(&b.0));
        all
    }
}
