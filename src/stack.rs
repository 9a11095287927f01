use crate::error_handling::*;

/// Last-in-first-out working memory of an evaluation.
#[derive(Debug, Default, Clone)]
pub struct OperandStack {
    slots: Vec<f64>,
}

impl OperandStack {
    pub fn new() -> Self {
        Self{slots: Vec::new()}
    }

    pub fn push(&mut self, value: f64) {
        self.slots.push(value);
    }

    pub fn pop(&mut self) -> Result<f64> {
        self.slots.pop().ok_or(CalcError::stack_underflow)
    }

    /// Fails without touching the stack unless at least `required` values
    /// are present.
    pub fn ensure_size(&self, required: usize) -> Result<()> {
        if self.slots.len() < required {
            Err(CalcError::stack_underflow)
        } else {
            Ok(())
        }
    }

    /// Removes the top `count` values, returned bottom-most first.
    pub fn pop_many(&mut self, count: usize) -> Result<Vec<f64>> {
        self.ensure_size(count)?;
        Ok(self.slots.split_off(self.slots.len() - count))
    }

    pub fn extend(&mut self, values: &[f64]) {
        self.slots.extend_from_slice(values);
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Bottom to top.
    pub fn values(&self) -> &[f64] {
        &self.slots
    }
}
