use crate::error_handling::*;
use crate::history::*;
use crate::operations::OperationTable;
use crate::scanning::*;
use crate::stack::OperandStack;

use log::{debug, warn};

/// One calculator session: the operand stack, the operation table and the
/// history of successful evaluations.
pub struct Calculator {
    stack: OperandStack,
    operations: OperationTable,
    history: History,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            stack: OperandStack::new(),
            operations: OperationTable::new(),
            history: History::new(),
        }
    }

    pub fn push(&mut self, value: f64) {
        self.stack.push(value);
    }

    pub fn pop(&mut self) -> Result<f64> {
        self.stack.pop()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    pub fn size(&self) -> usize {
        self.stack.size()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn stack(&self) -> &OperandStack {
        &self.stack
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Looks `name` up in the operation table and runs it against the stack.
    pub fn calculate(&mut self, name: &str) -> Result<()> {
        debug!("dispatching '{}' with {} values on the stack", name, self.stack.size());
        self.operations.dispatch(name, &mut self.stack)
    }

    /// Evaluates one RPN expression. Exactly one value has to be left on the
    /// stack afterwards; it becomes the result and is recorded in history.
    pub fn evaluate_expression(&mut self, expression: &str) -> Result<f64> {
        for token in StringScanner::new(expression) {
            match token {
                Token::number(value) => self.stack.push(value),
                Token::word(name) => self.calculate(&name)?,
            }
        }

        if self.stack.size() != 1 {
            return Err(CalcError::malformed_expression(self.stack.size()));
        }

        let result = self.stack.pop()?;
        debug!("'{}' evaluated to {}", expression, result);
        self.add_to_history(expression, result);
        Ok(result)
    }

    /// Evaluates each expression on a fresh stack. A failed expression is
    /// logged and yields NaN in its slot, so the output always lines up with
    /// the input.
    pub fn evaluate_batch<S: AsRef<str>>(&mut self, expressions: &[S]) -> Vec<f64> {
        expressions
            .iter()
            .map(|expression| {
                let expression = expression.as_ref();
                self.clear();
                self.evaluate_expression(expression).unwrap_or_else(|e| {
                    warn!("expression '{}' failed: {}", expression, e);
                    f64::NAN
                })
            })
            .collect()
    }

    pub fn add_to_history(&mut self, expression: &str, result: f64) {
        self.history.add(expression, result);
    }

    pub fn display_stack(&self) -> String {
        if self.stack.is_empty() {
            return "Stack is empty".into();
        }
        let values: Vec<String> = self.stack.values().iter().map(f64::to_string).collect();
        format!("Current stack (bottom to top): {}", values.join(" "))
    }

    pub fn display_history(&self) -> impl Iterator<Item = String> + '_ {
        self.history.lines()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
