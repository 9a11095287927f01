use crate::error_handling::*;
use crate::stack::OperandStack;

use std::collections::HashMap;

/// Largest magnitude below which every integer is exactly representable.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// fib(1477) no longer fits in an f64.
const MAX_FIBONACCI_INDEX: u64 = 1476;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    addition,
    subtraction,
    multiplication,
    division,
    square_root,
    exponentiation,
    sine,
    cosine,
    tangent,
    fibonacci,
    pascal,
}

impl Operation {
    pub const ALL: [Operation; 11] = {
        use Operation::*;
        [
            addition, subtraction, multiplication, division,
            square_root, exponentiation, sine, cosine, tangent,
            fibonacci, pascal,
        ]
    };

    pub fn name(&self) -> &'static str {
        use Operation::*;
        match self {
            addition => "+",
            subtraction => "-",
            multiplication => "*",
            division => "/",
            square_root => "sqrt",
            exponentiation => "^",
            sine => "sin",
            cosine => "cos",
            tangent => "tan",
            fibonacci => "fib",
            pascal => "pascal",
        }
    }

    pub fn arity(&self) -> usize {
        use Operation::*;
        match self {
            square_root | sine | cosine | tangent | fibonacci => 1,
            addition | subtraction | multiplication | division | exponentiation | pascal => 2,
        }
    }

    /// Computes the result from operands given in push order.
    fn call(&self, operands: &[f64]) -> Result<f64> {
        use Operation::*;
        match (self, operands) {
            (addition, &[left, right]) => Ok(left + right),
            (subtraction, &[left, right]) => Ok(left - right),
            (multiplication, &[left, right]) => Ok(left * right),
            (division, &[left, right]) => {
                if right == 0.0 {
                    Err(CalcError::division_by_zero)
                } else {
                    Ok(left / right)
                }
            },
            (exponentiation, &[base, exponent]) => Ok(base.powf(exponent)),
            (square_root, &[value]) => {
                if value < 0.0 {
                    Err(CalcError::domain(format!(
                        "cannot take the square root of a negative number ({})", value
                    )))
                } else {
                    Ok(value.sqrt())
                }
            },
            (sine, &[degrees]) => Ok(degrees.to_radians().sin()),
            (cosine, &[degrees]) => Ok(degrees.to_radians().cos()),
            (tangent, &[degrees]) => {
                // odd multiples of 90 never hit an exact zero cosine after conversion
                if degrees.rem_euclid(180.0) == 90.0 {
                    Err(CalcError::domain(format!(
                        "tangent is undefined at {} degrees", degrees
                    )))
                } else {
                    Ok(degrees.to_radians().tan())
                }
            },
            (fibonacci, &[n]) => match as_index(n) {
                Some(n) if n <= MAX_FIBONACCI_INDEX => Ok(calculate_fibonacci(n)),
                Some(_) => Err(CalcError::domain(format!(
                    "fibonacci index {} is too large", n
                ))),
                None => Err(CalcError::domain(format!(
                    "fibonacci requires a non-negative integer ({})", n
                ))),
            },
            (pascal, &[row, column]) => match (as_index(row), as_index(column)) {
                (Some(row), Some(column)) if column <= row => Ok(calculate_pascal(row, column)),
                _ => Err(CalcError::domain(format!(
                    "invalid pascal's triangle position (row {}, column {})", row, column
                ))),
            },
            (operation, operands) => unreachable!(
                "{} takes {} operands, got {}", operation.name(), operation.arity(), operands.len()
            ),
        }
    }

    /// Pops the operands, computes and pushes the result. On failure every
    /// consumed operand is put back in its original order.
    pub fn apply(&self, stack: &mut OperandStack) -> Result<()> {
        let operands = stack.pop_many(self.arity())?;
        match self.call(&operands) {
            Ok(result) => {
                stack.push(result);
                Ok(())
            },
            Err(e) => {
                stack.extend(&operands);
                Err(e)
            },
        }
    }
}

/// Name to operation registry, fixed once built.
pub struct OperationTable {
    entries: HashMap<&'static str, Operation>,
}

impl OperationTable {
    pub fn new() -> Self {
        let entries = Operation::ALL
            .into_iter()
            .map(|operation| (operation.name(), operation))
            .collect();
        Self{entries}
    }

    pub fn get(&self, name: &str) -> Option<Operation> {
        self.entries.get(name).copied()
    }

    pub fn dispatch(&self, name: &str, stack: &mut OperandStack) -> Result<()> {
        match self.get(name) {
            Some(operation) => operation.apply(stack),
            None => Err(CalcError::invalid_input(name.into())),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for OperationTable {
    fn default() -> Self {
        Self::new()
    }
}

fn as_index(value: f64) -> Option<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= MAX_EXACT_INTEGER {
        Some(value as u64)
    } else {
        None
    }
}

fn calculate_fibonacci(n: u64) -> f64 {
    let (mut previous, mut current) = (0.0, 1.0);
    if n == 0 {
        return previous;
    }
    for _ in 1..n {
        let next = previous + current;
        previous = current;
        current = next;
    }
    current
}

fn calculate_pascal(row: u64, column: u64) -> f64 {
    let column = column.min(row - column);
    let mut result = 1.0;
    for i in 1..=column {
        result = result * (row - i + 1) as f64 / i as f64;
        if result.is_infinite() {
            break;
        }
    }
    result
}
