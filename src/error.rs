/*!

Errors surfaced by `calculate`. A `ParseError` means the expression text could not be turned into a
token stream; an `ArithmeticError` means a well-formed expression could not be evaluated. Neither is
recovered from internally.

*/

use std::{
  error::Error,
  fmt::{Display, Formatter},
  num::ParseIntError
};

use crate::operation::Operation;


#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ParseError {
  /// A fragment between operators is not a valid integer.
  InvalidOperand {
    fragment: String,
    source  : ParseIntError,
  },
  /// A fragment between operands is not one of the known operator symbols.
  UnknownOperator {
    fragment: String,
  },
  EmptyExpression,
  /// There must be exactly one fewer operator than operands, e.g. `+5` and `5+` are rejected.
  OperatorCountMismatch {
    operands : usize,
    operators: usize,
  },
}

impl Display for ParseError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      ParseError::InvalidOperand { fragment, source } => {
        write!(f, "invalid operand `{}`: {}", fragment, source)
      }
      ParseError::UnknownOperator { fragment } => {
        write!(f, "unknown operator `{}`", fragment)
      }
      ParseError::EmptyExpression => {
        write!(f, "empty expression")
      }
      ParseError::OperatorCountMismatch { operands, operators } => {
        write!(f, "{} operator(s) cannot join {} operand(s)", operators, operands)
      }
    }
  }
}

impl Error for ParseError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      ParseError::InvalidOperand { source, .. } => Some(source),
      _ => None
    }
  }
}


#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ArithmeticError {
  DivisionByZero {
    lhs: i64,
  },
  /// The result of `lhs operation rhs` does not fit in an `i64`.
  Overflow {
    operation: Operation,
    lhs      : i64,
    rhs      : i64,
  },
}

impl Display for ArithmeticError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      ArithmeticError::DivisionByZero { lhs } => {
        write!(f, "division by zero: {} / 0", lhs)
      }
      ArithmeticError::Overflow { operation, lhs, rhs } => {
        write!(f, "integer overflow: {} {} {}", lhs, operation, rhs)
      }
    }
  }
}

impl Error for ArithmeticError {}


#[derive(Clone, PartialEq, Eq, Debug)]
pub enum CalculatorError {
  Parse(ParseError),
  Arithmetic(ArithmeticError),
}

impl Display for CalculatorError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      CalculatorError::Parse(e)      => write!(f, "parse error: {}", e),
      CalculatorError::Arithmetic(e) => write!(f, "arithmetic error: {}", e),
    }
  }
}

impl Error for CalculatorError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      CalculatorError::Parse(e)      => Some(e),
      CalculatorError::Arithmetic(e) => Some(e),
    }
  }
}

impl From<ParseError> for CalculatorError {
  fn from(e: ParseError) -> Self {
    CalculatorError::Parse(e)
  }
}

impl From<ArithmeticError> for CalculatorError {
  fn from(e: ArithmeticError) -> Self {
    CalculatorError::Arithmetic(e)
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn division_by_zero_message() {
    let e: CalculatorError = ArithmeticError::DivisionByZero { lhs: 5 }.into();
    assert!(e.to_string().contains("division by zero"));
    assert!(e.source().is_some());
  }

  #[test]
  fn invalid_operand_has_source() {
    let source = "x".parse::<i64>().unwrap_err();
    let e = ParseError::InvalidOperand { fragment: "x".to_string(), source };
    assert!(e.source().is_some());
    assert_eq!(e.to_string(), "invalid operand `x`: invalid digit found in string");
  }

  #[test]
  fn overflow_message_names_operation() {
    let e = ArithmeticError::Overflow { operation: Operation::Multiply, lhs: i64::MAX, rhs: 2 };
    assert_eq!(e.to_string(), format!("integer overflow: {} * 2", i64::MAX));
  }
}
