/*!

Minimal lexer. An expression is split twice: once on runs of operator characters, which leaves the
operands, and once on runs of digits, which leaves the operators. The two sequences are interleaved
by position, so `operators[i]` sits between `operands[i]` and `operands[i + 1]`.

*/

use std::fmt::{Display, Formatter};

use lazy_static::lazy_static;
use regex::Regex;
use smallvec::SmallVec;

use crate::{
  error::ParseError,
  logging::{log, Channel},
  operation::Operation,
};

lazy_static! {
  static ref OPERATOR_RUN: Regex = Regex::new(r"[+\-*/]+").unwrap();
  static ref DIGIT_RUN   : Regex = Regex::new(r"[0-9]+").unwrap();
}

pub type Operands   = SmallVec<[i64; 8]>;
pub type Operations = SmallVec<[Operation; 8]>;


/// A validated expression: never empty, and always exactly one fewer operator than operands.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TokenStream {
  operands  : Operands,
  operations: Operations,
}

impl TokenStream {

  pub fn new(operands: Operands, operations: Operations) -> Result<TokenStream, ParseError> {
    if operands.is_empty() {
      return Err(ParseError::EmptyExpression);
    }
    if operations.len() + 1 != operands.len() {
      return Err(ParseError::OperatorCountMismatch {
        operands : operands.len(),
        operators: operations.len(),
      });
    }

    Ok(TokenStream { operands, operations })
  }

  pub fn operands(&self) -> &[i64] {
    &self.operands
  }

  pub fn operations(&self) -> &[Operation] {
    &self.operations
  }

  pub fn into_parts(self) -> (Operands, Operations) {
    (self.operands, self.operations)
  }

}

impl Display for TokenStream {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.operands[0])?;
    for (operation, operand) in self.operations.iter().zip(self.operands.iter().skip(1)) {
      write!(f, " {} {}", operation, operand)?;
    }
    Ok(())
  }
}


pub fn tokenize(expression: &str) -> Result<TokenStream, ParseError> {
  let operands   = parse_operands(expression)?;
  let operations = parse_operators(expression)?;

  match TokenStream::new(operands, operations) {
    Ok(tokens) => {
      log(Channel::Debug, 5, format!("Tokenized `{}` as {}", expression, tokens).as_str());
      Ok(tokens)
    }
    Err(e) => {
      log(Channel::Error, 1, format!("Malformed expression `{}`: {}", expression, e).as_str());
      Err(e)
    }
  }
}

/// Every non-empty fragment between runs of operator characters must be an integer.
pub fn parse_operands(expression: &str) -> Result<Operands, ParseError> {
  OPERATOR_RUN.split(expression)
              .filter(|fragment| !fragment.is_empty())
              .map(|fragment| {
                fragment.parse::<i64>().map_err(|source| {
                  log(Channel::Error, 1, format!("Not an operand: `{}`", fragment).as_str());
                  ParseError::InvalidOperand { fragment: fragment.to_string(), source }
                })
              })
              .collect()
}

/// Every non-empty fragment between runs of digits must be exactly one operator symbol.
pub fn parse_operators(expression: &str) -> Result<Operations, ParseError> {
  DIGIT_RUN.split(expression)
           .filter(|fragment| !fragment.is_empty())
           .map(|fragment| {
             Operation::of(fragment).ok_or_else(|| {
               log(Channel::Error, 1, format!("Not an operator: `{}`", fragment).as_str());
               ParseError::UnknownOperator { fragment: fragment.to_string() }
             })
           })
           .collect()
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tokenize_interleaves() {
    let tokens = tokenize("2+3*4-6/3").unwrap();
    assert_eq!(tokens.operands(), &[2, 3, 4, 6, 3]);
    assert_eq!(
      tokens.operations(),
      &[Operation::Add, Operation::Multiply, Operation::Subtract, Operation::Divide]
    );
    assert_eq!(tokens.to_string(), "2 + 3 * 4 - 6 / 3");
  }

  #[test]
  fn single_operand() {
    let tokens = tokenize("42").unwrap();
    assert_eq!(tokens.operands(), &[42]);
    assert!(tokens.operations().is_empty());
    assert_eq!(tokens.to_string(), "42");
  }

  #[test]
  fn leading_zeros_are_decimal() {
    assert_eq!(parse_operands("007+010").unwrap().as_slice(), &[7, 10]);
  }

  #[test]
  fn malformed_operand() {
    // The space survives the split on operator runs and is not an integer.
    match tokenize("5+ +3") {
      Err(ParseError::InvalidOperand { fragment, .. }) => assert_eq!(fragment, " "),
      other => panic!("expected InvalidOperand, got {:?}", other),
    }
    assert!(matches!(
      parse_operands("99999999999999999999"),
      Err(ParseError::InvalidOperand { .. })
    ));
  }

  #[test]
  fn unknown_operator() {
    assert_eq!(
      tokenize("5^3"),
      Err(ParseError::InvalidOperand {
        fragment: "5^3".to_string(),
        source  : "5^3".parse::<i64>().unwrap_err()
      })
    );
    assert_eq!(
      parse_operators("5^3").unwrap_err(),
      ParseError::UnknownOperator { fragment: "^".to_string() }
    );
    assert_eq!(
      tokenize("5++3"),
      Err(ParseError::UnknownOperator { fragment: "++".to_string() })
    );
  }

  #[test]
  fn wrong_shape() {
    assert_eq!(tokenize(""), Err(ParseError::EmptyExpression));
    assert_eq!(tokenize("+"), Err(ParseError::EmptyExpression));
    assert_eq!(
      tokenize("5+"),
      Err(ParseError::OperatorCountMismatch { operands: 1, operators: 1 })
    );
    assert_eq!(
      tokenize("-5"),
      Err(ParseError::OperatorCountMismatch { operands: 1, operators: 1 })
    );
  }
}
