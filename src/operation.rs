/*!

An `Operation` is one of the four binary arithmetic operators. Each variant carries its symbol (via
`strum`), its precedence, and the integer function it is interpreted as.

The lexer resolves operator fragments through a symbol table, a `HashMap` from the operator's symbol
to the `Operation`. The table is built once from the variants themselves and is read-only thereafter.

*/

use std::collections::HashMap;

use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::ArithmeticError;


pub type OperationTable = HashMap<&'static str, Operation>;

lazy_static! {
  pub static ref OPERATION_TABLE: OperationTable =
    Operation::iter().map(|operation| (operation.symbol(), operation)).collect();
}


#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Precedence {
  Low,  // + -
  High, // * /
}


#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum Operation {
  #[strum(serialize = "+")]
  Add,
  #[strum(serialize = "-")]
  Subtract,
  #[strum(serialize = "*")]
  Multiply,
  #[strum(serialize = "/")]
  Divide,
}

impl Operation {

  /// Looks up the operation whose symbol is exactly `symbol`.
  pub fn of(symbol: &str) -> Option<Operation> {
    OPERATION_TABLE.get(symbol).copied()
  }

  pub fn symbol(&self) -> &'static str {
    (*self).into()
  }

  pub fn precedence(&self) -> Precedence {
    match self {

      | Operation::Add
      | Operation::Subtract => Precedence::Low,

      | Operation::Multiply
      | Operation::Divide => Precedence::High,

    }
  }

  /// Applies the operation to `lhs` and `rhs`. Division truncates toward zero. Every operation is
  /// checked, so overflow is an error rather than a wrap.
  pub fn apply(&self, lhs: i64, rhs: i64) -> Result<i64, ArithmeticError> {
    let result = match self {
      Operation::Add      => lhs.checked_add(rhs),
      Operation::Subtract => lhs.checked_sub(rhs),
      Operation::Multiply => lhs.checked_mul(rhs),
      Operation::Divide   => {
        if rhs == 0 {
          return Err(ArithmeticError::DivisionByZero { lhs });
        }
        lhs.checked_div(rhs)
      }
    };

    result.ok_or(ArithmeticError::Overflow { operation: *self, lhs, rhs })
  }

}
