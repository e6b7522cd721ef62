/*!

Reduces a `TokenStream` to a single integer in two passes.

The first pass applies the high precedence operations left to right. Each result is folded into the
last operand of the output, which is the operand immediately to the left of the next operation, so a
run like `2*3*4` chains as `(2*3)*4` before anything to its right is considered. Low precedence
operations are copied through with their right operand. The second pass then folds the remaining
operations left to right.

Each pass builds fresh sequences rather than removing elements from the sequences it scans.

*/

use smallvec::SmallVec;

use crate::{
  error::ArithmeticError,
  lexer::{Operands, Operations, TokenStream},
  logging::{log, Channel},
  operation::{Operation, Precedence},
};


pub fn reduce(tokens: TokenStream) -> Result<i64, ArithmeticError> {
  let (operands, operations) = tokens.into_parts();
  let (operands, operations) = reduce_high_precedence(operands, operations)?;

  reduce_low_precedence(operands, operations)
}


fn reduce_high_precedence(operands: Operands, operations: Operations)
  -> Result<(Operands, Operations), ArithmeticError>
{
  // `TokenStream` is never empty, so `reduced` always has a last element below.
  let mut reduced    : Operands   = SmallVec::new();
  let mut remaining  : Operations = SmallVec::new();
  reduced.push(operands[0]);

  for (operation, rhs) in operations.into_iter().zip(operands.into_iter().skip(1)) {
    match operation.precedence() {

      Precedence::High => {
        let last = reduced.len() - 1;
        reduced[last] = apply_logged(operation, reduced[last], rhs)?;
      }

      Precedence::Low => {
        remaining.push(operation);
        reduced.push(rhs);
      }

    }
  }

  Ok((reduced, remaining))
}


/// Only `+` and `-` remain, so a plain left fold respects associativity.
fn reduce_low_precedence(operands: Operands, operations: Operations) -> Result<i64, ArithmeticError> {
  // The first pass always leaves at least one operand.
  let first = operands[0];

  operations.into_iter()
            .zip(operands.into_iter().skip(1))
            .try_fold(first, |lhs, (operation, rhs)| apply_logged(operation, lhs, rhs))
}


fn apply_logged(operation: Operation, lhs: i64, rhs: i64) -> Result<i64, ArithmeticError> {
  match operation.apply(lhs, rhs) {
    Ok(result) => {
      log(Channel::Debug, 5, format!("Reduced {} {} {} to {}", lhs, operation, rhs, result).as_str());
      Ok(result)
    }
    Err(e) => {
      log(Channel::Error, 1, format!("Reduction failed: {}", e).as_str());
      Err(e)
    }
  }
}
