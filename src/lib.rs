/*!

Evaluates arithmetic expressions over non-negative integer literals and the binary operators
`+ - * /`. Multiplication and division bind tighter than addition and subtraction, and operators of
equal precedence associate to the left. There are no parentheses and no unary operators.

```
assert_eq!(calculator::calculate("2+3*4-6/3"), Ok(12));
```

*/

mod error;
mod lexer;
mod operation;
mod reducer;
pub mod logging;

pub use error::{ArithmeticError, CalculatorError, ParseError};
pub use lexer::{tokenize, TokenStream};
pub use operation::{Operation, Precedence};
pub use reducer::reduce;

use logging::{log, Channel};


/// Evaluates `expression`, e.g. `"20/4/5"` evaluates to `1`.
pub fn calculate(expression: &str) -> Result<i64, CalculatorError> {
  let tokens = tokenize(expression)?;
  let result = reduce(tokens)?;

  log(Channel::Info, 3, format!("{} = {}", expression, result).as_str());
  Ok(result)
}
