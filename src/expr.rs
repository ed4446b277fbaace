use crate::ast::{Ast, NodeId};
use crate::error::Error;
use crate::functions::call;
use crate::lexer::tokenize;
use crate::token::{Op, TokenKind};
use log::trace;

/// Evaluate a single expression from `input`.
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// building or evaluating the expression tree failed. Non-finite results
/// (`1/0`, `asin(2)`) are not errors.
///
/// # Example
///
/// ```
/// # use treecalc::calculate;
/// assert_eq!(calculate("45-2^3"), Ok(37.0));
/// assert_eq!(calculate("2(3+4)"), Ok(14.0));
/// assert_eq!(calculate("1/0"), Ok(f64::INFINITY));
/// ```
pub fn calculate(input: &str) -> Result<f64, Error> {
    Expr::parse(input).and_then(|expr| expr.eval())
}

/// A built expression tree, ready to be evaluated.
///
/// # Examples
/// ```
/// # use treecalc::Expr;
/// let expr = Expr::parse("mean(1,2,3)").unwrap();
/// assert_eq!(expr.eval(), Ok(2.0));
/// assert_eq!(expr.ast().to_string(), "mean\n└──()\n   ├──1\n   ├──2\n   └──3");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    ast: Ast,
}

impl Expr {
    /// Tokenize `expression` and build its tree.
    ///
    /// # Examples
    /// ```
    /// # use treecalc::Expr;
    /// // A valid expression
    /// assert!(Expr::parse("3+5*2").is_ok());
    /// // an invalid one
    /// assert!(Expr::parse("3+*2").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self, Error> {
        let ast = Ast::from_tokens(tokenize(expression))?;
        Ok(Self { ast })
    }

    /// Evaluate the expression tree
    pub fn eval(&self) -> Result<f64, Error> {
        Self::inner_eval(&self.ast, self.ast.root())
    }

    /// The expression tree
    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    fn inner_eval(ast: &Ast, id: NodeId) -> Result<f64, Error> {
        let node = ast.node(id);
        match node.kind() {
            TokenKind::Number => node
                .value()
                .parse::<f64>()
                .map_err(|_| Error::MalformedTree(format!("'{}' is not a number", node.value()))),
            TokenKind::Operator(op) => match *node.children() {
                [operand] if op == Op::Minus => Ok(-Self::inner_eval(ast, operand)?),
                [left, right] => Ok(op.apply(
                    Self::inner_eval(ast, left)?,
                    Self::inner_eval(ast, right)?,
                )),
                ref operands => Err(Error::MalformedTree(format!(
                    "operator '{}' with {} operand(s)",
                    node.value(),
                    operands.len()
                ))),
            },
            TokenKind::Open | TokenKind::ClosedParen => match *node.children() {
                [inner] => Self::inner_eval(ast, inner),
                ref inner => Err(Error::MalformedTree(format!(
                    "group with {} values",
                    inner.len()
                ))),
            },
            TokenKind::Word => match *node.children() {
                [arguments] if ast.node(arguments).kind().is_group() => {
                    let mut values = ast
                        .node(arguments)
                        .children()
                        .iter()
                        .map(|&argument| Self::inner_eval(ast, argument))
                        .collect::<Result<Vec<_>, _>>()?;
                    let result = call(node.value(), &mut values)?;
                    trace!("{} = {}", node.value(), result);
                    Ok(result)
                }
                _ => Err(Error::MalformedTree(format!(
                    "'{}' is not followed by an argument list",
                    node.value()
                ))),
            },
            TokenKind::Close | TokenKind::Comma => Err(Error::MalformedTree(format!(
                "unexpected '{}'",
                node.value()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{calculate, Expr};
    use crate::error::Error;
    use std::thread;
    use test_case::test_case;

    #[test_case("42" => Ok(42.0) ; "integer literal")]
    #[test_case("2.5" => Ok(2.5) ; "decimal literal")]
    #[test_case("2+3*4" => Ok(14.0) ; "multiplication first")]
    #[test_case("(2+3)*4" => Ok(20.0) ; "group first")]
    #[test_case("2*3^2" => Ok(18.0) ; "exponent first")]
    #[test_case("10-2-3" => Ok(5.0) ; "subtraction groups left")]
    #[test_case("16/4/2" => Ok(2.0) ; "division groups left")]
    #[test_case("2^3^2" => Ok(64.0) ; "exponentiation groups left")]
    #[test_case("-5+3" => Ok(-2.0) ; "leading unary minus")]
    #[test_case("3*-2" => Ok(-6.0) ; "unary minus after operator")]
    #[test_case("2--3" => Ok(5.0) ; "minus a negative")]
    #[test_case("2^-1" => Ok(0.5) ; "negative exponent")]
    #[test_case("(-1)" => Ok(-1.0) ; "unary minus in group")]
    #[test_case("2(3+4)" => Ok(14.0) ; "implied multiplication with group")]
    #[test_case("2sin(0)" => Ok(0.0) ; "implied multiplication with function")]
    #[test_case("(1+1)sin(0)" => Ok(0.0) ; "implied multiplication after group")]
    #[test_case("2sin(0)+1" => Ok(2.0) ; "addition after implied multiplication stays in the product")]
    #[test_case("2*sin(0)+1" => Ok(2.0) ; "addition after a call stays in the product")]
    #[test_case("2*cos(0)+1" => Ok(4.0) ; "call then addition under multiplication")]
    #[test_case("3*cos(0)-1" => Ok(0.0) ; "call then subtraction under multiplication")]
    #[test_case("cos(0)+1" => Ok(2.0) ; "addition after a top level call")]
    #[test_case("sin(0)" => Ok(0.0) ; "sine")]
    #[test_case("SIN(0)" => Ok(0.0) ; "upper case name")]
    #[test_case("cos(0)^2" => Ok(1.0) ; "function raised to a power")]
    #[test_case("mean(1,2,3)" => Ok(2.0) ; "mean")]
    #[test_case("median(1,2,3,4)" => Ok(2.5) ; "median")]
    #[test_case("sum(1,2,3)*2" => Ok(12.0) ; "aggregate as operand")]
    #[test_case("mean(1+1,4)" => Ok(3.0) ; "expression arguments")]
    #[test_case("mean((1+1),2)" => Ok(2.0) ; "group arguments")]
    #[test_case("sin((1+1)*0)" => Ok(0.0) ; "function of a group")]
    #[test_case("((2))" => Ok(2.0) ; "nested groups")]
    #[test_case("(1+2" => Ok(3.0) ; "unclosed group")]
    #[test_case("1+2)" => Ok(3.0) ; "unmatched close")]
    #[test_case(" 2 * ( 3 + 4 ) " => Ok(14.0) ; "whitespace")]
    #[test_case("1/0" => Ok(f64::INFINITY) ; "division by zero")]
    #[test_case("-1/0" => Ok(f64::NEG_INFINITY) ; "negative division by zero")]
    fn eval(input: &str) -> Result<f64, Error> {
        calculate(input)
    }

    #[test_case("2++3" => Err(Error::InvalidTokenSequence { previous: "+".into(), token: "+".into() }) ; "two operators")]
    #[test_case("foo(1)" => Err(Error::UnrecognizedFunction { name: "foo".into(), arity: 1 }) ; "unknown function")]
    #[test_case("sin(1,2)" => Err(Error::UnrecognizedFunction { name: "sin".into(), arity: 2 }) ; "too many arguments")]
    #[test_case("" => Err(Error::EmptyExpression) ; "empty")]
    #[test_case("." => Err(Error::InvalidToken(".".into())) ; "bare decimal point")]
    #[test_case("pi" => Err(Error::MalformedTree("'pi' is not followed by an argument list".into())) ; "bare word")]
    #[test_case("1+" => Err(Error::MalformedTree("operator '+' with 1 operand(s)".into())) ; "missing right operand")]
    #[test_case("+5" => Err(Error::MalformedTree("operator '+' with 1 operand(s)".into())) ; "unary plus")]
    #[test_case("(1,2)" => Err(Error::MalformedTree("group with 2 values".into())) ; "comma outside a call")]
    #[test_case("1,2" => Err(Error::MalformedTree("group with 2 values".into())) ; "top level comma")]
    #[test_case("(" => Err(Error::MalformedTree("group with 0 values".into())) ; "lone parenthesis")]
    #[test_case(")" => Err(Error::MalformedTree("unexpected ')'".into())) ; "lone close")]
    fn errors(input: &str) -> Result<f64, Error> {
        calculate(input)
    }

    #[test]
    fn non_finite() {
        assert!(calculate("0/0").unwrap().is_nan());
        assert!(calculate("asin(2)").unwrap().is_nan());
        assert!(calculate("stdev(5)").unwrap().is_nan());
    }

    #[test]
    fn stdev() {
        let value = calculate("stdev(2,4,4,4,5,5,7,9)").unwrap();
        assert!((value - 2.138_089_935_299_395).abs() < 1e-12);
    }

    #[test]
    fn literals() {
        for literal in ["0", "7", "0.1", "123.456", "1000000", ".5", "5."] {
            assert_eq!(calculate(literal), Ok(literal.parse::<f64>().unwrap()));
        }
    }

    #[test]
    fn idempotent() {
        let _ = pretty_env_logger::try_init();
        let input = "stdev(1.5,2sin(3),cos(4)^2)/median(3,1,2)-2^3^2";
        let first = calculate(input).unwrap();
        let second = calculate(input).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());

        let expr = Expr::parse(input).unwrap();
        assert_eq!(expr.eval().unwrap().to_bits(), first.to_bits());
        assert_eq!(expr.eval().unwrap().to_bits(), first.to_bits());
        assert_eq!(Expr::parse(input).unwrap(), expr);
    }

    #[test]
    fn threads() {
        let inputs = ["2+3*4", "mean(1,2,3)", "2(3+4)", "sin((1+1)*0)"];
        let expected = [14.0, 2.0, 14.0, 0.0];
        let handles: Vec<_> = (0..8)
            .map(|i| thread::spawn(move || calculate(inputs[i % inputs.len()])))
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), Ok(expected[i % expected.len()]));
        }
    }
}
