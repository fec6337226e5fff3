use winnow::ascii::digit1;
use winnow::combinator::{alt, opt};
use winnow::token::one_of;
use winnow::{ModalResult, Parser};

/// Recognize `[+-] (digits [. [digits]] | . digits) [(e|E) [+-] digits]`
fn decimal_literal<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    (
        opt(one_of(['+', '-'])),
        alt(((digit1, opt(('.', opt(digit1)))).void(), ('.', digit1).void())),
        opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)),
    )
        .take()
        .parse_next(input)
}

/// Parse a decimal literal
///
/// Surrounding ASCII whitespace is ignored; anything else after the literal is an error.
/// Negative literals parse successfully so callers can reject them by value.
///
/// # Arguments
/// * `input_str` - The text to parse
///
/// # Returns
/// * `Result<f64, String>` - The parsed value, or an error message
///
/// # Examples
/// ```
/// use decimal_fraction::parser::parse_decimal;
///
/// assert_eq!(parse_decimal(" 0.25 ").unwrap(), 0.25);
/// assert!(parse_decimal("1/4").is_err());
/// ```
pub fn parse_decimal(input_str: &str) -> Result<f64, String> {
    let mut input = input_str.trim_ascii();

    let literal = decimal_literal
        .parse_next(&mut input)
        .map_err(|e| format!("Parse error: {e:?} in decimal literal '{input_str}'"))?;

    if !input.is_empty() {
        return Err(format!(
            "Trailing characters in decimal literal '{input_str}': '{input}'"
        ));
    }

    literal
        .parse::<f64>()
        .map_err(|e| format!("Invalid decimal literal '{input_str}': {e}"))
}
