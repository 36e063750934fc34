//! Behavior of the public calculator API on realistic inputs.

use squaresum::calculator::{
    Argument, Calculator, CalculatorError, ValidationMode, normalize, parse_text, square_of_sum,
    sum,
};

fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-12 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

fn sum_of<I, T>(values: I) -> f64
where
    I: IntoIterator<Item = T>,
    T: Into<Argument>,
{
    Calculator::from_values(values).sum().unwrap()
}

fn square_of<I, T>(values: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Into<Argument>,
{
    Calculator::from_values(values).square_of_sum().unwrap()
}

#[test]
fn test_sum_simple_integers() {
    assert_eq!(sum_of([2, 5]), 7.0);
    assert_eq!(sum_of([1, 2, 35]), 38.0);
    assert_eq!(sum_of([201, 5, 23, 6987]), 7216.0);
}

#[test]
fn test_sum_floats() {
    assert_eq!(sum_of([2.2, 5.7]), 7.9);
    assert_close(sum_of([5.685, 1.45656, 7.151]), 14.29256);
    assert_close(sum_of([2.765321, 54846.7, 8.453435, 48486.0]), 103343.918756);
    assert_close(sum_of([0.2, 0.71, 8.15, 0.815, 5.02]), 14.895);
}

#[test]
fn test_sum_negative_and_mixed_signs() {
    assert_eq!(sum_of([-5, -6]), -11.0);
    assert_eq!(sum_of([-286, -3, -15214]), -15503.0);
    assert_close(sum_of([-1.55, -6.78]), -8.33);
    assert_close(sum_of([-7.0, 3.12]), -3.88);
    assert_close(sum_of([-0.72, 3.0, 125.86, -856.0203]), -727.8803);
    assert_eq!(sum_of([-2, 3, -3, 2]), 0.0);
}

#[test]
fn test_sum_big_integers() {
    assert_eq!(
        sum_of([4_546_786_413_130_i64, 123_458_484_764_131]),
        128_005_271_177_261.0
    );
    assert_eq!(
        sum_of([-546_513_144_416_i64, -1_515_153_111_303]),
        -2_061_666_255_719.0
    );
}

#[test]
fn test_sum_zeros_and_implicit_zeros() {
    assert_eq!(sum_of([0, 0, 0, 0, 0]), 0.0);
    assert_eq!(sum_of([0]), 0.0);
    assert_close(sum_of([0.05750, 7.0]), 7.0575);
    assert_eq!(Calculator::default().sum().unwrap(), 0.0);
}

#[test]
fn test_sum_strings() {
    assert_eq!(sum_of(["0", "8"]), 8.0);
    assert_eq!(sum_of(["fizz", "buzz", "bar"]), 0.0);
    assert_eq!(sum_of(["5,3", "1.7", "0 1"]), 8.0);
}

#[test]
fn test_sum_strings_in_other_scripts() {
    assert_eq!(sum_of(["١٢", "3"]), 15.0);
    assert_eq!(sum_of(["１２", "٣,٥"]), 15.5);
    assert_eq!(square_of(["٢", "٣"]), "25.0000000000");
}

#[test]
fn test_sum_mixed_argument_types() {
    let args = vec![
        Argument::from(2),
        Argument::from("3,5"),
        Argument::from(0.5),
        Argument::from(true),
        Argument::Missing,
        Argument::from("nope"),
    ];
    assert_eq!(sum(&normalize(&args).unwrap()), 7.0);
}

#[test]
fn test_square_integers() {
    assert_eq!(square_of([1, 0]), "1.0000000000");
    assert_eq!(square_of([9, 4, 10, 2]), "625.0000000000");
    assert_eq!(square_of([2, 3]), "25.0000000000");
    assert_eq!(square_of([-1, -4, -2, -3]), "100.0000000000");
    assert_eq!(square_of([446_461_548, 0]), "199327913842556288.0000000000");
    assert_eq!(
        square_of([-422_431_541, -98_412, -123_456]),
        "178635904139321280.0000000000"
    );
}

#[test]
fn test_square_floats() {
    assert_eq!(square_of([0.1, 0.02]), "0.0144000000");
    assert_eq!(square_of([-0.11, -0.09]), "0.0400000000");
    assert_eq!(square_of([0.00012345678911, 0.0000000251]), "0.0000000152");
}

#[test]
fn test_square_empty_and_zero() {
    assert_eq!(square_of_sum(&[]).unwrap(), "0.0000000000");
    assert_eq!(square_of([0, 0, 0, 0]), "0.0000000000");
}

#[test]
fn test_square_always_has_ten_fraction_digits() {
    let inputs: Vec<Vec<Argument>> = vec![
        vec![],
        vec![Argument::from(1)],
        vec![Argument::from("12345,678")],
        vec![Argument::from(-3.25), Argument::from("x")],
        vec![Argument::from(1e-9)],
        vec![Argument::from(987_654_321)],
    ];
    for args in inputs {
        let formatted = square_of_sum(&args).unwrap();
        let (_, fraction) = formatted.split_once('.').expect("decimal point");
        assert_eq!(fraction.len(), 10, "{formatted}");
        assert!(fraction.bytes().all(|b| b.is_ascii_digit()), "{formatted}");
    }
}

#[test]
fn test_digit_tokens_match_plain_parse() {
    for token in ["0", "7", "12", "3,25", "3.25", "1000,5", "00,5", "99999999"] {
        let expected: f64 = token.replace(',', ".").parse().unwrap();
        assert_eq!(parse_text(token), Some(expected), "{token}");
    }
}

#[test]
fn test_tokens_with_letters_are_zero() {
    let args: Vec<Argument> = ["1a", "a1", "1,a", "1.2.x", "e", "12f"]
        .into_iter()
        .map(Argument::from)
        .collect();
    assert!(normalize(&args).unwrap().iter().all(|v| *v == 0.0));
}

#[test]
fn test_empty_normalizes_like_two_zeros() {
    assert_eq!(
        normalize(&[]).unwrap(),
        normalize(&[Argument::from(0), Argument::from(0)]).unwrap()
    );
}

#[test]
fn test_trailing_separator_and_sign_policy() {
    // Both degrade to zero in lenient mode and fail in strict mode.
    assert_eq!(sum_of(["5.", "3"]), 3.0);
    assert_eq!(sum_of(["-5", "3"]), 3.0);

    let strict = Calculator::from_values(["3", "-5"]).with_mode(ValidationMode::Strict);
    assert_eq!(
        strict.sum().unwrap_err(),
        CalculatorError::MalformedNumber {
            position: 1,
            input: "-5".to_string()
        }
    );

    // Signs are fine on numeric arguments.
    assert_eq!(sum_of([-5, 3]), -2.0);
}

#[test]
fn test_unsupported_argument_propagates() {
    let args = vec![
        Argument::from(1),
        Argument::from("2"),
        Argument::Unsupported("object".to_string()),
    ];
    let err = square_of_sum(&args).unwrap_err();
    assert_eq!(err.position(), 2);
    assert_eq!(
        err.to_string(),
        "Argument 2 has unsupported type 'object' and cannot be coerced to a number"
    );
}

#[test]
fn test_input_is_not_mutated() {
    let calculator = Calculator::from_values([" 5,3 ", "x"]);
    let before = calculator.args().to_vec();
    calculator.square_of_sum().unwrap();
    assert_eq!(calculator.args(), before.as_slice());
}

#[test]
fn test_non_finite_values_propagate() {
    let calc = Calculator::from_values([f64::INFINITY, 1.0]);
    assert_eq!(calc.sum().unwrap(), f64::INFINITY);
    assert_eq!(calc.square_of_sum().unwrap(), "inf");

    let calc = Calculator::from_values([f64::NAN]);
    assert!(calc.sum().unwrap().is_nan());
    assert_eq!(calc.square_of_sum().unwrap(), "NaN");
}
