use cxcalc_calculator::built_in::add::add;
use cxcalc_calculator::built_in::divide::divide;
use cxcalc_calculator::built_in::multiply::multiply;
use cxcalc_calculator::{CalculationError, Complex, OperationKind, evaluate, evaluate_label};
use proptest::prelude::*;

fn complex(range: std::ops::Range<f64>) -> impl Strategy<Value = Complex> {
    (range.clone(), range).prop_map(|(re, im)| Complex::new(re, im))
}

fn approx_eq(left: Complex, right: Complex) -> bool {
    let tolerance = 1e-9 * (1.0 + right.norm());
    (left.re - right.re).abs() <= tolerance && (left.im - right.im).abs() <= tolerance
}

#[test]
fn add_works() {
    let result = add(Complex::new(1.0, 2.0), Complex::new(3.0, -1.0)).unwrap();
    assert_eq!(result, Complex::new(4.0, 1.0));
}

#[test]
fn multiply_works() {
    let result = multiply(Complex::new(1.0, 2.0), Complex::new(3.0, 4.0)).unwrap();
    assert_eq!(result, Complex::new(-5.0, 10.0));
}

#[test]
fn divide_works() {
    let result = divide(Complex::new(-5.0, 10.0), Complex::new(3.0, 4.0)).unwrap();
    assert!(approx_eq(result, Complex::new(1.0, 2.0)));
}

#[test]
fn divide_by_zero_is_rejected() {
    assert_eq!(
        evaluate(OperationKind::Divide, Complex::new(1.0, 0.0), Complex::ZERO),
        Err(CalculationError::DivisionByZero)
    );
}

#[test]
fn unknown_label_adds() {
    let result = evaluate_label("Unknown", Complex::new(2.0, 0.0), Complex::new(3.0, 0.0));
    assert_eq!(result, Ok(Complex::new(5.0, 0.0)));
}

#[test]
fn labels_select_their_operation() {
    let a = Complex::new(4.0, 2.0);
    let b = Complex::new(2.0, 0.0);
    assert_eq!(evaluate_label("Addition", a, b), Ok(Complex::new(6.0, 2.0)));
    assert_eq!(evaluate_label("Multiplication", a, b), Ok(Complex::new(8.0, 4.0)));
    assert_eq!(evaluate_label("Division", a, b), Ok(Complex::new(2.0, 1.0)));
}

proptest! {
    #[test]
    fn addition_commutes(a in complex(-1e6..1e6), b in complex(-1e6..1e6)) {
        prop_assert_eq!(
            evaluate(OperationKind::Add, a, b),
            evaluate(OperationKind::Add, b, a)
        );
    }

    #[test]
    fn multiplication_commutes(a in complex(-1e6..1e6), b in complex(-1e6..1e6)) {
        prop_assert_eq!(
            evaluate(OperationKind::Multiply, a, b),
            evaluate(OperationKind::Multiply, b, a)
        );
    }

    #[test]
    fn division_undoes_multiplication(a in complex(-1e3..1e3), b in complex(-1e3..1e3)) {
        prop_assume!(b.norm() > 1e-3);
        let product = evaluate(OperationKind::Multiply, a, b).unwrap();
        let quotient = evaluate(OperationKind::Divide, product, b).unwrap();
        prop_assert!(approx_eq(quotient, a), "{} / {} gave {}, expected {}", product, b, quotient, a);
    }

    #[test]
    fn division_by_zero_always_fails(a in complex(-1e6..1e6)) {
        prop_assert_eq!(
            evaluate(OperationKind::Divide, a, Complex::ZERO),
            Err(CalculationError::DivisionByZero)
        );
    }
}
