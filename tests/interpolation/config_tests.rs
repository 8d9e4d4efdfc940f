use monocubic::interpolation::errors::InterpolationError;
use monocubic::interpolation::hermite::{interpolate, HermiteCfg, DEFAULT_TENSION};
use monocubic::interpolation::config::DEFAULT_X_TOL;
use monocubic::interpolation::Method;

use crate::common::CubicResult;

#[test]
fn defaults() {
    let cfg = HermiteCfg::new(Method::Cardinal);
    assert_eq!(cfg.method(), Method::Cardinal);
    assert_eq!(cfg.tension(), DEFAULT_TENSION);
    assert_eq!(cfg.common().x_min_spacing(), DEFAULT_X_TOL);
    assert!(cfg.common().x().is_empty());
    assert!(cfg.common().x_eval().is_empty());
}

#[test]
fn with_method_replaces_method() {
    let cfg = HermiteCfg::new(Method::Linear).with_method(Method::Steffen);
    assert_eq!(cfg.method(), Method::Steffen);
}

#[test]
fn empty_x_rejected() {
    let err = HermiteCfg::new(Method::Linear).set_x(&[]).unwrap_err();
    assert!(matches!(err, InterpolationError::EmptyInput));
}

#[test]
fn single_point_rejected() {
    let err = HermiteCfg::new(Method::Linear).set_x(&[1.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::InsufficientPoints { got: 1 }));
}

#[test]
fn non_finite_x_rejected() {
    let err = HermiteCfg::new(Method::Linear)
        .set_x(&[0.0, f64::NAN, 2.0])
        .unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 1 }));
}

#[test]
fn duplicate_x_rejected() {
    let err = HermiteCfg::new(Method::FritschCarlson)
        .set_x(&[0.0, 1.0, 1.0, 2.0])
        .unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { x1, x2 } if x1 == 1.0 && x2 == 1.0));
}

#[test]
fn decreasing_x_rejected() {
    let err = HermiteCfg::new(Method::FritschCarlson)
        .set_x(&[0.0, 2.0, 1.0])
        .unwrap_err();
    assert!(matches!(err, InterpolationError::NonIncreasingX));
}

#[test]
fn x_tol_rechecks_breakpoints() -> CubicResult {
    let x = [0.0, 0.5, 0.6, 1.0];
    let cfg = HermiteCfg::new(Method::Linear).set_x(&x)?;

    let err = cfg.set_x_tol(0.2).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { x1, x2 } if x1 == 0.5 && x2 == 0.6));

    let cfg = cfg.set_x_tol(0.05)?;
    assert_eq!(cfg.common().x_min_spacing(), 0.05);
    Ok(())
}

#[test]
fn invalid_x_tol_rejected() {
    for bad in [0.0, -1e-3, f64::INFINITY, f64::NAN] {
        let err = HermiteCfg::new(Method::Linear).set_x_tol(bad).unwrap_err();
        assert!(matches!(err, InterpolationError::InvalidXTol { .. }), "accepted {}", bad);
    }
}

#[test]
fn unequal_lengths_rejected_either_order() -> CubicResult {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0];

    let err = HermiteCfg::new(Method::Linear).set_x(&x)?.set_y(&y).unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalLength { x_len: 3, y_len: 2 }));

    let err = HermiteCfg::new(Method::Linear).set_y(&y)?.set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalLength { x_len: 3, y_len: 2 }));
    Ok(())
}

#[test]
fn non_finite_y_rejected() {
    let err = HermiteCfg::new(Method::Linear)
        .set_y(&[0.0, 1.0, f64::INFINITY])
        .unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 2 }));
}

#[test]
fn non_finite_x_eval_rejected() {
    let err = HermiteCfg::new(Method::Linear)
        .set_x_eval(&[0.5, f64::NAN])
        .unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 1 }));
}

#[test]
fn tension_range_enforced() -> CubicResult {
    for bad in [-0.1, 1.5, f64::NAN] {
        let err = HermiteCfg::new(Method::Cardinal).set_tension(bad).unwrap_err();
        assert!(matches!(err, InterpolationError::InvalidTension { .. }), "accepted {}", bad);
    }

    let cfg = HermiteCfg::new(Method::Cardinal).set_tension(1.0)?;
    assert_eq!(cfg.tension(), 1.0);
    let cfg = cfg.set_tension(0.0)?;
    assert_eq!(cfg.tension(), 0.0);
    Ok(())
}

#[test]
fn missing_values_rejected_at_evaluation() -> CubicResult {
    let x = [0.0, 1.0];
    let cfg = HermiteCfg::new(Method::Linear).set_x(&x)?;
    let err = interpolate(cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::EmptyInput));
    Ok(())
}

#[test]
fn error_messages_name_the_problem() {
    let err = InterpolationError::OutOfBounds { got: 1.5, x_min: 0.0, x_max: 1.0 };
    assert_eq!(err.to_string(), "evaluation point 1.5 out of bounds in [0, 1]");

    let err = InterpolationError::UnknownMethod { got: "akima".to_string() };
    assert_eq!(err.to_string(), "unknown interpolation method \"akima\"");
}
