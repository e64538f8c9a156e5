use super::*;

mod leaves {
  use super::*;

  #[test]
  fn constants_ignore_the_point() {
    for x in [-3.0, 0.0, 2.5] {
      assert_eq!(Node::Zero.eval(x), 0.0);
      assert_eq!(Node::One.eval(x), 1.0);
      assert_eq!(Node::constant(4.5).eval(x), 4.5);
      assert_eq!(PI.eval(x), std::f64::consts::PI);
      assert_eq!(E.eval(x), std::f64::consts::E);
    }
  }

  #[test]
  fn variable_is_the_point() {
    assert_eq!(Node::Variable.eval(1.75_f64), 1.75);
    assert_eq!(Node::Variable.eval(-2.0_f32), -2.0);
  }

  #[test]
  fn constant_converts_to_single_precision() {
    assert_eq!(PI.eval(0.0_f32), std::f32::consts::PI);
    assert_eq!(E.eval(0.0_f32), std::f32::consts::E);
  }

  #[test]
  fn named_constants_have_zero_derivative() {
    assert_eq!(derive(&PI), Node::Zero);
    assert_eq!(derive(&E), Node::Zero);
  }
}

mod arithmetic {
  use super::*;

  #[test]
  fn binary_operators() {
    let x = || Node::Variable;
    assert_eq!((x() + 2.0).eval(3.0), 5.0);
    assert_eq!((x() - 2.0).eval(3.0), 1.0);
    assert_eq!((x() * 2.0).eval(3.0), 6.0);
    assert_eq!((x() / 2.0).eval(3.0), 1.5);
    assert_eq!((1.0 - x()).eval(3.0), -2.0);
  }

  #[test]
  fn transcendental() {
    let exp = Node::exp(Node::Variable);
    let ln = Node::ln(Node::Variable);
    assert_close(exp.eval(1.0), std::f64::consts::E, 1e-15, "exp");
    assert_close(ln.eval(std::f64::consts::E), 1.0, 1e-15, "ln");
  }

  #[test]
  fn power_of_e_matches_exp() {
    let power = Node::pow(E, Node::Variable);
    let exp = Node::exp(Node::Variable);
    for x in [-1.5, 0.0, 0.5, 2.0] {
      assert_close(power.eval(x), exp.eval(x), 1e-13, "e^x");
    }
  }

  #[test]
  fn general_power_takes_real_exponents() {
    let expr = Node::pow(Node::Variable, Node::constant(0.5));
    assert_close(expr.eval(2.0), std::f64::consts::SQRT_2, 1e-15, "sqrt");
    let expected = 0.895_962_081_120_052_5;
    assert_close(log_power().eval(2.5), expected, 1e-12, "ln(x)^(π/x)");
  }
}

mod ieee_semantics {
  use super::*;

  #[test]
  fn division_by_zero_is_infinite_not_an_error() {
    let expr = Node::One / Node::Variable;
    assert_eq!(expr.eval(0.0_f64), f64::INFINITY);
    assert!((Node::Variable / Node::Variable).eval(0.0_f64).is_nan());
  }

  #[test]
  fn logarithm_of_non_positive_values() {
    let expr = Node::ln(Node::Variable);
    assert!(expr.eval(-1.0_f64).is_nan());
    assert_eq!(expr.eval(0.0_f64), f64::NEG_INFINITY);
  }

  #[test]
  fn nan_propagates_upward() {
    let expr = Node::exp(Node::ln(Node::Variable)) + 1.0;
    assert!(expr.eval(-4.0_f32).is_nan());
  }
}

mod structure {
  use super::*;

  #[test]
  fn display() {
    assert_eq!(log_power().to_string(), "ln(x)^(π/x)");
    assert_eq!(Node::exp(Node::Variable * 2.0).to_string(), "exp(x*2)");
    assert_eq!(Node::ln(E * Node::Variable).to_string(), "ln(e*x)");
    assert_eq!(
      (Node::One / (Node::Variable * Node::Variable)).to_string(),
      "1/(x*x)"
    );
  }

  #[test]
  fn is_constant() {
    assert!(Node::Zero.is_constant());
    assert!(Node::One.is_constant());
    assert!(PI.is_constant());
    assert!(!Node::Variable.is_constant());
    // Structural, not semantic: 1 + 1 is not a leaf constant.
    assert!(!(Node::One + Node::One).is_constant());
  }

  #[test]
  fn size_and_depth_of_the_default_expression() {
    // ln(x)^(π/x): Pow over Ln(x) and Div(π, x).
    let expr = log_power();
    assert_eq!(expr.size(), 6);
    assert_eq!(expr.depth(), 3);
  }

  #[test]
  fn depth_grows_along_the_derivative_chain() {
    let chain = derivative_chain(&log_power(), 4);
    let depths: Vec<usize> = chain.iter().map(Node::depth).collect();
    assert!(depths.windows(2).all(|pair| pair[0] < pair[1]), "{depths:?}");
    for node in &chain {
      assert!(node.depth() <= node.size());
    }
  }

  #[test]
  fn evaluation_does_not_change_the_node() {
    let expr = log_power();
    let before = expr.clone();
    let _ = expr.eval(2.0_f64);
    let _ = expr.derive();
    assert_eq!(expr, before);
  }
}
