//! Symbolic differentiation with respect to the single variable.
//!
//! Results are not simplified, so every application grows the tree.

use std::sync::Arc;

use crate::node::Node;

/// Differentiates `node` once.
pub fn derive(node: &Node) -> Node {
  match node {
    Node::Zero | Node::One | Node::Constant(_) => Node::Zero,
    Node::Variable => Node::One,
    Node::Add(a, b) => Node::add(derive(a), derive(b)),
    Node::Sub(a, b) => Node::sub(derive(a), derive(b)),
    Node::Mul(a, b) => {
      // Product rule: (a*b)' = a'*b + a*b'
      Node::add(
        Node::Mul(Arc::new(derive(a)), b.clone()),
        Node::Mul(a.clone(), Arc::new(derive(b))),
      )
    }
    Node::Div(a, b) => {
      // Quotient rule: (a/b)' = (b*a' - a*b') / (b*b)
      Node::div(
        Node::sub(
          Node::Mul(b.clone(), Arc::new(derive(a))),
          Node::Mul(a.clone(), Arc::new(derive(b))),
        ),
        Node::Mul(b.clone(), b.clone()),
      )
    }
    // exp(a)' = exp(a) * a'
    Node::Exp(a) => Node::mul(node.clone(), derive(a)),
    // ln(a)' = a' / a
    Node::Ln(a) => Node::Div(Arc::new(derive(a)), a.clone()),
    Node::Pow(a, b) => {
      // (a^b)' = a^(b-1) * (b*a' + a*ln(a)*b')
      let lowered = Node::Pow(
        a.clone(),
        Arc::new(Node::Sub(b.clone(), Arc::new(Node::One))),
      );
      let varying_base = Node::Mul(b.clone(), Arc::new(derive(a)));
      let varying_exponent = Node::Mul(
        a.clone(),
        Arc::new(Node::mul(Node::Ln(a.clone()), derive(b))),
      );
      Node::mul(lowered, Node::add(varying_base, varying_exponent))
    }
  }
}

/// Differentiates `node` `order` times. Order zero returns a copy of `node`.
pub fn derive_n(node: &Node, order: usize) -> Node {
  let mut current = node.clone();
  for _ in 0..order {
    current = derive(&current);
  }
  current
}

/// The first `len` entries of the derivative chain `D^0, D^1, ...`.
///
/// Each entry is derived from its predecessor, so building the chain costs
/// `len - 1` single differentiations.
pub fn derivative_chain(node: &Node, len: usize) -> Vec<Node> {
  let mut chain: Vec<Node> = Vec::with_capacity(len);
  if len == 0 {
    return chain;
  }
  chain.push(node.clone());
  while chain.len() < len {
    let next = derive(&chain[chain.len() - 1]);
    chain.push(next);
  }
  chain
}

impl Node {
  /// Shorthand for [`derive`].
  pub fn derive(&self) -> Node {
    derive(self)
  }
}
