use crate::automaton::Automaton;
use std::fmt;
use std::fmt::{Display, Formatter};

/// one right-linear production, e.g. `S0 -> aS1` or `S2 -> ε`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
  pub lhs: String,
  pub rhs: String,
}

impl Display for Production {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{} -> {}", self.lhs, self.rhs)
  }
}

/// derive the right-linear grammar mirroring the DFA's transitions: one
/// production per transition, plus `S<f> -> ε` for every final state. States
/// are walked in ascending order and symbols in ascending order within a
/// state, so the sequence is stable for a given DFA. No dedup, no
/// minimization.
pub fn derive_grammar(dfa: &Automaton) -> Vec<Production> {
  let mut productions = Vec::new();
  for &state in dfa.states.iter() {
    if let Some(by_symbol) = dfa.transitions.get(&state) {
      for (symbol, destinations) in by_symbol.iter() {
        for destination in destinations.iter() {
          productions.push(Production {
            lhs: format!("S{}", state),
            rhs: format!("{}S{}", symbol, destination),
          });
        }
      }
    }
    if dfa.finals.contains(&state) {
      productions.push(Production {
        lhs: format!("S{}", state),
        rhs: "ε".to_string(),
      });
    }
  }
  productions
}
