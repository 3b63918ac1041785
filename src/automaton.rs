use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fmt::{Display, Formatter};

/// state identifiers are dense integers handed out in construction order.
pub type StateId = usize;

/// reserved marker for transitions that consume no input. Never part of the alphabet.
pub const EPSILON: char = '$';

/// the one shared data structure of the toolchain. The compiler and the
/// determinizer each fill in a fresh instance; the simulator and the grammar
/// deriver only ever read one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Automaton {
  pub states: BTreeSet<StateId>,
  pub alphabet: BTreeSet<char>,
  pub initial: BTreeSet<StateId>,
  pub finals: BTreeSet<StateId>,
  // transitions are an owned relation (state, symbol) -> set of destinations.
  // ordered maps so every walk over the relation is deterministic.
  pub transitions: BTreeMap<StateId, BTreeMap<char, BTreeSet<StateId>>>,
}

impl Automaton {
  pub fn new() -> Automaton {
    Automaton::default()
  }

  /// insert or overwrite the destination set for (state, symbol).
  /// No validation; the caller guarantees state and symbol validity.
  pub fn add_transition(&mut self, state: StateId, symbol: char, destinations: BTreeSet<StateId>) {
    self
      .transitions
      .entry(state)
      .or_insert_with(BTreeMap::new)
      .insert(symbol, destinations);
  }

  pub fn destinations(&self, state: StateId, symbol: char) -> Option<&BTreeSet<StateId>> {
    self
      .transitions
      .get(&state)
      .and_then(|by_symbol| by_symbol.get(&symbol))
  }

  /// all states reachable from the given set through epsilon transitions
  /// alone. Stack-based with a visited set, so epsilon cycles terminate;
  /// the result is always a superset of the input.
  pub fn epsilon_closure(&self, states: &BTreeSet<StateId>) -> BTreeSet<StateId> {
    let mut closure = states.clone();
    let mut stack: Vec<StateId> = states.iter().copied().collect();
    while let Some(state) = stack.pop() {
      if let Some(destinations) = self.destinations(state, EPSILON) {
        for &next in destinations {
          if closure.insert(next) {
            stack.push(next);
          }
        }
      }
    }
    closure
  }

  /// the epsilon closure of everything reachable from the given set by
  /// reading one symbol. Empty when no member state moves on the symbol.
  pub fn move_on_symbol(&self, states: &BTreeSet<StateId>, symbol: char) -> BTreeSet<StateId> {
    let mut reached = BTreeSet::new();
    for &state in states {
      if let Some(destinations) = self.destinations(state, symbol) {
        reached.extend(destinations.iter().copied());
      }
    }
    if reached.is_empty() {
      reached
    } else {
      self.epsilon_closure(&reached)
    }
  }
}

fn joined<'a, T: Display + 'a>(items: impl IntoIterator<Item = &'a T>) -> String {
  items
    .into_iter()
    .map(|item| item.to_string())
    .collect::<Vec<String>>()
    .join(",")
}

/// the plain-text report layout. The section labels and the
/// `  <state> -- <symbol> --> <states>` line shape are load-bearing:
/// saved AFD files reproduce this output verbatim.
impl Display for Automaton {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    writeln!(f, "Estados = {{{}}}", joined(&self.states))?;
    writeln!(f, "Alfabeto = {{{}}}", joined(&self.alphabet))?;
    writeln!(f, "Estado inicial = {{{}}}", joined(&self.initial))?;
    writeln!(f, "Estados finales = {{{}}}", joined(&self.finals))?;
    writeln!(f, "Transiciones:")?;
    for (state, by_symbol) in self.transitions.iter() {
      for (symbol, destinations) in by_symbol.iter() {
        writeln!(f, "  {} -- {} --> {}", state, symbol, joined(destinations))?;
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn epsilon_cycle() -> Automaton {
    // 0 -$-> 1 -$-> 2 -$-> 0, plus 2 -a-> 3
    let mut automaton = Automaton::new();
    automaton.add_transition(0, EPSILON, btreeset! {1});
    automaton.add_transition(1, EPSILON, btreeset! {2});
    automaton.add_transition(2, EPSILON, btreeset! {0});
    automaton.add_transition(2, 'a', btreeset! {3});
    automaton.states = btreeset! {0, 1, 2, 3};
    automaton.alphabet = btreeset! {'a'};
    automaton
  }

  #[test]
  fn test_closure_contains_input() {
    let automaton = epsilon_cycle();
    let closure = automaton.epsilon_closure(&btreeset! {3});
    assert_eq!(closure, btreeset! {3});
  }

  #[test]
  fn test_closure_terminates_on_cycle() {
    let automaton = epsilon_cycle();
    let closure = automaton.epsilon_closure(&btreeset! {0});
    assert_eq!(closure, btreeset! {0, 1, 2});
  }

  #[test]
  fn test_closure_idempotent() {
    let automaton = epsilon_cycle();
    let once = automaton.epsilon_closure(&btreeset! {1});
    let twice = automaton.epsilon_closure(&once);
    assert_eq!(once, twice);
  }

  #[test]
  fn test_move_on_symbol_follows_epsilon_afterwards() {
    let mut automaton = epsilon_cycle();
    automaton.add_transition(3, EPSILON, btreeset! {1});
    let moved = automaton.move_on_symbol(&btreeset! {0, 1, 2}, 'a');
    // 2 -a-> 3, then 3 -$-> 1 -$-> 2 -$-> 0
    assert_eq!(moved, btreeset! {0, 1, 2, 3});
  }

  #[test]
  fn test_move_on_missing_symbol_is_empty() {
    let automaton = epsilon_cycle();
    assert!(automaton.move_on_symbol(&btreeset! {0, 1}, 'a').is_empty());
  }

  #[test]
  fn test_add_transition_overwrites() {
    let mut automaton = Automaton::new();
    automaton.add_transition(0, 'a', btreeset! {1});
    automaton.add_transition(0, 'a', btreeset! {2});
    assert_eq!(automaton.destinations(0, 'a'), Some(&btreeset! {2}));
  }
}
