use crate::automaton::{Automaton, StateId};
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeterminizeError {
  /// the source automaton has no initial state to close over.
  MissingInitial,
}

impl Display for DeterminizeError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      DeterminizeError::MissingInitial => write!(f, "automaton has no initial state"),
    }
  }
}

impl Error for DeterminizeError {}

/// outcome of running one input string through a DFA. An out-of-alphabet
/// symbol is its own verdict, distinct from an ordinary reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
  Accepted,
  Rejected,
  InvalidSymbol(char),
}

/// subset construction: each set of NFA states reachable together becomes
/// one DFA state, numbered in first-seen order starting from the epsilon
/// closure of the initial set. The resulting DFA is partial; a missing
/// transition means reject.
pub fn to_dfa(nfa: &Automaton) -> Result<Automaton, DeterminizeError> {
  if nfa.initial.is_empty() {
    return Err(DeterminizeError::MissingInitial);
  }

  let mut dfa = Automaton::new();
  dfa.alphabet = nfa.alphabet.clone();
  dfa.initial = btreeset! {0};

  // composite NFA-state sets keyed as-is; set equality decides whether a
  // subset has been seen before.
  let mut ids: HashMap<BTreeSet<StateId>, StateId> = HashMap::new();
  let mut queue: VecDeque<(BTreeSet<StateId>, StateId)> = VecDeque::new();
  let mut counter: StateId = 1;

  let start = nfa.epsilon_closure(&nfa.initial);
  ids.insert(start.clone(), 0);
  queue.push_back((start, 0));

  while let Some((current, current_id)) = queue.pop_front() {
    // alphabet is ordered, so the numbering is canonical for a given NFA.
    for &symbol in nfa.alphabet.iter() {
      let next = nfa.move_on_symbol(&current, symbol);
      if next.is_empty() {
        continue;
      }
      let next_id = match ids.get(&next) {
        Some(&id) => id,
        None => {
          let id = counter;
          counter += 1;
          ids.insert(next.clone(), id);
          queue.push_back((next, id));
          id
        }
      };
      dfa.add_transition(current_id, symbol, btreeset! {next_id});
    }
    dfa.states.insert(current_id);
    if current.intersection(&nfa.finals).next().is_some() {
      dfa.finals.insert(current_id);
    }
  }

  log::debug!(
    "determinized {} NFA states into {} DFA states",
    nfa.states.len(),
    dfa.states.len()
  );
  Ok(dfa)
}

/// run a string through the DFA. Symbols outside the alphabet are reported
/// on their own; a state without a transition on the read symbol rejects.
pub fn accepts(dfa: &Automaton, input: &str) -> Verdict {
  let mut current = match dfa.initial.iter().next() {
    Some(&state) => state,
    None => return Verdict::Rejected,
  };

  for symbol in input.chars() {
    if !dfa.alphabet.contains(&symbol) {
      return Verdict::InvalidSymbol(symbol);
    }
    match dfa.destinations(current, symbol).and_then(|destinations| destinations.iter().next()) {
      Some(&next) => current = next,
      None => return Verdict::Rejected,
    }
  }

  if dfa.finals.contains(&current) {
    Verdict::Accepted
  } else {
    Verdict::Rejected
  }
}
