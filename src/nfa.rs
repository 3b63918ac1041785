use crate::automaton::{Automaton, StateId, EPSILON};
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

/// structural problems found while wiring the pattern into an automaton.
/// Compilation aborts; no partial automaton is handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
  /// an operator arrived with no preceding construct on the marker stack.
  UnexpectedOperator { op: char, pos: usize },
  /// `|` fired where no state exists in front of the branch to skip from.
  OrphanAlternation { pos: usize },
  /// the epsilon marker cannot double as an input symbol.
  ReservedSymbol { pos: usize },
}

impl Display for CompileError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      CompileError::UnexpectedOperator { op, pos } => {
        write!(f, "operator '{}' at position {} has nothing to apply to", op, pos)
      }
      CompileError::OrphanAlternation { pos } => {
        write!(f, "alternation at position {} has no state before its left branch", pos)
      }
      CompileError::ReservedSymbol { pos } => {
        write!(f, "'{}' at position {} is reserved for epsilon transitions", EPSILON, pos)
      }
    }
  }
}

impl Error for CompileError {}

/// compile a pattern over `( ) * + |` and literal characters into an NFA.
///
/// One left-to-right pass with a single marker stack and a monotonically
/// increasing state counter; literals chain `n --c--> n+1`, operators only
/// add epsilon wiring between already-numbered states. This is deliberately
/// the position-based construction, not a parse-tree Thompson construction:
/// the state numbering it yields is what the report files and the derived
/// grammars are built from, so the wiring below (which marker each operator
/// pops, the `alt_start - 1` source for `|`) stays exactly as it is.
pub fn compile_regex(pattern: &str) -> Result<Automaton, CompileError> {
  let mut nfa = Automaton::new();
  let mut stack: Vec<StateId> = Vec::new();
  let mut counter: StateId = 0;

  for (pos, ch) in pattern.chars().enumerate() {
    match ch {
      '(' => {
        stack.push(counter);
      }
      ')' => {
        // group exit: epsilon from the popped marker to the current frontier.
        let start = stack
          .pop()
          .ok_or(CompileError::UnexpectedOperator { op: ch, pos })?;
        nfa.add_transition(start, EPSILON, btreeset! {counter});
      }
      '*' => {
        // skip edge forwards, repeat edge backwards, marker stays available.
        let start = stack
          .pop()
          .ok_or(CompileError::UnexpectedOperator { op: ch, pos })?;
        nfa.add_transition(start, EPSILON, btreeset! {counter});
        nfa.add_transition(counter, EPSILON, btreeset! {start});
        stack.push(start);
      }
      '+' => {
        // repeat edge only; one pass through the construct is mandatory.
        let start = stack
          .pop()
          .ok_or(CompileError::UnexpectedOperator { op: ch, pos })?;
        nfa.add_transition(counter, EPSILON, btreeset! {start});
        stack.push(start);
      }
      '|' => {
        // skip over the left alternative: epsilon from the state just before
        // it to the current frontier. With alt_start == 0 that source state
        // does not exist, so the pattern is rejected instead of wiring a
        // dangling endpoint.
        let alt_start = stack
          .pop()
          .ok_or(CompileError::UnexpectedOperator { op: ch, pos })?;
        if alt_start == 0 {
          return Err(CompileError::OrphanAlternation { pos });
        }
        nfa.add_transition(alt_start - 1, EPSILON, btreeset! {counter});
      }
      EPSILON => {
        return Err(CompileError::ReservedSymbol { pos });
      }
      literal => {
        nfa.add_transition(counter, literal, btreeset! {counter + 1});
        nfa.alphabet.insert(literal);
        stack.push(counter);
        counter += 1;
      }
    }
  }

  nfa.initial = btreeset! {0};
  nfa.finals = btreeset! {counter};
  nfa.states = (0..=counter).collect();
  log::debug!("compiled {:?} into an NFA with {} states", pattern, counter + 1);
  Ok(nfa)
}
