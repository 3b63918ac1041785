#[macro_use]
extern crate maplit;

pub mod automaton;
pub mod dfa;
pub mod grammar;
pub mod nfa;
pub mod report;

pub use automaton::{Automaton, StateId, EPSILON};
pub use dfa::{accepts, to_dfa, DeterminizeError, Verdict};
pub use grammar::{derive_grammar, Production};
pub use nfa::{compile_regex, CompileError};
pub use report::ReportStore;
