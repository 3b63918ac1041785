use crate::automaton::Automaton;
use crate::grammar::Production;
use std::fs::File;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};

/// hands out `AFD<n>.TXT` / `G<n>.TXT` names inside one directory and writes
/// the plain-text reports. The counters live here, one per artifact kind,
/// rather than in any global.
#[derive(Debug)]
pub struct ReportStore {
  dir: PathBuf,
  dfa_counter: u32,
  grammar_counter: u32,
}

impl ReportStore {
  pub fn new<P: AsRef<Path>>(dir: P) -> ReportStore {
    ReportStore {
      dir: dir.as_ref().to_path_buf(),
      dfa_counter: 1,
      grammar_counter: 1,
    }
  }

  /// write the automaton report as `AFD<n>.TXT` and return the path.
  /// Numbers restart per store, overwriting leftovers from earlier sessions.
  pub fn save_dfa(&mut self, dfa: &Automaton) -> io::Result<PathBuf> {
    let path = self.dir.join(format!("AFD{}.TXT", self.dfa_counter));
    self.dfa_counter += 1;
    let mut file = File::create(&path)?;
    write!(&mut file, "{}", dfa)?;
    Ok(path)
  }

  /// write the productions as `G<n>.TXT`, one per line, skipping names that
  /// already exist on disk.
  pub fn save_grammar(&mut self, productions: &[Production]) -> io::Result<PathBuf> {
    let mut path = self.dir.join(format!("G{}.TXT", self.grammar_counter));
    while path.exists() {
      self.grammar_counter += 1;
      path = self.dir.join(format!("G{}.TXT", self.grammar_counter));
    }
    let mut file = File::create(&path)?;
    for production in productions {
      writeln!(&mut file, "{}", production)?;
    }
    Ok(path)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dfa::to_dfa;
  use crate::grammar::derive_grammar;
  use crate::nfa::compile_regex;
  use std::fs;

  fn dfa_for(pattern: &str) -> Automaton {
    to_dfa(&compile_regex(pattern).unwrap()).unwrap()
  }

  #[test]
  fn test_report_layout() {
    let rendered = dfa_for("ab").to_string();
    assert_eq!(
      rendered,
      "Estados = {0,1,2}\n\
       Alfabeto = {a,b}\n\
       Estado inicial = {0}\n\
       Estados finales = {2}\n\
       Transiciones:\n\
       \x20 0 -- a --> 1\n\
       \x20 1 -- b --> 2\n"
    );
  }

  #[test]
  fn test_report_layout_self_loop() {
    let rendered = dfa_for("a*").to_string();
    assert_eq!(
      rendered,
      "Estados = {0}\n\
       Alfabeto = {a}\n\
       Estado inicial = {0}\n\
       Estados finales = {0}\n\
       Transiciones:\n\
       \x20 0 -- a --> 0\n"
    );
  }

  #[test]
  fn test_save_dfa_numbers_files() {
    let dir = std::env::temp_dir().join("automatas_report_dfa_test");
    fs::create_dir_all(&dir).unwrap();
    let mut store = ReportStore::new(&dir);
    let dfa = dfa_for("ab");
    let first = store.save_dfa(&dfa).unwrap();
    let second = store.save_dfa(&dfa).unwrap();
    assert_eq!(first.file_name().unwrap(), "AFD1.TXT");
    assert_eq!(second.file_name().unwrap(), "AFD2.TXT");
    assert_eq!(fs::read_to_string(&first).unwrap(), dfa.to_string());
    fs::remove_dir_all(&dir).unwrap();
  }

  #[test]
  fn test_save_grammar_skips_existing_files() {
    let dir = std::env::temp_dir().join("automatas_report_grammar_test");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("G1.TXT"), "taken").unwrap();
    let mut store = ReportStore::new(&dir);
    let productions = derive_grammar(&dfa_for("ab"));
    let path = store.save_grammar(&productions).unwrap();
    assert_eq!(path.file_name().unwrap(), "G2.TXT");
    assert_eq!(
      fs::read_to_string(&path).unwrap(),
      "S0 -> aS1\nS1 -> bS2\nS2 -> ε\n"
    );
    fs::remove_dir_all(&dir).unwrap();
  }
}
