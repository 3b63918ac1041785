use anyhow::Result;
use automatas::{accepts, compile_regex, derive_grammar, to_dfa, ReportStore, Verdict};
use clap::{Parser, Subcommand};

#[derive(Subcommand)]
enum Commands {
  /// Compile a regex into an NFA and print it
  #[clap(name = "nfa")]
  Nfa { pattern: String },
  /// Compile and determinize a regex, optionally saving the AFD report
  #[clap(name = "dfa")]
  Dfa {
    pattern: String,
    #[clap(long)]
    save: bool,
  },
  /// Run an input string against the DFA for a regex
  #[clap(name = "run")]
  Run { pattern: String, input: String },
  /// Derive the right-linear grammar of the DFA for a regex
  #[clap(name = "grammar")]
  Grammar {
    pattern: String,
    #[clap(long)]
    save: bool,
  },
}

#[derive(Parser)]
struct Args {
  #[clap(subcommand)]
  sub_command: Commands,
}

fn main() -> Result<()> {
  let args = Args::parse();
  match args.sub_command {
    Commands::Nfa { pattern } => {
      let nfa = compile_regex(&pattern)?;
      print!("{}", nfa);
    }
    Commands::Dfa { pattern, save } => {
      let dfa = to_dfa(&compile_regex(&pattern)?)?;
      print!("{}", dfa);
      if save {
        let path = ReportStore::new(".").save_dfa(&dfa)?;
        println!("AFD guardado en {}", path.display());
      }
    }
    Commands::Run { pattern, input } => {
      let dfa = to_dfa(&compile_regex(&pattern)?)?;
      match accepts(&dfa, &input) {
        Verdict::Accepted => println!("Cadena aceptada."),
        Verdict::Rejected => println!("Cadena rechazada."),
        Verdict::InvalidSymbol(symbol) => {
          println!("El símbolo {} no pertenece al alfabeto.", symbol)
        }
      }
    }
    Commands::Grammar { pattern, save } => {
      let dfa = to_dfa(&compile_regex(&pattern)?)?;
      let productions = derive_grammar(&dfa);
      for production in productions.iter() {
        println!("{}", production);
      }
      if save {
        let path = ReportStore::new(".").save_grammar(&productions)?;
        println!("Gramática guardada en {}", path.display());
      }
    }
  }
  Ok(())
}
