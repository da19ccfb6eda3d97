// src/main.rs
//
// Calculatrice réelle — front CLI
// -------------------------------
// Rôle : point d'entrée seulement. Le contrat à deux niveaux du noyau
// est rendu ici :
// - sentinelle douce (NaN)  => «indéfini»
// - erreur dure (Err)       => message d'erreur, code de sortie 1
//
// Sans argument : REPL sur stdin (une expression par ligne, EOF pour finir).

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use calculatrice_reelle::noyau::{eval_avec_demarche, format_nombre};

#[derive(Parser, Debug)]
#[command(
    name = "calculatrice_reelle",
    about = "Moteur d'évaluation d'expressions arithmétiques (jetons → RPN → arbre)"
)]
struct Cli {
    /// Expression à évaluer ; sans argument, lance le REPL stdin.
    expression: Vec<String>,

    /// Affiche aussi la démarche (jetons, RPN, arbre).
    #[arg(long)]
    demarche: bool,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if !cli.expression.is_empty() {
        let expr = cli.expression.join(" ");
        let code = evalue_et_affiche(&expr, cli.demarche);
        std::process::exit(code);
    }

    // REPL : une expression par ligne.
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut ligne = String::new();
        if stdin.lock().read_line(&mut ligne)? == 0 {
            break; // EOF
        }
        let ligne = ligne.trim();
        if ligne.is_empty() {
            continue;
        }
        if ligne == "quit" || ligne == "q" {
            break;
        }

        evalue_et_affiche(ligne, cli.demarche);
    }

    Ok(())
}

/// Évalue puis affiche ; retourne le code de sortie (0 doux, 1 dur).
fn evalue_et_affiche(expr: &str, avec_demarche: bool) -> i32 {
    match eval_avec_demarche(expr) {
        Ok((v, d)) => {
            if avec_demarche {
                println!("jetons : {}", d.jetons);
                println!("rpn    : {}", d.rpn);
                println!("arbre  : {}", d.arbre);
            }
            if v.is_nan() {
                println!("indéfini");
            } else {
                println!("{}", format_nombre(v));
            }
            0
        }
        Err(e) => {
            eprintln!("erreur : {e}");
            1
        }
    }
}
