//! Noyau — évaluation (pipeline réel)
//!
//! normalise -> voie rapide -> garde syntaxique -> gardes douces
//!        -> jetons -> RPN -> Expr -> budgets -> évaluation
//!
//! Deux niveaux d'échec (contrat appelant) :
//! - DUR  : Err(ErreurNoyau) — garde syntaxique, domaine factorielle, budgets.
//! - DOUX : Ok(f64::NAN)     — déséquilibre ( ) ou | |, groupe sans chiffre,
//!   division par zéro, forme finale non numérique. Jamais levé en erreur.

use tracing::{debug, warn};

use super::combinatoire::factorielle;
use super::erreurs::ErreurNoyau;
use super::expr::Expr;
use super::grammaire;
use super::jetons::{contient_abs_sans_chiffre, format_tokens, tokenize};
use super::rpn::{from_rpn, to_rpn};

/// Budget jetons : au-delà, on refuse (TropComplexe) avant tout parsing.
const MAX_JETONS: usize = 4096;

/// Budget profondeur de l'arbre : vérifié ITÉRATIVEMENT avant l'évaluation
/// récursive, pour échouer fermé au lieu d'épuiser la pile.
const MAX_PROFONDEUR: usize = 512;

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
    pub arbre: String,
    pub note: String,
}

/// Issue d'un nœud : une valeur, ou la sentinelle "indéfini" qui
/// court-circuite tout le reste de l'évaluation (ex: division par zéro).
enum Sortie {
    Valeur(f64),
    Indefini,
}

/// API publique : évalue une expression et retourne un double.
/// `Ok(f64::NAN)` est la sentinelle douce ; `Err(_)` le niveau dur.
pub fn eval_expression(expr_str: &str) -> Result<f64, ErreurNoyau> {
    eval_avec_demarche(expr_str).map(|(v, _)| v)
}

/// Variante : retourne aussi la démarche (jetons, RPN, arbre) pour la CLI.
pub fn eval_avec_demarche(expr_str: &str) -> Result<(f64, DemarcheNoyau), ErreurNoyau> {
    let mut d = DemarcheNoyau {
        note: "Pipeline: normalise → voie rapide → gardes → jetons → RPN → arbre → évaluation."
            .into(),
        ..DemarcheNoyau::default()
    };

    // 1) Normalisation : trim + suppression des doubles espaces.
    let s = grammaire::normalise(expr_str);

    // Entrée vide : sentinelle douce (comportement épinglé par test).
    if s.is_empty() {
        d.arbre = "(vide)".into();
        return Ok((f64::NAN, d));
    }

    // 2) Voie rapide : nombre signé nu.
    if grammaire::est_nombre_seul(&s) {
        if let Some(v) = super::format::parse_nombre(&s) {
            d.arbre = super::format::format_nombre(v);
            return Ok((v, d));
        }
    }

    // 3) Garde syntaxique DURE.
    if !grammaire::respecte_syntaxe(&s) {
        return Err(ErreurNoyau::ExpressionInvalide);
    }

    // 4) Gardes DOUCES structurelles.
    if !grammaire::groupes_equilibres(&s) {
        debug!(expr = %s, "groupes déséquilibrés => NaN");
        d.arbre = "(déséquilibré)".into();
        return Ok((f64::NAN, d));
    }
    if grammaire::contient_groupe_sans_chiffre(&s) {
        debug!(expr = %s, "parenthèses sans chiffre => NaN");
        d.arbre = "(groupe vide)".into();
        return Ok((f64::NAN, d));
    }

    // 5) Jetons (un échec ici est une forme inutilisable => NaN).
    let jetons = match tokenize(&s) {
        Ok(j) => j,
        Err(e) => {
            debug!(expr = %s, err = %e, "tokenize => NaN");
            return Ok((f64::NAN, d));
        }
    };
    if jetons.len() > MAX_JETONS {
        warn!(n = jetons.len(), "budget jetons dépassé");
        return Err(ErreurNoyau::TropComplexe);
    }
    d.jetons = format_tokens(&jetons);
    debug!(jetons = %d.jetons);

    // Barres |...| sans aucun nombre : détectées ICI, sur les jetons,
    // où ouvrante et fermante sont désambiguïsées (grammaire.rs explique
    // pourquoi le texte brut ne suffit pas).
    if contient_abs_sans_chiffre(&jetons) {
        debug!(expr = %s, "barres sans chiffre => NaN");
        return Ok((f64::NAN, d));
    }

    // 6) RPN.
    let rpn = match to_rpn(&jetons) {
        Ok(r) => r,
        Err(e) => {
            debug!(expr = %s, err = %e, "RPN => NaN");
            return Ok((f64::NAN, d));
        }
    };
    d.rpn = format_tokens(&rpn);
    debug!(rpn = %d.rpn);

    // 7) Arbre.
    let arbre = match from_rpn(&rpn) {
        Ok(a) => a,
        Err(e) => {
            debug!(expr = %s, err = %e, "arbre => NaN");
            return Ok((f64::NAN, d));
        }
    };
    d.arbre = format!("{arbre}");

    // 8) Budget profondeur (itératif) AVANT la descente récursive.
    let p = arbre.profondeur();
    if p > MAX_PROFONDEUR {
        warn!(profondeur = p, "budget profondeur dépassé");
        return Err(ErreurNoyau::TropComplexe);
    }

    // 9) Évaluation.
    match eval_noeud(&arbre)? {
        Sortie::Valeur(v) => Ok((v, d)),
        Sortie::Indefini => Ok((f64::NAN, d)),
    }
}

/// Descente récursive (profondeur déjà bornée par MAX_PROFONDEUR).
fn eval_noeud(e: &Expr) -> Result<Sortie, ErreurNoyau> {
    use Expr::*;
    use Sortie::{Indefini, Valeur};

    // Extrait la valeur d'un sous-nœud, ou court-circuite l'indéfini.
    macro_rules! valeur {
        ($x:expr) => {
            match eval_noeud($x)? {
                Valeur(v) => v,
                Indefini => return Ok(Indefini),
            }
        };
    }

    let sortie = match e {
        Nombre(v) => Valeur(*v),

        Fact(x) => {
            let v = valeur!(x);
            // négatif ou non-entier : erreur DURE (voir combinatoire.rs)
            Valeur(factorielle(v)?)
        }

        Abs(x) => Valeur(valeur!(x).abs()),

        Pow(a, b) => {
            let base = valeur!(a);
            let exp = valeur!(b);
            Valeur(base.powf(exp))
        }

        Add(a, b) => Valeur(valeur!(a) + valeur!(b)),
        Sub(a, b) => Valeur(valeur!(a) - valeur!(b)),
        Mul(a, b) => Valeur(valeur!(a) * valeur!(b)),

        Div(a, b) => {
            let num = valeur!(a);
            let den = valeur!(b);
            if den == 0.0 {
                // division par zéro : sentinelle douce, tout s'arrête
                Indefini
            } else {
                Valeur(num / den)
            }
        }
    };

    Ok(sortie)
}
