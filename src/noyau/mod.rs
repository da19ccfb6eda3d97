//! Noyau flottant — moteur d'évaluation d'expressions
//!
//! Organisation interne :
//! - erreurs.rs      : taxonomie dure (les échecs doux sont des NaN)
//! - grammaire.rs    : catalogue de motifs (garde syntaxique, voie rapide)
//! - jetons.rs       : tokenisation (dont désambiguïsation des barres | |)
//! - rpn.rs          : shunting-yard + construction Expr
//! - expr.rs         : AST f64 + profondeur itérative (garde-fou)
//! - eval.rs         : pipeline complet + budgets
//! - format.rs       : formateur décimal invariant (10 décimales)
//! - combinatoire.rs : factorielle + combinaisons
//! - conversions.rs  : table affine de conversions d'unités

pub mod combinatoire;
pub mod conversions;
pub mod erreurs;
pub mod eval;
pub mod expr;
pub mod format;
pub mod grammaire;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use combinatoire::{combinaisons, factorielle};
pub use erreurs::ErreurNoyau;
pub use eval::{eval_avec_demarche, eval_expression};
pub use format::format_nombre;
