// src/lib.rs
//
// Calculatrice réelle — moteur d'évaluation (bibliothèque)
// --------------------------------------------------------
// Les collaborateurs (champ de saisie, conversions d'unités) fournissent
// une chaîne brute et consomment un double ; tout le reste vit ici.

pub mod noyau;

pub use noyau::{eval_expression, ErreurNoyau};
