// src/noyau/erreurs.rs
//
// Taxonomie à deux niveaux :
// - DURES  : variantes ci-dessous, propagées à l'appelant (Result::Err).
// - DOUCES : f64::NAN retourné comme valeur normale (division par zéro,
//   groupes déséquilibrés, groupe sans chiffre, forme finale non numérique).
//
// Contrat : l'appelant affiche les deux niveaux différemment
// («indéfini» pour NaN, message d'erreur pour une variante dure).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    /// Caractère hors grammaire ou deux opérateurs binaires adjacents.
    #[error("expression invalide : caractère ou enchaînement d'opérateurs interdit")]
    ExpressionInvalide,

    /// Argument hors du domaine d'une fonction (factorielle d'un négatif,
    /// NaN fourni à une conversion d'unités, ...).
    #[error("hors domaine : {0}")]
    HorsDomaine(String),

    /// Argument structurellement impossible (ex: combinaisons avec n < r).
    #[error("argument invalide : {0}")]
    ArgumentInvalide(String),

    /// Budget jetons ou profondeur dépassé : on échoue fermé plutôt que
    /// de risquer l'épuisement de pile sur une entrée hostile.
    #[error("expression trop complexe : budget dépassé")]
    TropComplexe,
}
