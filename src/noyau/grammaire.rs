// src/noyau/grammaire.rs
//
// Catalogue de motifs : la grammaire de surface, compilée une fois pour
// toute la durée du processus (lecture seule après construction).
//
// Rôles :
// - voie rapide  : l'expression entière est un nombre signé nu
// - garde dure   : jeu de caractères + opérateurs binaires jamais adjacents
// - gardes douces: équilibre ( ) et | |, groupe sans aucun chiffre
// - normalisation: trim + suppression des suites de 2 espaces et plus

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Nombre décimal signé nu (voie rapide) : `.` invariant, `-` optionnel.
    static ref NOMBRE_SEUL: Regex = Regex::new(
        r"^-?(\d+(\.\d+)?|\.\d+)$"
    ).unwrap();

    /// Jeu de caractères autorisé pour toute l'expression.
    static ref JEU_DE_CARACTERES: Regex = Regex::new(
        r"^[0-9.+\-*/^()|! ]*$"
    ).unwrap();

    /// Deux opérateurs binaires adjacents : toujours interdit.
    /// Le moins unaire passe par les parenthèses : `3*(-2)`, pas `3*-2`.
    static ref OPERATEURS_ADJACENTS: Regex = Regex::new(
        r"[+\-*/^][+\-*/^]"
    ).unwrap();

    /// Paire de parenthèses sans aucun chiffre : `()`, `(+)`, `(|)`, ...
    /// Fiable en texte brut car ouvrante et fermante sont distinctes.
    /// Les barres |...| sont ambiguës ici (une fermante ressemble à une
    /// ouvrante) : leur cas vide est détecté APRÈS tokenisation
    /// (jetons::contient_abs_sans_chiffre).
    static ref PARENS_SANS_CHIFFRE: Regex = Regex::new(
        r"\([^()0-9]*\)"
    ).unwrap();

    /// Suites internes d'au moins deux espaces : supprimées avant analyse.
    static ref ESPACES_MULTIPLES: Regex = Regex::new(
        r" {2,}"
    ).unwrap();
}

/// Trim + suppression des suites de 2 espaces et plus.
/// (Un espace isolé est toléré par le jeu de caractères puis ignoré
/// par le tokenizer.)
pub fn normalise(s: &str) -> String {
    ESPACES_MULTIPLES.replace_all(s.trim(), "").into_owned()
}

/// Voie rapide : l'expression entière est un nombre signé nu.
pub fn est_nombre_seul(s: &str) -> bool {
    NOMBRE_SEUL.is_match(s)
}

/// Garde dure : jeu de caractères + pas d'opérateurs binaires adjacents.
pub fn respecte_syntaxe(s: &str) -> bool {
    JEU_DE_CARACTERES.is_match(s) && !OPERATEURS_ADJACENTS.is_match(s)
}

/// Garde douce : autant de `(` que de `)`, nombre pair de `|`.
/// Un déséquilibre est une condition terminale (NaN), pas une erreur dure.
pub fn groupes_equilibres(s: &str) -> bool {
    let ouvrantes = s.chars().filter(|&c| c == '(').count();
    let fermantes = s.chars().filter(|&c| c == ')').count();
    let barres = s.chars().filter(|&c| c == '|').count();
    ouvrantes == fermantes && barres % 2 == 0
}

/// Garde douce : une paire `(...)` sans aucun chiffre.
/// (Le pendant pour |...| vit dans jetons::contient_abs_sans_chiffre.)
pub fn contient_groupe_sans_chiffre(s: &str) -> bool {
    PARENS_SANS_CHIFFRE.is_match(s)
}
