// src/noyau/format.rs
//
// Formateur numérique invariant :
// - '.' comme séparateur décimal, JAMAIS de séparateur de milliers
// - au plus 10 chiffres après la virgule (perte admise au 10e chiffre)
// - zéros finaux retirés => un entier s'affiche nu ("7", pas "7.0000000000")
//
// Contrat : la sortie d'un nombre fini repasse telle quelle par la voie
// rapide de l'évaluateur (aller-retour sans perte au-delà du 10e chiffre).

/// Nombre de chiffres décimaux conservés.
const DECIMALES: usize = 10;

/// Rend un f64 en texte décimal invariant.
pub fn format_nombre(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let mut s = format!("{:.*}", DECIMALES, v);

    // retire les zéros finaux, puis le point s'il reste seul
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }

    // -0 tronqué => 0
    if s == "-0" {
        s = "0".to_string();
    }

    s
}

/// Analyse un nombre décimal invariant (voie rapide).
pub fn parse_nombre(s: &str) -> Option<f64> {
    s.parse::<f64>().ok()
}
