// src/noyau/jetons.rs

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
    Bang,  // ! (factorielle, postfixe)

    LPar,
    RPar,

    // La barre | est ouvrante OU fermante selon le contexte :
    // fermante si le jeton précédent termine une valeur, ouvrante sinon.
    AbsOuvre,
    AbsFerme,
}

/// Vrai si le jeton termine une valeur (sert à désambiguïser `|`
/// et à valider `!`).
fn termine_valeur(t: Option<&Tok>) -> bool {
    matches!(
        t,
        Some(Tok::Num(_)) | Some(Tok::RPar) | Some(Tok::Bang) | Some(Tok::AbsFerme)
    )
}

/// Tokenize une chaîne en jetons.
/// Supporte :
/// - nombres décimaux avec `.` invariant (12, 3.5, .5, 5.)
/// - opérateurs + - * / ^ et la factorielle postfixe !
/// - parenthèses ( )
/// - barres de valeur absolue |...|
///
/// Pré-condition : la chaîne a déjà passé la garde syntaxique
/// (grammaire::respecte_syntaxe) ; les espaces isolés sont ignorés.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, String> {
    let mut out: Vec<Tok> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Barre de valeur absolue : sens donné par le contexte
        if c == '|' {
            if termine_valeur(out.last()) {
                out.push(Tok::AbsFerme);
            } else {
                out.push(Tok::AbsOuvre);
            }
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Tok::Caret);
                i += 1;
                continue;
            }
            '!' => {
                if !termine_valeur(out.last()) {
                    return Err("factorielle sans opérande".into());
                }
                out.push(Tok::Bang);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Nombre décimal : chiffres avec au plus un point.
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut point_vu = false;

            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                if chars[i] == '.' {
                    if point_vu {
                        break; // deuxième point : fin du nombre courant
                    }
                    point_vu = true;
                }
                i += 1;
            }

            let txt: String = chars[start..i].iter().collect();
            let v: f64 = txt
                .parse()
                .map_err(|_| format!("nombre invalide: '{txt}'"))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(format!("caractère inattendu: '{c}'"));
    }

    Ok(out)
}

/// Garde douce : une paire |...| dont l'intérieur ne contient aucun nombre.
/// Travaille sur les jetons, où ouvrante et fermante sont déjà
/// désambiguïsées (en texte brut, `...||` imbriqué serait pris pour
/// une paire vide).
///
/// Un nombre vu dans un groupe interne compte aussi pour le groupe
/// englobant (le chiffre est bien DANS la portée de la paire externe).
pub fn contient_abs_sans_chiffre(jetons: &[Tok]) -> bool {
    // un booléen par barre ouverte : "au moins un nombre vu"
    let mut pile: Vec<bool> = Vec::new();

    for t in jetons {
        match t {
            Tok::AbsOuvre => pile.push(false),

            Tok::Num(_) => {
                if let Some(haut) = pile.last_mut() {
                    *haut = true;
                }
            }

            Tok::AbsFerme => match pile.pop() {
                Some(false) => return true,
                Some(true) => {
                    // propage au groupe englobant
                    if let Some(haut) = pile.last_mut() {
                        *haut = true;
                    }
                }
                // fermante orpheline : l'équilibre/le RPN tranchera
                None => {}
            },

            _ => {}
        }
    }

    false
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => crate::noyau::format::format_nombre(*v),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::Bang => "!".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::AbsOuvre => "|".to_string(),
            Tok::AbsFerme => "|".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
