// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Plus unaire:
//    - si '+' arrive quand on n’attend PAS une valeur, il est neutre et
//      disparaît : "+5" => "5", "+(-5)" => "(-5)"
// - Moins unaire:
//    - si '-' arrive quand on n’attend PAS une valeur, on injecte 0 : "-x" => "0 x -"
//    - la garde syntaxique interdit deux opérateurs adjacents, donc le moins
//      unaire n'apparaît qu'en tête d'expression, après '(' ou après '|'
//      (positions où l'injection de 0 est correcte).
// - '^' : associatif à droite (2^3^2 = 2^(3^2)).
// - '!' : postfixe, lie plus fort que tout => sort directement en RPN.
// - Barres |...| : AbsOuvre se comporte comme '(' ; AbsFerme dépile jusqu'à
//   AbsOuvre puis émet un marqueur unaire en sortie.
//
// Les erreurs ici sont des échecs DOUX (forme inutilisable) : eval.rs les
// convertit en sentinelle NaN, jamais en erreur dure.

use super::expr::Expr;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Caret => 3,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret)
}

/// Jeton "ouvrant" : bloque le dépilement des opérateurs.
fn est_ouvrant(t: &Tok) -> bool {
    matches!(t, Tok::LPar | Tok::AbsOuvre)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [AbsOuvre, Num(2), Minus, Num(7), AbsFerme, Star, Num(2)]
///   rpn:    [Num(2), Num(7), Minus, AbsFerme, Num(2), Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, String> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Bang => {
                // postfixe : s'applique à la valeur déjà sortie
                if !prev_was_value {
                    return Err("factorielle sans opérande".into());
                }
                out.push(Tok::Bang);
                prev_was_value = true;
            }

            Tok::LPar | Tok::AbsOuvre => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                let mut trouve = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        trouve = true;
                        break;
                    }
                    if matches!(top, Tok::AbsOuvre) {
                        return Err("')' ferme une barre '|'".into());
                    }
                    out.push(top);
                }
                if !trouve {
                    return Err("parenthèse fermante orpheline".into());
                }
                prev_was_value = true;
            }

            Tok::AbsFerme => {
                // dépile jusqu’à la barre ouvrante, puis émet le marqueur unaire
                let mut trouve = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::AbsOuvre) {
                        trouve = true;
                        break;
                    }
                    if matches!(top, Tok::LPar) {
                        return Err("'|' ferme une parenthèse".into());
                    }
                    out.push(top);
                }
                if !trouve {
                    return Err("barre '|' fermante orpheline".into());
                }
                out.push(Tok::AbsFerme);
                prev_was_value = true;
            }

            Tok::Plus => {
                // plus unaire : élément neutre, le jeton disparaît
                // ("+5" => "5", "+(-5)" => "(-5)") ; ne peut apparaître
                // qu'en tête, après '(' ou après '|' (garde d'adjacence)
                if !prev_was_value {
                    continue;
                }

                while let Some(top) = ops.last() {
                    if est_ouvrant(top) {
                        break;
                    }
                    if precedence(top) >= precedence(&Tok::Plus) {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(Tok::Plus);
                prev_was_value = false;
            }

            Tok::Star | Tok::Slash | Tok::Caret => {
                // dépile tant que:
                // - on n'est pas bloqué par un ouvrant
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if est_ouvrant(top) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if doit_pop {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Minus => {
                // moins unaire : si pas de valeur avant, injecte 0
                if !prev_was_value {
                    out.push(Tok::Num(0.0));
                }

                while let Some(top) = ops.last() {
                    if est_ouvrant(top) {
                        break;
                    }
                    if precedence(top) >= precedence(&Tok::Minus) {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(Tok::Minus);
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err("parenthèses non fermées".into());
        }
        if matches!(op, Tok::AbsOuvre) {
            return Err("barre '|' non fermée".into());
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
///
/// - Bang     => Fact (unaire)
/// - AbsFerme => Abs  (unaire, marqueur émis par to_rpn)
/// - Caret    => Pow  (exposant flottant quelconque)
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, String> {
    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(v) => st.push(Expr::Nombre(v)),

            Tok::Bang => {
                let x = st.pop().ok_or("factorielle sans opérande")?;
                st.push(Expr::Fact(Box::new(x)));
            }

            Tok::AbsFerme => {
                let x = st.pop().ok_or("valeur absolue sans contenu")?;
                st.push(Expr::Abs(Box::new(x)));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                let b = st.pop().ok_or("expression invalide")?;
                let a = st.pop().ok_or("expression invalide")?;

                let e = match tok {
                    Tok::Plus => Expr::Add(Box::new(a), Box::new(b)),
                    Tok::Minus => Expr::Sub(Box::new(a), Box::new(b)),
                    Tok::Star => Expr::Mul(Box::new(a), Box::new(b)),
                    Tok::Slash => Expr::Div(Box::new(a), Box::new(b)),
                    Tok::Caret => Expr::Pow(Box::new(a), Box::new(b)),
                    _ => unreachable!(),
                };

                st.push(e);
            }

            Tok::LPar | Tok::RPar | Tok::AbsOuvre => {
                return Err("jeton de groupe inattendu en RPN".into())
            }
        }
    }

    if st.len() != 1 {
        return Err("expression invalide".into());
    }
    Ok(st.pop().unwrap())
}
