// src/noyau/expr.rs
//
// AST flottant (IEEE double).
// - Nombre : littéral f64
// - Fact   : factorielle postfixe (n!)
// - Pow    : puissance (associative à droite au parsing)
// - Abs    : valeur absolue |x|
//
// IMPORTANT (SAFE):
// - L'arbre ne calcule rien lui-même : l'évaluation (et ses budgets)
//   vit dans eval.rs.
// - profondeur() est ITÉRATIVE : c'est elle qui protège l'évaluation
//   récursive contre l'épuisement de pile.

use std::fmt;

use crate::noyau::format::format_nombre;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(f64),

    Fact(Box<Expr>),
    Abs(Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Profondeur de l'arbre, calculée SANS récursion.
    /// Garde-fou : l'appelant compare à un budget avant d'évaluer.
    pub fn profondeur(&self) -> usize {
        use Expr::*;

        let mut pile: Vec<(&Expr, usize)> = Vec::with_capacity(64);
        pile.push((self, 1));

        let mut max = 0usize;

        while let Some((e, p)) = pile.pop() {
            if p > max {
                max = p;
            }

            match e {
                Nombre(_) => {}

                Fact(x) | Abs(x) => pile.push((x.as_ref(), p + 1)),

                Pow(a, b) | Add(a, b) | Sub(a, b) | Mul(a, b) | Div(a, b) => {
                    pile.push((a.as_ref(), p + 1));
                    pile.push((b.as_ref(), p + 1));
                }
            }
        }

        max
    }
}

/* ------------------------ Affichage debug (démarche) ------------------------ */

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;
        match self {
            Nombre(v) => write!(f, "{}", format_nombre(*v)),
            Fact(x) => write!(f, "({x})!"),
            Abs(x) => write!(f, "|{x}|"),
            Pow(a, b) => write!(f, "({a}^{b})"),
            Add(a, b) => write!(f, "({a}+{b})"),
            Sub(a, b) => write!(f, "({a}-{b})"),
            Mul(a, b) => write!(f, "({a}*{b})"),
            Div(a, b) => write!(f, "({a}/{b})"),
        }
    }
}
