//! Tests scientifiques (campagne) : propriétés du moteur + limites contrôlées.
//!
//! Notes importantes (aligné avec l'état actuel du noyau) :
//! - Les comparaisons exactes portent sur des valeurs exactement représentables
//!   en f64 (entiers, demis, quarts) ; sinon assert_proche.
//! - Le moins unaire passe par les parenthèses : `3*(-2)`, pas `3*-2`
//!   (deux opérateurs adjacents = garde dure).
//! - Budgets : profondeur d'arbre bornée => une imbrication pathologique doit
//!   échouer fermé (TropComplexe), jamais en épuisement de pile.

use super::erreurs::ErreurNoyau;
use super::eval_expression;
use super::format::format_nombre;

fn eval_ok(expr: &str) -> f64 {
    eval_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_vaut(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert_eq!(v, attendu, "expr={expr:?}");
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!((v - attendu).abs() < 1e-9, "expr={expr:?} v={v} attendu={attendu}");
}

fn assert_indefini(expr: &str) {
    let v = eval_ok(expr);
    assert!(v.is_nan(), "expr={expr:?} devrait être NaN, v={v}");
}

fn assert_invalide(expr: &str) {
    match eval_expression(expr) {
        Err(ErreurNoyau::ExpressionInvalide) => {}
        autre => panic!("expr={expr:?} devrait être ExpressionInvalide, obtenu {autre:?}"),
    }
}

/* ------------------------ Voie rapide / aller-retour ------------------------ */

#[test]
fn voie_rapide_nombres_nus() {
    assert_vaut("42", 42.0);
    assert_vaut("-3.25", -3.25);
    assert_vaut(".5", 0.5);
    assert_vaut("  7  ", 7.0);
}

#[test]
fn aller_retour_formateur() {
    // évaluer la forme décimale d'un nombre redonne ce nombre
    for v in [0.0, 7.0, -3.25, 512.0, 0.5, -120.0, 1048576.0] {
        let txt = format_nombre(v);
        assert_vaut(&txt, v);
    }
}

/* ------------------------ Précédence + associativité ------------------------ */

#[test]
fn precedence_complete() {
    assert_vaut("3+4", 7.0);
    assert_vaut("2+3*4", 14.0);
    assert_vaut("(2+3)*4", 20.0);
    assert_vaut("2*3^2", 18.0);
    assert_vaut("10/4", 2.5);
    assert_vaut("3+4*(2-1)!", 7.0);
}

#[test]
fn arithmetique_flottante() {
    // IEEE : on compare à epsilon près hors valeurs exactement représentables
    assert_proche("0.1+0.2", 0.3);
    assert_proche("10/3", 10.0 / 3.0);
}

#[test]
fn puissance_associative_a_droite() {
    // 2^(3^2) = 2^9 = 512
    assert_vaut("2^3^2", 512.0);
    // exposant fractionnaire
    assert_vaut("4^0.5", 2.0);
    // exposant négatif via parenthèses
    assert_vaut("2^(-2)", 0.25);
}

#[test]
fn factorielle_dans_les_expressions() {
    assert_vaut("5!", 120.0);
    assert_vaut("3!^2", 36.0);
    assert_vaut("2^3!", 64.0);
    assert_vaut("(2+1)!", 6.0);
    // double factorielle itérée : (3!)! = 720
    assert_vaut("3!!", 720.0);
}

#[test]
fn valeur_absolue() {
    assert_vaut("|-5|", 5.0);
    assert_vaut("|2-7|*2", 10.0);
    assert_vaut("3*|-2|", 6.0);
    // imbriquées : la paire interne finit sur deux barres fermantes
    // adjacentes, qui ne doivent pas être prises pour un groupe vide
    assert_vaut("|1-|2-5||", 2.0);
    assert_vaut("|2-|3||", 1.0);
    assert_vaut("||2-5|-10|", 7.0);
}

/* ------------------------ Négatifs parenthésés ------------------------ */

#[test]
fn negatifs_via_parentheses() {
    assert_vaut("3-(-2)", 5.0);
    assert_vaut("3+(-2)", 1.0);
    assert_vaut("-(3+2)", -5.0);
    assert_vaut("(-5)+3", -2.0);
    assert_vaut("3*(-2)", -6.0);
    assert_vaut("(-5)", -5.0);
}

#[test]
fn plus_unaire_neutre() {
    // un '+' sans valeur avant est neutre : en tête, après '(' ou '|'
    assert_vaut("+5", 5.0);
    assert_vaut("+(5)", 5.0);
    assert_vaut("+(-5)", -5.0);
    assert_vaut("3-(+2)", 1.0);
    assert_vaut("+(2+3)*4", 20.0);
}

/* ------------------------ Échecs doux (sentinelle NaN) ------------------------ */

#[test]
fn division_par_zero() {
    assert_indefini("4/0");
    assert_indefini("5/(3-3)");
    assert_indefini("1+4/0");
}

#[test]
fn groupes_desequilibres() {
    // passe la garde de caractères, échoue à l'équilibre => NaN, pas d'erreur
    assert_indefini("(5");
    assert_indefini("5)");
    assert_indefini("|5");
}

#[test]
fn groupes_sans_chiffre() {
    assert_indefini("()");
    assert_indefini("3+()");
    assert_indefini("(+)");
    assert_indefini("||");
}

#[test]
fn entree_vide_epinglee() {
    // comportement épinglé : sentinelle douce, jamais une erreur
    assert_indefini("");
    assert_indefini("   ");
}

#[test]
fn formes_finales_non_numeriques() {
    assert_indefini("3+");
    assert_indefini("5(3)");
    assert_indefini("1.2.3");
}

/* ------------------------ Échecs durs ------------------------ */

#[test]
fn garde_syntaxique_dure() {
    assert_invalide("3++4");
    assert_invalide("2^-3");
    assert_invalide("2a+1");
    assert_invalide("1,5");
    assert_invalide("3%4");
}

#[test]
fn factorielle_hors_domaine_dure() {
    assert!(matches!(
        eval_expression("(-3)!"),
        Err(ErreurNoyau::HorsDomaine(_))
    ));
    assert!(matches!(
        eval_expression("2.5!"),
        Err(ErreurNoyau::HorsDomaine(_))
    ));
}

/* ------------------------ Budgets (échec fermé) ------------------------ */

#[test]
fn imbrication_pathologique_echoue_ferme() {
    // 600 niveaux de "1+(...)" => profondeur > budget => TropComplexe
    let mut expr = String::from("1");
    for _ in 0..600 {
        expr = format!("1+({expr})");
    }
    assert!(matches!(
        eval_expression(&expr),
        Err(ErreurNoyau::TropComplexe)
    ));
}

#[test]
fn budget_jetons() {
    // 3000 termes => plus de 4096 jetons
    let expr = vec!["1"; 3000].join("+");
    assert!(matches!(
        eval_expression(&expr),
        Err(ErreurNoyau::TropComplexe)
    ));
}

#[test]
fn parentheses_profondes_mais_plates() {
    // le groupement seul ne creuse pas l'arbre : (((...5...))) reste une feuille
    let mut expr = String::from("5");
    for _ in 0..400 {
        expr = format!("({expr})");
    }
    assert_vaut(&expr, 5.0);
}

/* ------------------------ Débordements flottants ------------------------ */

#[test]
fn debordement_en_infini() {
    // 171! déborde f64 => +inf, valeur valide qui se propage
    let v = eval_ok("171!");
    assert!(v.is_infinite() && v > 0.0);

    let v = eval_ok("9^9^9");
    assert!(v.is_infinite() && v > 0.0);
}

#[test]
fn infini_moins_infini_donne_nan() {
    assert_indefini("9^9^9-9^9^9");
}
