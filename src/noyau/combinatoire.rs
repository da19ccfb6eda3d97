// src/noyau/combinatoire.rs
//
// Factorielle + combinaisons, sur doubles IEEE.
//
// Choix de domaine (décision consignée dans DESIGN.md) :
// - factorielle restreinte aux entiers >= 0 représentés en f64 ;
//   un négatif OU un non-entier est HorsDomaine (erreur dure).
// - pas de borne haute : au-delà de 170! le produit déborde en +inf,
//   valeur flottante valide qui se propage normalement.

use num_traits::ToPrimitive;

use super::erreurs::ErreurNoyau;

/// Au-delà, le résultat dépasse f64::MAX : on court-circuite en +inf.
const FACTORIELLE_MAX_FINIE: f64 = 170.0;

/// n! pour n entier >= 0 (porté par un f64).
pub fn factorielle(n: f64) -> Result<f64, ErreurNoyau> {
    if n < 0.0 {
        return Err(ErreurNoyau::HorsDomaine(
            "factorielle d'un nombre négatif".into(),
        ));
    }
    if n.fract() != 0.0 || n.is_nan() {
        return Err(ErreurNoyau::HorsDomaine(
            "factorielle d'un non-entier".into(),
        ));
    }

    if n > FACTORIELLE_MAX_FINIE {
        return Ok(f64::INFINITY);
    }

    // cast SAFE : n est un entier de [0, 170]
    let n = n
        .to_u64()
        .ok_or_else(|| ErreurNoyau::HorsDomaine("factorielle : entier non représentable".into()))?;

    let mut acc = 1.0f64;
    for k in 2..=n {
        acc *= k as f64;
    }
    Ok(acc)
}

/// Coefficient binomial C(n, r) = n! / (r! * (n-r)!), sur doubles.
/// n < r (ou un argument négatif) est un ArgumentInvalide.
pub fn combinaisons(n: i64, r: i64) -> Result<f64, ErreurNoyau> {
    if r < 0 || n < 0 {
        return Err(ErreurNoyau::ArgumentInvalide(
            "combinaisons : arguments négatifs".into(),
        ));
    }
    if n < r {
        return Err(ErreurNoyau::ArgumentInvalide(format!(
            "combinaisons : n={n} < r={r}"
        )));
    }

    let fn_ = factorielle(n as f64)?;
    let fr = factorielle(r as f64)?;
    let fnr = factorielle((n - r) as f64)?;
    Ok(fn_ / (fr * fnr))
}
