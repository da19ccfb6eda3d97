// src/noyau/conversions.rs
//
// Conversions d'unités : transformations affines pures `x * echelle + decalage`,
// engendrées depuis une table (famille, de, vers, echelle, decalage).
//
// Les jetons d'unités sont résolus par l'appelant AVANT l'évaluateur ;
// ce module ne voit que des doubles. NaN en entrée est HorsDomaine (dure).

use std::f64::consts::PI;

use super::erreurs::ErreurNoyau;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Famille {
    Masse,
    Temperature,
    Angle,
    Frequence,
    Temps,
}

struct Conversion {
    famille: Famille,
    de: &'static str,
    vers: &'static str,
    echelle: f64,
    decalage: f64,
}

/// Table unique, lecture seule. Chaque sens est listé explicitement.
const TABLE: &[Conversion] = &[
    // masse
    Conversion { famille: Famille::Masse, de: "kg", vers: "g", echelle: 1000.0, decalage: 0.0 },
    Conversion { famille: Famille::Masse, de: "g", vers: "kg", echelle: 0.001, decalage: 0.0 },
    Conversion { famille: Famille::Masse, de: "kg", vers: "lb", echelle: 1.0 / 0.453_592_37, decalage: 0.0 },
    Conversion { famille: Famille::Masse, de: "lb", vers: "kg", echelle: 0.453_592_37, decalage: 0.0 },
    // température (affine)
    Conversion { famille: Famille::Temperature, de: "c", vers: "f", echelle: 1.8, decalage: 32.0 },
    Conversion { famille: Famille::Temperature, de: "f", vers: "c", echelle: 5.0 / 9.0, decalage: -160.0 / 9.0 },
    Conversion { famille: Famille::Temperature, de: "c", vers: "k", echelle: 1.0, decalage: 273.15 },
    Conversion { famille: Famille::Temperature, de: "k", vers: "c", echelle: 1.0, decalage: -273.15 },
    // angle
    Conversion { famille: Famille::Angle, de: "deg", vers: "rad", echelle: PI / 180.0, decalage: 0.0 },
    Conversion { famille: Famille::Angle, de: "rad", vers: "deg", echelle: 180.0 / PI, decalage: 0.0 },
    Conversion { famille: Famille::Angle, de: "deg", vers: "grad", echelle: 10.0 / 9.0, decalage: 0.0 },
    Conversion { famille: Famille::Angle, de: "grad", vers: "deg", echelle: 0.9, decalage: 0.0 },
    // fréquence
    Conversion { famille: Famille::Frequence, de: "hz", vers: "khz", echelle: 0.001, decalage: 0.0 },
    Conversion { famille: Famille::Frequence, de: "khz", vers: "hz", echelle: 1000.0, decalage: 0.0 },
    Conversion { famille: Famille::Frequence, de: "hz", vers: "mhz", echelle: 1e-6, decalage: 0.0 },
    Conversion { famille: Famille::Frequence, de: "mhz", vers: "hz", echelle: 1e6, decalage: 0.0 },
    // temps
    Conversion { famille: Famille::Temps, de: "s", vers: "min", echelle: 1.0 / 60.0, decalage: 0.0 },
    Conversion { famille: Famille::Temps, de: "min", vers: "s", echelle: 60.0, decalage: 0.0 },
    Conversion { famille: Famille::Temps, de: "min", vers: "h", echelle: 1.0 / 60.0, decalage: 0.0 },
    Conversion { famille: Famille::Temps, de: "h", vers: "min", echelle: 60.0, decalage: 0.0 },
    Conversion { famille: Famille::Temps, de: "s", vers: "h", echelle: 1.0 / 3600.0, decalage: 0.0 },
    Conversion { famille: Famille::Temps, de: "h", vers: "s", echelle: 3600.0, decalage: 0.0 },
];

/// Convertit `x` de l'unité `de` vers l'unité `vers` dans `famille`.
/// - NaN en entrée : HorsDomaine (dure)
/// - paire inconnue : ArgumentInvalide (dure)
/// - de == vers : identité
pub fn convertir(famille: Famille, de: &str, vers: &str, x: f64) -> Result<f64, ErreurNoyau> {
    if x.is_nan() {
        return Err(ErreurNoyau::HorsDomaine(
            "conversion d'unités : NaN en entrée".into(),
        ));
    }

    if de == vers {
        return Ok(x);
    }

    let conv = TABLE
        .iter()
        .find(|c| c.famille == famille && c.de == de && c.vers == vers)
        .ok_or_else(|| {
            ErreurNoyau::ArgumentInvalide(format!("conversion inconnue: {de} -> {vers}"))
        })?;

    Ok(x * conv.echelle + conv.decalage)
}
