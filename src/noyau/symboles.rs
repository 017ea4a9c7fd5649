// src/noyau/symboles.rs
//
// Table des symboles (lecture seule, partagée par jetons / rpn / eval)
// -------------------------------------------------------------------
// - Opérateurs : précédence, associativité, arité, application
// - Fonctions unaires : application (mode d'angle pour la trigo)
// - Constantes (pi, e) et variables (x, y)
//
// Ensembles FERMÉS : tout passe par des enums + match, aucune recherche dynamique.

use std::f64::consts;

use num_traits::ToPrimitive;

use super::erreur::ErreurEval;

/// Au-delà, n! dépasse f64::MAX.
pub const FACTORIELLE_MAX: u32 = 170;

/* ------------------------ Contexte d'évaluation ------------------------ */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    Degres,
    #[default]
    Radians,
}

impl ModeAngle {
    pub fn basculer(self) -> Self {
        match self {
            ModeAngle::Degres => ModeAngle::Radians,
            ModeAngle::Radians => ModeAngle::Degres,
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            ModeAngle::Degres => "DEG",
            ModeAngle::Radians => "RAD",
        }
    }
}

/// Valeurs de x et y, fournies par l'appelant à chaque évaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Variables {
    pub x: f64,
    pub y: f64,
}

/* ------------------------ Opérateurs ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Div,
    Mod,
    Puiss,
    /// Moins unaire (préfixe), décidé par le parseur.
    Neg,
}

impl Operateur {
    /// Opérateurs binaires lisibles dans le texte (Neg n'a pas de symbole propre).
    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Div),
            '%' => Some(Operateur::Mod),
            '^' => Some(Operateur::Puiss),
            _ => None,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "*",
            Operateur::Div => "/",
            Operateur::Mod => "%",
            Operateur::Puiss => "^",
            Operateur::Neg => "neg",
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Div | Operateur::Mod => 2,
            Operateur::Puiss | Operateur::Neg => 3,
        }
    }

    pub fn associativite(self) -> Associativite {
        match self {
            Operateur::Puiss | Operateur::Neg => Associativite::Droite,
            _ => Associativite::Gauche,
        }
    }

    pub fn arite(self) -> usize {
        match self {
            Operateur::Neg => 1,
            _ => 2,
        }
    }

    /// `args` dans l'ordre d'empilement : [a] ou [a, b].
    pub fn appliquer(self, args: &[f64]) -> Result<f64, ErreurEval> {
        match (self, args) {
            (Operateur::Neg, [a]) => Ok(-a),
            (Operateur::Plus, [a, b]) => Ok(a + b),
            (Operateur::Moins, [a, b]) => Ok(a - b),
            (Operateur::Fois, [a, b]) => Ok(a * b),
            (Operateur::Div | Operateur::Mod, [_, b]) if *b == 0.0 => {
                Err(ErreurEval::DivisionParZero)
            }
            (Operateur::Div, [a, b]) => Ok(a / b),
            (Operateur::Mod, [a, b]) => Ok(a % b),
            (Operateur::Puiss, [a, b]) => Ok(a.powf(*b)),
            _ => Err(ErreurEval::PileInsuffisante(self.symbole().to_string())),
        }
    }
}

/* ------------------------ Fonctions unaires ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sqrt,
    Log,
    Ln,
    Factorielle,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
}

impl Fonction {
    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sqrt => "sqrt",
            Fonction::Log => "log",
            Fonction::Ln => "ln",
            Fonction::Factorielle => "factorial",
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Asin => "asin",
            Fonction::Acos => "acos",
            Fonction::Atan => "atan",
        }
    }

    pub fn appliquer(self, a: f64, mode: ModeAngle) -> Result<f64, ErreurEval> {
        let degres = mode == ModeAngle::Degres;
        let entree = |v: f64| if degres { v.to_radians() } else { v };
        let sortie = |v: f64| if degres { v.to_degrees() } else { v };

        match self {
            Fonction::Sqrt => {
                if a < 0.0 {
                    return Err(ErreurEval::RacineNegative);
                }
                Ok(a.sqrt())
            }
            Fonction::Log => {
                if a <= 0.0 {
                    return Err(ErreurEval::LogarithmeNonPositif);
                }
                Ok(a.log10())
            }
            Fonction::Ln => {
                if a <= 0.0 {
                    return Err(ErreurEval::LnNonPositif);
                }
                Ok(a.ln())
            }
            Fonction::Factorielle => factorielle(a),

            Fonction::Sin => Ok(entree(a).sin()),
            Fonction::Cos => Ok(entree(a).cos()),
            Fonction::Tan => {
                // 90° et 270° (et leurs translatés) : pas d'approximation géante
                if degres && (a % 180.0).abs() == 90.0 {
                    return Err(ErreurEval::TangenteIndefinie);
                }
                Ok(entree(a).tan())
            }

            Fonction::Asin | Fonction::Acos if !(-1.0..=1.0).contains(&a) => {
                Err(ErreurEval::HorsDomaine(self.nom()))
            }
            Fonction::Asin => Ok(sortie(a.asin())),
            Fonction::Acos => Ok(sortie(a.acos())),
            Fonction::Atan => Ok(sortie(a.atan())),
        }
    }
}

/// n! itératif, n entier dans [0, FACTORIELLE_MAX].
fn factorielle(a: f64) -> Result<f64, ErreurEval> {
    if a < 0.0 || a.fract() != 0.0 {
        return Err(ErreurEval::FactorielleInvalide);
    }
    if a > f64::from(FACTORIELLE_MAX) {
        return Err(ErreurEval::FactorielleTropGrande);
    }
    let n = a.to_u32().ok_or(ErreurEval::FactorielleInvalide)?;

    let mut acc = 1.0_f64;
    for i in 2..=n {
        acc *= f64::from(i);
    }
    Ok(acc)
}

/* ------------------------ Constantes / variables ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => consts::PI,
            Constante::E => consts::E,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Constante::Pi => "pi",
            Constante::E => "e",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variable {
    X,
    Y,
}

impl Variable {
    pub fn valeur(self, vars: &Variables) -> f64 {
        match self {
            Variable::X => vars.x,
            Variable::Y => vars.y,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Variable::X => "x",
            Variable::Y => "y",
        }
    }
}

/* ------------------------ Identifiants reconnus ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Identifiant {
    Fonc(Fonction),
    Const(Constante),
    Var(Variable),
}

/// Tous les noms reconnus, du plus long au plus court (plus long lexème d'abord).
pub const IDENTIFIANTS: &[(&str, Identifiant)] = &[
    ("factorial", Identifiant::Fonc(Fonction::Factorielle)),
    ("sqrt", Identifiant::Fonc(Fonction::Sqrt)),
    ("asin", Identifiant::Fonc(Fonction::Asin)),
    ("acos", Identifiant::Fonc(Fonction::Acos)),
    ("atan", Identifiant::Fonc(Fonction::Atan)),
    ("log", Identifiant::Fonc(Fonction::Log)),
    ("sin", Identifiant::Fonc(Fonction::Sin)),
    ("cos", Identifiant::Fonc(Fonction::Cos)),
    ("tan", Identifiant::Fonc(Fonction::Tan)),
    ("ln", Identifiant::Fonc(Fonction::Ln)),
    ("pi", Identifiant::Const(Constante::Pi)),
    ("e", Identifiant::Const(Constante::E)),
    ("x", Identifiant::Var(Variable::X)),
    ("y", Identifiant::Var(Variable::Y)),
];

/// Cherche le plus long nom reconnu en tête de `reste` (insensible à la casse ASCII).
/// Retourne l'identifiant et la longueur consommée (en octets).
pub fn chercher_identifiant(reste: &str) -> Option<(Identifiant, usize)> {
    IDENTIFIANTS.iter().find_map(|&(nom, id)| {
        reste
            .get(..nom.len())
            .filter(|tete| tete.eq_ignore_ascii_case(nom))
            .map(|_| (id, nom.len()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedences_et_associativite() {
        assert!(Operateur::Fois.precedence() > Operateur::Plus.precedence());
        assert!(Operateur::Puiss.precedence() > Operateur::Mod.precedence());
        assert_eq!(Operateur::Puiss.associativite(), Associativite::Droite);
        assert_eq!(Operateur::Moins.associativite(), Associativite::Gauche);
        assert_eq!(Operateur::Neg.arite(), 1);
    }

    #[test]
    fn identifiant_plus_long_d_abord() {
        assert_eq!(
            chercher_identifiant("asin(1)"),
            Some((Identifiant::Fonc(Fonction::Asin), 4))
        );
        assert_eq!(
            chercher_identifiant("PI"),
            Some((Identifiant::Const(Constante::Pi), 2))
        );
        assert_eq!(
            chercher_identifiant("exp"),
            Some((Identifiant::Const(Constante::E), 1))
        );
        assert_eq!(chercher_identifiant("z"), None);
    }

    #[test]
    fn domaines() {
        assert_eq!(
            Fonction::Sqrt.appliquer(-1.0, ModeAngle::Radians),
            Err(ErreurEval::RacineNegative)
        );
        assert_eq!(
            Fonction::Ln.appliquer(0.0, ModeAngle::Radians),
            Err(ErreurEval::LnNonPositif)
        );
        assert_eq!(
            Fonction::Acos.appliquer(1.5, ModeAngle::Degres),
            Err(ErreurEval::HorsDomaine("acos"))
        );
        assert_eq!(
            Fonction::Tan.appliquer(-270.0, ModeAngle::Degres),
            Err(ErreurEval::TangenteIndefinie)
        );
        assert_eq!(
            Operateur::Div.appliquer(&[1.0, 0.0]),
            Err(ErreurEval::DivisionParZero)
        );
    }

    #[test]
    fn factorielle_iterative() {
        assert_eq!(factorielle(0.0), Ok(1.0));
        assert_eq!(factorielle(5.0), Ok(120.0));
        assert_eq!(factorielle(2.5), Err(ErreurEval::FactorielleInvalide));
        assert_eq!(factorielle(-3.0), Err(ErreurEval::FactorielleInvalide));
        assert_eq!(factorielle(171.0), Err(ErreurEval::FactorielleTropGrande));
        assert!(factorielle(170.0).unwrap().is_finite());
    }

    #[test]
    fn trigo_inverse_en_degres() {
        let a = Fonction::Asin.appliquer(1.0, ModeAngle::Degres).unwrap();
        assert!((a - 90.0).abs() < 1e-12);
        let t = Fonction::Atan.appliquer(1.0, ModeAngle::Radians).unwrap();
        assert!((t - consts::FRAC_PI_4).abs() < 1e-15);
    }
}
