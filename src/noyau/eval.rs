//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile d'opérandes -> arrondi (10 décimales)
//!
//! Aucun état entre deux appels : mode d'angle et variables sont des entrées,
//! les piles sont locales à l'appel.

use tracing::{debug, trace};

use super::erreur::{ErreurCalc, ErreurEval};
use super::jetons::{format_tokens, tokenize, Tok};
use super::rpn::to_rpn;
use super::symboles::{ModeAngle, Variables};

/// Nombre de décimales conservées dans le résultat (bruit flottant supprimé).
pub const PRECISION: usize = 10;

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression, résultat arrondi à PRECISION décimales.
pub fn eval_expression(
    expr_str: &str,
    mode: ModeAngle,
    vars: Variables,
) -> Result<f64, ErreurCalc> {
    eval_avec_demarche(expr_str, mode, vars).map(|(v, _d)| v)
}

/// Comme `eval_expression`, avec en plus la démarche (jetons + RPN) pour l'UI.
pub fn eval_avec_demarche(
    expr_str: &str,
    mode: ModeAngle,
    vars: Variables,
) -> Result<(f64, DemarcheNoyau), ErreurCalc> {
    // 1) Jetons
    let jetons = tokenize(expr_str.trim())?;
    let jetons_txt = format_tokens(&jetons);
    debug!(jetons = %jetons_txt, "tokenize");

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    let rpn_txt = format_tokens(&rpn);
    debug!(rpn = %rpn_txt, "shunting-yard");

    // 3) Pile
    let valeur = eval_rpn(&rpn, mode, vars)?;
    debug!(valeur, ?mode, "évalué");

    let d = DemarcheNoyau {
        jetons: jetons_txt,
        rpn: rpn_txt,
    };
    Ok((valeur, d))
}

/// Évalue une suite RPN avec une pile d'opérandes.
pub fn eval_rpn(rpn: &[Tok], mode: ModeAngle, vars: Variables) -> Result<f64, ErreurCalc> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        let v = match *tok {
            Tok::Num(v) => v,
            Tok::Const(c) => c.valeur(),
            Tok::Var(x) => x.valeur(&vars),

            Tok::Fonc(f) => {
                let a = pile
                    .pop()
                    .ok_or_else(|| ErreurEval::PileInsuffisante(f.nom().to_string()))?;
                let r = f.appliquer(a, mode)?;
                trace!(fonction = f.nom(), a, r);
                r
            }

            Tok::Op(op) => {
                // b dépilé avant a : args garde l'ordre d'empilement [a, b]
                let n = op.arite();
                if pile.len() < n {
                    return Err(ErreurEval::PileInsuffisante(op.symbole().to_string()).into());
                }
                let args = pile.split_off(pile.len() - n);
                let r = op.appliquer(&args)?;
                trace!(op = op.symbole(), ?args, r);
                r
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurEval::JetonInattendu(format_tokens(&[*tok])).into());
            }
        };

        // NaN ne doit jamais circuler (NaN^0 = 1 le masquerait)
        if v.is_nan() {
            return Err(ErreurEval::ResultatNonFini.into());
        }
        pile.push(v);
    }

    if pile.len() != 1 {
        return Err(ErreurEval::ExpressionInvalide(pile.len()).into());
    }
    let brut = pile[0];
    if !brut.is_finite() {
        return Err(ErreurEval::ResultatNonFini.into());
    }
    Ok(arrondir(brut))
}

/// Arrondi à PRECISION décimales (0.1 + 0.2 -> 0.3), -0 normalisé en 0.
pub fn arrondir(v: f64) -> f64 {
    let r = format!("{v:.PRECISION$}").parse::<f64>().unwrap_or(v);
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

/// Texte d'un résultat, relisible par `tokenize` (pas de notation exponentielle).
pub fn format_resultat(v: f64) -> String {
    format!("{v}")
}
