//! Noyau de calcul (f64)
//!
//! Organisation interne :
//! - symboles.rs : table des opérateurs / fonctions / constantes / variables
//! - jetons.rs   : tokenisation + multiplication implicite
//! - rpn.rs      : shunting-yard (infixe -> postfix)
//! - eval.rs     : pile d'opérandes + pipeline complet + arrondi
//! - erreur.rs   : erreurs lexicales / syntaxe / évaluation

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod rpn;
pub mod symboles;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurCalc, GenreErreur};
pub use eval::{eval_avec_demarche, eval_expression, format_resultat, DemarcheNoyau};
pub use symboles::{ModeAngle, Variables};
