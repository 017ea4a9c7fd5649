// src/noyau/erreur.rs
//
// Erreurs du noyau : trois genres distincts (lexical / syntaxe / évaluation).
// Chaque appel échoue d'un bloc : pas de résultat partiel, pas de NaN sentinelle.

use thiserror::Error;

/// Genre d'erreur (ce que l'UI peut distinguer sans lire le message).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenreErreur {
    Lexicale,
    Syntaxe,
    Evaluation,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurSyntaxe {
    #[error("parenthèses non appariées")]
    ParenthesesNonAppariees,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("division par zéro")]
    DivisionParZero,
    #[error("racine carrée d'un nombre négatif")]
    RacineNegative,
    #[error("logarithme d'un nombre non positif")]
    LogarithmeNonPositif,
    #[error("logarithme népérien d'un nombre non positif")]
    LnNonPositif,
    #[error("factorielle d'un nombre négatif ou non entier")]
    FactorielleInvalide,
    #[error("factorielle trop grande")]
    FactorielleTropGrande,
    #[error("tangente indéfinie (90° modulo 180°)")]
    TangenteIndefinie,
    #[error("{0} : argument hors de [-1, 1]")]
    HorsDomaine(&'static str),
    #[error("opérande manquant pour '{0}'")]
    PileInsuffisante(String),
    #[error("expression invalide ({0} valeurs restantes)")]
    ExpressionInvalide(usize),
    #[error("jeton inattendu en RPN : '{0}'")]
    JetonInattendu(String),
    #[error("résultat non fini")]
    ResultatNonFini,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    #[error("caractère inattendu '{caractere}' (position {position})")]
    Lexicale { position: usize, caractere: char },

    #[error("erreur de syntaxe : {0}")]
    Syntaxe(#[from] ErreurSyntaxe),

    #[error("erreur d'évaluation : {0}")]
    Evaluation(#[from] ErreurEval),
}

impl ErreurCalc {
    pub fn genre(&self) -> GenreErreur {
        match self {
            ErreurCalc::Lexicale { .. } => GenreErreur::Lexicale,
            ErreurCalc::Syntaxe(_) => GenreErreur::Syntaxe,
            ErreurCalc::Evaluation(_) => GenreErreur::Evaluation,
        }
    }
}
