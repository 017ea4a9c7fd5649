//! Tests scientifiques (campagne) : propriétés attendues du noyau.
//!
//! - précédence / associativité
//! - multiplication implicite
//! - mode d'angle
//! - erreurs de domaine, de syntaxe, lexicales
//! - arrondi et idempotence

use super::erreur::{ErreurEval, GenreErreur};
use super::{eval_expression, ErreurCalc, ModeAngle, Variables};

fn eval_ok(expr: &str, mode: ModeAngle) -> f64 {
    eval_expression(expr, mode, Variables::default())
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn rad(expr: &str) -> f64 {
    eval_ok(expr, ModeAngle::Radians)
}

fn deg(expr: &str) -> f64 {
    eval_ok(expr, ModeAngle::Degres)
}

fn genre(expr: &str, mode: ModeAngle) -> GenreErreur {
    match eval_expression(expr, mode, Variables::default()) {
        Ok(v) => panic!("expr={expr:?} devait échouer, a donné {v}"),
        Err(e) => e.genre(),
    }
}

/* ------------------------ Précédence / associativité ------------------------ */

#[test]
fn sci_precedence() {
    assert_eq!(rad("2+3*4"), 14.0);
    assert_eq!(rad("(2+3)*4"), 20.0);
    assert_eq!(rad("10-4-3"), 3.0);
    assert_eq!(rad("2*3^2"), 18.0);
    assert_eq!(rad("100/10/5"), 2.0);
}

#[test]
fn sci_puissance_droite() {
    // 2^(3^2), pas (2^3)^2
    assert_eq!(rad("2^3^2"), 512.0);
}

/* ------------------------ Multiplication implicite ------------------------ */

#[test]
fn sci_multiplication_implicite() {
    assert_eq!(rad("2(3)"), 6.0);
    assert_eq!(deg("2sin(90)"), 2.0);
    assert_eq!(rad("pi(2)"), rad("2*pi"));
    assert_eq!(rad("(1+1)(2+2)"), 8.0);
    assert_eq!(rad("3 (4)"), 12.0);
}

/* ------------------------ Mode d'angle ------------------------ */

#[test]
fn sci_mode_angle() {
    assert_eq!(deg("sin(90)"), 1.0);
    assert_eq!(rad("sin(90)"), 0.8939966636);
    assert_eq!(deg("cos(60)"), 0.5);
    assert_eq!(deg("tan(45)"), 1.0);
    assert_eq!(deg("sin(180)"), 0.0);
    assert_eq!(rad("cos(pi)"), -1.0);
}

#[test]
fn sci_trigo_inverse() {
    assert_eq!(deg("asin(1)"), 90.0);
    assert_eq!(deg("acos(0.5)"), 60.0);
    assert_eq!(deg("atan(1)"), 45.0);
    assert_eq!(rad("asin(1)"), 1.5707963268);
}

#[test]
fn sci_tangente_indefinie() {
    for s in ["tan(90)", "tan(270)", "tan(-90)", "tan(450)"] {
        assert_eq!(
            eval_expression(s, ModeAngle::Degres, Variables::default()),
            Err(ErreurCalc::Evaluation(ErreurEval::TangenteIndefinie)),
            "expr={s:?}"
        );
    }
    // en radians : pas d'erreur, grande valeur finie
    assert!(rad("tan(pi/2)").abs() > 1e15);
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_erreurs_domaine() {
    for s in ["5/0", "sqrt(-1)", "log(0)", "ln(-2)", "asin(2)", "acos(-1.5)", "factorial(-1)", "factorial(2.5)"] {
        assert_eq!(genre(s, ModeAngle::Radians), GenreErreur::Evaluation, "expr={s:?}");
    }
}

#[test]
fn sci_erreurs_syntaxe() {
    assert_eq!(genre("(2+3", ModeAngle::Radians), GenreErreur::Syntaxe);
    assert_eq!(genre("2+3)", ModeAngle::Radians), GenreErreur::Syntaxe);
    assert_eq!(genre("((1)", ModeAngle::Degres), GenreErreur::Syntaxe);
}

#[test]
fn sci_erreurs_lexicales() {
    assert_eq!(genre("2 & 3", ModeAngle::Radians), GenreErreur::Lexicale);
    assert_eq!(genre("abc", ModeAngle::Radians), GenreErreur::Lexicale);
    assert_eq!(
        eval_expression("1+z", ModeAngle::Radians, Variables::default()),
        Err(ErreurCalc::Lexicale {
            position: 2,
            caractere: 'z'
        })
    );
}

/* ------------------------ Arrondi / idempotence ------------------------ */

#[test]
fn sci_arrondi() {
    assert_eq!(rad("0.1+0.2"), 0.3);
    assert_eq!(rad("1/3"), 0.3333333333);
    assert_eq!(rad("2/3"), 0.6666666667);
}

#[test]
fn sci_idempotence() {
    let vars = Variables { x: 1.5, y: -4.0 };
    for s in ["x^2 + y", "sin(x) * cos(y)", "factorial(6) / x", "ln(x) - log(-y)"] {
        for mode in [ModeAngle::Degres, ModeAngle::Radians] {
            let a = eval_expression(s, mode, vars);
            let b = eval_expression(s, mode, vars);
            assert_eq!(a, b, "expr={s:?} mode={mode:?}");
        }
    }
}
