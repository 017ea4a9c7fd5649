//! Tests fuzz safe : robustesse + déterminisme.
//!
//! - chaînes arbitraires : jamais de panique, toujours Ok(fini) ou Err typée
//! - expressions bien formées générées : terminent, Ok(fini) ou ErreurEval
//! - idempotence : même entrée, même contexte => même sortie

use proptest::prelude::*;

use super::erreur::GenreErreur;
use super::{eval_expression, ModeAngle, Variables};

/* ------------------------ Stratégies ------------------------ */

fn mode_strategy() -> impl Strategy<Value = ModeAngle> {
    prop_oneof![Just(ModeAngle::Degres), Just(ModeAngle::Radians)]
}

fn vars_strategy() -> impl Strategy<Value = Variables> {
    (-100i32..100, -100i32..100).prop_map(|(x, y)| Variables {
        x: f64::from(x) / 4.0,
        y: f64::from(y) / 4.0,
    })
}

fn atome_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        (0u32..1000).prop_map(|n| format!("{}.{}", n / 10, n % 10)),
        Just("pi".to_string()),
        Just("e".to_string()),
        Just("x".to_string()),
        Just("y".to_string()),
    ]
}

/// Expressions bien formées, parenthèses équilibrées, profondeur bornée.
fn expr_strategy() -> impl Strategy<Value = String> {
    atome_strategy().prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop_oneof![
                    Just("+"),
                    Just("-"),
                    Just("*"),
                    Just("/"),
                    Just("%"),
                    Just("^")
                ],
                inner.clone()
            )
                .prop_map(|(a, op, b)| format!("({a}){op}({b})")),
            (
                prop_oneof![
                    Just("sqrt"),
                    Just("log"),
                    Just("ln"),
                    Just("factorial"),
                    Just("sin"),
                    Just("cos"),
                    Just("tan"),
                    Just("asin"),
                    Just("acos"),
                    Just("atan")
                ],
                inner.clone()
            )
                .prop_map(|(f, a)| format!("{f}({a})")),
            inner.clone().prop_map(|a| format!("-({a})")),
            (inner.clone(), inner).prop_map(|(a, b)| format!("({a})({b})")),
        ]
    })
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #[test]
    fn fuzz_chaine_arbitraire_sans_panique(
        s in "[0-9a-z()+*/%^. -]{0,24}",
        mode in mode_strategy(),
    ) {
        match eval_expression(&s, mode, Variables::default()) {
            Ok(v) => prop_assert!(v.is_finite(), "expr={:?} v={}", s, v),
            Err(e) => prop_assert!(!e.to_string().is_empty()),
        }
    }

    #[test]
    fn fuzz_bien_forme_fini_ou_erreur_eval(
        s in expr_strategy(),
        mode in mode_strategy(),
        vars in vars_strategy(),
    ) {
        match eval_expression(&s, mode, vars) {
            Ok(v) => prop_assert!(v.is_finite(), "expr={:?} v={}", s, v),
            Err(e) => prop_assert_eq!(e.genre(), GenreErreur::Evaluation, "expr={:?} err={}", s, e),
        }
    }

    #[test]
    fn fuzz_idempotence(
        s in expr_strategy(),
        mode in mode_strategy(),
        vars in vars_strategy(),
    ) {
        prop_assert_eq!(eval_expression(&s, mode, vars), eval_expression(&s, mode, vars));
    }

    #[test]
    fn fuzz_addition_entiers(a in -1000i32..1000, b in -1000i32..1000) {
        let s = format!("{a}+{b}");
        let v = eval_expression(&s, ModeAngle::Radians, Variables::default());
        prop_assert_eq!(v, Ok(f64::from(a + b)));
    }
}
