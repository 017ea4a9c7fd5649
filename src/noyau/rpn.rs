// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok (infixe) en RPN (postfix)
//
// Règles:
// - Num / Const / Var : sortie directe
// - Fonc : empilée, sortie après la parenthèse fermante de son argument
// - Moins unaire:
//    - si '-' arrive quand on n’attend PAS une valeur, c'est Neg (préfixe, arité 1)
//    - un '+' à la même place est ignoré
//
// NOTE:
// - Une fonction sur la pile bloque le dépilement par les opérateurs :
//   elle ne sort que par ')' ou par la vidange finale.

use tracing::trace;

use super::erreur::{ErreurCalc, ErreurSyntaxe};
use super::jetons::Tok;
use super::symboles::{Associativite, Operateur};

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Fonc(sin), LPar, Const(pi), Op(/), Num(2), RPar]
///   rpn:    [Const(pi), Num(2), Op(/), Fonc(sin)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le signe unaire.
    let mut prev_was_value = false;

    for &tok in tokens {
        match tok {
            Tok::Num(_) | Tok::Const(_) | Tok::Var(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Fonc(_) | Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurSyntaxe::ParenthesesNonAppariees.into()),
                    }
                }

                // si une fonction est au sommet, elle s'attache à l'argument fermé
                if let Some(Tok::Fonc(f)) = ops.last().copied() {
                    ops.pop();
                    out.push(Tok::Fonc(f));
                }

                prev_was_value = true;
            }

            Tok::Op(Operateur::Plus) if !prev_was_value => {
                // plus unaire : sans effet
                trace!("plus unaire ignoré");
            }

            Tok::Op(Operateur::Moins) if !prev_was_value => {
                // préfixe : rien à dépiler, l'opérande n'est pas encore lu
                ops.push(Tok::Op(Operateur::Neg));
            }

            Tok::Op(op) => {
                depiler_operateurs(&mut ops, &mut out, op);
                ops.push(tok);
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        if matches!(top, Tok::LPar | Tok::RPar) {
            return Err(ErreurSyntaxe::ParenthesesNonAppariees.into());
        }
        out.push(top);
    }

    Ok(out)
}

/// Dépile vers la sortie tant que:
/// - on n'est pas bloqué par '(' ou par une fonction
/// - et la précédence/associativité exige de sortir l'opérateur du haut
fn depiler_operateurs(ops: &mut Vec<Tok>, out: &mut Vec<Tok>, entrant: Operateur) {
    while let Some(&Tok::Op(top)) = ops.last() {
        let doit_pop = match entrant.associativite() {
            Associativite::Gauche => top.precedence() >= entrant.precedence(),
            Associativite::Droite => top.precedence() > entrant.precedence(),
        };
        if !doit_pop {
            break;
        }
        ops.pop();
        out.push(Tok::Op(top));
    }
}
