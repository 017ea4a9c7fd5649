// src/noyau/jetons.rs

use super::erreur::ErreurCalc;
use super::symboles::{chercher_identifiant, Constante, Fonction, Identifiant, Operateur, Variable};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Const(Constante),
    Var(Variable),
    Fonc(Fonction),
    Op(Operateur),

    LPar,
    RPar,
}

impl Tok {
    /// Termine une valeur : nombre, constante, variable, ')'.
    pub fn est_valeur(&self) -> bool {
        matches!(self, Tok::Num(_) | Tok::Const(_) | Tok::Var(_) | Tok::RPar)
    }

    /// Peut commencer une valeur juxtaposée (multiplication implicite).
    /// Les nombres n'en font pas partie : "2 3" reste deux nombres.
    fn commence_valeur(&self) -> bool {
        matches!(self, Tok::Fonc(_) | Tok::Const(_) | Tok::Var(_) | Tok::LPar)
    }
}

impl From<Identifiant> for Tok {
    fn from(id: Identifiant) -> Self {
        match id {
            Identifiant::Fonc(f) => Tok::Fonc(f),
            Identifiant::Const(c) => Tok::Const(c),
            Identifiant::Var(v) => Tok::Var(v),
        }
    }
}

/// Ajoute un jeton en insérant la multiplication implicite si besoin :
/// 2(3) -> 2 * ( 3 ), 2sin(30) -> 2 * sin ( 30 ), pi(2) -> pi * ( 2 ).
fn pousser(out: &mut Vec<Tok>, tok: Tok) {
    if let Some(prec) = out.last() {
        if prec.est_valeur() && tok.commence_valeur() {
            out.push(Tok::Op(Operateur::Fois));
        }
    }
    out.push(tok);
}

/// Ajoute un atome (nombre, constante, variable). Juste après un `√` nu,
/// l'atome est mis entre parenthèses : √4+5 -> sqrt ( 4 ) + 5.
fn pousser_atome(out: &mut Vec<Tok>, tok: Tok, apres_racine: bool) {
    if apres_racine {
        out.push(Tok::LPar);
        out.push(tok);
        out.push(Tok::RPar);
    } else {
        pousser(out, tok);
    }
}

/// Erreur lexicale ; `i` est un indice d'octet, la position rendue compte les caractères.
fn lexicale(s: &str, i: usize, c: char) -> ErreurCalc {
    ErreurCalc::Lexicale {
        position: s[..i].chars().count(),
        caractere: c,
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 1.5, .5, 3.)
/// - opérateurs + - * / % ^
/// - parenthèses ( )
/// - fonctions sqrt log ln factorial sin cos tan asin acos atan (insensible à la casse)
/// - constantes pi (ou π) et e, variables x et y
/// - √ (équivaut à sqrt)
///
/// Une fonction sans parenthèses prend tout le reste de l'expression
/// (`sqrt 4 + 5` = sqrt(9)). Seul `√` suivi directement d'un atome fait
/// exception : `√4+5` = 7, `√x` = sqrt(x). Devant `(` ou un signe, `√`
/// se comporte comme `sqrt`.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out = Vec::new();
    let mut iter = s.char_indices().peekable();
    let mut racine_nue = false;

    while let Some(&(i, c)) = iter.peek() {
        if c.is_whitespace() {
            iter.next();
            continue;
        }
        let apres_racine = std::mem::take(&mut racine_nue);

        // Parenthèses
        if c == '(' || c == ')' {
            pousser(&mut out, if c == '(' { Tok::LPar } else { Tok::RPar });
            iter.next();
            continue;
        }

        // Opérateurs
        if let Some(op) = Operateur::depuis_symbole(c) {
            out.push(Tok::Op(op));
            iter.next();
            continue;
        }

        // Glyphes unicode
        if c == 'π' {
            pousser_atome(&mut out, Tok::Const(Constante::Pi), apres_racine);
            iter.next();
            continue;
        }
        if c == '√' {
            pousser(&mut out, Tok::Fonc(Fonction::Sqrt));
            racine_nue = true;
            iter.next();
            continue;
        }

        // Nombre : chiffres? (. chiffres?)? avec au moins un chiffre
        if c.is_ascii_digit() || c == '.' {
            let longueur = longueur_nombre(&s[i..]);
            if longueur == 0 {
                return Err(lexicale(s, i, c));
            }
            let texte = &s[i..i + longueur];
            let valeur: f64 = texte.parse().map_err(|_| lexicale(s, i, c))?;
            pousser_atome(&mut out, Tok::Num(valeur), apres_racine);
            // les lexèmes numériques sont ASCII : 1 char = 1 octet
            for _ in 0..longueur {
                iter.next();
            }
            continue;
        }

        // Noms connus (plus long d'abord)
        if let Some((id, longueur)) = chercher_identifiant(&s[i..]) {
            match id {
                Identifiant::Fonc(_) => pousser(&mut out, Tok::from(id)),
                Identifiant::Const(_) | Identifiant::Var(_) => {
                    pousser_atome(&mut out, Tok::from(id), apres_racine)
                }
            }
            for _ in 0..longueur {
                iter.next();
            }
            continue;
        }

        return Err(lexicale(s, i, c));
    }

    Ok(out)
}

/// Longueur (octets) du nombre en tête de `s`, 0 si aucun chiffre.
fn longueur_nombre(s: &str) -> usize {
    let octets = s.as_bytes();
    let mut i = 0;
    let mut chiffres = 0;

    while i < octets.len() && octets[i].is_ascii_digit() {
        i += 1;
        chiffres += 1;
    }
    if i < octets.len() && octets[i] == b'.' {
        let point = i;
        i += 1;
        while i < octets.len() && octets[i].is_ascii_digit() {
            i += 1;
            chiffres += 1;
        }
        // "." seul n'est pas un nombre
        if chiffres == 0 {
            i = point;
        }
    }

    if chiffres == 0 {
        0
    } else {
        i
    }
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Const(c) => c.nom().to_string(),
            Tok::Var(v) => v.nom().to_string(),
            Tok::Fonc(f) => f.nom().to_string(),
            Tok::Op(op) => op.symbole().to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
