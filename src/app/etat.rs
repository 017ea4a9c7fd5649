//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, affichage, erreur, historique,
//! mémoire, mode d'angle, variables) et offrir les actions des touches.
//!
//! Contrats :
//! - Aucun parsing ici : tout calcul passe par `noyau::eval_avec_demarche`.
//! - Le noyau ne garde rien : mode, x, y sont passés à chaque appel.
//! - Actions déterministes, sans effet de bord caché.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::noyau::erreur::ErreurEval;
use crate::noyau::{self, DemarcheNoyau, ErreurCalc, ModeAngle, Variables};

/// Nombre d’entrées gardées dans l’historique.
pub const HISTORIQUE_MAX: usize = 5;

/// Texte affiché (et gardé dans l’historique) en cas d’échec.
pub const TEXTE_ERREUR: &str = "Erreur";

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

impl From<DemarcheNoyau> for Demarche {
    fn from(d: DemarcheNoyau) -> Self {
        Self {
            jetons: d.jetons,
            rpn: d.rpn,
        }
    }
}

/// Partie persistée entre deux lancements (stockage eframe).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sauvegarde {
    pub degres: bool,
    pub x: f64,
    pub y: f64,
    pub memoire: f64,
    pub historique: Vec<(String, String)>,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub affichage: String, // dernier résultat (ou "Erreur")
    pub erreur: String,    // message d’erreur détaillé

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- collaborateurs du noyau (passés à chaque évaluation) ---
    pub mode: ModeAngle,
    pub variables: Variables,
    pub memoire: f64,
    pub historique: VecDeque<(String, String)>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            affichage: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            mode: ModeAngle::default(),
            variables: Variables::default(),
            memoire: 0.0,
            historique: VecDeque::with_capacity(HISTORIQUE_MAX),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Sauvegarde ------------------------ */

    pub fn depuis_sauvegarde(s: Sauvegarde) -> Self {
        let mut app = Self {
            mode: if s.degres {
                ModeAngle::Degres
            } else {
                ModeAngle::Radians
            },
            variables: Variables { x: s.x, y: s.y },
            memoire: s.memoire,
            ..Self::default()
        };
        for (expr, res) in s.historique {
            app.ajouter_historique(expr, res);
        }
        app
    }

    pub fn sauvegarde(&self) -> Sauvegarde {
        Sauvegarde {
            degres: self.mode == ModeAngle::Degres,
            x: self.variables.x,
            y: self.variables.y,
            memoire: self.memoire,
            historique: self.historique.iter().cloned().collect(),
        }
    }

    /* ------------------------ Évaluation ------------------------ */

    /// Appel unique au noyau, avec le contexte courant.
    fn calculer(&mut self) -> Result<f64, ErreurCalc> {
        let (v, d) = noyau::eval_avec_demarche(&self.entree, self.mode, self.variables)?;
        self.demarche = d.into();
        Ok(v)
    }

    /// "=" : résultat dans l’entrée + historique ; échec => entrée vidée, "Erreur" historisé.
    pub fn evaluer(&mut self) {
        let expr = self.entree.trim().to_string();
        if expr.is_empty() {
            return;
        }

        match self.calculer() {
            Ok(v) => {
                let texte = noyau::format_resultat(v);
                debug!(%expr, resultat = %texte, "évaluation");
                self.ajouter_historique(expr, texte.clone());
                self.set_resultat(texte);
            }
            Err(e) => {
                self.ajouter_historique(expr, TEXTE_ERREUR.to_string());
                self.set_erreur(&e);
            }
        }
    }

    fn ajouter_historique(&mut self, expr: String, resultat: String) {
        if self.historique.len() == HISTORIQUE_MAX {
            self.historique.pop_front();
        }
        self.historique.push_back((expr, resultat));
    }

    fn set_resultat(&mut self, texte: String) {
        self.erreur.clear();
        self.entree = texte.clone();
        self.affichage = texte;
        self.focus_entree = true;
    }

    /// Choix UX : l'entrée est vidée, la démarche aussi (non fiable).
    fn set_erreur(&mut self, e: &ErreurCalc) {
        debug!(genre = ?e.genre(), %e, "échec");
        self.erreur = e.to_string();
        self.affichage = TEXTE_ERREUR.to_string();
        self.entree.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /* ------------------------ Mémoire ------------------------ */

    /// MC
    pub fn memoire_effacer(&mut self) {
        self.memoire = 0.0;
    }

    /// MR : ajoute la valeur mémorisée au bout de l’entrée.
    /// Négative, elle est parenthésée : "2" + MR(-6) -> "2(-6)", pas "2-6".
    pub fn memoire_rappel(&mut self) {
        let texte = noyau::format_resultat(self.memoire);
        if self.memoire < 0.0 {
            self.entree.push_str(&format!("({texte})"));
        } else {
            self.entree.push_str(&texte);
        }
        self.focus_entree = true;
    }

    /// M+ : évalue l’entrée et l’ajoute à la mémoire.
    pub fn memoire_ajouter(&mut self) {
        self.memoire_cumuler(1.0);
    }

    /// M- : évalue l’entrée et la retranche de la mémoire.
    pub fn memoire_soustraire(&mut self) {
        self.memoire_cumuler(-1.0);
    }

    fn memoire_cumuler(&mut self, signe: f64) {
        match self.calculer() {
            Ok(v) => {
                // la mémoire reste finie
                let nouvelle = self.memoire + signe * v;
                if !nouvelle.is_finite() {
                    self.set_erreur(&ErreurCalc::from(ErreurEval::ResultatNonFini));
                    return;
                }
                self.memoire = nouvelle;
                info!(memoire = self.memoire, "mémoire mise à jour");
                self.set_resultat(noyau::format_resultat(v));
            }
            Err(e) => self.set_erreur(&e),
        }
    }

    /* ------------------------ Touches ------------------------ */

    /// DEG/RAD
    pub fn basculer_mode(&mut self) {
        self.mode = self.mode.basculer();
        info!(mode = self.mode.libelle(), "mode d'angle");
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// AC : entrée + affichage + erreur + démarche (mémoire et historique gardés).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.affichage.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Backspace “intelligent” : retire d’un coup les noms de fonctions ("sin(", "pi", etc.).
    pub fn backspace_entree(&mut self) {
        let fin = self.entree.trim_end().len();
        self.entree.truncate(fin);

        let motif = MOTIFS_EFFACABLES
            .iter()
            .find(|m| self.entree.ends_with(*m));
        match motif {
            Some(m) => {
                let n = self.entree.len() - m.len();
                self.entree.truncate(n);
            }
            None => {
                self.entree.pop();
            }
        }

        let fin = self.entree.trim_end().len();
        self.entree.truncate(fin);
        self.focus_entree = true;
    }

    /// Insertion d'un texte de touche (chiffre, opérateur, "sin(", "pi", ...).
    pub fn inserer(&mut self, texte: &str) {
        self.entree.push_str(texte);
        self.focus_entree = true;
    }
}

/// Du plus long au plus court : "asin(" avant "sin(".
const MOTIFS_EFFACABLES: &[&str] = &[
    "factorial(",
    "sqrt(",
    "asin(",
    "acos(",
    "atan(",
    "log(",
    "sin(",
    "cos(",
    "tan(",
    "ln(",
    "pi",
];
