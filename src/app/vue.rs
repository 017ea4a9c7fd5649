// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus), Escape efface (app.rs)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Pavé scientifique, mémoire, DEG/RAD, x/y, historique, démarche
//
// Aucun calcul ici : chaque action délègue à etat.rs.

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                self.ui_contexte(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);

                ui.add_space(8.0);
                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        // Écran : dernier résultat
        Self::champ_monospace(ui, "affichage_out", &self.affichage, 1);

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2sin(30) + sqrt(16), factorial(5)/x")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter évalue seulement si le champ est focus (ou vient de le perdre via Enter)
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.evaluer();
        }

        if !self.erreur.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_contexte(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            let resp = ui
                .add_sized([56.0, 30.0], egui::Button::new(self.mode.libelle()))
                .on_hover_text("Bascule degrés / radians");
            if resp.clicked() {
                self.basculer_mode();
            }

            ui.separator();

            ui.label("x =");
            ui.add(egui::DragValue::new(&mut self.variables.x).speed(0.1));
            ui.label("y =");
            ui.add(egui::DragValue::new(&mut self.variables.y).speed(0.1));

            ui.separator();

            self.bouton_action(ui, "MC", "Mémoire à zéro", Action::MemoireEffacer);
            self.bouton_action(ui, "MR", "Rappelle la mémoire", Action::MemoireRappel);
            self.bouton_action(ui, "M+", "Ajoute l’entrée à la mémoire", Action::MemoireAjouter);
            self.bouton_action(ui, "M-", "Retranche l’entrée de la mémoire", Action::MemoireSoustraire);
            ui.monospace(format!("M = {}", crate::noyau::format_resultat(self.memoire)));
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_scientifique")
            .num_columns(6)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for &(label, to_insert) in ligne.iter() {
                        match to_insert {
                            "" => {
                                ui.label("");
                            }
                            _ => self.bouton_insert(ui, label, to_insert),
                        }
                    }
                    ui.end_row();
                }

                self.bouton_action(ui, "C", "Efface l’entrée", Action::ClearEntree);
                self.bouton_action(ui, "AC", "Efface entrée + écran + démarche", Action::ResetTotal);
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                self.bouton_action(ui, "=", "Évalue", Action::Evaluer);
                ui.end_row();
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.label("Historique :");
        let mut lignes = String::new();
        for (expr, res) in &self.historique {
            if !lignes.is_empty() {
                lignes.push('\n');
            }
            lignes.push_str(&format!("{expr} = {res}"));
        }
        Self::champ_monospace(ui, "historique_out", &lignes, super::etat::HISTORIQUE_MAX);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
                Action::Evaluer => self.evaluer(),
                Action::MemoireEffacer => self.memoire_effacer(),
                Action::MemoireRappel => self.memoire_rappel(),
                Action::MemoireAjouter => self.memoire_ajouter(),
                Action::MemoireSoustraire => self.memoire_soustraire(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([56.0, 30.0], egui::Button::new(label));
        if resp.clicked() {
            self.inserer(to_insert);
        }
    }
}

/// (libellé, texte inséré) ; "" = case vide.
const PAVE: &[&[(&str, &str)]] = &[
    &[("sin", "sin("), ("cos", "cos("), ("tan", "tan("), ("(", "("), (")", ")"), ("^", "^")],
    &[("asin", "asin("), ("acos", "acos("), ("atan", "atan("), ("7", "7"), ("8", "8"), ("9", "9")],
    &[("log", "log("), ("ln", "ln("), ("√", "sqrt("), ("4", "4"), ("5", "5"), ("6", "6")],
    &[("n!", "factorial("), ("π", "pi"), ("e", "e"), ("1", "1"), ("2", "2"), ("3", "3")],
    &[("x", "x"), ("y", "y"), ("%", "%"), ("0", "0"), (".", "."), ("/", "/")],
    &[("", ""), ("", ""), ("", ""), ("+", "+"), ("-", "-"), ("*", "*")],
];

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ResetTotal,
    Backspace,
    Evaluer,
    MemoireEffacer,
    MemoireRappel,
    MemoireAjouter,
    MemoireSoustraire,
}
