//! Calculatrice scientifique
//!
//! - `noyau` : tokenize -> shunting-yard -> pile d'opérandes (f64), sans état
//! - `app`   : état + vue eframe (natif + web) qui appellent le noyau

pub mod app;
pub mod noyau;
