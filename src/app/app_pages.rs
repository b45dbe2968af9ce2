// Content area for each view

use super::app::DeckApp;
use super::views::{article_key, game_key, mod_details_key, mod_install_key, Game, ViewKind, GRID_COLUMNS};
use crate::ui::focus::{Focusable, FocusableResponse};
use crate::ui::theme::{self, ACCENT, TEXT_MUTED};

use eframe::egui::{self, Align, RichText, Ui, Vec2};
use egui_phosphor::regular as icons;

/// Bring a focused element into view after a key or gamepad move
fn reveal(focusable: &FocusableResponse, scroll: bool) {
    if scroll && focusable.focused {
        focusable.response.scroll_to_me(Some(Align::Center));
    }
}

fn game_card(ui: &mut Ui, game: &Game) {
    theme::card_frame().show(ui, |ui| {
        ui.set_min_size(Vec2::new(200.0, 90.0));
        ui.horizontal(|ui| {
            ui.label(RichText::new(game.title).size(17.0).strong());
            if game.favorite {
                ui.label(RichText::new(icons::STAR).color(ACCENT));
            }
        });
        ui.label(RichText::new(game.genre).color(TEXT_MUTED));
    });
}

fn button_label(ui: &mut Ui, icon: &str, text: &str) {
    theme::card_frame().show(ui, |ui| {
        ui.add(egui::Label::new(format!("{icon} {text}")).selectable(false));
    });
}

impl DeckApp {
    pub(super) fn display_content(&mut self, ui: &mut Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if self.view.pending_scroll != 0.0 {
                    ui.scroll_with_delta(Vec2::new(0.0, -self.view.pending_scroll));
                    self.view.pending_scroll = 0.0;
                }
                ui.heading(self.view.kind.title());
                ui.add_space(8.0);
                match self.view.kind {
                    ViewKind::Library => self.display_library(ui),
                    ViewKind::News => self.display_news(ui),
                    ViewKind::Mods => self.display_mods(ui),
                }
            });
    }

    fn display_library(&mut self, ui: &mut Ui) {
        let scroll = self.view.scroll_to_focus;
        let mut launched = None;

        egui::Grid::new("library_grid")
            .spacing(Vec2::splat(16.0))
            .show(ui, |ui| {
                for (i, game) in self.games.iter().enumerate() {
                    let card = Focusable::new(game_key(i))
                        .ring(&self.ring)
                        .show(ui, &mut self.view.focus, |ui| game_card(ui, game));
                    reveal(&card, scroll);
                    if card.activated {
                        launched = Some(i);
                    }
                    if (i + 1) % GRID_COLUMNS == 0 {
                        ui.end_row();
                    }
                }
            });

        if let Some(game) = launched.and_then(|i| self.games.get(i)) {
            tracing::info!("library: launching {}", game.title);
            self.status = format!("Launching {}", game.title);
        }
    }

    fn display_news(&mut self, ui: &mut Ui) {
        let scroll = self.view.scroll_to_focus;
        let mut opened = None;

        for (i, article) in self.articles.iter().enumerate() {
            let card = Focusable::new(article_key(i))
                .ring(&self.ring)
                .show(ui, &mut self.view.focus, |ui| {
                    theme::card_frame().show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.label(RichText::new(article.headline).size(17.0).strong());
                        ui.label(RichText::new(article.summary).color(TEXT_MUTED));
                    });
                });
            reveal(&card, scroll);
            if card.activated {
                opened = Some(article.headline);
            }
            ui.add_space(10.0);
        }

        if let Some(headline) = opened {
            self.status = format!("Opened \"{}\"", headline);
        }
    }

    fn display_mods(&mut self, ui: &mut Ui) {
        let scroll = self.view.scroll_to_focus;

        for i in 0..self.mods.len() {
            let (name, author, installed) = {
                let entry = &self.mods[i];
                (entry.name, entry.author, entry.installed)
            };

            theme::card_frame().show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(name).size(17.0).strong());
                        ui.label(RichText::new(format!("by {author}")).color(TEXT_MUTED));
                    });

                    ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                        let details = Focusable::new(mod_details_key(i))
                            .ring(&self.ring)
                            .on_click(|| self.status = format!("{name} by {author}"))
                            .show(ui, &mut self.view.focus, |ui| {
                                button_label(ui, icons::INFO, "Details")
                            });
                        reveal(&details, scroll);

                        let (icon, text) = match installed {
                            true => (icons::TRASH, "Uninstall"),
                            false => (icons::DOWNLOAD_SIMPLE, "Install"),
                        };
                        let install = Focusable::new(mod_install_key(i))
                            .ring(&self.ring)
                            .on_click(|| {
                                if let Some(entry) = self.mods.get_mut(i) {
                                    entry.installed = !entry.installed;
                                    tracing::info!("mods: {} installed={}", entry.name, entry.installed);
                                }
                            })
                            .show(ui, &mut self.view.focus, |ui| button_label(ui, icon, text));
                        reveal(&install, scroll);
                    });
                });
            });
            ui.add_space(10.0);
        }
    }
}
