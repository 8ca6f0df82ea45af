//! Static HTML export of the gallery.
//!
//! Renders one self-contained page: a grid of photo cards (image, prompt,
//! dimensions, and a collapsible detail block) next to a panel describing
//! the current form session: dimensions, lock, and the preset labels as
//! they read under the current orientation.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All interpolated text (prompts in particular) is escaped.

use maud::{DOCTYPE, Markup, html};

use crate::dimensions::{RatioPreset, preset_dimensions};
use crate::gallery::{Gallery, PhotoRecord};
use crate::session::SavedConfig;

const CSS: &str = include_str!("../static/gallery.css");

/// Render the full gallery page.
pub fn render_gallery(gallery: &Gallery, session: &SavedConfig) -> Markup {
    let content = html! {
        h1 { "GenImg" }
        div.layout {
            main {
                @if gallery.is_empty() {
                    p.empty { "No images yet." }
                } @else {
                    div.photo-grid {
                        @for photo in gallery.photos() {
                            (render_photo_card(photo))
                        }
                    }
                }
            }
            (render_settings(session))
        }
    };
    base_document("GenImg", content)
}

/// Renders the base HTML document structure
fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (CSS) }
            }
            body {
                (content)
            }
        }
    }
}

fn render_photo_card(photo: &PhotoRecord) -> Markup {
    html! {
        figure.photo-card id={ "photo-" (photo.id) } {
            img src=(photo.src) alt=(photo.prompt) width=(photo.width) height=(photo.height) loading="lazy";
            figcaption {
                p.prompt { (photo.prompt) }
                p.dims { (photo.width) " × " (photo.height) }
                details {
                    summary { "Details" }
                    dl {
                        @if let Some(negative) = photo.negative_prompt.as_deref().filter(|n| !n.is_empty()) {
                            dt { "Negative prompt" }
                            dd { (negative) }
                        }
                        dt { "File" }
                        dd { (photo.filename) }
                        dt { "Created" }
                        dd.meta { (photo.created_at) }
                        dt { "Reuse settings" }
                        dd { code { "genimg gallery copy " (photo.id) } }
                    }
                }
            }
        }
    }
}

fn render_settings(session: &SavedConfig) -> Markup {
    let state = session.solver_state();
    html! {
        aside.settings {
            h2 { "Current settings" }
            dl {
                dt { "Prompt" }
                dd {
                    @if session.prompt.trim().is_empty() {
                        span.empty { "(none)" }
                    } @else {
                        (session.prompt)
                    }
                }
                @if !session.negative_prompt.is_empty() {
                    dt { "Negative prompt" }
                    dd { (session.negative_prompt) }
                }
                dt { "Size" }
                dd.dims { (state.pair.to_string()) }
                dt { "Aspect lock" }
                dd {
                    @match state.aspect.active_ratio() {
                        Some(ratio) => { "locked at " (ratio.to_string()) },
                        None => { "off" },
                    }
                }
            }
            h3 { "Presets" }
            ul.presets {
                @for preset in RatioPreset::ALL {
                    @let (w, h) = preset_dimensions(preset.display_ratio(state.orientation));
                    li title={ (w) " × " (h) } { (preset.display_label(state.orientation)) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DefaultsConfig;
    use crate::test_helpers::{sample_gallery, sample_photo};

    fn session() -> SavedConfig {
        SavedConfig::from_defaults(&DefaultsConfig::default())
    }

    #[test]
    fn document_has_doctype_and_css() {
        let html = render_gallery(&Gallery::default(), &session()).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("--gap"));
    }

    #[test]
    fn empty_gallery_message() {
        let html = render_gallery(&Gallery::default(), &session()).into_string();
        assert!(html.contains("No images yet."));
    }

    #[test]
    fn cards_in_gallery_order() {
        let html = render_gallery(&sample_gallery(), &session()).into_string();
        let first = html.find("photo-3").unwrap();
        let last = html.find("photo-1").unwrap();
        assert!(first < last);
        assert!(html.contains("genimg gallery copy 2"));
    }

    #[test]
    fn prompt_is_escaped() {
        let mut photo = sample_photo(5);
        photo.prompt = "<script>alert(1)</script>".into();
        let gallery = Gallery::from_photos(vec![photo]);
        let html = render_gallery(&gallery, &session()).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn negative_prompt_only_when_present() {
        let html = render_photo_card(&sample_photo(1)).into_string();
        assert!(!html.contains("Negative prompt"));
        let html = render_photo_card(&sample_photo(2)).into_string();
        assert!(html.contains("Negative prompt"));
    }

    #[test]
    fn settings_show_lock_and_vertical_presets() {
        let mut config = session();
        config.width = 768;
        config.height = 1024;
        config.aspect_locked = true;
        config.is_vertical = true;

        let html = render_settings(&config).into_string();
        assert!(html.contains("768 × 1024"));
        assert!(html.contains("locked at 3:4"));
        assert!(html.contains("9:16"));
        assert!(!html.contains(">16:9<"));
    }

    #[test]
    fn settings_unlocked() {
        let html = render_settings(&session()).into_string();
        assert!(html.contains("off"));
        assert!(html.contains("(none)"));
        assert!(html.contains(">16:9<"));
    }
}
