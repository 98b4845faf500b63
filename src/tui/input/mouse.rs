use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::app::App;

/// Pointer input. Hit areas come from the last rendered frame.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let (col, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.show_help {
                app.show_help = false;
            } else if app.lightbox.is_open() {
                click_lightbox(app, col, row);
                app.sync_contact_request();
            } else {
                click_page(app, col, row);
            }
        }
        MouseEventKind::ScrollDown => {
            if app.lightbox.is_open() {
                app.scroll_content(3);
            } else {
                app.move_cursor(1);
            }
        }
        MouseEventKind::ScrollUp => {
            if app.lightbox.is_open() {
                app.scroll_content(-3);
            } else {
                app.move_cursor(-1);
            }
        }
        _ => {}
    }
}

fn click_lightbox(app: &mut App, col: u16, row: u16) {
    let hits = &app.hits;
    if App::hit(hits.close, col, row) {
        app.lightbox.close();
    } else if App::hit(hits.prev, col, row) {
        app.lightbox.show_previous();
    } else if App::hit(hits.next, col, row) {
        app.lightbox.show_next();
    } else if App::hit(hits.call_to_action, col, row) {
        app.lightbox.contact();
    } else if let Some(index) = hits
        .media
        .iter()
        .find(|(area, _)| App::hit(Some(*area), col, row))
        .map(|(_, i)| *i)
    {
        app.lightbox.activate_media(index);
    } else if !App::hit(hits.modal, col, row) {
        // Outside the content area dismisses
        app.lightbox.close();
    }
}

fn click_page(app: &mut App, col: u16, row: u16) {
    if let Some(index) = app
        .hits
        .cards
        .iter()
        .find(|(area, _)| App::hit(Some(*area), col, row))
        .map(|(_, i)| *i)
    {
        app.open_index(index);
    }
}
