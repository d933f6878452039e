//! TUI rendering for Folio using ratatui.

mod effects;
mod input;
mod overlays;
mod sections;
mod shared;
mod theme;

pub use input::{InputMsg, InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use folio_engine::{App, HitTarget, SectionSpan};
use folio_types::{HitBox, SectionId};

use crate::sections::SectionCtx;
use crate::shared::{display_width, fit};

/// Main draw function. Records the layout and click targets on `app` as a
/// side effect, so input handled before the next frame hits what is on
/// screen.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let screen = frame.area();
    let bg_block = Block::default().style(Style::default().bg(palette.bg));
    frame.render_widget(bg_block, screen);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Nav bar
            Constraint::Min(1),    // Page
            Constraint::Length(1), // Key hints
        ])
        .split(screen);

    let mut hits = Vec::new();
    draw_nav(frame, app, chunks[0], &palette, &mut hits);
    draw_page(frame, app, chunks[1], &palette, &glyphs, &mut hits);
    draw_hints(frame, app, chunks[2], &palette);

    overlays::draw_route_cover(frame, app, screen, &palette);
    overlays::draw_toast(frame, app, chunks[1], &palette);
    overlays::draw_intro(frame, app, &palette, &glyphs, &mut hits);

    app.set_hits(hits);
}

fn draw_nav(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    hits: &mut Vec<(HitBox, HitTarget)>,
) {
    let current = app.current_section();
    let mut spans = Vec::new();
    let mut x = area.x + 1;
    spans.push(Span::raw(" "));

    for section in SectionId::ALL {
        let label = format!(" {} ", section.title());
        let width = display_width(&label) as u16;
        if x + width > area.right() {
            break;
        }
        let style = if current == Some(section) {
            Style::default()
                .fg(palette.bg)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            styles::body(palette)
        };
        hits.push((HitBox::new(x, area.y, width, 1), HitTarget::Nav(section)));
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
        x += width + 1;
    }

    let location = app.location();
    let path = location.as_str();
    let used = usize::from(x.saturating_sub(area.x));
    let room = usize::from(area.width).saturating_sub(used + 1);
    if room > display_width(path) {
        spans.push(Span::raw(" ".repeat(room - display_width(path))));
        spans.push(Span::styled(path.to_string(), styles::muted(palette)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bg_panel)),
        area,
    );
}

/// Lay out the sections, report spans to the app, apply entrance masks and
/// draw the visible window.
fn draw_page(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    hits: &mut Vec<(HitBox, HitTarget)>,
) {
    let now = app.now();
    // Leave the last column for the scrollbar.
    let width = area.width.saturating_sub(1).max(1);
    let skill_fill = app.sections().entrance(SectionId::Skills, now).amount();
    let mut views = {
        let ctx = SectionCtx {
            app: &*app,
            palette,
            glyphs,
            width,
        };
        sections::build_all(&ctx, skill_fill)
    };

    let mut top = 0;
    let spans = views.each_ref().map(|view| {
        let span = SectionSpan {
            top,
            height: view.height(),
        };
        top += view.height();
        span
    });
    app.set_layout(spans, u32::from(area.height));

    let offset = app.scroll_offset();
    let visible_end = offset.saturating_add(u32::from(area.height));
    let mut lines: Vec<Line<'static>> = Vec::with_capacity(top as usize);
    for (view, span) in views.iter_mut().zip(spans) {
        let amount = app.sections().entrance(view.id, now).amount();
        view.mask_from(effects::revealed_rows(amount, view.lines.len()));
        for hit in &view.hits {
            let row = span.top + hit.row;
            if row < offset || row >= visible_end {
                continue;
            }
            let y = area.y + (row - offset) as u16;
            let x = area.x + hit.x;
            let w = hit.width.min(area.right().saturating_sub(x));
            hits.push((HitBox::new(x, y, w, 1), hit.target));
        }
        lines.append(&mut view.lines);
    }

    let scroll = u16::try_from(offset).unwrap_or(u16::MAX);
    frame.render_widget(
        Paragraph::new(lines).scroll((scroll, 0)),
        Rect { width, ..area },
    );

    let max_scroll = app.max_scroll();
    if max_scroll > 0 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .track_symbol(Some(glyphs.track))
            .thumb_symbol(glyphs.thumb)
            .style(Style::default().fg(palette.text_muted));
        let mut state = ScrollbarState::new(max_scroll as usize).position(offset as usize);
        frame.render_stateful_widget(scrollbar, area, &mut state);
    }
}

fn draw_hints(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let hints = if app.ui_options().ascii_only {
        "j/k scroll  PgUp/PgDn page  1-5 jump  h/l projects  c/e/p copy  q quit"
    } else {
        "↑/↓ scroll · PgUp/PgDn page · 1-5 jump · ←/→ projects · c/e/p copy · q quit"
    };
    let text = fit(hints, usize::from(area.width.saturating_sub(2)), "…");
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(text, styles::key_hint(palette)),
        ]))
        .style(Style::default().bg(palette.bg_panel)),
        area,
    );
}
