//! Full-screen overlays drawn above the page: the intro, the route cover and
//! the copy toast.

use std::time::Instant;

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use unicode_segmentation::UnicodeSegmentation;

use folio_engine::{App, HitTarget};
use folio_types::{HitBox, IntroPhase, UiOptions};

use crate::effects;
use crate::shared::{display_width, fit};
use crate::theme::{Glyphs, Palette, loading_dots, styles};

const INTRO_CARD_WIDTH: u16 = 64;

pub(crate) const TAKE_A_LOOK: &str = "Take a look";
pub(crate) const SKIP: &str = "Skip";

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn fill(buf: &mut Buffer, area: Rect, color: Color) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.reset();
                cell.set_bg(color);
            }
        }
    }
}

/// Draw a single centered line inside `area` at its vertical middle.
fn centered_label(buf: &mut Buffer, area: Rect, text: &str, style: Style) {
    if area.height == 0 {
        return;
    }
    let text = fit(text, usize::from(area.width), "…");
    let width = display_width(&text) as u16;
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height / 2;
    buf.set_string(x, y, text, style);
}

fn greeting_badge(options: UiOptions) -> &'static str {
    if options.ascii_only {
        "Hi, recruiter"
    } else {
        "Hi, recruiter 👋"
    }
}

fn preparing_label(options: UiOptions) -> &'static str {
    if options.ascii_only {
        "Preparing something amazing"
    } else {
        "✨ Preparing something amazing"
    }
}

/// The intro card and, while it exits, the ripple and curtain. Records the
/// two dismiss buttons as hits.
pub(crate) fn draw_intro(
    frame: &mut Frame,
    app: &App,
    palette: &Palette,
    glyphs: &Glyphs,
    hits: &mut Vec<(HitBox, HitTarget)>,
) {
    let phase = app.intro_phase();
    if phase.is_closed() {
        return;
    }
    let now = app.now();
    let options = app.ui_options();
    let timings = app.timings();
    let area = frame.area();
    let intro = app.intro();
    let mounted_at = intro.and_then(folio_engine::IntroSequencer::mounted_at);

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Style::default().bg(palette.bg)), area);

    let card = centered(area, INTRO_CARD_WIDTH.min(area.width.saturating_sub(4)).max(1), 12);
    let inner_width = usize::from(card.width.saturating_sub(4)).max(1);

    let title = format!("Hi, I'm {}", app.resume().profile.name);
    let graphemes: Vec<&str> = title.graphemes(true).collect();
    let shown = effects::letters_shown(mounted_at, now, graphemes.len(), options.reduced_motion);
    let revealed: String = graphemes[..shown].concat();
    let hidden_width = display_width(&graphemes[shown..].concat());

    let bar_width = inner_width.min(48) as u16;
    let filled = if phase == IntroPhase::Pending {
        0
    } else {
        effects::progress_cells(mounted_at, now, timings.intro_progress, bar_width)
    };
    let dots = match phase {
        IntroPhase::Pending => "...",
        _ => loading_dots(now.saturating_duration_since(mounted_at.unwrap_or(now)), options),
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", greeting_badge(options)),
            Style::default()
                .fg(palette.text_primary)
                .bg(palette.bg_raised)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(fit(&revealed, inner_width, "…"), styles::heading(palette)),
            Span::raw(" ".repeat(hidden_width.min(inner_width))),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "Let's take a look at my portfolio here.",
            styles::body(palette),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(
                glyphs.bar_full.repeat(usize::from(filled)),
                Style::default().fg(palette.primary),
            ),
            Span::styled(
                glyphs.bar_empty.repeat(usize::from(bar_width - filled)),
                Style::default().fg(palette.border),
            ),
        ]),
        Line::from(Span::styled(
            format!("{}{dots}", preparing_label(options)),
            styles::muted(palette),
        )),
    ];
    let text_area = Rect {
        height: card.height.saturating_sub(3),
        ..card
    };
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        text_area,
    );

    // Action row, centered under the text.
    let take = format!("[ {TAKE_A_LOOK} {} ]", glyphs.arrow_right);
    let skip = format!("[ {SKIP} ]");
    let take_w = display_width(&take) as u16;
    let skip_w = display_width(&skip) as u16;
    let gap = 2;
    let row_w = take_w + gap + skip_w;
    let y = card.bottom().saturating_sub(2);
    if y < area.bottom() {
        let x = card.x + card.width.saturating_sub(row_w) / 2;
        let buf = frame.buffer_mut();
        buf.set_string(x, y, &take, styles::button_primary(palette));
        buf.set_string(x + take_w + gap, y, &skip, styles::button_secondary(palette));
        hits.push((HitBox::new(x, y, take_w, 1), HitTarget::IntroTakeLook));
        hits.push((HitBox::new(x + take_w + gap, y, skip_w, 1), HitTarget::IntroSkip));
    }

    if let (Some(origin), Some(exit_started)) =
        (phase.ripple_origin(), intro.and_then(folio_engine::IntroSequencer::exit_started))
    {
        draw_exit(frame.buffer_mut(), area, origin, exit_started, now, app, palette);
    }
}

fn draw_exit(
    buf: &mut Buffer,
    area: Rect,
    origin: folio_types::RippleOrigin,
    exit_started: Instant,
    now: Instant,
    app: &App,
    palette: &Palette,
) {
    let timings = app.timings();
    let center = effects::ripple_center(origin, area);
    let radius = effects::ripple_radius(center, exit_started, now, timings.intro_ripple, area);
    if radius > 0.0 {
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let point = folio_types::CellPoint::new(x, y);
                if effects::cell_distance(center, point) <= radius
                    && let Some(cell) = buf.cell_mut((x, y))
                {
                    cell.set_bg(palette.bg_raised);
                }
            }
        }
    }

    if let Some(curtain) = effects::curtain(exit_started, now, timings.intro_curtain, area) {
        fill(buf, curtain, palette.curtain);
        let label_row = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        if curtain.intersects(label_row) {
            let label = format!(
                "Loading portfolio{}",
                loading_dots(now.saturating_duration_since(exit_started), app.ui_options())
            );
            centered_label(
                buf,
                label_row,
                &label,
                Style::default().fg(palette.text_primary).bg(palette.curtain),
            );
        }
    }
}

/// The route cover, sliding over `area` while a navigation settles.
pub(crate) fn draw_route_cover(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let state = app.route_state();
    let Some(started) = app.route_phase_started() else {
        return;
    };
    let Some(cover) = effects::route_cover(state.phase, started, app.now(), app.timings().route_wipe, area)
    else {
        return;
    };
    let buf = frame.buffer_mut();
    fill(buf, cover, palette.bg_raised);
    let label_row = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    if cover.intersects(label_row) {
        let label = if app.ui_options().ascii_only {
            "Loading next scene..."
        } else {
            "Loading next scene…"
        };
        centered_label(
            buf,
            label_row,
            label,
            Style::default()
                .fg(palette.text_secondary)
                .bg(palette.bg_raised),
        );
    }
}

/// The copy notice in the bottom-right corner of `area`.
pub(crate) fn draw_toast(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let Some(toast) = app.toast() else {
        return;
    };
    let max_inner = area.width.saturating_sub(6);
    let message = fit(&toast.message, usize::from(max_inner), "…");
    let width = (display_width(&message) as u16 + 4).min(area.width);
    let height = 3.min(area.height);
    if width == 0 || height < 3 {
        return;
    }
    let rect = Rect {
        x: area.right().saturating_sub(width + 1),
        y: area.bottom().saturating_sub(height),
        width,
        height,
    };
    let border = if app.ui_options().ascii_only {
        BorderType::Plain
    } else {
        BorderType::Rounded
    };
    let color = if toast.message.starts_with("Copied") {
        palette.success
    } else {
        palette.highlight
    };
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(palette.text_primary),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(palette.bg_panel)),
        ),
        rect,
    );
}
