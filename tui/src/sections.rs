//! Builders for the five page sections.

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use folio_engine::{App, HitTarget};
use folio_types::{ContactKind, Project, Resume, SectionId, SkillGroup, TimelineEntry, UiOptions};

use crate::shared::{Action, SectionView, display_width, fit};
use crate::theme::{self, Glyphs, Palette, styles};

/// Everything a section builder reads.
pub(crate) struct SectionCtx<'a> {
    pub(crate) app: &'a App,
    pub(crate) palette: &'a Palette,
    pub(crate) glyphs: &'a Glyphs,
    pub(crate) width: u16,
}

impl SectionCtx<'_> {
    fn resume(&self) -> &'static Resume {
        self.app.resume()
    }

    fn options(&self) -> UiOptions {
        self.app.ui_options()
    }
}

/// Build every section in scroll order.
pub(crate) fn build_all(ctx: &SectionCtx<'_>, skill_fill: f32) -> [SectionView; 5] {
    [
        hero(ctx),
        projects(ctx),
        experience(ctx),
        skills(ctx, skill_fill),
        contact(ctx),
    ]
}

fn button(label: &str) -> String {
    format!("[ {label} ]")
}

fn section_header(view: &mut SectionView, ctx: &SectionCtx<'_>, title: &str, blurb: &str) {
    let palette = ctx.palette;
    view.blank();
    view.row(vec![Span::styled(
        title.to_string(),
        styles::heading(palette),
    )]);
    let rule = ctx.glyphs.rule.repeat(display_width(title));
    view.row(vec![Span::styled(rule, Style::default().fg(palette.primary))]);
    view.paragraph(blurb, styles::muted(palette), "");
    view.blank();
}

pub(crate) fn hero(ctx: &SectionCtx<'_>) -> SectionView {
    let SectionCtx {
        palette, glyphs, ..
    } = *ctx;
    let profile = ctx.resume().profile;
    let mut view = SectionView::new(SectionId::Hero, ctx.width);

    view.blank();
    view.row(vec![
        Span::styled(format!("{} ", glyphs.badge_dot), Style::default().fg(palette.primary)),
        Span::styled(
            fit(
                &format!("{} {} {}", profile.current.role, glyphs.bullet, profile.current.company),
                view.inner_width().saturating_sub(2),
                "…",
            ),
            styles::body(palette),
        ),
    ]);
    view.blank();
    view.paragraph(profile.name, styles::heading(palette), "");
    view.paragraph(
        &format!("{} {} {}", profile.headline, glyphs.bullet, profile.location()),
        styles::body(palette),
        "",
    );
    view.blank();
    view.paragraph(profile.summary, styles::body(palette), "");
    view.blank();
    view.actions(
        vec![
            Action::new(
                button("View Projects"),
                styles::button_primary(palette),
                Some(HitTarget::Nav(SectionId::Projects)),
            ),
            Action::new(
                button("Contact Me"),
                styles::button_secondary(palette),
                Some(HitTarget::Nav(SectionId::Contact)),
            ),
        ],
        2,
    );
    view.blank();

    let contacts = profile.contacts;
    let chip = styles::link(palette);
    view.actions(
        vec![
            Action::new("Quick contact:", styles::muted(palette), None),
            Action::new(contacts.email, chip, Some(HitTarget::Copy(ContactKind::Email))),
            Action::new("GitHub", chip, None),
            Action::new("LinkedIn", chip, None),
            Action::new(contacts.phone, chip, Some(HitTarget::Copy(ContactKind::Phone))),
            Action::new(
                format!("LINE: {}", contacts.line),
                chip,
                Some(HitTarget::Nav(SectionId::Contact)),
            ),
        ],
        2,
    );
    view.blank();

    view.row(vec![
        Span::styled("Now  ", styles::muted(palette)),
        Span::styled(profile.current.period.to_string(), styles::body(palette)),
    ]);
    view.row(vec![Span::styled("What I build", styles::heading(palette))]);
    view.paragraph(
        "Enterprise web apps with strong UX, realtime data, clean architecture, and testing.",
        styles::muted(palette),
        "",
    );
    for highlight in profile.current.highlights {
        let bullet = format!("{} ", glyphs.bullet);
        let hang = " ".repeat(display_width(&bullet));
        view.paragraph_with(
            highlight,
            styles::body(palette),
            &bullet,
            &hang,
            Style::default().fg(palette.primary),
        );
    }
    view.blank();
    for stat in profile.quick_stats {
        view.row(vec![
            Span::styled(format!("{:<10}", stat.label), styles::muted(palette)),
            Span::styled(stat.value.to_string(), styles::body(palette)),
        ]);
    }
    view.blank();
    view.paragraph(
        "Tip: scroll down, Projects & Timeline are interactive.",
        styles::muted(palette),
        "",
    );
    view.blank();
    view
}

fn project_card(ctx: &SectionCtx<'_>, project: &Project, index: usize, view: &mut SectionView) {
    let SectionCtx {
        palette, glyphs, ..
    } = *ctx;
    let total = ctx.resume().projects.len();
    let (bg, fg, accent) = if palette.themed_cards {
        (
            theme::hex(project.theme.bg, palette.bg_panel),
            theme::hex(project.theme.fg, palette.text_primary),
            theme::hex(project.theme.accent, palette.primary),
        )
    } else {
        (palette.bg_panel, palette.text_primary, palette.primary)
    };
    let pill_fg = if palette.themed_cards {
        theme::text_on(project.theme.accent, palette.bg)
    } else {
        palette.bg
    };
    let fill = Style::default().bg(bg);
    let text = Style::default().fg(fg).bg(bg);
    let inner = view.inner_width();
    let pad = " ";

    view.card_row(Vec::new(), fill);
    view.card_row(
        vec![
            Span::styled(pad, fill),
            Span::styled(
                format!(" {} ", project.primary_badge()),
                Style::default().fg(pill_fg).bg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}/{}", index + 1, total), text),
        ],
        fill,
    );
    view.card_row(Vec::new(), fill);
    for row in crate::shared::wrap(project.title, inner.saturating_sub(2)) {
        view.card_row(
            vec![Span::styled(pad, fill), Span::styled(row, text.add_modifier(Modifier::BOLD))],
            fill,
        );
    }
    for row in crate::shared::wrap(project.subtitle, inner.saturating_sub(2)) {
        view.card_row(vec![Span::styled(pad, fill), Span::styled(row, text)], fill);
    }
    let meta = format!("{} {} {}", project.company, glyphs.bullet, project.period);
    view.card_row(
        vec![
            Span::styled(pad, fill),
            Span::styled(fit(&meta, inner.saturating_sub(2), "…"), text.fg(accent)),
        ],
        fill,
    );
    view.card_row(Vec::new(), fill);
    let bullet = format!("{} ", glyphs.bullet);
    let hang = " ".repeat(display_width(&bullet));
    for highlight in project.highlights {
        let width = inner.saturating_sub(2 + display_width(&bullet));
        for (i, row) in crate::shared::wrap(highlight, width).into_iter().enumerate() {
            let prefix = if i == 0 { bullet.clone() } else { hang.clone() };
            view.card_row(
                vec![
                    Span::styled(pad, fill),
                    Span::styled(prefix, text.fg(accent)),
                    Span::styled(row, text),
                ],
                fill,
            );
        }
    }
    view.card_row(Vec::new(), fill);
    let stack = format!("Stack: {}", project.stack.join(" · "));
    for row in crate::shared::wrap(&stack, inner.saturating_sub(2)) {
        view.card_row(vec![Span::styled(pad, fill), Span::styled(row, text)], fill);
    }
    view.card_row(Vec::new(), fill);
}

pub(crate) fn projects(ctx: &SectionCtx<'_>) -> SectionView {
    let SectionCtx {
        palette, glyphs, ..
    } = *ctx;
    let projects = ctx.resume().projects;
    let carousel = ctx.app.carousel();
    let mut view = SectionView::new(SectionId::Projects, ctx.width);

    section_header(
        &mut view,
        ctx,
        "Projects Showcase",
        "Interactive showcase. Click the controls or press h / l to navigate.",
    );

    // Cards are padded to the tallest one so switching never shifts the page.
    let card_top = view.lines.len();
    let tallest = projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let mut probe = SectionView::new(SectionId::Projects, ctx.width);
            project_card(ctx, project, i, &mut probe);
            probe.lines.len()
        })
        .max()
        .unwrap_or(0);
    if let Some(project) = projects.get(carousel.active()) {
        project_card(ctx, project, carousel.active(), &mut view);
    }
    view.pad_to(card_top + tallest);
    view.blank();

    let mut controls = vec![Action::new(
        format!("{} Previous", glyphs.prev),
        styles::button_secondary(palette),
        Some(HitTarget::CarouselPrev),
    )];
    for i in 0..projects.len() {
        let (glyph, style) = if i == carousel.active() {
            (glyphs.dot_active, Style::default().fg(palette.primary))
        } else {
            (glyphs.dot, styles::muted(palette))
        };
        controls.push(Action::new(glyph, style, Some(HitTarget::CarouselDot(i))));
    }
    controls.push(Action::new(
        format!("Next {}", glyphs.next),
        styles::button_secondary(palette),
        Some(HitTarget::CarouselNext),
    ));
    view.actions(controls, 1);
    view.blank();
    view
}

fn timeline_entry(ctx: &SectionCtx<'_>, entry: &TimelineEntry, view: &mut SectionView) {
    let SectionCtx {
        palette, glyphs, ..
    } = *ctx;
    let accent = if palette.themed_cards {
        theme::hex(entry.theme.accent, palette.primary)
    } else {
        palette.primary
    };
    let track = format!("{}  ", glyphs.timeline_track);
    let track_style = Style::default().fg(palette.border);

    view.row(vec![
        Span::styled(format!("{} ", glyphs.timeline_node), Style::default().fg(accent)),
        Span::styled(entry.company.to_string(), styles::heading(palette)),
        Span::styled(format!("  {}", entry.date), styles::muted(palette)),
    ]);
    view.paragraph_with(entry.role, Style::default().fg(accent), &track, &track, track_style);
    let bullet = format!("{track}{} ", glyphs.bullet);
    let hang = format!("{track}  ");
    for highlight in entry.highlights {
        view.paragraph_with(highlight, styles::body(palette), &bullet, &hang, track_style);
    }
    if !entry.tags.is_empty() {
        let tags: Vec<String> = entry.tags.iter().map(|tag| format!("#{tag}")).collect();
        view.paragraph_with(&tags.join(" "), styles::muted(palette), &track, &track, track_style);
    }
    view.row(vec![Span::styled(glyphs.timeline_track, track_style)]);
}

pub(crate) fn experience(ctx: &SectionCtx<'_>) -> SectionView {
    let mut view = SectionView::new(SectionId::Experience, ctx.width);
    section_header(
        &mut view,
        ctx,
        "Experience Timeline",
        "My professional journey through different roles and companies.",
    );
    for entry in ctx.resume().timeline {
        timeline_entry(ctx, entry, &mut view);
    }
    view.blank();
    view
}

/// A `width`-cell bar for `level` percent, scaled by `fill` in `[0, 1]`.
pub(crate) fn skill_bar(level: u8, fill: f32, width: usize, glyphs: &Glyphs) -> (String, String) {
    let target = f32::from(level.min(100)) / 100.0 * fill.clamp(0.0, 1.0);
    let full = ((target * width as f32).round() as usize).min(width);
    (glyphs.bar_full.repeat(full), glyphs.bar_empty.repeat(width - full))
}

fn skill_group(ctx: &SectionCtx<'_>, group: &SkillGroup, fill: f32, view: &mut SectionView) {
    let SectionCtx {
        palette, glyphs, ..
    } = *ctx;
    let icon = theme::category_icon(group.category, ctx.options());
    view.row(vec![
        Span::styled(format!("{icon} "), Style::default().fg(palette.accent)),
        Span::styled(group.category.label(), styles::heading(palette)),
    ]);

    let name_width = group
        .items
        .iter()
        .map(|item| display_width(item.name))
        .max()
        .unwrap_or(0)
        .min(view.inner_width() / 2);
    // name, gap, bar, " 100%"
    let bar_width = view
        .inner_width()
        .saturating_sub(2 + name_width + 1 + 5)
        .clamp(4, 24);
    for item in &group.items {
        let (full, empty) = skill_bar(item.level, fill, bar_width, glyphs);
        let name = fit(item.name, name_width, "…");
        let pad = " ".repeat(name_width.saturating_sub(display_width(&name)));
        view.row(vec![
            Span::raw("  "),
            Span::styled(format!("{name}{pad} "), styles::body(palette)),
            Span::styled(full, Style::default().fg(palette.success)),
            Span::styled(empty, Style::default().fg(palette.border)),
            Span::styled(format!(" {:>3}%", item.level), styles::muted(palette)),
        ]);
    }
    view.blank();
}

pub(crate) fn skills(ctx: &SectionCtx<'_>, fill: f32) -> SectionView {
    let mut view = SectionView::new(SectionId::Skills, ctx.width);
    section_header(
        &mut view,
        ctx,
        "Skills & Technologies",
        "Tools and technologies I use to build reliable products.",
    );
    for group in ctx.resume().skills.groups() {
        skill_group(ctx, &group, fill, &mut view);
    }
    view
}

pub(crate) fn contact(ctx: &SectionCtx<'_>) -> SectionView {
    let SectionCtx {
        palette, glyphs, ..
    } = *ctx;
    let profile = ctx.resume().profile;
    let mut view = SectionView::new(SectionId::Contact, ctx.width);

    section_header(&mut view, ctx, "Contact", "Web Developer / Software Developer");

    for (label, value) in [
        ("Role", "Full-Stack / UI Motion"),
        ("Strength", "Realtime + Enterprise"),
        ("Location", profile.location()),
    ] {
        view.row(vec![
            Span::styled(format!("{label:<10}"), styles::muted(palette)),
            Span::styled(value.to_string(), styles::body(palette)),
        ]);
    }
    view.blank();

    view.row(vec![Span::styled("Direct channels", styles::heading(palette))]);
    view.blank();
    for item in profile.contacts.items() {
        let label = Action::new(format!("{:<9}", item.label), styles::muted(palette), None);
        let value = Action::new(item.value, styles::body(palette), None);
        let tail = match item.copy {
            Some(_) => Action::new(
                glyphs.copy,
                styles::button_secondary(palette),
                Some(HitTarget::Copy(item.kind)),
            ),
            None => Action::new(
                format!("{} {}", glyphs.link, item.href),
                styles::link(palette),
                None,
            ),
        };
        view.actions(vec![label, value, tail], 2);
    }
    view.blank();
    view.row(vec![
        Span::styled(format!("{} ", glyphs.location), Style::default().fg(palette.primary)),
        Span::styled(profile.location().to_string(), styles::body(palette)),
    ]);
    view.blank();
    view.paragraph(
        "Press c, e or p to copy LINE, email or phone.",
        styles::key_hint(palette),
        "",
    );
    view.blank();
    view
}
