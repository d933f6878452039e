//! Text measurement and the row-oriented section builder shared by every
//! section renderer.
//!
//! Sections are laid out as pre-wrapped lines, one terminal row each, so the
//! renderer knows exactly which row every click target lands on.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use folio_engine::HitTarget;
use folio_types::SectionId;

/// Columns left blank on each side of section content.
pub(crate) const SIDE_MARGIN: u16 = 2;

#[must_use]
pub(crate) fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Greedy word wrap on unicode word boundaries. Words wider than `width`
/// are split between graphemes.
#[must_use]
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_word_bounds() {
        let word_width = display_width(word);
        if current_width + word_width <= width {
            current.push_str(word);
            current_width += word_width;
            continue;
        }
        if word.trim().is_empty() {
            // Break at the space instead of carrying it to the next row.
            rows.push(std::mem::take(&mut current).trim_end().to_string());
            current_width = 0;
            continue;
        }
        if !current.trim().is_empty() {
            rows.push(std::mem::take(&mut current).trim_end().to_string());
            current_width = 0;
        }
        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }
        for grapheme in word.graphemes(true) {
            let g_width = display_width(grapheme);
            if current_width + g_width > width && !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push_str(grapheme);
            current_width += g_width;
        }
    }
    let last = current.trim_end();
    if !last.is_empty() || rows.is_empty() {
        rows.push(last.to_string());
    }
    rows
}

/// Cut `text` to at most `width` columns, marking the cut with `ellipsis`.
#[must_use]
pub(crate) fn fit(text: &str, width: usize, ellipsis: &str) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    let budget = width.saturating_sub(display_width(ellipsis));
    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let g_width = display_width(grapheme);
        if used + g_width > budget {
            break;
        }
        out.push_str(grapheme);
        used += g_width;
    }
    out.push_str(ellipsis);
    out
}

/// Click target on a section row, relative to the section's first row and
/// the content area's left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RowHit {
    pub(crate) row: u32,
    pub(crate) x: u16,
    pub(crate) width: u16,
    pub(crate) target: HitTarget,
}

/// A labelled piece of an action row.
pub(crate) struct Action {
    pub(crate) label: String,
    pub(crate) style: Style,
    pub(crate) target: Option<HitTarget>,
}

impl Action {
    pub(crate) fn new(label: impl Into<String>, style: Style, target: Option<HitTarget>) -> Self {
        Self {
            label: label.into(),
            style,
            target,
        }
    }
}

/// One section's rows plus the click targets on them.
pub(crate) struct SectionView {
    pub(crate) id: SectionId,
    pub(crate) lines: Vec<Line<'static>>,
    pub(crate) hits: Vec<RowHit>,
    margin: u16,
    inner: usize,
}

impl SectionView {
    pub(crate) fn new(id: SectionId, width: u16) -> Self {
        let margin = if width > SIDE_MARGIN * 4 { SIDE_MARGIN } else { 0 };
        Self {
            id,
            lines: Vec::new(),
            hits: Vec::new(),
            margin,
            inner: usize::from(width.saturating_sub(margin * 2)).max(1),
        }
    }

    /// Usable columns between the margins.
    pub(crate) fn inner_width(&self) -> usize {
        self.inner
    }

    pub(crate) fn height(&self) -> u32 {
        self.lines.len() as u32
    }

    fn next_row(&self) -> u32 {
        self.height()
    }

    pub(crate) fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Push a row made of `spans`, indented by the side margin.
    pub(crate) fn row(&mut self, spans: Vec<Span<'static>>) {
        let mut all = Vec::with_capacity(spans.len() + 1);
        if self.margin > 0 {
            all.push(Span::raw(" ".repeat(usize::from(self.margin))));
        }
        all.extend(spans);
        self.lines.push(Line::from(all));
    }

    /// Push a row and fill the remainder of the inner width with `fill`'s
    /// background, so the row reads as part of a card.
    pub(crate) fn card_row(&mut self, spans: Vec<Span<'static>>, fill: Style) {
        let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        let mut spans = spans;
        if used < self.inner {
            spans.push(Span::styled(" ".repeat(self.inner - used), fill));
        }
        self.row(spans);
    }

    /// Wrap `text` to the inner width, prefixing every row with `indent`.
    pub(crate) fn paragraph(&mut self, text: &str, style: Style, indent: &str) {
        self.paragraph_with(text, style, indent, indent, Style::default());
    }

    /// Like [`SectionView::paragraph`] with a distinct first-row prefix, e.g.
    /// a bullet followed by a hanging indent.
    pub(crate) fn paragraph_with(
        &mut self,
        text: &str,
        style: Style,
        first: &str,
        rest: &str,
        prefix_style: Style,
    ) {
        let prefix_width = display_width(first).max(display_width(rest));
        let width = self.inner.saturating_sub(prefix_width).max(1);
        for (i, row) in wrap(text, width).into_iter().enumerate() {
            let prefix = if i == 0 { first } else { rest };
            self.row(vec![
                Span::styled(prefix.to_string(), prefix_style),
                Span::styled(row, style),
            ]);
        }
    }

    /// Lay `actions` out left to right separated by `gap` columns, wrapping
    /// to a new row when one does not fit. Records a hit for each target.
    pub(crate) fn actions(&mut self, actions: Vec<Action>, gap: usize) {
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut used = 0;
        for action in actions {
            let label = fit(&action.label, self.inner, "…");
            let width = display_width(&label);
            let sep = if spans.is_empty() { 0 } else { gap };
            if !spans.is_empty() && used + sep + width > self.inner {
                self.row(std::mem::take(&mut spans));
                used = 0;
            } else if sep > 0 {
                spans.push(Span::raw(" ".repeat(sep)));
                used += sep;
            }
            if let Some(target) = action.target {
                self.hits.push(RowHit {
                    row: self.next_row(),
                    x: self.margin + used as u16,
                    width: width as u16,
                    target,
                });
            }
            spans.push(Span::styled(label, action.style));
            used += width;
        }
        if !spans.is_empty() {
            self.row(spans);
        }
    }

    /// Blank out rows from `visible` onwards and drop their hits. Layout
    /// height is unchanged.
    pub(crate) fn mask_from(&mut self, visible: usize) {
        for line in self.lines.iter_mut().skip(visible) {
            *line = Line::default();
        }
        let visible = visible as u32;
        self.hits.retain(|hit| hit.row < visible);
    }

    /// Pad with blank rows up to `height`.
    pub(crate) fn pad_to(&mut self, height: usize) {
        while self.lines.len() < height {
            self.blank();
        }
    }
}
