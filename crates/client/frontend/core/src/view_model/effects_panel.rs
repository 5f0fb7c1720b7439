//! Right-hand panel: the scrolled effect rows and the selected description.
use super::layout::{PANEL_X, ROW_HEIGHT, SLIDER_X, XPOS, YPOS};
use crate::render::{Asset, ColorPair, DrawCommand, ImageDraw, TextAlign, TextDraw};
use crate::services::effects::EffectList;
use crate::services::windowing::{ScrollbarView, WindowView, compute_window};

const DESCRIPTION_WIDTH: i32 = 208;
const DESCRIPTION_LINE_HEIGHT: i32 = 18;
/// Thumb body is tiled in slices of this height.
const THUMB_SLICE: i32 = 7;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectRowView {
    pub label: String,
    pub counter: String,
    pub highlighted: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectsPanelView {
    /// `None` for an empty effect list.
    pub window: Option<WindowView>,
    pub rows: Vec<EffectRowView>,
    pub description: Option<String>,
}

impl EffectsPanelView {
    pub fn new(effects: &EffectList, selected: usize) -> Self {
        if effects.is_empty() {
            return Self::default();
        }
        let window = compute_window(effects.len(), selected);
        let rows = effects.as_slice()[window.start..=window.end]
            .iter()
            .enumerate()
            .map(|(row, entry)| EffectRowView {
                label: entry.label.clone(),
                counter: entry.counter.clone(),
                highlighted: window.is_highlighted(row),
            })
            .collect();

        Self {
            window: Some(window),
            rows,
            description: effects.get(selected).map(|entry| entry.description.clone()),
        }
    }

    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let Some(window) = self.window else {
            return Vec::new();
        };

        let mut images = vec![
            ImageDraw::new(Asset::EffectsPanel, XPOS + 240, YPOS + 256),
            ImageDraw::new(Asset::SliderBase, SLIDER_X, YPOS + 132),
        ];
        if let Some(scrollbar) = window.scrollbar {
            push_scrollbar(&scrollbar, &mut images);
        }

        let mut texts = Vec::with_capacity(self.rows.len() * 2 + 1);
        for (row, effect) in self.rows.iter().enumerate() {
            let offset = row as i32 * ROW_HEIGHT;
            let label_y = YPOS + 138 + offset;
            let (cursor_row, label) = if effect.highlighted {
                let label = TextDraw::new(
                    &effect.label,
                    XPOS + 322,
                    label_y,
                    TextAlign::Center,
                    ColorPair::LIGHT,
                );
                (52, label.outlined())
            } else {
                let label = TextDraw::new(
                    &effect.label,
                    XPOS + 322,
                    label_y,
                    TextAlign::Center,
                    ColorPair::DARK,
                );
                (26, label)
            };
            images.push(
                ImageDraw::new(Asset::Cursor, PANEL_X, YPOS + 132 + offset)
                    .with_source(0, cursor_row, 218, 26),
            );
            texts.push(label);
            texts.push(TextDraw::new(
                &effect.counter,
                XPOS + 426,
                YPOS + 138 + offset,
                TextAlign::Center,
                ColorPair::LIGHT,
            ));
        }

        if let Some(description) = &self.description {
            texts.push(
                TextDraw::new(description, XPOS + 246, YPOS + 266, TextAlign::Left, ColorPair::DARK)
                    .wrapped(DESCRIPTION_WIDTH, DESCRIPTION_LINE_HEIGHT),
            );
        }

        images
            .into_iter()
            .map(DrawCommand::from)
            .chain(texts.into_iter().map(DrawCommand::from))
            .collect()
    }
}

fn push_scrollbar(scrollbar: &ScrollbarView, images: &mut Vec<ImageDraw>) {
    if scrollbar.show_up {
        images.push(ImageDraw::new(Asset::Slider, SLIDER_X, YPOS + 132).with_source(0, 0, 18, 19));
    }
    if scrollbar.show_down {
        images.push(ImageDraw::new(Asset::Slider, SLIDER_X, YPOS + 233).with_source(0, 19, 18, 19));
    }

    let y = scrollbar.thumb.offset;
    let height = scrollbar.thumb.height;
    images.push(ImageDraw::new(Asset::Slider, SLIDER_X, y).with_source(18, 0, 18, 4));

    let body = height - 2 - THUMB_SLICE;
    let mut slice = 0;
    while slice * THUMB_SLICE < body {
        let slice_height = (body - slice * THUMB_SLICE).min(THUMB_SLICE);
        images.push(
            ImageDraw::new(Asset::Slider, SLIDER_X, y + 2 + slice * THUMB_SLICE)
                .with_source(18, 2, 18, slice_height),
        );
        slice += 1;
    }

    images.push(
        ImageDraw::new(Asset::Slider, SLIDER_X, y + height - 13).with_source(18, 9, 18, 12),
    );
}
